//! Synchronous executor for `TodoClient` requests, backed by `ureq`.

use ureq::Agent;

use crate::client::TodoClient;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{AddTodo, Todo};

/// Talks to a running todo server over real HTTP.
///
/// Status interpretation stays in `TodoClient`; `ureq` is configured not to
/// turn 4xx/5xx into errors so those responses reach the parsers as data.
#[derive(Clone)]
pub struct BlockingClient {
    client: TodoClient,
    agent: Agent,
}

impl BlockingClient {
    pub fn new(base_url: &str) -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self {
            client: TodoClient::new(base_url),
            agent,
        }
    }

    pub fn status(&self) -> Result<String, ApiError> {
        let resp = self.execute(self.client.build_status())?;
        self.client.parse_status(resp)
    }

    pub fn list(&self) -> Result<Vec<Todo>, ApiError> {
        let resp = self.execute(self.client.build_list_todos())?;
        self.client.parse_list_todos(resp)
    }

    pub fn get(&self, id: u64) -> Result<Todo, ApiError> {
        let resp = self.execute(self.client.build_get_todo(id))?;
        self.client.parse_get_todo(resp)
    }

    pub fn add(&self, input: &AddTodo) -> Result<Todo, ApiError> {
        let resp = self.execute(self.client.build_add_todo(input)?)?;
        self.client.parse_add_todo(resp)
    }

    pub fn finish(&self, id: u64) -> Result<(), ApiError> {
        let resp = self.execute(self.client.build_finish_todo(id))?;
        self.client.parse_finish_todo(resp)
    }

    /// Run one round-trip. Only failures to get any response are errors here.
    pub fn execute(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        tracing::debug!(method = ?req.method, path = %req.path, "sending request");

        let result = match (req.method, req.body) {
            (HttpMethod::Get, _) => self.agent.get(&req.path).call(),
            (HttpMethod::Post, Some(body)) => self
                .agent
                .post(&req.path)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Post, None) => self.agent.post(&req.path).send_empty(),
        };
        let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        tracing::debug!(status, "received response");
        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_base_url_is_a_transport_error() {
        let client = BlockingClient::new("8081");
        assert!(matches!(client.list(), Err(ApiError::Transport(_))));
        assert!(matches!(client.get(1), Err(ApiError::Transport(_))));
        assert!(matches!(client.finish(1), Err(ApiError::Transport(_))));
        assert!(matches!(
            client.add(&AddTodo::new("lol", "kek")),
            Err(ApiError::Transport(_))
        ));
    }
}
