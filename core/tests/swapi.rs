//! Smoke test against the public Star Wars API.
//!
//! Needs outbound network access, so it is ignored by default:
//! `cargo test -p todo-core --test swapi -- --ignored`

use serde::Deserialize;

const BASE_URL: &str = "https://swapi.dev/api";

#[derive(Debug, Deserialize)]
struct Page<T> {
    results: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct Planet {
    name: String,
    population: String,
}

#[derive(Debug, Deserialize)]
struct Person {
    name: String,
    gender: String,
}

fn fetch<T: serde::de::DeserializeOwned>(path: &str) -> Page<T> {
    let mut response = ureq::get(&format!("{BASE_URL}/{path}"))
        .call()
        .expect("request to swapi failed");
    assert_eq!(response.status().as_u16(), 200);
    let body = response.body_mut().read_to_string().unwrap();
    serde_json::from_str(&body).unwrap()
}

#[test]
#[ignore = "needs network access"]
fn planets_endpoint() {
    let page: Page<Planet> = fetch("planets");
    assert!(!page.results.is_empty(), "expected non-empty results");

    let planet = &page.results[0];
    assert_eq!(planet.name, "Tatooine");
    assert_eq!(planet.population, "200000");
}

#[test]
#[ignore = "needs network access"]
fn people_endpoint() {
    let page: Page<Person> = fetch("people");
    assert!(!page.results.is_empty(), "expected non-empty results");

    assert!(page.results.iter().any(|p| p.name == "Luke Skywalker"));
    let luke = &page.results[0];
    assert_eq!(luke.name, "Luke Skywalker");
    assert_eq!(luke.gender, "male");
}
