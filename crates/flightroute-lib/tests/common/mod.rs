//! Shared fixture helpers for integration tests.

use std::path::PathBuf;

use flightroute_lib::{Airport, RouteNetwork};

/// Path to the sample network used across tests and benches.
#[allow(dead_code)]
pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/sample_network.json")
}

#[allow(dead_code)]
pub fn sample_network() -> RouteNetwork {
    RouteNetwork::load(&fixture_path()).expect("fixture loads")
}

#[allow(dead_code)]
pub fn codes<'a>(airports: impl IntoIterator<Item = &'a Airport>) -> Vec<&'a str> {
    airports
        .into_iter()
        .map(|airport| airport.code.as_str())
        .collect()
}
