//! Airport and flight-route network.
//!
//! [`RouteNetwork`] keeps airports in an [`AvlTree`] ordered by code and the
//! scheduled flights in a directed [`AdjacencyListGraph`] keyed by code.
//! Codes are normalised to upper case on the way in, so lookups are
//! case-insensitive.

use std::cmp::Ordering;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::graph::{AdjacencyListGraph, Graph, SearchOrder};
use crate::route::{find_shortest_route, CostMetric, EdgeCost};
use crate::tree::{AvlTree, Tree};

/// Similarity floor for "did you mean" suggestions.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Maximum number of suggestions attached to an unknown-code error.
const SUGGESTION_LIMIT: usize = 3;

/// Airport identified by its code. Ordering and equality use the code only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Airport {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
}

impl Airport {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            city: String::new(),
            country: String::new(),
        }
    }

    pub fn located(mut self, city: impl Into<String>, country: impl Into<String>) -> Self {
        self.city = city.into();
        self.country = country.into();
        self
    }
}

impl PartialEq for Airport {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Airport {}

impl PartialOrd for Airport {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Airport {
    fn cmp(&self, other: &Self) -> Ordering {
        self.code.cmp(&other.code)
    }
}

/// Cost dimensions of a single flight.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RouteWeight {
    pub duration_minutes: u32,
    pub distance_km: f64,
    pub price: f64,
}

impl EdgeCost for RouteWeight {
    fn cost(&self, metric: CostMetric) -> f64 {
        match metric {
            CostMetric::Duration => f64::from(self.duration_minutes),
            CostMetric::Distance => self.distance_km,
            CostMetric::Price => self.price,
        }
    }
}

/// Direct flight between two airports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightRoute {
    pub origin: String,
    pub destination: String,
    #[serde(flatten)]
    pub weight: RouteWeight,
}

/// Serialized shape of a route network.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NetworkDefinition {
    #[serde(default)]
    pub airports: Vec<Airport>,
    #[serde(default)]
    pub routes: Vec<FlightRoute>,
}

/// Itinerary produced by [`RouteNetwork::plan_route`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlan {
    pub origin: String,
    pub destination: String,
    pub metric: CostMetric,
    pub legs: Vec<FlightRoute>,
    /// Intermediate airports between origin and destination.
    pub stops: usize,
    /// Sum of leg durations, wide enough for any number of `u32` legs.
    pub total_duration_minutes: u64,
    pub total_distance_km: f64,
    pub total_price: f64,
    /// Sum of the minimised dimension.
    pub total_cost: f64,
}

impl RoutePlan {
    /// Airport codes visited, origin first.
    pub fn path(&self) -> Vec<&str> {
        std::iter::once(self.origin.as_str())
            .chain(self.legs.iter().map(|leg| leg.destination.as_str()))
            .collect()
    }
}

/// Airports indexed by code plus the directed flights between them.
#[derive(Default)]
pub struct RouteNetwork {
    airports: AvlTree<Airport>,
    routes: AdjacencyListGraph<String, RouteWeight>,
}

impl RouteNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a network, rejecting duplicate airports and routes that reference
    /// unknown codes. Repeated routes keep the first weight.
    pub fn from_definition(definition: NetworkDefinition) -> Result<Self> {
        let mut network = Self::new();
        for airport in definition.airports {
            network.add_airport(airport)?;
        }
        for route in definition.routes {
            let (origin, destination) = (route.origin.clone(), route.destination.clone());
            if !network.add_route(route)? {
                warn!(%origin, %destination, "ignoring repeated route");
            }
        }
        debug!(
            airports = network.airports.len(),
            routes = network.route_count(),
            "built route network"
        );
        Ok(network)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let definition: NetworkDefinition = serde_json::from_str(json)?;
        Self::from_definition(definition)
    }

    /// Read a JSON network definition from disk.
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading route network");
        let json = fs::read_to_string(path).map_err(|source| Error::NetworkLoad {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Snapshot the network in its serialized shape, airports in code order.
    pub fn to_definition(&self) -> NetworkDefinition {
        let airports: Vec<Airport> = self.airports().into_iter().cloned().collect();
        let routes = airports
            .iter()
            .flat_map(|airport| self.routes_from_code(&airport.code))
            .collect();
        NetworkDefinition { airports, routes }
    }

    pub fn add_airport(&mut self, mut airport: Airport) -> Result<()> {
        airport.code = normalize_code(&airport.code);
        let code = airport.code.clone();
        if !self.airports.add(airport) {
            return Err(Error::DuplicateAirport { code });
        }
        self.routes.add_vertex(code)?;
        Ok(())
    }

    /// Remove an airport and every flight to or from it.
    pub fn remove_airport(&mut self, code: &str) -> Result<Airport> {
        let stored = self.airport(code)?.clone();
        self.routes.remove_vertex(&stored.code)?;
        self.airports.remove(&stored)
    }

    pub fn airport(&self, code: &str) -> Result<&Airport> {
        let code = normalize_code(code);
        self.airports
            .find_by(|stored| code.as_str().cmp(stored.code.as_str()))
            .ok_or_else(|| Error::UnknownAirport {
                suggestions: self.suggestions(&code),
                code,
            })
    }

    /// Airports in code order.
    pub fn airports(&self) -> Vec<&Airport> {
        self.airports.in_order().unwrap_or_default()
    }

    /// Add a flight; returns `false` when one already links the two airports.
    pub fn add_route(&mut self, route: FlightRoute) -> Result<bool> {
        let origin = self.airport(&route.origin)?.code.clone();
        let destination = self.airport(&route.destination)?.code.clone();
        self.routes
            .add_edge_weight(&origin, &destination, route.weight)
    }

    pub fn remove_route(&mut self, origin: &str, destination: &str) -> Result<()> {
        let origin = self.airport(origin)?.code.clone();
        let destination = self.airport(destination)?.code.clone();
        self.routes.remove_edge(&origin, &destination)
    }

    /// Flights leaving `code`, in the order they were added.
    pub fn routes_from(&self, code: &str) -> Result<Vec<FlightRoute>> {
        let code = &self.airport(code)?.code;
        Ok(self.routes_from_code(code))
    }

    pub fn route_count(&self) -> usize {
        self.routes.edge_count()
    }

    /// Cheapest itinerary from `from` to `to` under `metric`.
    pub fn plan_route(&self, from: &str, to: &str, metric: CostMetric) -> Result<RoutePlan> {
        let origin = self.airport(from)?.code.clone();
        let destination = self.airport(to)?.code.clone();

        let route = find_shortest_route(&self.routes, &origin, &destination, metric)?.ok_or_else(
            || Error::RouteNotFound {
                start: origin.clone(),
                goal: destination.clone(),
            },
        )?;

        let mut legs = Vec::with_capacity(route.hop_count());
        for pair in route.path.windows(2) {
            let weight = *self.routes.weight(&pair[0], &pair[1])?;
            legs.push(FlightRoute {
                origin: pair[0].clone(),
                destination: pair[1].clone(),
                weight,
            });
        }

        debug!(%origin, %destination, %metric, legs = legs.len(), "planned route");
        Ok(RoutePlan {
            stops: legs.len().saturating_sub(1),
            total_duration_minutes: legs
                .iter()
                .map(|leg| u64::from(leg.weight.duration_minutes))
                .sum(),
            total_distance_km: legs.iter().map(|leg| leg.weight.distance_km).sum(),
            total_price: legs.iter().map(|leg| leg.weight.price).sum(),
            total_cost: route.total_cost,
            origin,
            destination,
            metric,
            legs,
        })
    }

    /// Airports reachable from `from`, in depth- or breadth-first visiting order.
    pub fn reachable(&self, from: &str, order: SearchOrder) -> Result<Vec<&Airport>> {
        let origin = self.airport(from)?.code.clone();
        let visited = self.routes.search(&origin, order)?;
        visited
            .into_iter()
            .map(|code| self.airport(code))
            .collect()
    }

    fn routes_from_code(&self, code: &str) -> Vec<FlightRoute> {
        self.routes
            .edges(code)
            .into_iter()
            .flatten()
            .map(|edge| FlightRoute {
                origin: code.to_string(),
                destination: edge.destination.clone(),
                weight: edge.weight,
            })
            .collect()
    }

    fn suggestions(&self, code: &str) -> Vec<String> {
        let mut scored: Vec<(f64, &str)> = self
            .airports()
            .into_iter()
            .map(|airport| {
                (
                    strsim::jaro_winkler(code, &airport.code),
                    airport.code.as_str(),
                )
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(SUGGESTION_LIMIT)
            .map(|(_, code)| code.to_string())
            .collect()
    }
}

fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weight(duration_minutes: u32, distance_km: f64, price: f64) -> RouteWeight {
        RouteWeight {
            duration_minutes,
            distance_km,
            price,
        }
    }

    fn route(origin: &str, destination: &str, weight: RouteWeight) -> FlightRoute {
        FlightRoute {
            origin: origin.to_string(),
            destination: destination.to_string(),
            weight,
        }
    }

    fn triangle() -> RouteNetwork {
        let mut network = RouteNetwork::new();
        for code in ["LHR", "CDG", "FRA"] {
            network.add_airport(Airport::new(code, code)).unwrap();
        }
        network
            .add_route(route("LHR", "FRA", weight(100, 650.0, 300.0)))
            .unwrap();
        network
            .add_route(route("LHR", "CDG", weight(70, 350.0, 90.0)))
            .unwrap();
        network
            .add_route(route("CDG", "FRA", weight(70, 450.0, 80.0)))
            .unwrap();
        network
    }

    #[test]
    fn long_itineraries_total_past_u32_minutes() {
        let mut network = RouteNetwork::new();
        for code in ["AAA", "BBB", "CCC"] {
            network.add_airport(Airport::new(code, code)).unwrap();
        }
        network
            .add_route(route("AAA", "BBB", weight(3_000_000_000, 1.0, 1.0)))
            .unwrap();
        network
            .add_route(route("BBB", "CCC", weight(3_000_000_000, 1.0, 1.0)))
            .unwrap();

        let plan = network.plan_route("AAA", "CCC", CostMetric::Price).unwrap();
        assert_eq!(plan.total_duration_minutes, 6_000_000_000);
        assert_eq!(plan.stops, 1);
    }

    #[test]
    fn metric_selects_the_minimised_dimension() {
        let network = triangle();

        let fastest = network
            .plan_route("LHR", "FRA", CostMetric::Duration)
            .unwrap();
        assert_eq!(fastest.path(), vec!["LHR", "FRA"]);
        assert_eq!(fastest.stops, 0);
        assert_eq!(fastest.total_cost, 100.0);

        let cheapest = network.plan_route("lhr", "fra", CostMetric::Price).unwrap();
        assert_eq!(cheapest.path(), vec!["LHR", "CDG", "FRA"]);
        assert_eq!(cheapest.stops, 1);
        assert_eq!(cheapest.total_duration_minutes, 140);
        assert_eq!(cheapest.total_distance_km, 800.0);
        assert_eq!(cheapest.total_price, 170.0);
        assert_eq!(cheapest.total_cost, 170.0);
    }

    #[test]
    fn duplicate_and_unknown_airports_are_rejected() {
        let mut network = triangle();
        let err = network.add_airport(Airport::new("lhr", "Heathrow")).unwrap_err();
        assert!(matches!(err, Error::DuplicateAirport { ref code } if code == "LHR"));

        let err = network.airport("FRX").unwrap_err();
        match err {
            Error::UnknownAirport { code, suggestions } => {
                assert_eq!(code, "FRX");
                assert_eq!(suggestions.first().map(String::as_str), Some("FRA"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_route_is_reported() {
        let network = triangle();
        let err = network
            .plan_route("FRA", "LHR", CostMetric::Distance)
            .unwrap_err();
        assert!(matches!(err, Error::RouteNotFound { .. }));
    }

    #[test]
    fn removing_an_airport_drops_its_routes() {
        let mut network = triangle();
        assert_eq!(network.route_count(), 3);

        let removed = network.remove_airport("cdg").unwrap();
        assert_eq!(removed.code, "CDG");
        assert_eq!(network.route_count(), 1);
        assert_eq!(
            network
                .airports()
                .iter()
                .map(|airport| airport.code.as_str())
                .collect::<Vec<_>>(),
            vec!["FRA", "LHR"]
        );
        assert!(network.remove_airport("CDG").unwrap_err().is_not_found());
    }

    #[test]
    fn reachable_lists_each_airport_once() {
        let network = triangle();
        let codes = |order| {
            network
                .reachable("LHR", order)
                .unwrap()
                .into_iter()
                .map(|airport| airport.code.clone())
                .collect::<Vec<_>>()
        };
        assert_eq!(codes(SearchOrder::DepthFirst), vec!["LHR", "FRA", "CDG"]);
        assert_eq!(codes(SearchOrder::BreadthFirst), vec!["LHR", "FRA", "CDG"]);
    }

    #[test]
    fn definition_round_trips_through_json() {
        let network = triangle();
        let json = serde_json::to_string(&network.to_definition()).unwrap();
        let rebuilt = RouteNetwork::from_json_str(&json).unwrap();
        assert_eq!(rebuilt.route_count(), 3);
        assert_eq!(
            rebuilt.routes_from("LHR").unwrap(),
            network.routes_from("LHR").unwrap()
        );
    }
}
