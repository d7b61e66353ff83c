mod common;

use std::fs;

use flightroute_lib::{
    Airport, CostMetric, Error, FlightRoute, NetworkDefinition, RouteNetwork, RouteWeight,
    SearchOrder,
};
use tempfile::tempdir;

use common::{codes, sample_network};

#[test]
fn fixture_loads_every_airport_and_route() {
    let network = sample_network();
    assert_eq!(network.airports().len(), 9);
    assert_eq!(network.route_count(), 13);
    assert_eq!(
        codes(network.airports()),
        vec!["AMS", "CDG", "DXB", "FCO", "FRA", "JFK", "LHR", "MAD", "SYD"]
    );
    let heathrow = network.airport("lhr").expect("case-insensitive lookup");
    assert_eq!(heathrow.city, "London");
}

#[test]
fn plans_minimise_the_requested_metric() {
    let network = sample_network();

    let fastest = network
        .plan_route("LHR", "FCO", CostMetric::Duration)
        .expect("route exists");
    assert_eq!(fastest.path(), vec!["LHR", "FRA", "FCO"]);
    assert_eq!(fastest.total_cost, 210.0);

    let cheapest = network
        .plan_route("LHR", "FCO", CostMetric::Price)
        .expect("route exists");
    assert_eq!(cheapest.path(), vec!["LHR", "AMS", "FRA", "FCO"]);
    assert_eq!(cheapest.stops, 2);
    assert_eq!(cheapest.total_price, 295.0);
    assert_eq!(cheapest.total_duration_minutes, 255);
    assert_eq!(cheapest.total_distance_km, 1694.0);

    let shortest = network
        .plan_route("LHR", "FCO", CostMetric::Distance)
        .expect("route exists");
    assert_eq!(shortest.total_distance_km, 1612.0);
}

#[test]
fn connection_can_beat_a_direct_flight() {
    let network = sample_network();
    let direct = network
        .plan_route("LHR", "JFK", CostMetric::Duration)
        .unwrap();
    assert_eq!(direct.path(), vec!["LHR", "JFK"]);

    let connecting = network.plan_route("LHR", "JFK", CostMetric::Price).unwrap();
    assert_eq!(connecting.path(), vec!["LHR", "AMS", "JFK"]);
    assert_eq!(connecting.total_cost, 575.0);
}

#[test]
fn isolated_airport_has_no_route() {
    let network = sample_network();
    let err = network
        .plan_route("LHR", "SYD", CostMetric::Duration)
        .unwrap_err();
    assert_eq!(err.to_string(), "no route found between LHR and SYD");
}

#[test]
fn unknown_code_suggests_close_matches() {
    let network = sample_network();
    let err = network
        .plan_route("LHX", "FCO", CostMetric::Duration)
        .unwrap_err();
    let message = err.to_string();
    assert!(message.contains("unknown airport code: LHX"), "{message}");
    assert!(message.contains("LHR"), "{message}");
}

#[test]
fn reachability_follows_route_direction() {
    let network = sample_network();
    assert_eq!(
        codes(network.reachable("LHR", SearchOrder::BreadthFirst).unwrap()),
        vec!["LHR", "CDG", "AMS", "FRA", "JFK", "MAD", "FCO", "DXB"]
    );
    assert_eq!(
        codes(network.reachable("LHR", SearchOrder::DepthFirst).unwrap()),
        vec!["LHR", "CDG", "FRA", "FCO", "DXB", "MAD", "AMS", "JFK"]
    );
    assert_eq!(
        codes(network.reachable("MAD", SearchOrder::DepthFirst).unwrap()),
        vec!["MAD", "FCO", "DXB"]
    );
    assert_eq!(
        codes(network.reachable("SYD", SearchOrder::BreadthFirst).unwrap()),
        vec!["SYD"]
    );
}

#[test]
fn editing_the_network_updates_plans() {
    let mut network = sample_network();
    network
        .add_airport(Airport::new("mxp", "Malpensa").located("Milan", "Italy"))
        .unwrap();
    assert!(network
        .add_route(FlightRoute {
            origin: "LHR".to_string(),
            destination: "MXP".to_string(),
            weight: RouteWeight {
                duration_minutes: 115,
                distance_km: 980.0,
                price: 60.0,
            },
        })
        .unwrap());
    assert!(network
        .add_route(FlightRoute {
            origin: "MXP".to_string(),
            destination: "FCO".to_string(),
            weight: RouteWeight {
                duration_minutes: 70,
                distance_km: 480.0,
                price: 40.0,
            },
        })
        .unwrap());

    let plan = network.plan_route("LHR", "FCO", CostMetric::Price).unwrap();
    assert_eq!(plan.path(), vec!["LHR", "MXP", "FCO"]);

    network.remove_route("MXP", "FCO").unwrap();
    let plan = network.plan_route("LHR", "FCO", CostMetric::Price).unwrap();
    assert_eq!(plan.path(), vec!["LHR", "AMS", "FRA", "FCO"]);

    let removed = network.remove_airport("FRA").unwrap();
    assert_eq!(removed.name, "Frankfurt am Main");
    let plan = network.plan_route("LHR", "FCO", CostMetric::Price).unwrap();
    assert_eq!(plan.path(), vec!["LHR", "CDG", "MAD", "FCO"]);
    assert!(network.routes_from("AMS").unwrap().iter().all(|r| r.destination != "FRA"));
}

#[test]
fn load_reports_missing_files_and_bad_json() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("absent.json");
    let err = RouteNetwork::load(&missing).err().expect("missing file fails");
    assert!(matches!(err, Error::NetworkLoad { .. }));

    let broken = dir.path().join("broken.json");
    fs::write(&broken, "{ \"airports\": [").unwrap();
    let err = RouteNetwork::load(&broken).err().expect("bad json fails");
    assert!(matches!(err, Error::Json(_)));
}

#[test]
fn routes_to_unknown_airports_are_rejected() {
    let definition = NetworkDefinition {
        airports: vec![Airport::new("LHR", "Heathrow")],
        routes: vec![FlightRoute {
            origin: "LHR".to_string(),
            destination: "CDG".to_string(),
            weight: RouteWeight::default(),
        }],
    };
    let err = RouteNetwork::from_definition(definition).err().expect("unknown destination");
    assert!(matches!(err, Error::UnknownAirport { ref code, .. } if code == "CDG"));
}
