//! Output formatting for planned routes, airport listings and traversals.
//!
//! Every renderer writes to a caller-supplied [`Write`] so the binary can
//! target stdout while tests capture into a buffer.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use flightroute_lib::{Airport, RoutePlan, SearchOrder};

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Render a planned itinerary.
pub fn render_plan<W: Write>(
    out: &mut W,
    plan: &RoutePlan,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => write_json(out, plan),
        OutputFormat::Text => {
            writeln!(
                out,
                "Route from {} to {} by {} ({}):",
                plan.origin,
                plan.destination,
                plan.metric,
                pluralize(plan.stops, "stop", "stops"),
            )?;
            for leg in &plan.legs {
                writeln!(
                    out,
                    "  {} -> {}  {}  {:.0} km  {:.2}",
                    leg.origin,
                    leg.destination,
                    format_minutes(u64::from(leg.weight.duration_minutes)),
                    leg.weight.distance_km,
                    leg.weight.price,
                )?;
            }
            writeln!(
                out,
                "Total: {}  {:.0} km  {:.2}",
                format_minutes(plan.total_duration_minutes),
                plan.total_distance_km,
                plan.total_price,
            )
        }
    }
}

/// Render airports, one per line in text mode.
pub fn render_airports<W: Write>(
    out: &mut W,
    airports: &[&Airport],
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => write_json(out, &airports),
        OutputFormat::Text => {
            for airport in airports {
                write!(out, "{}  {}", airport.code, airport.name)?;
                match (airport.city.is_empty(), airport.country.is_empty()) {
                    (false, false) => writeln!(out, " ({}, {})", airport.city, airport.country)?,
                    (false, true) => writeln!(out, " ({})", airport.city)?,
                    (true, false) => writeln!(out, " ({})", airport.country)?,
                    (true, true) => writeln!(out)?,
                }
            }
            Ok(())
        }
    }
}

#[derive(Serialize)]
struct TraversalOutput<'a> {
    origin: &'a str,
    order: String,
    visited: Vec<&'a str>,
}

/// Render the airports visited by a traversal, origin first.
pub fn render_traversal<W: Write>(
    out: &mut W,
    order: SearchOrder,
    visited: &[&Airport],
    format: OutputFormat,
) -> io::Result<()> {
    let codes: Vec<&str> = visited.iter().map(|airport| airport.code.as_str()).collect();
    match format {
        OutputFormat::Json => write_json(
            out,
            &TraversalOutput {
                origin: codes.first().copied().unwrap_or_default(),
                order: order.to_string(),
                visited: codes,
            },
        ),
        OutputFormat::Text => writeln!(out, "{}: {}", order, codes.join(" -> ")),
    }
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

/// Format minutes as `XhYYm`, or `Ym` under an hour.
pub fn format_minutes(minutes: u64) -> String {
    if minutes < 60 {
        format!("{}m", minutes)
    } else {
        format!("{}h{:02}m", minutes / 60, minutes % 60)
    }
}

fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flightroute_lib::{CostMetric, FlightRoute, RouteNetwork, RouteWeight};

    fn network() -> RouteNetwork {
        let mut network = RouteNetwork::new();
        network
            .add_airport(Airport::new("LHR", "Heathrow").located("London", "United Kingdom"))
            .unwrap();
        network.add_airport(Airport::new("CDG", "Charles de Gaulle")).unwrap();
        network.add_airport(Airport::new("FRA", "Frankfurt")).unwrap();
        for (origin, destination, minutes, km, price) in [
            ("LHR", "CDG", 75, 344.0, 120.0),
            ("CDG", "FRA", 70, 479.0, 80.0),
        ] {
            network
                .add_route(FlightRoute {
                    origin: origin.to_string(),
                    destination: destination.to_string(),
                    weight: RouteWeight {
                        duration_minutes: minutes,
                        distance_km: km,
                        price,
                    },
                })
                .unwrap();
        }
        network
    }

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buffer = Vec::new();
        f(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn minutes_are_split_into_hours() {
        assert_eq!(format_minutes(45), "45m");
        assert_eq!(format_minutes(60), "1h00m");
        assert_eq!(format_minutes(145), "2h25m");
        assert_eq!(format_minutes(6_000_000_000), "100000000h00m");
    }

    #[test]
    fn text_plan_lists_each_leg_and_totals() {
        let network = network();
        let plan = network.plan_route("lhr", "FRA", CostMetric::Price).unwrap();
        let text = render(|out| render_plan(out, &plan, OutputFormat::Text));

        assert!(text.starts_with("Route from LHR to FRA by price (1 stop):"));
        assert!(text.contains("  LHR -> CDG  1h15m  344 km  120.00"));
        assert!(text.contains("  CDG -> FRA  1h10m  479 km  80.00"));
        assert!(text.trim_end().ends_with("Total: 2h25m  823 km  200.00"));
    }

    #[test]
    fn json_plan_is_machine_readable() {
        let network = network();
        let plan = network.plan_route("LHR", "FRA", CostMetric::Duration).unwrap();
        let json = render(|out| render_plan(out, &plan, OutputFormat::Json));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["metric"], "duration");
        assert_eq!(value["legs"].as_array().map(Vec::len), Some(2));
        assert_eq!(value["total_duration_minutes"], 145);
    }

    #[test]
    fn airports_render_with_optional_location() {
        let network = network();
        let text = render(|out| render_airports(out, &network.airports(), OutputFormat::Text));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "CDG  Charles de Gaulle",
                "FRA  Frankfurt",
                "LHR  Heathrow (London, United Kingdom)",
            ]
        );
    }

    #[test]
    fn traversal_renders_in_visit_order() {
        let network = network();
        let visited = network.reachable("LHR", SearchOrder::BreadthFirst).unwrap();
        let text = render(|out| {
            render_traversal(out, SearchOrder::BreadthFirst, &visited, OutputFormat::Text)
        });
        assert_eq!(text, "bfs: LHR -> CDG -> FRA\n");

        let json = render(|out| {
            render_traversal(out, SearchOrder::DepthFirst, &visited, OutputFormat::Json)
        });
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["origin"], "LHR");
        assert_eq!(value["order"], "dfs");
    }
}
