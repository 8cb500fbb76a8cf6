//! Console rendering of trip plans.

use std::fmt::Write;

use crate::domain::{StationId, format_clock};
use crate::fare::FareRules;
use crate::network::Network;
use crate::planner::{TripOutcome, TripPlan};

const RULE: &str = "==========================================================";

/// Display name of a station, falling back to its id.
fn name<'a>(network: &'a Network, id: &'a StationId) -> &'a str {
    network
        .station(id)
        .map(|s| s.name.as_str())
        .unwrap_or_else(|| id.as_str())
}

/// Station list shown before each trip.
pub fn render_station_list(network: &Network) -> String {
    let mut out = String::from("\nAvailable stations:\n");
    for station in network.stations() {
        let _ = writeln!(
            out,
            "  {} - {} (Zone {})",
            station.id, station.name, station.zone
        );
    }
    out
}

/// Human-readable trip summary.
pub fn render_plan(network: &Network, rules: &FareRules, plan: &TripPlan) -> String {
    let mut out = String::new();

    let trip = match &plan.outcome {
        TripOutcome::SameStation => {
            let _ = writeln!(out, "\nNo travel - same origin and destination.");
            let _ = writeln!(out, "Fare: {}", plan.charge());
            return out;
        }
        TripOutcome::NoRoute => {
            let _ = writeln!(
                out,
                "\nNo route found from {} to {}.",
                name(network, &plan.query.from),
                name(network, &plan.query.to)
            );
            return out;
        }
        TripOutcome::Routed(trip) => trip,
    };

    let analysis = &trip.analysis;

    let _ = writeln!(out, "\n==================== TRIP SUMMARY ======================");
    let _ = writeln!(out, "From: {}", name(network, &plan.query.from));
    let _ = writeln!(out, "To: {}", name(network, &plan.query.to));
    let _ = writeln!(out, "Departing: {}", plan.query.depart_at);
    let _ = writeln!(out, "{RULE}");

    let route_names: Vec<&str> = trip.route.path.iter().map(|id| name(network, id)).collect();
    let _ = writeln!(out, "\nRoute:");
    let _ = writeln!(out, "{}", route_names.join(" -> "));
    let _ = writeln!(out, "Total travel time: {} min", trip.route.total_minutes);
    let _ = writeln!(out, "Zones crossed: {}", analysis.zones_crossed);
    let _ = writeln!(out, "Mode: {}", analysis.mode);
    let _ = writeln!(out, "Required fare level: {} zone(s)", analysis.required_zones);
    let _ = writeln!(out, "Charged now: {}", trip.fare.charge);

    if let (Some(expires), Some((_, paid))) =
        (rules.window_expiry(&plan.session), plan.session.active())
    {
        let _ = writeln!(
            out,
            "Transfer window active until: {} (paid up to {} zone(s))",
            format_clock(expires),
            paid
        );
    }

    let _ = writeln!(out, "\nSegments:");
    for segment in analysis.segments() {
        let _ = writeln!(
            out,
            "  - {} -> {} ({}, {} min)",
            name(network, &segment.from),
            name(network, &segment.to),
            segment.line,
            segment.minutes
        );
    }

    let _ = writeln!(out, "\nLines traveled:");
    let _ = writeln!(out, "{}", analysis.compressed_lines.join(" -> "));

    if !analysis.transfer_stations.is_empty() {
        let _ = writeln!(out, "\nTransfers at:");
        for id in &analysis.transfer_stations {
            let _ = writeln!(out, "  - {}", name(network, id));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MinuteOfDay, Money, Station};
    use crate::fare::{FareSession, ZoneFareTable};
    use crate::network::Link;
    use crate::planner::{TripQuery, plan_trip};

    fn id(s: &str) -> StationId {
        StationId::parse(s).unwrap()
    }

    fn fixture() -> (Network, FareRules) {
        let network = Network::new(
            vec![
                Station::new(id("WFR"), "Waterfront", 1),
                Station::new(id("CMB"), "Commercial-Broadway", 1),
                Station::new(id("LHG"), "Lougheed", 2),
                Station::new(id("ISL"), "Island", 1),
            ],
            vec![
                Link::new(id("WFR"), id("CMB"), 14, "Expo", "train"),
                Link::new(id("CMB"), id("LHG"), 15, "Millennium", "train"),
            ],
        )
        .unwrap();
        let table =
            ZoneFareTable::new([(1, Money::from_cents(250)), (2, Money::from_cents(375))]).unwrap();
        (network, FareRules::new(table, Money::from_cents(200)))
    }

    fn plan(network: &Network, rules: &FareRules, from: &str, to: &str) -> TripPlan {
        let query = TripQuery::new(id(from), id(to), MinuteOfDay::parse_hhmm("23:30").unwrap());
        plan_trip(network, rules, query, FareSession::Inactive).unwrap()
    }

    #[test]
    fn station_list() {
        let (network, _) = fixture();
        let text = render_station_list(&network);
        assert!(text.contains("  CMB - Commercial-Broadway (Zone 1)"));
        assert!(text.contains("  LHG - Lougheed (Zone 2)"));
    }

    #[test]
    fn routed_summary() {
        let (network, rules) = fixture();
        let text = render_plan(&network, &rules, &plan(&network, &rules, "WFR", "LHG"));

        assert!(text.contains("From: Waterfront"));
        assert!(text.contains("Waterfront -> Commercial-Broadway -> Lougheed"));
        assert!(text.contains("Total travel time: 29 min"));
        assert!(text.contains("Zones crossed: 2"));
        assert!(text.contains("Mode: TRAIN"));
        assert!(text.contains("Charged now: $3.75"));
        // 23:30 + 60 wraps past midnight
        assert!(text.contains("Transfer window active until: 00:30 (paid up to 2 zone(s))"));
        assert!(text.contains("  - Waterfront -> Commercial-Broadway (Expo, 14 min)"));
        assert!(text.contains("Expo -> Millennium"));
        assert!(text.contains("Transfers at:\n  - Commercial-Broadway"));
    }

    #[test]
    fn same_station_summary() {
        let (network, rules) = fixture();
        let text = render_plan(&network, &rules, &plan(&network, &rules, "CMB", "CMB"));
        assert!(text.contains("No travel - same origin and destination."));
        assert!(text.contains("Fare: $0.00"));
    }

    #[test]
    fn no_route_summary() {
        let (network, rules) = fixture();
        let text = render_plan(&network, &rules, &plan(&network, &rules, "WFR", "ISL"));
        assert!(text.contains("No route found from Waterfront to Island."));
    }
}
