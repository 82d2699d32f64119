//! Itinerary assembly.
//!
//! Takes the raw segment list a strategy produced and turns it into an
//! `Itinerary`: adjacent walk/walk and taxi/taxi segments are merged, each
//! segment's endpoints are resolved to coordinates for drawing, totals are
//! summed, and an arrival time is attached when the query has a departure.

use tracing::warn;

use crate::domain::{Coord, CoordSegment, DomainError, Endpoint, Itinerary, Query, RouteSegment};
use crate::network::NetworkModel;

/// Merge adjacent same-mode walk and taxi segments.
///
/// Bus, tram and transfer segments are left as they are so every hop stays
/// visible.
pub fn merge_adjacent(segments: Vec<RouteSegment>) -> Vec<RouteSegment> {
    let mut merged: Vec<RouteSegment> = Vec::with_capacity(segments.len());
    for segment in segments {
        if let Some(last) = merged.last_mut() {
            if last.can_merge(&segment) {
                if let Ok(combined) = last.merge(&segment) {
                    *last = combined;
                    continue;
                }
            }
        }
        merged.push(segment);
    }
    merged
}

/// Resolve an endpoint to a coordinate.
fn locate(endpoint: &Endpoint, network: &NetworkModel, query: &Query) -> Option<Coord> {
    match endpoint {
        Endpoint::Origin => Some(query.origin),
        Endpoint::Destination => Some(query.destination),
        Endpoint::Stop(id) => network.stop(id).map(|s| s.coord),
    }
}

/// Build the drawable coordinate pairs for a segment list.
///
/// Segments with an endpoint that doesn't resolve are left out of the drawing.
pub fn coordinate_segments(
    segments: &[RouteSegment],
    network: &NetworkModel,
    query: &Query,
) -> Vec<CoordSegment> {
    segments
        .iter()
        .filter_map(|s| {
            let from = locate(&s.from, network, query);
            let to = locate(&s.to, network, query);
            match (from, to) {
                (Some(from), Some(to)) => Some(CoordSegment {
                    mode: s.mode,
                    from,
                    to,
                }),
                _ => {
                    warn!(from = %s.from, to = %s.to, "dropping segment with unknown stop");
                    None
                }
            }
        })
        .collect()
}

/// Assemble a strategy's raw segments into an itinerary.
///
/// # Errors
///
/// Returns `Err` if there are no segments or they don't form a connected
/// chain.
pub fn assemble(
    raw: Vec<RouteSegment>,
    network: &NetworkModel,
    query: &Query,
) -> Result<Itinerary, DomainError> {
    let segments = merge_adjacent(raw);
    let polyline = coordinate_segments(&segments, network, query);
    let itinerary = Itinerary::new(segments, polyline)?;

    Ok(match query.departure {
        Some(departure) => itinerary.depart_at(departure),
        None => itinerary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{StopId, StopKind, TravelMode};
    use crate::network::{Stop, TaxiPricing};
    use chrono::NaiveDate;

    fn id(s: &str) -> StopId {
        StopId::parse(s).unwrap()
    }

    fn stop_at(endpoint: &str) -> Endpoint {
        Endpoint::Stop(id(endpoint))
    }

    fn network() -> NetworkModel {
        let stops = ["b1", "b2"]
            .iter()
            .enumerate()
            .map(|(i, name)| Stop {
                id: id(name),
                name: name.to_string(),
                kind: StopKind::Bus,
                coord: Coord::new(40.0 + i as f64 * 0.01, 29.0),
                terminal: false,
                edges: Vec::new(),
                transfer: None,
            })
            .collect();
        NetworkModel::new(None, stops, TaxiPricing::new(10.0, 4.0).unwrap()).unwrap()
    }

    fn query() -> Query {
        Query::new(Coord::new(39.99, 29.0), Coord::new(40.02, 29.0))
    }

    fn seg(from: Endpoint, to: Endpoint, mode: TravelMode, cost: f64) -> RouteSegment {
        RouteSegment {
            from,
            to,
            mode,
            time: 4.0,
            distance: 0.5,
            base_cost: cost,
            final_cost: cost,
            explanation: mode.to_string(),
        }
    }

    #[test]
    fn merges_consecutive_walks_only() {
        let merged = merge_adjacent(vec![
            seg(Endpoint::Origin, stop_at("b1"), TravelMode::Walk, 0.0),
            seg(stop_at("b1"), stop_at("b2"), TravelMode::Walk, 0.0),
            seg(stop_at("b2"), stop_at("b1"), TravelMode::Bus, 3.0),
            seg(stop_at("b1"), stop_at("b2"), TravelMode::Bus, 3.0),
            seg(stop_at("b2"), Endpoint::Destination, TravelMode::Walk, 0.0),
        ]);

        assert_eq!(merged.len(), 4);
        assert_eq!(merged[0].from, Endpoint::Origin);
        assert_eq!(merged[0].to, stop_at("b2"));
        assert_eq!(merged[0].time, 8.0);
        assert_eq!(merged[1].mode, TravelMode::Bus);
        assert_eq!(merged[2].mode, TravelMode::Bus);
    }

    #[test]
    fn merges_taxi_connectors() {
        let merged = merge_adjacent(vec![
            seg(Endpoint::Origin, stop_at("b1"), TravelMode::Taxi, 12.0),
            seg(stop_at("b1"), Endpoint::Destination, TravelMode::Taxi, 14.0),
        ]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].final_cost, 26.0);
    }

    #[test]
    fn polyline_endpoints_match_query() {
        let q = query();
        let itinerary = assemble(
            vec![
                seg(Endpoint::Origin, stop_at("b1"), TravelMode::Walk, 0.0),
                seg(stop_at("b1"), stop_at("b2"), TravelMode::Bus, 3.0),
                seg(stop_at("b2"), Endpoint::Destination, TravelMode::Walk, 0.0),
            ],
            &network(),
            &q,
        )
        .unwrap();

        let polyline = itinerary.polyline();
        assert_eq!(polyline.len(), 3);
        assert_eq!(polyline[0].from, q.origin);
        assert_eq!(polyline[2].to, q.destination);
        assert_eq!(polyline[1].from, Coord::new(40.0, 29.0));
        assert_eq!(polyline[1].color(), "blue");
    }

    #[test]
    fn unknown_stops_dropped_from_drawing() {
        let segments = vec![
            seg(Endpoint::Origin, stop_at("ghost"), TravelMode::Walk, 0.0),
            seg(stop_at("ghost"), Endpoint::Destination, TravelMode::Bus, 0.0),
        ];
        let drawn = coordinate_segments(&segments, &network(), &query());
        assert!(drawn.is_empty());
    }

    #[test]
    fn arrival_attached_when_departure_given() {
        let departure = NaiveDate::from_ymd_opt(2025, 5, 19)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let q = query().departing_at(departure);
        let itinerary = assemble(
            vec![seg(Endpoint::Origin, Endpoint::Destination, TravelMode::Taxi, 20.0)],
            &network(),
            &q,
        )
        .unwrap();

        assert_eq!(
            itinerary.arrival_time(),
            Some(departure + chrono::Duration::minutes(4))
        );
    }

    #[test]
    fn empty_segments_error() {
        assert!(matches!(
            assemble(vec![], &network(), &query()),
            Err(DomainError::EmptyItinerary)
        ));
    }
}
