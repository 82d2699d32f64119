//! The stop/edge graph.

use std::collections::HashMap;

use crate::domain::{Coord, StopId, StopKind, TravelMode};

use super::NetworkError;

/// A directed bus or tram connection leaving a stop.
#[derive(Debug, Clone, PartialEq)]
pub struct ModeEdge {
    pub to: StopId,
    /// Minutes
    pub time: f64,
    /// Kilometres
    pub distance: f64,
    pub fare: f64,
}

/// A walking connection to a stop of the other mode at the same location.
///
/// Transfers have no distance.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferEdge {
    pub to: StopId,
    pub time: f64,
    pub fare: f64,
}

/// A stop in the network.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    pub id: StopId,
    pub name: String,
    pub kind: StopKind,
    pub coord: Coord,
    /// Last stop on its line
    pub terminal: bool,
    pub edges: Vec<ModeEdge>,
    pub transfer: Option<TransferEdge>,
}

/// An adjacency entry: any edge leaving a stop, tagged with its mode.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphEdge {
    pub to: StopId,
    pub mode: TravelMode,
    pub time: f64,
    pub distance: f64,
    pub fare: f64,
}

/// Taxi tariff: a fixed opening fee plus a per-kilometre rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaxiPricing {
    pub opening_fee: f64,
    pub cost_per_km: f64,
}

impl TaxiPricing {
    pub fn new(opening_fee: f64, cost_per_km: f64) -> Result<Self, NetworkError> {
        if !opening_fee.is_finite() || opening_fee < 0.0 {
            return Err(NetworkError::InvalidTaxiPricing(
                "opening fee must be non-negative",
            ));
        }
        if !cost_per_km.is_finite() || cost_per_km < 0.0 {
            return Err(NetworkError::InvalidTaxiPricing(
                "cost per km must be non-negative",
            ));
        }
        Ok(Self {
            opening_fee,
            cost_per_km,
        })
    }

    /// Fare for a ride of `distance_km`.
    pub fn cost(&self, distance_km: f64) -> f64 {
        self.opening_fee + self.cost_per_km * distance_km
    }
}

/// The transit network: stops, their outgoing edges, and taxi pricing.
///
/// Built once and read-only afterwards; share it between requests behind an
/// `Arc`.
///
/// # Invariants
///
/// - Stop ids are unique
/// - Every edge and transfer points at an existing stop
/// - Times, distances and fares are finite and non-negative
#[derive(Debug, Clone)]
pub struct NetworkModel {
    city: Option<String>,
    stops: Vec<Stop>,
    index: HashMap<StopId, usize>,
    adjacency: Vec<Vec<GraphEdge>>,
    taxi: TaxiPricing,
}

impl NetworkModel {
    /// Build and validate a network.
    ///
    /// # Errors
    ///
    /// Returns `Err` for duplicate stop ids, edges to unknown stops, or
    /// negative/non-finite values.
    pub fn new(
        city: Option<String>,
        stops: Vec<Stop>,
        taxi: TaxiPricing,
    ) -> Result<Self, NetworkError> {
        let mut index = HashMap::with_capacity(stops.len());
        for (i, stop) in stops.iter().enumerate() {
            if index.insert(stop.id.clone(), i).is_some() {
                return Err(NetworkError::DuplicateStop(stop.id.clone()));
            }
        }

        for stop in &stops {
            validate_stop(stop, &index)?;
        }

        let adjacency = stops.iter().map(adjacency_for).collect();

        Ok(NetworkModel {
            city,
            stops,
            index,
            adjacency,
            taxi,
        })
    }

    /// City name, if the dataset gives one.
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    /// Taxi tariff for this city.
    pub fn taxi(&self) -> &TaxiPricing {
        &self.taxi
    }

    /// Look up a stop by id.
    pub fn stop(&self, id: &StopId) -> Option<&Stop> {
        self.index.get(id).map(|&i| &self.stops[i])
    }

    /// All stops, in dataset order.
    pub fn stops(&self) -> impl Iterator<Item = &Stop> {
        self.stops.iter()
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Edges leaving `id`: its mode edges in dataset order, then its transfer.
    ///
    /// Unknown stops have no edges.
    pub fn edges_from(&self, id: &StopId) -> &[GraphEdge] {
        self.index
            .get(id)
            .map(|&i| self.adjacency[i].as_slice())
            .unwrap_or(&[])
    }

    /// Nearest stop to `point`, optionally restricted to one kind.
    ///
    /// Returns the stop and its distance in kilometres, or `None` if no stop
    /// matches. Ties go to the stop listed first in the dataset.
    pub fn nearest_stop(&self, point: Coord, kind: Option<StopKind>) -> Option<(&Stop, f64)> {
        self.nearest_matching(point, |stop| kind.is_none_or(|k| stop.kind == k))
    }

    /// Nearest stop served by bus or tram.
    pub fn nearest_transit_stop(&self, point: Coord) -> Option<(&Stop, f64)> {
        self.nearest_matching(point, |stop| {
            matches!(stop.kind, StopKind::Bus | StopKind::Tram)
        })
    }

    fn nearest_matching<F>(&self, point: Coord, accept: F) -> Option<(&Stop, f64)>
    where
        F: Fn(&Stop) -> bool,
    {
        let mut best: Option<(&Stop, f64)> = None;
        for stop in self.stops.iter().filter(|s| accept(s)) {
            let d = point.distance_to(&stop.coord);
            if best.is_none_or(|(_, best_d)| d < best_d) {
                best = Some((stop, d));
            }
        }
        best
    }
}

fn validate_stop(stop: &Stop, index: &HashMap<StopId, usize>) -> Result<(), NetworkError> {
    if !stop.coord.is_valid() {
        return Err(NetworkError::InvalidValue {
            stop: stop.id.clone(),
            field: "coordinate",
            value: if stop.coord.lat.is_finite() && (-90.0..=90.0).contains(&stop.coord.lat) {
                stop.coord.lon
            } else {
                stop.coord.lat
            },
        });
    }

    for edge in &stop.edges {
        check_target(stop, &edge.to, index)?;
        check_non_negative(stop, "time", edge.time)?;
        check_non_negative(stop, "distance", edge.distance)?;
        check_non_negative(stop, "fare", edge.fare)?;
    }

    if let Some(transfer) = &stop.transfer {
        check_target(stop, &transfer.to, index)?;
        check_non_negative(stop, "transfer time", transfer.time)?;
        check_non_negative(stop, "transfer fare", transfer.fare)?;
    }

    Ok(())
}

fn check_target(
    stop: &Stop,
    to: &StopId,
    index: &HashMap<StopId, usize>,
) -> Result<(), NetworkError> {
    if index.contains_key(to) {
        Ok(())
    } else {
        Err(NetworkError::UnknownStop {
            from: stop.id.clone(),
            to: to.clone(),
        })
    }
}

fn check_non_negative(stop: &Stop, field: &'static str, value: f64) -> Result<(), NetworkError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(NetworkError::InvalidValue {
            stop: stop.id.clone(),
            field,
            value,
        })
    }
}

fn adjacency_for(stop: &Stop) -> Vec<GraphEdge> {
    let mode = stop.kind.mode();
    let mut edges: Vec<GraphEdge> = stop
        .edges
        .iter()
        .map(|e| GraphEdge {
            to: e.to.clone(),
            mode,
            time: e.time,
            distance: e.distance,
            fare: e.fare,
        })
        .collect();

    if let Some(t) = &stop.transfer {
        edges.push(GraphEdge {
            to: t.to.clone(),
            mode: TravelMode::Transfer,
            time: t.time,
            distance: 0.0,
            fare: t.fare,
        });
    }

    edges
}
