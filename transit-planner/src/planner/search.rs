//! Route planning across the five strategies.
//!
//! For a query, every strategy is evaluated in a fixed order, each producing
//! a [`StrategyOutcome`]. The cheapest found itinerary is then recommended.

use tracing::debug;

use crate::domain::{
    Coord, Endpoint, Itinerary, Query, RouteSegment, StopId, StopKind, TravelMode,
};
use crate::fare::FarePolicy;
use crate::network::{NetworkModel, Stop};

use super::assemble::assemble;
use super::config::PlannerConfig;
use super::multimodal::{UsageRule, constrained_path};
use super::rank::select_best;
use super::reach::single_mode_path;
use super::strategy::{Hop, Strategy, StrategyOutcome};

/// Result of planning a query.
#[derive(Debug, Clone)]
pub struct PlanResult {
    /// One outcome per strategy, in [`Strategy::ALL`] order.
    pub outcomes: Vec<(Strategy, StrategyOutcome)>,

    /// The recommended strategy, if any produced an itinerary.
    pub recommended: Option<Strategy>,
}

impl PlanResult {
    /// The outcome for `strategy`.
    pub fn get(&self, strategy: Strategy) -> Option<&StrategyOutcome> {
        self.outcomes
            .iter()
            .find(|(s, _)| *s == strategy)
            .map(|(_, outcome)| outcome)
    }

    /// The recommended strategy and its itinerary.
    pub fn recommended(&self) -> Option<(Strategy, &Itinerary)> {
        let strategy = self.recommended?;
        let itinerary = self.get(strategy)?.itinerary()?;
        Some((strategy, itinerary))
    }

    /// Number of strategies that produced an itinerary.
    pub fn found_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| outcome.itinerary().is_some())
            .count()
    }
}

/// How the ends of a transit path are joined to the query points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Connector {
    Walk,
    Taxi,
}

/// Route planner over a loaded network.
pub struct Planner<'a> {
    network: &'a NetworkModel,
    config: &'a PlannerConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(network: &'a NetworkModel, config: &'a PlannerConfig) -> Self {
        Self { network, config }
    }

    /// Evaluate every strategy for `query` and pick the best itinerary.
    pub fn plan(&self, query: &Query) -> PlanResult {
        let outcomes: Vec<(Strategy, StrategyOutcome)> = Strategy::ALL
            .iter()
            .map(|&strategy| (strategy, self.evaluate(strategy, query)))
            .collect();

        let recommended = select_best(
            outcomes
                .iter()
                .filter_map(|(s, outcome)| outcome.itinerary().map(|i| (*s, i))),
        )
        .map(|(strategy, _)| strategy);

        debug!(
            passenger = %query.passenger.label(),
            payment = %query.payment.label(),
            special_day = query.special_day,
            recommended = ?recommended.map(|s| s.name()),
            "plan complete"
        );

        PlanResult {
            outcomes,
            recommended,
        }
    }

    /// Evaluate a single strategy.
    pub fn evaluate(&self, strategy: Strategy, query: &Query) -> StrategyOutcome {
        if !strategy.accepts(query.payment) {
            debug!(%strategy, payment = %query.payment.label(), "not applicable");
            return StrategyOutcome::NotApplicable;
        }

        let raw = match strategy {
            Strategy::DirectTaxi => Some(self.direct_taxi(query)),
            Strategy::BusOnly => self.single_mode(query, StopKind::Bus),
            Strategy::TramOnly => self.single_mode(query, StopKind::Tram),
            Strategy::BusAndTram => {
                self.multimodal(query, UsageRule::BusAndTram, Connector::Walk)
            }
            Strategy::TaxiAndTransit => {
                self.multimodal(query, UsageRule::AnyTransit, Connector::Taxi)
            }
        };

        let Some(raw) = raw else {
            debug!(%strategy, "infeasible");
            return StrategyOutcome::Infeasible;
        };

        match assemble(raw, self.network, query) {
            Ok(itinerary) => {
                debug!(
                    %strategy,
                    cost = itinerary.total_cost(),
                    time = itinerary.total_time(),
                    segments = itinerary.segment_count(),
                    "itinerary found"
                );
                StrategyOutcome::Found(itinerary)
            }
            Err(e) => {
                debug!(%strategy, error = %e, "itinerary rejected");
                StrategyOutcome::Infeasible
            }
        }
    }

    fn direct_taxi(&self, query: &Query) -> Vec<RouteSegment> {
        vec![self.connector(
            Connector::Taxi,
            Endpoint::Origin,
            query.origin,
            Endpoint::Destination,
            query.destination,
            query,
        )]
    }

    fn single_mode(&self, query: &Query, kind: StopKind) -> Option<Vec<RouteSegment>> {
        let (start, _) = self.network.nearest_stop(query.origin, Some(kind))?;
        let (end, _) = self.network.nearest_stop(query.destination, Some(kind))?;
        let hops = single_mode_path(self.network, &start.id, &end.id, kind)?;
        Some(self.bracket(query, start, end, &hops, Connector::Walk))
    }

    fn multimodal(
        &self,
        query: &Query,
        rule: UsageRule,
        connector: Connector,
    ) -> Option<Vec<RouteSegment>> {
        let (start, _) = self.network.nearest_transit_stop(query.origin)?;
        let (end, _) = self.network.nearest_transit_stop(query.destination)?;
        let hops = constrained_path(self.network, &start.id, &end.id, rule)?;
        Some(self.bracket(query, start, end, &hops, connector))
    }

    /// Join a stop-to-stop path to the query points with connectors at both
    /// ends.
    fn bracket(
        &self,
        query: &Query,
        start: &Stop,
        end: &Stop,
        hops: &[Hop<'_>],
        connector: Connector,
    ) -> Vec<RouteSegment> {
        let policy = FarePolicy::from(query);
        let mut segments = Vec::with_capacity(hops.len() + 2);

        segments.push(self.connector(
            connector,
            Endpoint::Origin,
            query.origin,
            stop_endpoint(&start.id),
            start.coord,
            query,
        ));

        for hop in hops {
            let quote = policy.quote(hop.edge.fare, hop.edge.mode, hop.transfer_pending);
            segments.push(RouteSegment {
                from: stop_endpoint(hop.from),
                to: stop_endpoint(&hop.edge.to),
                mode: hop.edge.mode,
                time: hop.edge.time,
                distance: hop.edge.distance,
                base_cost: hop.edge.fare,
                final_cost: quote.final_cost,
                explanation: quote.explanation,
            });
        }

        segments.push(self.connector(
            connector,
            stop_endpoint(&end.id),
            end.coord,
            Endpoint::Destination,
            query.destination,
            query,
        ));

        segments
    }

    /// A walk or taxi segment between two points.
    fn connector(
        &self,
        connector: Connector,
        from: Endpoint,
        from_coord: Coord,
        to: Endpoint,
        to_coord: Coord,
        query: &Query,
    ) -> RouteSegment {
        let distance = from_coord.distance_to(&to_coord);
        let (mode, time, base_cost) = match connector {
            Connector::Walk => (TravelMode::Walk, self.config.walk_minutes(distance), 0.0),
            Connector::Taxi => (
                TravelMode::Taxi,
                self.config.taxi_minutes(distance),
                self.network.taxi().cost(distance),
            ),
        };
        let quote = FarePolicy::from(query).quote(base_cost, mode, false);

        RouteSegment {
            from,
            to,
            mode,
            time,
            distance,
            base_cost,
            final_cost: quote.final_cost,
            explanation: quote.explanation,
        }
    }
}

fn stop_endpoint(id: &StopId) -> Endpoint {
    Endpoint::Stop(id.clone())
}
