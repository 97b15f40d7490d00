use std::fmt::Write;

use serde::Serialize;

use crate::airport::Airport;
use crate::error::{Error, Result};
use crate::routing::{RouteAlgorithm, RoutePlan};

/// Step taken during traversal of a planned route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummaryStep {
    pub index: usize,
    pub code: String,
    pub name: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Distance from the previous step in kilometres; absent for the origin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leg_km: Option<f64>,
}

/// Structured representation of a planned airport route that consumers can
/// serialise or render as text.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub algorithm: RouteAlgorithm,
    pub hops: usize,
    pub total_distance_km: f64,
    pub start: String,
    pub goal: String,
    pub steps: Vec<RouteSummaryStep>,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] over airports into a summary.
    pub fn from_plan(plan: &RoutePlan<'_, Airport>) -> Result<Self> {
        let (Some(first), Some(last)) = (plan.steps.first(), plan.steps.last()) else {
            return Err(Error::EmptyRoutePlan);
        };

        let mut previous: Option<&Airport> = None;
        let steps = plan
            .steps
            .iter()
            .enumerate()
            .map(|(index, &airport)| {
                let leg_km = previous.map(|prev| prev.distance_to(airport));
                previous = Some(airport);
                RouteSummaryStep {
                    index,
                    code: airport.code.clone(),
                    name: airport.name.clone(),
                    country: airport.country.clone(),
                    latitude: airport.latitude(),
                    longitude: airport.longitude(),
                    leg_km,
                }
            })
            .collect();

        Ok(Self {
            algorithm: plan.algorithm,
            hops: plan.hop_count(),
            total_distance_km: plan.total_cost(),
            start: first.code.clone(),
            goal: last.code.clone(),
            steps,
        })
    }

    /// Render a header line followed by one table row per step.
    pub fn render_text(&self) -> String {
        let mut out = format!(
            "Route from {} to {} ({}): {} hops, {:.1} km\n",
            self.start, self.goal, self.algorithm, self.hops, self.total_distance_km
        );
        for step in &self.steps {
            write_row(
                &mut out,
                &step.code,
                &step.name,
                &step.country,
                step.latitude,
                step.longitude,
            );
        }
        out
    }
}

/// Serialisable view of a single airport.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AirportEntry {
    pub code: String,
    pub name: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<&Airport> for AirportEntry {
    fn from(airport: &Airport) -> Self {
        Self {
            code: airport.code.clone(),
            name: airport.name.clone(),
            country: airport.country.clone(),
            latitude: airport.latitude(),
            longitude: airport.longitude(),
        }
    }
}

/// Format airports as a fixed-width table, one line per airport.
pub fn format_airport_table(airports: &[&Airport]) -> String {
    let mut out = String::new();
    for airport in airports {
        write_row(
            &mut out,
            &airport.code,
            &airport.name,
            &airport.country,
            airport.latitude(),
            airport.longitude(),
        );
    }
    out
}

fn write_row(out: &mut String, code: &str, name: &str, country: &str, lat: f64, long: f64) {
    let _ = writeln!(
        out,
        "{code}: {name:<32} ({country:<22}) - lat: {lat:.2}, long: {long:.2}"
    );
}
