//! Assembles the full evaluation consumed by the presentation layer.

use serde::Serialize;

use crate::config::AppConfig;

use super::{
    allocation::{aggregate_fleet, FleetTotals, LineInput},
    annual::{annual_cost, annual_emissions, cost_per_km, emissions_per_km, round2},
    projection::{cumulative, project, CostView},
};

/// Current-year figures for one service scenario.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ScenarioSnapshot {
    /// Annual km attributed to this scenario.
    pub km_annual: f64,
    /// Annual cost in CHF.
    pub annual_cost: f64,
    /// Annual CO2 mass in kg.
    pub annual_emissions: f64,
    /// CHF per km (0 when idle).
    pub cost_per_km: f64,
    /// kg CO2 per km (0 when idle).
    pub emissions_per_km: f64,
    /// Share of this scenario's km across all three categories, in percent.
    pub km_share_pct: f64,
}

/// One full model evaluation: fleet totals, per-scenario snapshots, deltas,
/// and the multi-year projections.
#[derive(Debug, Clone, Serialize)]
pub struct FleetReport {
    /// Fleet-wide distance totals.
    pub totals: FleetTotals,
    /// Electric service scenario.
    pub electric: ScenarioSnapshot,
    /// Diesel support scenario (km beyond electric range).
    pub diesel_support: ScenarioSnapshot,
    /// Counterfactual all-diesel scenario.
    pub diesel_baseline: ScenarioSnapshot,
    /// Baseline cost minus electric-plus-support cost.
    pub annual_savings: f64,
    /// Baseline emissions minus electric-plus-support emissions, in kg.
    pub annual_emission_reduction: f64,
    /// Cash-view yearly costs for the electric scenario.
    pub yearly_cost_electric: Vec<f64>,
    /// Cash-view yearly costs for the all-diesel scenario.
    pub yearly_cost_diesel: Vec<f64>,
    /// Cumulative amortized-view costs for the electric scenario.
    pub cumulative_cost_electric: Vec<f64>,
    /// Cumulative amortized-view costs for the all-diesel scenario.
    pub cumulative_cost_diesel: Vec<f64>,
}

fn snapshot(km_annual: f64, cost: f64, emissions: f64, km_share_pct: f64) -> ScenarioSnapshot {
    ScenarioSnapshot {
        km_annual,
        annual_cost: cost,
        annual_emissions: emissions,
        cost_per_km: cost_per_km(cost, km_annual),
        emissions_per_km: emissions_per_km(emissions, km_annual),
        km_share_pct,
    }
}

/// Run the whole model for one fleet.
///
/// The vehicle count for every scenario is the number of lines (one bus per
/// line); support vehicles are reported in the totals as a provisioning
/// statistic. The km-share denominator sums all three category totals.
pub fn evaluate(config: &AppConfig, lines: &[LineInput]) -> FleetReport {
    let vehicle_count = lines.len() as u32;
    let totals = aggregate_fleet(lines, config.electric.range_limit, &config.calendar);

    let electric_cost = annual_cost(
        totals.electric_km_annual,
        config.electric.fuel_unit_cost,
        &config.electric,
        vehicle_count,
    );
    let support_cost = annual_cost(
        totals.diesel_support_km_annual,
        config.diesel.fuel_unit_cost,
        &config.diesel,
        vehicle_count,
    );
    let baseline_cost = annual_cost(
        totals.diesel_baseline_km_annual,
        config.diesel.fuel_unit_cost,
        &config.diesel,
        vehicle_count,
    );

    let electric_emissions =
        annual_emissions(totals.electric_km_annual, &config.electric, vehicle_count);
    let support_emissions = annual_emissions(
        totals.diesel_support_km_annual,
        &config.diesel,
        vehicle_count,
    );
    let baseline_emissions = annual_emissions(
        totals.diesel_baseline_km_annual,
        &config.diesel,
        vehicle_count,
    );

    let km_sum =
        totals.electric_km_annual + totals.diesel_support_km_annual + totals.diesel_baseline_km_annual;
    let km_share = |km_annual: f64| {
        if km_sum == 0.0 {
            0.0
        } else {
            round2(km_annual / km_sum * 100.0)
        }
    };

    let projection = &config.projection;
    let yearly_cost_electric = project(
        totals.electric_km_annual,
        &config.electric,
        vehicle_count,
        projection.years,
        projection.inflation_rate_electric,
        projection.infrastructure_cost,
        CostView::Cash,
    );
    let yearly_cost_diesel = project(
        totals.diesel_baseline_km_annual,
        &config.diesel,
        vehicle_count,
        projection.years,
        projection.inflation_rate_diesel,
        0.0,
        CostView::Cash,
    );
    let cumulative_cost_electric = cumulative(&project(
        totals.electric_km_annual,
        &config.electric,
        vehicle_count,
        projection.years,
        projection.inflation_rate_electric,
        projection.infrastructure_cost,
        CostView::Amortized,
    ));
    let cumulative_cost_diesel = cumulative(&project(
        totals.diesel_baseline_km_annual,
        &config.diesel,
        vehicle_count,
        projection.years,
        projection.inflation_rate_diesel,
        0.0,
        CostView::Amortized,
    ));

    FleetReport {
        electric: snapshot(
            totals.electric_km_annual,
            electric_cost,
            electric_emissions,
            km_share(totals.electric_km_annual),
        ),
        diesel_support: snapshot(
            totals.diesel_support_km_annual,
            support_cost,
            support_emissions,
            km_share(totals.diesel_support_km_annual),
        ),
        diesel_baseline: snapshot(
            totals.diesel_baseline_km_annual,
            baseline_cost,
            baseline_emissions,
            km_share(totals.diesel_baseline_km_annual),
        ),
        annual_savings: round2(baseline_cost - (electric_cost + support_cost)),
        annual_emission_reduction: round2(
            baseline_emissions - (electric_emissions + support_emissions),
        ),
        yearly_cost_electric,
        yearly_cost_diesel,
        cumulative_cost_electric,
        cumulative_cost_diesel,
        totals,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        FleetSettings, ProjectionSettings, ServiceCalendar, VehicleParams,
    };

    fn sample_config() -> AppConfig {
        AppConfig {
            calendar: ServiceCalendar {
                weekday_count: 250,
                weekend_count: 115,
            },
            projection: ProjectionSettings {
                years: 5,
                inflation_rate_electric: 0.0,
                inflation_rate_diesel: 0.0,
                infrastructure_cost: 500_000.0,
            },
            fleet: FleetSettings {
                size: 1,
                default_weekday_km: 100.0,
                default_weekend_km: 50.0,
            },
            electric: VehicleParams {
                fuel_unit_cost: 0.25,
                consumption_rate: 1.2,
                maintenance_cost: 12_000.0,
                purchase_price: 600_000.0,
                subsidy: 100_000.0,
                amortization_period: 10,
                emission_factor: 0.05,
                range_limit: Some(120.0),
            },
            diesel: VehicleParams {
                fuel_unit_cost: 2.0,
                consumption_rate: 0.5,
                maintenance_cost: 10_000.0,
                purchase_price: 400_000.0,
                subsidy: 0.0,
                amortization_period: 8,
                emission_factor: 1.3,
                range_limit: None,
            },
        }
    }

    fn single_line() -> Vec<LineInput> {
        vec![LineInput {
            weekday_km: 100.0,
            weekend_km: 50.0,
        }]
    }

    #[test]
    fn snapshot_figures_match_hand_computation() {
        let report = evaluate(&sample_config(), &single_line());

        assert_eq!(report.totals.electric_km_annual, 30_750.0);
        assert_eq!(report.totals.diesel_support_km_annual, 0.0);
        assert_eq!(report.totals.support_vehicles, 0);
        assert_eq!(report.totals.diesel_baseline_km_annual, 30_750.0);

        // 30_750 * 1.2 * 0.25 + 12_000 + 50_000
        assert_eq!(report.electric.annual_cost, 71_225.0);
        assert_eq!(report.electric.annual_emissions, 1_537.5);
        assert_eq!(report.electric.cost_per_km, 2.32);
        assert_eq!(report.electric.emissions_per_km, 0.05);

        // Idle support scenario still pays maintenance and amortization.
        assert_eq!(report.diesel_support.annual_cost, 60_000.0);
        assert_eq!(report.diesel_support.cost_per_km, 0.0);
        assert_eq!(report.diesel_support.emissions_per_km, 0.0);

        // 30_750 * 0.5 * 2.0 + 10_000 + 50_000
        assert_eq!(report.diesel_baseline.annual_cost, 90_750.0);
        assert_eq!(report.diesel_baseline.annual_emissions, 39_975.0);
        assert_eq!(report.diesel_baseline.cost_per_km, 2.95);

        assert_eq!(report.annual_savings, -40_475.0);
        assert_eq!(report.annual_emission_reduction, 38_437.5);
    }

    #[test]
    fn km_shares_span_all_three_categories() {
        let report = evaluate(&sample_config(), &single_line());
        assert_eq!(report.electric.km_share_pct, 50.0);
        assert_eq!(report.diesel_support.km_share_pct, 0.0);
        assert_eq!(report.diesel_baseline.km_share_pct, 50.0);
    }

    #[test]
    fn projections_cover_the_configured_horizon() {
        let config = sample_config();
        let report = evaluate(&config, &single_line());
        let years = config.projection.years as usize;
        assert_eq!(report.yearly_cost_electric.len(), years);
        assert_eq!(report.yearly_cost_diesel.len(), years);
        assert_eq!(report.cumulative_cost_electric.len(), years);
        assert_eq!(report.cumulative_cost_diesel.len(), years);

        // Year 0 pays acquisition and, for electric, infrastructure.
        assert_eq!(report.yearly_cost_electric[0], 1_171_225.0);
        assert_eq!(report.yearly_cost_diesel[0], 490_750.0);
        assert_eq!(report.yearly_cost_electric[1], 71_225.0);
        assert_eq!(report.yearly_cost_diesel[1], 90_750.0);
    }

    #[test]
    fn cumulative_series_is_monotone_for_nonnegative_costs() {
        let report = evaluate(&sample_config(), &single_line());
        for pair in report.cumulative_cost_diesel.windows(2) {
            assert!(pair[1] >= pair[0]);
        }
    }

    #[test]
    fn empty_fleet_evaluates_to_all_zeros() {
        let report = evaluate(&sample_config(), &[]);
        assert_eq!(report.totals.diesel_baseline_km_annual, 0.0);
        assert_eq!(report.electric.annual_cost, 0.0);
        assert_eq!(report.electric.km_share_pct, 0.0);
        assert_eq!(report.annual_savings, 0.0);
    }
}
