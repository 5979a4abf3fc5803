//! Multi-year cost projection with compounding fuel-price inflation.

use crate::config::VehicleParams;

use super::annual::{annual_cost, annual_cost_with_replacement, round2};

/// Series convention for a projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostView {
    /// Smoothed amortization charge every year; no replacement lump sums.
    Amortized,
    /// Full purchase outlay in replacement years, atop the amortized charge.
    Cash,
}

/// Project yearly costs over `horizon_years`, starting at year 0.
///
/// Year 0 pays the initial fleet acquisition (full purchase price per
/// vehicle) plus, exactly once, the one-time infrastructure cost. Callers
/// pass `0.0` infrastructure for diesel scenarios. Inflation compounds once
/// per year and is applied after the year's cost is computed, so year `k`
/// sees a fuel unit cost of `base * (1 + rate)^k`.
pub fn project(
    km_annual: f64,
    params: &VehicleParams,
    vehicle_count: u32,
    horizon_years: u32,
    inflation_rate: f64,
    one_time_infrastructure: f64,
    view: CostView,
) -> Vec<f64> {
    let mut fuel_unit_cost = params.fuel_unit_cost;
    let mut infrastructure_applied = false;
    let mut yearly = Vec::with_capacity(horizon_years as usize);

    for year in 0..horizon_years {
        let mut cost = match view {
            CostView::Amortized => annual_cost(km_annual, fuel_unit_cost, params, vehicle_count),
            CostView::Cash => annual_cost_with_replacement(
                km_annual,
                fuel_unit_cost,
                params,
                vehicle_count,
                year,
            ),
        };

        if year == 0 {
            cost += params.purchase_price * f64::from(vehicle_count);
            if one_time_infrastructure > 0.0 && !infrastructure_applied {
                cost += one_time_infrastructure;
                infrastructure_applied = true;
            }
            cost = round2(cost);
        }

        yearly.push(cost);
        fuel_unit_cost *= 1.0 + inflation_rate;
    }

    yearly
}

/// Running sum of a yearly series.
pub fn cumulative(series: &[f64]) -> Vec<f64> {
    let mut running = 0.0;
    series
        .iter()
        .map(|cost| {
            running += cost;
            round2(running)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::annual::annual_cost;

    fn params() -> VehicleParams {
        VehicleParams {
            fuel_unit_cost: 2.0,
            consumption_rate: 0.5,
            maintenance_cost: 10_000.0,
            purchase_price: 400_000.0,
            subsidy: 0.0,
            amortization_period: 4,
            emission_factor: 1.3,
            range_limit: None,
        }
    }

    #[test]
    fn series_has_one_entry_per_year() {
        let series = project(20_000.0, &params(), 2, 12, 0.03, 0.0, CostView::Cash);
        assert_eq!(series.len(), 12);
    }

    #[test]
    fn inflation_compounds_after_each_year() {
        let params = params();
        let rate = 0.05;
        let series = project(20_000.0, &params, 1, 4, rate, 0.0, CostView::Amortized);
        for (year, cost) in series.iter().enumerate() {
            let inflated = params.fuel_unit_cost * (1.0 + rate).powi(year as i32);
            let mut expected = annual_cost(20_000.0, inflated, &params, 1);
            if year == 0 {
                expected += params.purchase_price;
            }
            assert!((cost - expected).abs() < 1e-6, "year {year}");
        }
    }

    #[test]
    fn year_zero_pays_the_acquisition() {
        let params = params();
        let series = project(20_000.0, &params, 3, 2, 0.0, 0.0, CostView::Amortized);
        let base = annual_cost(20_000.0, params.fuel_unit_cost, &params, 3);
        assert_eq!(series[0], base + 3.0 * params.purchase_price);
        assert_eq!(series[1], base);
    }

    #[test]
    fn infrastructure_is_booked_once_regardless_of_fleet_size() {
        let params = params();
        let with_infra = project(20_000.0, &params, 5, 3, 0.0, 750_000.0, CostView::Amortized);
        let without = project(20_000.0, &params, 5, 3, 0.0, 0.0, CostView::Amortized);
        assert_eq!(with_infra[0], without[0] + 750_000.0);
        assert_eq!(with_infra[1..], without[1..]);
    }

    #[test]
    fn cash_view_spikes_at_replacement_years_only() {
        let params = params();
        let cash = project(20_000.0, &params, 2, 10, 0.0, 0.0, CostView::Cash);
        let amortized = project(20_000.0, &params, 2, 10, 0.0, 0.0, CostView::Amortized);
        let lump = params.purchase_price * 2.0;

        for year in 0..10 {
            if year > 0 && year % params.amortization_period as usize == 0 {
                assert_eq!(cash[year], amortized[year] + lump, "year {year}");
            } else {
                assert_eq!(cash[year], amortized[year], "year {year}");
            }
        }
    }

    #[test]
    fn cumulative_is_the_running_sum() {
        let series = [10.0, 20.5, 0.0, 4.25];
        assert_eq!(cumulative(&series), vec![10.0, 30.5, 30.5, 34.75]);
        assert!(cumulative(&[]).is_empty());
    }
}
