//! Single-year cost and emission formulas.

use crate::config::VehicleParams;

/// Round a currency or mass figure to two decimal places.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Annual per-vehicle purchase charge, net of subsidy, spread over the
/// amortization period.
pub fn amortized_annual_charge(params: &VehicleParams) -> f64 {
    (params.purchase_price - params.subsidy) / f64::from(params.amortization_period)
}

fn operating_cost(
    km_annual: f64,
    fuel_unit_cost: f64,
    params: &VehicleParams,
    vehicle_count: u32,
) -> f64 {
    let fuel = km_annual * params.consumption_rate * fuel_unit_cost;
    (fuel + params.maintenance_cost + amortized_annual_charge(params)) * f64::from(vehicle_count)
}

/// One year's cost under the smoothed amortization convention.
///
/// `fuel_unit_cost` is an explicit argument rather than read from `params`
/// because the projection inflates it year over year.
pub fn annual_cost(
    km_annual: f64,
    fuel_unit_cost: f64,
    params: &VehicleParams,
    vehicle_count: u32,
) -> f64 {
    round2(operating_cost(km_annual, fuel_unit_cost, params, vehicle_count))
}

/// Cash-view variant of [`annual_cost`]: replacement years additionally pay
/// the full purchase price per vehicle, layered on top of the amortized
/// charge. The double booking is a deliberate convention of this model.
pub fn annual_cost_with_replacement(
    km_annual: f64,
    fuel_unit_cost: f64,
    params: &VehicleParams,
    vehicle_count: u32,
    year: u32,
) -> f64 {
    let mut total = operating_cost(km_annual, fuel_unit_cost, params, vehicle_count);
    if year > 0 && year % params.amortization_period == 0 {
        total += params.purchase_price * f64::from(vehicle_count);
    }
    round2(total)
}

/// Annual CO2 mass in kg.
pub fn annual_emissions(km_annual: f64, params: &VehicleParams, vehicle_count: u32) -> f64 {
    round2(km_annual * params.emission_factor * f64::from(vehicle_count))
}

/// Cost per km, defined as 0 for an idle scenario rather than failing on
/// division by zero.
pub fn cost_per_km(total_cost: f64, km_annual: f64) -> f64 {
    if km_annual == 0.0 {
        0.0
    } else {
        round2(total_cost / km_annual)
    }
}

/// Emissions per km, with the same zero guard as [`cost_per_km`].
pub fn emissions_per_km(total_emissions: f64, km_annual: f64) -> f64 {
    if km_annual == 0.0 {
        0.0
    } else {
        round2(total_emissions / km_annual)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diesel() -> VehicleParams {
        VehicleParams {
            fuel_unit_cost: 2.0,
            consumption_rate: 0.5,
            maintenance_cost: 10_000.0,
            purchase_price: 400_000.0,
            subsidy: 0.0,
            amortization_period: 8,
            emission_factor: 1.3,
            range_limit: None,
        }
    }

    fn electric() -> VehicleParams {
        VehicleParams {
            fuel_unit_cost: 0.25,
            consumption_rate: 1.2,
            maintenance_cost: 12_000.0,
            purchase_price: 600_000.0,
            subsidy: 100_000.0,
            amortization_period: 10,
            emission_factor: 0.05,
            range_limit: Some(120.0),
        }
    }

    #[test]
    fn amortization_is_net_of_subsidy() {
        assert_eq!(amortized_annual_charge(&electric()), 50_000.0);
        assert_eq!(amortized_annual_charge(&diesel()), 50_000.0);
    }

    #[test]
    fn annual_cost_matches_the_formula() {
        let params = diesel();
        // (20_000 * 0.5 * 2.0 + 10_000 + 50_000) * 3
        assert_eq!(annual_cost(20_000.0, 2.0, &params, 3), 240_000.0);
    }

    #[test]
    fn replacement_years_pay_the_full_price_again() {
        let params = diesel();
        let plain = annual_cost(20_000.0, 2.0, &params, 3);
        let replacement = annual_cost_with_replacement(20_000.0, 2.0, &params, 3, 8);
        assert_eq!(replacement, plain + 3.0 * 400_000.0);
    }

    #[test]
    fn non_replacement_years_match_the_plain_cost() {
        let params = diesel();
        for year in [0, 1, 7, 9, 15] {
            assert_eq!(
                annual_cost_with_replacement(20_000.0, 2.0, &params, 3, year),
                annual_cost(20_000.0, 2.0, &params, 3)
            );
        }
    }

    #[test]
    fn year_zero_never_counts_as_a_replacement() {
        let params = diesel();
        assert_eq!(
            annual_cost_with_replacement(0.0, 2.0, &params, 1, 0),
            annual_cost(0.0, 2.0, &params, 1)
        );
    }

    #[test]
    fn emissions_scale_with_distance_and_fleet() {
        assert_eq!(annual_emissions(10_000.0, &diesel(), 2), 26_000.0);
        assert_eq!(annual_emissions(10_000.0, &electric(), 2), 1_000.0);
    }

    #[test]
    fn per_km_ratios_guard_against_zero_distance() {
        assert_eq!(cost_per_km(123_456.0, 0.0), 0.0);
        assert_eq!(emissions_per_km(9_999.0, 0.0), 0.0);
        assert_eq!(cost_per_km(25_000.0, 10_000.0), 2.5);
        assert_eq!(emissions_per_km(13_000.0, 10_000.0), 1.3);
    }

    #[test]
    fn costs_are_rounded_to_two_decimals() {
        let params = VehicleParams {
            fuel_unit_cost: 0.333,
            consumption_rate: 1.0,
            maintenance_cost: 0.0,
            purchase_price: 0.0,
            subsidy: 0.0,
            amortization_period: 1,
            emission_factor: 0.333,
            range_limit: None,
        };
        let cost = annual_cost(100.0, 0.333, &params, 1);
        assert_eq!(cost, 33.3);
        let emissions = annual_emissions(101.0, &params, 1);
        assert_eq!(emissions, 33.63);
    }
}
