//! Per-line distance allocation and fleet-wide aggregation.

use serde::{Deserialize, Serialize};

use crate::config::ServiceCalendar;

/// Daily distances for one bus line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineInput {
    /// km driven on a weekday.
    pub weekday_km: f64,
    /// km driven on a weekend day.
    pub weekend_km: f64,
}

/// Annualized split of one line's distance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct LineAllocation {
    /// Annual km servable by an electric vehicle.
    pub electric_km_annual: f64,
    /// Annual km beyond electric range, covered by diesel support.
    pub diesel_support_km_annual: f64,
    /// Dedicated diesel support vehicles this line requires.
    pub support_vehicles: u32,
}

/// Fleet-wide annual totals, recomputed from the line inputs on every
/// evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct FleetTotals {
    /// Annual km served electrically across the fleet.
    pub electric_km_annual: f64,
    /// Annual km covered by diesel support vehicles.
    pub diesel_support_km_annual: f64,
    /// Diesel support vehicles required across the fleet.
    pub support_vehicles: u32,
    /// Annual km the fleet would travel if every line ran diesel only.
    pub diesel_baseline_km_annual: f64,
}

/// Annual distance of one line, independent of any range limit.
pub fn annual_km(line: &LineInput, calendar: &ServiceCalendar) -> f64 {
    line.weekday_km * f64::from(calendar.weekday_count)
        + line.weekend_km * f64::from(calendar.weekend_count)
}

/// Split one line's annual distance between electric service and diesel
/// support.
///
/// Each day-type is checked against the range limit independently. One
/// support vehicle is provisioned per day-type whose daily distance exceeds
/// the limit, regardless of how large the overflow is. Without a range limit
/// the whole distance is diesel.
///
/// No rounding happens here; rounding is deferred to cost computation.
pub fn allocate_line(
    line: &LineInput,
    range_limit: Option<f64>,
    calendar: &ServiceCalendar,
) -> LineAllocation {
    let Some(limit) = range_limit else {
        return LineAllocation {
            electric_km_annual: 0.0,
            diesel_support_km_annual: annual_km(line, calendar),
            support_vehicles: 0,
        };
    };

    let mut allocation = LineAllocation::default();
    let day_types = [
        (line.weekday_km, calendar.weekday_count),
        (line.weekend_km, calendar.weekend_count),
    ];
    for (daily_km, day_count) in day_types {
        let electric = daily_km.min(limit);
        let overflow = (daily_km - limit).max(0.0);
        allocation.electric_km_annual += electric * f64::from(day_count);
        allocation.diesel_support_km_annual += overflow * f64::from(day_count);
        if daily_km > limit {
            allocation.support_vehicles += 1;
        }
    }
    allocation
}

/// Sum per-line allocations into fleet totals.
///
/// Accumulation is plain summation, so the result does not depend on line
/// order. The diesel baseline is the counterfactual all-diesel distance and
/// ignores the range limit entirely.
pub fn aggregate_fleet(
    lines: &[LineInput],
    range_limit: Option<f64>,
    calendar: &ServiceCalendar,
) -> FleetTotals {
    let mut totals = FleetTotals::default();
    for line in lines {
        let allocation = allocate_line(line, range_limit, calendar);
        totals.electric_km_annual += allocation.electric_km_annual;
        totals.diesel_support_km_annual += allocation.diesel_support_km_annual;
        totals.support_vehicles += allocation.support_vehicles;
        totals.diesel_baseline_km_annual += annual_km(line, calendar);
    }
    totals
}
