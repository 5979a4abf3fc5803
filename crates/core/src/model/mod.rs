//! The fleet cost and emissions model.
//!
//! Every entry point here is a pure function of its arguments: the same
//! configuration and line inputs always produce the same report. There is no
//! shared state, no I/O, and a full evaluation is O(fleet size + horizon).

pub mod allocation;
pub mod annual;
pub mod projection;
pub mod report;

pub use allocation::{aggregate_fleet, allocate_line, FleetTotals, LineAllocation, LineInput};
pub use projection::CostView;
pub use report::{evaluate, FleetReport, ScenarioSnapshot};
