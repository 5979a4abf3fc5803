#![warn(clippy::all, missing_docs)]

//! Core domain logic for the fleetcast electrification model.
//!
//! This crate hosts configuration handling, the cost/emissions model
//! (line allocation, annual costs, multi-year projection), report
//! assembly, and report export used by the terminal UI and any future
//! frontends.

pub mod config;
pub mod export;
pub mod model;

pub use config::{AppConfig, ConfigError, ServiceCalendar, VehicleParams};
pub use export::{ExportEntry, ReportStore};
pub use model::{
    aggregate_fleet, allocate_line, evaluate, CostView, FleetReport, FleetTotals, LineAllocation,
    LineInput, ScenarioSnapshot,
};
