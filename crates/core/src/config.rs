//! Application configuration loading and validation.
//!
//! The configuration is read once at startup and handed to every component
//! explicitly; nothing in the model mutates it afterwards. Invalid values are
//! rejected here so the model never runs with a broken parameter set.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// Smallest fleet the model accepts.
pub const MIN_FLEET_SIZE: u32 = 1;
/// Largest fleet the model accepts.
pub const MAX_FLEET_SIZE: u32 = 100;

/// Default configuration written on first run.
const DEFAULT_CONFIG: &str = r#"# fleetcast configuration.
# All monetary values are CHF, distances are km, emissions are kg CO2.

[calendar]
# Day counts defining the annual service pattern.
weekday_count = 250
weekend_count = 115

[projection]
# Horizon of the multi-year cost projection.
years = 10
# Fractional annual fuel/energy price inflation per vehicle type.
inflation_rate_electric = 0.02
inflation_rate_diesel = 0.04
# One-time charging infrastructure cost, booked in year 0 of the
# electric projection.
infrastructure_cost = 1000000.0

[fleet]
# Number of lines (one bus per line), adjustable in the UI within 1..=100.
size = 10
# Seed values for newly added lines.
default_weekday_km = 100.0
default_weekend_km = 50.0

[electric]
fuel_unit_cost = 0.25       # CHF per kWh
consumption_rate = 1.3      # kWh per km
maintenance_cost = 15000.0  # CHF per vehicle per year
purchase_price = 650000.0
subsidy = 80000.0
amortization_period = 10    # years
emission_factor = 0.05      # kg CO2 per km (grid mix)
range_limit = 120.0         # km per day before diesel support kicks in

[diesel]
fuel_unit_cost = 1.8        # CHF per litre
consumption_rate = 0.35     # litres per km
maintenance_cost = 20000.0
purchase_price = 450000.0
subsidy = 0.0
amortization_period = 8
emission_factor = 1.3
# no range_limit: diesel range is treated as unbounded
"#;

/// Per-vehicle-type economic and physical constants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleParams {
    /// Currency per fuel or energy unit (CHF per litre or kWh).
    pub fuel_unit_cost: f64,
    /// Fuel or energy units consumed per km.
    pub consumption_rate: f64,
    /// Annual maintenance cost per vehicle.
    pub maintenance_cost: f64,
    /// Full vehicle purchase price.
    pub purchase_price: f64,
    /// Purchase subsidy, deducted from the price before amortization.
    #[serde(default)]
    pub subsidy: f64,
    /// Replacement period in years.
    pub amortization_period: u32,
    /// kg CO2 emitted per km.
    pub emission_factor: f64,
    /// Daily km an electric vehicle can serve before a diesel support
    /// vehicle is required. `None` means unbounded (diesel).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range_limit: Option<f64>,
}

/// Day counts defining the annual service pattern.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ServiceCalendar {
    /// Weekdays per year.
    pub weekday_count: u32,
    /// Weekend days per year.
    pub weekend_count: u32,
}

/// Settings driving the multi-year projection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProjectionSettings {
    /// Projection horizon in years.
    pub years: u32,
    /// Fractional annual electricity price inflation.
    pub inflation_rate_electric: f64,
    /// Fractional annual diesel price inflation.
    pub inflation_rate_diesel: f64,
    /// One-time electrification infrastructure cost, booked in year 0.
    pub infrastructure_cost: f64,
}

/// Fleet sizing defaults used to seed the interactive line editor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FleetSettings {
    /// Initial number of lines (one bus per line).
    pub size: u32,
    /// Default weekday distance for a new line.
    pub default_weekday_km: f64,
    /// Default weekend distance for a new line.
    pub default_weekend_km: f64,
}

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Annual day pattern.
    pub calendar: ServiceCalendar,
    /// Projection horizon and inflation settings.
    pub projection: ProjectionSettings,
    /// Fleet sizing defaults.
    pub fleet: FleetSettings,
    /// Electric vehicle parameters.
    pub electric: VehicleParams,
    /// Diesel vehicle parameters.
    pub diesel: VehicleParams,
}

/// Violations of the configuration invariants, naming the offending field.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A monetary or physical quantity was negative.
    #[error("{field} must not be negative (got {value})")]
    Negative {
        /// Dotted path of the offending field.
        field: String,
        /// The rejected value.
        value: f64,
    },
    /// An amortization period shorter than one year.
    #[error("{field} must be at least 1 year")]
    AmortizationTooShort {
        /// Dotted path of the offending field.
        field: String,
    },
    /// A subsidy larger than the purchase price it applies to.
    #[error("{field} ({subsidy}) exceeds the purchase price ({purchase_price})")]
    SubsidyExceedsPrice {
        /// Dotted path of the offending field.
        field: String,
        /// The rejected subsidy.
        subsidy: f64,
        /// The purchase price it was checked against.
        purchase_price: f64,
    },
    /// An inflation rate below the -100% floor.
    #[error("{field} must be -1.0 or greater (got {value})")]
    InflationBelowFloor {
        /// Dotted path of the offending field.
        field: String,
        /// The rejected value.
        value: f64,
    },
    /// A projection horizon of zero years.
    #[error("projection.years must be at least 1")]
    EmptyHorizon,
    /// A fleet size outside the supported range.
    #[error("fleet.size must be between 1 and 100 (got {0})")]
    FleetSizeOutOfRange(u32),
}

impl AppConfig {
    /// Load and validate the configuration from the default location,
    /// applying `FLEETCAST_*` environment overrides on top of the file.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load and validate the configuration from an explicit path.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let settings = config::Config::builder()
            .add_source(config::File::from(path.to_path_buf()))
            .add_source(
                config::Environment::with_prefix("FLEETCAST")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("failed to read configuration {}", path.display()))?;

        let app_config: Self = settings
            .try_deserialize()
            .with_context(|| format!("failed to parse configuration {}", path.display()))?;
        app_config
            .validate()
            .with_context(|| format!("invalid configuration {}", path.display()))?;
        Ok(app_config)
    }

    /// Check every configuration invariant, reporting the first violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_vehicle("electric", &self.electric)?;
        validate_vehicle("diesel", &self.diesel)?;

        if self.projection.years == 0 {
            return Err(ConfigError::EmptyHorizon);
        }
        non_negative(
            "projection.infrastructure_cost",
            self.projection.infrastructure_cost,
        )?;
        inflation_floor(
            "projection.inflation_rate_electric",
            self.projection.inflation_rate_electric,
        )?;
        inflation_floor(
            "projection.inflation_rate_diesel",
            self.projection.inflation_rate_diesel,
        )?;

        if !(MIN_FLEET_SIZE..=MAX_FLEET_SIZE).contains(&self.fleet.size) {
            return Err(ConfigError::FleetSizeOutOfRange(self.fleet.size));
        }
        non_negative("fleet.default_weekday_km", self.fleet.default_weekday_km)?;
        non_negative("fleet.default_weekend_km", self.fleet.default_weekend_km)?;

        Ok(())
    }
}

fn validate_vehicle(prefix: &str, params: &VehicleParams) -> Result<(), ConfigError> {
    non_negative(&format!("{prefix}.fuel_unit_cost"), params.fuel_unit_cost)?;
    non_negative(
        &format!("{prefix}.consumption_rate"),
        params.consumption_rate,
    )?;
    non_negative(
        &format!("{prefix}.maintenance_cost"),
        params.maintenance_cost,
    )?;
    non_negative(&format!("{prefix}.purchase_price"), params.purchase_price)?;
    non_negative(&format!("{prefix}.subsidy"), params.subsidy)?;
    non_negative(&format!("{prefix}.emission_factor"), params.emission_factor)?;
    if let Some(limit) = params.range_limit {
        non_negative(&format!("{prefix}.range_limit"), limit)?;
    }

    if params.amortization_period < 1 {
        return Err(ConfigError::AmortizationTooShort {
            field: format!("{prefix}.amortization_period"),
        });
    }
    if params.subsidy > params.purchase_price {
        return Err(ConfigError::SubsidyExceedsPrice {
            field: format!("{prefix}.subsidy"),
            subsidy: params.subsidy,
            purchase_price: params.purchase_price,
        });
    }
    Ok(())
}

fn non_negative(field: &str, value: f64) -> Result<(), ConfigError> {
    if value < 0.0 {
        return Err(ConfigError::Negative {
            field: field.to_string(),
            value,
        });
    }
    Ok(())
}

fn inflation_floor(field: &str, value: f64) -> Result<(), ConfigError> {
    if value < -1.0 {
        return Err(ConfigError::InflationBelowFloor {
            field: field.to_string(),
            value,
        });
    }
    Ok(())
}

/// Path of the configuration file under the platform config directory.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("fleetcast")
        .join("config.toml")
}

/// Write the default configuration file if none exists yet, returning its
/// path either way.
pub fn ensure_default_config() -> Result<PathBuf> {
    let path = default_config_path();
    if path.exists() {
        return Ok(path);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(&path, DEFAULT_CONFIG)
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!("Wrote default configuration to {}", path.display());
    Ok(path)
}
