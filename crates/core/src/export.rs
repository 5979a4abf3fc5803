//! Markdown and JSON report export.

use std::{fmt::Write as _, fs, path::PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::warn;

use crate::{config::AppConfig, model::report::FleetReport};

/// Root directory under `~/.config` used for exported reports.
pub const DEFAULT_EXPORT_DIR: &str = "fleetcast/reports";

/// Render the human-readable comparison report.
pub fn render_markdown(report: &FleetReport, config: &AppConfig) -> String {
    let years = config.projection.years;
    let combined_cost = report.electric.annual_cost + report.diesel_support.annual_cost;
    let combined_emissions_t =
        (report.electric.annual_emissions + report.diesel_support.annual_emissions) / 1000.0;

    let mut out = String::new();
    let _ = writeln!(out, "# Electric vs. Diesel Fleet Comparison");
    let _ = writeln!(out);
    let _ = writeln!(out, "## Current Annual Costs and Emissions");
    let _ = writeln!(
        out,
        "- Electric buses + diesel support, annual cost: {combined_cost:.2} CHF"
    );
    let _ = writeln!(
        out,
        "- Electric buses + diesel support, annual CO2: {combined_emissions_t:.2} t"
    );
    let _ = writeln!(
        out,
        "- Diesel-only fleet, annual cost: {:.2} CHF",
        report.diesel_baseline.annual_cost
    );
    let _ = writeln!(
        out,
        "- Diesel-only fleet, annual CO2: {:.2} t",
        report.diesel_baseline.annual_emissions / 1000.0
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "## Cost per km");
    let _ = writeln!(
        out,
        "- Electric buses: {:.2} CHF/km",
        report.electric.cost_per_km
    );
    let _ = writeln!(
        out,
        "- Diesel support buses: {:.2} CHF/km",
        report.diesel_support.cost_per_km
    );
    let _ = writeln!(
        out,
        "- Diesel-only buses: {:.2} CHF/km",
        report.diesel_baseline.cost_per_km
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "## CO2 Emissions per km");
    let _ = writeln!(
        out,
        "- Electric buses: {:.2} kg/km",
        report.electric.emissions_per_km
    );
    let _ = writeln!(
        out,
        "- Diesel support buses: {:.2} kg/km",
        report.diesel_support.emissions_per_km
    );
    let _ = writeln!(
        out,
        "- Diesel-only buses: {:.2} kg/km",
        report.diesel_baseline.emissions_per_km
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "## Annual Savings and Emission Reduction");
    let _ = writeln!(
        out,
        "- Annual cost savings with electric buses: {:.2} CHF",
        report.annual_savings
    );
    let _ = writeln!(
        out,
        "- Annual CO2 reduction with electric buses: {:.2} kg",
        report.annual_emission_reduction
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "## Annual km Share");
    let _ = writeln!(
        out,
        "- Electric buses: {:.2}%",
        report.electric.km_share_pct
    );
    let _ = writeln!(
        out,
        "- Diesel support buses: {:.2}%",
        report.diesel_support.km_share_pct
    );
    let _ = writeln!(
        out,
        "- Diesel-only buses: {:.2}%",
        report.diesel_baseline.km_share_pct
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "## Fleet Provisioning");
    let _ = writeln!(
        out,
        "- Diesel support vehicles required: {}",
        report.totals.support_vehicles
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "## Cost Projection over {years} Years");
    let _ = writeln!(
        out,
        "| Year | Electric (cash) | Diesel (cash) | Electric (cumulative) | Diesel (cumulative) |"
    );
    let _ = writeln!(out, "| ---- | --------------- | ------------- | --------------------- | ------------------- |");
    for year in 0..years as usize {
        let _ = writeln!(
            out,
            "| {} | {:.2} | {:.2} | {:.2} | {:.2} |",
            year + 1,
            report.yearly_cost_electric[year],
            report.yearly_cost_diesel[year],
            report.cumulative_cost_electric[year],
            report.cumulative_cost_diesel[year],
        );
    }
    out
}

/// Metadata describing an exported report file.
#[derive(Debug, Clone)]
pub struct ExportEntry {
    /// Absolute path of the exported file.
    pub path: PathBuf,
    /// Timestamp the file was written.
    pub exported_at: DateTime<Utc>,
}

#[derive(Serialize)]
struct JsonPayload<'a> {
    exported_at: DateTime<Utc>,
    report: &'a FleetReport,
}

/// Writes timestamped report files and lists previous exports.
pub struct ReportStore {
    root: PathBuf,
}

impl ReportStore {
    /// Create a store rooted at the provided directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Default location under the user's config directory.
    pub fn default_root() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_EXPORT_DIR)
    }

    /// Write the markdown report, returning the path of the new file.
    pub fn write_markdown(&self, report: &FleetReport, config: &AppConfig) -> Result<PathBuf> {
        let path = self.target_path("md")?;
        fs::write(&path, render_markdown(report, config))
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(path)
    }

    /// Write the raw report as JSON, returning the path of the new file.
    pub fn write_json(&self, report: &FleetReport) -> Result<PathBuf> {
        let path = self.target_path("json")?;
        let payload = JsonPayload {
            exported_at: Utc::now(),
            report,
        };
        let serialized =
            serde_json::to_vec_pretty(&payload).context("failed to serialize report")?;
        fs::write(&path, serialized)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(path)
    }

    /// All exported reports, most recent first. Unreadable entries are
    /// skipped with a warning.
    pub fn entries(&self) -> Result<Vec<ExportEntry>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();
        for entry in fs::read_dir(&self.root).context("failed to read report directory")? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let extension = entry.path().extension().and_then(|ext| ext.to_str()).map(
                str::to_string,
            );
            if !matches!(extension.as_deref(), Some("md") | Some("json")) {
                continue;
            }

            match entry.metadata().and_then(|meta| meta.modified()) {
                Ok(modified) => entries.push(ExportEntry {
                    path: entry.path(),
                    exported_at: modified.into(),
                }),
                Err(err) => {
                    warn!("Failed to stat report {:?}: {err}", entry.path());
                }
            }
        }

        entries.sort_by(|a, b| b.exported_at.cmp(&a.exported_at));
        Ok(entries)
    }

    fn target_path(&self, extension: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.root)
            .with_context(|| format!("failed to create {}", self.root.display()))?;
        let file_name = format!("report_{}.{extension}", Utc::now().format("%Y%m%d%H%M%S"));
        Ok(self.root.join(file_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::{FleetSettings, ProjectionSettings, ServiceCalendar, VehicleParams},
        model::{evaluate, LineInput},
    };
    use tempfile::tempdir;

    fn sample_config() -> AppConfig {
        AppConfig {
            calendar: ServiceCalendar {
                weekday_count: 250,
                weekend_count: 115,
            },
            projection: ProjectionSettings {
                years: 3,
                inflation_rate_electric: 0.02,
                inflation_rate_diesel: 0.04,
                infrastructure_cost: 500_000.0,
            },
            fleet: FleetSettings {
                size: 2,
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

    fn sample_report() -> FleetReport {
        let lines = vec![
            LineInput {
                weekday_km: 100.0,
                weekend_km: 50.0,
            },
            LineInput {
                weekday_km: 150.0,
                weekend_km: 30.0,
            },
        ];
        evaluate(&sample_config(), &lines)
    }

    #[test]
    fn markdown_contains_every_section() {
        let config = sample_config();
        let markdown = render_markdown(&sample_report(), &config);

        assert!(markdown.contains("# Electric vs. Diesel Fleet Comparison"));
        assert!(markdown.contains("## Current Annual Costs and Emissions"));
        assert!(markdown.contains("## Cost per km"));
        assert!(markdown.contains("## CO2 Emissions per km"));
        assert!(markdown.contains("## Annual Savings and Emission Reduction"));
        assert!(markdown.contains("## Annual km Share"));
        assert!(markdown.contains("## Cost Projection over 3 Years"));
        // One table row per projection year.
        assert_eq!(markdown.matches("| 1 |").count(), 1);
        assert_eq!(markdown.matches("| 3 |").count(), 1);
    }

    #[test]
    fn store_writes_and_lists_reports() -> Result<()> {
        let dir = tempdir()?;
        let store = ReportStore::new(dir.path());
        let config = sample_config();
        let report = sample_report();

        let markdown_path = store.write_markdown(&report, &config)?;
        assert!(markdown_path.exists());
        assert_eq!(markdown_path.extension().and_then(|e| e.to_str()), Some("md"));

        let json_path = store.write_json(&report)?;
        let parsed: serde_json::Value = serde_json::from_str(&fs::read_to_string(&json_path)?)?;
        assert!(parsed["report"]["totals"]["diesel_baseline_km_annual"].is_number());

        let entries = store.entries()?;
        assert_eq!(entries.len(), 2);
        Ok(())
    }

    #[test]
    fn empty_store_lists_nothing() -> Result<()> {
        let dir = tempdir()?;
        let store = ReportStore::new(dir.path().join("never-written"));
        assert!(store.entries()?.is_empty());
        Ok(())
    }
}
