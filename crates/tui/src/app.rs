use std::{fs, io, path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use fleetcast_core::{
    allocate_line,
    config::{AppConfig, MAX_FLEET_SIZE, MIN_FLEET_SIZE},
    evaluate, FleetReport, LineInput, ReportStore,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        Axis, Block, Borders, Chart, Dataset, GraphType, List, ListItem, ListState, Paragraph,
        Tabs,
    },
    Frame, Terminal,
};
use serde_json::Value;
use tracing::{error, info};

const TICK_RATE: Duration = Duration::from_millis(250);
const KM_STEP: f64 = 5.0;

#[derive(Debug, Clone)]
struct Theme {
    primary_fg: Color,
    accent: Color,
    muted: Color,
    selection_bg: Color,
    success: Color,
    warning: Color,
    danger: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary_fg: Color::White,
            accent: Color::Cyan,
            muted: Color::DarkGray,
            selection_bg: Color::DarkGray,
            success: Color::Green,
            warning: Color::Yellow,
            danger: Color::Red,
        }
    }
}

/// Load theme overrides from `theme.json` next to the config file, falling
/// back to the default palette.
fn load_theme() -> (Theme, Option<String>) {
    let mut theme = Theme::default();
    let path = theme_path();
    if !path.exists() {
        return (theme, None);
    }

    let json: Value = match fs::read_to_string(&path)
        .map_err(anyhow::Error::from)
        .and_then(|data| serde_json::from_str(&data).map_err(anyhow::Error::from))
    {
        Ok(value) => value,
        Err(err) => {
            return (
                theme,
                Some(format!(
                    "Failed to read {} ({err}); using default palette.",
                    path.display()
                )),
            )
        }
    };

    let mut applied = 0usize;
    let slots: [(&str, &mut Color); 7] = [
        ("foreground", &mut theme.primary_fg),
        ("accent", &mut theme.accent),
        ("muted", &mut theme.muted),
        ("selection", &mut theme.selection_bg),
        ("success", &mut theme.success),
        ("warning", &mut theme.warning),
        ("danger", &mut theme.danger),
    ];
    for (key, slot) in slots {
        if let Some(color) = json.get(key).and_then(Value::as_str).and_then(parse_color) {
            *slot = color;
            applied += 1;
        }
    }

    let summary = if applied == 0 {
        format!(
            "Loaded {} but no recognized color keys were applied.",
            path.display()
        )
    } else {
        format!("Loaded theme from {} ({applied} colors).", path.display())
    };
    (theme, Some(summary))
}

fn theme_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("fleetcast")
        .join("theme.json")
}

fn parse_color(value: &str) -> Option<Color> {
    let hex = value.trim().trim_start_matches('#');
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Overview,
    Fleet,
    Projection,
}

impl Screen {
    const ALL: [Screen; 3] = [Screen::Overview, Screen::Fleet, Screen::Projection];

    fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DayField {
    Weekday,
    Weekend,
}

/// Interactive dashboard over the fleet model.
pub struct FleetcastApp {
    config: AppConfig,
    lines: Vec<LineInput>,
    report: FleetReport,
    store: ReportStore,
    screen: Screen,
    line_cursor: usize,
    field: DayField,
    status: Option<String>,
    should_quit: bool,
    theme: Theme,
}

impl FleetcastApp {
    pub fn new(config: AppConfig) -> Self {
        let (theme, theme_status) = load_theme();
        let lines = default_lines(&config);
        let report = evaluate(&config, &lines);
        Self {
            config,
            lines,
            report,
            store: ReportStore::new(ReportStore::default_root()),
            screen: Screen::Overview,
            line_cursor: 0,
            field: DayField::Weekday,
            status: theme_status,
            should_quit: false,
            theme,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        enable_raw_mode().context("failed to enter raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("failed to create terminal")?;
        terminal.hide_cursor()?;
        terminal.clear()?;
        info!("Dashboard started with {} lines", self.lines.len());

        let result = self.event_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        result
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|frame| self.draw(frame))?;
            if self.should_quit {
                return Ok(());
            }

            if event::poll(TICK_RATE).context("failed to poll terminal events")? {
                if let Event::Key(key) = event::read().context("failed to read terminal event")? {
                    self.handle_key(key);
                }
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // Fleet editing keys take priority so navigation is never shadowed
        // by a global binding.
        if self.screen == Screen::Fleet && self.handle_fleet_key(key) {
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.screen = self.screen.next(),
            KeyCode::BackTab => self.screen = self.screen.previous(),
            KeyCode::Char('1') => self.screen = Screen::Overview,
            KeyCode::Char('2') => self.screen = Screen::Fleet,
            KeyCode::Char('3') => self.screen = Screen::Projection,
            KeyCode::Char('e') => self.export_markdown(),
            KeyCode::Char('x') => self.export_json(),
            KeyCode::Char('r') => self.reset_lines(),
            _ => {}
        }
    }

    fn handle_fleet_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::Left | KeyCode::Char('h') => self.field = DayField::Weekday,
            KeyCode::Right | KeyCode::Char('l') => self.field = DayField::Weekend,
            KeyCode::Char('+') | KeyCode::Char('=') => self.adjust_selected(KM_STEP),
            KeyCode::Char('-') | KeyCode::Char('_') => self.adjust_selected(-KM_STEP),
            KeyCode::Char('a') => self.add_line(),
            KeyCode::Char('d') => self.remove_line(),
            _ => return false,
        }
        true
    }

    fn move_cursor(&mut self, delta: isize) {
        if self.lines.is_empty() {
            self.line_cursor = 0;
            return;
        }
        let last = self.lines.len() as isize - 1;
        let next = (self.line_cursor as isize + delta).clamp(0, last);
        self.line_cursor = next as usize;
    }

    fn adjust_selected(&mut self, delta: f64) {
        let field = self.field;
        let Some(line) = self.lines.get_mut(self.line_cursor) else {
            return;
        };
        let slot = match field {
            DayField::Weekday => &mut line.weekday_km,
            DayField::Weekend => &mut line.weekend_km,
        };
        *slot = (*slot + delta).max(0.0);
        let value = *slot;
        self.recompute();
        self.status = Some(format!(
            "Line {}: {} {value} km",
            self.line_cursor + 1,
            field_label(field)
        ));
    }

    fn add_line(&mut self) {
        if self.lines.len() >= MAX_FLEET_SIZE as usize {
            self.status = Some(format!("Fleet is capped at {MAX_FLEET_SIZE} lines"));
            return;
        }
        self.lines.push(LineInput {
            weekday_km: self.config.fleet.default_weekday_km,
            weekend_km: self.config.fleet.default_weekend_km,
        });
        self.line_cursor = self.lines.len() - 1;
        self.recompute();
        self.status = Some(format!("Added line {}", self.lines.len()));
    }

    fn remove_line(&mut self) {
        if self.lines.len() <= MIN_FLEET_SIZE as usize {
            self.status = Some(format!("Fleet needs at least {MIN_FLEET_SIZE} line"));
            return;
        }
        let removed = self.line_cursor + 1;
        self.lines.remove(self.line_cursor);
        self.line_cursor = self.line_cursor.min(self.lines.len().saturating_sub(1));
        self.recompute();
        self.status = Some(format!("Removed line {removed}"));
    }

    fn reset_lines(&mut self) {
        self.lines = default_lines(&self.config);
        self.line_cursor = 0;
        self.recompute();
        self.status = Some("Fleet reset to configured defaults".to_string());
    }

    fn recompute(&mut self) {
        self.report = evaluate(&self.config, &self.lines);
    }

    fn export_markdown(&mut self) {
        match self.store.write_markdown(&self.report, &self.config) {
            Ok(path) => {
                info!("Wrote markdown report to {}", path.display());
                self.status = Some(format!("Report written to {}", path.display()));
            }
            Err(err) => {
                error!("Markdown export failed: {err:#}");
                self.status = Some(format!("Export failed: {err}"));
            }
        }
    }

    fn export_json(&mut self) {
        match self.store.write_json(&self.report) {
            Ok(path) => {
                info!("Wrote JSON report to {}", path.display());
                self.status = Some(format!("Report written to {}", path.display()));
            }
            Err(err) => {
                error!("JSON export failed: {err:#}");
                self.status = Some(format!("Export failed: {err}"));
            }
        }
    }

    fn draw(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(8),
                Constraint::Length(3),
            ])
            .split(frame.size());

        self.render_tabs(frame, chunks[0]);
        match self.screen {
            Screen::Overview => self.draw_overview(frame, chunks[1]),
            Screen::Fleet => self.draw_fleet(frame, chunks[1]),
            Screen::Projection => self.draw_projection(frame, chunks[1]),
        }
        self.render_status(frame, chunks[2]);
    }

    fn render_tabs(&self, frame: &mut Frame, area: Rect) {
        let titles = vec![
            Line::from("1 Overview"),
            Line::from("2 Fleet"),
            Line::from("3 Projection"),
        ];
        let tabs = Tabs::new(titles)
            .select(self.screen.index())
            .block(Block::default().borders(Borders::ALL).title("fleetcast"))
            .style(Style::default().fg(self.theme.muted))
            .highlight_style(
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(tabs, area);
    }

    fn draw_overview(&self, frame: &mut Frame, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);
        let top = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[0]);
        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[1]);

        let report = &self.report;
        let combined_cost =
            report.electric.annual_cost + report.diesel_support.annual_cost;
        let combined_emissions_t =
            (report.electric.annual_emissions + report.diesel_support.annual_emissions) / 1000.0;

        let costs = vec![
            self.value_line(
                "Electric + support, annual cost",
                format!("{} CHF", format_thousands(combined_cost)),
                self.theme.accent,
            ),
            self.value_line(
                "Electric + support, annual CO2",
                format!("{combined_emissions_t:.2} t"),
                self.theme.accent,
            ),
            self.value_line(
                "Diesel-only fleet, annual cost",
                format!(
                    "{} CHF",
                    format_thousands(report.diesel_baseline.annual_cost)
                ),
                self.theme.success,
            ),
            self.value_line(
                "Diesel-only fleet, annual CO2",
                format!("{:.2} t", report.diesel_baseline.annual_emissions / 1000.0),
                self.theme.success,
            ),
        ];
        self.render_panel(frame, top[0], "Current Costs & Emissions", costs);

        let per_km = vec![
            self.value_line(
                "Electric",
                format!(
                    "{:.2} CHF/km · {:.2} kg/km",
                    report.electric.cost_per_km, report.electric.emissions_per_km
                ),
                self.theme.accent,
            ),
            self.value_line(
                "Diesel support",
                format!(
                    "{:.2} CHF/km · {:.2} kg/km",
                    report.diesel_support.cost_per_km, report.diesel_support.emissions_per_km
                ),
                self.theme.warning,
            ),
            self.value_line(
                "Diesel only",
                format!(
                    "{:.2} CHF/km · {:.2} kg/km",
                    report.diesel_baseline.cost_per_km, report.diesel_baseline.emissions_per_km
                ),
                self.theme.success,
            ),
        ];
        self.render_panel(frame, top[1], "Per km", per_km);

        let savings_color = if report.annual_savings >= 0.0 {
            self.theme.success
        } else {
            self.theme.danger
        };
        let savings = vec![
            self.value_line(
                "Annual savings with electric",
                format!("{} CHF", format_thousands(report.annual_savings)),
                savings_color,
            ),
            self.value_line(
                "Annual CO2 reduction",
                format!("{} kg", format_thousands(report.annual_emission_reduction)),
                self.theme.success,
            ),
            self.value_line(
                "km share electric / support / diesel",
                format!(
                    "{:.2}% / {:.2}% / {:.2}%",
                    report.electric.km_share_pct,
                    report.diesel_support.km_share_pct,
                    report.diesel_baseline.km_share_pct
                ),
                self.theme.primary_fg,
            ),
        ];
        self.render_panel(frame, bottom[0], "Savings & Shares", savings);

        let totals = vec![
            self.value_line(
                "Fleet size",
                format!("{} lines", self.lines.len()),
                self.theme.primary_fg,
            ),
            self.value_line(
                "Electric km / year",
                format_thousands(report.totals.electric_km_annual),
                self.theme.accent,
            ),
            self.value_line(
                "Support km / year",
                format_thousands(report.totals.diesel_support_km_annual),
                self.theme.warning,
            ),
            self.value_line(
                "Support vehicles required",
                report.totals.support_vehicles.to_string(),
                self.theme.warning,
            ),
            self.value_line(
                "Diesel baseline km / year",
                format_thousands(report.totals.diesel_baseline_km_annual),
                self.theme.success,
            ),
        ];
        self.render_panel(frame, bottom[1], "Fleet Totals", totals);
    }

    fn draw_fleet(&mut self, frame: &mut Frame, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);

        let items: Vec<ListItem> = self
            .lines
            .iter()
            .enumerate()
            .map(|(idx, line)| {
                let selected = idx == self.line_cursor;
                let marker = if selected {
                    Span::styled("▶ ", Style::default().fg(self.theme.accent))
                } else {
                    Span::raw("  ")
                };
                let field_style = |field: DayField| {
                    if selected && self.field == field {
                        Style::default()
                            .fg(self.theme.accent)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(self.theme.primary_fg)
                    }
                };
                ListItem::new(Line::from(vec![
                    marker,
                    Span::raw(format!("Line {:<3}", idx + 1)),
                    Span::styled(
                        format!("weekday {:>6.1} km", line.weekday_km),
                        field_style(DayField::Weekday),
                    ),
                    Span::raw("  ·  "),
                    Span::styled(
                        format!("weekend {:>6.1} km", line.weekend_km),
                        field_style(DayField::Weekend),
                    ),
                ]))
            })
            .collect();

        let mut list_state = ListState::default();
        if !self.lines.is_empty() {
            list_state.select(Some(self.line_cursor.min(self.lines.len() - 1)));
        }
        let title = format!("Fleet ({} lines)", self.lines.len());
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(title))
            .highlight_style(Style::default().bg(self.theme.selection_bg));
        frame.render_stateful_widget(list, columns[0], &mut list_state);

        self.render_line_detail(frame, columns[1]);
    }

    fn render_line_detail(&self, frame: &mut Frame, area: Rect) {
        let mut lines: Vec<Line> = Vec::new();
        if let Some(line) = self.lines.get(self.line_cursor) {
            let allocation = allocate_line(
                line,
                self.config.electric.range_limit,
                &self.config.calendar,
            );
            lines.push(self.value_line(
                "Electric km / year",
                format_thousands(allocation.electric_km_annual),
                self.theme.accent,
            ));
            lines.push(self.value_line(
                "Support km / year",
                format_thousands(allocation.diesel_support_km_annual),
                self.theme.warning,
            ));
            lines.push(self.value_line(
                "Support vehicles",
                allocation.support_vehicles.to_string(),
                self.theme.warning,
            ));
            if let Some(limit) = self.config.electric.range_limit {
                lines.push(self.value_line(
                    "Electric range limit",
                    format!("{limit:.1} km/day"),
                    self.theme.muted,
                ));
            }
        } else {
            lines.push(Line::from("No line selected"));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "↑/↓ line · ←/→ field · +/- adjust 5 km",
            Style::default().fg(self.theme.muted),
        )));
        lines.push(Line::from(Span::styled(
            "a add · d remove · r reset",
            Style::default().fg(self.theme.muted),
        )));

        let title = format!("Line {}", self.line_cursor + 1);
        let panel = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(title));
        frame.render_widget(panel, area);
    }

    fn draw_projection(&self, frame: &mut Frame, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        self.render_series_chart(
            frame,
            rows[0],
            "Yearly cost, cash view (CHF)",
            &self.report.yearly_cost_electric,
            &self.report.yearly_cost_diesel,
        );
        self.render_series_chart(
            frame,
            rows[1],
            "Cumulative cost, amortized view (CHF)",
            &self.report.cumulative_cost_electric,
            &self.report.cumulative_cost_diesel,
        );
    }

    fn render_series_chart(
        &self,
        frame: &mut Frame,
        area: Rect,
        title: &str,
        electric: &[f64],
        diesel: &[f64],
    ) {
        let electric_points = series_points(electric);
        let diesel_points = series_points(diesel);
        let years = electric.len().max(diesel.len()).max(1) as f64;
        let max_cost = electric
            .iter()
            .chain(diesel.iter())
            .fold(0.0_f64, |acc, value| acc.max(*value))
            .max(1.0);
        let y_max = max_cost * 1.05;

        let datasets = vec![
            Dataset::default()
                .name("Electric")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(self.theme.accent))
                .data(&electric_points),
            Dataset::default()
                .name("Diesel")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(self.theme.success))
                .data(&diesel_points),
        ];

        let x_labels = vec![
            Span::raw("1"),
            Span::raw(format!("{:.0}", (years / 2.0).ceil())),
            Span::raw(format!("{years:.0}")),
        ];
        let y_labels = vec![
            Span::raw("0"),
            Span::raw(format_compact(y_max / 2.0)),
            Span::raw(format_compact(y_max)),
        ];

        let chart = Chart::new(datasets)
            .block(Block::default().borders(Borders::ALL).title(title))
            .x_axis(
                Axis::default()
                    .title("Year")
                    .style(Style::default().fg(self.theme.muted))
                    .bounds([1.0, years])
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .style(Style::default().fg(self.theme.muted))
                    .bounds([0.0, y_max])
                    .labels(y_labels),
            );
        frame.render_widget(chart, area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let text = self.status.clone().unwrap_or_else(|| {
            "q quit · Tab screens · e/x export report · 2 then ↑↓←→ +/- edit fleet".to_string()
        });
        let status = Paragraph::new(Line::from(text))
            .block(Block::default().borders(Borders::ALL).title("Status"))
            .alignment(Alignment::Left)
            .style(Style::default().fg(self.theme.primary_fg));
        frame.render_widget(status, area);
    }

    fn render_panel(&self, frame: &mut Frame, area: Rect, title: &str, lines: Vec<Line>) {
        let panel = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(title.to_string()));
        frame.render_widget(panel, area);
    }

    fn value_line(&self, label: &str, value: String, value_color: Color) -> Line<'static> {
        Line::from(vec![
            Span::styled(
                format!("{label}: "),
                Style::default().fg(self.theme.muted),
            ),
            Span::styled(
                value,
                Style::default()
                    .fg(value_color)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    }
}

fn default_lines(config: &AppConfig) -> Vec<LineInput> {
    let line = LineInput {
        weekday_km: config.fleet.default_weekday_km,
        weekend_km: config.fleet.default_weekend_km,
    };
    vec![line; config.fleet.size as usize]
}

fn field_label(field: DayField) -> &'static str {
    match field {
        DayField::Weekday => "weekday",
        DayField::Weekend => "weekend",
    }
}

fn series_points(series: &[f64]) -> Vec<(f64, f64)> {
    series
        .iter()
        .enumerate()
        .map(|(year, cost)| ((year + 1) as f64, *cost))
        .collect()
}

fn format_thousands(value: f64) -> String {
    let negative = value < 0.0;
    let rounded = format!("{:.2}", value.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), "00"));

    let mut grouped = String::new();
    for (idx, digit) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped}.{frac_part}")
}

fn format_compact(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("{:.0}k", value / 1_000.0)
    } else {
        format!("{value:.0}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_are_grouped() {
        assert_eq!(format_thousands(0.0), "0.00");
        assert_eq!(format_thousands(1_234.5), "1,234.50");
        assert_eq!(format_thousands(1_234_567.891), "1,234,567.89");
        assert_eq!(format_thousands(-40_475.0), "-40,475.00");
    }

    #[test]
    fn compact_labels_scale_with_magnitude() {
        assert_eq!(format_compact(950.0), "950");
        assert_eq!(format_compact(12_600.0), "13k");
        assert_eq!(format_compact(2_400_000.0), "2.4M");
    }

    #[test]
    fn hex_colors_parse() {
        assert_eq!(parse_color("#89b4fa"), Some(Color::Rgb(0x89, 0xb4, 0xfa)));
        assert_eq!(parse_color("a6e3a1"), Some(Color::Rgb(0xa6, 0xe3, 0xa1)));
        assert_eq!(parse_color("#xyz"), None);
    }
}
