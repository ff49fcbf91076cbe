//! Colorful console output for JobRisk.
//!
//! Provides a custom `tracing` layer that formats startup and scoring
//! events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (artifacts, dataset, server, scores)
//! - **WARN**: Clamped predictions, rejected requests, missing dataset
//! - **DEBUG**: Upskilling simulations
//! - **TRACE**: Scoring state transitions

use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Instant;

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crates whose events the console layer formats.
const TARGETS: [&str; 5] = [
    "jobrisk_model",
    "jobrisk_scoring",
    "jobrisk_dashboard",
    "jobrisk_web",
    "jobrisk::",
];

/// Initializes the console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the JobRisk banner and sets up tracing.
pub fn init() {
    INIT.get_or_init(|| {
        EPOCH.get_or_init(Instant::now);
        print_banner();

        let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
        let filter = env_filter(env.as_deref());

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(RiskConsoleLayer)
            .try_init();
    });
}

/// Filter used when `RUST_LOG` is unset or blank.
const DEFAULT_FILTER: &str =
    "warn,jobrisk_model=info,jobrisk_scoring=info,jobrisk_dashboard=info,jobrisk_web=info,jobrisk=info";

/// `RUST_LOG` replaces the per-crate defaults entirely.
fn env_filter(env: Option<&str>) -> EnvFilter {
    match env.map(str::trim).filter(|s| !s.is_empty()) {
        Some(spec) => EnvFilter::builder()
            .with_default_directive(LevelFilter::WARN.into())
            .parse_lossy(spec),
        None => EnvFilter::new(DEFAULT_FILTER),
    }
}

fn elapsed_secs() -> f64 {
    EPOCH.get().map(|e| e.elapsed().as_secs_f64()).unwrap_or(0.0)
}

fn print_banner() {
    let banner = r#"
     _       _     ____  _     _
    | | ___ | |__ |  _ \(_)___| | __
 _  | |/ _ \| '_ \| |_) | / __| |/ /
| |_| | (_) | |_) |  _ <| \__ \   <
 \___/ \___/|_.__/|_| \_\_|___/_|\_\
"#;

    let version_line = format!(
        "            v{} - Automation Risk 2030\n",
        VERSION
    );

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats JobRisk events with colors.
pub struct RiskConsoleLayer;

impl<S: Subscriber> Layer<S> for RiskConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let target = metadata.target();

        if !TARGETS.iter().any(|t| target.starts_with(t)) && target != "jobrisk" {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    message: Option<String>,
    model: Option<String>,
    path: Option<String>,
    reason: Option<String>,
    job: Option<String>,
    bucket: Option<String>,
    axis: Option<String>,
    phase: Option<String>,
    addr: Option<String>,
    job_labels: Option<u64>,
    education_labels: Option<u64>,
    records: Option<u64>,
    risk: Option<f64>,
    raw: Option<f64>,
    new_risk: Option<f64>,
    delta: Option<f64>,
    clamped_to: Option<f64>,
    clamped: Option<bool>,
    already_present: Option<bool>,
    dashboard: Option<bool>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.record_str(field, s.trim_matches('"'));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        let value = Some(value.to_string());
        match field.name() {
            "event" => self.event = value,
            "message" => self.message = value,
            "model" => self.model = value,
            "path" => self.path = value,
            "reason" => self.reason = value,
            "job" => self.job = value,
            "bucket" => self.bucket = value,
            "axis" => self.axis = value,
            "phase" => self.phase = value,
            "addr" => self.addr = value,
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "job_labels" => self.job_labels = Some(value),
            "education_labels" => self.education_labels = Some(value),
            "records" => self.records = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        match field.name() {
            "risk" => self.risk = Some(value),
            "raw" => self.raw = Some(value),
            "new_risk" => self.new_risk = Some(value),
            "delta" => self.delta = Some(value),
            "clamped" => self.clamped_to = Some(value),
            _ => {}
        }
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        match field.name() {
            "clamped" => self.clamped = Some(value),
            "already_present" => self.already_present = Some(value),
            "dashboard" => self.dashboard = Some(value),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    let event = v.event.as_deref().unwrap_or("");

    match event {
        "artifacts_loaded" => format_artifacts_loaded(v),
        "dataset_loaded" => format_dataset_loaded(v),
        "dataset_unavailable" => format_dataset_unavailable(v),
        "server_start" => format_server_start(v),
        "score" => format_score(v),
        "simulate" => format_simulate(v),
        "clamped" => format_clamped(v),
        "request_rejected" => format_request_rejected(v),
        "phase" => format_phase(v, level),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_artifacts_loaded(v: &EventVisitor) -> String {
    format!(
        "{} {} Artifacts loaded │ {} │ {} job titles │ {} education levels",
        format_elapsed(),
        "▶".bright_green().bold(),
        v.model.as_deref().unwrap_or("model").white().bold(),
        v.job_labels
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .bright_yellow(),
        v.education_labels
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .bright_yellow(),
    )
}

fn format_dataset_loaded(v: &EventVisitor) -> String {
    format!(
        "{} {} Dataset loaded │ {} │ {} records",
        format_elapsed(),
        "▶".bright_green().bold(),
        v.path.as_deref().unwrap_or("?").white(),
        v.records
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .bright_yellow(),
    )
}

fn format_dataset_unavailable(v: &EventVisitor) -> String {
    format!(
        "{} {} Dashboard disabled │ {} │ {}\n          {}",
        format_elapsed(),
        "⚠".bright_yellow().bold(),
        v.path.as_deref().unwrap_or("?").white(),
        v.reason.as_deref().unwrap_or("unknown error").yellow(),
        "Scoring is still available.".bright_black(),
    )
}

fn format_server_start(v: &EventVisitor) -> String {
    let addr = v.addr.as_deref().unwrap_or("?");
    let mut output = format!(
        "{} {} Server listening on {}",
        format_elapsed(),
        "▸".bright_green(),
        format!("http://{}", addr).bright_cyan().underline()
    );
    if v.dashboard == Some(false) {
        output.push_str(&format!(" │ {}", "dashboard off".yellow()));
    }
    output
}

fn format_score(v: &EventVisitor) -> String {
    let risk = v.risk.unwrap_or(0.0);
    let bucket = v.bucket.as_deref().unwrap_or("?");

    let mut output = format!(
        "{} {} {} │ {} │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        v.job.as_deref().unwrap_or("?").white().bold(),
        format_risk(risk),
        format_bucket(bucket),
    );
    if v.clamped == Some(true) {
        output.push_str(&format!(" │ {}", "clamped".bright_yellow()));
    }
    output
}

fn format_simulate(v: &EventVisitor) -> String {
    let axis = v.axis.as_deref().unwrap_or("?");
    if v.already_present == Some(true) {
        return format!(
            "{} {} +{} │ {}",
            format_elapsed(),
            "✓".bright_green(),
            axis.white(),
            "already present".bright_black()
        );
    }

    let delta = v.delta.unwrap_or(0.0);
    let delta_str = if delta > 0.0 {
        format!("-{:.1}", delta).bright_green().to_string()
    } else if delta < 0.0 {
        format!("+{:.1}", -delta).bright_red().to_string()
    } else {
        "±0.0".white().to_string()
    };

    format!(
        "{} {} +{} │ {} │ {}",
        format_elapsed(),
        "⚡".bright_cyan(),
        axis.white(),
        format_risk(v.new_risk.unwrap_or(0.0)),
        delta_str
    )
}

fn format_clamped(v: &EventVisitor) -> String {
    format!(
        "{} {} Model output {} clamped to {}",
        format_elapsed(),
        "⚠".bright_yellow().bold(),
        format!("{:.2}", v.raw.unwrap_or(0.0)).bright_red(),
        format!("{:.1}%", v.clamped_to.unwrap_or(0.0)).yellow(),
    )
}

fn format_request_rejected(v: &EventVisitor) -> String {
    format!(
        "{} {} Request rejected │ {}",
        format_elapsed(),
        "✗".bright_red(),
        v.reason.as_deref().unwrap_or("unknown").yellow(),
    )
}

fn format_phase(v: &EventVisitor, level: Level) -> String {
    if level != Level::TRACE {
        return String::new();
    }
    format!(
        "{} {} {}",
        format_elapsed(),
        "·".bright_black(),
        v.phase.as_deref().unwrap_or("?").bright_black()
    )
}

fn format_risk(risk: f64) -> String {
    let text = format!("{:.1}%", risk);
    if risk > 70.0 {
        text.bright_red().bold().to_string()
    } else if risk > 30.0 {
        text.bright_yellow().to_string()
    } else {
        text.bright_green().to_string()
    }
}

fn format_bucket(bucket: &str) -> String {
    match bucket {
        "High Risk" => bucket.bright_red().to_string(),
        "Medium Risk" => bucket.yellow().to_string(),
        "Low Risk" => bucket.bright_green().to_string(),
        _ => bucket.white().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visitor(event: &str) -> EventVisitor {
        EventVisitor {
            event: Some(event.to_string()),
            ..Default::default()
        }
    }

    fn enabled_under(filter: EnvFilter) -> (bool, bool, bool) {
        let subscriber = tracing_subscriber::registry().with(filter);
        tracing::subscriber::with_default(subscriber, || {
            (
                tracing::enabled!(target: "jobrisk_scoring::session", Level::INFO),
                tracing::enabled!(target: "jobrisk_scoring::session", Level::DEBUG),
                tracing::enabled!(target: "jobrisk_scoring::session", Level::TRACE),
            )
        })
    }

    #[test]
    fn test_default_filter_is_info_for_jobrisk() {
        assert_eq!(enabled_under(env_filter(None)), (true, false, false));
        assert_eq!(enabled_under(env_filter(Some("  "))), (true, false, false));
    }

    #[test]
    fn test_rust_log_raises_scoring_to_trace() {
        let filter = env_filter(Some("jobrisk_scoring=trace"));
        assert_eq!(enabled_under(filter), (true, true, true));
    }

    #[test]
    fn test_rust_log_can_silence_scoring() {
        let filter = env_filter(Some("jobrisk_scoring=error"));
        assert_eq!(enabled_under(filter), (false, false, false));
    }

    #[test]
    fn test_unknown_event_is_silent() {
        assert!(format_event(&visitor("solve_start"), Level::INFO).is_empty());
        assert!(format_event(&EventVisitor::default(), Level::INFO).is_empty());
    }

    #[test]
    fn test_phase_only_at_trace() {
        let mut v = visitor("phase");
        v.phase = Some("scored".to_string());
        assert!(format_event(&v, Level::DEBUG).is_empty());
        assert!(format_event(&v, Level::TRACE).contains("scored"));
    }

    #[test]
    fn test_score_line() {
        let mut v = visitor("score");
        v.job = Some("Data Scientist".to_string());
        v.risk = Some(30.0);
        v.bucket = Some("Low Risk".to_string());
        v.clamped = Some(true);

        let line = format_event(&v, Level::INFO);
        assert!(line.contains("Data Scientist"));
        assert!(line.contains("30.0%"));
        assert!(line.contains("clamped"));
    }

    #[test]
    fn test_dataset_counts_are_grouped() {
        let mut v = visitor("dataset_loaded");
        v.records = Some(20_000);
        assert!(format_event(&v, Level::INFO).contains("20,000"));
    }

    #[test]
    fn test_simulate_already_present() {
        let mut v = visitor("simulate");
        v.axis = Some("tech".to_string());
        v.already_present = Some(true);
        assert!(format_event(&v, Level::DEBUG).contains("already present"));
    }
}
