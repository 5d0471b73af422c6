//! Colorful console output for solver events.
//!
//! Provides a `tracing` layer that renders the solver's structured events
//! as one readable line each. Enabled by the `console` feature.

use std::io::{self, Write};
use std::sync::OnceLock;

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

const DEFAULT_FILTER: &str = "planforge_solver=info";

/// Installs the console layer as the global subscriber.
///
/// Safe to call multiple times; only the first call has effect. `RUST_LOG`
/// overrides the default `planforge_solver=info` filter. If another global
/// subscriber is already installed it is left in place.
pub fn init() {
    INIT.get_or_init(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(SolverConsoleLayer)
            .try_init();
    });
}

/// A tracing layer that formats solver events with colors.
pub struct SolverConsoleLayer;

impl<S: Subscriber> Layer<S> for SolverConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if !event.metadata().target().starts_with("planforge_solver") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        if let Some(line) = format_solver_event(&visitor) {
            let _ = writeln!(io::stdout(), "{}", line);
        }
    }
}

#[derive(Debug, Default)]
struct EventVisitor {
    event: Option<String>,
    phase: Option<String>,
    phase_index: Option<u64>,
    duration_ms: Option<u64>,
    steps: Option<u64>,
    step: Option<u64>,
    steps_per_sec: Option<u64>,
    entity_count: Option<u64>,
    variable_count: Option<u64>,
    uninitialized: Option<u64>,
    score: Option<String>,
    best_score: Option<String>,
}

impl EventVisitor {
    fn set_text(&mut self, field: &Field, value: String) {
        match field.name() {
            "event" => self.event = Some(value),
            "phase" => self.phase = Some(value),
            "score" => self.score = Some(value),
            "best_score" => self.best_score = Some(value),
            _ => {}
        }
    }
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let text = format!("{:?}", value);
        self.set_text(field, text.trim_matches('"').to_string());
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.set_text(field, value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "phase_index" => self.phase_index = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "steps" => self.steps = Some(value),
            "steps_per_sec" => self.steps_per_sec = Some(value),
            "step" => self.step = Some(value),
            "entity_count" => self.entity_count = Some(value),
            "variable_count" => self.variable_count = Some(value),
            "uninitialized" => self.uninitialized = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        if let Ok(value) = u64::try_from(value) {
            self.record_u64(field, value);
        }
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        if field.name() == "steps_per_sec" {
            self.steps_per_sec = Some(value.round() as u64);
        }
    }
}

fn format_solver_event(v: &EventVisitor) -> Option<String> {
    match v.event.as_deref()? {
        "solve_start" => Some(format_solve_start(v)),
        "phase_start" => Some(format_phase_start(v)),
        "phase_end" => Some(format_phase_end(v)),
        "new_best" => Some(format_new_best(v)),
        "solve_end" => Some(format_solve_end(v)),
        _ => None,
    }
}

fn format_solve_start(v: &EventVisitor) -> String {
    format!(
        "{} {} {} entity count ({}), variable count ({}), unassigned ({})",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Solver]".bright_cyan(),
        count(v.entity_count).bright_yellow(),
        count(v.variable_count).bright_yellow(),
        count(v.uninitialized).bright_yellow(),
    )
}

fn format_phase_start(v: &EventVisitor) -> String {
    let phase = v.phase.as_deref().unwrap_or("Unknown");
    format!(
        "{} {} {} phase ({}) started",
        timestamp().bright_black(),
        "INFO".bright_green(),
        format!("[{}]", phase).bright_cyan(),
        v.phase_index.unwrap_or(0).to_string().yellow(),
    )
}

fn format_phase_end(v: &EventVisitor) -> String {
    let phase = v.phase.as_deref().unwrap_or("Unknown");
    let score = v.best_score.as_deref().or(v.score.as_deref()).unwrap_or("N/A");
    let mut line = format!(
        "{} {} {} phase ({}) ended: time spent ({}), best score ({})",
        timestamp().bright_black(),
        "INFO".bright_green(),
        format!("[{}]", phase).bright_cyan(),
        v.phase_index.unwrap_or(0).to_string().yellow(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        format_score(score),
    );
    if let Some(steps) = v.steps {
        line.push_str(&format!(
            ", step total ({}), speed ({}/sec)",
            steps.to_formatted_string(&Locale::en).white(),
            v.steps_per_sec
                .unwrap_or(0)
                .to_formatted_string(&Locale::en)
                .bright_magenta()
                .bold(),
        ));
    }
    line
}

fn format_new_best(v: &EventVisitor) -> String {
    format!(
        "    {} Step {:>7} | {}",
        "->".bright_blue(),
        count(v.step).white(),
        format_score(v.score.as_deref().unwrap_or("N/A")),
    )
}

fn format_solve_end(v: &EventVisitor) -> String {
    let score = v.best_score.as_deref().unwrap_or("N/A");
    let status = if is_feasible(score) {
        "feasible".bright_green().bold().to_string()
    } else {
        "infeasible".bright_red().bold().to_string()
    };
    format!(
        "{} {} {} Solving ended: time spent ({}), best score ({}), {}",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Solver]".bright_cyan(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        format_score(score),
        status,
    )
}

fn count(value: Option<u64>) -> String {
    value.unwrap_or(0).to_formatted_string(&Locale::en)
}

fn timestamp() -> String {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| format!("{:5}.{:03}", d.as_secs() % 100_000, d.subsec_millis()))
        .unwrap_or_else(|_| "    0.000".to_string())
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        format!("{}m {}s", ms / 60_000, (ms % 60_000) / 1000)
    }
}

/// Splits `"-2init/0hard/-5soft"` or `"0hard/-5soft"` into `(level, value)` pairs.
fn score_levels(score: &str) -> Vec<(&str, i64)> {
    score
        .split('/')
        .filter_map(|part| {
            let split = part.find(|c: char| c.is_ascii_alphabetic())?;
            let (value, level) = part.split_at(split);
            Some((level, value.parse().ok()?))
        })
        .collect()
}

fn is_feasible(score: &str) -> bool {
    let levels = score_levels(score);
    !levels.is_empty()
        && levels
            .iter()
            .filter(|(level, _)| *level == "init" || *level == "hard")
            .all(|(_, value)| *value >= 0)
}

fn format_score(score: &str) -> String {
    let levels = score_levels(score);
    if levels.is_empty() {
        return score.white().to_string();
    }
    levels
        .iter()
        .map(|&(level, value)| {
            let text = format!("{}{}", value, level);
            match (level, value.signum()) {
                ("soft", -1) => text.yellow().to_string(),
                (_, -1) => text.bright_red().to_string(),
                ("soft", 0) => text.white().to_string(),
                _ => text.bright_green().to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}
