//! Process-wide logging.
//!
//! Messages go to stdout through the `fmt` layer and are appended, one line
//! each, to the log file by [`LogFileLayer`]. Verbose-only messages are emitted
//! at `debug` level and only pass the filter when verbose output is on.
use std::fmt;
use std::fs::OpenOptions;
use std::io::{IsTerminal, Write};
use std::path::PathBuf;

use tracing::{Event, Subscriber, field::Visit};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;

use crate::core::params::LogSettings;

/// One log line as written to the log file.
#[derive(Clone, Debug)]
struct LogEntry {
    level: tracing::Level,
    timestamp: String,
    message: String,
}

impl LogEntry {
    fn new(level: tracing::Level, message: String) -> Self {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        Self {
            level,
            timestamp,
            message,
        }
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Keep one entry per line even when calibredb output spans several.
        let message = self.message.replace(['\r', '\n'], " ");
        write!(f, "{} [{}] {}", self.timestamp, self.level, message.trim_end())
    }
}

/// Appends every event to a text file, opening it for each write.
pub struct LogFileLayer {
    path: PathBuf,
}

impl LogFileLayer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn append(&self, entry: &LogEntry) {
        // A log that cannot be written must not abort the import.
        if let Ok(mut file) = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
        {
            let _ = writeln!(file, "{entry}");
        }
    }
}

struct MessageVisitor {
    message: String,
    fields: Vec<String>,
}

impl MessageVisitor {
    fn new() -> Self {
        Self {
            message: String::new(),
            fields: Vec::new(),
        }
    }

    fn finish(self) -> String {
        if self.fields.is_empty() {
            self.message
        } else if self.message.is_empty() {
            self.fields.join(" ")
        } else {
            format!("{} {}", self.message, self.fields.join(" "))
        }
    }
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields.push(format!("{}={}", field.name(), value));
        }
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            self.fields.push(format!("{}={:?}", field.name(), value));
        }
    }
}

impl<S> Layer<S> for LogFileLayer
where
    S: Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor::new();
        event.record(&mut visitor);
        let entry = LogEntry::new(*event.metadata().level(), visitor.finish());
        self.append(&entry);
    }
}

/// Default filter directive for the given verbosity.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "info" }
}

/// Install the global subscriber. Does nothing when logging is disabled,
/// leaving every log macro a no-op. `RUST_LOG` overrides the level filter.
pub fn init(settings: &LogSettings) {
    if !settings.enabled {
        return;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(settings.verbose)));

    let console = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stdout)
        .with_ansi(std::io::stdout().is_terminal())
        .with_target(false)
        .with_level(false)
        .without_time();

    // A subscriber may already be installed when embedded; keep the existing one.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(LogFileLayer::new(&settings.log_file))
        .try_init();
}
