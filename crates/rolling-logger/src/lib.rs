//! Rolling Logger
//!
//! A `tracing` layer that keeps the most recent log lines in a circular
//! buffer and echoes every line to the browser console (stderr when not
//! running on wasm). `log` records are bridged into `tracing` on init.

use std::collections::VecDeque;
use std::fmt::{self, Write as _};
use std::sync::{Arc, Mutex, OnceLock};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

static BUFFER: OnceLock<Arc<Mutex<LogBuffer>>> = OnceLock::new();

/// Logger errors
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    #[error("invalid log level: {0}")]
    InvalidLevel(String),
    #[error("logger already initialized")]
    AlreadyInitialized,
    #[error("failed to install subscriber: {0}")]
    Subscriber(String),
}

/// Logger settings
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Minimum level, e.g. "info" or "debug"
    pub level: String,
    /// Number of lines kept in memory
    pub capacity: usize,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            capacity: 500,
        }
    }
}

/// Fixed-capacity buffer of formatted lines, oldest evicted first
#[derive(Debug)]
pub struct LogBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, line: String) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Layer writing formatted events into a shared `LogBuffer`
pub struct RollingLayer {
    buffer: Arc<Mutex<LogBuffer>>,
    echo: bool,
}

impl RollingLayer {
    pub fn new(buffer: Arc<Mutex<LogBuffer>>) -> Self {
        Self { buffer, echo: true }
    }

    /// Keep lines in the buffer only, without console output
    pub fn quiet(buffer: Arc<Mutex<LogBuffer>>) -> Self {
        Self { buffer, echo: false }
    }
}

impl<S: Subscriber> Layer<S> for RollingLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        let mut visitor = LineVisitor::default();
        event.record(&mut visitor);

        let line = format!(
            "{} {:>5} {}: {}{}",
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            meta.level(),
            meta.target(),
            visitor.message,
            visitor.fields,
        );

        if self.echo {
            echo(*meta.level(), &line);
        }

        let mut buffer = self.buffer.lock().unwrap_or_else(|e| e.into_inner());
        buffer.push(line);
    }
}

#[derive(Default)]
struct LineVisitor {
    message: String,
    fields: String,
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn echo(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::ERROR => web_sys::console::error_1(&value),
        Level::WARN => web_sys::console::warn_1(&value),
        Level::INFO => web_sys::console::info_1(&value),
        _ => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn echo(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install the global subscriber. Call once at startup.
pub fn init_logger(config: LoggerConfig) -> Result<(), LoggerError> {
    let level: LevelFilter = config
        .level
        .parse()
        .map_err(|_| LoggerError::InvalidLevel(config.level.clone()))?;

    let buffer = Arc::new(Mutex::new(LogBuffer::new(config.capacity)));
    BUFFER
        .set(buffer.clone())
        .map_err(|_| LoggerError::AlreadyInitialized)?;

    let subscriber = tracing_subscriber::registry()
        .with(level)
        .with(RollingLayer::new(buffer));
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| LoggerError::Subscriber(e.to_string()))?;

    // Bridge log to tracing
    tracing_log::LogTracer::init().ok();

    Ok(())
}

/// Like `init_logger`, but an unparsable level falls back to the default
/// level. The rejected value is logged once the subscriber is up.
pub fn init_logger_or_default(config: LoggerConfig) -> Result<(), LoggerError> {
    match init_logger(config.clone()) {
        Err(LoggerError::InvalidLevel(rejected)) => {
            init_logger(LoggerConfig {
                level: LoggerConfig::default().level,
                ..config
            })?;
            tracing::warn!(level = %rejected, "unknown log level, using default");
            Ok(())
        }
        result => result,
    }
}

/// Snapshot of the buffered lines, oldest first
pub fn recent_lines() -> Vec<String> {
    BUFFER
        .get()
        .map(|buffer| buffer.lock().unwrap_or_else(|e| e.into_inner()).lines())
        .unwrap_or_default()
}

pub fn info(msg: &str) {
    log::info!("{}", msg);
}

pub fn warn(msg: &str) {
    log::warn!("{}", msg);
}

pub fn error(msg: &str) {
    log::error!("{}", msg);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_evicts_oldest() {
        let mut buffer = LogBuffer::new(2);
        buffer.push("a".to_string());
        buffer.push("b".to_string());
        buffer.push("c".to_string());

        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.lines(), vec!["b".to_string(), "c".to_string()]);
    }

    #[test]
    fn test_zero_capacity_keeps_one_line() {
        let mut buffer = LogBuffer::new(0);
        buffer.push("only".to_string());
        buffer.push("latest".to_string());
        assert_eq!(buffer.lines(), vec!["latest".to_string()]);
    }

    #[test]
    fn test_layer_formats_message_and_fields() {
        let buffer = Arc::new(Mutex::new(LogBuffer::new(10)));
        let subscriber = tracing_subscriber::registry().with(RollingLayer::quiet(buffer.clone()));

        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!(plan_id = 7, "plan saved");
        });

        let lines = buffer.lock().unwrap().lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains(" WARN "));
        assert!(lines[0].contains("plan saved"));
        assert!(lines[0].ends_with(" plan_id=7"));
    }

    #[test]
    fn test_log_records_reach_buffer() {
        tracing_log::LogTracer::init().ok();
        let buffer = Arc::new(Mutex::new(LogBuffer::new(10)));
        let subscriber = tracing_subscriber::registry().with(RollingLayer::quiet(buffer.clone()));

        tracing::subscriber::with_default(subscriber, || {
            log::warn!("cache cold");
            warn("logo missing");
        });

        let lines = buffer.lock().unwrap().lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains(" WARN ") && lines[0].contains("cache cold"));
        assert!(lines[1].contains("logo missing"));
    }

    // The only test that installs the global subscriber
    #[test]
    fn test_unknown_level_falls_back_and_still_captures() {
        init_logger_or_default(LoggerConfig {
            level: "verbose".to_string(),
            capacity: 20,
        })
        .unwrap();

        tracing::info!("after fallback");
        info("bridged line");

        let lines = recent_lines();
        assert!(lines.iter().any(|l| l.contains("unknown log level") && l.contains("verbose")));
        assert!(lines.iter().any(|l| l.contains("after fallback")));
        assert!(lines.iter().any(|l| l.contains("bridged line")));
    }

    #[test]
    fn test_invalid_level_rejected() {
        let result = init_logger(LoggerConfig {
            level: "loud".to_string(),
            capacity: 10,
        });
        assert!(matches!(result, Err(LoggerError::InvalidLevel(_))));
    }
}
