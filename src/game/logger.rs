//! Game logger with verbosity levels and in-memory capture
//!
//! Entries are owned strings behind a `RefCell`, so anything holding a shared
//! `GameStateView` (controllers included) can log.

use crate::game::events::{EventKind, GameEvent};
use crate::game::VerbosityLevel;
use serde::{Deserialize, Serialize};
use std::cell::{Ref, RefCell};
use std::ops::Deref;

/// Output format for log messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OutputFormat {
    /// Human-readable text output (default)
    #[default]
    Text,
    /// Machine-readable JSON output, one event object per line
    Json,
}

/// Output destination for log messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OutputMode {
    /// Output only to stdout (default)
    #[default]
    Stdout,
    /// Capture only to in-memory buffer (no stdout)
    Memory,
    /// Both stdout and in-memory buffer
    Both,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: VerbosityLevel,
    pub message: String,
    /// e.g. "controller_choice", "event", "warning"
    pub category: Option<String>,
}

/// Read-only access to captured log entries
pub struct LogGuard<'a> {
    guard: Ref<'a, Vec<LogEntry>>,
}

impl<'a> LogGuard<'a> {
    pub fn iter(&self) -> std::slice::Iter<'_, LogEntry> {
        self.guard.iter()
    }

    pub fn len(&self) -> usize {
        self.guard.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guard.is_empty()
    }
}

impl<'a> Deref for LogGuard<'a> {
    type Target = [LogEntry];

    fn deref(&self) -> &Self::Target {
        &self.guard
    }
}

pub struct GameLogger {
    verbosity: VerbosityLevel,
    output_format: OutputFormat,
    output_mode: OutputMode,
    log_buffer: RefCell<Vec<LogEntry>>,
}

impl GameLogger {
    /// Create a new logger with default verbosity (Normal)
    pub fn new() -> Self {
        Self::with_verbosity(VerbosityLevel::default())
    }

    pub fn with_verbosity(verbosity: VerbosityLevel) -> Self {
        GameLogger {
            verbosity,
            output_format: OutputFormat::default(),
            output_mode: OutputMode::default(),
            log_buffer: RefCell::new(Vec::new()),
        }
    }

    pub fn set_output_mode(&mut self, mode: OutputMode) {
        self.output_mode = mode;
    }

    pub fn output_mode(&self) -> OutputMode {
        self.output_mode
    }

    /// Capture to memory only (suppresses stdout)
    pub fn enable_capture(&mut self) {
        self.output_mode = OutputMode::Memory;
    }

    pub fn is_capturing(&self) -> bool {
        matches!(self.output_mode, OutputMode::Memory | OutputMode::Both)
    }

    /// Captured entries; derefs to `[LogEntry]`
    pub fn logs(&self) -> LogGuard<'_> {
        LogGuard {
            guard: self.log_buffer.borrow(),
        }
    }

    pub fn clear_logs(&mut self) {
        self.log_buffer.borrow_mut().clear();
    }

    pub fn set_output_format(&mut self, format: OutputFormat) {
        self.output_format = format;
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    pub fn verbosity(&self) -> VerbosityLevel {
        self.verbosity
    }

    pub fn set_verbosity(&mut self, verbosity: VerbosityLevel) {
        self.verbosity = verbosity;
    }

    fn log_to_stdout(&self, level: VerbosityLevel, message: &str) {
        if level == VerbosityLevel::Minimal {
            println!("{}", message);
        } else {
            println!("  {}", message);
        }
    }

    fn log_with(&self, level: VerbosityLevel, category: Option<&str>, message: &str) {
        let should_capture = self.is_capturing();
        let should_output = matches!(self.output_mode, OutputMode::Stdout | OutputMode::Both)
            && level <= self.verbosity;

        if should_capture {
            self.log_buffer.borrow_mut().push(LogEntry {
                level,
                message: message.to_string(),
                category: category.map(str::to_string),
            });
        }

        // Json mode keeps stdout machine-readable: only events are printed there
        if should_output && self.output_format == OutputFormat::Text {
            self.log_to_stdout(level, message);
        }
    }

    pub fn minimal(&self, message: &str) {
        self.log_with(VerbosityLevel::Minimal, None, message);
    }

    pub fn normal(&self, message: &str) {
        self.log_with(VerbosityLevel::Normal, None, message);
    }

    pub fn verbose(&self, message: &str) {
        self.log_with(VerbosityLevel::Verbose, None, message);
    }

    /// Recoverable inconsistency, e.g. a card that already moved
    pub fn warn(&self, message: &str) {
        let message = format!("warning: {message}");
        self.log_with(VerbosityLevel::Minimal, Some("warning"), &message);
    }

    /// Log a controller decision at Verbose level
    ///
    /// Only the choice is printed, not which controller made it, so logs of
    /// the same game match regardless of controller type.
    pub fn controller_choice(&self, _controller_name: &str, message: &str) {
        self.log_with(VerbosityLevel::Verbose, Some("controller_choice"), message);
    }

    /// Mirror a published event
    pub fn event(&self, event: &GameEvent) {
        match self.output_format {
            OutputFormat::Text => {
                let level = match event.kind {
                    EventKind::GameEnd { .. } => VerbosityLevel::Minimal,
                    EventKind::DrawCards { .. }
                    | EventKind::Shuffle { .. } => VerbosityLevel::Verbose,
                    _ => VerbosityLevel::Normal,
                };
                self.log_with(level, Some("event"), &event.to_string());
            }
            OutputFormat::Json => {
                let line = serde_json::to_string(event)
                    .unwrap_or_else(|err| format!("{{\"error\":\"{err}\"}}"));
                if self.is_capturing() {
                    self.log_buffer.borrow_mut().push(LogEntry {
                        level: VerbosityLevel::Normal,
                        message: line.clone(),
                        category: Some("event".to_string()),
                    });
                }
                if matches!(self.output_mode, OutputMode::Stdout | OutputMode::Both)
                    && self.verbosity > VerbosityLevel::Silent
                {
                    println!("{line}");
                }
            }
        }
    }
}

impl Default for GameLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GameLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameLogger")
            .field("verbosity", &self.verbosity)
            .field("output_mode", &self.output_mode)
            .field("log_count", &self.log_buffer.borrow().len())
            .finish()
    }
}

impl Clone for GameLogger {
    /// Settings are cloned; the captured buffer starts empty
    fn clone(&self) -> Self {
        GameLogger {
            verbosity: self.verbosity,
            output_format: self.output_format,
            output_mode: self.output_mode,
            log_buffer: RefCell::new(Vec::new()),
        }
    }
}
