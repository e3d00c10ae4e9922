//! Structured logging with session context.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::session::SessionId;

/// Severity of an entry, ordered from chattiest to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn label(self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One rendered log line before it is handed to `tracing`.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub session_id: String,
    /// Emitting component, e.g. "feed".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    /// Route the shopper was on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
}

impl LogEntry {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.message.clone())
    }

    /// `[LEVEL] component: message | key=value ...`
    pub fn to_human(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] ", self.level)?;
        if let Some(component) = &self.component {
            write!(f, "{component}: ")?;
        }
        f.write_str(&self.message)?;

        let mut sep = " | ";
        for (key, value) in &self.fields {
            write!(f, "{sep}{key}={value}")?;
            sep = " ";
        }
        Ok(())
    }
}

/// How entries are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per line.
    #[default]
    Json,
    /// Bracketed level and `key=value` pairs, for terminals and the browser console.
    Human,
}

/// Logger carrying the session, component and route of a feed.
///
/// Entries are rendered in the configured format and handed to `tracing`
/// at the matching level; whichever subscriber the binary installs decides
/// where they end up.
#[derive(Debug, Clone)]
pub struct StructuredLogger {
    session_id: SessionId,
    component: Option<String>,
    route: Option<String>,
    min_level: LogLevel,
    format: LogFormat,
}

impl StructuredLogger {
    pub fn new(session_id: SessionId) -> Self {
        Self {
            session_id,
            component: None,
            route: None,
            min_level: LogLevel::Info,
            format: LogFormat::Json,
        }
    }

    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }

    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = Some(route.into());
        self
    }

    /// Entries below `level` are dropped.
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// Start an entry at `level`; nothing is emitted until [`LogBuilder::emit`].
    pub fn at(&self, level: LogLevel, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder {
            logger: self,
            level,
            message: message.into(),
            fields: BTreeMap::new(),
        }
    }

    pub fn debug(&self, message: impl Into<String>) -> LogBuilder<'_> {
        self.at(LogLevel::Debug, message)
    }

    pub fn info(&self, message: impl Into<String>) -> LogBuilder<'_> {
        self.at(LogLevel::Info, message)
    }

    pub fn warn(&self, message: impl Into<String>) -> LogBuilder<'_> {
        self.at(LogLevel::Warn, message)
    }

    pub fn error(&self, message: impl Into<String>) -> LogBuilder<'_> {
        self.at(LogLevel::Error, message)
    }

    fn entry(&self, level: LogLevel, message: String, fields: BTreeMap<String, Value>) -> Option<LogEntry> {
        (level >= self.min_level).then(|| LogEntry {
            level,
            message,
            session_id: self.session_id.to_string(),
            component: self.component.clone(),
            route: self.route.clone(),
            fields,
        })
    }

    fn dispatch(&self, entry: LogEntry) {
        let line = match self.format {
            LogFormat::Json => entry.to_json(),
            LogFormat::Human => entry.to_human(),
        };

        match entry.level {
            LogLevel::Trace => tracing::trace!(target: "shop", "{line}"),
            LogLevel::Debug => tracing::debug!(target: "shop", "{line}"),
            LogLevel::Info => tracing::info!(target: "shop", "{line}"),
            LogLevel::Warn => tracing::warn!(target: "shop", "{line}"),
            LogLevel::Error => tracing::error!(target: "shop", "{line}"),
        }
    }
}

impl Default for StructuredLogger {
    fn default() -> Self {
        Self::new(SessionId::generate())
    }
}

/// An entry under construction.
#[must_use = "call emit() to log the entry"]
pub struct LogBuilder<'a> {
    logger: &'a StructuredLogger,
    level: LogLevel,
    message: String,
    fields: BTreeMap<String, Value>,
}

impl LogBuilder<'_> {
    /// Attach a typed field. Later values for the same key win.
    pub fn field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.to_owned(), value.into());
        self
    }

    /// The entry as it would be emitted, or `None` below the minimum level.
    pub fn build(self) -> Option<LogEntry> {
        self.logger.entry(self.level, self.message, self.fields)
    }

    pub fn emit(self) {
        let logger = self.logger;
        if let Some(entry) = self.build() {
            logger.dispatch(entry);
        }
    }
}
