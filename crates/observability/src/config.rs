//! Observability configuration

use serde::{Deserialize, Serialize};

/// Console log line layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Full,
    Compact,
}

impl LogFormat {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "full" => Some(LogFormat::Full),
            "compact" => Some(LogFormat::Compact),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    pub service_name: String,

    pub service_version: Option<String>,

    /// OTLP gRPC endpoint (e.g. `http://localhost:4317`); `None` disables export
    pub otlp_endpoint: Option<String>,

    /// Filter directives; `None` falls back to [`Self::default_filter`]
    pub log_filter: Option<String>,

    pub log_format: LogFormat,

    /// Raise the default filter from `info` to `debug` for irodori crates
    pub verbose: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            service_name: "irodori".to_string(),
            service_version: None,
            otlp_endpoint: None,
            log_filter: None,
            log_format: LogFormat::Full,
            verbose: false,
        }
    }
}

impl ObservabilityConfig {
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            ..Default::default()
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.service_version = Some(version.into());
        self
    }

    pub fn with_otlp_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.otlp_endpoint = Some(endpoint.into());
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = Some(filter.into());
        self
    }

    pub fn with_log_format(mut self, format: LogFormat) -> Self {
        self.log_format = format;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Filter used when no directives are configured.
    pub fn default_filter(&self) -> &'static str {
        if self.verbose {
            "info,irodori=debug,irodori_core=debug,irodori_upstream=debug,irodori_theme=debug,irodori_server=debug,tower_http=debug"
        } else {
            "info"
        }
    }

    /// Effective filter directives.
    pub fn filter(&self) -> &str {
        self.log_filter
            .as_deref()
            .unwrap_or_else(|| self.default_filter())
    }

    /// Build from environment variables
    ///
    /// Reads:
    /// - `OTEL_SERVICE_NAME` → service_name
    /// - `OTEL_SERVICE_VERSION` → service_version
    /// - `OTEL_EXPORTER_OTLP_ENDPOINT` → otlp_endpoint (blank counts as unset)
    /// - `IRODORI_LOG` or `RUST_LOG` → log_filter
    /// - `IRODORI_LOG_FORMAT` → log_format
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            service_name: non_empty("OTEL_SERVICE_NAME").unwrap_or(defaults.service_name),
            service_version: non_empty("OTEL_SERVICE_VERSION"),
            otlp_endpoint: non_empty("OTEL_EXPORTER_OTLP_ENDPOINT"),
            log_filter: non_empty("IRODORI_LOG").or_else(|| non_empty("RUST_LOG")),
            log_format: non_empty("IRODORI_LOG_FORMAT")
                .and_then(|v| LogFormat::parse(&v))
                .unwrap_or_default(),
            verbose: false,
        }
    }
}
