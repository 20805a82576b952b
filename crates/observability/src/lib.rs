//! Logging and tracing setup shared by the irodori binaries.
//!
//! Console logs always go to stderr so command output on stdout stays clean.
//! When an OTLP endpoint is configured, spans are exported as well.
//!
//! ```no_run
//! use irodori_observability::{ObservabilityConfig, init};
//!
//! let _guard = init(ObservabilityConfig::from_env().with_verbose(true))?;
//! tracing::info!("ready");
//! # Ok::<(), irodori_observability::ObservabilityError>(())
//! ```
//!
//! # Environment Variables
//!
//! - `OTEL_SERVICE_NAME`: service name (default `irodori`)
//! - `OTEL_EXPORTER_OTLP_ENDPOINT`: OTLP gRPC endpoint; unset means console only
//! - `IRODORI_LOG` or `RUST_LOG`: filter directives
//! - `IRODORI_LOG_FORMAT`: `full` (default) or `compact`

pub mod config;
pub mod error;
pub mod telemetry;
pub mod tracing;

pub use config::{LogFormat, ObservabilityConfig};
pub use error::ObservabilityError;
pub use telemetry::{TelemetryGuard, init, shutdown};
pub use self::tracing::{record_duration, record_error};
