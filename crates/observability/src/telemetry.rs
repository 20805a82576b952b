//! Subscriber installation and OTLP export (OpenTelemetry 0.31).

use once_cell::sync::OnceCell;
use opentelemetry::{KeyValue, global, trace::TracerProvider};
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::Resource;
use opentelemetry_sdk::trace::{SdkTracer, SdkTracerProvider};
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{EnvFilter, Layer, Registry, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{LogFormat, ObservabilityConfig};
use crate::error::ObservabilityError;

static TRACER_PROVIDER: OnceCell<SdkTracerProvider> = OnceCell::new();

/// Flushes exported spans when dropped. Hold it for the life of the process.
#[must_use = "dropping the guard shuts telemetry down"]
#[derive(Debug)]
pub struct TelemetryGuard {
    otlp: bool,
}

impl TelemetryGuard {
    pub fn otlp_enabled(&self) -> bool {
        self.otlp
    }
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        if self.otlp {
            shutdown();
        }
    }
}

/// Installs the global subscriber: env filter, stderr fmt layer and, when an
/// endpoint is configured, the OpenTelemetry layer.
///
/// A failing exporter degrades to console-only logging; a second call fails
/// because the global subscriber is already set.
pub fn init(config: ObservabilityConfig) -> Result<TelemetryGuard, ObservabilityError> {
    let filter = config.filter().to_string();
    let env_filter = EnvFilter::try_new(&filter).map_err(|e| ObservabilityError::Filter {
        filter: filter.clone(),
        reason: e.to_string(),
    })?;

    let fmt_layer = match config.log_format {
        LogFormat::Full => tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .boxed(),
        LogFormat::Compact => tracing_subscriber::fmt::layer()
            .compact()
            .with_target(false)
            .with_writer(std::io::stderr)
            .boxed(),
    };

    let mut export_error = None;
    let otel_layer = match &config.otlp_endpoint {
        Some(endpoint) => match build_otlp_tracer_provider(&config, endpoint) {
            Ok((tracer, provider)) => {
                // Global provider first, then the layer.
                global::set_tracer_provider(provider.clone());
                let _ = TRACER_PROVIDER.set(provider);
                Some(OpenTelemetryLayer::new(tracer))
            }
            Err(e) => {
                export_error = Some(e);
                None
            }
        },
        None => None,
    };
    let otlp = otel_layer.is_some();

    Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .with(otel_layer)
        .try_init()
        .map_err(|e| ObservabilityError::InitFailed(e.to_string()))?;

    match (&config.otlp_endpoint, export_error) {
        (Some(endpoint), None) => tracing::info!(
            service.name = %config.service_name,
            otlp.endpoint = %endpoint,
            "OTLP tracing enabled"
        ),
        (Some(endpoint), Some(e)) => tracing::warn!(
            service.name = %config.service_name,
            otlp.endpoint = %endpoint,
            error = %e,
            "OTLP export unavailable, logging to console only"
        ),
        (None, _) => tracing::debug!(
            service.name = %config.service_name,
            "tracing initialized (console only)"
        ),
    }

    Ok(TelemetryGuard { otlp })
}

fn build_otlp_tracer_provider(
    config: &ObservabilityConfig,
    endpoint: &str,
) -> Result<(SdkTracer, SdkTracerProvider), ObservabilityError> {
    let mut attributes = vec![KeyValue::new("service.name", config.service_name.clone())];
    if let Some(version) = &config.service_version {
        attributes.push(KeyValue::new("service.version", version.clone()));
    }
    let resource = Resource::builder().with_attributes(attributes).build();

    let span_exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint.to_string())
        .build()
        .map_err(|e| ObservabilityError::InitFailed(e.to_string()))?;

    let provider = SdkTracerProvider::builder()
        .with_batch_exporter(span_exporter)
        .with_resource(resource)
        .build();
    let tracer = provider.tracer(config.service_name.clone());

    Ok((tracer, provider))
}

/// Flushes and stops the OTLP exporter, if one was started.
pub fn shutdown() {
    if let Some(provider) = TRACER_PROVIDER.get() {
        // Export errors at shutdown are reported by the SDK itself.
        let _ = provider.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_bad_filter() {
        let config = ObservabilityConfig::default().with_log_filter("irodori=notalevel");
        let err = init(config).unwrap_err();
        assert!(matches!(err, ObservabilityError::Filter { .. }));
    }

    #[test]
    fn test_shutdown_without_provider_is_noop() {
        shutdown();
    }
}
