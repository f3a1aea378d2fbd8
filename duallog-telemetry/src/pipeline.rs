//! ## duallog-telemetry::pipeline
//! **Tracer provider construction**
//!
//! Builds the SDK tracer provider a logger owns when tracing is switched on in
//! its configuration. Ending a span only queues it: a batch processor exports
//! from its own thread (a current-thread tokio runtime started by the SDK), so
//! a slow or silent collector never stalls a log call. Each export, including
//! the final flush on shutdown, is bounded by `timeout_ms`.

use std::time::Duration;

use opentelemetry::KeyValue;
use opentelemetry_otlp::{SpanExporter, WithExportConfig, WithHttpConfig};
use opentelemetry_sdk::runtime;
use opentelemetry_sdk::trace::{BatchConfigBuilder, BatchSpanProcessor, TracerProvider};
use opentelemetry_sdk::Resource;
use tracing::info;

use duallog_config::TracingConfig;

use crate::TelemetryError;

/// Resource attribute carrying the service name.
pub const SERVICE_NAME: &str = "service.name";

/// Resource describing the logging service.
pub fn service_resource(service_name: &str) -> Resource {
    Resource::new(vec![KeyValue::new(SERVICE_NAME, service_name.to_owned())])
}

/// Builds a tracer provider exporting to `config.endpoint` over OTLP/HTTP.
///
/// Nothing is sent during construction; an unreachable collector only shows up
/// as export failures later, which the SDK reports through its own error
/// handler.
pub fn build_provider(
    service_name: &str,
    config: &TracingConfig,
) -> Result<TracerProvider, TelemetryError> {
    let scheme = config
        .endpoint
        .split_once("://")
        .map(|(scheme, _)| scheme.to_ascii_lowercase());
    if !matches!(scheme.as_deref(), Some("http") | Some("https")) {
        return Err(TelemetryError::UnsupportedEndpoint(config.endpoint.clone()));
    }

    let timeout = Duration::from_millis(config.timeout_ms);
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(TelemetryError::HttpClient)?;

    let exporter = SpanExporter::builder()
        .with_http()
        .with_http_client(client)
        .with_endpoint(config.endpoint.clone())
        .with_timeout(timeout)
        .build()?;

    let batch = BatchConfigBuilder::default()
        .with_max_export_timeout(timeout)
        .build();
    let processor = BatchSpanProcessor::builder(exporter, runtime::TokioCurrentThread)
        .with_batch_config(batch)
        .build();

    let provider = TracerProvider::builder()
        .with_span_processor(processor)
        .with_resource(service_resource(service_name))
        .build();

    info!(
        service = service_name,
        endpoint = %config.endpoint,
        timeout_ms = config.timeout_ms,
        "Tracer provider initialized"
    );
    Ok(provider)
}
