use opentelemetry::trace::TraceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("Unsupported collector endpoint: {0}")]
    UnsupportedEndpoint(String),

    #[error("HTTP client setup failed: {0}")]
    HttpClient(#[source] reqwest::Error),

    #[error("Span exporter setup failed: {0}")]
    Exporter(#[from] TraceError),

    #[error("Tracer provider shutdown failed: {0}")]
    Shutdown(#[source] TraceError),

    #[error("Diagnostics subscriber setup failed: {0}")]
    Subscriber(String),
}
