//! # duallog telemetry
//!
//! OpenTelemetry plumbing for the dual-sink logger.
//!
//! ### Components:
//! - `pipeline`: tracer provider with an OTLP/HTTP exporter tagged with `service.name`
//! - `span`: one short-lived span per log call, carrying the message as its only event
//! - `diagnostics`: `tracing-subscriber` setup for the crates' own diagnostics

pub mod diagnostics;
pub mod error;
pub mod pipeline;
pub mod span;

pub use error::TelemetryError;
pub use opentelemetry_sdk::trace::TracerProvider;
pub use pipeline::build_provider;
pub use span::SpanRecorder;
