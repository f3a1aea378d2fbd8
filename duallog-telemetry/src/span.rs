//! ## duallog-telemetry::span
//! **Per-call spans**
//!
//! Every log call is mirrored by exactly one span named after its level,
//! carrying the raw message as its only event. The span is started and ended
//! inside the call; nothing is kept open between calls.

use std::fmt;
use std::panic::Location;

use opentelemetry::trace::{Span, Tracer, TracerProvider as _};
use opentelemetry::KeyValue;
use opentelemetry_sdk::trace::{Tracer as SdkTracer, TracerProvider};

use crate::TelemetryError;

/// Records log calls as spans on a tracer taken from a provider.
pub struct SpanRecorder {
    tracer: SdkTracer,
    provider: TracerProvider,
    owned: bool,
}

impl SpanRecorder {
    /// Recorder that owns `provider` and shuts it down in [`SpanRecorder::shutdown`].
    pub fn owned(service_name: &str, provider: TracerProvider) -> Self {
        Self::new(service_name, provider, true)
    }

    /// Recorder using a provider whose lifecycle belongs to the caller.
    pub fn shared(service_name: &str, provider: TracerProvider) -> Self {
        Self::new(service_name, provider, false)
    }

    fn new(service_name: &str, provider: TracerProvider, owned: bool) -> Self {
        Self {
            tracer: provider.tracer(service_name.to_owned()),
            provider,
            owned,
        }
    }

    /// Emits one span `span_name` with `message` as its single event.
    ///
    /// Export problems never surface here.
    pub fn record(&self, span_name: &'static str, message: &str, caller: &Location<'_>) {
        let mut span = self.tracer.start(span_name);
        span.set_attribute(KeyValue::new("code.filepath", caller.file().to_owned()));
        span.set_attribute(KeyValue::new("code.lineno", i64::from(caller.line())));
        span.add_event(message.to_owned(), Vec::new());
        span.end();
    }

    /// Shuts down the provider if this recorder owns it.
    pub fn shutdown(&self) -> Result<(), TelemetryError> {
        if !self.owned {
            return Ok(());
        }
        self.provider.shutdown().map_err(TelemetryError::Shutdown)
    }
}

impl fmt::Debug for SpanRecorder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpanRecorder")
            .field("owned", &self.owned)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opentelemetry_sdk::testing::trace::InMemorySpanExporter;

    fn in_memory() -> (InMemorySpanExporter, TracerProvider) {
        let exporter = InMemorySpanExporter::default();
        let provider = TracerProvider::builder()
            .with_simple_exporter(exporter.clone())
            .build();
        (exporter, provider)
    }

    #[test]
    fn one_span_with_one_event() {
        let (exporter, provider) = in_memory();
        let recorder = SpanRecorder::shared("billing", provider);

        recorder.record("Info", "invoice 42 issued", Location::caller());

        let spans = exporter.get_finished_spans().expect("spans");
        assert_eq!(spans.len(), 1);
        let span = &spans[0];
        assert_eq!(span.name, "Info");
        assert_eq!(span.events.events.len(), 1);
        assert_eq!(span.events.events[0].name, "invoice 42 issued");
        assert!(span
            .attributes
            .iter()
            .any(|kv| kv.key.as_str() == "code.lineno"));
    }

    #[test]
    fn spans_are_not_merged_across_calls() {
        let (exporter, provider) = in_memory();
        let recorder = SpanRecorder::shared("billing", provider);

        recorder.record("Info", "same", Location::caller());
        recorder.record("Error", "same", Location::caller());

        let spans = exporter.get_finished_spans().expect("spans");
        let names: Vec<_> = spans.iter().map(|s| s.name.to_string()).collect();
        assert_eq!(names, ["Info", "Error"]);
        assert!(spans.iter().all(|s| s.events.events.len() == 1));
    }

    #[test]
    fn shared_provider_survives_shutdown() {
        let (exporter, provider) = in_memory();
        let recorder = SpanRecorder::shared("billing", provider);

        recorder.shutdown().expect("no-op shutdown");
        recorder.record("Info", "still exported", Location::caller());

        assert_eq!(exporter.get_finished_spans().expect("spans").len(), 1);
    }

    #[test]
    fn owned_provider_shuts_down() {
        let (exporter, provider) = in_memory();
        let recorder = SpanRecorder::owned("billing", provider);
        recorder.shutdown().expect("shutdown");

        recorder.record("Info", "after shutdown", Location::caller());
        assert!(exporter.get_finished_spans().expect("spans").is_empty());
    }
}
