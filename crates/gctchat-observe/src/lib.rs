//! Observability setup for GCT Chat: the tracing subscriber and optional
//! OpenTelemetry span export.

pub mod tracing_setup;
