//! Observability setup for Worldmate.

pub mod tracing_setup;
