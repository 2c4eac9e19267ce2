//! CLI command implementations.

pub(crate) mod clean;
pub(crate) mod fetch;
pub(crate) mod metrics;
