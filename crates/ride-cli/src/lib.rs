//! Library components for the ride-insight CLI.

pub mod logging;
pub mod pipeline;
