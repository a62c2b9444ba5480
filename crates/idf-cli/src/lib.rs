//! CLI library components for the integrity data pipeline.

pub mod logging;
pub mod pipeline;
pub mod summary;
