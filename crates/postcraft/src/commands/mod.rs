//! CLI command implementations.

mod input;
pub(crate) mod plan;
pub(crate) mod render;

pub(crate) use plan::PlanArgs;
pub(crate) use render::RenderArgs;

/// Environment variable naming the configuration file.
pub(crate) const CONFIG_ENV: &str = "POSTCRAFT_CONFIG";
