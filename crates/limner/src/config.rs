//! Configuration types for Limner.
//!
//! Every section is optional and falls back to its defaults, so an empty
//! file is a valid configuration. All types implement
//! [`serde::Deserialize`].
//!
//! - [`AppConfig`] - Top-level configuration.
//! - [`RenderConfig`] - Which output [`Format`] to produce.
//! - [`SequenceConfig`] - Defaults for new sequence diagrams.
//! - [`GraphConfig`] - Defaults for new graph diagrams.
//!
//! # Example
//!
//! ```
//! # use limner::{config::AppConfig, export::Format};
//! let config: AppConfig = toml::from_str(
//!     r#"
//!     [render]
//!     format = "plantuml"
//!
//!     [sequence]
//!     auto_activation = false
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.render().format(), Format::PlantUml);
//! assert!(!config.sequence().auto_activation());
//! assert!(config.graph().vertical());
//! ```

use serde::Deserialize;

use crate::export::Format;

/// Top-level configuration combining the render, sequence and graph sections.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    render: RenderConfig,

    #[serde(default)]
    sequence: SequenceConfig,

    #[serde(default)]
    graph: GraphConfig,
}

impl AppConfig {
    pub fn new(render: RenderConfig, sequence: SequenceConfig, graph: GraphConfig) -> Self {
        Self {
            render,
            sequence,
            graph,
        }
    }

    pub fn render(&self) -> &RenderConfig {
        &self.render
    }

    pub fn sequence(&self) -> &SequenceConfig {
        &self.sequence
    }

    pub fn graph(&self) -> &GraphConfig {
        &self.graph
    }
}

/// Output selection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RenderConfig {
    /// Target language, Mermaid unless configured.
    #[serde(default)]
    format: Format,
}

impl RenderConfig {
    pub fn new(format: Format) -> Self {
        Self { format }
    }

    pub fn format(&self) -> Format {
        self.format
    }
}

/// Defaults applied to sequence diagrams created through [`crate::Limner`].
#[derive(Debug, Clone, Deserialize)]
pub struct SequenceConfig {
    #[serde(default = "enabled")]
    auto_activation: bool,
}

impl SequenceConfig {
    pub fn new(auto_activation: bool) -> Self {
        Self { auto_activation }
    }

    /// Whether messages activate and deactivate participants on their own.
    pub fn auto_activation(&self) -> bool {
        self.auto_activation
    }
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Defaults applied to graph diagrams created through [`crate::Limner`].
#[derive(Debug, Clone, Deserialize)]
pub struct GraphConfig {
    #[serde(default = "enabled")]
    vertical: bool,
}

impl GraphConfig {
    pub fn new(vertical: bool) -> Self {
        Self { vertical }
    }

    /// `true` lays graphs out top to bottom, `false` left to right.
    pub fn vertical(&self) -> bool {
        self.vertical
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self::new(true)
    }
}

fn enabled() -> bool {
    true
}
