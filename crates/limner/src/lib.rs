//! Limner - UML sequence and state diagrams as code.
//!
//! Diagrams are built through a validating API and rendered to text for an
//! existing diagram tool: Mermaid, PlantUML, D2, sequencediagram.org or
//! Graphviz. The builders live in [`limner_core`] and are re-exported here;
//! this crate adds the renderers, configuration and TOML diagram scripts.
//!
//! # Examples
//!
//! ```rust
//! use limner::{Limner, export::Format};
//!
//! let limner = Limner::default().with_format(Format::PlantUml);
//! let sd = limner.sequence_diagram("Login");
//! let user = sd.participant("User", None)?.as_actor()?;
//! let app = sd.participant("App", None)?.as_boundary()?;
//!
//! user.go_to(app, "credentials")?;
//! sd.return_("token")?;
//!
//! let text = sd.render()?;
//! assert!(text.starts_with("@startuml\n"));
//! assert!(text.contains("actor \"User\" as p1\n"));
//! # Ok::<(), limner::LimnerError>(())
//! ```

pub mod config;
pub mod export;
pub mod script;

mod error;

pub use limner_core::{color, error::ChartingError, graph, render, sequence};

pub use error::LimnerError;

use log::{debug, info};

use limner_core::{graph::GraphDiagram, sequence::SequenceDiagram};

use config::AppConfig;
use export::Format;
use script::Script;

/// Entry point that creates diagrams with configured defaults.
///
/// The configuration decides the output format, whether sequence diagrams
/// auto-activate participants and how graphs are oriented.
#[derive(Debug, Clone, Default)]
pub struct Limner {
    config: AppConfig,
    format: Format,
}

impl Limner {
    /// Create a new instance with the given configuration.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use limner::{Limner, config::AppConfig};
    ///
    /// let limner = Limner::new(AppConfig::default());
    /// assert_eq!(limner.format().as_str(), "mermaid");
    /// ```
    pub fn new(config: AppConfig) -> Self {
        let format = config.render().format();
        Self { config, format }
    }

    /// Overrides the configured output format.
    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn format(&self) -> Format {
        self.format
    }

    /// Starts a sequence diagram rendered with the selected format.
    pub fn sequence_diagram(&self, title: &str) -> SequenceDiagram {
        debug!(title, format:% = self.format; "New sequence diagram");
        SequenceDiagram::new(title, self.format.renderer())
            .with_auto_activation(self.config.sequence().auto_activation())
    }

    /// Starts a graph diagram rendered with the selected format.
    pub fn graph_diagram(&self, title: &str) -> GraphDiagram {
        debug!(title, format:% = self.format; "New graph diagram");
        GraphDiagram::new(title, self.format.renderer())
            .with_vertical(self.config.graph().vertical())
    }

    /// Parses a diagram script and renders the diagram it describes.
    ///
    /// # Errors
    ///
    /// Returns [`LimnerError::Script`] for malformed scripts and references to
    /// unknown names, [`LimnerError::Charting`] when the script breaks a
    /// builder rule, and [`LimnerError::Render`] when the format cannot render
    /// the diagram kind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use limner::Limner;
    ///
    /// let source = r#"
    /// kind = "graph"
    /// title = "Switch"
    ///
    /// [[nodes]]
    /// id = "off"
    ///
    /// [[edges]]
    /// from = "start"
    /// to = "off"
    /// "#;
    ///
    /// let text = Limner::default().render_script(source)?;
    /// assert!(text.contains("state \"off\" as n2\n"));
    /// # Ok::<(), limner::LimnerError>(())
    /// ```
    pub fn render_script(&self, source: &str) -> Result<String, LimnerError> {
        let script = Script::parse(source)?;
        let rendered = script.render(self)?;
        info!(title = script.title(), bytes = rendered.len(); "Script rendered");
        Ok(rendered)
    }
}
