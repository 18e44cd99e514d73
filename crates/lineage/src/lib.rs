//! Lineage - a small language for describing family trees.
//!
//! Parsing, generation assignment and rendering for Lineage sources. A
//! parsed [`FamilyTree`] can be rendered as a chronological timeline, as a
//! generation listing, or (with the `graphviz` feature) as DOT diagrams of
//! the family and of the statement structure.

pub mod config;
pub mod export;

mod error;

pub use lineage_core::{FamilyTree, Person, PersonId, chronology, date, identifier};
pub use lineage_parser::observer;

pub use error::LineageError;

use log::{debug, info, trace};

use lineage_parser::ParseObserver;

use config::AppConfig;

/// Builder for parsing and rendering Lineage family trees.
///
/// # Examples
///
/// ```rust
/// use lineage::{FamilyBuilder, config::AppConfig};
///
/// let source = "family_tree { Jean(01/01/1900-); Pierre(01/01/1935-); Jean -> Pierre; }";
///
/// let builder = FamilyBuilder::new(AppConfig::default());
///
/// // Parse source and assign generations
/// let tree = builder.parse(source).expect("Failed to parse");
///
/// // Render the chronological timeline
/// let timeline = builder.render_timeline(&tree);
/// assert!(timeline.starts_with("Family tree of Jean"));
/// ```
#[derive(Debug, Default)]
pub struct FamilyBuilder {
    config: AppConfig,
}

impl FamilyBuilder {
    /// Create a new family builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parse source code into a family tree with generations assigned.
    ///
    /// The generation anchor is the configured person, or the root when
    /// none is configured.
    ///
    /// # Errors
    ///
    /// Returns `LineageError::Parse` for lexical, syntax and model errors,
    /// and `LineageError::Anchor` when the configured anchor is not declared.
    pub fn parse(&self, source: &str) -> Result<FamilyTree, LineageError> {
        self.parse_with(source, &mut ())
    }

    /// Like [`parse`](Self::parse), notifying `observer` of every applied
    /// statement.
    ///
    /// # Errors
    ///
    /// See [`parse`](Self::parse).
    pub fn parse_with<O>(&self, source: &str, observer: &mut O) -> Result<FamilyTree, LineageError>
    where
        O: ParseObserver + ?Sized,
    {
        info!("Parsing family tree");

        let mut tree = lineage_parser::parse_with(source, observer)
            .map_err(|err| LineageError::new_parse_error(err, source))?;

        debug!(persons = tree.len(); "Family tree parsed successfully");

        match self.config.generation().anchor() {
            Some(name) => {
                let anchor = tree.find(name).ok_or_else(|| LineageError::Anchor {
                    name: name.to_string(),
                })?;
                tree.assign_generations_from(anchor);
            }
            None => tree.assign_generations(),
        }

        trace!(generations:? = tree.generation_groups(); "Generations assigned");

        Ok(tree)
    }

    /// Render the chronological timeline of a family tree.
    pub fn render_timeline(&self, tree: &FamilyTree) -> String {
        info!("Rendering timeline");
        export::timeline::render(tree, &self.title(tree))
    }

    /// Render the generation listing of a family tree.
    pub fn render_generations(&self, tree: &FamilyTree) -> String {
        info!("Rendering generations");
        export::generations::render(tree)
    }

    /// Render a family tree as a Graphviz DOT diagram.
    ///
    /// # Errors
    ///
    /// Returns `LineageError::Config` if a configured color is invalid.
    #[cfg(feature = "graphviz")]
    pub fn render_tree(&self, tree: &FamilyTree) -> Result<String, LineageError> {
        info!("Rendering family tree diagram");
        let graph =
            export::dot::family_graph(tree, self.config.style()).map_err(LineageError::Config)?;
        Ok(export::dot::to_dot_string(&graph))
    }

    /// Parse source code and render its statement structure as a Graphviz
    /// DOT diagram.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`parse`](Self::parse).
    #[cfg(feature = "graphviz")]
    pub fn render_structure(&self, source: &str) -> Result<String, LineageError> {
        let mut diagram = export::structure::StructureDiagram::new();
        self.parse_with(source, &mut diagram)?;

        info!(statements = diagram.len(); "Rendering statement structure");
        Ok(export::dot::to_dot_string(&diagram.into_graph()))
    }

    fn title(&self, tree: &FamilyTree) -> String {
        self.config
            .style()
            .title()
            .map_or_else(|| export::default_title(tree), str::to_string)
    }
}
