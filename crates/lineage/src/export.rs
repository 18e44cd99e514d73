//! Renderers that turn a finished [`FamilyTree`](lineage_core::FamilyTree)
//! into output text.
//!
//! - [`timeline`] - chronological event listing
//! - [`generations`] - persons grouped by generation
//! - `dot` and `structure` - Graphviz DOT diagrams (feature `graphviz`)

pub mod generations;
pub mod timeline;

#[cfg(feature = "graphviz")]
pub mod dot;
#[cfg(feature = "graphviz")]
pub mod structure;

use lineage_core::FamilyTree;

/// Default title of rendered output: "Family tree of <root>".
pub(crate) fn default_title(tree: &FamilyTree) -> String {
    match tree.root_person() {
        Some(root) => format!("Family tree of {}", root.name()),
        None => "Family tree".to_string(),
    }
}
