//! Listing of persons grouped by generation.

use std::fmt::{self, Write as _};

use lineage_core::FamilyTree;

/// Renders every generation group, youngest first, then the persons the
/// generation pass did not reach.
///
/// ```text
/// Generation 0:
///     Pierre
/// Generation 1:
///     Jean
///     Marie
/// Without generation:
///     Rose
/// ```
pub fn render(tree: &FamilyTree) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_generations(&mut out, tree);
    out
}

fn write_generations(out: &mut String, tree: &FamilyTree) -> fmt::Result {
    for (generation, members) in tree.generation_groups() {
        writeln!(out, "Generation {generation}:")?;
        for id in members {
            writeln!(out, "    {}", tree.person(id).name())?;
        }
    }

    let unplaced = tree.persons_without_generation();
    if !unplaced.is_empty() {
        writeln!(out, "Without generation:")?;
        for id in unplaced {
            writeln!(out, "    {}", tree.person(id).name())?;
        }
    }

    Ok(())
}
