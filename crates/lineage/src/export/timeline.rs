//! Chronological listing of births, deaths and weddings.
//!
//! ```text
//! Family tree of Jean
//!
//! ########## Century 19 ##########
//!
//! ========== 1900 ==========
//!
//! 01/01/1900 : Birth of Jean.
//! 01/01/1910 : Birth of Marie.
//! 01/06/1932 : ♥ Marriage of Jean and Marie.
//! ```
//!
//! A century banner opens the first event of each `year / 100`, and a decade
//! banner the first event of a year divisible by ten. Further events on the
//! same date continue on `------------` lines.

use std::{
    collections::HashSet,
    fmt::{self, Write as _},
};

use lineage_core::{
    FamilyTree,
    chronology::{Chronology, Event},
};

const CONTINUATION: &str = "------------";

/// Renders the timeline of `tree` under `title`.
pub fn render(tree: &FamilyTree, title: &str) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_timeline(&mut out, tree, title);
    out
}

fn write_timeline(out: &mut String, tree: &FamilyTree, title: &str) -> fmt::Result {
    writeln!(out, "{title}")?;

    let mut centuries = HashSet::new();
    let mut decades = HashSet::new();

    for (date, events) in Chronology::from_tree(tree).iter() {
        if centuries.insert(date.century()) {
            write!(
                out,
                "\n########## Century {} ##########\n\n",
                date.century()
            )?;
        }
        if date.year() % 10 == 0 && decades.insert(date.year()) {
            write!(out, "\n========== {} ==========\n\n", date.year())?;
        }

        let mut events = events.iter();
        if let Some(first) = events.next() {
            writeln!(out, "{date} : {}", describe(tree, first))?;
        }
        for event in events {
            writeln!(out, "{CONTINUATION} {}", describe(tree, event))?;
        }
    }

    Ok(())
}

fn describe(tree: &FamilyTree, event: &Event) -> String {
    let name = |id| tree.person(id).name();
    match *event {
        Event::Birth(id) => format!("Birth of {}.", name(id)),
        Event::Death(id) => format!("† Death of {}.", name(id)),
        Event::Marriage(a, b) => format!("♥ Marriage of {} and {}.", name(a), name(b)),
    }
}
