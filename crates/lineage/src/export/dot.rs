//! Graphviz DOT rendering of a family tree.
//!
//! Every person becomes a box labelled with its name and life span, every
//! couple a diamond with a `marriage_` node id. Children hang from
//! their parents' marriage node, or directly from a parent when the parents
//! are not married to each other. Persons sharing a generation are kept on
//! the same rank.

use std::collections::HashSet;

use dot_generator::id;
use dot_structures::{
    Attribute, Edge, EdgeTy, Graph, GraphAttributes, Id, Node, NodeId, Stmt, Subgraph, Vertex,
};
use graphviz_rust::printer::{DotPrinter, PrinterContext};
use log::{debug, trace};

use lineage_core::{FamilyTree, Person, PersonId};

use crate::{config::StyleConfig, export::default_title};

/// Builds the DOT graph of `tree`.
///
/// # Errors
///
/// Returns an error if a color of `style` cannot be parsed.
pub fn family_graph(tree: &FamilyTree, style: &StyleConfig) -> Result<Graph, String> {
    let root_color = style.root_color()?;
    let couple_color = style.couple_color()?;
    let title = style
        .title()
        .map_or_else(|| default_title(tree), str::to_string);

    let mut stmts = vec![Stmt::GAttribute(GraphAttributes::Graph(vec![
        attr("label", quoted(&title)),
        attr("labelloc", id!("t")),
        attr("labeljust", id!("c")),
        attr("fontsize", id!(style.font_size())),
        attr("fontcolor", id!("blue")),
    ]))];

    for person in tree.persons() {
        let color = if tree.root() == Some(person.id()) {
            quoted(&root_color)
        } else {
            id!("black")
        };
        stmts.push(Stmt::Node(Node {
            id: node_id(&person.name().to_name()),
            attributes: vec![
                attr("shape", id!("box")),
                attr("color", color),
                attr("label", person_label(person)),
            ],
        }));
    }

    let mut couples = HashSet::new();
    for person in tree.persons() {
        let Some(spouse) = person.spouse() else {
            continue;
        };
        let pair = if person.id() < spouse {
            (person.id(), spouse)
        } else {
            (spouse, person.id())
        };
        if !couples.insert(pair) {
            continue;
        }
        let key = marriage_node(tree, person.id(), spouse);
        trace!(couple:% = key; "Adding marriage node");

        let label = match person.wedding_date() {
            Some(date) => format!("♥ {date} ♥"),
            None => "♥".to_string(),
        };
        stmts.push(Stmt::Node(Node {
            id: node_id(&key),
            attributes: vec![
                attr("shape", id!("diamond")),
                attr("color", quoted(&couple_color)),
                attr("label", quoted(&label)),
            ],
        }));
        for partner in [person.id(), spouse] {
            stmts.push(edge(
                &tree.person(partner).name().to_name(),
                &key,
                vec![
                    attr("color", quoted(&couple_color)),
                    attr("arrowhead", id!("none")),
                ],
            ));
        }
    }

    for child in tree.persons() {
        let child_name = child.name().to_name();
        for source in edge_sources(tree, child) {
            stmts.push(edge(&source, &child_name, Vec::new()));
        }
    }

    for (generation, members) in tree.generation_groups() {
        let mut rank = vec![Stmt::Attribute(attr("rank", id!("same")))];
        rank.extend(members.into_iter().map(|id| {
            Stmt::Node(Node {
                id: node_id(&tree.person(id).name().to_name()),
                attributes: Vec::new(),
            })
        }));
        stmts.push(Stmt::Subgraph(Subgraph {
            id: id!(format!("generation_{generation}")),
            stmts: rank,
        }));
    }

    debug!(
        persons = tree.len(),
        couples = couples.len(),
        stmts = stmts.len();
        "Family graph built"
    );

    Ok(Graph::DiGraph {
        id: id!("family_tree"),
        strict: false,
        stmts,
    })
}

/// Prints a graph in DOT syntax.
pub fn to_dot_string(graph: &Graph) -> String {
    graph.print(&mut PrinterContext::default())
}

/// Nodes a child hangs from: the marriage node when its two parents are
/// married to each other, otherwise each parent.
fn edge_sources(tree: &FamilyTree, child: &Person) -> Vec<String> {
    match *child.parents() {
        [a, b] if tree.person(a).spouse() == Some(b) => vec![marriage_node(tree, a, b)],
        ref parents => parents.iter().map(|&id| name_of(tree, id)).collect(),
    }
}

fn name_of(tree: &FamilyTree, id: PersonId) -> String {
    tree.person(id).name().to_name()
}

/// Names are alphabetic, so the underscores keep marriage ids apart from
/// person ids and from each other.
fn marriage_node(tree: &FamilyTree, a: PersonId, b: PersonId) -> String {
    let (a, b) = (name_of(tree, a), name_of(tree, b));
    let (first, second) = if a < b { (a, b) } else { (b, a) };
    format!("marriage_{first}_{second}")
}

/// `name` over `birth - death†`, or `birth - ` for a living person.
fn person_label(person: &Person) -> Id {
    let span = match person.deathdate() {
        Some(deathdate) => format!("{} - {deathdate}†", person.birthdate()),
        None => format!("{} - ", person.birthdate()),
    };
    let name = person.name().to_name();
    multiline(&[name.as_str(), span.as_str()])
}

fn edge(from: &str, to: &str, attributes: Vec<Attribute>) -> Stmt {
    Stmt::Edge(Edge {
        ty: EdgeTy::Pair(Vertex::N(node_id(from)), Vertex::N(node_id(to))),
        attributes,
    })
}

fn node_id(name: &str) -> NodeId {
    NodeId(quoted(name), None)
}

fn attr(key: &str, value: Id) -> Attribute {
    Attribute(id!(key), value)
}

/// A double-quoted DOT string.
pub(crate) fn quoted(text: &str) -> Id {
    let escaped = escape(text);
    id!(esc escaped)
}

/// A double-quoted DOT string with one line per entry.
pub(crate) fn multiline(lines: &[&str]) -> Id {
    let joined = lines
        .iter()
        .map(|line| escape(line))
        .collect::<Vec<_>>()
        .join("\\n");
    id!(esc joined)
}

fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}
