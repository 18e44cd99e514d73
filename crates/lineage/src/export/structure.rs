//! Statement structure diagram.
//!
//! [`StructureDiagram`] listens to the parser and mirrors the source one
//! statement at a time: declarations hang from a `family_tree` node,
//! marriages become diamonds pointing at both spouses, and familial links
//! become `familial_link` nodes pointing at the parent and the child. Node
//! keys combine names with birthdates, so the diagram reflects declaration
//! order rather than generations.

use dot_generator::id;
use dot_structures::{Attribute, Edge, EdgeTy, Graph, Id, Node, NodeId, Stmt, Vertex};

use lineage_core::{date::Date, identifier::Id as Name};
use lineage_parser::observer::{
    DeclarationEvent, FamilialLinkEvent, MaritalLinkEvent, ParseObserver,
};

use crate::export::dot::{multiline, quoted};

const ROOT_NODE: &str = "family_tree";

/// A [`ParseObserver`] that accumulates the statement diagram.
#[derive(Debug, Clone)]
pub struct StructureDiagram {
    stmts: Vec<Stmt>,
}

impl StructureDiagram {
    pub fn new() -> Self {
        let root = Stmt::Node(Node {
            id: node_id(ROOT_NODE),
            attributes: vec![attr("label", quoted(ROOT_NODE))],
        });
        Self { stmts: vec![root] }
    }

    /// Number of statements collected so far, the root node included.
    pub fn len(&self) -> usize {
        self.stmts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stmts.is_empty()
    }

    /// Finishes the diagram.
    pub fn into_graph(self) -> Graph {
        Graph::DiGraph {
            id: id!("statements"),
            strict: false,
            stmts: self.stmts,
        }
    }

    fn person_box(&mut self, key: &str, name: Name, birthdate: Date) {
        let name = name.to_name();
        let birthdate = birthdate.to_string();
        self.stmts.push(Stmt::Node(Node {
            id: node_id(key),
            attributes: vec![
                attr("shape", id!("box")),
                attr("label", multiline(&[name.as_str(), birthdate.as_str()])),
            ],
        }));
    }

    fn edge(&mut self, from: &str, to: &str, label: Option<&str>) {
        let attributes = label
            .map(|label| vec![attr("label", quoted(label))])
            .unwrap_or_default();
        self.stmts.push(Stmt::Edge(Edge {
            ty: EdgeTy::Pair(Vertex::N(node_id(from)), Vertex::N(node_id(to))),
            attributes,
        }));
    }
}

impl Default for StructureDiagram {
    fn default() -> Self {
        Self::new()
    }
}

impl ParseObserver for StructureDiagram {
    fn declaration(&mut self, event: &DeclarationEvent) {
        let name = event.name.to_name();
        let birthdate = event.birthdate.to_string();
        let key = format!("{name}{birthdate}");

        let span = match event.deathdate {
            Some(deathdate) => format!("{birthdate}-{deathdate}"),
            None => birthdate,
        };
        self.stmts.push(Stmt::Node(Node {
            id: node_id(&key),
            attributes: vec![
                attr("shape", id!("box")),
                attr("label", multiline(&[name.as_str(), span.as_str()])),
            ],
        }));

        let label = if event.is_root { "root" } else { "declaration" };
        self.edge(ROOT_NODE, &key, Some(label));
    }

    fn marital_link(&mut self, event: &MaritalLinkEvent) {
        let (key, label) = match event.wedding_date {
            Some(date) => (
                format!("marriage{}{}{date}", event.left, event.right),
                format!("♥ Marriage ♥\n{date}"),
            ),
            None => (
                format!("marriage{}{}", event.left, event.right),
                "♥ Marriage ♥".to_string(),
            ),
        };
        let lines: Vec<&str> = label.lines().collect();
        self.stmts.push(Stmt::Node(Node {
            id: node_id(&key),
            attributes: vec![
                attr("shape", id!("diamond")),
                attr("label", multiline(&lines)),
            ],
        }));
        self.edge(ROOT_NODE, &key, None);

        for (name, birthdate) in [
            (event.left, event.left_birthdate),
            (event.right, event.right_birthdate),
        ] {
            let spouse_key = format!("wedd{name}{birthdate}");
            self.person_box(&spouse_key, name, birthdate);
            self.edge(&key, &spouse_key, None);
        }
    }

    fn familial_link(&mut self, event: &FamilialLinkEvent) {
        let key = format!("familial{}{}", event.parent, event.child);
        self.stmts.push(Stmt::Node(Node {
            id: node_id(&key),
            attributes: vec![attr("label", quoted("familial_link"))],
        }));
        self.edge(ROOT_NODE, &key, Some("familial_link"));

        for (name, birthdate) in [
            (event.parent, event.parent_birthdate),
            (event.child, event.child_birthdate),
        ] {
            let member_key = format!("fam{name}{birthdate}");
            self.person_box(&member_key, name, birthdate);
            self.edge(&key, &member_key, None);
        }
    }
}

fn node_id(key: &str) -> NodeId {
    NodeId(quoted(key), None)
}

fn attr(key: &str, value: Id) -> Attribute {
    Attribute(id!(key), value)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = "\
family_tree {
Jean(01/01/1900-01/01/1980);
Marie(01/01/1910-);
Jean<=>Marie(01/06/1930);
Pierre(01/01/1935-);
Jean->Pierre;
}";

    fn node_keys(graph: &Graph) -> Vec<Id> {
        let Graph::DiGraph { stmts, .. } = graph else {
            panic!("expected a digraph");
        };
        stmts
            .iter()
            .filter_map(|stmt| match stmt {
                Stmt::Node(node) => Some(node.id.0.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_mirrors_statements_in_order() {
        let mut diagram = StructureDiagram::new();
        lineage_parser::parse_with(SOURCE, &mut diagram).unwrap();

        let keys = node_keys(&diagram.into_graph());
        let expected: Vec<Id> = [
            "family_tree",
            "Jean01/01/1900",
            "Marie01/01/1910",
            "marriageJeanMarie01/06/1930",
            "weddJean01/01/1900",
            "weddMarie01/01/1910",
            "Pierre01/01/1935",
            "familialJeanPierre",
            "famJean01/01/1900",
            "famPierre01/01/1935",
        ]
        .into_iter()
        .map(quoted)
        .collect();

        assert_eq!(keys, expected);
    }

    #[test]
    fn test_root_edge_label() {
        let mut diagram = StructureDiagram::new();
        lineage_parser::parse_with(SOURCE, &mut diagram).unwrap();

        let Graph::DiGraph { stmts, .. } = diagram.into_graph() else {
            panic!("expected a digraph");
        };
        let labels: Vec<Attribute> = stmts
            .into_iter()
            .filter_map(|stmt| match stmt {
                Stmt::Edge(edge) => edge.attributes.into_iter().next(),
                _ => None,
            })
            .collect();

        assert_eq!(
            labels,
            vec![
                attr("label", quoted("root")),
                attr("label", quoted("declaration")),
                attr("label", quoted("declaration")),
                attr("label", quoted("familial_link")),
            ]
        );
    }

    #[test]
    fn test_failed_parse_keeps_earlier_statements() {
        let mut diagram = StructureDiagram::new();
        let result = lineage_parser::parse_with(
            "family_tree { Jean(01/01/1900-); Jean->Marie; }",
            &mut diagram,
        );

        assert!(result.is_err());
        // Root node, Jean, and the declaration edge.
        assert_eq!(diagram.len(), 3);
    }
}
