//! Per-statement notifications for consumers that mirror the source
//! structure, such as the statement diagram exporter.
//!
//! Events are emitted in parse order, after the statement has been applied
//! to the model, and before any generation pass runs.

use lineage_core::{date::Date, identifier::Id};

/// A person was declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeclarationEvent {
    pub name: Id,
    pub birthdate: Date,
    pub deathdate: Option<Date>,
    /// `true` for the first declaration of the source.
    pub is_root: bool,
}

/// Two persons were married.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaritalLinkEvent {
    pub left: Id,
    pub left_birthdate: Date,
    pub right: Id,
    pub right_birthdate: Date,
    pub wedding_date: Option<Date>,
}

/// A parent to child link was recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FamilialLinkEvent {
    pub parent: Id,
    pub parent_birthdate: Date,
    pub child: Id,
    pub child_birthdate: Date,
}

/// Receives one callback per successfully applied statement.
///
/// Every method has an empty default, so implementors only override what
/// they need. `()` is the no-op observer used by [`parse`](crate::parse).
pub trait ParseObserver {
    fn declaration(&mut self, _event: &DeclarationEvent) {}

    fn marital_link(&mut self, _event: &MaritalLinkEvent) {}

    fn familial_link(&mut self, _event: &FamilialLinkEvent) {}
}

impl ParseObserver for () {}
