//! Lineage Core Types and Definitions
//!
//! This crate provides the in-memory model built from Lineage family tree
//! sources. It includes:
//!
//! - **Identifiers**: Interned person names ([`identifier::Id`])
//! - **Dates**: Day-month-year dates without calendar validation ([`date::Date`])
//! - **Model**: [`Person`] records owned by a [`FamilyTree`]
//! - **Generations**: Depth assignment relative to an anchor person
//!   ([`FamilyTree::assign_generations`])
//! - **Chronology**: Date-ordered births, deaths and weddings
//!   ([`chronology::Chronology`])

pub mod chronology;
pub mod date;
pub mod identifier;

mod error;
mod family_tree;
mod generation;
mod person;

pub use error::ModelError;
pub use family_tree::{FamilyTree, PersonDescription};
pub use person::{Person, PersonId};
