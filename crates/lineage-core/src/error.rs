//! Errors raised while mutating a [`FamilyTree`](crate::FamilyTree).

use thiserror::Error;

use crate::identifier::Id;

/// A model mutation that would break one of the tree invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("person `{name}` is already declared")]
    DuplicatePerson { name: Id },

    #[error("person `{name}` cannot be linked to themselves")]
    SelfLink { name: Id },

    #[error("person `{child}` already has two parents")]
    TooManyParents { child: Id },
}
