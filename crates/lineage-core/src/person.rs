//! Person records stored in a [`FamilyTree`](crate::FamilyTree).

use std::fmt;

use crate::{date::Date, identifier::Id};

/// Index of a person inside the tree that declared it.
///
/// A `PersonId` is only meaningful for the [`FamilyTree`](crate::FamilyTree)
/// that produced it. Relations between persons (spouse, parents, children)
/// are stored as `PersonId`s, so none of them owns the other record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PersonId(pub(crate) usize);

impl PersonId {
    /// Position of the person in declaration order.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A declared person and its links to the rest of the family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    id: PersonId,
    name: Id,
    birthdate: Date,
    deathdate: Option<Date>,
    pub(crate) spouse: Option<PersonId>,
    pub(crate) wedding_date: Option<Date>,
    pub(crate) parents: Vec<PersonId>,
    pub(crate) children: Vec<PersonId>,
    pub(crate) generation: Option<u32>,
}

impl Person {
    pub(crate) fn new(id: PersonId, name: Id, birthdate: Date, deathdate: Option<Date>) -> Self {
        Self {
            id,
            name,
            birthdate,
            deathdate,
            spouse: None,
            wedding_date: None,
            parents: Vec::new(),
            children: Vec::new(),
            generation: None,
        }
    }

    pub fn id(&self) -> PersonId {
        self.id
    }

    pub fn name(&self) -> Id {
        self.name
    }

    pub fn birthdate(&self) -> Date {
        self.birthdate
    }

    /// Date of death; `None` means the person is living.
    pub fn deathdate(&self) -> Option<Date> {
        self.deathdate
    }

    pub fn is_living(&self) -> bool {
        self.deathdate.is_none()
    }

    pub fn spouse(&self) -> Option<PersonId> {
        self.spouse
    }

    /// Wedding date, set only when the marital link carried one.
    pub fn wedding_date(&self) -> Option<Date> {
        self.wedding_date
    }

    /// Parents in the order they were linked (zero, one or two entries).
    pub fn parents(&self) -> &[PersonId] {
        &self.parents
    }

    /// Children in the order of the familial links that introduced them.
    pub fn children(&self) -> &[PersonId] {
        &self.children
    }

    /// Generation relative to the last anchor, if the pass reached this person.
    pub fn generation(&self) -> Option<u32> {
        self.generation
    }
}
