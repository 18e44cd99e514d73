//! The family tree: owner of every declared [`Person`].
//!
//! Persons live in an insertion-ordered arena keyed by name. All relations
//! between them are [`PersonId`]s into that arena, so the tree is the single
//! owner of person data and links can never outlive it.

use std::fmt;

use indexmap::IndexMap;
use log::{trace, warn};

use crate::{
    date::Date,
    error::ModelError,
    identifier::Id,
    person::{Person, PersonId},
};

/// All persons of one parsed source, plus the root (first declared person).
#[derive(Debug, Clone, Default)]
pub struct FamilyTree {
    persons: IndexMap<Id, Person>,
    root: Option<PersonId>,
}

impl FamilyTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a new person. The first declaration becomes the root.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DuplicatePerson`] if the name is already taken.
    pub fn declare(
        &mut self,
        name: Id,
        birthdate: Date,
        deathdate: Option<Date>,
    ) -> Result<PersonId, ModelError> {
        if self.persons.contains_key(&name) {
            return Err(ModelError::DuplicatePerson { name });
        }

        let id = PersonId(self.persons.len());
        self.persons
            .insert(name, Person::new(id, name, birthdate, deathdate));

        if self.root.is_none() {
            self.root = Some(id);
        }

        trace!(name:%, id:%; "Declared person");
        Ok(id)
    }

    /// The first declared person, if any.
    pub fn root(&self) -> Option<PersonId> {
        self.root
    }

    /// The root person record, if any.
    pub fn root_person(&self) -> Option<&Person> {
        self.root.map(|id| self.person(id))
    }

    /// Looks up a person by name.
    pub fn find(&self, name: &str) -> Option<PersonId> {
        self.get(name).map(Person::id)
    }

    /// Looks up a person record by name.
    pub fn get(&self, name: &str) -> Option<&Person> {
        self.persons.get(&Id::lookup(name)?)
    }

    /// Returns the person behind an id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this tree.
    pub fn person(&self, id: PersonId) -> &Person {
        &self.persons[id.0]
    }

    pub(crate) fn person_mut(&mut self, id: PersonId) -> &mut Person {
        &mut self.persons[id.0]
    }

    /// Iterates over persons in declaration order.
    pub fn persons(&self) -> impl ExactSizeIterator<Item = &Person> {
        self.persons.values()
    }

    /// Iterates over person ids in declaration order.
    pub fn ids(&self) -> impl ExactSizeIterator<Item = PersonId> + use<> {
        (0..self.persons.len()).map(PersonId)
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    /// Links two persons as mutual spouses.
    ///
    /// A person previously married to someone else is detached from that
    /// partner first, so the spouse relation stays symmetric. Without a new
    /// wedding date, an existing date of the same couple is kept.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::SelfLink`] if `a` and `b` are the same person.
    pub fn link_spouses(
        &mut self,
        a: PersonId,
        b: PersonId,
        wedding_date: Option<Date>,
    ) -> Result<(), ModelError> {
        if a == b {
            return Err(ModelError::SelfLink {
                name: self.person(a).name(),
            });
        }

        let same_couple = self.person(a).spouse == Some(b);
        let wedding_date = wedding_date.or(if same_couple {
            self.person(a).wedding_date
        } else {
            None
        });

        for (this, other) in [(a, b), (b, a)] {
            if let Some(former) = self.person(this).spouse.filter(|&former| former != other) {
                warn!(
                    person:% = self.person(this).name(),
                    former_spouse:% = self.person(former).name();
                    "Replacing existing spouse"
                );
                let former = self.person_mut(former);
                former.spouse = None;
                former.wedding_date = None;
            }
        }

        for (this, other) in [(a, b), (b, a)] {
            let person = self.person_mut(this);
            person.spouse = Some(other);
            person.wedding_date = wedding_date;
        }

        Ok(())
    }

    /// Records `child` as a child of `parent`.
    ///
    /// The child is added to the parent's children and, only if the parent
    /// is married at this point, to the spouse's children as well. The parent
    /// and that spouse are appended to the child's parents. A marriage
    /// recorded after this call does not retroactively extend the spouse's
    /// children.
    ///
    /// # Errors
    ///
    /// - [`ModelError::SelfLink`] if `parent` and `child` are the same person.
    /// - [`ModelError::TooManyParents`] if the child would end up with more
    ///   than two parents. The tree is left untouched in that case.
    pub fn link_child(&mut self, parent: PersonId, child: PersonId) -> Result<(), ModelError> {
        if parent == child {
            return Err(ModelError::SelfLink {
                name: self.person(parent).name(),
            });
        }

        let spouse = self.person(parent).spouse;
        let mut parents = self.person(child).parents.clone();
        for candidate in std::iter::once(parent).chain(spouse) {
            if !parents.contains(&candidate) {
                parents.push(candidate);
            }
        }
        if parents.len() > 2 {
            return Err(ModelError::TooManyParents {
                child: self.person(child).name(),
            });
        }

        for guardian in std::iter::once(parent).chain(spouse) {
            let children = &mut self.person_mut(guardian).children;
            if !children.contains(&child) {
                children.push(child);
            }
        }
        self.person_mut(child).parents = parents;

        Ok(())
    }

    /// Stable key for a couple: both names in alphabetical order.
    pub fn couple_key(&self, a: PersonId, b: PersonId) -> String {
        let (a, b) = (self.person(a).name().to_name(), self.person(b).name().to_name());
        if a < b { a + &b } else { b + &a }
    }

    /// A one-line human readable description of a person.
    pub fn describe(&self, id: PersonId) -> PersonDescription<'_> {
        PersonDescription { tree: self, id }
    }
}

/// [`Display`](fmt::Display) adapter returned by [`FamilyTree::describe`].
pub struct PersonDescription<'a> {
    tree: &'a FamilyTree,
    id: PersonId,
}

impl fmt::Display for PersonDescription<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let person = self.tree.person(self.id);
        write!(f, "{} born {}", person.name(), person.birthdate())?;
        if let Some(deathdate) = person.deathdate() {
            write!(f, ", died {deathdate}")?;
        }
        if let Some(spouse) = person.spouse() {
            write!(f, ", married to {}", self.tree.person(spouse).name())?;
        }
        if !person.parents().is_empty() {
            let mut names: Vec<String> = person
                .parents()
                .iter()
                .map(|&parent| self.tree.person(parent).name().to_name())
                .collect();
            names.sort();
            write!(f, ", child of {}", names.join(" and "))?;
        }
        write!(f, ".")
    }
}

impl fmt::Display for FamilyTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for id in self.ids() {
            writeln!(f, "{}", self.describe(id))?;
        }
        Ok(())
    }
}
