//! Generation assignment.
//!
//! Generations are depths along parent edges, counted upwards from an anchor
//! person: the anchor is generation 0, its parents 1, grandparents 2, and so
//! on. When two paths reach the same ancestor, the longer one wins, so a
//! parent always sits above every child it was reached from. Siblings of a
//! labelled person share its generation when nothing else labelled them
//! first. Persons that cannot be reached upwards from the anchor
//! (descendants, in-laws, unrelated branches) keep no generation.
//!
//! The traversal uses a FIFO worklist instead of recursion, so deep trees do
//! not grow the call stack. A person is queued again only when its
//! generation is raised.

use std::collections::{BTreeMap, HashSet, VecDeque};

use log::{debug, trace};

use crate::{family_tree::FamilyTree, person::PersonId};

impl FamilyTree {
    /// Assigns generations anchored at the root (first declared person).
    ///
    /// Does nothing on an empty tree.
    pub fn assign_generations(&mut self) {
        if let Some(root) = self.root() {
            self.assign_generations_from(root);
        }
    }

    /// Assigns generations anchored at `anchor`, replacing any earlier
    /// assignment.
    pub fn assign_generations_from(&mut self, anchor: PersonId) {
        for id in self.ids() {
            self.person_mut(id).generation = None;
        }

        self.person_mut(anchor).generation = Some(0);

        // Persons labelled by the upward walk, as opposed to the back-fill.
        let mut ancestral = HashSet::from([anchor]);
        let mut worklist = VecDeque::from([(anchor, 0u32)]);
        // No parent chain is longer than the tree, unless links form a cycle.
        let ceiling = u32::try_from(self.len()).unwrap_or(u32::MAX);

        while let Some((person, generation)) = worklist.pop_front() {
            if self.person(person).generation != Some(generation) {
                continue;
            }

            let parents = self.person(person).parents().to_vec();
            for parent in parents {
                let target = generation + 1;
                let raise = parent != anchor
                    && target < ceiling
                    && (ancestral.insert(parent)
                        || self.person(parent).generation < Some(target));
                if raise {
                    self.person_mut(parent).generation = Some(target);
                    worklist.push_back((parent, target));
                    trace!(
                        person:% = self.person(parent).name(),
                        generation = target;
                        "Assigned parent generation"
                    );
                }

                let siblings = self.person(parent).children().to_vec();
                for sibling in siblings {
                    if self.person(sibling).generation.is_none() {
                        self.person_mut(sibling).generation = Some(generation);
                        trace!(
                            person:% = self.person(sibling).name(),
                            generation;
                            "Back-filled sibling generation"
                        );
                    }
                }
            }
        }

        debug!(
            anchor:% = self.person(anchor).name(),
            ancestors = ancestral.len() - 1;
            "Generations assigned"
        );
    }

    /// Persons grouped by generation, each group in declaration order.
    pub fn generation_groups(&self) -> BTreeMap<u32, Vec<PersonId>> {
        let mut groups: BTreeMap<u32, Vec<PersonId>> = BTreeMap::new();
        for person in self.persons() {
            if let Some(generation) = person.generation() {
                groups.entry(generation).or_default().push(person.id());
            }
        }
        groups
    }

    /// Persons the last generation pass did not reach.
    pub fn persons_without_generation(&self) -> Vec<PersonId> {
        self.persons()
            .filter(|person| person.generation().is_none())
            .map(|person| person.id())
            .collect()
    }
}
