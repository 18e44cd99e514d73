//! Date-ordered index of the life events recorded in a family tree.

use std::collections::BTreeMap;

use crate::{date::Date, family_tree::FamilyTree, person::PersonId};

/// A single dated event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Birth(PersonId),
    Death(PersonId),
    /// A wedding, listed once per couple with the earlier declared spouse first.
    Marriage(PersonId, PersonId),
}

/// Events of a tree grouped by date, in ascending date order.
///
/// Events sharing a date are listed in the declaration order of the person
/// they belong to; births come before deaths and marriages of that person.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Chronology {
    events: BTreeMap<Date, Vec<Event>>,
}

impl Chronology {
    /// Scans every person of `tree` for births, deaths and weddings.
    pub fn from_tree(tree: &FamilyTree) -> Self {
        let mut events: BTreeMap<Date, Vec<Event>> = BTreeMap::new();

        for person in tree.persons() {
            let id = person.id();
            events
                .entry(person.birthdate())
                .or_default()
                .push(Event::Birth(id));

            if let Some(deathdate) = person.deathdate() {
                events.entry(deathdate).or_default().push(Event::Death(id));
            }

            // The mirrored record on the spouse carries the same date.
            if let (Some(spouse), Some(wedding_date)) = (person.spouse(), person.wedding_date()) {
                if id < spouse {
                    events
                        .entry(wedding_date)
                        .or_default()
                        .push(Event::Marriage(id, spouse));
                }
            }
        }

        Self { events }
    }

    /// Iterates over dates and their events, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = (Date, &[Event])> {
        self.events
            .iter()
            .map(|(date, events)| (*date, events.as_slice()))
    }

    /// Total number of events.
    pub fn len(&self) -> usize {
        self.events.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identifier::Id;

    fn date(text: &str) -> Date {
        text.parse().unwrap()
    }

    #[test]
    fn test_events_sorted_by_date() {
        let mut tree = FamilyTree::new();
        let jean = tree
            .declare(Id::new("Jean"), date("01/01/1900"), Some(date("01/01/1980")))
            .unwrap();
        let marie = tree
            .declare(Id::new("Marie"), date("01/01/1910"), Some(date("01/01/1990")))
            .unwrap();
        let pierre = tree
            .declare(Id::new("Pierre"), date("01/01/1935"), None)
            .unwrap();
        tree.link_spouses(jean, marie, Some(date("01/06/1930")))
            .unwrap();

        let chronology = Chronology::from_tree(&tree);
        let flattened: Vec<(Date, Event)> = chronology
            .iter()
            .flat_map(|(date, events)| events.iter().map(move |event| (date, *event)))
            .collect();

        assert_eq!(
            flattened,
            vec![
                (date("01/01/1900"), Event::Birth(jean)),
                (date("01/01/1910"), Event::Birth(marie)),
                (date("01/06/1930"), Event::Marriage(jean, marie)),
                (date("01/01/1935"), Event::Birth(pierre)),
                (date("01/01/1980"), Event::Death(jean)),
                (date("01/01/1990"), Event::Death(marie)),
            ]
        );
        assert_eq!(chronology.len(), 6);
    }

    #[test]
    fn test_same_day_events_share_an_entry() {
        let mut tree = FamilyTree::new();
        let anne = tree
            .declare(Id::new("Anne"), date("05/05/1950"), None)
            .unwrap();
        let paul = tree
            .declare(Id::new("Paul"), date("5/5/1950"), None)
            .unwrap();

        let chronology = Chronology::from_tree(&tree);
        let entries: Vec<_> = chronology.iter().collect();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].1, &[Event::Birth(anne), Event::Birth(paul)]);
    }

    #[test]
    fn test_marriage_without_date_is_not_an_event() {
        let mut tree = FamilyTree::new();
        let jean = tree
            .declare(Id::new("Jean"), date("01/01/1900"), None)
            .unwrap();
        let marie = tree
            .declare(Id::new("Marie"), date("01/01/1910"), None)
            .unwrap();
        tree.link_spouses(marie, jean, None).unwrap();

        let chronology = Chronology::from_tree(&tree);

        assert_eq!(chronology.len(), 2);
        assert!(
            chronology
                .iter()
                .all(|(_, events)| !matches!(events[0], Event::Marriage(..)))
        );
    }

    #[test]
    fn test_empty_tree() {
        let chronology = Chronology::from_tree(&FamilyTree::new());
        assert!(chronology.is_empty());
        assert_eq!(chronology.len(), 0);
    }
}
