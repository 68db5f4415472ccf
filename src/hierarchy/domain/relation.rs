use super::PersonName;
use crate::shared::Result;
use std::collections::{HashMap, HashSet};

/// One row of the relation: a parent and its ordered children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationEntry {
    parent: PersonName,
    children: Vec<PersonName>,
}

impl RelationEntry {
    pub fn parent(&self) -> &PersonName {
        &self.parent
    }

    pub fn children(&self) -> &[PersonName] {
        &self.children
    }
}

/// Relation aggregate mapping each parent to its ordered list of children
///
/// Entries keep insertion order: the order in which parents were first
/// seen is the order used when scanning for the parents of a person.
/// Inserting an existing parent replaces its children in place.
///
/// The relation is not required to be acyclic, and children do not have to
/// appear as parents themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Relation {
    entries: Vec<RelationEntry>,
    index: HashMap<PersonName, usize>,
}

impl Relation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a relation from plain string pairs, validating every name.
    ///
    /// ```
    /// use family_hierarchy::prelude::*;
    ///
    /// # fn main() -> Result<()> {
    /// let relation = Relation::try_from_pairs([("A", &["B", "C"][..]), ("B", &["D"][..])])?;
    /// assert_eq!(relation.len(), 2);
    /// # Ok(())
    /// # }
    /// ```
    pub fn try_from_pairs<'a, I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a [&'a str])>,
    {
        let mut relation = Self::new();
        for (parent, children) in pairs {
            let children = children
                .iter()
                .map(|child| PersonName::new(*child))
                .collect::<Result<Vec<_>>>()?;
            relation.insert(PersonName::new(parent)?, children);
        }
        Ok(relation)
    }

    /// Inserts or replaces the children of `parent`.
    ///
    /// A replaced parent keeps its original position.
    pub fn insert(&mut self, parent: PersonName, children: Vec<PersonName>) {
        match self.index.get(&parent) {
            Some(&position) => self.entries[position].children = children,
            None => {
                self.index.insert(parent.clone(), self.entries.len());
                self.entries.push(RelationEntry { parent, children });
            }
        }
    }

    /// Children of `parent` in their listed order, if `parent` is a key.
    pub fn children_of(&self, parent: &PersonName) -> Option<&[PersonName]> {
        self.index
            .get(parent)
            .map(|&position| self.entries[position].children.as_slice())
    }

    /// Every key whose child list contains `child`, in key order.
    pub fn parents_of<'a>(
        &'a self,
        child: &'a PersonName,
    ) -> impl Iterator<Item = &'a PersonName> + 'a {
        self.entries
            .iter()
            .filter(move |entry| entry.children.contains(child))
            .map(|entry| &entry.parent)
    }

    /// Whether `name` appears as a parent key.
    pub fn contains_parent(&self, name: &PersonName) -> bool {
        self.index.contains_key(name)
    }

    pub fn entries(&self) -> &[RelationEntry] {
        &self.entries
    }

    /// Number of parent keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct people mentioned as parents or children.
    pub fn person_count(&self) -> usize {
        let mut people: HashSet<&PersonName> = HashSet::new();
        for entry in &self.entries {
            people.insert(&entry.parent);
            people.extend(entry.children.iter());
        }
        people.len()
    }
}
