use crate::hierarchy::domain::Relation;

/// RelationStore - the relation held by the current session
///
/// Only a successful upload replaces the held relation. Anything that
/// fails before that point leaves the previous relation in place, so a
/// bad file never wipes out good data that was loaded earlier.
#[derive(Debug, Clone, Default)]
pub struct RelationStore {
    relation: Relation,
}

impl RelationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &Relation {
        &self.relation
    }

    /// Swaps in a new relation and returns the previous one.
    pub fn replace(&mut self, relation: Relation) -> Relation {
        std::mem::replace(&mut self.relation, relation)
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_starts_empty() {
        let store = RelationStore::new();
        assert!(store.current().is_empty());
    }

    #[test]
    fn test_replace_returns_previous() {
        let first = Relation::try_from_pairs([("A", &["B"][..])]).unwrap();
        let second = Relation::try_from_pairs([("C", &["D"][..])]).unwrap();

        let mut store = RelationStore::new();
        assert!(store.replace(first.clone()).is_empty());
        let previous = store.replace(second.clone());

        assert_eq!(previous, first);
        assert_eq!(store.current(), &second);
    }
}
