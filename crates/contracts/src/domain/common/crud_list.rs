use super::{AggregateRoot, RecordStatus};

/// Rows of a settings list page, kept in server order.
///
/// The list is the transient client copy of a server collection: it is
/// replaced after each fetch and patched locally after create, update,
/// status toggle and delete.
#[derive(Debug, Clone)]
pub struct CrudList<T: AggregateRoot> {
    items: Vec<T>,
}

impl<T: AggregateRoot> Default for CrudList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: AggregateRoot> CrudList<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn replace_all(&mut self, items: Vec<T>) {
        self.items = items;
    }

    /// Replace the row with the same id, or prepend a newly created one.
    pub fn upsert(&mut self, item: T) {
        match self.items.iter().position(|row| row.id() == item.id()) {
            Some(pos) => self.items[pos] = item,
            None => self.items.insert(0, item),
        }
    }

    /// Drop a row after a successful delete. Returns whether it was present.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        self.items.len() != before
    }

    /// Rows matching a case-insensitive search, in list order.
    pub fn search(&self, query: &str) -> Vec<T> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.items.clone();
        }
        self.items
            .iter()
            .filter(|item| item.search_text().to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a009_journey_stage::aggregate::JourneyStage;
    use crate::domain::common::EntityMetadata;

    fn stage(id: &str, name: &str, order: u32, status: RecordStatus) -> JourneyStage {
        JourneyStage {
            id: id.to_string(),
            name: name.to_string(),
            order,
            description: None,
            is_mandatory: false,
            status,
            metadata: EntityMetadata::default(),
        }
    }

    fn sample() -> CrudList<JourneyStage> {
        CrudList::new(vec![
            stage("1", "Site Survey", 1, RecordStatus::Active),
            stage("2", "Installation", 2, RecordStatus::Active),
            stage("3", "Net Metering", 3, RecordStatus::Inactive),
        ])
    }

    #[test]
    fn test_remove_after_delete() {
        let mut list = sample();
        assert!(list.remove("2"));
        assert!(!list.contains("2"));
        assert_eq!(list.len(), 2);
        assert!(!list.remove("2"));
    }

    #[test]
    fn test_upsert_replaces_or_prepends() {
        let mut list = sample();
        list.upsert(stage("2", "Panel Installation", 2, RecordStatus::Active));
        assert_eq!(list.len(), 3);
        assert_eq!(list.get("2").unwrap().name, "Panel Installation");

        list.upsert(stage("4", "Handover", 4, RecordStatus::Active));
        assert_eq!(list.len(), 4);
        assert_eq!(list.items()[0].id, "4");
    }

    #[test]
    fn test_search() {
        let list = sample();
        assert_eq!(list.search("INSTALL").len(), 1);
        assert_eq!(list.search("  ").len(), 3);
    }
}
