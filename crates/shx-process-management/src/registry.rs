//! Handle-keyed storage for process records.

use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use shx_common::{Error, ProcessHandle, Result};

use crate::record::ProcessRecord;

/// Concurrent map of every process the manager has ever started.
///
/// Records are inserted at spawn time and never removed, so finished
/// and terminated processes stay inspectable for the life of the
/// manager. Clones are cheap and share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct ProcessRegistry {
    records: Arc<DashMap<ProcessHandle, Arc<ProcessRecord>>>,
}

impl ProcessRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record under its own handle.
    ///
    /// Handles are random, so a collision indicates a caller bug;
    /// it is reported as [`Error::DuplicateHandle`] rather than
    /// silently replacing the existing record.
    pub fn insert(&self, record: Arc<ProcessRecord>) -> Result<()> {
        match self.records.entry(record.handle().clone()) {
            Entry::Occupied(_) => Err(Error::duplicate_handle(record.handle().clone())),
            Entry::Vacant(vacant) => {
                vacant.insert(record);
                Ok(())
            }
        }
    }

    pub fn get(&self, handle: &ProcessHandle) -> Option<Arc<ProcessRecord>> {
        self.records.get(handle).map(|r| Arc::clone(r.value()))
    }

    /// Point-in-time view of all records, oldest launch first.
    ///
    /// Safe to call while other tasks insert concurrently; entries
    /// added mid-iteration may or may not be included.
    pub fn snapshot(&self) -> Vec<Arc<ProcessRecord>> {
        let mut records: Vec<_> = self
            .records
            .iter()
            .map(|r| Arc::clone(r.value()))
            .collect();
        records.sort_by_key(|r| r.started_at());
        records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_record(handle: &str) -> Arc<ProcessRecord> {
        let mut child = tokio::process::Command::new("true").spawn().unwrap();
        let pid = child.id().unwrap();
        child.wait().await.unwrap();
        Arc::new(ProcessRecord::new(
            ProcessHandle::new(handle),
            "true".to_string(),
            pid,
            child,
        ))
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let registry = ProcessRegistry::new();
        let record = test_record("handle-1").await;

        registry.insert(Arc::clone(&record)).unwrap();

        let found = registry.get(&ProcessHandle::new("handle-1")).unwrap();
        assert_eq!(found.command(), "true");
        assert_eq!(registry.len(), 1);
    }

    #[tokio::test]
    async fn test_get_unknown_handle() {
        let registry = ProcessRegistry::new();
        assert!(registry.get(&ProcessHandle::new("nope")).is_none());
        assert!(registry.is_empty());
    }

    #[tokio::test]
    async fn test_insert_duplicate_handle_fails() {
        let registry = ProcessRegistry::new();
        registry.insert(test_record("same").await).unwrap();

        let result = registry.insert(test_record("same").await);

        assert!(matches!(result, Err(Error::DuplicateHandle { .. })));
        assert_eq!(registry.len(), 1);
    }

    #[tokio::test]
    async fn test_snapshot_is_ordered_by_launch_time() {
        let registry = ProcessRegistry::new();
        for i in 0..5 {
            registry.insert(test_record(&format!("h-{}", i)).await).unwrap();
            tokio::time::sleep(std::time::Duration::from_millis(2)).await;
        }

        let snapshot = registry.snapshot();
        assert_eq!(snapshot.len(), 5);
        for window in snapshot.windows(2) {
            assert!(window[0].started_at() <= window[1].started_at());
        }
    }

    #[tokio::test]
    async fn test_concurrent_inserts() {
        let registry = ProcessRegistry::new();
        let mut tasks = Vec::new();

        for i in 0..10 {
            let registry = registry.clone();
            tasks.push(tokio::spawn(async move {
                let record = test_record(&format!("concurrent-{}", i)).await;
                registry.insert(record)
            }));
        }
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        assert_eq!(registry.len(), 10);
    }
}
