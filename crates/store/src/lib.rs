//! Process-local project store.
//!
//! [`ProjectStore`] is the authoritative collection of project records. All
//! state (records and the id counter) sits behind one lock, and every
//! mutation validates, assigns and commits while holding the write guard, so
//! a rejected write never leaves partial state behind and two concurrent
//! creates can never share an id.
//!
//! The store performs no I/O and does no logging; it returns structured
//! [`CoreError`] values for the HTTP layer to render.

pub mod seed;

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use projectdesk_core::clock::Clock;
use projectdesk_core::error::CoreError;
use projectdesk_core::project::{Project, ProjectFields, ProjectPatch};

/// In-memory project collection with atomic CRUD.
pub struct ProjectStore {
    inner: RwLock<Inner>,
    clock: Arc<dyn Clock>,
}

struct Inner {
    /// Live records in insertion order.
    projects: Vec<Project>,
    /// Next id to hand out. Only ever incremented.
    next_id: u64,
}

impl Inner {
    fn position(&self, id: &str) -> Option<usize> {
        self.projects.iter().position(|p| p.id == id)
    }
}

impl ProjectStore {
    /// An empty store whose first id is `1`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self::with_records(clock, Vec::new())
    }

    /// A store preloaded with the demo projects from [`seed::demo_projects`].
    pub fn with_seed_data(clock: Arc<dyn Clock>) -> Self {
        Self::with_records(clock, seed::demo_projects())
    }

    /// A store preloaded with `records`, inserted as-is without validation.
    ///
    /// The counter starts at `records.len() + 1`, or past the highest numeric
    /// id among `records` if that is larger.
    pub fn with_records(clock: Arc<dyn Clock>, records: Vec<Project>) -> Self {
        let highest = records
            .iter()
            .filter_map(|p| p.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        let next_id = (records.len() as u64).max(highest) + 1;
        Self {
            inner: RwLock::new(Inner {
                projects: records,
                next_id,
            }),
            clock,
        }
    }

    // A poisoned lock still holds consistent data: nothing is written
    // until validation has passed.
    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// All current records, in insertion order.
    pub fn list_all(&self) -> Vec<Project> {
        self.read().projects.clone()
    }

    /// Find a project by id. Absence is not an error.
    pub fn get_by_id(&self, id: &str) -> Option<Project> {
        self.read().projects.iter().find(|p| p.id == id).cloned()
    }

    /// Validate `fields` and append a new record.
    ///
    /// On [`CoreError::Validation`] the collection and the id counter are
    /// left unchanged.
    pub fn create(&self, fields: ProjectFields) -> Result<Project, CoreError> {
        let mut inner = self.write();
        let now = self.clock.now();
        let validated = fields.into_validated(now.date_naive())?;

        let project = validated.into_project(inner.next_id.to_string(), now);
        inner.next_id += 1;
        inner.projects.push(project.clone());
        Ok(project)
    }

    /// Merge `patch` over the stored record, revalidate, and replace it.
    ///
    /// Returns `Ok(None)` if no project with `id` exists. If the merged
    /// record is invalid the stored record is left untouched.
    pub fn update(&self, id: &str, patch: ProjectPatch) -> Result<Option<Project>, CoreError> {
        let mut inner = self.write();
        let Some(index) = inner.position(id) else {
            return Ok(None);
        };
        let current = &inner.projects[index];
        let now = self.clock.now();

        let validated = current
            .to_fields()
            .merge(patch)
            .into_validated(now.date_naive())?;

        let mut updated = validated.into_project(current.id.clone(), current.created_at);
        // Never move updated_at backwards, even if the clock does.
        updated.updated_at = now.max(current.updated_at);

        inner.projects[index] = updated.clone();
        Ok(Some(updated))
    }

    /// Remove a project. Returns `true` if a record was removed.
    pub fn delete(&self, id: &str) -> bool {
        let mut inner = self.write();
        match inner.position(id) {
            Some(index) => {
                inner.projects.remove(index);
                true
            }
            None => false,
        }
    }

    /// Number of live records.
    pub fn len(&self) -> usize {
        self.read().projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use projectdesk_core::clock::FixedClock;

    fn fixed_store() -> ProjectStore {
        let clock = FixedClock(Utc.with_ymd_and_hms(2025, 6, 15, 9, 30, 0).unwrap());
        ProjectStore::new(Arc::new(clock))
    }

    fn fields(name: &str) -> ProjectFields {
        ProjectFields {
            name: name.into(),
            description: "A project used by the store unit tests".into(),
            status: "active".into(),
            priority: "low".into(),
            start_date: "2025-01-01".into(),
            end_date: None,
        }
    }

    #[test]
    fn new_store_starts_empty_with_id_one() {
        let store = fixed_store();
        assert!(store.is_empty());
        assert_eq!(store.create(fields("First")).unwrap().id, "1");
    }

    #[test]
    fn seeded_store_continues_after_seed_ids() {
        let clock = FixedClock(Utc.with_ymd_and_hms(2025, 6, 15, 9, 30, 0).unwrap());
        let store = ProjectStore::with_seed_data(Arc::new(clock));
        assert_eq!(store.len(), 4);
        assert_eq!(store.create(fields("Fifth")).unwrap().id, "5");
    }

    #[test]
    fn counter_skips_past_highest_existing_id() {
        let clock = Arc::new(FixedClock(Utc.with_ymd_and_hms(2025, 6, 15, 9, 30, 0).unwrap()));
        let mut records = seed::demo_projects();
        records.truncate(1);
        records[0].id = "40".into();
        let store = ProjectStore::with_records(clock, records);
        assert_eq!(store.create(fields("Next")).unwrap().id, "41");
    }

    #[test]
    fn rejected_create_does_not_consume_an_id() {
        let store = fixed_store();
        assert!(store.create(fields("x")).is_err());
        assert!(store.is_empty());
        assert_eq!(store.create(fields("Valid")).unwrap().id, "1");
    }
}
