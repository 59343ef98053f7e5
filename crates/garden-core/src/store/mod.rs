//! Plan storage: the single owner of all plans.
//!
//! [`PlanStore`] holds the current snapshot of plans in memory and writes the
//! whole set through a [`PlanBackend`] after every successful mutation. It
//! enforces the store-wide rule that a calendar day holds at most one plan.
//!
//! Mutations are staged on a copy of the snapshot and only swapped in once
//! the backend accepted the write, so callers never observe a change that was
//! not persisted.

use log::{debug, info, warn};

use crate::{
    date_key::DateKey,
    error::{GardenError, Result},
    models::{now_millis, Plan, PlanId, PlanState},
    params::UpdatePlan,
};

pub mod backend;
pub mod codec;
pub mod file;
pub mod memory;
pub mod sqlite;

pub use backend::PlanBackend;
pub use file::FileBackend;
pub use memory::MemoryBackend;
pub use sqlite::SqliteBackend;

/// Owns the plan set and its persistence.
pub struct PlanStore<B: PlanBackend> {
    backend: B,
    plans: Vec<Plan>,
}

impl<B: PlanBackend> PlanStore<B> {
    /// Opens a store over `backend` and loads whatever it holds.
    pub fn open(backend: B) -> Self {
        let mut store = Self {
            backend,
            plans: Vec::new(),
        };
        store.load();
        store
    }

    /// Replaces the snapshot with the backend's payload.
    ///
    /// Never fails: an unreadable or corrupt payload is logged and the store
    /// starts empty.
    pub fn load(&mut self) {
        self.plans = match self.read_plans() {
            Ok(plans) => {
                info!(
                    "Loaded {} plan(s) from {}",
                    plans.len(),
                    self.backend.describe()
                );
                plans
            }
            Err(e) => {
                warn!(
                    "Starting with an empty garden, could not load {}: {e}",
                    self.backend.describe()
                );
                Vec::new()
            }
        };
    }

    fn read_plans(&self) -> Result<Vec<Plan>> {
        match self.backend.read_all()? {
            Some(bytes) => codec::decode(&bytes),
            None => Ok(Vec::new()),
        }
    }

    /// Writes the full snapshot to the backend.
    ///
    /// # Errors
    ///
    /// Propagates backend and serialization errors.
    pub fn save(&self) -> Result<()> {
        Self::write(&self.backend, &self.plans)
    }

    fn write(backend: &B, plans: &[Plan]) -> Result<()> {
        let bytes = codec::encode(plans)?;
        backend.write_all(&bytes)
    }

    /// Persists `next` and makes it the current snapshot.
    fn commit(&mut self, next: Vec<Plan>) -> Result<()> {
        Self::write(&self.backend, &next)?;
        self.plans = next;
        Ok(())
    }

    /// Plants a seed on `date`.
    ///
    /// # Errors
    ///
    /// - `GardenError::AlreadyExists` if `date` already holds a plan
    /// - `GardenError::InvalidInput` if the title is empty after trimming
    /// - backend errors if the write fails
    ///
    /// The store is unchanged on any error.
    pub fn plant(&mut self, date: DateKey, title: &str, description: Option<&str>) -> Result<Plan> {
        let title = validate_title(title)?;

        if self.plan_on(date).is_some() {
            return Err(GardenError::AlreadyExists { date });
        }

        let plan = Plan::planted(date, title, normalize_description(description), now_millis());
        debug!("plant: {} on {}", plan.id, plan.date);

        let mut next = self.plans.clone();
        next.push(plan.clone());
        self.commit(next)?;
        Ok(plan)
    }

    /// Applies the provided fields of `changes` to the plan `id`.
    ///
    /// Completing stamps `completed_at` when it is unset; moving back to
    /// planted clears it. `planted_at` never changes.
    ///
    /// # Errors
    ///
    /// - `GardenError::PlanNotFound` if no plan has this ID
    /// - `GardenError::InvalidInput` if a provided title is empty after
    ///   trimming
    /// - backend errors if the write fails
    pub fn update(&mut self, id: &PlanId, changes: &UpdatePlan) -> Result<Plan> {
        let index = self.index_of(id)?;
        let title = changes.title.as_deref().map(validate_title).transpose()?;

        let mut next = self.plans.clone();
        let plan = &mut next[index];
        if let Some(title) = title {
            plan.title = title;
        }
        if let Some(description) = &changes.description {
            plan.description = normalize_description(Some(description));
        }
        if let Some(state) = changes.state {
            plan.transition_to(state, now_millis());
        }
        let updated = plan.clone();
        debug!("update: {} now {}", updated.id, updated.state.as_str());

        self.commit(next)?;
        Ok(updated)
    }

    /// Marks the plan as completed.
    ///
    /// # Errors
    ///
    /// Same as [`PlanStore::update`].
    pub fn complete(&mut self, id: &PlanId) -> Result<Plan> {
        self.update(id, &UpdatePlan::state(PlanState::Completed))
    }

    /// Removes the plan unconditionally.
    ///
    /// # Errors
    ///
    /// `GardenError::PlanNotFound` if no plan has this ID (including one that
    /// was already deleted); backend errors if the write fails.
    pub fn delete(&mut self, id: &PlanId) -> Result<()> {
        let index = self.index_of(id)?;
        debug!("delete: {id}");

        let mut next = self.plans.clone();
        next.remove(index);
        self.commit(next)
    }

    /// Plans whose date falls within `[start, end]`, in insertion order.
    pub fn plans_in_range(&self, start: DateKey, end: DateKey) -> Vec<Plan> {
        self.plans
            .iter()
            .filter(|plan| start <= plan.date && plan.date <= end)
            .cloned()
            .collect()
    }

    pub fn get(&self, id: &PlanId) -> Option<&Plan> {
        self.plans.iter().find(|plan| &plan.id == id)
    }

    /// The plan occupying `date`, if any.
    pub fn plan_on(&self, date: DateKey) -> Option<&Plan> {
        self.plans.iter().find(|plan| plan.date == date)
    }

    /// All plans in insertion order.
    pub fn plans(&self) -> &[Plan] {
        &self.plans
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn index_of(&self, id: &PlanId) -> Result<usize> {
        self.plans
            .iter()
            .position(|plan| &plan.id == id)
            .ok_or_else(|| GardenError::PlanNotFound { id: id.clone() })
    }
}

fn validate_title(title: &str) -> Result<String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(GardenError::invalid_input("title").with_reason("must not be empty"));
    }
    Ok(trimmed.to_string())
}

fn normalize_description(description: Option<&str>) -> Option<String> {
    description
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> DateKey {
        s.parse().unwrap()
    }

    fn memory_store() -> PlanStore<MemoryBackend> {
        PlanStore::open(MemoryBackend::new())
    }

    #[test]
    fn test_plant_trims_and_persists() {
        let mut store = memory_store();
        let plan = store
            .plant(date("2024-03-05"), "  Read  ", Some("  chapter 3 "))
            .unwrap();

        assert_eq!(plan.title, "Read");
        assert_eq!(plan.description.as_deref(), Some("chapter 3"));
        assert_eq!(plan.state, PlanState::Planted);
        assert!(plan.planted_at.is_some());
        assert!(plan.completed_at.is_none());
        assert!(store.backend().payload().is_some());
    }

    #[test]
    fn test_plant_on_occupied_date_fails_without_mutation() {
        let mut store = memory_store();
        store.plant(date("2024-03-05"), "Read", None).unwrap();
        let before = store.backend().payload();

        let err = store.plant(date("2024-03-05"), "Write", None).unwrap_err();
        assert!(matches!(err, GardenError::AlreadyExists { .. }));
        assert_eq!(store.len(), 1);
        assert_eq!(store.plans()[0].title, "Read");
        assert_eq!(store.backend().payload(), before);
    }

    #[test]
    fn test_plant_rejects_blank_title() {
        let mut store = memory_store();
        let err = store.plant(date("2024-03-05"), "   ", None).unwrap_err();
        assert!(matches!(err, GardenError::InvalidInput { ref field, .. } if field == "title"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_update_applies_only_provided_fields() {
        let mut store = memory_store();
        let plan = store
            .plant(date("2024-03-05"), "Read", Some("chapter 3"))
            .unwrap();

        let updated = store
            .update(
                &plan.id,
                &UpdatePlan {
                    title: Some(" Read more ".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.title, "Read more");
        assert_eq!(updated.description.as_deref(), Some("chapter 3"));
        assert_eq!(updated.state, PlanState::Planted);

        let cleared = store
            .update(
                &plan.id,
                &UpdatePlan {
                    description: Some(String::new()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(cleared.description, None);
    }

    #[test]
    fn test_update_blank_title_leaves_plan_untouched() {
        let mut store = memory_store();
        let plan = store.plant(date("2024-03-05"), "Read", None).unwrap();

        let err = store
            .update(
                &plan.id,
                &UpdatePlan {
                    title: Some(" ".to_string()),
                    state: Some(PlanState::Completed),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, GardenError::InvalidInput { .. }));
        assert_eq!(store.get(&plan.id), Some(&plan));
    }

    #[test]
    fn test_state_transition_symmetry() {
        let mut store = memory_store();
        let plan = store.plant(date("2024-03-05"), "Read", None).unwrap();

        let completed = store
            .update(&plan.id, &UpdatePlan::state(PlanState::Completed))
            .unwrap();
        assert!(completed.completed_at.is_some());
        assert_eq!(completed.planted_at, plan.planted_at);

        let reopened = store
            .update(&plan.id, &UpdatePlan::state(PlanState::Planted))
            .unwrap();
        assert_eq!(reopened.completed_at, None);
        assert_eq!(reopened.planted_at, plan.planted_at);
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let mut store = memory_store();
        let ghost = PlanId::from("ghost");
        assert!(matches!(
            store.update(&ghost, &UpdatePlan::default()),
            Err(GardenError::PlanNotFound { .. })
        ));
        assert!(matches!(
            store.complete(&ghost),
            Err(GardenError::PlanNotFound { .. })
        ));
    }

    #[test]
    fn test_deleting_deleted_plan_is_not_found() {
        let mut store = memory_store();
        let keep = store.plant(date("2024-03-04"), "Keep", None).unwrap();
        let gone = store.plant(date("2024-03-05"), "Gone", None).unwrap();

        store.delete(&gone.id).unwrap();
        for _ in 0..2 {
            assert!(matches!(
                store.delete(&gone.id),
                Err(GardenError::PlanNotFound { .. })
            ));
        }
        assert_eq!(store.plans(), &[keep]);
    }

    #[test]
    fn test_date_reusable_after_delete() {
        let mut store = memory_store();
        let first = store.plant(date("2024-03-05"), "Read", None).unwrap();
        store.delete(&first.id).unwrap();

        let second = store.plant(date("2024-03-05"), "Read again", None).unwrap();
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_plans_in_range_is_inclusive() {
        let mut store = memory_store();
        for day in ["2024-02-29", "2024-03-01", "2024-03-15", "2024-03-31", "2024-04-01"] {
            store.plant(date(day), day, None).unwrap();
        }

        let march = store.plans_in_range(date("2024-03-01"), date("2024-03-31"));
        let days: Vec<String> = march.iter().map(|p| p.date.to_string()).collect();
        assert_eq!(days, ["2024-03-01", "2024-03-15", "2024-03-31"]);

        assert!(store
            .plans_in_range(date("2024-03-31"), date("2024-03-01"))
            .is_empty());
    }

    #[test]
    fn test_failed_write_keeps_previous_snapshot() {
        let mut store = memory_store();
        let plan = store.plant(date("2024-03-05"), "Read", None).unwrap();
        store.backend().set_simulate_write_error(true);

        assert!(store.plant(date("2024-03-06"), "Write", None).is_err());
        assert!(store.complete(&plan.id).is_err());
        assert!(store.delete(&plan.id).is_err());
        assert_eq!(store.plans(), &[plan]);
    }

    #[test]
    fn test_corrupt_payload_loads_empty() {
        let store = PlanStore::open(MemoryBackend::with_payload("{not json"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_reload_round_trips_snapshot() {
        let mut store = memory_store();
        let a = store.plant(date("2024-03-05"), "Read", Some("ch. 3")).unwrap();
        store.plant(date("2024-03-06"), "Walk", None).unwrap();
        store.complete(&a.id).unwrap();
        let before = store.plans().to_vec();

        store.load();
        assert_eq!(store.plans(), before.as_slice());
    }
}
