//! Plan operations for the Garden.

use log::debug;

use super::Garden;
use crate::{
    error::{GardenError, Result},
    models::{Plan, PlanId, PlanState},
    params::{DateRange, Id, PlanRef, PlantSeed, UpdatePlan},
};

impl Garden {
    /// Plants a seed on the given day.
    ///
    /// # Errors
    ///
    /// `GardenError::AlreadyExists` if the day is taken,
    /// `GardenError::InvalidInput` for a blank title, backend errors if the
    /// write fails.
    pub fn plant_seed(&mut self, params: &PlantSeed) -> Result<Plan> {
        self.store
            .plant(params.date, &params.title, params.description.as_deref())
    }

    /// Applies a partial update to a plan.
    ///
    /// # Errors
    ///
    /// `GardenError::PlanNotFound` for an unknown ID,
    /// `GardenError::InvalidInput` for a blank title, backend errors if the
    /// write fails.
    pub fn update_plan(&mut self, params: &Id, changes: &UpdatePlan) -> Result<Plan> {
        self.store.update(&params.id, changes)
    }

    /// Marks a plan as bloomed.
    ///
    /// # Errors
    ///
    /// Same as [`Garden::update_plan`].
    pub fn complete_plan(&mut self, params: &Id) -> Result<Plan> {
        self.store.complete(&params.id)
    }

    /// Moves a bloomed plan back to planted, clearing its completion time.
    ///
    /// # Errors
    ///
    /// Same as [`Garden::update_plan`].
    pub fn reopen_plan(&mut self, params: &Id) -> Result<Plan> {
        self.store
            .update(&params.id, &UpdatePlan::state(PlanState::Planted))
    }

    /// Deletes a plan and returns what was removed.
    ///
    /// # Errors
    ///
    /// `GardenError::PlanNotFound` for an unknown ID, backend errors if the
    /// write fails.
    pub fn delete_plan(&mut self, params: &Id) -> Result<Plan> {
        let plan = self
            .store
            .get(&params.id)
            .cloned()
            .ok_or_else(|| GardenError::PlanNotFound {
                id: params.id.clone(),
            })?;
        self.store.delete(&params.id)?;
        Ok(plan)
    }

    pub fn get_plan(&self, id: &PlanId) -> Option<&Plan> {
        self.store.get(id)
    }

    /// Looks a plan up by ID or by date.
    pub fn find_plan(&self, plan: &PlanRef) -> Option<&Plan> {
        match plan {
            PlanRef::Id(id) => self.store.get(id),
            PlanRef::Date(date) => self.store.plan_on(*date),
        }
    }

    /// Resolves a reference to the ID of an existing plan.
    ///
    /// # Errors
    ///
    /// `GardenError::PlanNotFound` or `GardenError::NoPlanOnDate` when
    /// nothing matches.
    pub fn resolve(&self, plan: &PlanRef) -> Result<Id> {
        debug!("resolve: {plan:?}");
        self.find_plan(plan)
            .map(|found| Id {
                id: found.id.clone(),
            })
            .ok_or_else(|| match plan {
                PlanRef::Id(id) => GardenError::PlanNotFound { id: id.clone() },
                PlanRef::Date(date) => GardenError::NoPlanOnDate { date: *date },
            })
    }

    /// Plans dated within the inclusive range, in insertion order.
    pub fn plans_in_range(&self, range: &DateRange) -> Vec<Plan> {
        self.store.plans_in_range(range.start, range.end)
    }

    /// All plans in insertion order.
    pub fn plans(&self) -> &[Plan] {
        self.store.plans()
    }
}
