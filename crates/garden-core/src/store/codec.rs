//! Encoding of the plan set to and from the stored payload.

use std::collections::HashSet;

use log::warn;

use crate::{
    error::{GardenError, Result},
    models::{Plan, PlanRecord},
};

/// Serializes plans, in order, as a JSON array of records.
pub fn encode(plans: &[Plan]) -> Result<Vec<u8>> {
    let records: Vec<PlanRecord> = plans.iter().map(PlanRecord::from).collect();
    Ok(serde_json::to_vec_pretty(&records)?)
}

/// Decodes a payload produced by [`encode`] (or by an older writer).
///
/// Records with unreadable dates are skipped. When two records share a date
/// or an ID, the first one wins so the one-plan-per-day rule holds after
/// loading.
///
/// # Errors
///
/// Returns `GardenError::PersistenceCorrupt` if the payload is not a JSON
/// array of records.
pub fn decode(bytes: &[u8]) -> Result<Vec<Plan>> {
    let records: Vec<PlanRecord> =
        serde_json::from_slice(bytes).map_err(|e| GardenError::PersistenceCorrupt {
            message: e.to_string(),
        })?;

    let mut seen_dates = HashSet::new();
    let mut seen_ids = HashSet::new();
    let mut plans = Vec::with_capacity(records.len());

    for plan in records.into_iter().filter_map(PlanRecord::into_plan) {
        if seen_dates.contains(&plan.date) {
            warn!("Dropping plan {}: {} already has a plan", plan.id, plan.date);
            continue;
        }
        if seen_ids.contains(&plan.id) {
            warn!("Dropping plan on {}: duplicate ID {}", plan.date, plan.id);
            continue;
        }
        seen_dates.insert(plan.date);
        seen_ids.insert(plan.id.clone());
        plans.push(plan);
    }

    Ok(plans)
}
