//! Tests for the garden module.

use super::*;
use crate::{
    calendar::{Intensity, MonthCell, YearMonth},
    date_key::DateKey,
    error::GardenError,
    models::PlanState,
    params::{DateRange, Id, PlanRef, PlantSeed, UpdatePlan},
    stats::MonthBloom,
};

/// Helper function to create an in-memory garden
fn create_test_garden() -> Garden {
    GardenBuilder::new()
        .backend(BackendKind::Memory)
        .build()
        .expect("Failed to create garden")
}

fn date(s: &str) -> DateKey {
    s.parse().expect("valid date")
}

fn seed(day: &str, title: &str) -> PlantSeed {
    PlantSeed {
        date: date(day),
        title: title.to_string(),
        description: None,
    }
}

#[test]
fn test_plant_complete_and_query_scenario() {
    let mut garden = create_test_garden();

    let plan = garden
        .plant_seed(&seed("2024-03-05", "Read"))
        .expect("Failed to plant seed");

    let err = garden.plant_seed(&seed("2024-03-05", "Read")).unwrap_err();
    assert!(matches!(err, GardenError::AlreadyExists { date: d } if d == date("2024-03-05")));

    let completed = garden
        .complete_plan(&Id {
            id: plan.id.clone(),
        })
        .expect("Failed to complete plan");
    assert_eq!(completed.state, PlanState::Completed);
    assert!(completed.completed_at.is_some());

    let march = garden.plans_in_range(&DateRange {
        start: date("2024-03-01"),
        end: date("2024-03-31"),
    });
    assert_eq!(march, vec![completed]);
}

#[test]
fn test_reopen_clears_completion() {
    let mut garden = create_test_garden();
    let plan = garden.plant_seed(&seed("2024-03-05", "Read")).unwrap();
    let id = Id { id: plan.id };

    garden.complete_plan(&id).unwrap();
    let reopened = garden.reopen_plan(&id).unwrap();
    assert_eq!(reopened.state, PlanState::Planted);
    assert!(reopened.completed_at.is_none());
    assert_eq!(reopened.planted_at, plan.planted_at);
}

#[test]
fn test_update_plan_changes_title_and_state() {
    let mut garden = create_test_garden();
    let plan = garden.plant_seed(&seed("2024-03-05", "Read")).unwrap();

    let updated = garden
        .update_plan(
            &Id { id: plan.id },
            &UpdatePlan {
                title: Some("Read two chapters".to_string()),
                description: Some("before bed".to_string()),
                state: Some(PlanState::Completed),
            },
        )
        .unwrap();
    assert_eq!(updated.title, "Read two chapters");
    assert_eq!(updated.description.as_deref(), Some("before bed"));
    assert!(updated.is_completed());
}

#[test]
fn test_delete_returns_removed_plan() {
    let mut garden = create_test_garden();
    let plan = garden.plant_seed(&seed("2024-03-05", "Read")).unwrap();
    let id = Id {
        id: plan.id.clone(),
    };

    let removed = garden.delete_plan(&id).unwrap();
    assert_eq!(removed, plan);
    assert!(garden.plans().is_empty());
    assert!(matches!(
        garden.delete_plan(&id),
        Err(GardenError::PlanNotFound { .. })
    ));
}

#[test]
fn test_find_and_resolve_by_id_or_date() {
    let mut garden = create_test_garden();
    let plan = garden.plant_seed(&seed("2024-03-05", "Read")).unwrap();

    let by_date = PlanRef::Date(date("2024-03-05"));
    let by_id = PlanRef::Id(plan.id.clone());
    assert_eq!(garden.find_plan(&by_date), Some(&plan));
    assert_eq!(garden.find_plan(&by_id), Some(&plan));
    assert_eq!(garden.resolve(&by_date).unwrap().id, plan.id);

    assert!(matches!(
        garden.resolve(&PlanRef::Date(date("2024-03-06"))),
        Err(GardenError::NoPlanOnDate { .. })
    ));
    assert!(matches!(
        garden.resolve(&"missing".parse().unwrap()),
        Err(GardenError::PlanNotFound { .. })
    ));
}

#[test]
fn test_month_view_combines_grid_and_stats() {
    let mut garden = create_test_garden();
    let a = garden.plant_seed(&seed("2024-02-01", "Stretch")).unwrap();
    garden.plant_seed(&seed("2024-02-29", "Leap")).unwrap();
    garden.plant_seed(&seed("2024-03-01", "Next month")).unwrap();
    garden.complete_plan(&Id { id: a.id }).unwrap();

    let view = garden.month_view(YearMonth::new(2024, 2).unwrap(), Some(date("2024-02-29")));
    assert_eq!(view.grid.cells.len(), 4 + 29);
    assert_eq!(view.stats.count, 2);
    assert_eq!(view.stats.completed_count, 1);
    assert_eq!(view.stats.completion_percent(), 3);
    assert!(view.grid.is_current_month);

    let last = view.grid.cells.last().unwrap();
    assert!(matches!(
        last,
        MonthCell::Day { day: 29, is_today: true, plan: Some(p), .. } if p.title == "Leap"
    ));
}

#[test]
fn test_year_view_combines_heatmap_and_overview() {
    let mut garden = create_test_garden();
    for day in 1..=25 {
        let plan = garden
            .plant_seed(&seed(&format!("2024-04-{day:02}"), "Run"))
            .unwrap();
        garden.complete_plan(&Id { id: plan.id }).unwrap();
    }
    garden.plant_seed(&seed("2024-05-01", "Swim")).unwrap();

    let view = garden.year_view(2024, None).unwrap();
    assert_eq!(view.overview.months[3].bloom, MonthBloom::Bloomed);
    assert_eq!(view.overview.months[4].bloom, MonthBloom::Planted);
    assert_eq!(view.overview.totals.count, 26);
    assert_eq!(
        view.heatmap
            .days()
            .filter(|cell| cell.intensity == Intensity::Completed)
            .count(),
        25
    );
    assert!(garden.year_view(10_000, None).is_err());
}

#[test]
fn test_stats_over_range() {
    let mut garden = create_test_garden();
    let plan = garden.plant_seed(&seed("2024-03-05", "Read")).unwrap();
    garden.complete_plan(&Id { id: plan.id }).unwrap();

    let range = DateRange {
        start: date("2024-03-01"),
        end: date("2024-03-31"),
    };
    let stats = garden.stats(&range, 31);
    assert_eq!(stats.completed_count, 1);
    assert_eq!(garden.stats(&range, 0).completion_rate, 0.0);
}
