//! End-to-end runs on the bundled SLA catalog.

use u_timetable::error::TimetableError;
use u_timetable::fitness::FitnessEvaluator;
use u_timetable::ga::{GaConfig, GaRunner, NoopObserver, StopReason, TimetableProblem};
use u_timetable::models::Catalog;
use u_timetable::validation::validate_schedule;

fn sla_catalog() -> Catalog {
    Catalog::from_json(include_str!("../data/sla_catalog.json")).unwrap()
}

fn quick_config() -> GaConfig {
    GaConfig::default()
        .with_population_size(60)
        .with_min_generations(10)
        .with_max_generations(40)
        .with_seed(42)
}

#[test]
fn test_sla_catalog_loads() {
    let catalog = sla_catalog();
    assert_eq!(catalog.activities.len(), 11);
    assert_eq!(catalog.rooms.len(), 9);
    assert_eq!(catalog.time_slots.len(), 6);
    assert_eq!(catalog.facilitators.len(), 10);
}

#[test]
fn test_run_respects_generation_bounds() {
    let catalog = sla_catalog();
    let problem = TimetableProblem::new(&catalog).unwrap();
    let config = quick_config();

    let result = GaRunner::run(&problem, &config).unwrap();
    assert!(result.generations >= config.min_generations);
    assert!(result.generations <= config.max_generations);
    assert_eq!(result.history.len(), result.generations);
    if result.stop_reason == StopReason::MaxGenerationsReached {
        assert_eq!(result.generations, config.max_generations);
    }
}

#[test]
fn test_best_is_max_of_final_population() {
    let catalog = sla_catalog();
    let problem = TimetableProblem::new(&catalog).unwrap();

    let result = GaRunner::run_with_observer(&problem, &quick_config(), &mut NoopObserver).unwrap();
    let last = result.history.last().unwrap();
    assert_eq!(result.best_fitness, last.best);
    assert!(validate_schedule(&catalog, &result.best_schedule).is_ok());

    let evaluator = FitnessEvaluator::new(&catalog);
    assert_eq!(evaluator.evaluate(&result.best_schedule), result.best_fitness);
}

#[test]
fn test_same_seed_is_reproducible() {
    let catalog = sla_catalog();
    let problem = TimetableProblem::new(&catalog).unwrap();
    let config = quick_config();

    let a = GaRunner::run_with_observer(&problem, &config, &mut NoopObserver).unwrap();
    let b = GaRunner::run_with_observer(&problem, &config, &mut NoopObserver).unwrap();

    assert_eq!(a.best_fitness.to_bits(), b.best_fitness.to_bits());
    assert_eq!(a.stop_reason, b.stop_reason);
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn test_parallel_and_sequential_agree() {
    let catalog = sla_catalog();
    let problem = TimetableProblem::new(&catalog).unwrap();
    let config = quick_config();

    let parallel = config.clone().with_parallel(true);
    let sequential = config.with_parallel(false);

    let par = GaRunner::run_with_observer(&problem, &parallel, &mut NoopObserver).unwrap();
    let seq = GaRunner::run_with_observer(&problem, &sequential, &mut NoopObserver).unwrap();
    assert_eq!(
        serde_json::to_string(&par).unwrap(),
        serde_json::to_string(&seq).unwrap()
    );
}

#[test]
fn test_evolution_beats_initial_average() {
    let catalog = sla_catalog();
    let problem = TimetableProblem::new(&catalog).unwrap();
    let config = quick_config()
        .with_population_size(100)
        .with_improvement_threshold(0.0)
        .with_max_generations(30);

    let result = GaRunner::run_with_observer(&problem, &config, &mut NoopObserver).unwrap();
    let first = &result.history[0];
    let last = result.history.last().unwrap();
    assert!(last.avg > first.avg);
}

#[test]
fn test_config_from_json() {
    let config: GaConfig = serde_json::from_str(
        r#"{"population_size": 40, "max_generations": 15, "min_generations": 5, "parallel": false}"#,
    )
    .unwrap();
    let catalog = sla_catalog();
    let problem = TimetableProblem::new(&catalog).unwrap();

    let result = GaRunner::run_with_observer(&problem, &config, &mut NoopObserver).unwrap();
    assert!(result.generations <= 15);
}

#[test]
fn test_invalid_catalog_json_reports_issues() {
    let json = r#"{
        "activities": [{"id": "A", "enrollment": 0}],
        "rooms": [{"id": "R", "capacity": 10}],
        "time_slots": ["9 AM", "9 AM"],
        "facilitators": ["Ann"]
    }"#;
    match Catalog::from_json(json) {
        Err(TimetableError::InvalidCatalog(issues)) => assert_eq!(issues.len(), 2),
        other => panic!("expected InvalidCatalog, got {other:?}"),
    }
}

#[test]
fn test_malformed_json_is_json_error() {
    assert!(matches!(
        Catalog::from_json("{not json"),
        Err(TimetableError::Json(_))
    ));
}
