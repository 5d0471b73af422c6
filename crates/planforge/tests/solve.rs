//! End-to-end solving through the public API.

use std::thread;
use std::time::Duration;

use planforge::prelude::*;
use planforge::{
    ConstructionHeuristicType, EnvironmentMode, LocalSearchType, MoveSelectorType,
    ScoreDirectorType,
};

#[derive(Clone, Debug)]
struct Talk {
    room: [BasicVariable<i64>; 1],
    pinned: bool,
}

impl PlanningEntity for Talk {
    type Variable = BasicVariable<i64>;

    fn variables(&self) -> &[Self::Variable] {
        &self.room
    }

    fn variables_mut(&mut self) -> &mut [Self::Variable] {
        &mut self.room
    }

    fn is_pinned(&self) -> bool {
        self.pinned
    }
}

#[derive(Clone, Debug)]
struct Schedule {
    talks: Vec<Talk>,
    /// Rooms that cost a soft point when used.
    expensive_rooms: Vec<i64>,
    score: Option<HardSoftScore>,
}

impl PlanningSolution for Schedule {
    type Score = HardSoftScore;
    type Entity = Talk;
    type ProblemFacts = Vec<i64>;

    fn score(&self) -> Option<Self::Score> {
        self.score
    }

    fn set_score(&mut self, score: Option<Self::Score>) {
        self.score = score;
    }

    fn entities(&self) -> &[Talk] {
        &self.talks
    }

    fn entities_mut(&mut self) -> &mut Vec<Talk> {
        &mut self.talks
    }

    fn problem_facts(&self) -> &Vec<i64> {
        &self.expensive_rooms
    }

    fn set_problem_facts(&mut self, facts: Vec<i64>) {
        self.expensive_rooms = facts;
    }
}

fn room(schedule: &Schedule, talk: usize) -> Option<i64> {
    schedule
        .talks
        .get(talk)
        .and_then(|t| t.room[0].value().copied())
}

fn schedule(talk_count: usize, rooms: Vec<i64>, expensive_rooms: Vec<i64>) -> Schedule {
    let talks = (0..talk_count)
        .map(|_| Talk {
            room: [BasicVariable::new("room", ListValueRange::new(rooms.clone()))],
            pinned: false,
        })
        .collect();
    Schedule {
        talks,
        expensive_rooms,
        score: None,
    }
}

/// A hard conflict per pair of talks sharing a room, a soft point per talk
/// in an expensive room.
fn constraints(talk_count: usize) -> ConstraintSet<Schedule> {
    let mut constraints = ConstraintSet::new();
    for a in 0..talk_count {
        for b in (a + 1)..talk_count {
            constraints.add(
                Constraint::hard(format!("Room conflict {}-{}", a, b), -1, move |s: &Schedule| {
                    matches!((room(s, a), room(s, b)), (Some(x), Some(y)) if x == y)
                })
                .watching(move |var: planforge::VariableRef| var.entity == a || var.entity == b),
            );
        }
        constraints.add(
            Constraint::soft(format!("Expensive room {}", a), -1, move |s: &Schedule| {
                room(s, a).is_some_and(|r| s.expensive_rooms.contains(&r))
            })
            .watching(move |var: planforge::VariableRef| var.entity == a),
        );
    }
    constraints
}

fn rooms(schedule: &Schedule) -> Vec<Option<i64>> {
    (0..schedule.talks.len()).map(|t| room(schedule, t)).collect()
}

fn config(termination: TerminationConfig) -> SolverConfig {
    SolverConfig::default()
        .with_random_seed(5)
        .with_time_limit_seconds(30)
        .with_termination(termination)
}

#[test]
fn test_two_entities_first_fit_is_feasible() {
    let config = config(TerminationConfig::none().with_step_count_limit(10))
        .with_construction_heuristic(ConstructionHeuristicType::FirstFit);
    let mut solver = Solver::new(config, constraints(2)).unwrap();

    let solution = solver.solve(schedule(2, vec![1, 2, 3], vec![])).unwrap();

    let score = solution.score.unwrap();
    assert_eq!(score.hard(), 0);
    assert!(solution.is_initialized());
    let assigned = rooms(&solution);
    assert_ne!(assigned[0], assigned[1]);
}

#[test]
fn test_local_search_avoids_expensive_rooms() {
    // Construction fills rooms 1, 2, 3; local search has to move talk 0 off
    // expensive room 1 into room 4.
    let config = config(TerminationConfig::none().with_step_count_limit(200))
        .with_construction_heuristic(ConstructionHeuristicType::FirstFit)
        .with_move_selector(MoveSelectorType::Change)
        .with_local_search(LocalSearchConfig::of_type(LocalSearchType::HillClimbing));
    let mut solver = Solver::new(config, constraints(3)).unwrap();

    let solution = solver.solve(schedule(3, vec![1, 2, 3, 4], vec![1])).unwrap();

    assert_eq!(solution.score, Some(HardSoftScore::ZERO));
    assert!(!rooms(&solution).contains(&Some(1)));
}

#[test]
fn test_step_count_limit() {
    let config = config(TerminationConfig::none().with_step_count_limit(10))
        .with_move_selector(MoveSelectorType::BestFit);
    let mut solver = Solver::new(config, constraints(4)).unwrap();

    solver.solve(schedule(4, (1..=6).collect(), vec![2, 5])).unwrap();

    let stats = solver.stats().unwrap();
    assert!(stats.step_count <= 10);
    assert!(stats.acceptance_rate() <= 1.0);
}

#[test]
fn test_every_local_search_type_passes_full_assert() {
    for search_type in [
        LocalSearchType::SimulatedAnnealing,
        LocalSearchType::TabuSearch,
        LocalSearchType::LateAcceptance,
        LocalSearchType::HillClimbing,
    ] {
        for selector in [
            MoveSelectorType::FirstFit,
            MoveSelectorType::BestFit,
            MoveSelectorType::Random,
            MoveSelectorType::Chained,
            MoveSelectorType::Change,
        ] {
            let config = config(TerminationConfig::none().with_step_count_limit(25))
                .with_environment_mode(EnvironmentMode::FullAssert)
                .with_score_director(ScoreDirectorType::Incremental)
                .with_move_selector(selector)
                .with_local_search(LocalSearchConfig::of_type(search_type));
            let mut solver = Solver::new(config, constraints(5)).unwrap();

            let result = solver.solve(schedule(5, (1..=7).collect(), vec![3, 6]));

            let solution =
                result.unwrap_or_else(|e| panic!("{:?}/{:?}: {}", search_type, selector, e));
            assert!(solution.score.unwrap().is_feasible(), "{:?}/{:?}", search_type, selector);
        }
    }
}

#[test]
fn test_pinned_talk_keeps_its_room() {
    let mut problem = schedule(3, vec![1, 2, 3], vec![1]);
    problem.talks[0].room[0].set_value(Some(1));
    problem.talks[0].pinned = true;

    let config = config(TerminationConfig::none().with_step_count_limit(50))
        .with_move_selector(MoveSelectorType::Change);
    let mut solver = Solver::new(config, constraints(3)).unwrap();

    let solution = solver.solve(problem).unwrap();

    assert_eq!(room(&solution, 0), Some(1));
    assert_eq!(solution.score.unwrap().hard(), 0);
}

#[test]
fn test_stop_from_another_thread() {
    let config = config(TerminationConfig::none()).with_move_selector(MoveSelectorType::BestFit);
    let mut solver = Solver::new(config, constraints(6)).unwrap();
    let handle = solver.handle();

    let stopper = thread::spawn(move || {
        thread::sleep(Duration::from_millis(50));
        handle.stop();
    });
    let solution = solver.solve(schedule(6, (1..=10).collect(), vec![1, 2])).unwrap();
    stopper.join().unwrap();

    assert!(solver.is_terminated());
    assert!(solution.score.unwrap().is_feasible());
}

#[test]
fn test_best_solution_stream() {
    let config = config(TerminationConfig::none().with_step_count_limit(100))
        .with_move_selector(MoveSelectorType::Change)
        .with_local_search(LocalSearchConfig::of_type(LocalSearchType::HillClimbing));
    let mut solver = Solver::new(config, constraints(3)).unwrap();
    let mut receiver: planforge::BestSolutionReceiver<Schedule> = solver.subscribe();

    let solution = solver.solve(schedule(3, vec![1, 2, 3, 4], vec![1, 2])).unwrap();

    let mut last = None;
    while let Ok((best, score)) = receiver.try_recv() {
        if let Some(previous) = last {
            assert!(score > previous);
        }
        assert_eq!(best.score, Some(score));
        last = Some(score);
    }
    assert_eq!(last, solution.score);
}

#[test]
fn test_yaml_config_end_to_end() {
    let yaml = r#"
environment_mode: reproducible
construction_heuristic: first_fit
move_selector: random
local_search:
  type: tabu_search
  tabu_min_size: 2
  tabu_max_size: 4
termination:
  step_count_limit: 30
  best_score_limit: "0hard/0soft"
"#;
    let config = SolverConfig::from_yaml_str(yaml).unwrap();
    let mut solver = Solver::new(config, constraints(4)).unwrap();

    let solution = solver.solve(schedule(4, (1..=5).collect(), vec![])).unwrap();

    assert_eq!(solution.score, Some(HardSoftScore::ZERO));
}

#[test]
fn test_run_solver_with_config_reports_bad_config() {
    let config = SolverConfig::default()
        .with_termination(TerminationConfig::none().with_best_score_limit("0hard/nope"));

    let result = run_solver_with_config(schedule(2, vec![1, 2], vec![]), constraints(2), config);

    assert!(matches!(result, Err(planforge::SolveError::Config(_))));
}

#[test]
fn test_explain_final_solution() {
    let config = config(TerminationConfig::none().with_step_count_limit(20))
        .with_construction_heuristic(ConstructionHeuristicType::FirstFit)
        .with_local_search(LocalSearchConfig::disabled());
    let explained = constraints(2);
    let solution = run_solver_with_config(
        schedule(2, vec![1, 2], vec![2]),
        constraints(2),
        config,
    )
    .unwrap();

    let matched: Vec<String> = explained
        .explain(&solution)
        .into_iter()
        .filter(|m| m.matched)
        .map(|m| m.name)
        .collect();
    assert_eq!(matched, vec!["Expensive room 1".to_string()]);
    assert_eq!(solution.score, Some(HardSoftScore::of_soft(-1)));
}
