use cursed_autoplay::{run_autoplay, write_json, AutoAction, AutoplayConfig, AutoplayResult, RunStatus};
use cursed_core::{Engine, Event, RulesConfig, SkipReturn};

fn play(seed: u32, rules: RulesConfig) -> AutoplayResult {
    let mut engine = Engine::new(rules).expect("valid rules");
    let config = AutoplayConfig {
        seed: Some(seed),
        ..AutoplayConfig::default()
    };
    run_autoplay(&mut engine, &config).expect("autoplay")
}

macro_rules! finishes_case {
    ($name:ident, $seed:expr) => {
        #[test]
        fn $name() {
            let result = play($seed, RulesConfig::default());
            assert_ne!(result.status, RunStatus::MaxSteps);
            assert_eq!(result.seed, $seed);
            assert!(result.final_hp >= 0 && result.final_hp <= 20);
            match result.status {
                RunStatus::Victory => assert!(result.final_hp > 0),
                RunStatus::Defeat => assert_eq!(result.final_hp, 0),
                RunStatus::MaxSteps => unreachable!(),
            }
        }
    };
}

finishes_case!(finishes_seed_1, 1);
finishes_case!(finishes_seed_2, 2);
finishes_case!(finishes_seed_7, 7);
finishes_case!(finishes_seed_42, 42);
finishes_case!(finishes_seed_1000, 1000);
finishes_case!(finishes_seed_max, u32::MAX);

#[test]
fn same_seed_same_trace() {
    assert_eq!(
        play(99, RulesConfig::default()),
        play(99, RulesConfig::default())
    );
}

#[test]
fn trace_hp_chains_step_to_step() {
    let result = play(5, RulesConfig::default());
    for pair in result.steps.windows(2) {
        assert_eq!(pair[0].hp_after, pair[1].hp_before);
    }
    if let Some(last) = result.steps.last() {
        assert_eq!(last.hp_after, result.final_hp);
        assert_eq!(last.score_after, result.final_score);
    }
}

#[test]
fn draw_end_rules_never_skip() {
    for seed in 1..20 {
        let result = play(seed, RulesConfig::default());
        assert!(result.steps.iter().all(|step| step.action != AutoAction::Skip));
    }
}

#[test]
fn bottom_rules_allow_skips() {
    let rules = RulesConfig {
        skip_return: SkipReturn::Bottom,
        ..RulesConfig::default()
    };
    for seed in 1..40 {
        let result = play(seed, rules.clone());
        assert_ne!(result.status, RunStatus::MaxSteps);
        let mut previous_skip = false;
        for step in &result.steps {
            let is_skip = step.action == AutoAction::Skip;
            assert!(!(is_skip && previous_skip), "two skips in a row");
            if is_skip {
                assert_eq!(step.card, None);
            }
            previous_skip = is_skip;
        }
    }
}

#[test]
fn step_budget_stops_the_run() {
    let mut engine = Engine::default();
    let config = AutoplayConfig {
        seed: Some(3),
        max_steps: 1,
        skip_when_damage_at_least: None,
    };
    let result = run_autoplay(&mut engine, &config).expect("autoplay");
    assert_eq!(result.status, RunStatus::MaxSteps);
    assert_eq!(result.steps.len(), 1);
}

#[test]
fn trace_writes_as_json() {
    let result = play(8, RulesConfig::default());
    let path = std::env::temp_dir()
        .join(format!("cursed-autoplay-{}", std::process::id()))
        .join("trace.json");
    write_json(&path, &result).expect("write trace");
    let raw = std::fs::read_to_string(&path).expect("read trace");
    let parsed: AutoplayResult = serde_json::from_str(&raw).expect("parse trace");
    assert_eq!(parsed, result);
}

#[test]
fn reused_engine_only_holds_the_latest_runs_events() {
    let mut engine = Engine::default();
    let config = AutoplayConfig {
        seed: Some(9),
        ..AutoplayConfig::default()
    };
    run_autoplay(&mut engine, &config).expect("first run");
    run_autoplay(&mut engine, &config).expect("second run");
    let starts = engine
        .drain_events()
        .into_iter()
        .filter(|event| matches!(event, Event::RunStarted { .. }))
        .count();
    assert_eq!(starts, 1);
}
