use crate::{choose_action, AutoAction, AutoplayConfig, AutoplayError, AutoplayResult, RunStatus, StepRecord};
use cursed_core::{Engine, RunError, RunSnapshot, SkipReturn};
use tracing::debug;

/// Starts a run on `engine` and plays it greedily until it ends or the step
/// budget runs out.
pub fn run_autoplay(
    engine: &mut Engine,
    config: &AutoplayConfig,
) -> Result<AutoplayResult, AutoplayError> {
    engine.start_run(config.seed);
    // Skipping back onto the draw end deals the same room again.
    let allow_skip = engine.config().skip_return == SkipReturn::Bottom;
    let mut steps = Vec::new();

    for step in 0..config.max_steps {
        let before = current(engine)?;
        if before.run_over {
            return Ok(finish(&before, steps));
        }
        let action = choose_action(&before, config, allow_skip);
        let card = match action {
            AutoAction::Play { index } => Some(engine.play_card(index)?.card.label()),
            AutoAction::Skip => {
                engine.try_skip_room()?;
                None
            }
        };
        let after = current(engine)?;
        debug!(step, action = %action.short_label(), hp = after.hp, "autoplay step");
        steps.push(StepRecord {
            step,
            action,
            card,
            hp_before: before.hp,
            hp_after: after.hp,
            score_after: after.score,
            deck_after: after.deck_count,
        });
    }

    let last = current(engine)?;
    Ok(finish(&last, steps))
}

fn current(engine: &Engine) -> Result<RunSnapshot, AutoplayError> {
    engine.snapshot().ok_or(AutoplayError::Run(RunError::NoRun))
}

fn finish(snapshot: &RunSnapshot, steps: Vec<StepRecord>) -> AutoplayResult {
    let status = match snapshot.victory {
        Some(true) => RunStatus::Victory,
        Some(false) => RunStatus::Defeat,
        None => RunStatus::MaxSteps,
    };
    AutoplayResult {
        seed: snapshot.seed,
        status,
        final_hp: snapshot.hp,
        final_score: snapshot.score,
        steps,
    }
}
