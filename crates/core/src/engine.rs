use crate::{
    ConfigError, Deck, Event, EventBus, PlayResult, RngState, RulesConfig, RunError, RunSnapshot,
    RunState,
};

/// Command surface for a presentation layer. Owns the current run outright;
/// callers only ever see snapshots, results and drained events.
#[derive(Debug, Default)]
pub struct Engine {
    config: RulesConfig,
    run: Option<RunState>,
    last_seed: Option<u32>,
    events: EventBus,
}

impl Engine {
    /// Fails when `config` could not produce a playable run.
    pub fn new(config: RulesConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            run: None,
            last_seed: None,
            events: EventBus::default(),
        })
    }

    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// Discards any current run and starts another. Without a seed one is
    /// drawn from entropy and recorded, so the run can still be replayed.
    pub fn start_run(&mut self, seed: Option<u32>) -> RunSnapshot {
        let seed = seed.unwrap_or_else(RngState::fresh_seed);
        self.events.clear();
        let run = RunState::start(self.config.clone(), seed, &mut self.events);
        self.install(run)
    }

    /// Starts a run on a pre-ordered deck, top card first.
    pub fn start_with_deck(&mut self, seed: u32, deck: Deck) -> RunSnapshot {
        self.events.clear();
        let run = RunState::with_deck(self.config.clone(), seed, deck, &mut self.events);
        self.install(run)
    }

    pub fn restart_with_same_seed(&mut self) -> RunSnapshot {
        self.start_run(self.last_seed)
    }

    fn install(&mut self, run: RunState) -> RunSnapshot {
        self.last_seed = Some(run.seed());
        let snapshot = run.snapshot();
        self.run = Some(run);
        snapshot
    }

    pub fn play_card(&mut self, index: usize) -> Result<PlayResult, RunError> {
        let run = self.run.as_mut().ok_or(RunError::NoRun)?;
        run.play_card(index, &mut self.events)
    }

    /// `true` if the room was skipped; `false` leaves everything as it was.
    pub fn skip_room(&mut self) -> bool {
        self.try_skip_room().is_ok()
    }

    pub fn try_skip_room(&mut self) -> Result<(), RunError> {
        let run = self.run.as_mut().ok_or(RunError::NoRun)?;
        run.skip_room(&mut self.events)
    }

    pub fn snapshot(&self) -> Option<RunSnapshot> {
        self.run.as_ref().map(RunState::snapshot)
    }

    pub fn run(&self) -> Option<&RunState> {
        self.run.as_ref()
    }

    pub fn last_seed(&self) -> Option<u32> {
        self.last_seed
    }

    pub fn drain_events(&mut self) -> Vec<Event> {
        self.events.drain().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_without_a_run_are_rejected() {
        let mut engine = Engine::default();
        assert_eq!(engine.play_card(0), Err(RunError::NoRun));
        assert!(!engine.skip_room());
        assert!(engine.snapshot().is_none());
    }

    #[test]
    fn restart_without_history_draws_a_seed() {
        let mut engine = Engine::default();
        let snapshot = engine.restart_with_same_seed();
        assert!(snapshot.seed >= 1);
        assert_eq!(engine.last_seed(), Some(snapshot.seed));
    }

    #[test]
    fn restart_replays_the_recorded_seed() {
        let mut engine = Engine::default();
        let first = engine.start_run(Some(4242));
        engine.play_card(0).unwrap();
        let again = engine.restart_with_same_seed();
        assert_eq!(first, again);
    }

    #[test]
    fn unplayable_rules_are_refused() {
        let dead = RulesConfig {
            max_hp: 0,
            ..RulesConfig::default()
        };
        assert_eq!(Engine::new(dead).err(), Some(ConfigError::MaxHp(0)));
        let empty_room = RulesConfig {
            room_size: 0,
            ..RulesConfig::default()
        };
        assert_eq!(Engine::new(empty_room).err(), Some(ConfigError::RoomSize(0)));
    }

    #[test]
    fn a_new_run_drops_the_old_runs_events() {
        let mut engine = Engine::default();
        engine.start_run(Some(3));
        engine.play_card(0).unwrap();
        engine.restart_with_same_seed();
        let events = engine.drain_events();
        let starts = events
            .iter()
            .filter(|event| matches!(event, Event::RunStarted { .. }))
            .count();
        assert_eq!(starts, 1);
        assert!(matches!(events[0], Event::RunStarted { seed: 3, .. }));
    }

    #[test]
    fn seed_zero_is_accepted() {
        let mut engine = Engine::default();
        let a = engine.start_run(Some(0));
        let b = engine.start_run(Some(0));
        assert_eq!(a.seed, 0);
        assert_eq!(a, b);
    }
}
