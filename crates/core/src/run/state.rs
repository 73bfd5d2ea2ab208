use super::*;
use crate::{build_deck, Event, EventBus};
use tracing::info;

impl RunState {
    /// Builds, shuffles and deals a fresh run for `seed`.
    pub fn start(config: RulesConfig, seed: u32, events: &mut EventBus) -> Self {
        let mut rng = RngState::from_seed(seed);
        let mut deck = build_deck();
        deck.shuffle(&mut rng);
        Self::deal(config, rng, deck, events)
    }

    /// Starts a run on a deck the caller already ordered. The seed is only
    /// recorded; nothing is shuffled.
    pub fn with_deck(config: RulesConfig, seed: u32, deck: Deck, events: &mut EventBus) -> Self {
        Self::deal(config, RngState::from_seed(seed), deck, events)
    }

    fn deal(config: RulesConfig, rng: RngState, deck: Deck, events: &mut EventBus) -> Self {
        let hp = config.max_hp;
        let mut run = Self {
            config,
            rng,
            deck,
            room: Vec::new(),
            carry: None,
            hp,
            weapon: None,
            score: 0,
            skip_available: true,
            outcome: None,
        };
        info!(seed = run.seed(), deck = run.deck.len(), "run started");
        events.push(Event::RunStarted {
            seed: run.seed(),
            deck: run.deck.len(),
        });
        run.enter_next_room(events);
        run
    }

    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    pub fn seed(&self) -> u32 {
        self.rng.seed()
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn room(&self) -> &[Card] {
        &self.room
    }

    pub fn carry(&self) -> Option<Card> {
        self.carry
    }

    pub fn hp(&self) -> i32 {
        self.hp
    }

    pub fn max_hp(&self) -> i32 {
        self.config.max_hp
    }

    pub fn weapon(&self) -> Option<EquippedWeapon> {
        self.weapon
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn skip_available(&self) -> bool {
        self.skip_available
    }

    pub fn room_full(&self) -> bool {
        self.room.len() == self.config.room_size
    }

    pub fn outcome(&self) -> Option<RunOutcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub(super) fn finish(&mut self, outcome: RunOutcome, events: &mut EventBus) {
        self.outcome = Some(outcome);
        info!(?outcome, hp = self.hp, score = self.score, "run ended");
        events.push(Event::RunEnded {
            outcome,
            hp: self.hp,
            score: self.score,
        });
    }
}
