use super::*;
use crate::{Event, EventBus, SkipReturn};
use tracing::debug;

impl RunState {
    /// Carry card first, then the top of the deck until the room is full.
    /// An empty room over an empty deck ends the run.
    pub(super) fn enter_next_room(&mut self, events: &mut EventBus) {
        self.room.clear();
        let carried = match self.carry.take() {
            Some(card) => {
                self.room.push(card);
                true
            }
            None => false,
        };
        while self.room.len() < self.config.room_size {
            match self.deck.draw() {
                Some(card) => self.room.push(card),
                None => break,
            }
        }

        if self.room.is_empty() && self.deck.is_empty() {
            let outcome = if self.hp > 0 {
                RunOutcome::Victory
            } else {
                RunOutcome::Defeat
            };
            self.finish(outcome, events);
            return;
        }

        debug!(
            room = self.room.len(),
            carried,
            deck = self.deck.len(),
            "entered room"
        );
        events.push(Event::RoomEntered {
            cards: self.room.clone(),
            carried,
            deck: self.deck.len(),
        });
    }

    pub fn can_skip(&self) -> bool {
        self.check_skip().is_ok()
    }

    fn check_skip(&self) -> Result<(), RunError> {
        if self.is_over() {
            return Err(RunError::RunOver);
        }
        if !self.skip_available {
            return Err(RunError::SkipUnavailable);
        }
        if !self.room_full() {
            return Err(RunError::RoomNotFull {
                len: self.room.len(),
            });
        }
        Ok(())
    }

    /// Sends the untouched room back to the deck as one block and deals again.
    /// Only one skip is allowed until a room is cleared down to its carry card.
    pub fn skip_room(&mut self, events: &mut EventBus) -> Result<(), RunError> {
        self.check_skip()?;

        let block = std::mem::take(&mut self.room);
        match self.config.skip_return {
            SkipReturn::DrawEnd => self.deck.return_to_top(&block),
            SkipReturn::Bottom => self.deck.return_to_bottom(&block),
        }
        self.skip_available = false;

        debug!(returned = block.len(), deck = self.deck.len(), "room skipped");
        events.push(Event::RoomSkipped {
            returned: block.len(),
            deck: self.deck.len(),
        });
        self.enter_next_room(events);
        Ok(())
    }
}
