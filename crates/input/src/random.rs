//! Random player: picks a direction uniformly after a short think delay.

use std::time::Duration;

use anyhow::Result;

use blockfall_core::{Block, GameState, SimpleRng};
use blockfall_engine::{Player, PlayerInput, TurnDeadline};

use crate::types::{Direction, DEFAULT_BOT_DELAY_MS};

#[derive(Debug, Clone)]
pub struct RandomPlayer {
    rng: SimpleRng,
    delay: Duration,
}

impl RandomPlayer {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            delay: Duration::from_millis(DEFAULT_BOT_DELAY_MS),
        }
    }

    /// Think time per turn; a delay longer than the turn budget makes every turn idle
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Player for RandomPlayer {
    fn get_move(
        &mut self,
        _state: &GameState,
        _block: &Block,
        deadline: &TurnDeadline,
    ) -> Result<PlayerInput> {
        let remaining = deadline.remaining();
        if self.delay > remaining {
            std::thread::sleep(remaining);
            return Ok(PlayerInput::Idle);
        }
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
        let direction = self.rng.choose(&Direction::ALL).unwrap_or_default();
        Ok(PlayerInput::Move(direction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ShapeKind;

    fn turns(player: &mut RandomPlayer, budget: Duration, n: usize) -> Vec<PlayerInput> {
        let state = GameState::new();
        let block = Block::spawn(ShapeKind::S);
        (0..n)
            .map(|_| {
                let deadline = TurnDeadline::start(budget);
                player.get_move(&state, &block, &deadline).unwrap()
            })
            .collect()
    }

    #[test]
    fn same_seed_same_moves() {
        let mut a = RandomPlayer::new(9).with_delay(Duration::ZERO);
        let mut b = RandomPlayer::new(9).with_delay(Duration::ZERO);
        assert_eq!(
            turns(&mut a, Duration::ZERO, 30),
            turns(&mut b, Duration::ZERO, 30)
        );
    }

    #[test]
    fn too_slow_for_the_budget_is_idle() {
        let mut player = RandomPlayer::new(1).with_delay(Duration::from_millis(50));
        assert_eq!(
            turns(&mut player, Duration::ZERO, 1),
            vec![PlayerInput::Idle]
        );
    }
}
