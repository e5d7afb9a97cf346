//! Fixed-step driver: turns wall-clock time into gravity ticks.
//!
//! The driver replaces self-scheduling frame callbacks with an explicit loop
//! owned by the caller: each call to [`Driver::pump`] reads the clock and
//! feeds the game whole `tick_ms` steps. Input intents are applied by the
//! caller between pumps through [`GameState::apply_action`], so they use the
//! same atomic operations as gravity.

use std::time::Duration;

use log::{debug, trace};

use crate::clock::Clock;
use crate::core::{GameSnapshot, GameState};

/// Upper bound on ticks replayed by one pump after a stall.
pub const MAX_CATCH_UP_TICKS: u32 = 8;

/// Consumer of one frame's read-only game view
pub trait Renderer {
    fn draw(&mut self, snapshot: &GameSnapshot) -> anyhow::Result<()>;
}

#[derive(Debug)]
pub struct Driver<C: Clock> {
    clock: C,
    tick_ms: u32,
    last_ms: u64,
    accumulator_ms: u64,
    snapshot: GameSnapshot,
}

impl<C: Clock> Driver<C> {
    pub fn new(clock: C, tick_ms: u32) -> Self {
        let last_ms = clock.now_ms();
        Self {
            clock,
            tick_ms: tick_ms.max(1),
            last_ms,
            accumulator_ms: 0,
            snapshot: GameSnapshot::default(),
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn tick_ms(&self) -> u32 {
        self.tick_ms
    }

    /// Forget time accumulated so far (e.g. after a long blocking call)
    pub fn resync(&mut self) {
        self.last_ms = self.clock.now_ms();
        self.accumulator_ms = 0;
    }

    /// Run every whole tick that elapsed since the last pump.
    ///
    /// While the game is paused, over or not started, elapsed time is
    /// discarded so resuming never replays it. Returns the number of ticks
    /// delivered to the game.
    pub fn pump(&mut self, game: &mut GameState) -> u32 {
        let now = self.clock.now_ms();
        let elapsed = now.saturating_sub(self.last_ms);
        self.last_ms = now;

        if game.paused() || game.game_over() || !game.started() {
            self.accumulator_ms = 0;
            return 0;
        }

        self.accumulator_ms += elapsed;
        let step = self.tick_ms as u64;
        let mut ticks = 0;

        while self.accumulator_ms >= step {
            if ticks == MAX_CATCH_UP_TICKS {
                debug!(
                    "driver fell behind, dropping {}ms",
                    self.accumulator_ms
                );
                self.accumulator_ms = 0;
                break;
            }
            self.accumulator_ms -= step;
            game.tick(self.tick_ms);
            ticks += 1;
        }

        trace!("pump: {} tick(s), {}ms carried", ticks, self.accumulator_ms);
        ticks
    }

    /// Pump the game, then hand the renderer a fresh snapshot.
    pub fn frame<R: Renderer + ?Sized>(
        &mut self,
        game: &mut GameState,
        renderer: &mut R,
    ) -> anyhow::Result<u32> {
        let ticks = self.pump(game);
        game.snapshot_into(&mut self.snapshot);
        renderer.draw(&self.snapshot)?;
        Ok(ticks)
    }

    /// How long the caller may wait for input before the next tick is due
    pub fn time_until_next_tick(&self) -> Duration {
        let since_last = self.clock.now_ms().saturating_sub(self.last_ms) + self.accumulator_ms;
        Duration::from_millis((self.tick_ms as u64).saturating_sub(since_last))
    }
}
