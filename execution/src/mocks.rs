//! Deterministic helpers for tests.

use crate::rng::RandomSource;
use std::collections::VecDeque;

/// Replays a fixed sequence of draws.
///
/// Panics if a draw is requested after the script runs out, or if a scripted value does not
/// fit the requested bound.
#[derive(Clone, Debug, Default)]
pub struct ScriptedDraws {
    draws: VecDeque<usize>,
}

impl ScriptedDraws {
    pub fn new(draws: impl IntoIterator<Item = usize>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl RandomSource for ScriptedDraws {
    fn draw(&mut self, bound: usize) -> usize {
        let value = self
            .draws
            .pop_front()
            .unwrap_or_else(|| panic!("scripted draws exhausted (bound={bound})"));
        assert!(value < bound, "scripted draw {value} out of range 0..{bound}");
        value
    }
}
