use super::state::Position;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

/// Picks food cells uniformly among the cells not covered by the snake
pub struct FoodPlacer {
    grid_size: usize,
    rng: StdRng,
}

impl FoodPlacer {
    pub fn new(grid_size: usize) -> Self {
        Self {
            grid_size,
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic placer, for tests and reproducible games
    pub fn seeded(grid_size: usize, seed: u64) -> Self {
        Self {
            grid_size,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Choose a free cell, or `None` when every cell is occupied.
    ///
    /// Samples the whole grid and retries on hits while the board is mostly
    /// empty. Once at least half the board is covered it enumerates the free
    /// cells and picks one of them directly, so the call always terminates.
    pub fn place(&mut self, occupied: &[Position]) -> Option<Position> {
        let occupied: HashSet<Position> = occupied.iter().copied().collect();
        let total = self.grid_size * self.grid_size;

        if occupied.len() * 2 < total {
            loop {
                let x = self.rng.gen_range(0..self.grid_size) as i32;
                let y = self.rng.gen_range(0..self.grid_size) as i32;
                let pos = Position::new(x, y);

                if !occupied.contains(&pos) {
                    return Some(pos);
                }
            }
        }

        let size = self.grid_size as i32;
        let free: Vec<Position> = (0..size)
            .flat_map(|y| (0..size).map(move |x| Position::new(x, y)))
            .filter(|pos| !occupied.contains(pos))
            .collect();

        free.choose(&mut self.rng).copied()
    }
}
