extern crate rand;
extern crate thiserror;

pub mod common;
pub mod error;
pub mod mdps;
pub mod ui;

pub use common::defs::*;
pub use error::*;
pub use mdps::*;

use rand::Rng;
use std::collections::BTreeSet;

pub type Discrete = i32;
pub type Continous = f64;

/// Cell identifier, `row * size + col`.
pub type State = usize;

/// Reward paid on every transition, wall bounces included.
pub const STEP_REWARD: Continous = -1.;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Action {
    Up,
    Right,
    Down,
    Left,
}

impl Action {
    /// Every action, in the order used for all policy and value lookups.
    pub const ALL: [Action; 4] = [Action::Up, Action::Right, Action::Down, Action::Left];

    /// `(row, col)` displacement.
    pub fn delta(&self) -> (Discrete, Discrete) {
        match self {
            Action::Up => (-1, 0),
            Action::Right => (0, 1),
            Action::Down => (1, 0),
            Action::Left => (0, -1),
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Action::Up => 0,
            Action::Right => 1,
            Action::Down => 2,
            Action::Left => 3,
        }
    }

    pub fn from_index(i: usize) -> Option<Action> {
        Self::ALL.get(i).copied()
    }

    pub fn arrow(&self) -> char {
        match self {
            Action::Up => '↑',
            Action::Right => '→',
            Action::Down => '↓',
            Action::Left => '←',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub next_state: State,
    pub reward: Continous,
    pub done: bool,
}

/// Square grid of `size * size` cells with a mutable set of absorbing cells.
#[derive(Debug, Clone)]
pub struct GridWorld {
    size: Discrete,
    terminals: BTreeSet<State>,
}

impl GridWorld {
    pub fn new<I>(size: Discrete, terminals: I) -> Result<Self>
    where
        I: IntoIterator<Item = State>,
    {
        // Indices are computed in `Discrete`, so the whole grid must fit in it.
        if size <= 0 || size.checked_mul(size).is_none() {
            return Err(GridError::InvalidGridSize(size));
        }

        let mut grid = Self {
            size,
            terminals: BTreeSet::new(),
        };
        for s in terminals {
            grid.check_state(s)?;
            grid.terminals.insert(s);
        }

        Ok(grid)
    }

    pub fn size(&self) -> Discrete {
        self.size
    }

    pub fn n_s(&self) -> usize {
        (self.size as usize) * (self.size as usize)
    }

    pub fn terminals(&self) -> &BTreeSet<State> {
        &self.terminals
    }

    pub fn is_terminal(&self, s: State) -> bool {
        self.terminals.contains(&s)
    }

    pub fn is_inside(&self, row: Discrete, col: Discrete) -> bool {
        (0..self.size).contains(&row) && (0..self.size).contains(&col)
    }

    pub fn coordinates_to_state(&self, row: Discrete, col: Discrete) -> Result<State> {
        if !self.is_inside(row, col) {
            return Err(GridError::CoordinatesOutOfRange {
                row,
                col,
                size: self.size,
            });
        }

        Ok((row * self.size + col) as State)
    }

    pub fn state_to_coordinates(&self, s: State) -> Result<(Discrete, Discrete)> {
        self.check_state(s)?;
        let s = s as Discrete;

        Ok((s / self.size, s % self.size))
    }

    /// Moves from `s` along `a`. Leaving the grid keeps the agent in place and
    /// never ends the episode, even when `s` is itself terminal.
    pub fn step(&self, s: State, a: Action) -> Result<Transition> {
        let (row, col) = self.state_to_coordinates(s)?;
        let (dr, dc) = a.delta();
        let (row, col) = (row + dr, col + dc);

        if !self.is_inside(row, col) {
            return Ok(Transition {
                next_state: s,
                reward: STEP_REWARD,
                done: false,
            });
        }

        let next_state = self.coordinates_to_state(row, col)?;
        Ok(Transition {
            next_state,
            reward: STEP_REWARD,
            done: self.is_terminal(next_state),
        })
    }

    /// Returns whether `s` is terminal after the call.
    pub fn set_terminal(&mut self, s: State, terminal: bool) -> Result<bool> {
        self.check_state(s)?;
        if terminal {
            self.terminals.insert(s);
        } else {
            self.terminals.remove(&s);
        }

        Ok(terminal)
    }

    pub fn toggle_terminal(&mut self, s: State) -> Result<bool> {
        let terminal = !self.is_terminal(s);
        self.set_terminal(s, terminal)
    }

    /// Uniform `[0, 1)` values for every cell, zero on terminals.
    pub fn initial_value_function<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Continous> {
        (0..self.n_s())
            .map(|s| {
                if self.is_terminal(s) {
                    0.
                } else {
                    rng.gen::<Continous>()
                }
            })
            .collect()
    }

    fn check_state(&self, s: State) -> Result<()> {
        if s >= self.n_s() {
            return Err(GridError::StateOutOfRange {
                state: s,
                n_s: self.n_s(),
            });
        }

        Ok(())
    }
}
