pub mod greedy;
pub mod pe;

use gridworld::*;

/// Markov Decision Process - Sutton & Barto 2018.
///
/// Deterministic transitions only: each `(s, a)` leads to exactly one
/// [`Transition`].
pub trait Mdp {
    fn n_s(&self) -> usize;

    /// Actions available in every state, in lookup order.
    fn actions(&self) -> &[Action];

    fn n_a(&self) -> usize {
        self.actions().len()
    }

    fn is_terminal(&self, s: State) -> bool;

    fn step(&self, s: State, a: Action) -> Result<Transition>;
}
