use crate::{best_actions, evaluate, evaluate_until, greedy_policy};
use gridworld::{ui::render_frame, *};
use rand::prelude::*;
use tracing::{debug, info};

/// A grid together with the value function being evaluated on it.
///
/// Terminal toggles and sweeps both go through `&mut self`, so the value
/// function always matches the current terminal set between calls.
#[derive(Debug)]
pub struct GridSession {
    grid: GridWorld,
    v: Vec<Continous>,
    rng: StdRng,
    sweeps: usize,
}

impl GridSession {
    /// Seeded sessions are reproducible; `None` draws from entropy.
    pub fn new<I>(size: Discrete, terminals: I, seed: Option<u64>) -> Result<Self>
    where
        I: IntoIterator<Item = State>,
    {
        let grid = GridWorld::new(size, terminals)?;
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let v = grid.initial_value_function(&mut rng);
        info!(size, terminals = grid.terminals().len(), ?seed, "Created grid session");

        Ok(Self {
            grid,
            v,
            rng,
            sweeps: 0,
        })
    }

    pub fn grid(&self) -> &GridWorld {
        &self.grid
    }

    pub fn values(&self) -> &[Continous] {
        &self.v
    }

    /// Number of sweeps applied since the last value reset.
    pub fn sweeps_done(&self) -> usize {
        self.sweeps
    }

    /// A fresh random value function for the current terminal set. Does not
    /// replace the session's values.
    pub fn initial_value_function(&mut self) -> Vec<Continous> {
        self.grid.initial_value_function(&mut self.rng)
    }

    pub fn reset_values(&mut self) {
        self.v = self.initial_value_function();
        self.sweeps = 0;
    }

    /// Replaces the values with one evaluation sweep and returns its delta.
    pub fn sweep<P: Policy + ?Sized>(&mut self, policy: &P) -> Result<Continous> {
        let (v, delta) = evaluate(policy, &self.v, &self.grid)?;
        self.v = v;
        self.sweeps += 1;

        Ok(delta)
    }

    /// Runs `n` sweeps and returns the delta of the last one (0 when `n` is 0).
    /// Values are only replaced if every sweep succeeds.
    pub fn sweeps<P: Policy + ?Sized>(&mut self, policy: &P, n: usize) -> Result<Continous> {
        let mut v = self.v.clone();
        let mut delta = 0.;
        for _ in 0..n {
            (v, delta) = evaluate(policy, &v, &self.grid)?;
        }

        self.v = v;
        self.sweeps += n;
        debug!(n, delta, total = self.sweeps, "Applied sweeps");

        Ok(delta)
    }

    /// Sweeps until the delta drops below `theta` (or the cap is hit).
    /// Returns the last delta and the number of sweeps run.
    pub fn exec<P: Policy + ?Sized>(
        &mut self,
        policy: &P,
        theta: Continous,
        num_iterations: Option<usize>,
    ) -> Result<(Continous, usize)> {
        let (v, delta, n) = evaluate_until(policy, &self.v, &self.grid, theta, num_iterations)?;
        self.v = v;
        self.sweeps += n;

        Ok((delta, n))
    }

    pub fn best_actions(&self, s: State) -> Result<Vec<Action>> {
        best_actions(s, &self.v, &self.grid)
    }

    pub fn greedy_policy(&self) -> Result<Vec<Vec<Action>>> {
        greedy_policy(&self.v, &self.grid)
    }

    /// Flips `s` in or out of the terminal set. A new terminal is pinned to 0,
    /// a released one gets a fresh random value. Returns the new membership.
    pub fn toggle_terminal(&mut self, s: State) -> Result<bool> {
        let terminal = self.grid.toggle_terminal(s)?;
        self.v[s] = if terminal { 0. } else { self.rng.gen() };
        info!(state = s, terminal, "Toggled terminal state");

        Ok(terminal)
    }

    pub fn render(&self) -> Result<String> {
        Ok(render_frame(&self.grid, &self.v, &self.greedy_policy()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::*;

    #[test]
    fn seeded_sessions_are_reproducible() {
        let a = GridSession::new(5, [0, 24], Some(2718)).unwrap();
        let b = GridSession::new(5, [0, 24], Some(2718)).unwrap();
        assert_eq!(a.values(), b.values());
        assert_eq!(a.values()[0], 0.);
        assert_eq!(a.values()[24], 0.);
    }

    #[test]
    fn degenerate_grid_is_rejected() {
        assert_eq!(
            GridSession::new(0, [], None).unwrap_err(),
            GridError::InvalidGridSize(0)
        );
    }

    #[test]
    fn toggle_resets_value() {
        let mut session = GridSession::new(4, [0, 15], Some(1)).unwrap();
        session.sweeps(&UniformPolicy, 5).unwrap();

        assert!(session.toggle_terminal(5).unwrap());
        assert_eq!(session.values()[5], 0.);
        assert!(session.grid().is_terminal(5));

        assert!(!session.toggle_terminal(5).unwrap());
        assert!((0. ..1.).contains(&session.values()[5]));
        assert!(!session.grid().is_terminal(5));
    }

    #[test]
    fn toggle_outside_grid_leaves_session_untouched() {
        let mut session = GridSession::new(2, [0], Some(1)).unwrap();
        let before = session.values().to_vec();
        assert!(session.toggle_terminal(4).is_err());
        assert_eq!(session.values(), &before[..]);
    }

    #[test]
    fn batch_matches_individual_sweeps() {
        let mut a = GridSession::new(4, [0, 15], Some(7)).unwrap();
        let mut b = GridSession::new(4, [0, 15], Some(7)).unwrap();

        let batch_delta = a.sweeps(&UniformPolicy, 10).unwrap();
        let mut delta = 0.;
        for _ in 0..10 {
            delta = b.sweep(&UniformPolicy).unwrap();
        }

        assert_float_eq!(a.values().to_vec(), b.values().to_vec(), abs_all <= 1e-12);
        assert_float_eq!(batch_delta, delta, abs <= 1e-12);
        assert_eq!(a.sweeps_done(), 10);
        assert_eq!(a.sweeps(&UniformPolicy, 0).unwrap(), 0.);
    }

    #[test]
    fn exec_converges_and_counts_sweeps() {
        let mut session = GridSession::new(4, [0, 15], Some(3)).unwrap();
        let (delta, n) = session.exec(&UniformPolicy, 1e-6, Some(10_000)).unwrap();
        assert!(delta < 1e-6);
        assert_eq!(session.sweeps_done(), n);
        assert_float_eq!(session.values()[1], -14., abs <= 1e-3);

        session.reset_values();
        assert_eq!(session.sweeps_done(), 0);
    }

    #[test]
    fn render_reflects_terminals() {
        let session = GridSession::new(3, [4], Some(9)).unwrap();
        let frame = session.render().unwrap();
        assert_eq!(frame.lines().count(), 3);
        assert_eq!(frame.matches('■').count(), 1);
    }
}
