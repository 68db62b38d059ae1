use super::Mdp;
use gridworld::{common::utils::round_to, *};

/// Decimal digits kept before comparing action values, so that float noise
/// does not split ties.
pub const GREEDY_PRECISION: i32 = 2;

/// One-step lookahead `r + v[s']` for taking `a` in `s`.
pub fn q_value<M>(s: State, a: Action, v: &[Continous], mdp: &M) -> Result<Continous>
where
    M: Mdp + ?Sized,
{
    let t = mdp.step(s, a)?;
    let v_next = v.get(t.next_state).ok_or(GridError::StateOutOfRange {
        state: t.next_state,
        n_s: v.len(),
    })?;

    Ok(t.reward + v_next)
}

/// All actions whose rounded lookahead value is maximal, in action order.
/// Terminal states have none.
pub fn best_actions<M>(s: State, v: &[Continous], mdp: &M) -> Result<Vec<Action>>
where
    M: Mdp + ?Sized,
{
    if mdp.is_terminal(s) {
        return Ok(vec![]);
    }

    let mut best = vec![];
    let mut best_q = Continous::NEG_INFINITY;
    for &a in mdp.actions() {
        let q = round_to(q_value(s, a, v, mdp)?, GREEDY_PRECISION);
        if q > best_q {
            best_q = q;
            best = vec![a];
        } else if q == best_q {
            best.push(a);
        }
    }

    Ok(best)
}

/// [`best_actions`] for every state.
pub fn greedy_policy<M>(v: &[Continous], mdp: &M) -> Result<Vec<Vec<Action>>>
where
    M: Mdp + ?Sized,
{
    (0..mdp.n_s()).map(|s| best_actions(s, v, mdp)).collect()
}
