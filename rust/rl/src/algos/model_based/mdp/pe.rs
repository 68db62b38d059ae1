use super::Mdp;
use gridworld::{common::utils::max_abs_diff, *};
use tracing::{debug, info, warn};

/// Policy mass further than this from 1 is reported by [`policy_mass_deviation`].
pub const MASS_TOLERANCE: Continous = 1e-9;

/// One synchronous (Jacobi) sweep of iterative policy evaluation.
///
/// Every non-terminal state gets
/// `sum_a pi(s, a) * (r + v[s'])` computed from `v` only; the result is written
/// to a fresh buffer so no update can observe another one from the same sweep.
/// Terminal states stay at 0. A state with no actions also ends up at 0.
///
/// Returns the new values and the largest absolute per-state change.
pub fn evaluate<P, M>(policy: &P, v: &[Continous], mdp: &M) -> Result<(Vec<Continous>, Continous)>
where
    P: Policy + ?Sized,
    M: Mdp + ?Sized,
{
    let n_s = mdp.n_s();
    if v.len() != n_s {
        return Err(GridError::ValueLengthMismatch {
            expected: n_s,
            actual: v.len(),
        });
    }

    let mut v_new = vec![0 as Continous; n_s];
    for (s, v_s) in v_new.iter_mut().enumerate() {
        if mdp.is_terminal(s) {
            continue;
        }

        for &a in mdp.actions() {
            let t = mdp.step(s, a)?;
            let v_next = v.get(t.next_state).ok_or(GridError::StateOutOfRange {
                state: t.next_state,
                n_s,
            })?;
            *v_s += policy.probability(s, a) * (t.reward + v_next);
        }
    }

    let delta = max_abs_diff(&v_new, v);
    debug!(delta, "Policy evaluation sweep");

    Ok((v_new, delta))
}

/// Sweeps until the delta drops below `theta` or `num_iterations` sweeps have
/// run. Returns the final values, the last delta and the number of sweeps.
///
/// `theta` must be positive. Without a cap this only returns if the values
/// converge: a grid with no terminal states under a proper policy drifts by
/// -1 per sweep forever.
pub fn evaluate_until<P, M>(
    policy: &P,
    v: &[Continous],
    mdp: &M,
    theta: Continous,
    num_iterations: Option<usize>,
) -> Result<(Vec<Continous>, Continous, usize)>
where
    P: Policy + ?Sized,
    M: Mdp + ?Sized,
{
    if !(theta > 0.) {
        return Err(GridError::InvalidTheta(theta));
    }

    let mut v = v.to_vec();
    let mut delta = Continous::INFINITY;
    let mut n = 0;

    while delta >= theta {
        if num_iterations.is_some_and(|cap| n >= cap) {
            warn!(theta, delta, sweeps = n, "Stopped before reaching theta");
            return Ok((v, delta, n));
        }

        (v, delta) = evaluate(policy, &v, mdp)?;
        n += 1;
    }

    info!(theta, delta, sweeps = n, "Policy evaluation converged");
    Ok((v, delta, n))
}

/// Non-terminal state whose action mass is furthest from 1, if any exceeds
/// [`MASS_TOLERANCE`]. Such policies are still evaluated; the values just stop
/// being an expectation.
pub fn policy_mass_deviation<P, M>(policy: &P, mdp: &M) -> Option<(State, Continous)>
where
    P: Policy + ?Sized,
    M: Mdp + ?Sized,
{
    (0..mdp.n_s())
        .filter(|&s| !mdp.is_terminal(s))
        .map(|s| {
            let mass: Continous = mdp.actions().iter().map(|&a| policy.probability(s, a)).sum();
            (s, (mass - 1.).abs())
        })
        .filter(|&(_, dev)| dev > MASS_TOLERANCE)
        .max_by(|x, y| x.1.total_cmp(&y.1))
}
