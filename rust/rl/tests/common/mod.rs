use gridworld::*;

/// Neighbour of `s` on an `n`x`n` grid worked out from raw coordinates,
/// independently of `GridWorld::step`.
#[allow(dead_code)]
pub fn neighbour(n: usize, s: State, a: Action) -> State {
    let (row, col) = ((s / n) as i64, (s % n) as i64);
    let (dr, dc) = a.delta();
    let (row, col) = (row + dr as i64, col + dc as i64);
    if (0..n as i64).contains(&row) && (0..n as i64).contains(&col) {
        (row * n as i64 + col) as State
    } else {
        s
    }
}

/// `sum_a pi(s, a) * (-1 + v[s'])` for a non-terminal `s`.
#[allow(dead_code)]
pub fn expected_value<P: Policy>(n: usize, policy: &P, v: &[Continous], s: State) -> Continous {
    Action::ALL
        .iter()
        .map(|&a| policy.probability(s, a) * (-1. + v[neighbour(n, s, a)]))
        .sum()
}
