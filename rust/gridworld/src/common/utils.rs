use crate::Continous;

/// Rounds to `digits` decimal places, exact halves going to the even digit.
pub fn round_to(x: Continous, digits: i32) -> Continous {
    let scale = (10 as Continous).powi(digits);
    (x * scale).round_ties_even() / scale
}

/// Largest elementwise `|a - b|`, 0 for empty slices.
pub fn max_abs_diff(a: &[Continous], b: &[Continous]) -> Continous {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).abs())
        .fold(0., Continous::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::*;
    use rstest::*;

    #[rstest]
    #[case(-1.234, -1.23)]
    #[case(-1.235_000_1, -1.24)]
    #[case(0.004, 0.)]
    #[case(-1.125, -1.12)]
    #[case(0.375, 0.38)]
    #[case(2.125, 2.12)]
    #[case(2., 2.)]
    fn rounds_to_two_digits(#[case] x: Continous, #[case] expected: Continous) {
        assert_float_eq!(round_to(x, 2), expected, abs <= 1e-12);
    }

    #[test]
    fn max_abs_diff_picks_largest_gap() {
        assert_float_eq!(
            max_abs_diff(&[0., -1., 3.], &[0.5, 1., 3.]),
            2.,
            abs <= 1e-12
        );
        assert_eq!(max_abs_diff(&[], &[]), 0.);
    }
}
