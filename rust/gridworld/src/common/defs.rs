use crate::*;

/// Probability of picking `a` in `s`. The mass over [`Action::ALL`] is expected
/// to sum to 1 for each state; nothing downstream enforces it.
pub trait Policy {
    fn probability(&self, s: State, a: Action) -> Continous;
}

impl<P: Policy + ?Sized> Policy for &P {
    fn probability(&self, s: State, a: Action) -> Continous {
        (**self).probability(s, a)
    }
}

impl<P: Policy + ?Sized> Policy for Box<P> {
    fn probability(&self, s: State, a: Action) -> Continous {
        (**self).probability(s, a)
    }
}
