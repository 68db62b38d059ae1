use crate::Mdp;
use gridworld::*;

impl Mdp for GridWorld {
    fn n_s(&self) -> usize {
        GridWorld::n_s(self)
    }

    fn actions(&self) -> &[Action] {
        &Action::ALL
    }

    fn is_terminal(&self, s: State) -> bool {
        GridWorld::is_terminal(self, s)
    }

    fn step(&self, s: State, a: Action) -> Result<Transition> {
        GridWorld::step(self, s, a)
    }
}
