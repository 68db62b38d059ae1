extern crate gridworld;
extern crate rand;
extern crate serde;
extern crate tracing;

pub mod algos;
pub mod config;
pub mod environments;
pub mod session;

pub use algos::model_based::mdp::{greedy::*, pe::*, Mdp};
pub use config::*;
pub use session::*;
