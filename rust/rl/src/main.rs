use anyhow::Context;
use clap::Parser;
use gridworld::{ui::CLEAR_SCREEN, Continous, Discrete, State};
use rl::*;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Iterative policy evaluation on a GridWorld, printed as text frames.
#[derive(Debug, Parser)]
#[command(name = "gridworld", version)]
struct Cli {
    /// JSON file with run settings; flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    size: Option<Discrete>,

    /// Comma separated terminal states, replacing the configured ones.
    #[arg(long, value_delimiter = ',')]
    terminals: Option<Vec<State>>,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    sweeps_per_step: Option<usize>,

    #[arg(long)]
    theta: Option<Continous>,

    #[arg(long)]
    max_steps: Option<usize>,

    /// Flip a state's terminal status before the run. Repeatable.
    #[arg(long = "toggle")]
    toggles: Vec<State>,

    /// Log progress only, without drawing frames.
    #[arg(long)]
    quiet: bool,
}

impl Cli {
    fn config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => {
                let s = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                Config::from_json(&s).with_context(|| format!("parsing {}", path.display()))?
            }
            None => Config::default(),
        };

        if let Some(size) = self.size {
            config.size = size;
        }
        if let Some(terminals) = &self.terminals {
            config.terminals = terminals.clone();
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(n) = self.sweeps_per_step {
            config.sweeps_per_step = n;
        }
        if let Some(theta) = self.theta {
            config.theta = theta;
        }
        if let Some(n) = self.max_steps {
            config.max_steps = n;
        }

        anyhow::ensure!(config.theta > 0., "theta must be positive");
        anyhow::ensure!(config.sweeps_per_step > 0, "sweeps_per_step must be positive");
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = cli.config()?;
    let policy = config.policy.build().context("building policy")?;

    let mut session = GridSession::new(config.size, config.terminals.iter().copied(), config.seed)
        .context("creating grid session")?;
    for &s in &cli.toggles {
        session.toggle_terminal(s)?;
    }

    if let Some((s, dev)) = policy_mass_deviation(&*policy, session.grid()) {
        warn!(state = s, deviation = dev, "Policy probabilities do not sum to 1");
    }

    for step in 1..=config.max_steps {
        let delta = session.sweeps(&*policy, config.sweeps_per_step)?;

        if !cli.quiet {
            print!("{CLEAR_SCREEN}");
            println!("{}", session.render()?);
            println!(
                "step: {step}, sweeps: {}, delta: {delta:.6}",
                session.sweeps_done()
            );
        }

        if delta < config.theta {
            info!(step, sweeps = session.sweeps_done(), delta, "Converged");
            return Ok(());
        }
    }

    warn!(
        max_steps = config.max_steps,
        theta = config.theta,
        "Did not converge within the step limit"
    );
    Ok(())
}
