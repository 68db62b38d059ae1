use gridworld::*;
use serde::Deserialize;

/// Run settings for the policy evaluation driver. Every field is optional in
/// the JSON form and falls back to [`Config::default`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub size: Discrete,
    pub terminals: Vec<State>,
    pub seed: Option<u64>,
    pub sweeps_per_step: usize,
    pub theta: Continous,
    pub max_steps: usize,
    pub policy: PolicyConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            size: 10,
            terminals: vec![
                22, 23, 26, 27, 32, 33, 36, 37, 42, 43, 46, 47, 61, 62, 67, 68, 72, 73, 76, 77, 83,
                84, 85, 86,
            ],
            seed: None,
            sweeps_per_step: 10,
            theta: 1e-4,
            max_steps: 100,
            policy: PolicyConfig::Uniform,
        }
    }
}

impl Config {
    pub fn from_json(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PolicyConfig {
    #[default]
    Uniform,
    /// One row of four probabilities (up, right, down, left) per state.
    Tabular { rows: Vec<Vec<Continous>> },
}

impl PolicyConfig {
    pub fn build(&self) -> Result<Box<dyn Policy>> {
        Ok(match self {
            PolicyConfig::Uniform => Box::new(UniformPolicy),
            PolicyConfig::Tabular { rows } => Box::new(TabularPolicy::from_rows(rows.clone())?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::*;

    #[test]
    fn empty_json_is_default() {
        assert_eq!(Config::from_json("{}").unwrap(), Config::default());
    }

    #[test]
    fn default_layout_is_upright() {
        // A face: mirrored left to right, eyes in rows 2..=4, mouth in rows 6..=8.
        let c = Config::default();
        let n = c.size as usize;
        for &s in &c.terminals {
            let (row, col) = (s / n, s % n);
            let mirrored = row * n + (n - 1 - col);
            assert!(c.terminals.contains(&mirrored), "{s} has no mirror {mirrored}");
            assert!((2..=4).contains(&row) || (6..=8).contains(&row), "{s} in row {row}");
        }
    }

    #[test]
    fn partial_json_overrides_fields() {
        let c = Config::from_json(r#"{ "size": 4, "terminals": [0, 15], "seed": 42 }"#).unwrap();
        assert_eq!(c.size, 4);
        assert_eq!(c.terminals, vec![0, 15]);
        assert_eq!(c.seed, Some(42));
        assert_eq!(c.sweeps_per_step, 10);
        assert_eq!(c.policy, PolicyConfig::Uniform);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(Config::from_json(r#"{ "screen_height": 800 }"#).is_err());
    }

    #[test]
    fn tabular_policy_from_json() {
        let c = Config::from_json(
            r#"{ "policy": { "kind": "tabular", "rows": [[1, 0, 0, 0], [0, 0.5, 0.5, 0]] } }"#,
        )
        .unwrap();
        let p = c.policy.build().unwrap();
        assert_float_eq!(p.probability(1, Action::Down), 0.5, abs <= 1e-15);
        assert_float_eq!(p.probability(0, Action::Up), 1., abs <= 1e-15);
    }

    #[test]
    fn malformed_table_fails_to_build() {
        let c = Config::from_json(r#"{ "policy": { "kind": "tabular", "rows": [[1, 0]] } }"#).unwrap();
        assert!(c.policy.build().is_err());
    }
}
