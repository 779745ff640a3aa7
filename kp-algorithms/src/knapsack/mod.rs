pub mod branch_and_bound;
pub mod dynamic;

pub use branch_and_bound::solve_exhaustive;
pub use dynamic::{solve_dynamic, solve_dynamic_packed, BoolMatrix, DenseBoolMatrix, PackedBoolMatrix};

use anyhow::{anyhow, Result};
use kp_challenges::knapsack::{DensityOrder, Instance, KnapsackData};
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{from_value, Map, Value};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Branch and bound over the full search tree.
    Exhaustive,
    /// Dynamic programming with one byte per change-matrix cell.
    #[default]
    Dynamic,
    /// Dynamic programming with one bit per change-matrix cell.
    DynamicPacked,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct SolverConfig {
    pub algorithm: Algorithm,
    /// Solve on a copy with the densest items first, then map the
    /// selection back. Only changes running time, never the optimal value.
    pub sort_by_density: bool,
}

impl TryFrom<Map<String, Value>> for SolverConfig {
    type Error = serde_json::Error;

    fn try_from(v: Map<String, Value>) -> Result<Self, Self::Error> {
        from_value(Value::Object(v))
    }
}

impl SolverConfig {
    pub fn from_hyperparameters(hyperparameters: &Option<Map<String, Value>>) -> Result<Self> {
        let config = match hyperparameters {
            Some(params) => SolverConfig::try_from(params.clone())
                .map_err(|e| anyhow!("Invalid hyperparameters: {}", e))?,
            None => SolverConfig::default(),
        };
        debug!("solver config: {:?}", config);
        Ok(config)
    }
}

/// Runs `algorithm` on `data` and returns one flag per item.
pub fn solve<D: KnapsackData + ?Sized>(data: &D, algorithm: Algorithm) -> Vec<bool> {
    match algorithm {
        Algorithm::Exhaustive => solve_exhaustive(data),
        Algorithm::Dynamic => solve_dynamic(data),
        Algorithm::DynamicPacked => solve_dynamic_packed(data),
    }
}

pub fn solve_challenge(
    challenge: &Instance,
    save_solution: &dyn Fn(&[bool]) -> Result<()>,
    hyperparameters: &Option<Map<String, Value>>,
) -> Result<()> {
    let config = SolverConfig::from_hyperparameters(hyperparameters)?;

    let selection = if config.sort_by_density {
        let order = DensityOrder::of(challenge);
        if order.is_identity() {
            solve(challenge, config.algorithm)
        } else {
            let sorted = order.apply(challenge);
            order.restore(&solve(&sorted, config.algorithm))
        }
    } else {
        solve(challenge, config.algorithm)
    };

    save_solution(&selection)
}
