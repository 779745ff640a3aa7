mod density;
mod error;
pub use density::DensityOrder;
pub use error::InstanceError;

use anyhow::{anyhow, Result};
use log::debug;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Read-only view of a 0-1 knapsack problem.
///
/// Solvers only go through this trait, so any item source can be plugged in.
/// Implementors must guarantee a positive capacity and positive values and
/// weights for every index in `0..num_items()`, and that the sum of all
/// values fits `u64` and the sum of all weights fits `usize`.
pub trait KnapsackData {
    fn num_items(&self) -> usize;
    fn capacity(&self) -> usize;
    fn value(&self, item: usize) -> u64;
    fn weight(&self, item: usize) -> usize;
}

impl<T: KnapsackData + ?Sized> KnapsackData for &T {
    fn num_items(&self) -> usize {
        (**self).num_items()
    }
    fn capacity(&self) -> usize {
        (**self).capacity()
    }
    fn value(&self, item: usize) -> u64 {
        (**self).value(item)
    }
    fn weight(&self, item: usize) -> usize {
        (**self).weight(item)
    }
}

/// A validated knapsack instance. Item order matters: solvers report
/// selections by position.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(try_from = "RawInstance")]
pub struct Instance {
    capacity: usize,
    values: Vec<u64>,
    weights: Vec<usize>,
}

#[derive(Deserialize)]
struct RawInstance {
    capacity: i64,
    values: Vec<i64>,
    weights: Vec<i64>,
}

impl TryFrom<RawInstance> for Instance {
    type Error = InstanceError;

    fn try_from(raw: RawInstance) -> Result<Self, Self::Error> {
        Instance::new(raw.capacity, raw.values, raw.weights)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Track {
    pub num_items: usize,
    /// Capacity as a percentage of the total weight of all items.
    pub budget: u32,
}

impl Instance {
    pub fn new(
        capacity: i64,
        values: Vec<i64>,
        weights: Vec<i64>,
    ) -> Result<Self, InstanceError> {
        if values.len() != weights.len() {
            return Err(InstanceError::LengthMismatch {
                values: values.len(),
                weights: weights.len(),
            });
        }
        let capacity = match usize::try_from(capacity) {
            Ok(c) if c > 0 => c,
            _ => return Err(InstanceError::InvalidCapacity(capacity)),
        };
        let mut total_value = 0u64;
        let values = values
            .into_iter()
            .enumerate()
            .map(|(index, value)| match u64::try_from(value) {
                Ok(v) if v > 0 => {
                    total_value = total_value
                        .checked_add(v)
                        .ok_or(InstanceError::ValueOverflow { index })?;
                    Ok(v)
                }
                _ => Err(InstanceError::InvalidValue { index, value }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        let mut total_weight = 0usize;
        let weights = weights
            .into_iter()
            .enumerate()
            .map(|(index, weight)| match usize::try_from(weight) {
                Ok(w) if w > 0 => {
                    total_weight = total_weight
                        .checked_add(w)
                        .ok_or(InstanceError::WeightOverflow { index })?;
                    Ok(w)
                }
                _ => Err(InstanceError::InvalidWeight { index, weight }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Instance {
            capacity,
            values,
            weights,
        })
    }

    pub fn values(&self) -> &[u64] {
        &self.values
    }

    pub fn weights(&self) -> &[usize] {
        &self.weights
    }

    pub fn generate_instance(seed: &[u8; 32], track: &Track) -> Result<Self> {
        if track.num_items == 0 {
            return Err(anyhow!("Track must have at least one item"));
        }
        if track.budget == 0 {
            return Err(anyhow!("Track budget must be positive"));
        }
        let mut rng = SmallRng::from_seed(*seed);

        // Generate weights w_i in the range [1, 50]
        let weights: Vec<usize> = (0..track.num_items)
            .map(|_| rng.gen_range(1..=50))
            .collect();

        // Generate values v_i in the range [1, 100]
        let values: Vec<u64> = (0..track.num_items)
            .map(|_| rng.gen_range(1..=100))
            .collect();

        let total_weight: usize = weights.iter().sum();
        let capacity = (total_weight as u64 * track.budget as u64 / 100).max(1) as usize;
        debug!(
            "generated instance with {} items, capacity {} ({}% of {})",
            track.num_items, capacity, track.budget, total_weight
        );

        Ok(Instance {
            capacity,
            values,
            weights,
        })
    }

    /// Value of `selection`, or an error if it is not a feasible selection for this instance.
    pub fn evaluate_total_value(&self, selection: &[bool]) -> Result<u64> {
        evaluate_total_value(self, selection)
    }
}

impl KnapsackData for Instance {
    fn num_items(&self) -> usize {
        self.values.len()
    }
    fn capacity(&self) -> usize {
        self.capacity
    }
    fn value(&self, item: usize) -> u64 {
        self.values[item]
    }
    fn weight(&self, item: usize) -> usize {
        self.weights[item]
    }
}

pub fn total_value<D: KnapsackData + ?Sized>(data: &D, selection: &[bool]) -> u64 {
    selection
        .iter()
        .enumerate()
        .filter(|(_, &included)| included)
        .map(|(item, _)| data.value(item))
        .sum()
}

pub fn total_weight<D: KnapsackData + ?Sized>(data: &D, selection: &[bool]) -> usize {
    selection
        .iter()
        .enumerate()
        .filter(|(_, &included)| included)
        .map(|(item, _)| data.weight(item))
        .sum()
}

pub fn selected_items(selection: &[bool]) -> Vec<usize> {
    selection
        .iter()
        .enumerate()
        .filter_map(|(i, &included)| if included { Some(i) } else { None })
        .collect()
}

pub fn evaluate_total_value<D: KnapsackData + ?Sized>(data: &D, selection: &[bool]) -> Result<u64> {
    if selection.len() != data.num_items() {
        return Err(anyhow!(
            "Selection has {} items instead of {}",
            selection.len(),
            data.num_items()
        ));
    }

    let total_weight = total_weight(data, selection);
    if total_weight > data.capacity() {
        return Err(anyhow!(
            "Total weight ({}) exceeded capacity ({})",
            total_weight,
            data.capacity()
        ));
    }

    Ok(total_value(data, selection))
}
