use super::{Instance, KnapsackData};

/// Permutation putting the densest items (highest value per unit of weight) first.
///
/// `order[k]` is the original index of the item placed at position `k`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DensityOrder {
    order: Vec<usize>,
}

impl DensityOrder {
    pub fn of<D: KnapsackData + ?Sized>(data: &D) -> Self {
        // Compare v_a / w_a against v_b / w_b without leaving integers
        let mut order: Vec<usize> = (0..data.num_items()).collect();
        order.sort_by(|&a, &b| {
            let lhs = data.value(b) as u128 * data.weight(a) as u128;
            let rhs = data.value(a) as u128 * data.weight(b) as u128;
            lhs.cmp(&rhs)
        });
        DensityOrder { order }
    }

    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn is_identity(&self) -> bool {
        self.order.iter().enumerate().all(|(k, &i)| k == i)
    }

    /// Builds the instance with items laid out in density order.
    ///
    /// Only a validated [`Instance`] is reordered, so the copy keeps its invariants.
    pub fn apply(&self, instance: &Instance) -> Instance {
        debug_assert_eq!(self.order.len(), instance.num_items());
        Instance {
            capacity: instance.capacity,
            values: self.order.iter().map(|&i| instance.values[i]).collect(),
            weights: self.order.iter().map(|&i| instance.weights[i]).collect(),
        }
    }

    /// Maps a selection over the reordered instance back to original positions.
    pub fn restore(&self, selection: &[bool]) -> Vec<bool> {
        let mut restored = vec![false; self.order.len()];
        for (&original, &selected) in self.order.iter().zip(selection) {
            restored[original] = selected;
        }
        restored
    }
}
