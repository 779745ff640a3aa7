use kp_challenges::knapsack::KnapsackData;
use log::{debug, trace};

/// (Almost) exhaustive search of all selections, guaranteed optimal.
///
/// The bound ignores weights, so pruning is only effective when dense items
/// come first. Reordering is left to the caller.
pub fn solve_exhaustive<D: KnapsackData + ?Sized>(data: &D) -> Vec<bool> {
    let num_items = data.num_items();
    let search = Search {
        data,
        remaining_values: remaining_values(data),
    };

    // the empty selection is the baseline
    let mut best_so_far = PartialSolution::empty(num_items);
    let mut current = PartialSolution::empty(num_items);
    let mut nodes = 0usize;
    for item in 0..num_items {
        search.branch_bound(item, &mut current, &mut best_so_far, &mut nodes);
        trace!(
            "exhaustive: first item {} done, best value {} after {} nodes",
            item,
            best_so_far.value,
            nodes
        );
    }
    debug!(
        "exhaustive: {} items, capacity {}, best value {}, {} nodes visited",
        num_items,
        data.capacity(),
        best_so_far.value,
        nodes
    );

    best_so_far.selection
}

/// `remaining[i]` is the sum of values of items strictly after `i`.
fn remaining_values<D: KnapsackData + ?Sized>(data: &D) -> Vec<u64> {
    let mut remaining = vec![0u64; data.num_items()];
    for i in (0..data.num_items().saturating_sub(1)).rev() {
        remaining[i] = remaining[i + 1] + data.value(i + 1);
    }
    remaining
}

struct Search<'a, D: KnapsackData + ?Sized> {
    data: &'a D,
    remaining_values: Vec<u64>,
}

impl<D: KnapsackData + ?Sized> Search<'_, D> {
    /// Puts `item` in the bag and explores every continuation from there.
    /// `item == num_items` means `current` is complete.
    fn branch_bound(
        &self,
        item: usize,
        current: &mut PartialSolution,
        best_so_far: &mut PartialSolution,
        nodes: &mut usize,
    ) {
        *nodes += 1;
        if item >= self.data.num_items() {
            if current.value > best_so_far.value {
                best_so_far.copy_from(current);
            }
            return;
        }

        current.select_item(self.data, item);
        if current.weight > self.data.capacity()
            || current.value + self.remaining_values[item] <= best_so_far.value
        {
            current.unselect_item(self.data, item);
            return;
        }

        for next in item..self.data.num_items() {
            self.branch_bound(next + 1, current, best_so_far, nodes);
        }

        current.unselect_item(self.data, item);
    }
}

#[derive(Debug, Clone)]
struct PartialSolution {
    selection: Vec<bool>,
    value: u64,
    weight: usize,
}

impl PartialSolution {
    fn empty(num_items: usize) -> Self {
        PartialSolution {
            selection: vec![false; num_items],
            value: 0,
            weight: 0,
        }
    }

    fn select_item<D: KnapsackData + ?Sized>(&mut self, data: &D, item: usize) {
        self.selection[item] = true;
        self.value += data.value(item);
        self.weight += data.weight(item);
    }

    fn unselect_item<D: KnapsackData + ?Sized>(&mut self, data: &D, item: usize) {
        self.selection[item] = false;
        self.value -= data.value(item);
        self.weight -= data.weight(item);
    }

    fn copy_from(&mut self, other: &PartialSolution) {
        self.selection.copy_from_slice(&other.selection);
        self.value = other.value;
        self.weight = other.weight;
    }
}
