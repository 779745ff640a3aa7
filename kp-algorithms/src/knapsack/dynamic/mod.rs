mod matrix;
pub use matrix::{BoolMatrix, DenseBoolMatrix, PackedBoolMatrix};

use kp_challenges::knapsack::KnapsackData;
use log::debug;

/// Dynamic programming over a dense change matrix.
/// Fast, but costs `O(num_items * capacity)` bytes.
pub fn solve_dynamic<D: KnapsackData + ?Sized>(data: &D) -> Vec<bool> {
    solve_with_matrix::<DenseBoolMatrix, D>(data)
}

/// Same as [`solve_dynamic`] with a bit-packed change matrix:
/// about eight times less memory, slower per access.
pub fn solve_dynamic_packed<D: KnapsackData + ?Sized>(data: &D) -> Vec<bool> {
    solve_with_matrix::<PackedBoolMatrix, D>(data)
}

/// Builds the change matrix in storage `M`, then reads the selection back from it.
///
/// Items are rows (item `i` is row `i + 1`) and capacities are columns.
pub fn solve_with_matrix<M: BoolMatrix, D: KnapsackData + ?Sized>(data: &D) -> Vec<bool> {
    let mut changes = M::zeros(data.num_items() + 1, data.capacity() + 1);
    let best_value = build_change_matrix(&mut changes, data);
    debug!(
        "dynamic: {} items, capacity {}, best value {}, {} changes in a {} bytes matrix",
        data.num_items(),
        data.capacity(),
        best_value,
        changes.count_ones(),
        changes.size_in_bytes()
    );
    read_selection(&changes, data)
}

/// Fills `changes` and returns the optimal value.
///
/// `changes[i + 1][w]` is set iff taking item `i` strictly improved the best
/// value of the first `i + 1` items under capacity `w`. Row 0 is never
/// written and `changes` must start out all `false`.
pub fn build_change_matrix<M: BoolMatrix + ?Sized, D: KnapsackData + ?Sized>(
    changes: &mut M,
    data: &D,
) -> u64 {
    let capacity = data.capacity();
    debug_assert_eq!(changes.rows(), data.num_items() + 1);
    debug_assert_eq!(changes.cols(), capacity + 1);

    let mut current_values = vec![0u64; capacity + 1];
    let mut next_values = vec![0u64; capacity + 1];

    for i in 0..data.num_items() {
        let wi = data.weight(i);
        let vi = data.value(i);

        for w in 0..=capacity {
            if wi <= w && current_values[w] < current_values[w - wi] + vi {
                next_values[w] = current_values[w - wi] + vi;
                changes.set(i + 1, w, true);
            } else {
                next_values[w] = current_values[w];
            }
        }

        // every cell of next_values is rewritten on the following item
        std::mem::swap(&mut current_values, &mut next_values);
    }

    current_values[capacity]
}

/// Walks the change matrix back from `(num_items, capacity)`.
pub fn read_selection<M: BoolMatrix + ?Sized, D: KnapsackData + ?Sized>(
    changes: &M,
    data: &D,
) -> Vec<bool> {
    let mut selection = vec![false; data.num_items()];

    let mut row = data.num_items();
    let mut column = data.capacity();

    while row != 0 && column != 0 {
        // move to the last item that changed the optimum at this capacity
        while row != 0 && !changes.get(row, column) {
            row -= 1;
        }
        if row == 0 {
            break;
        }

        let item = row - 1;
        selection[item] = true;
        column -= data.weight(item);
        row -= 1;
    }

    selection
}
