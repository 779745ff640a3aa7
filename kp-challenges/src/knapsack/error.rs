use thiserror::Error;

/// Reasons an [`Instance`](super::Instance) can be rejected at construction.
///
/// Values are checked before weights, each by index, so the first failing
/// constraint is reported. A total that no longer fits is reported at the
/// item that overflows it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InstanceError {
    #[error("inconsistent number of items: {values} values and {weights} weights")]
    LengthMismatch { values: usize, weights: usize },
    #[error("invalid ({0}) capacity")]
    InvalidCapacity(i64),
    #[error("item {index} has invalid value {value}")]
    InvalidValue { index: usize, value: i64 },
    #[error("item {index} has invalid weight {weight}")]
    InvalidWeight { index: usize, weight: i64 },
    #[error("total value overflows at item {index}")]
    ValueOverflow { index: usize },
    #[error("total weight overflows at item {index}")]
    WeightOverflow { index: usize },
}
