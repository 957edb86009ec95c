pub mod batch;
pub mod ranking;

pub use batch::{load_rows, read_rows, BatchFile, BatchRow, RejectedRow};
pub use ranking::{compare, compare_batch, rank, Comparison, ScoredFood};
