pub mod criteria;
pub mod table;

pub use criteria::{Criteria, DegenerateRowPolicy, Impact};
pub use table::DecisionTable;
