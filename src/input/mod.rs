pub mod decision;
pub mod results;
pub mod table;

pub use decision::load_decision_matrix;
pub use results::{RankedTable, load_ranked_table};
pub use table::TableFormat;
