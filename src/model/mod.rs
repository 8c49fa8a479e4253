pub mod criteria;
pub mod matrix;
pub mod ranking;
