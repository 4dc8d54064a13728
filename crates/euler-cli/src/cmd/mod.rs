pub mod completions;
pub mod random;
pub mod solve;
