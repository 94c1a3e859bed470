pub mod git;
pub mod utils;
