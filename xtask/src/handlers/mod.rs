pub mod release;
pub mod run;
pub mod testing;
