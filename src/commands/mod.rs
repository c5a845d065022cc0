pub mod generate;

pub use generate::{GenerateOptions, run};
