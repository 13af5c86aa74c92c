pub mod generator;

pub use generator::{build_report, write_report};
