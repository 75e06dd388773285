pub mod case;
pub mod cli;
pub mod config;

pub use case::{to_camel_case, to_dot_case, to_kebab_case, to_snake_case};
pub use case::{CaseError, CaseStyle, Formatter, Policy};
pub use config::Config;

#[derive(Debug, Clone, Default)]
pub struct RunResult {
    pub converted_count: usize,
    pub failed_count: usize,
    pub conversions: Vec<Conversion>,
}

#[derive(Debug, Clone)]
pub struct Conversion {
    pub input: String,
    pub output: Option<String>,
    pub error: Option<String>,
}
