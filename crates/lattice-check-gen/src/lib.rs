pub mod config;
pub mod generate;
pub mod rng;

pub use config::GeneratorConfig;
pub use generate::{write_configs, ConfigGenerator, GenerateError, GeneratedRun};
