pub mod config;
pub mod engine;
pub mod error;
pub mod record;
pub mod replacer;
pub mod stats;
pub mod storage;

#[cfg(test)]
mod tests;

pub use config::{IndexOptions, SimConfig, Strategy};
pub use engine::{Access, Engine};
pub use error::{ConfigError, IndexError, RecordError, SimError, UnknownOperation};
pub use record::{Operation, Record, RecordFormat, RecordReader};
pub use stats::{Report, Stats};
