mod cli;
mod config;
mod error;
mod validate;
mod workload;

pub mod prelude {
    pub use crate::cli::ArgumentParser;
    pub use crate::config::{Browser, RunConfiguration, RunScenario, DEFAULT_CREDENTIAL_PATH};
    pub use crate::error::{ParseError, WorkloadSourceError};
    pub use crate::workload::{Workload, WorkloadCatalog, WorkloadEntry};
}
