pub mod load;
pub mod report;
pub mod run;

pub use load::{load_configuration, load_output, LoadError};
pub use report::VerificationReport;
pub use run::{verify, verify_files, RunError, Verdict};
