pub mod properties;
pub mod validate;
pub mod violation;

pub use properties::{audit_outputs, check_outputs, validate_outputs};
pub use validate::{audit_configs, check_configs, validate_configs};
pub use violation::{CheckMode, Violation, ViolationKind};
