pub(crate) mod generate;
pub(crate) mod validate;

/// Every check passed.
pub(crate) const EXIT_PASS: u8 = 0;
/// A fixture or safety property was violated.
pub(crate) const EXIT_VIOLATION: u8 = 1;
/// Input could not be read, parsed, or paired.
pub(crate) const EXIT_INPUT_ERROR: u8 = 2;
