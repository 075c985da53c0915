//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the fields of a contact:
//! names, phone numbers and birthdays. These value objects provide
//! validation at construction time and prevent invalid data from being
//! represented in the address book.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use name::Name;
pub use phone::Phone;

/// A validated text value.
///
/// Every contact field is built from raw text, rejects text that breaks its
/// format rule, and exposes the accepted text unchanged.
pub trait Field: Sized {
    /// Human-readable field kind, used in log output.
    const KIND: &'static str;

    /// Parse and validate raw text.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` describing the rule the text breaks.
    fn parse(raw: &str) -> Result<Self, ValidationError>;

    /// The accepted text value.
    fn value(&self) -> &str;
}

/// Parse `raw` as field `F`, logging the rejection when it fails.
pub fn parse_field<F: Field>(raw: &str) -> Result<F, ValidationError> {
    match F::parse(raw) {
        Ok(field) => {
            tracing::trace!(field = F::KIND, value = field.value(), "Accepted field value");
            Ok(field)
        }
        Err(e) => {
            tracing::debug!(field = F::KIND, error = %e, "Rejected field value");
            Err(e)
        }
    }
}
