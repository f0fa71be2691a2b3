//! Domain types and validation for the vendora supplier admin client.
//!
//! Pure data and logic only: supplier records, form drafts, and the
//! field-level validation rules the backend expects drafts to satisfy.
//! No I/O and no async — the HTTP side lives in `vendora-client`.

pub mod supplier;
pub mod validation;
