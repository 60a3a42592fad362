//! Error types for the appdrawer crate.
//!
//! This module defines the centralized error type [`DrawerError`] and a type
//! alias [`Result`] for convenient error handling, implemented with the
//! `thiserror` crate.
//!
//! The list core itself has no recoverable-error channel: its mutators are
//! total functions over their domains, and "search matched nothing" is data,
//! not an error. Errors arise only at the crate's configuration surface.

use thiserror::Error;

/// The main error type for appdrawer operations.
///
/// # Examples
///
/// ```
/// use appdrawer::{DisplayLocale, DrawerError};
///
/// let err = DisplayLocale::from_tag("").unwrap_err();
/// assert!(matches!(err, DrawerError::Locale(_)));
/// ```
#[derive(Debug, Error)]
pub enum DrawerError {
    /// A locale tag could not be parsed.
    ///
    /// The string describes which subtag was missing or malformed.
    #[error("Locale error: {0}")]
    Locale(String),
}

/// A specialized `Result` type for appdrawer operations.
pub type Result<T> = std::result::Result<T, DrawerError>;
