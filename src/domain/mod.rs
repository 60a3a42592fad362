//! Domain layer for the appdrawer crate.
//!
//! This module contains the core domain types for the list core, independent
//! of any collaborator concern (icon loading, persistence, rendering).
//!
//! # Organization
//!
//! - [`error`]: Error types and result alias
//! - [`locale`]: Display locale model driving collation and section grouping
//! - [`record`]: Application identity key and record

pub mod error;
pub mod locale;
pub mod record;

pub use error::{DrawerError, Result};
pub use locale::DisplayLocale;
pub use record::{AppKey, AppRecord};
