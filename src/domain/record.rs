//! Application record domain model.
//!
//! This module defines [`AppKey`], the stable identity of an installed
//! application, and [`AppRecord`], the immutable per-application record the
//! list core sorts, sections, and presents. Records arrive in batches from an
//! external application registry (install/update/remove deltas) and are never
//! mutated in place; an update replaces the whole record under the same key.

use serde::{Deserialize, Serialize};

/// Stable identity of an installed application.
///
/// Combines the application's component reference with the owning user
/// profile, making the key unique across work/personal profiles that install
/// the same package. Keys are the unit of addressing for merges, removals,
/// and search-result filters.
///
/// The derived `Ord` doubles as the deterministic tie-break used by the
/// ordering policy: two records with equal titles always keep the same
/// relative order across rebuilds.
///
/// # Examples
///
/// ```
/// use appdrawer::AppKey;
///
/// let key = AppKey::new("com.example.mail/.MailActivity", 0);
/// assert_eq!(key.user, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AppKey {
    /// Component reference, e.g. `"com.example.mail/.MailActivity"`.
    pub component: String,

    /// Owning user profile identifier.
    pub user: u32,
}

impl AppKey {
    /// Creates a key from a component reference and user profile id.
    #[must_use]
    pub fn new(component: impl Into<String>, user: u32) -> Self {
        Self {
            component: component.into(),
            user,
        }
    }
}

/// Immutable record describing one installed application.
///
/// A record carries its identity key, the localized display title the
/// ordering policy and section indexer operate on, and an opaque payload the
/// core never inspects (icon handles, launch metadata, badges). Records are
/// replaced wholesale on update: the same [`AppKey`] may map to a new record
/// instance after an app update changes its title.
///
/// # Examples
///
/// ```
/// use appdrawer::AppRecord;
///
/// let record = AppRecord::new("com.example.mail/.MailActivity", 0, "Mail");
/// assert_eq!(record.title, "Mail");
/// assert!(record.payload.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppRecord {
    /// Unique identity key (component + user profile).
    pub key: AppKey,

    /// Localized display title.
    pub title: String,

    /// Opaque collaborator payload; never read by the list core.
    pub payload: Option<serde_json::Value>,
}

impl AppRecord {
    /// Creates a record with no payload.
    #[must_use]
    pub fn new(component: impl Into<String>, user: u32, title: impl Into<String>) -> Self {
        Self {
            key: AppKey::new(component, user),
            title: title.into(),
            payload: None,
        }
    }

    /// Attaches an opaque payload, consuming and returning the record.
    #[must_use]
    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = Some(payload);
        self
    }
}
