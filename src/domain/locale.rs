//! Display locale model.
//!
//! The active display locale drives two things in the list core: the
//! case-insensitive title collation used by the ordering policy, and whether
//! sections need a second cross-letter grouping pass. Logographic scripts
//! mapped to phonetic buckets (currently Simplified Chinese) produce section
//! labels that do not follow raw title order, so the sorted app sequence must
//! be regrouped by section label after the title sort.

use serde::{Deserialize, Serialize};

use super::error::{DrawerError, Result};

/// A display locale parsed from a BCP-47-style tag (`language[-REGION]`).
///
/// Only the pieces the list core consumes are modeled: the lowercase language
/// subtag and the optional uppercase region subtag. The default locale is
/// `en-US`.
///
/// # Examples
///
/// ```
/// use appdrawer::DisplayLocale;
///
/// let locale = DisplayLocale::from_tag("zh-CN").unwrap();
/// assert_eq!(locale.language(), "zh");
/// assert!(locale.requires_section_sorting());
///
/// let default = DisplayLocale::default();
/// assert!(!default.requires_section_sorting());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayLocale {
    language: String,
    region: Option<String>,
}

impl DisplayLocale {
    /// Parses a locale tag of the form `language` or `language-REGION`.
    ///
    /// The language subtag must be non-empty and alphabetic; the region
    /// subtag, when present, must be non-empty. Subtag case is normalized
    /// (language to lowercase, region to uppercase).
    ///
    /// # Errors
    ///
    /// Returns [`DrawerError::Locale`] for an empty or malformed tag.
    pub fn from_tag(tag: &str) -> Result<Self> {
        let tag = tag.trim();
        if tag.is_empty() {
            return Err(DrawerError::Locale("empty locale tag".to_string()));
        }

        let mut parts = tag.splitn(2, |c| c == '-' || c == '_');
        let language = parts.next().unwrap_or_default();
        if language.is_empty() || !language.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(DrawerError::Locale(format!(
                "malformed language subtag in {tag:?}"
            )));
        }

        let region = match parts.next() {
            Some(r) if r.is_empty() => {
                return Err(DrawerError::Locale(format!(
                    "empty region subtag in {tag:?}"
                )));
            }
            Some(r) => Some(r.to_uppercase()),
            None => None,
        };

        Ok(Self {
            language: language.to_lowercase(),
            region,
        })
    }

    /// Returns the lowercase language subtag.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Returns the uppercase region subtag, if the tag carried one.
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Whether this locale needs the cross-letter section grouping pass.
    ///
    /// True for scripts whose section labels are phonetic buckets rather
    /// than leading glyphs, where label order diverges from title order.
    /// Currently Simplified Chinese, matching the platform behavior this
    /// core models.
    #[must_use]
    pub fn requires_section_sorting(&self) -> bool {
        self.language == "zh" && self.region.as_deref() == Some("CN")
    }
}

impl Default for DisplayLocale {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            region: Some("US".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_language_only() {
        let locale = DisplayLocale::from_tag("de").unwrap();
        assert_eq!(locale.language(), "de");
        assert_eq!(locale.region(), None);
    }

    #[test]
    fn normalizes_subtag_case() {
        let locale = DisplayLocale::from_tag("ZH-cn").unwrap();
        assert_eq!(locale.language(), "zh");
        assert_eq!(locale.region(), Some("CN"));
        assert!(locale.requires_section_sorting());
    }

    #[test]
    fn accepts_underscore_separator() {
        let locale = DisplayLocale::from_tag("zh_CN").unwrap();
        assert!(locale.requires_section_sorting());
    }

    #[test]
    fn rejects_empty_and_malformed_tags() {
        assert!(DisplayLocale::from_tag("").is_err());
        assert!(DisplayLocale::from_tag("  ").is_err());
        assert!(DisplayLocale::from_tag("-US").is_err());
        assert!(DisplayLocale::from_tag("en-").is_err());
        assert!(DisplayLocale::from_tag("e1").is_err());
    }

    #[test]
    fn only_simplified_chinese_groups_sections() {
        assert!(!DisplayLocale::from_tag("zh-TW").unwrap().requires_section_sorting());
        assert!(!DisplayLocale::from_tag("zh").unwrap().requires_section_sorting());
        assert!(!DisplayLocale::default().requires_section_sorting());
    }
}
