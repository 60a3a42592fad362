//! The presentation list core.
//!
//! This module owns everything between the canonical application set and the
//! renderable flat sequence: the list builder, the closed presentation item
//! variants, the fast-scroll distribution strategies, and the change
//! notification seam.
//!
//! # Organization
//!
//! - [`builder`]: [`AlphabeticalAppList`], the mutators and rebuild pipeline
//! - [`items`]: presentation item variants and section markers
//! - [`fastscroll`]: touch fraction distribution strategies
//! - [`notifier`]: the single-callback change notification trait

pub mod builder;
pub mod fastscroll;
pub mod items;
pub mod notifier;

pub use builder::AlphabeticalAppList;
pub use fastscroll::FastScrollDistribution;
pub use items::{AppEntry, PresentationItem, SectionMarker};
pub use notifier::ListObserver;
