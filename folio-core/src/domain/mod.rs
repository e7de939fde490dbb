//! Content records for the portfolio page.
//!
//! Everything here is immutable once built. The page owns one `Profile` and
//! hands read-only slices of it to the units that render it.

mod profile;

pub use profile::{ContactKind, ContactLink, Icon, Profile, SkillGroup, Stat, TimelineEntry};
