//! Folio Core — the portfolio page model, independent of any terminal backend.
//!
//! This crate holds:
//! - Content records (profile, contacts, stats, skill groups, timeline entries)
//! - The built-in profile shipped with the binary
//! - A one-shot frame scheduler with cancellable requests
//! - The animated counter unit and its lifecycle hooks
//! - The expandable timeline unit and its view model
//! - Hover state and the scroll-driven navigation shade
//! - Settings and profile loading from TOML

pub mod content;
pub mod counter;
pub mod domain;
pub mod error;
pub mod frame;
pub mod hover;
pub mod loader;
pub mod scroll;
pub mod settings;
pub mod timeline;

pub use counter::{AnimatedCounter, CounterSpec, CounterState, DEFAULT_DURATION_MS};
pub use domain::{ContactKind, ContactLink, Icon, Profile, SkillGroup, Stat, TimelineEntry};
pub use error::FolioError;
pub use frame::{CancelToken, DueFrames, FrameQueue, FrameScheduler, FrameTime};
pub use hover::HoverState;
pub use scroll::ScrollShade;
pub use settings::Settings;
pub use timeline::{ExpandState, TimelineItem, TimelineView};
