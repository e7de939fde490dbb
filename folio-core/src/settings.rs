//! Runtime settings, read from TOML. Every key is optional.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::counter::DEFAULT_DURATION_MS;
use crate::scroll::DEFAULT_SHADE_THRESHOLD;

pub const MIN_FPS: u32 = 1;
pub const MAX_FPS: u32 = 240;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    /// Counter animation length.
    pub duration_ms: u64,
    /// Target repaint rate of the event loop.
    pub fps: u32,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_DURATION_MS,
            fps: 60,
        }
    }
}

impl AnimationSettings {
    /// Time between repaints, with `fps` clamped to 1..=240.
    pub fn frame_interval(&self) -> Duration {
        let fps = self.fps.clamp(MIN_FPS, MAX_FPS);
        Duration::from_millis(u64::from(1000 / fps))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollSettings {
    /// Rows scrolled before the navigation bar is shaded.
    pub shade_threshold: u16,
}

impl Default for ScrollSettings {
    fn default() -> Self {
        Self {
            shade_threshold: DEFAULT_SHADE_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Profile file replacing the built-in content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<PathBuf>,
    pub animation: AnimationSettings,
    pub scroll: ScrollSettings,
}

impl Settings {
    /// `<config dir>/folio/config.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("folio").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let s = Settings::default();
        assert_eq!(s.animation.duration_ms, 2000);
        assert_eq!(s.animation.fps, 60);
        assert_eq!(s.scroll.shade_threshold, 50);
        assert!(s.profile.is_none());
    }

    #[test]
    fn frame_interval_clamps_fps() {
        let mut a = AnimationSettings::default();
        assert_eq!(a.frame_interval(), Duration::from_millis(16));
        a.fps = 0;
        assert_eq!(a.frame_interval(), Duration::from_millis(1000));
        a.fps = 10_000;
        assert_eq!(a.frame_interval(), Duration::from_millis(4));
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let s: Settings = toml::from_str("[animation]\nfps = 30\n").unwrap();
        assert_eq!(s.animation.fps, 30);
        assert_eq!(s.animation.duration_ms, 2000);
        assert_eq!(s.scroll, ScrollSettings::default());
    }
}
