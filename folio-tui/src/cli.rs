//! Command-line flags. Flags given here override the settings file.

use std::path::PathBuf;

use clap::Parser;

use folio_core::Settings;

#[derive(Debug, Parser)]
#[command(name = "folio", version, about = "Terminal portfolio page")]
pub struct Cli {
    /// Settings file (default: <config dir>/folio/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Profile TOML to show instead of the built-in content
    #[arg(long)]
    pub profile: Option<PathBuf>,

    /// Counter animation length in milliseconds
    #[arg(long)]
    pub duration_ms: Option<u64>,

    /// Repaint rate (clamped to 1..=240)
    #[arg(long)]
    pub fps: Option<u32>,

    /// Log file (default: <cache dir>/folio/folio.log)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Print the effective profile as TOML and exit
    #[arg(long, default_value_t = false)]
    pub print_profile: bool,

    /// Debug-level logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Cli {
    pub fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(ms) = self.duration_ms {
            settings.animation.duration_ms = ms;
        }
        if let Some(fps) = self.fps {
            settings.animation.fps = fps;
        }
        if let Some(profile) = &self.profile {
            settings.profile = Some(profile.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_changes_nothing() {
        let cli = Cli::try_parse_from(["folio"]).unwrap();
        let mut settings = Settings::default();
        cli.apply_overrides(&mut settings);
        assert_eq!(settings, Settings::default());
        assert!(!cli.print_profile);
    }

    #[test]
    fn flags_override_settings() {
        let cli = Cli::try_parse_from([
            "folio",
            "--duration-ms",
            "500",
            "--fps",
            "30",
            "--profile",
            "me.toml",
            "-v",
        ])
        .unwrap();
        let mut settings = Settings::default();
        settings.profile = Some("other.toml".into());
        cli.apply_overrides(&mut settings);
        assert_eq!(settings.animation.duration_ms, 500);
        assert_eq!(settings.animation.fps, 30);
        assert_eq!(settings.profile, Some(PathBuf::from("me.toml")));
        assert!(cli.verbose);
    }

    #[test]
    fn rejects_non_numeric_fps() {
        assert!(Cli::try_parse_from(["folio", "--fps", "fast"]).is_err());
    }
}
