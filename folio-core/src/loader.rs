//! Settings and profile loading from disk.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::domain::Profile;
use crate::error::FolioError;
use crate::settings::Settings;

fn read_toml<T: DeserializeOwned>(path: &Path) -> Result<T, FolioError> {
    let content = std::fs::read_to_string(path).map_err(|source| FolioError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| FolioError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load settings.
///
/// An explicit path must exist. Without one, the platform default location
/// is used if present, otherwise built-in defaults.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings, FolioError> {
    if let Some(path) = explicit {
        let settings = read_toml(path)?;
        info!(path = %path.display(), "settings loaded");
        return Ok(settings);
    }
    match Settings::default_path() {
        Some(path) if path.is_file() => {
            let settings = read_toml(&path)?;
            info!(path = %path.display(), "settings loaded");
            Ok(settings)
        }
        _ => {
            debug!("no settings file, using defaults");
            Ok(Settings::default())
        }
    }
}

/// Read and validate a profile file.
pub fn load_profile(path: &Path) -> Result<Profile, FolioError> {
    let profile: Profile = read_toml(path)?;
    profile.validate()?;
    Ok(profile)
}

/// Where the page content comes from. Kept so the profile can be reloaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileSource {
    Builtin,
    File(PathBuf),
}

impl ProfileSource {
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map_or(ProfileSource::Builtin, ProfileSource::File)
    }

    pub fn load(&self) -> Result<Profile, FolioError> {
        match self {
            ProfileSource::Builtin => Ok(Profile::builtin()),
            ProfileSource::File(path) => {
                let profile = load_profile(path)?;
                info!(path = %path.display(), name = %profile.name, "profile loaded");
                Ok(profile)
            }
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, ProfileSource::File(_))
    }
}

impl fmt::Display for ProfileSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileSource::Builtin => write!(f, "built-in profile"),
            ProfileSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_source_loads() {
        let p = ProfileSource::Builtin.load().unwrap();
        assert_eq!(p.timeline.len(), 3);
        assert!(!ProfileSource::Builtin.is_file());
    }

    #[test]
    fn missing_explicit_settings_is_io_error() {
        let err = load_settings(Some(Path::new("/nonexistent/folio/config.toml"))).unwrap_err();
        assert!(matches!(err, FolioError::Io { .. }));
    }

    #[test]
    fn source_from_path() {
        assert_eq!(ProfileSource::from_path(None), ProfileSource::Builtin);
        let src = ProfileSource::from_path(Some(PathBuf::from("me.toml")));
        assert!(src.is_file());
        assert_eq!(src.to_string(), "me.toml");
    }
}
