// SPDX-License-Identifier: MPL-2.0
//! This module handles magnifier configuration: the per-profile overrides a
//! page passes to the widget, and loading/saving them as a `lens.toml` file
//! for the `magnify-lens` inspector.
//!
//! # Examples
//!
//! ```no_run
//! use magnify_lens::config::{self, MagnifierOptions};
//! use magnify_lens::lens::ProfileOverride;
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut options = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! options.desktop = Some(ProfileOverride { scale: Some(3.0), ..Default::default() });
//!
//! // Save to a specific path
//! let path = PathBuf::from("./lens.toml");
//! config::save_to_path(&options, &path).expect("Failed to save config");
//! let loaded = config::load_from_path(&path).expect("Failed to load config");
//! assert_eq!(loaded, options);
//! ```

pub mod defaults;
pub mod source;

pub use source::{OptionSource, RawValue};

use crate::error::Result;
use crate::lens::{Profile, ProfileOverride, Profiles};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "lens.toml";
const APP_NAME: &str = "MagnifyLens";

/// Per-profile overrides, merged over the desktop and mobile defaults.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MagnifierOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desktop: Option<ProfileOverride>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<ProfileOverride>,
}

impl MagnifierOptions {
    /// Merges the overrides over the defaults, failing on any invalid value.
    pub fn resolve(&self) -> Result<Profiles> {
        Ok(Profiles {
            desktop: merge(Profile::desktop(), self.desktop.as_ref())?,
            mobile: merge(Profile::mobile(), self.mobile.as_ref())?,
        })
    }

    /// Merges the overrides over the defaults, skipping invalid values.
    #[must_use]
    pub fn resolve_lenient(&self) -> Profiles {
        let lenient = |base: Profile, overrides: Option<&ProfileOverride>| match overrides {
            Some(overrides) => base.merged_lenient(overrides),
            None => base,
        };
        Profiles {
            desktop: lenient(Profile::desktop(), self.desktop.as_ref()),
            mobile: lenient(Profile::mobile(), self.mobile.as_ref()),
        }
    }
}

fn merge(base: Profile, overrides: Option<&ProfileOverride>) -> Result<Profile> {
    match overrides {
        Some(overrides) => base.merged(overrides),
        None => Ok(base),
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads options from the user config directory, or defaults when absent.
pub fn load() -> Result<MagnifierOptions> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(MagnifierOptions::default())
}

/// Loads options from `path`.
///
/// Unlike the page-facing options, a malformed file or an invalid profile
/// value is an error.
pub fn load_from_path(path: &Path) -> Result<MagnifierOptions> {
    let content = fs::read_to_string(path)?;
    let options: MagnifierOptions = toml::from_str(&content)?;
    options.resolve()?;
    tracing::debug!(path = %path.display(), "loaded lens config");
    Ok(options)
}

pub fn save_to_path(options: &MagnifierOptions, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(options)?;
    fs::write(path, content)?;
    Ok(())
}
