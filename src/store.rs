//! Persisted pane geometry.
//!
//! Four signed integers per profile name, stored in one JSON state file.
//! Missing files, missing profiles, and unparseable state all degrade to
//! the built-in defaults with a warning; only writes surface errors.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    DEFAULT_PANE_HEIGHT, DEFAULT_PANE_WIDTH, DEFAULT_PANE_X, DEFAULT_PANE_Y,
};
use crate::geometry::PaneRect;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("state file i/o error: {0}")]
    Io(#[from] io::Error),
    #[error("state encoding error: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct PaneState {
    #[serde(default = "default_width")]
    width: i32,
    #[serde(default = "default_height")]
    height: i32,
    #[serde(default)]
    x: i32,
    #[serde(default)]
    y: i32,
}

fn default_width() -> i32 {
    DEFAULT_PANE_WIDTH
}

fn default_height() -> i32 {
    DEFAULT_PANE_HEIGHT
}

impl Default for PaneState {
    fn default() -> Self {
        Self {
            width: DEFAULT_PANE_WIDTH,
            height: DEFAULT_PANE_HEIGHT,
            x: DEFAULT_PANE_X,
            y: DEFAULT_PANE_Y,
        }
    }
}

impl From<PaneRect> for PaneState {
    fn from(rect: PaneRect) -> Self {
        Self {
            width: rect.width,
            height: rect.height,
            x: rect.x,
            y: rect.y,
        }
    }
}

impl From<PaneState> for PaneRect {
    fn from(state: PaneState) -> Self {
        PaneRect::new(state.x, state.y, state.width, state.height)
    }
}

pub struct GeometryStore {
    path: PathBuf,
}

impl GeometryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Platform data directory, when one exists.
    pub fn default_path() -> Option<PathBuf> {
        dirs_next::data_dir().map(|dir| dir.join("term-shade").join("state.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the geometry saved under `profile`, or the defaults.
    pub fn load(&self, profile: &str) -> PaneRect {
        let state = self
            .read_all()
            .and_then(|mut profiles| profiles.remove(profile))
            .unwrap_or_default();
        state.into()
    }

    /// Save `rect` under `profile`, preserving other profiles in the file.
    pub fn save(&self, profile: &str, rect: PaneRect) -> Result<(), StoreError> {
        let mut profiles = self.read_all().unwrap_or_default();
        profiles.insert(profile.to_string(), rect.into());
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let body = serde_json::to_string_pretty(&profiles)?;
        fs::write(&self.path, body)?;
        tracing::debug!(path = %self.path.display(), profile, ?rect, "saved pane geometry");
        Ok(())
    }

    fn read_all(&self) -> Option<BTreeMap<String, PaneState>> {
        let body = match fs::read_to_string(&self.path) {
            Ok(body) => body,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return None,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "state file unreadable, using defaults");
                return None;
            }
        };
        match serde_json::from_str(&body) {
            Ok(profiles) => Some(profiles),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "state file malformed, using defaults");
                None
            }
        }
    }
}
