//! Editor settings - tunable interaction thresholds persisted as JSON.
//!
//! Settings live at `<config dir>/archboard/settings.json`. Missing fields
//! take their defaults, so older files keep loading as fields are added.

use crate::constants::{
    CURVE_MIN_OFFSET, CURVE_OFFSET_FACTOR, EDGE_HIT_WIDTH, PORT_HIT_RADIUS_PX,
    PORT_SNAP_THRESHOLD_PX, SNAP_GRID, WHEEL_ZOOM_SENSITIVITY,
};
use crate::routing::CurveStyle;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid settings file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No config directory available on this platform")]
    NoConfigDir,
}

pub type SettingsResult<T> = Result<T, SettingsError>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Grid size node drags snap to; 0 or 1 disables snapping
    pub snap_grid: f64,
    /// Screen-pixel radius for snapping a link endpoint to an input port
    pub snap_threshold_px: f64,
    /// Screen-pixel radius of port handles
    pub port_hit_radius_px: f64,
    /// World-unit stroke width of the invisible edge hit region
    pub edge_hit_width: f64,
    /// Scale change per wheel delta unit
    pub wheel_zoom_sensitivity: f64,
    pub curve_factor: f64,
    pub curve_min_offset: f64,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            snap_grid: SNAP_GRID,
            snap_threshold_px: PORT_SNAP_THRESHOLD_PX,
            port_hit_radius_px: PORT_HIT_RADIUS_PX,
            edge_hit_width: EDGE_HIT_WIDTH,
            wheel_zoom_sensitivity: WHEEL_ZOOM_SENSITIVITY,
            curve_factor: CURVE_OFFSET_FACTOR,
            curve_min_offset: CURVE_MIN_OFFSET,
        }
    }
}

impl EditorSettings {
    pub fn curve_style(&self) -> CurveStyle {
        CurveStyle {
            factor: self.curve_factor,
            min_offset: self.curve_min_offset,
        }
    }

    /// Quantize a world coordinate to the snap grid.
    #[inline]
    pub fn snap(&self, v: f64) -> f64 {
        if self.snap_grid > 1.0 {
            (v / self.snap_grid).round() * self.snap_grid
        } else {
            v
        }
    }

    /// Default settings path: `<config dir>/archboard/settings.json`
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("archboard").join("settings.json"))
            .ok_or(SettingsError::NoConfigDir)
    }

    /// Load from the default location, falling back to defaults on any error.
    pub fn load() -> Self {
        let path = match Self::default_path() {
            Ok(path) => path,
            Err(e) => {
                warn!("Using default settings: {}", e);
                return Self::default();
            }
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!(path = %path.display(), "Using default settings: {}", e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> SettingsResult<Self> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    pub fn save_to(&self, path: &Path) -> SettingsResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        info!(path = %path.display(), "Settings saved");
        Ok(())
    }
}
