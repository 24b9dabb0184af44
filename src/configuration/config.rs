//! Viewer configuration loaded from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of
//! the presentation settings the core never decides itself: playback mode,
//! view volume, camera orientation and animation speed.
//!
//! # YAML format
//! An example `viewer.yaml` matching these types:
//!
//! ```yaml
//! mode: "animate"       # or "static" to draw only the final frame
//! axis_limit: 1.0       # half-extent of the view volume [au]
//!
//! camera:
//!   elevation: 90.0     # degrees above the orbital plane
//!   azimuth: 0.0        # degrees around the z axis
//!
//! days_per_second: 30.0 # animation speed in animate mode
//! ```
//!
//! Every field has a default matching the simulator's own viewer: a
//! top-down static view of the unit box.

use serde::Deserialize;

use crate::visualization::frame::PlaybackMode;

/// Whether the viewer animates through the run or draws the last frame.
/// `mode: "animate"` or `mode: "static"`
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum ModeConfig {
    #[serde(rename = "animate")] // day advances under the frame clock
    Animate,

    #[serde(rename = "static")] // single terminal frame showing the full run
    Static,
}

/// Point-of-view at startup, in degrees.
#[derive(Deserialize, Debug, Clone)]
pub struct CameraConfig {
    pub elevation: f64, // degrees above the orbital plane
    pub azimuth: f64, // degrees around the z axis
}

/// Top-level viewer configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ViewerConfig {
    pub mode: ModeConfig, // animate the run or draw only the last day
    pub axis_limit: f64, // half-extent of the view volume
    pub camera: CameraConfig, // point-of-view at startup
    pub days_per_second: f64, // frame clock for animate mode
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            mode: ModeConfig::Static,
            axis_limit: 1.0,
            camera: CameraConfig {
                elevation: 90.0,
                azimuth: 0.0,
            },
            days_per_second: 30.0,
        }
    }
}

impl ViewerConfig {
    pub fn playback_mode(&self) -> PlaybackMode {
        match self.mode {
            ModeConfig::Animate => PlaybackMode::Animating,
            ModeConfig::Static => PlaybackMode::Static,
        }
    }
}
