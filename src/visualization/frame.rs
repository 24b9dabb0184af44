//! Per-frame geometry derived from the trajectory store
//!
//! A frame is a pure function of `(store, styles, day)`: each body
//! contributes its trail prefix and its most recent point as a marker.
//! Deriving the same day twice against an unchanged store yields identical
//! geometry, so the animation driver may call this freely.

use crate::naming::resolver::BodyStyle;
use crate::trajectory::series::NVec3;
use crate::trajectory::store::TrajectoryStore;

/// Playback mode chosen at startup; the viewer never switches mid-run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackMode {
    Animating, // day advances 0 -> n_days under the external clock
    Static,    // single terminal frame at n_days
}

/// Geometry for one body at one day.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyFrame<'a> {
    pub trail: &'a [NVec3], // all positions up to the current day
    pub marker: Option<NVec3>, // most recent point, `None` on day 0
    pub color: [f32; 3],
    pub label: &'a str,
}

/// Everything the rendering surface needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameState<'a> {
    pub day: usize,
    pub counter: String, // "t = <day> d"
    pub bodies: Vec<BodyFrame<'a>>,
}

/// Derive the frame for `day`. Days past the end of the run are clamped so
/// a driver overshoot never reaches the rendering surface as an error.
pub fn render_frame<'a>(
    store: &'a TrajectoryStore,
    styles: &'a [BodyStyle],
    day: usize,
) -> FrameState<'a> {
    let day = day.min(store.header().n_days);
    let n_bodies = store.header().n_bodies;

    let mut bodies = Vec::with_capacity(n_bodies);
    for b in 0..n_bodies {
        // day is clamped and b < n_bodies, so the read cannot fail
        let trail = store.position_history(b, day).unwrap_or(&[]);
        bodies.push(BodyFrame {
            trail,
            marker: trail.last().copied(),
            color: styles.get(b).map(|s| s.color).unwrap_or([1.0, 1.0, 1.0]),
            label: styles.get(b).map(|s| s.name.as_str()).unwrap_or(""),
        });
    }

    FrameState {
        day,
        counter: format!("t = {day} d"),
        bodies,
    }
}
