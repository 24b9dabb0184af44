//! Parse-time series buffers
//!
//! Allocated once, to their final shape, as soon as the header is known
//! (two-phase construction: validate the shape, then allocate). The
//! velocity buffer carries four slots per cell from the start; slot 3
//! stays zero until the store derives |v| into it.

use nalgebra::Vector3;

pub type NVec3 = Vector3<f64>;

/// Raw day-major buffers filled by the record parser.
#[derive(Debug, Clone)]
pub struct RawSeries {
    pub position: Vec<Vec<NVec3>>, // [day][body]
    pub velocity: Vec<Vec<[f64; 4]>>, // [day][body], slot 3 = |v| once derived
    pub energy: Vec<[f64; 3]>, // [day], Wtot/Wkin/Wpot as written
}

impl RawSeries {
    /// Allocate all three series to the shapes the header dictates.
    pub fn allocate(n_days: usize, n_bodies: usize) -> Self {
        Self {
            position: vec![vec![NVec3::zeros(); n_bodies]; n_days],
            velocity: vec![vec![[0.0; 4]; n_bodies]; n_days],
            energy: vec![[0.0; 3]; n_days],
        }
    }
}
