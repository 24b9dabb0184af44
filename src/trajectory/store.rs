//! Post-parse trajectory data, read-only for the rest of the program
//!
//! Construction runs the two one-time transforms: the day-major to
//! body-major reindex of positions (so a body's whole trail is one
//! contiguous slice) and the velocity-norm derivation into slot 3.

use crate::error::StoreError;
use crate::trajectory::header::SimulationHeader;
use crate::trajectory::series::{NVec3, RawSeries};

/// All series of a fully-parsed run. No module-level state: every read
/// goes through an instance of this store.
#[derive(Debug, Clone)]
pub struct TrajectoryStore {
    header: SimulationHeader,
    trails: Vec<Vec<NVec3>>, // [body][day] position, body-major
    velocity: Vec<Vec<[f64; 4]>>, // [day][body], slot 3 = |v|
    energy: Vec<[f64; 3]>, // [day]
}

impl TrajectoryStore {
    /// Take ownership of the raw buffers and run both transforms.
    pub fn from_raw(header: SimulationHeader, raw: RawSeries) -> Self {
        // Reindex [day][body] -> [body][day]. Values move, none change.
        let mut trails: Vec<Vec<NVec3>> = (0..header.n_bodies)
            .map(|_| Vec::with_capacity(header.n_days))
            .collect();
        for day_row in &raw.position {
            for (b, p) in day_row.iter().enumerate() {
                trails[b].push(*p);
            }
        }

        // Fill |v| into slot 3 for every (day, body) pair.
        let mut velocity = raw.velocity;
        for day_row in velocity.iter_mut() {
            for cell in day_row.iter_mut() {
                cell[3] = NVec3::new(cell[0], cell[1], cell[2]).norm();
            }
        }

        Self {
            header,
            trails,
            velocity,
            energy: raw.energy,
        }
    }

    pub fn header(&self) -> &SimulationHeader {
        &self.header
    }

    /// Prefix of a body's trail: the first `upto_day` points, in file
    /// order. `upto_day` is a length, so `0..=n_days` are all valid.
    pub fn position_history(&self, body: usize, upto_day: usize) -> Result<&[NVec3], StoreError> {
        let trail = self.trails.get(body).ok_or(StoreError::IndexOutOfRange {
            what: "body",
            index: body,
            len: self.header.n_bodies,
        })?;
        if upto_day > trail.len() {
            return Err(StoreError::IndexOutOfRange {
                what: "day",
                index: upto_day,
                len: trail.len(),
            });
        }
        Ok(&trail[..upto_day])
    }

    /// Derived Euclidean norm of the velocity vector at `(day, body)`.
    pub fn velocity_magnitude(&self, day: usize, body: usize) -> Result<f64, StoreError> {
        let day_row = self.velocity.get(day).ok_or(StoreError::IndexOutOfRange {
            what: "day",
            index: day,
            len: self.header.n_days,
        })?;
        let cell = day_row.get(body).ok_or(StoreError::IndexOutOfRange {
            what: "body",
            index: body,
            len: self.header.n_bodies,
        })?;
        Ok(cell[3])
    }

    /// Energy triple for one day, verbatim from the file.
    pub fn energy_at(&self, day: usize) -> Result<[f64; 3], StoreError> {
        self.energy
            .get(day)
            .copied()
            .ok_or(StoreError::IndexOutOfRange {
                what: "day",
                index: day,
                len: self.header.n_days,
            })
    }
}
