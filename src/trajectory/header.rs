//! Run header parsed from the *P section
//!
//! The header fixes the shape of every series buffer that follows; nothing
//! may be written before it has been seen, and a second header is
//! unsupported.

use crate::error::ParseError;

/// Shape descriptor for a simulation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationHeader {
    pub n_days: usize, // number of time steps (rows per data section)
    pub n_bodies: usize, // planets + probes
    pub n_planets: usize, // leading bodies carrying real names
    pub t_step: f64, // simulation step size [d]
}

impl SimulationHeader {
    /// Build a header from the four *P fields and check its invariants.
    pub fn new(
        n_days: usize,
        n_bodies: usize,
        n_planets: usize,
        t_step: f64,
        line: usize,
    ) -> Result<Self, ParseError> {
        if n_days == 0 {
            return Err(ParseError::BadHeader {
                line,
                reason: "n_days must be positive".into(),
            });
        }
        if n_bodies == 0 {
            return Err(ParseError::BadHeader {
                line,
                reason: "n_bodies must be positive".into(),
            });
        }
        if n_planets > n_bodies {
            return Err(ParseError::BadHeader {
                line,
                reason: format!("n_planets = {n_planets} exceeds n_bodies = {n_bodies}"),
            });
        }

        Ok(Self {
            n_days,
            n_bodies,
            n_planets,
            t_step,
        })
    }

    /// Number of synthetic probes trailing the planets.
    pub fn n_probes(&self) -> usize {
        self.n_bodies - self.n_planets
    }
}
