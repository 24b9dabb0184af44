//! Body names and trajectory colors
//!
//! The first `n_planets` bodies take the canonical solar-system names and
//! an evenly spaced full-spectrum palette; the rest are numbered probes on
//! a white-to-gray ramp, so synthetic objects read differently at a glance.
//! The partition rule is part of the data model; the exact RGB values are
//! presentation, computed here to keep the viewer thin.

/// Canonical names for the leading real bodies, in simulation order.
pub const PLANET_NAMES: [&str; 10] = [
    "sun", "mercury", "venus", "earth", "mars", "jupiter", "saturn", "uranus", "neptune", "pluto",
];

/// Display name and trail color for one body.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyStyle {
    pub name: String,
    pub color: [f32; 3], // rgb in [0, 1], handed to the viewer as-is
}

/// Pure function of `(n_bodies, n_planets)`, in body index order.
/// Planets past the 10 known names fall back to `planet<i>` by index.
pub fn resolve_styles(n_bodies: usize, n_planets: usize) -> Vec<BodyStyle> {
    let n_probes = n_bodies.saturating_sub(n_planets);
    let mut styles = Vec::with_capacity(n_bodies);

    for i in 0..n_planets {
        let name = match PLANET_NAMES.get(i) {
            Some(known) => (*known).to_string(),
            None => format!("planet{i}"),
        };
        styles.push(BodyStyle {
            name,
            color: spectrum(spaced(i, n_planets, 1.0)),
        });
    }
    for k in 0..n_probes {
        styles.push(BodyStyle {
            name: format!("probe{k}"),
            color: grayscale(spaced(k, n_probes, 0.6)),
        });
    }

    styles
}

/// `count` samples evenly spread over `[0, max]`; a single sample sits at 0.
fn spaced(index: usize, count: usize, max: f32) -> f32 {
    if count < 2 {
        return 0.0;
    }
    max * index as f32 / (count - 1) as f32
}

/// Jet-like colormap: blue through cyan, green and yellow to red.
fn spectrum(t: f32) -> [f32; 3] {
    let r = (1.5 - (4.0 * t - 3.0).abs()).clamp(0.0, 1.0);
    let g = (1.5 - (4.0 * t - 2.0).abs()).clamp(0.0, 1.0);
    let b = (1.5 - (4.0 * t - 1.0).abs()).clamp(0.0, 1.0);
    [r, g, b]
}

/// White at 0 darkening toward black at 1.
fn grayscale(t: f32) -> [f32; 3] {
    let level = 1.0 - t;
    [level, level, level]
}
