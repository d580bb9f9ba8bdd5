//! The shared winning-margin color scale.
//!
//! A quantile scale over a fixed signed-margin domain: Democrat margins are
//! negated by convention so one scale separates the blue and red hues.
//! Built once at startup and shared read-only by every view; the
//! party-to-hue mapping is a global invariant of the visualization, not a
//! per-year statistic, so the scale is never rebuilt on year change.

use bevy::prelude::*;

/// Plain sRGB triple. The domain crate stays render-free; the UI converts
/// these to its own color type at draw time.
pub type Rgb = [u8; 3];

/// Representative signed margins the quantile thresholds are drawn from.
pub const MARGIN_DOMAIN: [f64; 13] = [
    -70.0, -65.0, -60.0, -55.0, -50.0, -45.0, 0.0, 45.0, 50.0, 55.0, 60.0, 65.0, 70.0,
];

/// Twelve discrete bin colors: six blues (strong Democrat margin first)
/// then six reds (strong Republican margin last).
pub const MARGIN_COLORS: [Rgb; 12] = [
    [0x00, 0x66, 0xCC],
    [0x00, 0x80, 0xFF],
    [0x33, 0x99, 0xFF],
    [0x66, 0xB2, 0xFF],
    [0x99, 0xCC, 0xFF],
    [0xCC, 0xE5, 0xFF],
    [0xFF, 0xCC, 0xCC],
    [0xFF, 0x99, 0x99],
    [0xFF, 0x66, 0x66],
    [0xFF, 0x33, 0x33],
    [0xFF, 0x00, 0x00],
    [0xCC, 0x00, 0x00],
];

/// Fill for states an independent carried; independents have no place on
/// the margin scale.
pub const INDEPENDENT_FILL: Rgb = [0x00, 0x80, 0x00];

/// Quantile scale from signed margin to a discrete bin color.
///
/// Construction sorts the domain and computes `colors.len() - 1` thresholds
/// as linearly interpolated quantiles of the sorted domain; lookup bisects
/// the thresholds, so out-of-domain inputs clamp into the edge bins.
/// Stateless after construction.
#[derive(Resource, Debug, Clone)]
pub struct MarginScale {
    thresholds: Vec<f64>,
    colors: Vec<Rgb>,
}

impl MarginScale {
    pub fn new(domain: &[f64], colors: &[Rgb]) -> Self {
        let mut sorted: Vec<f64> = domain.to_vec();
        sorted.sort_by(f64::total_cmp);

        let bins = colors.len();
        let mut thresholds = Vec::new();
        if bins > 1 && !sorted.is_empty() {
            for i in 1..bins {
                thresholds.push(quantile_sorted(&sorted, i as f64 / bins as f64));
            }
        }
        Self {
            thresholds,
            colors: colors.to_vec(),
        }
    }

    /// The scale every chart shares: fixed domain, fixed palette.
    pub fn shared() -> Self {
        Self::new(&MARGIN_DOMAIN, &MARGIN_COLORS)
    }

    /// Index of the bin containing `margin`.
    pub fn bin_of(&self, margin: f64) -> usize {
        self.thresholds.partition_point(|t| *t <= margin)
    }

    /// Bin color for a signed margin.
    pub fn color_for(&self, margin: f64) -> Rgb {
        self.colors
            .get(self.bin_of(margin))
            .or_else(|| self.colors.first())
            .copied()
            .unwrap_or([0, 0, 0])
    }

    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }
}

/// Linearly interpolated quantile of an ascending-sorted slice at `p` in
/// `[0, 1]`, with h = (n-1)p.
fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let h = (n - 1) as f64 * p;
    let lo = (h.floor() as usize).min(n - 2);
    let frac = h - lo as f64;
    sorted[lo] + (sorted[lo + 1] - sorted[lo]) * frac
}
