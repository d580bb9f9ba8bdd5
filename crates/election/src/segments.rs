//! Stacked-segment layout for horizontal bar charts.
//!
//! Converts an ordered list of weighted items into cumulative fractional
//! offsets: one deterministic pass, O(n), no normalization beyond the
//! floating-point summation (n is bounded by the 50-state cardinality).

/// One contiguous fractional slice of a stacked bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment<K> {
    pub key: K,
    /// Fraction of the total at which this segment begins, in `[0, 1]`.
    pub start: f64,
    /// Fraction of the total this segment covers.
    pub width: f64,
}

/// Lay out `items` as a stacked bar.
///
/// Segments are emitted in input order; the first starts at 0, each start
/// equals the previous start plus the previous width, and the widths sum to
/// 1 within floating-point tolerance. A non-positive total weight produces
/// an empty layout since there is nothing to draw.
pub fn stack<K>(items: impl IntoIterator<Item = (K, f64)>) -> Vec<Segment<K>> {
    let items: Vec<(K, f64)> = items.into_iter().collect();
    let total: f64 = items.iter().map(|(_, w)| w).sum();
    if !(total > 0.0) {
        return Vec::new();
    }

    let mut cumulative = 0.0;
    items
        .into_iter()
        .map(|(key, weight)| {
            let segment = Segment {
                key,
                start: cumulative / total,
                width: weight / total,
            };
            cumulative += weight;
            segment
        })
        .collect()
}

/// Start fraction of the first segment carrying `key`, used to anchor one
/// aggregate label per group rather than one label per segment.
pub fn first_start<K: PartialEq>(segments: &[Segment<K>], key: &K) -> Option<f64> {
    segments.iter().find(|s| s.key == *key).map(|s| s.start)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_widths_sum_to_one() {
        let segments = stack([("a", 3.0), ("b", 5.0), ("c", 2.0)]);
        let sum: f64 = segments.iter().map(|s| s.width).sum();
        assert!((sum - 1.0).abs() < EPS, "sum was {sum}");
    }

    #[test]
    fn test_starts_are_cumulative() {
        let segments = stack([("a", 1.0), ("b", 1.0), ("c", 2.0)]);
        assert_eq!(segments[0].start, 0.0);
        for window in segments.windows(2) {
            let expected = window[0].start + window[0].width;
            assert!(
                (window[1].start - expected).abs() < EPS,
                "start {} != prior start+width {}",
                window[1].start,
                expected
            );
            assert!(window[1].start >= window[0].start);
        }
    }

    #[test]
    fn test_two_state_scenario() {
        // D with 20 EV then R with 10 EV out of 30 total.
        let segments = stack([("D", 20.0), ("R", 10.0)]);
        assert!((segments[0].start - 0.0).abs() < EPS);
        assert!((segments[0].width - 2.0 / 3.0).abs() < EPS);
        assert!((segments[1].start - 2.0 / 3.0).abs() < EPS);
        assert!((segments[1].width - 1.0 / 3.0).abs() < EPS);
    }

    #[test]
    fn test_zero_weight_item_keeps_position() {
        let segments = stack([("i", 0.0), ("d", 6.0), ("r", 4.0)]);
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].width, 0.0);
        assert_eq!(segments[1].start, 0.0);
    }

    #[test]
    fn test_degenerate_total_is_empty() {
        assert!(stack::<&str>([]).is_empty());
        assert!(stack([("a", 0.0), ("b", 0.0)]).is_empty());
    }

    #[test]
    fn test_first_start_finds_group_anchor() {
        let segments = stack([("d", 2.0), ("d", 2.0), ("r", 4.0), ("r", 2.0)]);
        assert_eq!(first_start(&segments, &"d"), Some(0.0));
        let r_anchor = first_start(&segments, &"r").unwrap();
        assert!((r_anchor - 0.4).abs() < EPS);
        assert_eq!(first_start(&segments, &"x"), None);
    }
}
