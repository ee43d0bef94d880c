//! Range remapping, tolerant comparison and angle wrapping.

/// Default tolerance for [`fuzzy_eq`].
pub const FUZZY_THRESHOLD: f32 = 0.01;

/// Linearly remaps `value` from `[src_min, src_max]` onto `[dst_min, dst_max]`.
///
/// Values outside the source range extrapolate. A degenerate source range
/// divides by zero and yields a non-finite result.
///
/// ```rust
/// use alt::map;
///
/// assert_eq!(map(5.0, 0.0, 10.0, 0.0, 100.0), 50.0);
/// ```
pub fn map(value: f32, src_min: f32, src_max: f32, dst_min: f32, dst_max: f32) -> f32 {
    dst_min + (dst_max - dst_min) * (value - src_min) / (src_max - src_min)
}

/// Remaps a percentage (`0..=100`) onto `[dst_min, dst_max]`.
pub fn map_100(value: f32, dst_min: f32, dst_max: f32) -> f32 {
    map(value, 0.0, 100.0, dst_min, dst_max)
}

/// `true` when `a` and `b` differ by at most [`FUZZY_THRESHOLD`].
pub fn fuzzy_eq(a: f32, b: f32) -> bool {
    fuzzy_eq_within(a, b, FUZZY_THRESHOLD)
}

pub fn fuzzy_eq_within(a: f32, b: f32, threshold: f32) -> bool {
    (a - b).abs() <= threshold
}

/// Component-wise [`fuzzy_eq_within`] for fixed-size vectors.
pub fn fuzzy_eq_n<const N: usize>(a: [f32; N], b: [f32; N], threshold: f32) -> bool {
    a.iter()
        .zip(b.iter())
        .all(|(x, y)| fuzzy_eq_within(*x, *y, threshold))
}

/// Wraps an angle in degrees into `[0, 360)`.
pub fn clamp_angle(angle: f32) -> f32 {
    let turns = (angle / 360.0).floor();
    angle - 360.0 * turns
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_inverted_range() {
        assert_eq!(map(2.0, 0.0, 4.0, 10.0, 0.0), 5.0);
    }

    #[test]
    fn test_map_extrapolates() {
        assert_eq!(map(20.0, 0.0, 10.0, 0.0, 1.0), 2.0);
    }

    #[test]
    fn test_map_100() {
        assert_eq!(map_100(25.0, 0.0, 8.0), 2.0);
        assert_eq!(map_100(100.0, -1.0, 1.0), 1.0);
    }

    #[test]
    fn test_fuzzy_eq() {
        assert!(fuzzy_eq(1.0, 1.005));
        assert!(!fuzzy_eq(1.0, 1.02));
        assert!(fuzzy_eq_within(1.0, 1.4, 0.5));
    }

    #[test]
    fn test_fuzzy_eq_vectors() {
        assert!(fuzzy_eq_n([1.0, 2.0, 3.0], [1.001, 1.999, 3.0], 0.01));
        assert!(!fuzzy_eq_n([1.0, 2.0], [1.0, 2.5], 0.01));
        assert!(fuzzy_eq_n::<0>([], [], 0.0));
    }

    #[test]
    fn test_clamp_angle() {
        assert_eq!(clamp_angle(0.0), 0.0);
        assert_eq!(clamp_angle(360.0), 0.0);
        assert_eq!(clamp_angle(450.0), 90.0);
        assert_eq!(clamp_angle(-90.0), 270.0);
        assert_eq!(clamp_angle(-720.0), 0.0);
    }
}
