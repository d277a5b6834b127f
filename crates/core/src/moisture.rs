//! Moisture basis conversions
//!
//! Field measurements report moisture on a fresh-matter (wet) basis: kg water per kg
//! of total mass. The drying and re-wetting equations work on a dry-matter basis:
//! kg water per kg of dry matter.

/// Convert fresh-matter basis moisture to dry-matter basis, `m / (1 - m)`
///
/// Diverges as `m` approaches 1.
#[inline]
pub fn fresh_to_dry_basis(moisture_fm: f64) -> f64 {
    moisture_fm / (1.0 - moisture_fm)
}

/// Convert dry-matter basis moisture to fresh-matter basis, `x / (x + 1)`
#[inline]
pub fn dry_to_fresh_basis(moisture_dm: f64) -> f64 {
    moisture_dm / (moisture_dm + 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        assert!((fresh_to_dry_basis(0.8) - 4.0).abs() < 1e-12);
        assert!((fresh_to_dry_basis(0.5) - 1.0).abs() < 1e-12);
        assert!((dry_to_fresh_basis(4.0) - 0.8).abs() < 1e-12);
        assert_eq!(fresh_to_dry_basis(0.0), 0.0);
    }

    #[test]
    fn test_round_trip_across_range() {
        for i in 0..100 {
            let m = f64::from(i) / 100.0;
            let back = dry_to_fresh_basis(fresh_to_dry_basis(m));
            assert!((back - m).abs() < 1e-12, "m={} came back as {}", m, back);
        }
    }

    #[test]
    fn test_unit_moisture_diverges() {
        assert!(fresh_to_dry_basis(1.0).is_infinite());
    }
}
