//! Animatable value types
//!
//! Linear interpolation for scalars and for whole property sets.

use folio_core::PropertyValues;

/// Trait for values that can be linearly interpolated
pub trait Interpolate: Clone {
    /// Linearly interpolate between self and other by factor t (0.0 to 1.0)
    fn lerp(&self, other: &Self, t: f32) -> Self;

    /// Check if two values are approximately equal (for settling detection)
    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool;
}

// ============================================================================
// f32 Implementation
// ============================================================================

impl Interpolate for f32 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self - other).abs() < epsilon
    }
}

// ============================================================================
// PropertyValues Implementation
// ============================================================================

/// Interpolates every property named by `other`. A property missing from
/// `self` starts from its resting value.
impl Interpolate for PropertyValues {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        other
            .iter()
            .map(|(property, end)| (property, self.get_or_rest(property).lerp(&end, t)))
            .collect()
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.len() == other.len()
            && other.iter().all(|(property, value)| {
                self.get(property)
                    .map_or(false, |mine| mine.approx_eq(&value, epsilon))
            })
    }
}

/// Round `value` to the nearest multiple of `increment`
pub fn snap(value: f32, increment: f32) -> f32 {
    if increment <= 0.0 {
        return value;
    }
    (value / increment).round() * increment
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::Property;

    #[test]
    fn test_property_lerp_uses_resting_start() {
        let from = PropertyValues::new().opacity(0.0);
        let to = PropertyValues::new().opacity(1.0).y(0.0).scale(2.0);

        let mid = from.lerp(&to, 0.5);
        assert_eq!(mid.get(Property::Opacity), Some(0.5));
        assert_eq!(mid.get(Property::TranslateY), Some(0.0));
        // Scale starts from its resting value of 1.0
        assert_eq!(mid.get(Property::Scale), Some(1.5));
    }

    #[test]
    fn test_snap() {
        assert_eq!(snap(149.6, 1.0), 150.0);
        assert_eq!(snap(12.3, 5.0), 10.0);
        assert_eq!(snap(0.37, 0.0), 0.37);
    }
}
