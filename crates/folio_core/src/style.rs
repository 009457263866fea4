//! Animatable style properties
//!
//! Every animation in Folio ends up as a `(Property, f32)` write on the
//! surface. Properties that were never written read back as their resting
//! value, which is what an unstyled element looks like.

use smallvec::SmallVec;

/// A style attribute that animations may drive
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Property {
    /// 0.0 (transparent) to 1.0 (opaque)
    Opacity,
    /// Horizontal offset in pixels
    TranslateX,
    /// Vertical offset in pixels
    TranslateY,
    /// Vertical offset as a percentage of the element's own height
    YPercent,
    /// Uniform scale factor
    Scale,
    /// Percentage of the element clipped away from the top (`inset(N% 0 0 0)`)
    ClipInsetTop,
    /// Numeric text content (stat counters)
    Counter,
}

impl Property {
    pub const ALL: [Property; 7] = [
        Property::Opacity,
        Property::TranslateX,
        Property::TranslateY,
        Property::YPercent,
        Property::Scale,
        Property::ClipInsetTop,
        Property::Counter,
    ];

    /// Value of the property on an element no animation has touched
    pub fn resting_value(self) -> f32 {
        match self {
            Property::Opacity | Property::Scale => 1.0,
            Property::TranslateX
            | Property::TranslateY
            | Property::YPercent
            | Property::ClipInsetTop
            | Property::Counter => 0.0,
        }
    }
}

/// A small ordered set of property values
///
/// Doubles as tween endpoints (`from`/`to`) and as the resolved style of a
/// surface element. Setting a property twice overwrites the first value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PropertyValues {
    values: SmallVec<[(Property, f32); 4]>,
}

impl PropertyValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, property: Property, value: f32) {
        if let Some(slot) = self.values.iter_mut().find(|(p, _)| *p == property) {
            slot.1 = value;
        } else {
            self.values.push((property, value));
        }
    }

    pub fn get(&self, property: Property) -> Option<f32> {
        self.values
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| *v)
    }

    /// Value of `property`, falling back to its resting value
    pub fn get_or_rest(&self, property: Property) -> f32 {
        self.get(property)
            .unwrap_or_else(|| property.resting_value())
    }

    pub fn contains(&self, property: Property) -> bool {
        self.get(property).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Property, f32)> + '_ {
        self.values.iter().copied()
    }

    pub fn properties(&self) -> impl Iterator<Item = Property> + '_ {
        self.values.iter().map(|(p, _)| *p)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    // =========================================================================
    // Builder methods
    // =========================================================================

    pub fn with(mut self, property: Property, value: f32) -> Self {
        self.set(property, value);
        self
    }

    pub fn opacity(self, value: f32) -> Self {
        self.with(Property::Opacity, value)
    }

    pub fn x(self, value: f32) -> Self {
        self.with(Property::TranslateX, value)
    }

    pub fn y(self, value: f32) -> Self {
        self.with(Property::TranslateY, value)
    }

    pub fn y_percent(self, value: f32) -> Self {
        self.with(Property::YPercent, value)
    }

    pub fn scale(self, value: f32) -> Self {
        self.with(Property::Scale, value)
    }

    pub fn clip_top(self, value: f32) -> Self {
        self.with(Property::ClipInsetTop, value)
    }

    pub fn counter(self, value: f32) -> Self {
        self.with(Property::Counter, value)
    }

    /// The resting state for every property present in `self`
    pub fn resting(&self) -> Self {
        let mut rest = Self::new();
        for property in self.properties() {
            rest.set(property, property.resting_value());
        }
        rest
    }
}

impl FromIterator<(Property, f32)> for PropertyValues {
    fn from_iter<I: IntoIterator<Item = (Property, f32)>>(iter: I) -> Self {
        let mut values = Self::new();
        for (property, value) in iter {
            values.set(property, value);
        }
        values
    }
}
