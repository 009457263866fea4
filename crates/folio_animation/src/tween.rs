//! Property tweens
//!
//! A [`Tween`] describes how one element's properties move between two
//! states. It carries no target; the timeline pairs it with an element.

use folio_core::PropertyValues;

use crate::easing::Easing;
use crate::values::{snap, Interpolate};

/// One timed transition between two property states
#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
    /// Start state. `None` means "whatever the element shows when the tween
    /// first renders".
    pub from: Option<PropertyValues>,
    pub to: PropertyValues,
    pub duration_ms: u32,
    pub delay_ms: u32,
    /// Falls back to the timeline's default easing when unset
    pub easing: Option<Easing>,
    /// Round sampled values to this increment
    pub snap: Option<f32>,
}

impl Tween {
    /// Explicit start and end states; the start is rendered immediately
    pub fn from_to(from: PropertyValues, to: PropertyValues, duration_ms: u32) -> Self {
        Self {
            from: Some(from),
            to,
            duration_ms,
            delay_ms: 0,
            easing: None,
            snap: None,
        }
    }

    /// From `from` to the resting value of each property it names
    pub fn from_state(from: PropertyValues, duration_ms: u32) -> Self {
        let to = from.resting();
        Self::from_to(from, to, duration_ms)
    }

    /// From the element's current values to `to`
    pub fn to(to: PropertyValues, duration_ms: u32) -> Self {
        Self {
            from: None,
            to,
            duration_ms,
            delay_ms: 0,
            easing: None,
            snap: None,
        }
    }

    pub fn delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = Some(easing);
        self
    }

    pub fn snap(mut self, increment: f32) -> Self {
        self.snap = Some(increment);
        self
    }

    /// Delay plus duration
    pub fn span_ms(&self) -> u32 {
        self.delay_ms.saturating_add(self.duration_ms)
    }

    /// Linear progress `local_ms` after the tween's (undelayed) start
    pub fn progress_at(&self, local_ms: f32) -> f32 {
        let active = local_ms - self.delay_ms as f32;
        if self.duration_ms == 0 {
            return if active >= 0.0 { 1.0 } else { 0.0 };
        }
        if active <= 0.0 {
            return 0.0;
        }
        (active / self.duration_ms as f32).min(1.0)
    }

    /// Values at linear progress `t`, starting from `from`
    pub fn sample(&self, from: &PropertyValues, t: f32, default_easing: Easing) -> PropertyValues {
        let eased = self.easing.unwrap_or(default_easing).apply(t);
        let mut values = from.lerp(&self.to, eased);
        if let Some(increment) = self.snap {
            values = values
                .iter()
                .map(|(property, value)| (property, snap(value, increment)))
                .collect();
        }
        values
    }
}
