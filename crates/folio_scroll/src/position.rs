//! Trigger positions
//!
//! A position pairs a point on the trigger element with a point on the
//! viewport: `"top 70%"` is reached when the element's top edge meets the
//! line 70% of the way down the viewport.

use std::fmt;
use std::str::FromStr;

use folio_core::{FolioError, Rect};

/// A point along one axis of a box
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Anchor {
    /// Fraction of the extent, `0.0` = top, `1.0` = bottom
    Fraction(f32),
    /// Fixed offset from the top, in pixels
    Pixels(f32),
}

impl Anchor {
    pub const TOP: Anchor = Anchor::Fraction(0.0);
    pub const CENTER: Anchor = Anchor::Fraction(0.5);
    pub const BOTTOM: Anchor = Anchor::Fraction(1.0);

    /// Offset from the top of a box of height `extent`
    pub fn resolve(self, extent: f32) -> f32 {
        match self {
            Anchor::Fraction(f) => extent * f,
            Anchor::Pixels(px) => px,
        }
    }
}

impl FromStr for Anchor {
    type Err = ();

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "top" => return Ok(Anchor::TOP),
            "center" => return Ok(Anchor::CENTER),
            "bottom" => return Ok(Anchor::BOTTOM),
            _ => {}
        }
        if let Some(pct) = token.strip_suffix('%') {
            return pct
                .parse::<f32>()
                .map(|p| Anchor::Fraction(p / 100.0))
                .map_err(|_| ());
        }
        if let Some(px) = token.strip_suffix("px") {
            return px.parse::<f32>().map(Anchor::Pixels).map_err(|_| ());
        }
        Err(())
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            a if a == Anchor::TOP => f.write_str("top"),
            a if a == Anchor::CENTER => f.write_str("center"),
            a if a == Anchor::BOTTOM => f.write_str("bottom"),
            Anchor::Fraction(v) => write!(f, "{}%", v * 100.0),
            Anchor::Pixels(px) => write!(f, "{px}px"),
        }
    }
}

/// Where a trigger region starts or ends
///
/// ```rust
/// use folio_core::Rect;
/// use folio_scroll::TriggerPosition;
///
/// let start: TriggerPosition = "top 70%".parse().unwrap();
/// let section = Rect::new(0.0, 2000.0, 1440.0, 800.0);
///
/// // The section's top meets 70% of a 900px viewport at scroll 1370
/// assert_eq!(start.scroll_offset(section, 900.0), 1370.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerPosition {
    pub element: Anchor,
    pub viewport: Anchor,
}

impl TriggerPosition {
    pub const fn new(element: Anchor, viewport: Anchor) -> Self {
        Self { element, viewport }
    }

    /// `"top bottom"`: the element starts entering the viewport
    pub const fn top_bottom() -> Self {
        Self::new(Anchor::TOP, Anchor::BOTTOM)
    }

    /// `"bottom top"`: the element has fully left the viewport
    pub const fn bottom_top() -> Self {
        Self::new(Anchor::BOTTOM, Anchor::TOP)
    }

    /// `"top N%"`, the usual reveal threshold
    pub fn top_at(viewport_fraction: f32) -> Self {
        Self::new(Anchor::TOP, Anchor::Fraction(viewport_fraction))
    }

    /// Scroll offset at which this position is reached
    pub fn scroll_offset(&self, bounds: Rect, viewport_height: f32) -> f32 {
        bounds.top() + self.element.resolve(bounds.height) - self.viewport.resolve(viewport_height)
    }
}

impl FromStr for TriggerPosition {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FolioError::InvalidPosition(s.to_string());
        let mut tokens = s.split_whitespace();
        let element = tokens.next().ok_or_else(invalid)?;
        let viewport = tokens.next().ok_or_else(invalid)?;
        if tokens.next().is_some() {
            return Err(invalid());
        }
        Ok(Self {
            element: element.parse().map_err(|_| invalid())?,
            viewport: viewport.parse().map_err(|_| invalid())?,
        })
    }
}

impl fmt::Display for TriggerPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.element, self.viewport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(s: &str) -> TriggerPosition {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_keywords_and_units() {
        assert_eq!(pos("top top"), TriggerPosition::new(Anchor::TOP, Anchor::TOP));
        assert_eq!(pos("50% top"), TriggerPosition::new(Anchor::CENTER, Anchor::TOP));
        assert_eq!(pos("top 85%"), TriggerPosition::top_at(0.85));
        assert_eq!(
            pos("bottom 120px"),
            TriggerPosition::new(Anchor::BOTTOM, Anchor::Pixels(120.0))
        );
        assert_eq!(pos("  top   bottom "), TriggerPosition::top_bottom());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "top", "top 70% extra", "middle top", "top seventy%"] {
            assert_eq!(
                bad.parse::<TriggerPosition>(),
                Err(FolioError::InvalidPosition(bad.to_string())),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn test_scroll_offsets() {
        let hero = Rect::new(0.0, 0.0, 1440.0, 900.0);
        assert_eq!(pos("top top").scroll_offset(hero, 900.0), 0.0);
        assert_eq!(pos("bottom top").scroll_offset(hero, 900.0), 900.0);
        assert_eq!(pos("50% top").scroll_offset(hero, 900.0), 450.0);

        let card = Rect::new(0.0, 1500.0, 400.0, 500.0);
        assert_eq!(pos("top bottom").scroll_offset(card, 900.0), 600.0);
    }

    #[test]
    fn test_display_round_trips_keywords() {
        assert_eq!(pos("top 70%").to_string(), "top 70%");
        assert_eq!(pos("center bottom").to_string(), "center bottom");
    }
}
