//! Easing curves
//!
//! The power family used across the site (`power1` = quad through
//! `power4` = quint), addressable by the names animation configs use:
//! `"power3.out"`, `"power2.inOut"`, `"none"`.

use std::fmt;
use std::str::FromStr;

use folio_core::FolioError;

/// Easing function mapping linear progress to eased progress
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(try_from = "String")]
pub enum Easing {
    /// No easing
    Linear,
    Power1In,
    Power1Out,
    Power1InOut,
    Power2In,
    Power2Out,
    Power2InOut,
    Power3In,
    Power3Out,
    Power3InOut,
    Power4In,
    Power4Out,
    Power4InOut,
}

impl Default for Easing {
    fn default() -> Self {
        Easing::Power1Out
    }
}

#[derive(Clone, Copy)]
enum Shape {
    In,
    Out,
    InOut,
}

impl Easing {
    fn parts(self) -> Option<(i32, Shape)> {
        use Easing::*;
        match self {
            Linear => None,
            Power1In => Some((2, Shape::In)),
            Power1Out => Some((2, Shape::Out)),
            Power1InOut => Some((2, Shape::InOut)),
            Power2In => Some((3, Shape::In)),
            Power2Out => Some((3, Shape::Out)),
            Power2InOut => Some((3, Shape::InOut)),
            Power3In => Some((4, Shape::In)),
            Power3Out => Some((4, Shape::Out)),
            Power3InOut => Some((4, Shape::InOut)),
            Power4In => Some((5, Shape::In)),
            Power4Out => Some((5, Shape::Out)),
            Power4InOut => Some((5, Shape::InOut)),
        }
    }

    /// Apply the easing to progress `t`; input is clamped to `[0, 1]`
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        let Some((exp, shape)) = self.parts() else {
            return t;
        };
        match shape {
            Shape::In => t.powi(exp),
            Shape::Out => 1.0 - (1.0 - t).powi(exp),
            Shape::InOut => {
                if t < 0.5 {
                    2f32.powi(exp - 1) * t.powi(exp)
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(exp) / 2.0
                }
            }
        }
    }
}

impl FromStr for Easing {
    type Err = FolioError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        use Easing::*;
        let name = name.trim();
        if matches!(name, "none" | "linear") {
            return Ok(Linear);
        }

        let (family, shape) = name.split_once('.').unwrap_or((name, "out"));
        let power = match family {
            "power1" | "quad" => 1,
            "power2" | "cubic" => 2,
            "power3" | "quart" => 3,
            "power4" | "quint" => 4,
            _ => return Err(FolioError::UnknownEasing(name.to_string())),
        };

        let easing = match (power, shape) {
            (1, "in") => Power1In,
            (1, "out") => Power1Out,
            (1, "inOut") => Power1InOut,
            (2, "in") => Power2In,
            (2, "out") => Power2Out,
            (2, "inOut") => Power2InOut,
            (3, "in") => Power3In,
            (3, "out") => Power3Out,
            (3, "inOut") => Power3InOut,
            (4, "in") => Power4In,
            (4, "out") => Power4Out,
            (4, "inOut") => Power4InOut,
            _ => return Err(FolioError::UnknownEasing(name.to_string())),
        };
        Ok(easing)
    }
}

impl TryFrom<String> for Easing {
    type Error = FolioError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((exp, shape)) = self.parts() else {
            return f.write_str("none");
        };
        let shape = match shape {
            Shape::In => "in",
            Shape::Out => "out",
            Shape::InOut => "inOut",
        };
        write!(f, "power{}.{}", exp - 1, shape)
    }
}
