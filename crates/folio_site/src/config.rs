//! Site motion configuration
//!
//! Every section is optional in TOML and defaults to the values the site
//! ships with, so an empty string is a valid config.
//!
//! ```rust
//! use folio_site::SiteConfig;
//!
//! let config = SiteConfig::from_toml_str(r#"
//!     [parallax]
//!     enabled = false
//!
//!     [navigation]
//!     scroll_easing = "power2.inOut"
//! "#).unwrap();
//!
//! assert!(!config.parallax.enabled);
//! assert_eq!(config.navigation.scroll_duration_ms, 1200);
//! ```

use folio_animation::{Easing, SpringConfig};
use folio_scroll::ToggleActions;
use serde::Deserialize;

use crate::error::Result;

/// Top-level configuration
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub reveal: RevealConfig,
    pub parallax: ParallaxConfig,
    pub navigation: NavigationConfig,
    pub modal: ModalConfig,
    pub cursor: CursorConfig,
}

impl SiteConfig {
    /// Parse a TOML document, filling anything missing with defaults
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(source)?;
        tracing::debug!("SiteConfig loaded: {:?}", config);
        Ok(config)
    }
}

/// Scroll-triggered entrance animations
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Easing for tweens that don't name their own
    pub easing: Easing,
    /// Reveals play backward when scrolled back above their start line
    pub reverse_on_scroll_back: bool,
    /// Multiplier on every reveal duration, delay and stagger; 0 disables motion
    pub duration_scale: f32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            easing: Easing::Power3Out,
            reverse_on_scroll_back: true,
            duration_scale: 1.0,
        }
    }
}

impl RevealConfig {
    /// Apply [`duration_scale`](Self::duration_scale) to a duration
    pub fn scale_ms(&self, ms: u32) -> u32 {
        (ms as f32 * self.duration_scale.max(0.0)).round() as u32
    }

    /// Toggle policy for primary reveals
    pub fn actions(&self) -> ToggleActions {
        if self.reverse_on_scroll_back {
            ToggleActions::play_reverse()
        } else {
            ToggleActions::play_once()
        }
    }
}

/// Scroll-linked parallax
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParallaxConfig {
    pub enabled: bool,
    /// How far the applied progress trails the scroll progress
    pub scrub_lag_ms: f32,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            scrub_lag_ms: 1000.0,
        }
    }
}

/// Navigation bar and animated scrolling
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    pub scroll_duration_ms: u32,
    pub scroll_easing: Easing,
    /// Scroll offset past which the bar switches to its compact look
    pub scrolled_threshold: f32,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            scroll_duration_ms: 1200,
            scroll_easing: Easing::Power3InOut,
            scrolled_threshold: 100.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ModalConfig {
    /// Gap between the detail rows of the project modal
    pub row_stagger_ms: u32,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self { row_stagger_ms: 100 }
    }
}

/// Pointer-following cursor
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct CursorConfig {
    pub enabled: bool,
    pub dot: SpringConfig,
    pub ring: SpringConfig,
    /// Ring scale while over something clickable
    pub hover_scale: f32,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            dot: SpringConfig::snappy(),
            ring: SpringConfig::trailing(),
            hover_scale: 1.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SiteError;

    #[test]
    fn test_empty_is_default() {
        assert_eq!(SiteConfig::from_toml_str("").unwrap(), SiteConfig::default());
    }

    #[test]
    fn test_partial_sections_merge_over_defaults() {
        let config = SiteConfig::from_toml_str(
            r#"
            [reveal]
            reverse_on_scroll_back = false

            [cursor.ring]
            stiffness = 120.0
            damping = 22.0
            mass = 1.0
            "#,
        )
        .unwrap();

        assert!(!config.reveal.reverse_on_scroll_back);
        assert_eq!(config.reveal.easing, Easing::Power3Out);
        assert_eq!(config.cursor.ring, SpringConfig::new(120.0, 22.0, 1.0));
        assert_eq!(config.cursor.dot, SpringConfig::snappy());
        assert_eq!(config.parallax, ParallaxConfig::default());
    }

    #[test]
    fn test_easing_names() {
        let config = SiteConfig::from_toml_str(
            r#"
            [reveal]
            easing = "power2.out"
            "#,
        )
        .unwrap();
        assert_eq!(config.reveal.easing, Easing::Power2Out);

        let err = SiteConfig::from_toml_str(
            r#"
            [navigation]
            scroll_easing = "elastic.out"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, SiteError::Config(_)));
        assert!(err.to_string().contains("elastic.out"));
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        assert!(SiteConfig::from_toml_str("[parallax]\nenabled = \"yes\"").is_err());
    }

    #[test]
    fn test_duration_scale() {
        let mut reveal = RevealConfig::default();
        assert_eq!(reveal.scale_ms(800), 800);
        reveal.duration_scale = 0.5;
        assert_eq!(reveal.scale_ms(150), 75);
        reveal.duration_scale = -1.0;
        assert_eq!(reveal.scale_ms(800), 0);
    }

    #[test]
    fn test_reveal_policy() {
        let mut reveal = RevealConfig::default();
        assert_eq!(reveal.actions(), ToggleActions::play_reverse());
        reveal.reverse_on_scroll_back = false;
        assert_eq!(reveal.actions(), ToggleActions::play_once());
    }
}
