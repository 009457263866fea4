//! Full-screen landing hero

use folio_animation::{Position, Timeline, Tween};
use folio_core::{ElementSpec, PropertyValues, Rect};
use folio_scroll::{Anchor, ParallaxTrack, TriggerPosition};

use super::Section;
use crate::config::{RevealConfig, SiteConfig};
use crate::engine::{MotionEngine, Parallax};
use crate::layout::PageLayout;
use crate::scope::SectionScope;

pub const HERO_TITLE: &str = "hero-title";
pub const HERO_SUBTITLE: &str = "hero-subtitle";
pub const HERO_IMAGE: &str = "hero-image";
pub const HERO_INDICATOR: &str = "hero-indicator";

#[derive(Clone, Copy, Debug, Default)]
pub struct Hero;

impl Hero {
    /// Title, subtitle, background image, then the scroll indicator
    ///
    /// Each step overlaps the end of what came before; unscaled the whole
    /// sequence runs 2500ms, including the title's 300ms delay.
    pub fn entrance(config: &RevealConfig) -> Timeline {
        let ms = |ms: u32| config.scale_ms(ms);
        let overlap = |ms: u32| Position::Offset(-(config.scale_ms(ms) as i32));

        let mut timeline = Timeline::new().with_default_easing(config.easing);
        timeline.add(
            HERO_TITLE,
            Tween::from_state(PropertyValues::new().y(100.0).opacity(0.0), ms(1200)).delay(ms(300)),
            Position::End,
        );
        timeline.add(
            HERO_SUBTITLE,
            Tween::from_state(PropertyValues::new().y(50.0).opacity(0.0), ms(800)),
            overlap(600),
        );
        timeline.add(
            HERO_IMAGE,
            Tween::from_state(PropertyValues::new().scale(1.3).opacity(0.0), ms(1500)),
            overlap(1000),
        );
        timeline.add(
            HERO_INDICATOR,
            Tween::from_state(PropertyValues::new().y(20.0).opacity(0.0), ms(600)),
            overlap(300),
        );
        timeline
    }
}

impl Section for Hero {
    fn id(&self) -> &'static str {
        "hero"
    }

    fn layout(&self, layout: &mut PageLayout<'_>) {
        let viewport = layout.viewport();
        let top = layout.open(self.id());
        let title_height = if layout.is_mobile() { 160.0 } else { 280.0 };
        let content = layout.content(top + viewport.height / 2.0 - title_height / 2.0 - 48.0, 0.0);

        layout.place(
            ElementSpec::new(HERO_IMAGE)
                .parent(self.id())
                .bounds(Rect::new(0.0, top, viewport.width, viewport.height)),
        );
        layout.rows(
            content,
            24.0,
            [
                (ElementSpec::new(HERO_TITLE).parent(self.id()), title_height),
                (ElementSpec::new(HERO_SUBTITLE).parent(self.id()), 72.0),
            ],
        );
        layout.place(
            ElementSpec::new(HERO_INDICATOR)
                .parent(self.id())
                .bounds(Rect::new(viewport.width / 2.0 - 20.0, top + viewport.height - 108.0, 40.0, 60.0)),
        );
        layout.close(self.id(), top + viewport.height);
    }

    fn animate(&self, engine: &mut dyn MotionEngine, config: &SiteConfig) -> SectionScope {
        let mut scope = SectionScope::new(self.id());
        scope.adopt(engine.sequence(Self::entrance(&config.reveal)));

        // The background drifts down and grows while the hero scrolls away
        scope.adopt(
            engine.parallax(
                Parallax::new(
                    ParallaxTrack::new(
                        HERO_IMAGE,
                        PropertyValues::new().y_percent(0.0).scale(1.0),
                        PropertyValues::new().y_percent(30.0).scale(1.1),
                    ),
                    self.id(),
                )
                .region(TriggerPosition::new(Anchor::TOP, Anchor::TOP), TriggerPosition::bottom_top()),
            ),
        );
        // The title lifts and fades out by the time half the hero is gone
        scope.adopt(
            engine.parallax(
                Parallax::new(
                    ParallaxTrack::new(
                        HERO_TITLE,
                        PropertyValues::new().y_percent(0.0).opacity(1.0),
                        PropertyValues::new().y_percent(-50.0).opacity(0.0),
                    ),
                    self.id(),
                )
                .region(
                    TriggerPosition::new(Anchor::TOP, Anchor::TOP),
                    TriggerPosition::new(Anchor::CENTER, Anchor::TOP),
                ),
            ),
        );
        scope
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::recording::RecordingEngine;

    #[test]
    fn test_entrance_schedule() {
        let timeline = Hero::entrance(&RevealConfig::default());
        let starts: Vec<u32> = timeline
            .entry_ids()
            .into_iter()
            .filter_map(|id| timeline.entry_start(id))
            .collect();
        assert_eq!(starts, vec![0, 900, 700, 1900]);
        assert_eq!(timeline.duration_ms(), 2500);
    }

    #[test]
    fn test_animate_plays_entrance_and_scrubs_two_layers() {
        let mut engine = RecordingEngine::default();
        Hero.animate(&mut engine, &SiteConfig::default());

        assert_eq!(engine.sequences.len(), 1);
        assert!(engine.reveals.is_empty());
        assert!(engine.scrolls.is_empty());
        let targets: Vec<&str> = engine.parallaxes.iter().map(|p| p.track.target().as_str()).collect();
        assert_eq!(targets, vec![HERO_IMAGE, HERO_TITLE]);
        assert!(engine.parallaxes.iter().all(|p| p.trigger.as_str() == "hero"));
    }

    #[test]
    fn test_entrance_scales_with_reduced_motion() {
        let config = RevealConfig {
            duration_scale: 0.5,
            ..RevealConfig::default()
        };
        assert_eq!(Hero::entrance(&config).duration_ms(), 1250);

        let still = RevealConfig {
            duration_scale: 0.0,
            ..RevealConfig::default()
        };
        assert_eq!(Hero::entrance(&still).duration_ms(), 0);
    }
}
