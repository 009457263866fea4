//! Scroll triggers and parallax working together on one page

use folio_animation::{AnimatedTimeline, AnimationScheduler, Easing, Position, Timeline, Tween};
use folio_core::{ElementSpec, MemorySurface, Property, PropertyValues, Rect, Surface, Viewport};
use folio_scroll::{
    ParallaxTrack, ScrollAnimator, ScrollTrigger, ToggleActions, TriggerGuard, TriggerPosition,
    TriggerRegistry, TriggerSpec,
};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn page() -> MemorySurface {
    let mut surface = MemorySurface::new(Viewport::new(1440.0, 900.0));
    surface.insert(ElementSpec::new("hero").bounds(Rect::new(0.0, 0.0, 1440.0, 900.0)));
    surface.insert(
        ElementSpec::new("hero-image")
            .parent("hero")
            .bounds(Rect::new(0.0, 0.0, 1440.0, 900.0)),
    );
    surface.insert(ElementSpec::new("stats").bounds(Rect::new(0.0, 1800.0, 1440.0, 400.0)));
    surface.insert(
        ElementSpec::new("stat-projects")
            .parent("stats")
            .bounds(Rect::new(0.0, 1800.0, 400.0, 400.0)),
    );
    surface.insert(ElementSpec::new("contact").bounds(Rect::new(0.0, 2200.0, 1440.0, 1600.0)));
    surface
}

fn reveal(scheduler: &AnimationScheduler, target: &str) -> AnimatedTimeline {
    let mut tl = Timeline::new().with_default_easing(Easing::Power3Out);
    tl.add(
        target,
        Tween::from_state(PropertyValues::new().y(60.0).opacity(0.0), 800),
        Position::End,
    );
    AnimatedTimeline::new(scheduler.handle(), tl)
}

fn counter(scheduler: &AnimationScheduler, target: &str, value: f32) -> AnimatedTimeline {
    let mut tl = Timeline::new();
    tl.add(
        target,
        Tween::from_to(
            PropertyValues::new().counter(0.0),
            PropertyValues::new().counter(value),
            2000,
        )
        .easing(Easing::Power2Out)
        .snap(1.0),
        Position::End,
    );
    AnimatedTimeline::new(scheduler.handle(), tl)
}

fn frame(registry: &TriggerRegistry, scheduler: &AnimationScheduler, surface: &mut MemorySurface) {
    registry.update(surface, 16.0);
    scheduler.advance(16.0, surface);
}

fn settle(registry: &TriggerRegistry, scheduler: &AnimationScheduler, surface: &mut MemorySurface) {
    for _ in 0..1000 {
        frame(registry, scheduler, surface);
    }
}

#[test]
fn reverse_reveal_hides_again_but_counter_stays() {
    init_tracing();
    let mut surface = page();
    let scheduler = AnimationScheduler::new();
    let registry = TriggerRegistry::new();

    let _reveal = registry.register(ScrollTrigger::new(
        TriggerSpec::new("contact")
            .start(TriggerPosition::top_at(0.7))
            .actions(ToggleActions::play_reverse()),
        Some(reveal(&scheduler, "contact")),
    ));
    let _count = registry.register(ScrollTrigger::new(
        TriggerSpec::new("stats")
            .start(TriggerPosition::top_at(0.8))
            .actions(ToggleActions::play_once()),
        Some(counter(&scheduler, "stat-projects", 150.0)),
    ));
    scheduler.render_pending(&mut surface);
    assert_eq!(surface.style_value(&"contact".into(), Property::Opacity), Some(0.0));
    assert_eq!(surface.style_value(&"stat-projects".into(), Property::Counter), Some(0.0));

    surface.set_scroll_y(2000.0);
    settle(&registry, &scheduler, &mut surface);
    assert_eq!(surface.style_value(&"contact".into(), Property::Opacity), Some(1.0));
    assert_eq!(surface.style_value(&"stat-projects".into(), Property::Counter), Some(150.0));

    surface.set_scroll_y(0.0);
    settle(&registry, &scheduler, &mut surface);
    assert_eq!(surface.style_value(&"contact".into(), Property::Opacity), Some(0.0));
    assert_eq!(surface.style_value(&"contact".into(), Property::TranslateY), Some(60.0));
    assert_eq!(surface.style_value(&"stat-projects".into(), Property::Counter), Some(150.0));
}

#[test]
fn counter_values_are_whole_numbers() {
    let mut surface = page();
    let scheduler = AnimationScheduler::new();
    let registry = TriggerRegistry::new();
    let _count = registry.register(ScrollTrigger::new(
        TriggerSpec::new("stats").start(TriggerPosition::top_at(0.8)),
        Some(counter(&scheduler, "stat-projects", 150.0)),
    ));

    surface.set_scroll_y(1200.0);
    for _ in 0..60 {
        frame(&registry, &scheduler, &mut surface);
        let value = surface
            .style_value(&"stat-projects".into(), Property::Counter)
            .unwrap_or(f32::NAN);
        assert_eq!(value, value.round());
    }
}

#[test]
fn parallax_follows_scroll_monotonically() {
    let mut surface = page();
    let scheduler = AnimationScheduler::new();
    let registry = TriggerRegistry::new();

    let track = ParallaxTrack::new(
        "hero-image",
        PropertyValues::new().y_percent(0.0).scale(1.0),
        PropertyValues::new().y_percent(30.0).scale(1.1),
    );
    let _parallax = registry.register(ScrollTrigger::new(
        TriggerSpec::new("hero")
            .start("top top".parse().unwrap())
            .end("bottom top".parse().unwrap())
            .scrub(1000.0),
        Some(AnimatedTimeline::new(scheduler.handle(), track.into_timeline())),
    ));

    let mut last = 0.0;
    for step in 0..=90 {
        surface.set_scroll_y(step as f32 * 10.0);
        frame(&registry, &scheduler, &mut surface);
        let y = surface
            .style_value(&"hero-image".into(), Property::YPercent)
            .unwrap_or(f32::NAN);
        assert!(y >= last, "parallax went backwards at step {step}");
        assert!(y <= 30.0);
        last = y;
    }

    // Lag catches up once scrolling stops
    settle(&registry, &scheduler, &mut surface);
    let y = surface
        .style_value(&"hero-image".into(), Property::YPercent)
        .unwrap_or(f32::NAN);
    assert!((y - 30.0).abs() < 1e-2);

    // Fully scrolled past: further frames leave the element alone
    surface.set_scroll_y(2500.0);
    settle(&registry, &scheduler, &mut surface);
    surface.set_style(&"hero-image".into(), Property::YPercent, -1.0);
    settle(&registry, &scheduler, &mut surface);
    assert_eq!(
        surface.style_value(&"hero-image".into(), Property::YPercent),
        Some(-1.0)
    );
}

#[test]
fn mount_unmount_cycles_leave_nothing_behind() {
    let mut surface = page();
    let scheduler = AnimationScheduler::new();
    let registry = TriggerRegistry::new();

    for cycle in 0..25 {
        let guards: Vec<TriggerGuard> = ["hero", "stats", "contact"]
            .into_iter()
            .map(|id| {
                registry.register(ScrollTrigger::new(
                    TriggerSpec::new(id)
                        .start(TriggerPosition::top_at(0.7))
                        .actions(ToggleActions::play_reverse()),
                    Some(reveal(&scheduler, id)),
                ))
            })
            .collect();
        assert_eq!(registry.active_count(), 3);

        surface.set_scroll_y((cycle * 100) as f32);
        frame(&registry, &scheduler, &mut surface);
        drop(guards);

        assert_eq!(registry.active_count(), 0, "cycle {cycle}");
        assert_eq!(scheduler.timeline_count(), 0, "cycle {cycle}");
    }
}

#[test]
fn scroll_to_then_triggers_fire() {
    let mut surface = page();
    let scheduler = AnimationScheduler::new();
    let registry = TriggerRegistry::new();
    let mut scroller = ScrollAnimator::default();

    let _reveal = registry.register(ScrollTrigger::new(
        TriggerSpec::new("contact")
            .start(TriggerPosition::top_at(0.7))
            .actions(ToggleActions::play_reverse()),
        Some(reveal(&scheduler, "contact")),
    ));
    scheduler.render_pending(&mut surface);

    assert!(scroller.scroll_to_element(&surface, &"contact".into()));
    while scroller.step(16.0, &mut surface) {
        frame(&registry, &scheduler, &mut surface);
    }
    settle(&registry, &scheduler, &mut surface);

    assert_eq!(surface.scroll_y(), 2200.0);
    assert_eq!(surface.style_value(&"contact".into(), Property::Opacity), Some(1.0));
}
