//! Timeline sequencing
//!
//! A [`Timeline`] places tweens on a shared clock. Each entry is positioned
//! relative to what is already on the timeline, so overlapping sequences
//! like "subtitle starts 600ms before the title finishes" are expressed
//! directly:
//!
//! ```rust
//! use folio_animation::{Easing, Position, Timeline, Tween};
//! use folio_core::PropertyValues;
//!
//! let mut tl = Timeline::new().with_default_easing(Easing::Power3Out);
//! let hidden = || PropertyValues::new().y(100.0).opacity(0.0);
//!
//! tl.add("title", Tween::from_state(hidden(), 1200), Position::End);
//! tl.add("subtitle", Tween::from_state(hidden(), 800), Position::Offset(-600));
//! tl.add("image", Tween::from_state(hidden(), 1500), Position::Offset(-1000));
//! tl.add("indicator", Tween::from_state(hidden(), 600), Position::Offset(-300));
//!
//! assert_eq!(tl.duration_ms(), 2200);
//! ```
//!
//! Rendering is separate from ticking: [`Timeline::tick`] moves the clock and
//! [`Timeline::render`] writes the values for the current time to a surface.
//! A freshly built timeline renders its start state on first render, so
//! reveal targets stay hidden until the timeline plays.

use folio_core::{ElementId, PropertyValues, Surface};

use crate::easing::Easing;
use crate::tween::Tween;

/// Index of an entry within its timeline
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimelineEntryId(usize);

impl TimelineEntryId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Where a new entry starts
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Position {
    /// At the current end of the timeline
    #[default]
    End,
    /// Relative to the current end; negative values overlap
    Offset(i32),
    /// Absolute time in ms
    At(u32),
    /// Together with the previously added entry
    WithPrevious,
    /// When the previously added entry finishes
    AfterPrevious,
}

/// Playback state of a timeline
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayState {
    /// Built but never played
    Idle,
    Playing,
    Paused,
    /// Reached one end of the timeline
    Finished,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayDirection {
    Forward,
    Reverse,
}

/// Raised by [`Timeline::tick`] when playback reaches an end
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimelineEvent {
    Completed,
    ReverseCompleted,
}

#[derive(Clone, Debug)]
struct TimelineEntry {
    target: ElementId,
    tween: Tween,
    start_ms: u32,
    /// Start state of a `to` tween, captured on its first render
    resolved_from: Option<PropertyValues>,
}

impl TimelineEntry {
    fn end_ms(&self) -> u32 {
        self.start_ms.saturating_add(self.tween.span_ms())
    }

    fn start_state(&self) -> Option<PropertyValues> {
        self.tween
            .from
            .clone()
            .or_else(|| self.resolved_from.clone())
    }
}

/// An ordered, overlapping schedule of tweens
#[derive(Clone, Debug)]
pub struct Timeline {
    entries: Vec<TimelineEntry>,
    default_easing: Easing,
    time_ms: f32,
    state: PlayState,
    direction: PlayDirection,
    dirty: bool,
    immediate_render: bool,
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Timeline {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            default_easing: Easing::default(),
            time_ms: 0.0,
            state: PlayState::Idle,
            direction: PlayDirection::Forward,
            dirty: true,
            immediate_render: true,
        }
    }

    /// Skip the start-state render; nothing is written until the playhead
    /// first moves. Scrubbed timelines use this so an untouched parallax
    /// does not overwrite an entrance animation on the same element.
    pub fn lazy(mut self) -> Self {
        self.immediate_render = false;
        self.dirty = false;
        self
    }

    /// Easing for entries that do not set their own
    pub fn with_default_easing(mut self, easing: Easing) -> Self {
        self.default_easing = easing;
        self
    }

    pub fn default_easing(&self) -> Easing {
        self.default_easing
    }

    // =========================================================================
    // Building
    // =========================================================================

    /// Add a tween for `target` at `position`
    pub fn add(
        &mut self,
        target: impl Into<ElementId>,
        tween: Tween,
        position: Position,
    ) -> TimelineEntryId {
        let start_ms = self.resolve_start(position);
        self.push(target.into(), tween, start_ms)
    }

    /// Add the same tween for each target, `each_ms` apart
    ///
    /// The first target starts at `position`; the rest follow at fixed
    /// increments regardless of what the earlier entries add to the end.
    pub fn stagger(
        &mut self,
        targets: &[ElementId],
        tween: Tween,
        each_ms: u32,
        position: Position,
    ) -> Vec<TimelineEntryId> {
        if targets.is_empty() {
            return Vec::new();
        }
        let first = self.resolve_start(position);
        targets
            .iter()
            .enumerate()
            .map(|(i, target)| {
                let offset = each_ms.saturating_mul(i as u32);
                self.push(target.clone(), tween.clone(), first.saturating_add(offset))
            })
            .collect()
    }

    fn push(&mut self, target: ElementId, tween: Tween, start_ms: u32) -> TimelineEntryId {
        self.entries.push(TimelineEntry {
            target,
            tween,
            start_ms,
            resolved_from: None,
        });
        self.dirty = self.dirty || self.immediate_render;
        TimelineEntryId(self.entries.len() - 1)
    }

    fn resolve_start(&self, position: Position) -> u32 {
        let end = i64::from(self.duration_ms());
        let last = self.entries.last();
        let start = match position {
            Position::End => end,
            Position::Offset(ms) => end + i64::from(ms),
            Position::At(ms) => i64::from(ms),
            Position::WithPrevious => last.map_or(0, |e| i64::from(e.start_ms)),
            Position::AfterPrevious => last.map_or(0, |e| i64::from(e.end_ms())),
        };
        start.clamp(0, i64::from(u32::MAX)) as u32
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry_ids(&self) -> Vec<TimelineEntryId> {
        (0..self.entries.len()).map(TimelineEntryId).collect()
    }

    /// Start time of an entry, after position resolution
    pub fn entry_start(&self, id: TimelineEntryId) -> Option<u32> {
        self.entries.get(id.0).map(|e| e.start_ms)
    }

    /// Every element this timeline writes to, in entry order
    pub fn targets(&self) -> impl Iterator<Item = &ElementId> {
        self.entries.iter().map(|e| &e.target)
    }

    /// End of the last-finishing entry
    pub fn duration_ms(&self) -> u32 {
        self.entries.iter().map(TimelineEntry::end_ms).max().unwrap_or(0)
    }

    pub fn time_ms(&self) -> f32 {
        self.time_ms
    }

    /// Playhead position in `[0, 1]`
    pub fn progress(&self) -> f32 {
        let duration = self.duration_ms();
        if duration == 0 {
            return if self.is_complete() { 1.0 } else { 0.0 };
        }
        (self.time_ms / duration as f32).clamp(0.0, 1.0)
    }

    pub fn state(&self) -> PlayState {
        self.state
    }

    pub fn direction(&self) -> PlayDirection {
        self.direction
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlayState::Playing
    }

    /// Played forward to the end
    pub fn is_complete(&self) -> bool {
        self.state == PlayState::Finished && self.direction == PlayDirection::Forward
    }

    /// Played backward to the start
    pub fn is_reverse_complete(&self) -> bool {
        self.state == PlayState::Finished && self.direction == PlayDirection::Reverse
    }

    /// Whether the next [`render`](Self::render) would write anything
    pub fn needs_render(&self) -> bool {
        self.dirty
    }

    // =========================================================================
    // Playback control
    // =========================================================================

    /// Play forward from the current time
    pub fn play(&mut self) {
        self.direction = PlayDirection::Forward;
        let duration = self.duration_ms();
        self.state = if duration > 0 && self.time_ms >= duration as f32 {
            PlayState::Finished
        } else {
            PlayState::Playing
        };
    }

    /// Play backward from the current time
    pub fn reverse(&mut self) {
        self.direction = PlayDirection::Reverse;
        self.state = if self.time_ms <= 0.0 {
            PlayState::Finished
        } else {
            PlayState::Playing
        };
    }

    pub fn pause(&mut self) {
        if self.state == PlayState::Playing {
            self.state = PlayState::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.state == PlayState::Paused {
            self.state = PlayState::Playing;
        }
    }

    /// Jump to the start and play forward
    pub fn restart(&mut self) {
        self.time_ms = 0.0;
        self.direction = PlayDirection::Forward;
        self.state = PlayState::Playing;
        self.dirty = true;
    }

    /// Jump to the start and stop
    pub fn reset(&mut self) {
        self.time_ms = 0.0;
        self.direction = PlayDirection::Forward;
        self.state = PlayState::Idle;
        self.dirty = true;
    }

    /// Jump to the end and stop
    pub fn complete(&mut self) {
        self.time_ms = self.duration_ms() as f32;
        self.direction = PlayDirection::Forward;
        self.state = PlayState::Finished;
        self.dirty = true;
    }

    /// Move the playhead without changing the play state
    pub fn seek(&mut self, time_ms: f32) {
        self.time_ms = time_ms.clamp(0.0, self.duration_ms() as f32);
        self.dirty = true;
    }

    /// Move the playhead to a fraction of the duration
    pub fn seek_progress(&mut self, progress: f32) {
        self.seek(progress.clamp(0.0, 1.0) * self.duration_ms() as f32);
    }

    /// Advance the clock by `dt_ms`
    pub fn tick(&mut self, dt_ms: f32) -> Option<TimelineEvent> {
        if self.state != PlayState::Playing {
            return None;
        }
        self.dirty = true;
        let duration = self.duration_ms() as f32;

        match self.direction {
            PlayDirection::Forward => {
                self.time_ms += dt_ms;
                if self.time_ms >= duration {
                    self.time_ms = duration;
                    self.state = PlayState::Finished;
                    return Some(TimelineEvent::Completed);
                }
            }
            PlayDirection::Reverse => {
                self.time_ms -= dt_ms;
                if self.time_ms <= 0.0 {
                    self.time_ms = 0.0;
                    self.state = PlayState::Finished;
                    return Some(TimelineEvent::ReverseCompleted);
                }
            }
        }
        None
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Write the values for the current time to `surface`
    ///
    /// Does nothing unless the playhead moved since the last render. Entries
    /// whose element is not on the surface are skipped. Returns the number of
    /// property writes that landed.
    pub fn render(&mut self, surface: &mut dyn Surface) -> usize {
        if !self.dirty {
            return 0;
        }
        self.dirty = false;

        let time = self.time_ms;
        let default_easing = self.default_easing;
        let mut writes = 0;

        for entry in &mut self.entries {
            if !surface.contains(&entry.target) {
                tracing::trace!("Timeline: skipping missing element {:?}", entry.target);
                continue;
            }

            let local = time - entry.start_ms as f32;
            let started = local > entry.tween.delay_ms as f32
                || (local >= entry.tween.delay_ms as f32 && entry.tween.from.is_some());

            let values = if started {
                let from = match entry.start_state() {
                    Some(from) => from,
                    None => {
                        let captured = capture(&*surface, &entry.target, &entry.tween.to);
                        entry.resolved_from = Some(captured.clone());
                        captured
                    }
                };
                let t = entry.tween.progress_at(local);
                entry.tween.sample(&from, t, default_easing)
            } else {
                // Before its start an entry shows its start state, once known
                match entry.start_state() {
                    Some(from) => from,
                    None => continue,
                }
            };

            for (property, value) in values.iter() {
                if surface.set_style(&entry.target, property, value) {
                    writes += 1;
                }
            }
        }
        writes
    }
}

/// Current surface values for every property named in `template`
fn capture(surface: &dyn Surface, target: &ElementId, template: &PropertyValues) -> PropertyValues {
    template
        .properties()
        .map(|property| {
            let value = surface
                .style_value(target, property)
                .unwrap_or_else(|| property.resting_value());
            (property, value)
        })
        .collect()
}
