//! Folio Animation
//!
//! Tweens, timeline sequencing and springs, stepped by a frame scheduler
//! that writes their values to a [`folio_core::Surface`].
//!
//! # Features
//!
//! - **Easing**: the power curve family addressable by name (`"power3.out"`)
//! - **Tweens**: from/to property transitions with delay, easing and snapping
//! - **Timelines**: overlapping sequences with relative positions and staggers
//! - **Springs**: RK4-integrated followers for pointer-driven motion
//! - **Scheduler**: owns live animations; RAII wrappers unregister on drop

pub mod easing;
pub mod scheduler;
pub mod spring;
pub mod timeline;
pub mod tween;
pub mod values;

pub use easing::Easing;
pub use scheduler::{
    AnimatedTimeline, AnimatedValue, AnimationScheduler, SchedulerHandle, SpringId, TimelineId,
};
pub use spring::{Spring, SpringConfig};
pub use timeline::{
    PlayDirection, PlayState, Position, Timeline, TimelineEntryId, TimelineEvent,
};
pub use tween::Tween;
pub use values::Interpolate;
