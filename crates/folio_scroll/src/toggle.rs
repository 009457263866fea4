//! Toggle actions
//!
//! What a trigger does to its animation at each of the four region
//! crossings, written in the familiar four-word form
//! `"onEnter onLeave onEnterBack onLeaveBack"`.

use std::fmt;
use std::str::FromStr;

use folio_animation::AnimatedTimeline;
use folio_core::FolioError;

/// A crossing of a trigger region boundary
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TriggerEvent {
    /// Scrolling down past the start
    Enter,
    /// Scrolling down past the end
    Leave,
    /// Scrolling up past the end
    EnterBack,
    /// Scrolling up past the start
    LeaveBack,
}

/// What to do with the animation on a crossing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ToggleAction {
    Play,
    Pause,
    Resume,
    Reverse,
    Restart,
    Reset,
    Complete,
    #[default]
    None,
}

impl ToggleAction {
    /// Apply to a registered timeline
    pub fn apply(self, timeline: &AnimatedTimeline) {
        match self {
            ToggleAction::Play => timeline.play(),
            ToggleAction::Pause => timeline.pause(),
            ToggleAction::Resume => timeline.resume(),
            ToggleAction::Reverse => timeline.reverse(),
            ToggleAction::Restart => timeline.restart(),
            ToggleAction::Reset => timeline.reset(),
            ToggleAction::Complete => timeline.complete(),
            ToggleAction::None => {}
        }
    }

    fn name(self) -> &'static str {
        match self {
            ToggleAction::Play => "play",
            ToggleAction::Pause => "pause",
            ToggleAction::Resume => "resume",
            ToggleAction::Reverse => "reverse",
            ToggleAction::Restart => "restart",
            ToggleAction::Reset => "reset",
            ToggleAction::Complete => "complete",
            ToggleAction::None => "none",
        }
    }
}

impl FromStr for ToggleAction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "play" => ToggleAction::Play,
            "pause" => ToggleAction::Pause,
            "resume" => ToggleAction::Resume,
            "reverse" => ToggleAction::Reverse,
            "restart" => ToggleAction::Restart,
            "reset" => ToggleAction::Reset,
            "complete" => ToggleAction::Complete,
            "none" => ToggleAction::None,
            _ => return Err(()),
        })
    }
}

/// Actions for enter, leave, enter-back and leave-back
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ToggleActions {
    pub on_enter: ToggleAction,
    pub on_leave: ToggleAction,
    pub on_enter_back: ToggleAction,
    pub on_leave_back: ToggleAction,
}

impl ToggleActions {
    /// `"play none none reverse"`: reveal on the way down, hide again when
    /// scrolled back above the start
    pub const fn play_reverse() -> Self {
        Self {
            on_enter: ToggleAction::Play,
            on_leave: ToggleAction::None,
            on_enter_back: ToggleAction::None,
            on_leave_back: ToggleAction::Reverse,
        }
    }

    /// `"play none none none"`: one-shot
    pub const fn play_once() -> Self {
        Self {
            on_enter: ToggleAction::Play,
            on_leave: ToggleAction::None,
            on_enter_back: ToggleAction::None,
            on_leave_back: ToggleAction::None,
        }
    }

    pub fn action_for(&self, event: TriggerEvent) -> ToggleAction {
        match event {
            TriggerEvent::Enter => self.on_enter,
            TriggerEvent::Leave => self.on_leave,
            TriggerEvent::EnterBack => self.on_enter_back,
            TriggerEvent::LeaveBack => self.on_leave_back,
        }
    }
}

impl Default for ToggleActions {
    fn default() -> Self {
        Self::play_once()
    }
}

impl FromStr for ToggleActions {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FolioError::InvalidToggleActions(s.to_string());
        let actions = s
            .split_whitespace()
            .map(|token| token.parse::<ToggleAction>().map_err(|_| invalid()))
            .collect::<Result<Vec<_>, _>>()?;
        match actions[..] {
            [on_enter, on_leave, on_enter_back, on_leave_back] => Ok(Self {
                on_enter,
                on_leave,
                on_enter_back,
                on_leave_back,
            }),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for ToggleActions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.on_enter.name(),
            self.on_leave.name(),
            self.on_enter_back.name(),
            self.on_leave_back.name()
        )
    }
}
