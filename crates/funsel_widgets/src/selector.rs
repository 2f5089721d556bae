//! Fun selector widget with FSM-driven transitions
//!
//! Two rounded rectangles sit next to the labels "upper" and "lower". The
//! bright (`selected`) rectangle marks the active slot. A press swaps the
//! rectangles in three beats:
//!
//! - 0-500 ms: the resting rectangle stretches to cover both slots
//! - 500-1000 ms: the other rectangle, now in front, springs into the freed slot
//! - 1000-1500 ms: the stretched rectangle shrinks back into its new slot
//!
//! The selection flips when the transition finishes.

use std::sync::Arc;

use funsel_animation::{Easing, KeyFrame, SpringInterpolator, Timeline};
use funsel_core::fsm::{StateMachine, Transition};
use funsel_core::Color;
use tracing::debug;

use crate::style::SelectorStyle;

/// Distance from the widget edge to the rounded background
pub const INSETS: f32 = 10.0;
/// Top-left of the upper rectangle
pub const OFFSET: f32 = 20.0;
/// Side length of each rectangle
pub const SIZE: f32 = 20.0;
/// Corner arc of the rectangles
pub const ARC: f32 = 20.0;
/// Horizontal gap from rectangle origin to its label
pub const LABEL_GAP: f32 = 30.0;

/// Height of a rectangle stretched over both slots
const STRETCHED: f32 = SIZE * 2.5;
/// Vertical distance between the two slots
const SLOT_DISTANCE: f32 = SIZE * 1.5;

const STRETCH_MS: u32 = 500;
const SPRING_MS: u32 = 1000;
const SETTLE_MS: u32 = 1500;

/// Selector interaction states
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SelectorState {
    /// Initial state
    LowerSelected,
    SelectingUpper,
    UpperSelected,
    SelectingLower,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SelectorEvent {
    Press,
    TransitionFinished,
}

/// One of the two rectangles, named by the slot it starts in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    Upper,
    Lower,
}

/// Animated rectangle properties
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectorProperty {
    Height(Slot),
    TranslateY(Slot),
}

/// Size limits reported to the host layout
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizeConstraints {
    pub min: (f32, f32),
    pub preferred: (f32, f32),
    pub max: (f32, f32),
}

/// A rounded rectangle node
#[derive(Clone, Debug, PartialEq)]
pub struct RectNode {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub arc: f32,
    /// Animated vertical offset from `y`
    pub translate_y: f32,
    pub fill: Color,
}

impl RectNode {
    fn new(y: f32, fill: Color) -> Self {
        Self {
            x: OFFSET,
            y,
            width: SIZE,
            height: SIZE,
            arc: ARC,
            translate_y: 0.0,
            fill,
        }
    }

    /// Top edge after translation
    pub fn top(&self) -> f32 {
        self.y + self.translate_y
    }

    /// Bottom edge after translation
    pub fn bottom(&self) -> f32 {
        self.top() + self.height
    }
}

/// A text label node
#[derive(Clone, Debug, PartialEq)]
pub struct LabelNode {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub fill: Color,
}

/// The two-state selector model
pub struct FunSelector {
    style: SelectorStyle,
    spring: SpringInterpolator,
    upper_rect: RectNode,
    lower_rect: RectNode,
    upper_label: LabelNode,
    lower_label: LabelNode,
    front: Slot,
    fsm: StateMachine<SelectorState, SelectorEvent>,
    timeline: Timeline<SelectorProperty>,
}

impl FunSelector {
    pub const SIZE_CONSTRAINTS: SizeConstraints = SizeConstraints {
        min: (120.0, 90.0),
        preferred: (250.0, 90.0),
        max: (1024.0, 90.0),
    };

    pub fn new() -> Self {
        Self::with_style(SelectorStyle::default())
    }

    pub fn with_style(style: SelectorStyle) -> Self {
        let fsm = StateMachine::new(
            SelectorState::LowerSelected,
            vec![
                Transition::new(
                    SelectorState::LowerSelected,
                    SelectorEvent::Press,
                    SelectorState::SelectingUpper,
                ),
                Transition::new(
                    SelectorState::SelectingUpper,
                    SelectorEvent::TransitionFinished,
                    SelectorState::UpperSelected,
                ),
                Transition::new(
                    SelectorState::UpperSelected,
                    SelectorEvent::Press,
                    SelectorState::SelectingLower,
                ),
                Transition::new(
                    SelectorState::SelectingLower,
                    SelectorEvent::TransitionFinished,
                    SelectorState::LowerSelected,
                ),
            ],
        );

        Self {
            style,
            spring: SpringInterpolator::selector_bounce(),
            upper_rect: RectNode::new(OFFSET, style.deselected),
            lower_rect: RectNode::new(OFFSET + SLOT_DISTANCE, style.selected),
            upper_label: LabelNode {
                text: "upper".to_string(),
                x: OFFSET + LABEL_GAP,
                y: OFFSET + 1.0,
                fill: style.upper_label,
            },
            lower_label: LabelNode {
                text: "lower".to_string(),
                x: OFFSET + LABEL_GAP,
                y: OFFSET + SLOT_DISTANCE + 1.0,
                fill: style.lower_label,
            },
            // The lower rectangle is declared last, so it starts on top
            front: Slot::Lower,
            fsm,
            timeline: Timeline::new(),
        }
    }

    /// Builder: use a different spring for the sliding rectangle
    pub fn spring_easing(mut self, spring: SpringInterpolator) -> Self {
        self.spring = spring;
        self
    }

    /// Register a callback fired with `true` when the upper slot becomes
    /// selected and `false` when the lower slot does
    pub fn on_selection_changed<F>(&mut self, listener: F)
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        let listener = Arc::new(listener);
        let on_upper = listener.clone();
        self.fsm
            .on_enter(SelectorState::UpperSelected, move || on_upper(true));
        self.fsm
            .on_enter(SelectorState::LowerSelected, move || listener(false));
    }

    /// Toggle the selection
    ///
    /// Starts the transition toward the other slot and returns `true`.
    /// Presses during a running transition are ignored.
    pub fn press(&mut self) -> bool {
        let from = self.fsm.current_state();
        let to = self.fsm.send(SelectorEvent::Press);
        if to == from {
            debug!(state = ?from, "press ignored while transition is running");
            return false;
        }
        let to_upper = to == SelectorState::SelectingUpper;

        self.front = if to_upper { Slot::Upper } else { Slot::Lower };
        self.timeline
            .set_key_frames(transition_frames(to_upper, self.spring));

        let upper = &self.upper_rect;
        let lower = &self.lower_rect;
        self.timeline.play(|property| match property {
            SelectorProperty::Height(Slot::Upper) => upper.height,
            SelectorProperty::Height(Slot::Lower) => lower.height,
            SelectorProperty::TranslateY(Slot::Upper) => upper.translate_y,
            SelectorProperty::TranslateY(Slot::Lower) => lower.translate_y,
        });
        self.apply_timeline();

        debug!(to_upper, "selector transition started");
        true
    }

    /// Advance a running transition by `dt_ms` milliseconds
    ///
    /// Returns `true` on the tick that completes the transition.
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        if !self.timeline.is_playing() {
            return false;
        }

        let finished = self.timeline.tick(dt_ms);
        self.apply_timeline();

        if finished {
            let state = self.fsm.send(SelectorEvent::TransitionFinished);
            debug!(?state, "selector transition finished");
        }
        finished
    }

    fn apply_timeline(&mut self) {
        for (property, value) in self.timeline.values() {
            match property {
                SelectorProperty::Height(Slot::Upper) => self.upper_rect.height = value,
                SelectorProperty::Height(Slot::Lower) => self.lower_rect.height = value,
                SelectorProperty::TranslateY(Slot::Upper) => self.upper_rect.translate_y = value,
                SelectorProperty::TranslateY(Slot::Lower) => self.lower_rect.translate_y = value,
            }
        }
    }

    /// Whether the upper slot holds the selection
    ///
    /// Flips only once a transition finishes.
    pub fn is_upper_selected(&self) -> bool {
        matches!(
            self.fsm.current_state(),
            SelectorState::UpperSelected | SelectorState::SelectingLower
        )
    }

    pub fn state(&self) -> SelectorState {
        self.fsm.current_state()
    }

    pub fn is_animating(&self) -> bool {
        self.timeline.is_playing()
    }

    /// Transition history as (from, event, to)
    pub fn history(&self) -> &[(SelectorState, SelectorEvent, SelectorState)] {
        self.fsm.history()
    }

    pub fn upper_rect(&self) -> &RectNode {
        &self.upper_rect
    }

    pub fn lower_rect(&self) -> &RectNode {
        &self.lower_rect
    }

    pub fn upper_label(&self) -> &LabelNode {
        &self.upper_label
    }

    pub fn lower_label(&self) -> &LabelNode {
        &self.lower_label
    }

    /// The rectangle drawn on top
    pub fn front(&self) -> Slot {
        self.front
    }

    pub fn style(&self) -> &SelectorStyle {
        &self.style
    }

    pub fn background(&self) -> Color {
        self.style.background
    }

    /// Replace the colors of every node
    pub fn set_style(&mut self, style: SelectorStyle) {
        self.upper_rect.fill = style.deselected;
        self.lower_rect.fill = style.selected;
        self.upper_label.fill = style.upper_label;
        self.lower_label.fill = style.lower_label;
        self.style = style;
    }

    pub fn spring(&self) -> SpringInterpolator {
        self.spring
    }

    /// Total length of one transition
    pub fn transition_ms(&self) -> u32 {
        SETTLE_MS
    }
}

impl Default for FunSelector {
    fn default() -> Self {
        Self::new()
    }
}

/// Key frames for a transition toward the upper (`to_upper`) or lower slot
///
/// The rectangle resting in the target slot stretches and later shrinks; the
/// other one springs across.
fn transition_frames(to_upper: bool, spring: SpringInterpolator) -> Vec<KeyFrame<SelectorProperty>> {
    let (stretched, moving) = if to_upper {
        (Slot::Lower, Slot::Upper)
    } else {
        (Slot::Upper, Slot::Lower)
    };
    // Where the stretched rectangle anchors, and where the moving one ends up
    let (anchor, hold, rest) = if to_upper {
        (-SLOT_DISTANCE, 0.0, SLOT_DISTANCE)
    } else {
        (0.0, -SLOT_DISTANCE, 0.0)
    };

    let height = SelectorProperty::Height(stretched);
    vec![
        KeyFrame::at(0).eased(height, SIZE, Easing::EaseBoth),
        KeyFrame::at(STRETCH_MS)
            .eased(height, STRETCHED, Easing::EaseBoth)
            .eased(SelectorProperty::TranslateY(stretched), anchor, Easing::EaseBoth)
            .value(SelectorProperty::TranslateY(moving), hold),
        KeyFrame::at(SPRING_MS)
            .value(height, STRETCHED)
            .eased(SelectorProperty::TranslateY(moving), rest, Easing::Spring(spring)),
        KeyFrame::at(SETTLE_MS).eased(height, SIZE, Easing::EaseBoth),
    ]
}
