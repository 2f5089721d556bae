//! Fun Selector Widget Library
//!
//! The two-state selector with FSM-driven interactions and key-framed
//! spring transitions. The model is headless: it owns node geometry and
//! colors, a host toolkit draws them.

pub mod selector;
pub mod style;

pub use selector::{
    FunSelector, LabelNode, RectNode, SelectorEvent, SelectorProperty, SelectorState,
    SizeConstraints, Slot,
};
pub use style::SelectorStyle;
