//! Fun Selector Animation System
//!
//! Easing curves, key frames, and timeline playback for the selector's
//! state transitions.
//!
//! # Features
//!
//! - **Spring Easing**: damped oscillation curve with an optional bounce profile
//! - **Easing Curves**: linear and accelerate/decelerate curves
//! - **Key Frames**: timed target values per animated property
//! - **Timelines**: sample many properties over a single playback clock
//!
//! # Example
//!
//! ```rust
//! use funsel_animation::SpringInterpolator;
//!
//! let spring = SpringInterpolator::default();
//! assert_eq!(spring.curve(1.0), 1.0);
//! ```

pub mod easing;
pub mod keyframe;
pub mod spring;
pub mod timeline;

pub use easing::Easing;
pub use keyframe::{KeyFrame, KeyValue, KeyframeTrack};
pub use spring::{SpringError, SpringInterpolator};
pub use timeline::Timeline;
