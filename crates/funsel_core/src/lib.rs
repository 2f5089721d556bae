//! Fun Selector Core
//!
//! Foundational primitives shared by the selector crates:
//!
//! - **Colors**: RGBA colors with hex parsing for configuration files
//! - **State Machines**: typed flat statecharts for widget interaction states
//!
//! # Example
//!
//! ```rust
//! use funsel_core::fsm::{StateMachine, Transition};
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
//! enum Light { Off, On }
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
//! enum Flip { Toggle }
//!
//! let mut fsm = StateMachine::new(
//!     Light::Off,
//!     [
//!         Transition::new(Light::Off, Flip::Toggle, Light::On),
//!         Transition::new(Light::On, Flip::Toggle, Light::Off),
//!     ],
//! );
//!
//! assert_eq!(fsm.send(Flip::Toggle), Light::On);
//! ```

pub mod color;
pub mod fsm;

pub use color::{Color, ColorError};
pub use fsm::{StateMachine, Transition};
