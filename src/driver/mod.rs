//! Interaction & capture driver: scripted actions, wait conditions,
//! assertions, and screenshot evidence.

pub mod actions;
pub mod compare;
pub mod types;
pub mod wait;

pub use actions::{
    ElementState, assert_disabled, assert_enabled, assert_visible, capture, click,
    element_state, fill, invoke, scroll_into_view,
};
pub use compare::{artifacts_differ, differing_pixels};
pub use types::{ScenarioError, ScenarioResult};
pub use wait::{TRANSITION_PAD, WaitCondition, wait};
