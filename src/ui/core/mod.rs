//! Core UI functionality shared by components and the host loop.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions and focus sections
//! - [`component`] - Base component trait
//! - [`event_handler`] - Terminal event polling and frame throttling
//! - [`outside_click`] - Scoped outside-click listener
//!
//! # Architecture
//!
//! 1. **Components** implement the [`Component`] trait for consistent rendering
//! 2. Key and mouse events are translated into **Actions**
//! 3. `update` applies an action and returns the follow-up action, such as
//!    [`Action::ValueChanged`] when a selection completes

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod outside_click;

// Re-export core types for easier access from other modules
pub use actions::{Action, FocusSection};
pub use component::Component;
pub use event_handler::{EventHandler, EventType, FRAME_INTERVAL};
pub use outside_click::OutsideClickListener;
