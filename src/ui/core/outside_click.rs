//! Outside-click subscription
//!
//! A popover closes when the pointer is pressed anywhere outside the area its
//! owner last drew. The host forwards every pointer press to mounted
//! components; the listener only reacts while it is attached, which happens on
//! mount and is undone on unmount.

use ratatui::layout::{Position, Rect};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OutsideClickListener {
    attached: bool,
    boundary: Vec<Rect>,
}

impl OutsideClickListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self) {
        self.attached = true;
    }

    pub fn detach(&mut self) {
        self.attached = false;
        self.boundary.clear();
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Replace the owner's boundary with the areas drawn this frame
    pub fn set_boundary(&mut self, areas: impl IntoIterator<Item = Rect>) {
        self.boundary = areas.into_iter().filter(|area| !area.is_empty()).collect();
    }

    /// True when an attached listener sees a press outside every boundary area
    pub fn is_outside(&self, column: u16, row: u16) -> bool {
        let position = Position::new(column, row);
        self.attached && !self.boundary.iter().any(|area| area.contains(position))
    }
}
