//! Interaction helpers for country selection and hover tracking.

use crate::chart::{HoverFrame, LineChart};
use crate::hover::PointerEvent;

/// Toggle a country code in the selection.
///
/// Selection order is kept; it decides which palette color a country gets.
pub(crate) fn toggle_country(selected: &mut Vec<String>, code: &str) {
    match selected.iter().position(|existing| existing == code) {
        Some(index) => {
            selected.remove(index);
        }
        None => selected.push(code.to_string()),
    }
}

/// Hover state of one chart, driven by pointer events.
///
/// Every move supersedes the previous frame and leaving clears it. Moves
/// over elements that do not start a resolution leave the frame untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HoverState {
    frame: HoverFrame,
}

impl HoverState {
    /// Create an empty hover state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a pointer event. Returns true if the frame changed.
    pub fn handle(&mut self, chart: &LineChart, event: &PointerEvent) -> bool {
        let next = match event {
            PointerEvent::Leave => HoverFrame::default(),
            PointerEvent::Move { target, .. } if !target.is_resolvable() => return false,
            PointerEvent::Move { .. } => chart.hover(event),
        };
        if next == self.frame {
            return false;
        }
        self.frame = next;
        true
    }

    /// Forget the current frame.
    pub fn clear(&mut self) {
        self.frame = HoverFrame::default();
    }

    /// Access the current frame.
    pub fn frame(&self) -> &HoverFrame {
        &self.frame
    }

    /// Check whether an indicator should be drawn.
    pub fn is_active(&self) -> bool {
        !self.frame.groups.is_empty()
    }
}
