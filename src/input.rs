use tracing::warn;

use crate::controller::SlideshowController;
use crate::timer::Timers;

/// A user action the carousel reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    Next,
    Previous,
    JumpTo(usize),
    HoverEnter,
    HoverLeave,
}

/// Turns a per-frame "pointer is over the carousel" reading into enter/leave edges.
#[derive(Debug, Default)]
pub struct PointerTracker {
    inside: bool,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, inside: bool) -> Option<Interaction> {
        if inside == self.inside {
            return None;
        }
        self.inside = inside;
        Some(if inside {
            Interaction::HoverEnter
        } else {
            Interaction::HoverLeave
        })
    }
}

/// Routes `interaction` to the matching controller operation.
pub fn dispatch<T: Timers>(controller: &mut SlideshowController<T>, interaction: Interaction) {
    match interaction {
        Interaction::Next => controller.next(),
        Interaction::Previous => controller.previous(),
        Interaction::JumpTo(index) => {
            if let Err(e) = controller.jump_to(index) {
                warn!("Ignoring slide selection: {}", e);
            }
        }
        Interaction::HoverEnter => controller.hover_enter(),
        Interaction::HoverLeave => controller.hover_leave(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slide::Slide;
    use crate::stage::Stage;
    use crate::timer::FrameTimers;
    use std::time::Duration;

    fn controller(n: usize) -> SlideshowController<FrameTimers> {
        let slides = (0..n).map(|_| Slide::default()).collect();
        SlideshowController::new(
            Stage::from_slides(slides),
            FrameTimers::new(),
            Duration::from_millis(5000),
        )
    }

    #[test]
    fn tracker_reports_edges_only() {
        let mut tracker = PointerTracker::new();
        assert_eq!(tracker.update(false), None);
        assert_eq!(tracker.update(true), Some(Interaction::HoverEnter));
        assert_eq!(tracker.update(true), None);
        assert_eq!(tracker.update(false), Some(Interaction::HoverLeave));
        assert_eq!(tracker.update(false), None);
    }

    #[test]
    fn dispatch_routes_navigation() {
        let mut c = controller(4);
        dispatch(&mut c, Interaction::Next);
        assert_eq!(c.current_index(), 1);
        dispatch(&mut c, Interaction::Previous);
        dispatch(&mut c, Interaction::Previous);
        assert_eq!(c.current_index(), 3);
        dispatch(&mut c, Interaction::JumpTo(2));
        assert_eq!(c.current_index(), 2);
    }

    #[test]
    fn dispatch_ignores_out_of_range_jump() {
        let mut c = controller(2);
        dispatch(&mut c, Interaction::JumpTo(5));
        assert_eq!(c.current_index(), 0);
        assert!(c.is_auto_running());
    }

    #[test]
    fn dispatch_routes_hover() {
        let mut c = controller(2);
        dispatch(&mut c, Interaction::HoverEnter);
        assert!(!c.is_auto_running());
        dispatch(&mut c, Interaction::HoverLeave);
        assert!(c.is_auto_running());
        assert_eq!(c.timers().live(), 1);
    }
}
