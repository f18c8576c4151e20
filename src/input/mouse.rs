use glam::DVec2;

/// Tracks cursor movement during a rotate gesture.
///
/// The first move after a gesture starts only records the position, so a
/// cursor that jumped while the gesture was inactive does not produce a
/// large rotation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragTracker {
    last: Option<DVec2>,
}

impl DragTracker {
    /// Create an idle tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a cursor position.
    ///
    /// Returns the delta since the previous tracked position while `active`,
    /// or `None` for the first move of a gesture and for any move while
    /// inactive (which also ends the gesture).
    pub fn track(&mut self, position: DVec2, active: bool) -> Option<DVec2> {
        if !active {
            self.last = None;
            return None;
        }
        let delta = self.last.map(|last| position - last);
        self.last = Some(position);
        delta
    }

    /// Forget the current gesture.
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Whether a gesture is in progress.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.last.is_some()
    }
}

/// Map a surface position in pixels (origin top-left, +Y down) to normalized
/// device coordinates (origin centre, +Y up).
///
/// Returns `None` for a degenerate surface.
#[must_use]
pub fn screen_to_ndc(position: DVec2, surface: DVec2) -> Option<DVec2> {
    if !(surface.is_finite() && surface.x > 0.0 && surface.y > 0.0) {
        return None;
    }
    Some(DVec2::new(
        2.0 * position.x / surface.x - 1.0,
        1.0 - 2.0 * position.y / surface.y,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_move_only_records() {
        let mut drag = DragTracker::new();
        assert_eq!(drag.track(DVec2::new(10.0, 10.0), true), None);
        assert!(drag.is_tracking());
        assert_eq!(
            drag.track(DVec2::new(13.0, 8.0), true),
            Some(DVec2::new(3.0, -2.0))
        );
    }

    #[test]
    fn inactive_move_ends_gesture() {
        let mut drag = DragTracker::new();
        let _ = drag.track(DVec2::ZERO, true);
        assert_eq!(drag.track(DVec2::new(50.0, 0.0), false), None);
        assert!(!drag.is_tracking());
        // Restarting suppresses the jump from the old position.
        assert_eq!(drag.track(DVec2::new(100.0, 0.0), true), None);
    }

    #[test]
    fn reset_forgets_position() {
        let mut drag = DragTracker::new();
        let _ = drag.track(DVec2::ZERO, true);
        drag.reset();
        assert_eq!(drag.track(DVec2::ONE, true), None);
    }

    #[test]
    fn screen_corners_map_to_ndc_corners() {
        let surface = DVec2::new(800.0, 600.0);
        assert_eq!(
            screen_to_ndc(DVec2::ZERO, surface),
            Some(DVec2::new(-1.0, 1.0))
        );
        assert_eq!(
            screen_to_ndc(surface, surface),
            Some(DVec2::new(1.0, -1.0))
        );
        assert_eq!(
            screen_to_ndc(DVec2::new(400.0, 300.0), surface),
            Some(DVec2::ZERO)
        );
    }

    #[test]
    fn degenerate_surface_has_no_ndc() {
        assert_eq!(screen_to_ndc(DVec2::ZERO, DVec2::new(0.0, 600.0)), None);
        assert_eq!(
            screen_to_ndc(DVec2::ZERO, DVec2::new(f64::NAN, 600.0)),
            None
        );
    }
}
