/// Pointer drag state of the viewer.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging { last_pointer_pos: [f32; 2] },
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    /// Enters `Dragging` at `pos`. Returns false if a drag was already active,
    /// in which case the anchor is left untouched.
    pub fn begin(&mut self, pos: [f32; 2]) -> bool {
        if self.is_dragging() {
            return false;
        }
        *self = DragState::Dragging {
            last_pointer_pos: pos,
        };
        true
    }

    /// Moves the anchor to `pos` and returns how far the pointer travelled
    /// since the last update, or `None` while idle.
    pub fn advance(&mut self, pos: [f32; 2]) -> Option<[f32; 2]> {
        match self {
            DragState::Idle => None,
            DragState::Dragging { last_pointer_pos } => {
                let delta = [pos[0] - last_pointer_pos[0], pos[1] - last_pointer_pos[1]];
                *last_pointer_pos = pos;
                Some(delta)
            }
        }
    }

    pub fn end(&mut self) {
        *self = DragState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        assert_eq!(DragState::default(), DragState::Idle);
        assert!(!DragState::default().is_dragging());
    }

    #[test]
    fn test_begin_keeps_first_anchor() {
        let mut state = DragState::Idle;
        assert!(state.begin([10.0, 20.0]));
        assert!(!state.begin([99.0, 99.0]));
        assert_eq!(
            state,
            DragState::Dragging {
                last_pointer_pos: [10.0, 20.0]
            }
        );
    }

    #[test]
    fn test_advance_reports_delta_and_moves_anchor() {
        let mut state = DragState::Idle;
        assert_eq!(state.advance([5.0, 5.0]), None);

        state.begin([10.0, 20.0]);
        assert_eq!(state.advance([15.0, 18.0]), Some([5.0, -2.0]));
        assert_eq!(state.advance([15.0, 18.0]), Some([0.0, 0.0]));
    }

    #[test]
    fn test_end_is_idempotent() {
        let mut state = DragState::Idle;
        state.begin([1.0, 1.0]);
        state.end();
        let once = state;
        state.end();
        assert_eq!(state, once);
        assert_eq!(state, DragState::Idle);
    }
}
