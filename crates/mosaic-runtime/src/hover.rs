//! Hover/press state machine for clickable boxes

/// Per-box pointer interaction state.
///
/// A box activates only when the pointer presses inside it after having
/// been seen released inside it, so a pointer dragged in while already
/// held never activates on entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HoverState {
    /// Pointer outside the box
    #[default]
    Idle,
    /// Pointer inside, held continuously since it entered
    HoveredUnarmed,
    /// Pointer inside and seen released since it entered
    HoveredArmed,
}

impl HoverState {
    /// Advance one tick. Returns true when the box activates this tick.
    ///
    /// Activation needs the box to have been armed on a previous tick; a
    /// release seen this tick arms it for the next one.
    pub fn step(&mut self, inside: bool, held: bool) -> bool {
        let was_armed = *self == HoverState::HoveredArmed;

        *self = match (*self, inside) {
            (_, false) => HoverState::Idle,
            (HoverState::HoveredArmed, true) => HoverState::HoveredArmed,
            (HoverState::Idle | HoverState::HoveredUnarmed, true) if held => {
                HoverState::HoveredUnarmed
            }
            (HoverState::Idle | HoverState::HoveredUnarmed, true) => HoverState::HoveredArmed,
        };

        inside && held && was_armed
    }

    pub fn is_hovered(&self) -> bool {
        *self != HoverState::Idle
    }

    pub fn is_armed(&self) -> bool {
        *self == HoverState::HoveredArmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_release_press_activates() {
        let mut state = HoverState::Idle;
        assert!(!state.step(true, false));
        assert_eq!(state, HoverState::HoveredArmed);
        assert!(state.step(true, true));
    }

    #[test]
    fn test_enter_while_held_never_activates() {
        let mut state = HoverState::Idle;
        for _ in 0..10 {
            assert!(!state.step(true, true));
        }
        assert_eq!(state, HoverState::HoveredUnarmed);

        // Release arms it, the next press fires
        assert!(!state.step(true, false));
        assert!(state.is_armed());
        assert!(state.step(true, true));
    }

    #[test]
    fn test_leaving_disarms() {
        let mut state = HoverState::Idle;
        state.step(true, false);
        assert!(state.is_armed());
        assert!(!state.step(false, false));
        assert_eq!(state, HoverState::Idle);
        assert!(!state.is_hovered());

        // Re-entering held does not reuse the old arming
        assert!(!state.step(true, true));
        assert_eq!(state, HoverState::HoveredUnarmed);
    }

    #[test]
    fn test_press_outside_does_nothing() {
        let mut state = HoverState::Idle;
        state.step(true, false);
        assert!(!state.step(false, true));
        assert_eq!(state, HoverState::Idle);
    }

    #[test]
    fn test_repeat_fire_while_held() {
        let mut state = HoverState::Idle;
        state.step(true, false);
        assert!(state.step(true, true));
        assert!(state.step(true, true));
    }
}
