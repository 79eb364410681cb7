//! Pointer state in tile-space

/// Latest pointer position and primary-button state.
///
/// Written by the host's pointer events, read by entities through
/// `TickContext`. Every write replaces whole fields; the last write wins.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    /// Continuous tile-space position; may lie outside the grid
    x: f64,
    y: f64,
    /// Primary button currently held
    is_held: bool,
}

impl PointerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A pointer at a fixed position (hosts without event plumbing, tests)
    pub fn at(x: f64, y: f64, is_held: bool) -> Self {
        Self { x, y, is_held }
    }

    /// Process pointer movement, already converted to tile-space
    pub fn process_move(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    /// Process primary button press
    pub fn process_button_down(&mut self) {
        self.is_held = true;
    }

    /// Process primary button release
    pub fn process_button_up(&mut self) {
        self.is_held = false;
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    pub fn is_held(&self) -> bool {
        self.is_held
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_transitions() {
        let mut pointer = PointerState::new();
        assert!(!pointer.is_held());
        pointer.process_button_down();
        assert!(pointer.is_held());
        pointer.process_button_down();
        assert!(pointer.is_held());
        pointer.process_button_up();
        assert!(!pointer.is_held());
    }

    #[test]
    fn test_last_move_wins() {
        let mut pointer = PointerState::new();
        pointer.process_move(3.5, 4.25);
        pointer.process_move(-1.0, 70.0);
        assert_eq!(pointer.position(), (-1.0, 70.0));
    }
}
