//! Movement domain: the input source controllers sample every update tick.

/// Named analog axes a controller reads: "Horizontal", "Vertical", "Jump"
/// and "Mouse Y".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAxis {
    Horizontal,
    Vertical,
    Jump,
    MouseY,
}

/// Provider of axis values, injected into the controller instead of read
/// from global state.
///
/// Values are passed through unchecked. Keyboard-backed sources report
/// `-1.0`, `0.0` or `1.0`; mouse axes report a scaled per-frame delta.
pub trait InputSource {
    fn axis(&self, axis: InputAxis) -> f32;

    /// Whether the jump button went down since the previous update tick.
    fn jump_just_pressed(&self) -> bool {
        false
    }
}
