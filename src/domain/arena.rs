/// Immutable play-field bounds in pixels, fixed when a simulation starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Largest top-left coordinate pair that keeps a square of `size` inside.
    pub fn spawn_extent(&self, size: f32) -> (f32, f32) {
        ((self.width - size).max(0.0), (self.height - size).max(0.0))
    }
}
