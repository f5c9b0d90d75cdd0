/// Downward drag distance, in px, that triggers a refresh on release.
pub const PULL_THRESHOLD_PX: f64 = 64.0;

/// Tracks a single touch drag over the list.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PullGesture {
    start_y: Option<f64>,
    current_y: f64,
}

impl PullGesture {
    pub fn start(&mut self, y: f64) {
        self.start_y = Some(y);
        self.current_y = y;
    }

    pub fn track(&mut self, y: f64) {
        if self.start_y.is_some() {
            self.current_y = y;
        }
    }

    /// Downward distance pulled so far, never negative.
    pub fn distance(&self) -> f64 {
        self.start_y
            .map(|start| (self.current_y - start).max(0.0))
            .unwrap_or(0.0)
    }

    /// Ends the gesture. Returns `true` if it should trigger a refresh.
    pub fn release(&mut self) -> bool {
        let triggered = self.distance() >= PULL_THRESHOLD_PX;
        *self = Self::default();
        triggered
    }
}
