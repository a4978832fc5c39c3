/// Converts a monotonically increasing `now_ms` into per-tick deltas (in seconds).
///
/// The first sample yields `0.0`. A clock that goes backwards yields `0.0` and becomes the new
/// time base. Long stalls are capped at `max_delta_ms` so a hitch doesn't finish every animation
/// in one step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameClock {
    last_ms: Option<u64>,
    pub max_delta_ms: u64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_ms: None,
            max_delta_ms: 250,
        }
    }

    pub fn with_max_delta_ms(mut self, max_delta_ms: u64) -> Self {
        self.max_delta_ms = max_delta_ms;
        self
    }

    pub fn last_ms(&self) -> Option<u64> {
        self.last_ms
    }

    pub fn delta_seconds(&mut self, now_ms: u64) -> f32 {
        let Some(last) = self.last_ms.replace(now_ms) else {
            return 0.0;
        };
        if now_ms < last {
            return 0.0;
        }
        let elapsed = (now_ms - last).min(self.max_delta_ms);
        elapsed as f32 / 1000.0
    }

    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}
