//! Millisecond uptime for stamping pointer frames.

// web_time works on native and wasm targets alike.
use web_time::Instant;

/// Monotonic millisecond clock measured from its creation.
///
/// Hosts that receive platform event timestamps should pass those through
/// instead; this is for platforms that deliver bare contact lists.
#[derive(Clone, Copy, Debug)]
pub struct UptimeClock {
    origin: Instant,
}

impl UptimeClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

impl Default for UptimeClock {
    fn default() -> Self {
        Self::new()
    }
}
