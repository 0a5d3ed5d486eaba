//! Time-driven text animations
//!
//! Everything here is a pure function of elapsed time so the render loop
//! can call it every frame without keeping extra state.

use std::time::Duration;

/// Per-character typing delay
const TYPE_SPEED: Duration = Duration::from_millis(70);
/// Per-character deleting delay
const DELETE_SPEED: Duration = Duration::from_millis(50);
/// Pause with the full word shown
const HOLD_DELAY: Duration = Duration::from_millis(1000);

/// Braille spinner frames
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Looping typewriter over a list of words
///
/// Each word is typed, held, then deleted before the next one starts.
#[derive(Debug, Clone)]
pub struct Typewriter {
    words: Vec<String>,
}

impl Typewriter {
    pub fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    fn cycle_length(word: &str) -> Duration {
        let chars = word.chars().count() as u32;
        TYPE_SPEED * chars + HOLD_DELAY + DELETE_SPEED * chars
    }

    /// Visible text at `elapsed` since the animation started
    pub fn text_at(&self, elapsed: Duration) -> String {
        let total: Duration = self.words.iter().map(|w| Self::cycle_length(w)).sum();
        if total.is_zero() {
            return String::new();
        }

        let mut t = Duration::from_nanos((elapsed.as_nanos() % total.as_nanos()) as u64);
        for word in &self.words {
            let cycle = Self::cycle_length(word);
            if t >= cycle {
                t -= cycle;
                continue;
            }

            let chars = word.chars().count() as u32;
            let typing = TYPE_SPEED * chars;
            let visible = if t < typing {
                (t.as_millis() / TYPE_SPEED.as_millis()) as usize
            } else if t < typing + HOLD_DELAY {
                chars as usize
            } else {
                let deleting = t - typing - HOLD_DELAY;
                let removed = (deleting.as_millis() / DELETE_SPEED.as_millis()) as usize;
                (chars as usize).saturating_sub(removed)
            };
            return word.chars().take(visible).collect();
        }
        String::new()
    }
}

/// Spinner frame for the given elapsed time (80ms per frame)
pub fn spinner_frame(elapsed: Duration) -> &'static str {
    let idx = (elapsed.as_millis() / 80) as usize % SPINNER_FRAMES.len();
    SPINNER_FRAMES[idx]
}
