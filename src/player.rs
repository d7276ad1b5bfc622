//! Illumination program playback
//!
//! Walks a program pattern by pattern: shift the pattern in, hold the
//! trigger off for the dwell time, then fire it. Each tick reports the
//! instant the next tick is due instead of blocking.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputDriver;
use crate::codec::RegisterBytes;
use crate::controller::ActiveLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Next tick shifts in the pattern under the cursor
    Load,
    /// Pattern is loaded, trigger fires once `until` is reached
    Hold { until: Instant },
}

/// Result of a playback step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackStep {
    /// When the next step is due
    pub next_deadline: Instant,
    /// How long to wait until the next step (zero if it is due now)
    pub sleep_duration: Duration,
    /// Pattern handled by this step, `None` for an empty program
    pub pattern_index: Option<usize>,
}

/// Cycles through a program, one pattern per dwell period.
///
/// Every pattern goes through two ticks:
/// 1. load the pattern and deactivate the trigger
/// 2. after the dwell time, activate the trigger and move to the next pattern
///
/// # Example
///
/// ```ignore
/// matrix.configure()?;
/// let mut player = matrix.player();
/// let mut now = Instant::from_millis(0);
///
/// // One full DPC cycle takes two ticks per pattern
/// for _ in 0..2 * matrix.dpc().len() {
///     let step = matrix.step(&mut player, Program::Dpc, now)?;
///     wait_until(step.next_deadline);
///     now = step.next_deadline;
/// }
/// ```
#[derive(Debug, Clone)]
pub struct PatternPlayer {
    dwell: Duration,
    trigger_level: ActiveLevel,
    cursor: usize,
    phase: Phase,
}

impl PatternPlayer {
    pub const fn new(dwell: Duration, trigger_level: ActiveLevel) -> Self {
        Self {
            dwell,
            trigger_level,
            cursor: 0,
            phase: Phase::Load,
        }
    }

    /// Process one playback step and return timing information.
    pub fn tick<D: OutputDriver>(
        &mut self,
        patterns: &[RegisterBytes],
        driver: &mut D,
        now: Instant,
    ) -> Result<PlaybackStep, D::Error> {
        if self.cursor >= patterns.len() {
            self.reset();
        }
        let Some(pattern) = patterns.get(self.cursor) else {
            return Ok(PlaybackStep {
                next_deadline: now + self.dwell,
                sleep_duration: self.dwell,
                pattern_index: None,
            });
        };

        match self.phase {
            Phase::Load => {
                driver.write(pattern)?;
                driver.set_trigger(self.trigger_level.pin_level(false))?;
                let until = now + self.dwell;
                self.phase = Phase::Hold { until };

                #[cfg(feature = "esp32-log")]
                println!("[PatternPlayer.tick] loaded pattern {}", self.cursor);

                Ok(PlaybackStep {
                    next_deadline: until,
                    sleep_duration: self.dwell,
                    pattern_index: Some(self.cursor),
                })
            }
            Phase::Hold { until } if now < until => Ok(PlaybackStep {
                next_deadline: until,
                sleep_duration: until - now,
                pattern_index: Some(self.cursor),
            }),
            Phase::Hold { .. } => {
                driver.set_trigger(self.trigger_level.pin_level(true))?;
                let shown = self.cursor;
                self.cursor = (self.cursor + 1) % patterns.len();
                self.phase = Phase::Load;

                Ok(PlaybackStep {
                    next_deadline: now,
                    sleep_duration: Duration::from_millis(0),
                    pattern_index: Some(shown),
                })
            }
        }
    }

    /// Rewind to the first pattern
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.phase = Phase::Load;
    }

    /// Index of the pattern that is loaded or will be loaded next
    pub const fn current_index(&self) -> usize {
        self.cursor
    }

    pub const fn dwell(&self) -> Duration {
        self.dwell
    }
}
