use core::fmt;

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputDriver;
use crate::codec::RegisterBytes;
use crate::error::PatternError;
use crate::geometry::{dpc_patterns, focus_pattern};
use crate::player::{PatternPlayer, PlaybackStep};
use crate::sequence::PatternSequence;

/// Patterns in the focus program
pub const FOCUS_CAPACITY: usize = 1;
/// Patterns in the DPC program
pub const DPC_CAPACITY: usize = 4;

pub type FocusSequence = PatternSequence<FOCUS_CAPACITY>;
pub type DpcSequence = PatternSequence<DPC_CAPACITY>;

/// Pin level that activates the matrix trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveLevel {
    High,
    Low,
}

impl ActiveLevel {
    /// Pin level for the requested logical state
    pub const fn pin_level(self, active: bool) -> bool {
        match self {
            Self::High => active,
            Self::Low => !active,
        }
    }
}

/// Illumination programs held by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Program {
    Focus,
    Dpc,
}

/// Configuration for the matrix controller
#[derive(Debug, Clone, Copy)]
pub struct AutomatrixConfig {
    /// Outer ring radius in LEDs
    pub outer_radius: f32,
    /// Inner ring radius in LEDs
    pub inner_radius: f32,
    pub trigger_level: ActiveLevel,
    /// How long each pattern is held before the trigger fires
    pub dwell: Duration,
}

impl Default for AutomatrixConfig {
    fn default() -> Self {
        Self {
            outer_radius: 4.0,
            inner_radius: 3.0,
            trigger_level: ActiveLevel::Low,
            dwell: Duration::from_secs(1),
        }
    }
}

/// Errors raised by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerError<E> {
    Pattern(PatternError),
    Driver(E),
}

impl<E> From<PatternError> for ControllerError<E> {
    fn from(err: PatternError) -> Self {
        Self::Pattern(err)
    }
}

impl<E: fmt::Display> fmt::Display for ControllerError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pattern(err) => write!(f, "pattern error: {err}"),
            Self::Driver(err) => write!(f, "driver error: {err}"),
        }
    }
}

impl<E: core::error::Error + 'static> core::error::Error for ControllerError<E> {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Pattern(err) => Some(err),
            Self::Driver(err) => Some(err),
        }
    }
}

/// Matrix controller - owns the driver and the illumination programs
pub struct Automatrix<D: OutputDriver> {
    driver: D,
    config: AutomatrixConfig,
    focus: FocusSequence,
    dpc: DpcSequence,
}

impl<D: OutputDriver> Automatrix<D> {
    /// Create a controller with empty programs.
    ///
    /// Call [`Automatrix::configure`] to generate the patterns.
    pub const fn new(driver: D, config: AutomatrixConfig) -> Self {
        Self {
            driver,
            config,
            focus: PatternSequence::new(),
            dpc: PatternSequence::new(),
        }
    }

    /// Regenerate both programs from the configured radii.
    ///
    /// The trigger is deactivated before the new patterns are built.
    pub fn configure(&mut self) -> Result<(), ControllerError<D::Error>> {
        self.focus.clear();
        self.dpc.clear();
        self.enable(false).map_err(ControllerError::Driver)?;

        let outer = self.config.outer_radius;
        let inner = self.config.inner_radius;

        self.focus.append(&focus_pattern(outer, inner))?;
        for mask in dpc_patterns(outer, inner) {
            #[cfg(feature = "esp32-log")]
            println!("[Automatrix.configure] added dpc pattern:\n{}", mask);
            self.dpc.append(&mask)?;
        }

        #[cfg(feature = "esp32-log")]
        println!(
            "[Automatrix.configure] configured radii {} / {}",
            outer, inner
        );
        Ok(())
    }

    /// Set new ring radii. Takes effect on the next [`Automatrix::configure`].
    pub fn set_radii(&mut self, outer_radius: f32, inner_radius: f32) {
        self.config.outer_radius = outer_radius;
        self.config.inner_radius = inner_radius;
    }

    /// Shift one pattern into the register chain
    pub fn load_pattern(&mut self, pattern: &RegisterBytes) -> Result<(), D::Error> {
        #[cfg(feature = "esp32-log")]
        println!("[Automatrix.load_pattern] {:02x?}", pattern);
        self.driver.write(pattern)
    }

    /// Activate or deactivate the matrix trigger
    pub fn enable(&mut self, active: bool) -> Result<(), D::Error> {
        let level = self.config.trigger_level.pin_level(active);
        #[cfg(feature = "esp32-log")]
        println!("[Automatrix.enable] active={} pin={}", active, level);
        self.driver.set_trigger(level)
    }

    /// Create a player using the configured dwell time and trigger level
    pub const fn player(&self) -> PatternPlayer {
        PatternPlayer::new(self.config.dwell, self.config.trigger_level)
    }

    /// Advance playback of a program by one step
    pub fn step(
        &mut self,
        player: &mut PatternPlayer,
        program: Program,
        now: Instant,
    ) -> Result<PlaybackStep, D::Error> {
        let patterns = match program {
            Program::Focus => self.focus.patterns(),
            Program::Dpc => self.dpc.patterns(),
        };
        player.tick(patterns, &mut self.driver, now)
    }

    /// Encoded patterns of a program
    pub fn program(&self, program: Program) -> &[RegisterBytes] {
        match program {
            Program::Focus => self.focus.patterns(),
            Program::Dpc => self.dpc.patterns(),
        }
    }

    pub const fn config(&self) -> &AutomatrixConfig {
        &self.config
    }

    pub const fn focus(&self) -> &FocusSequence {
        &self.focus
    }

    pub const fn dpc(&self) -> &DpcSequence {
        &self.dpc
    }

    pub const fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    pub fn into_driver(self) -> D {
        self.driver
    }
}
