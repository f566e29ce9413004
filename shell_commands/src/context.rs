//! Per-invocation context handed to built-ins
//!
//! Time and fake file sizes come through traits so tests can pin them.

use chrono::{DateTime, FixedOffset, Local};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the current time
pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Local wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Always reports the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

/// Source of the made-up file sizes shown by `ls -l`
pub trait SizeSource {
    /// Byte size of a file, in `[100, 2147]`
    fn file_size(&mut self) -> u32;

    /// Whole kilobytes for `-h`, in `[1, 9]`
    fn human_file_size(&mut self) -> u32;
}

/// Random sizes, as the page has always shown
#[derive(Debug, Clone)]
pub struct RandomSizes {
    rng: StdRng,
}

impl RandomSizes {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sizes from a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomSizes {
    fn default() -> Self {
        Self::new()
    }
}

impl SizeSource for RandomSizes {
    fn file_size(&mut self) -> u32 {
        self.rng.gen_range(100..=2147)
    }

    fn human_file_size(&mut self) -> u32 {
        self.rng.gen_range(1..=9)
    }
}

/// Constant sizes (tests)
#[derive(Debug, Clone, Copy)]
pub struct FixedSizes {
    pub bytes: u32,
    pub kilobytes: u32,
}

impl SizeSource for FixedSizes {
    fn file_size(&mut self) -> u32 {
        self.bytes
    }

    fn human_file_size(&mut self) -> u32 {
        self.kilobytes
    }
}

/// Session state a command may read
pub struct CommandContext<'a> {
    /// Current working directory, verbatim
    pub cwd: &'a str,
    /// Line printed by `whoami`
    pub identity: &'a str,
    pub clock: &'a dyn Clock,
    pub sizes: &'a mut dyn SizeSource,
}
