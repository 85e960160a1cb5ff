//! Calculation flags passed through to the ephemeris provider.

/// Ephemeris dataset a provider should compute from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dataset {
    /// Compressed planetary files (the conventional default).
    #[default]
    Swiss,
    /// Numerical integration files such as DE4xx.
    Jpl,
    /// Built-in semi-analytic theory, no files required.
    Moshier,
}

impl Dataset {
    pub const fn bits(self) -> u32 {
        match self {
            Self::Jpl => 1,
            Self::Swiss => 2,
            Self::Moshier => 4,
        }
    }
}

/// Flag word for provider calls.
///
/// Mirrors the swiss-ephemeris `iflag` layout so native backends can forward
/// [`CalcFlags::bits`] directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalcFlags {
    pub dataset: Dataset,
    /// Return angles in radians instead of degrees.
    pub radians: bool,
    /// Fill the rate half of the output vector.
    pub speed: bool,
}

const FLAG_SPEED: u32 = 256;
const FLAG_RADIANS: u32 = 8192;

impl CalcFlags {
    pub const fn new(dataset: Dataset, radians: bool, speed: bool) -> Self {
        Self {
            dataset,
            radians,
            speed,
        }
    }

    pub const fn with_dataset(mut self, dataset: Dataset) -> Self {
        self.dataset = dataset;
        self
    }

    pub const fn without_speed(mut self) -> Self {
        self.speed = false;
        self
    }

    pub const fn bits(self) -> u32 {
        let mut bits = self.dataset.bits();
        if self.speed {
            bits |= FLAG_SPEED;
        }
        if self.radians {
            bits |= FLAG_RADIANS;
        }
        bits
    }
}

impl Default for CalcFlags {
    fn default() -> Self {
        Self::new(Dataset::Swiss, true, true)
    }
}
