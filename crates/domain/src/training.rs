use derive_more::{Display, Into};

#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Weight(f32);

impl Weight {
    pub const ZERO: Weight = Weight(0.0);
    /// Largest weight reachable in [`Weight::STEP`] increments.
    pub const MAX: Weight = Weight(9999.75);
    /// Granularity of a single increment when stepping through weights.
    pub const STEP: f32 = 0.25;

    pub fn new(value: f32) -> Result<Self, WeightError> {
        if !value.is_finite() || !(0.0..10000.0).contains(&value) {
            return Err(WeightError::OutOfRange);
        }

        Ok(Self(value))
    }

    /// Parses user input, falling back to zero for anything that is not a valid weight.
    #[must_use]
    pub fn parse_or_zero(value: &str) -> Self {
        Weight::try_from(value).unwrap_or_default()
    }

    /// Adds `increment`, saturating at [`Weight::MAX`].
    #[must_use]
    pub fn increased_by(self, increment: f32) -> Self {
        Self((self.0 + increment).clamp(Self::ZERO.0, Self::MAX.0))
    }

    #[must_use]
    pub fn step_up(self) -> Self {
        self.increased_by(Self::STEP)
    }

    #[must_use]
    pub fn step_down(self) -> Self {
        Self((self.0 - Self::STEP).max(0.0))
    }
}

impl TryFrom<&str> for Weight {
    type Error = WeightError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().replace(',', ".").parse::<f32>() {
            Ok(parsed_value) => Weight::new(parsed_value),
            Err(_) => Err(WeightError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WeightError {
    #[error("Weight must be in the range 0 to 9999.99")]
    OutOfRange,
    #[error("Weight must be a decimal")]
    ParseError,
}

#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Reps(u32);

impl Reps {
    pub const ZERO: Reps = Reps(0);

    pub fn new(value: u32) -> Result<Self, RepsError> {
        if !(0..10000).contains(&value) {
            return Err(RepsError::OutOfRange);
        }

        Ok(Self(value))
    }

    /// Parses user input, keeping the leading digits and falling back to zero for anything
    /// that is not a valid count.
    #[must_use]
    pub fn parse_or_zero(value: &str) -> Self {
        let value = value.trim();
        let digits = value
            .find(|c: char| !c.is_ascii_digit())
            .map_or(value, |end| &value[..end]);
        Reps::try_from(digits).unwrap_or_default()
    }
}

impl TryFrom<&str> for Reps {
    type Error = RepsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<u32>() {
            Ok(parsed_value) => Reps::new(parsed_value),
            Err(_) => Err(RepsError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RepsError {
    #[error("Reps must be in the range 0 to 9999")]
    OutOfRange,
    #[error("Reps must be an integer")]
    ParseError,
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct SetEntry {
    pub weight: Weight,
    pub reps: Reps,
}

impl SetEntry {
    #[must_use]
    pub fn new(weight: Weight, reps: Reps) -> Self {
        Self { weight, reps }
    }
}

impl std::fmt::Display for SetEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}×{}", self.weight, self.reps)
    }
}
