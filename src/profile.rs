//! Insured profile data model and categorical encoding.
//!
//! The encoding tables are a training-time contract with the model artifact:
//! the codes and the field order must match exactly what the regression was
//! fitted on. Reordering produces wrong predictions with no error signal.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Valid domain for age, inclusive.
pub const AGE_RANGE: (u32, u32) = (18, 80);
/// Valid domain for body mass index, inclusive.
pub const BMI_RANGE: (f64, f64) = (15.0, 55.0);
/// Valid domain for number of children, inclusive.
pub const CHILDREN_RANGE: (u32, u32) = (0, 5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    /// Training-time code: Female -> 0, Male -> 1.
    pub fn code(self) -> f64 {
        match self {
            Self::Female => 0.0,
            Self::Male => 1.0,
        }
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "female" => Ok(Self::Female),
            "male" => Ok(Self::Male),
            other => Err(AppError::Validation(format!(
                "gender must be Female or Male, got '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Female => write!(f, "Female"),
            Self::Male => write!(f, "Male"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Smoker {
    No,
    Yes,
}

impl Smoker {
    /// Training-time code: No -> 0, Yes -> 1.
    pub fn code(self) -> f64 {
        match self {
            Self::No => 0.0,
            Self::Yes => 1.0,
        }
    }
}

impl FromStr for Smoker {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "no" => Ok(Self::No),
            "yes" => Ok(Self::Yes),
            other => Err(AppError::Validation(format!(
                "smoker must be Yes or No, got '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for Smoker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::No => write!(f, "No"),
            Self::Yes => write!(f, "Yes"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Region {
    SouthWest,
    SouthEast,
    NorthWest,
    NorthEast,
}

impl Region {
    /// Training-time code. Note the codes do not follow declaration order;
    /// they are fixed by the encoding the model was fitted with.
    pub fn code(self) -> f64 {
        match self {
            Self::SouthEast => 0.0,
            Self::SouthWest => 1.0,
            Self::NorthEast => 2.0,
            Self::NorthWest => 3.0,
        }
    }
}

impl FromStr for Region {
    type Err = AppError;

    /// Case-insensitive: the display names ("SouthWest") lowercase to exactly
    /// the lookup keys ("southwest"), so both spellings resolve.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "southeast" => Ok(Self::SouthEast),
            "southwest" => Ok(Self::SouthWest),
            "northeast" => Ok(Self::NorthEast),
            "northwest" => Ok(Self::NorthWest),
            _ => Err(AppError::UnknownRegion(s.to_string())),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SouthWest => write!(f, "SouthWest"),
            Self::SouthEast => write!(f, "SouthEast"),
            Self::NorthWest => write!(f, "NorthWest"),
            Self::NorthEast => write!(f, "NorthEast"),
        }
    }
}

/// One submission's worth of insured attributes.
///
/// All six fields must be present and in-domain before encoding; `validate`
/// is the range gate and is called by the HTTP handler, not the estimator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InsuredProfile {
    pub age: u32,
    pub gender: Gender,
    pub bmi: f64,
    pub children: u32,
    pub smoker: Smoker,
    pub region: Region,
}

impl InsuredProfile {
    /// Check every field against its domain.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` naming the first out-of-domain field.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.age < AGE_RANGE.0 || self.age > AGE_RANGE.1 {
            return Err(AppError::Validation(format!(
                "age {} outside [{}, {}]",
                self.age, AGE_RANGE.0, AGE_RANGE.1
            )));
        }
        if !self.bmi.is_finite() || self.bmi < BMI_RANGE.0 || self.bmi > BMI_RANGE.1 {
            return Err(AppError::Validation(format!(
                "bmi {} outside [{}, {}]",
                self.bmi, BMI_RANGE.0, BMI_RANGE.1
            )));
        }
        if self.children > CHILDREN_RANGE.1 {
            return Err(AppError::Validation(format!(
                "children {} outside [{}, {}]",
                self.children, CHILDREN_RANGE.0, CHILDREN_RANGE.1
            )));
        }
        Ok(())
    }

    /// Encode into the feature vector the model was trained on.
    ///
    /// Order is `[age, gender, bmi, children, smoker, region]` and must not
    /// change. Values pass through unclamped.
    pub fn encode(&self) -> [f64; 6] {
        [
            self.age as f64,
            self.gender.code(),
            self.bmi,
            self.children as f64,
            self.smoker.code(),
            self.region.code(),
        ]
    }
}
