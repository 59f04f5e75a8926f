//! Validated registration record

use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const OPTIONS: &'static [&'static str] = &["male", "female"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl FromStr for Gender {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MilitaryStatus {
    Completed,
    Exempted,
    NotCompleted,
}

impl MilitaryStatus {
    pub const OPTIONS: &'static [&'static str] = &["completed", "exempted", "notCompleted"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Exempted => "exempted",
            Self::NotCompleted => "notCompleted",
        }
    }
}

impl FromStr for MilitaryStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "completed" => Ok(Self::Completed),
            "exempted" => Ok(Self::Exempted),
            "notCompleted" => Ok(Self::NotCompleted),
            _ => Err(()),
        }
    }
}

/// The six scalar values of one accepted submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormRecord {
    pub full_name: String,
    pub phone_number: String,
    pub email: String,
    /// Jalali `YYYY/MM/DD`
    pub birth_date: String,
    pub gender: Gender,
    pub military_status: MilitaryStatus,
}
