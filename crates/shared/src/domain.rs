use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(pub u64);
    };
}

id_newtype!(EntryId);

pub const MAX_CREDITS: u8 = 5;
pub const MAX_CERTIFICATES: usize = 5;

/// Attendance codes understood by the reference prediction service.
pub const ATTENDANCE_CODES: &[&str] = &[">95", ">85", ">75", ">65", ">50"];
/// CGPA codes understood by the reference prediction service.
pub const CGPA_CODES: &[&str] = &["9~10", "8~9", "7~8", "6~7", "5~6"];
/// Internship flags; "0" means no internship.
pub const INTERNSHIP_CODES: &[&str] = &["0", "4", "6", "8", "10"];

/// Grade band selected for a course, carried on the wire as its score range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GradeBand {
    #[default]
    #[serde(rename = "0-50")]
    F,
    #[serde(rename = "51-55")]
    C,
    #[serde(rename = "56-60")]
    B,
    #[serde(rename = "61-70")]
    BPlus,
    #[serde(rename = "71-80")]
    A,
    #[serde(rename = "81-90")]
    APlus,
    #[serde(rename = "91-100")]
    O,
}

impl GradeBand {
    pub const ALL: [GradeBand; 7] = [
        GradeBand::F,
        GradeBand::C,
        GradeBand::B,
        GradeBand::BPlus,
        GradeBand::A,
        GradeBand::APlus,
        GradeBand::O,
    ];

    pub fn range(self) -> &'static str {
        match self {
            GradeBand::F => "0-50",
            GradeBand::C => "51-55",
            GradeBand::B => "56-60",
            GradeBand::BPlus => "61-70",
            GradeBand::A => "71-80",
            GradeBand::APlus => "81-90",
            GradeBand::O => "91-100",
        }
    }

    /// Exact match on the score range only; letters are not accepted.
    pub fn from_range(range: &str) -> Option<Self> {
        let range = range.trim();
        GradeBand::ALL.into_iter().find(|band| band.range() == range)
    }

    pub fn label(self) -> &'static str {
        match self {
            GradeBand::F => "F",
            GradeBand::C => "C",
            GradeBand::B => "B",
            GradeBand::BPlus => "B+",
            GradeBand::A => "A",
            GradeBand::APlus => "A+",
            GradeBand::O => "O",
        }
    }

    /// Grade points on the ten-point scale used for the credit-weighted average.
    pub fn grade_points(self) -> u32 {
        match self {
            GradeBand::O => 10,
            GradeBand::APlus => 9,
            GradeBand::A => 8,
            GradeBand::BPlus => 7,
            GradeBand::B => 6,
            GradeBand::C => 5,
            GradeBand::F => 2,
        }
    }
}

impl fmt::Display for GradeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for GradeBand {
    type Err = DomainError;

    /// Accepts either the score range ("71-80") or the letter ("A").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        GradeBand::ALL
            .into_iter()
            .find(|band| band.range() == s || band.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| DomainError::UnknownGradeBand(s.to_string()))
    }
}

/// Course credits, 0 through 5 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Credits(u8);

impl Credits {
    pub fn new(value: u8) -> Result<Self, DomainError> {
        if value > MAX_CREDITS {
            return Err(DomainError::CreditsOutOfRange(value));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Credits {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Credits> for u8 {
    fn from(value: Credits) -> Self {
        value.0
    }
}

impl FromStr for Credits {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<u8>()
            .map_err(|_| DomainError::InvalidCredits(s.to_string()))?;
        Self::new(value)
    }
}

impl fmt::Display for Credits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Certificate category, carried on the wire as its weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CertificateCategory {
    #[default]
    #[serde(rename = "5")]
    Professional,
    #[serde(rename = "3")]
    Nptel,
    #[serde(rename = "2")]
    Coursera,
    #[serde(rename = "1")]
    Programming,
    #[serde(rename = "0.5")]
    Udemy,
    #[serde(rename = "0")]
    Null,
}

impl CertificateCategory {
    pub const ALL: [CertificateCategory; 6] = [
        CertificateCategory::Professional,
        CertificateCategory::Nptel,
        CertificateCategory::Coursera,
        CertificateCategory::Programming,
        CertificateCategory::Udemy,
        CertificateCategory::Null,
    ];

    pub fn weight(self) -> &'static str {
        match self {
            CertificateCategory::Professional => "5",
            CertificateCategory::Nptel => "3",
            CertificateCategory::Coursera => "2",
            CertificateCategory::Programming => "1",
            CertificateCategory::Udemy => "0.5",
            CertificateCategory::Null => "0",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CertificateCategory::Professional => {
                "CISCO, CCNA, CCNP, MCNA, MCNP, Matlab, Redhat, IBM"
            }
            CertificateCategory::Nptel => "NPTL",
            CertificateCategory::Coursera => "Coursera",
            CertificateCategory::Programming => {
                "Programming Certifications (C, C++, Java, Python, etc)"
            }
            CertificateCategory::Udemy => "Udemy",
            CertificateCategory::Null => "Null",
        }
    }
}

impl fmt::Display for CertificateCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CertificateCategory {
    type Err = DomainError;

    /// Accepts the weight ("2") or the label ("Coursera", case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        CertificateCategory::ALL
            .into_iter()
            .find(|category| category.weight() == s || category.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| DomainError::UnknownCertificate(s.to_string()))
    }
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
