//! Reference prediction collaborator: turns a submitted form into a
//! [`PredictionResult`].
//!
//! Scoring is a fixed rule set, not a trained model. It exists so the client
//! contract can be exercised end to end.

use serde::Deserialize;
use shared::{
    domain::GradeBand,
    error::ErrorBody,
    protocol::PredictionResult,
};
use thiserror::Error;
use tracing::{debug, warn};

mod recommend;

pub use recommend::recommendations;

pub const GRADE_RANGES: [&str; 6] = [
    "F (Below 50%)",
    "C to B (50-60%)",
    "B to B+ (60-70%)",
    "B+ to A (70-80%)",
    "A to A+ (80-90%)",
    "A+ to O (90-100%)",
];
pub const RISK_LEVELS: [&str; 3] = ["Low Risk", "Moderate Risk", "High Risk"];
pub const PERFORMANCE_CATEGORIES: [&str; 3] = [
    "Performing Well",
    "Needs Improvement",
    "Needs Immediate Intervention",
];

#[derive(Debug, Error)]
pub enum PredictError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Internal(String),
}

impl PredictError {
    pub fn body(&self) -> ErrorBody {
        ErrorBody::new(self.to_string())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, PredictError::Validation(_))
    }
}

/// JSON scalar that may arrive as a string or a number.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(f64),
    Text(String),
}

impl Scalar {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Number(value) => Some(*value),
            Scalar::Text(text) => text.trim().parse().ok(),
        }
    }

    fn as_text(&self) -> String {
        match self {
            Scalar::Number(value) => value.to_string(),
            Scalar::Text(text) => text.trim().to_string(),
        }
    }
}

/// Course row as accepted by the service. Unknown grades score zero.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CourseInput {
    #[serde(default)]
    pub grade: String,
    #[serde(default)]
    pub credits: Option<Scalar>,
}

/// Lenient request body of `POST /predict`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PredictRequest {
    #[serde(default)]
    pub courses: Vec<CourseInput>,
    #[serde(default)]
    pub attendance: String,
    #[serde(default)]
    pub cgpa: String,
    #[serde(default)]
    pub internship: Option<Scalar>,
    #[serde(default)]
    pub certificates: Vec<Scalar>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Features {
    pub attendance: f64,
    pub cgpa: f64,
    pub average_grade: f64,
    pub certificates: f64,
    pub internship: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assessment {
    pub grade_index: usize,
    pub risk_index: usize,
}

pub fn predict(request: &PredictRequest) -> Result<PredictionResult, PredictError> {
    if request.courses.is_empty()
        || request.attendance.trim().is_empty()
        || request.cgpa.trim().is_empty()
    {
        return Err(PredictError::Validation("Missing required data".into()));
    }

    let features = extract_features(request)?;
    if !features.average_grade.is_finite() || !features.certificates.is_finite() {
        return Err(PredictError::Internal(
            "scoring produced a non-finite value".into(),
        ));
    }
    let assessment = assess(&features);
    debug!(?features, ?assessment, "scored submission");

    let internship_code = request
        .internship
        .as_ref()
        .map(Scalar::as_text)
        .unwrap_or_else(|| "0".to_string());

    Ok(PredictionResult {
        predicted_grade: GRADE_RANGES[assessment.grade_index].to_string(),
        performance_category: PERFORMANCE_CATEGORIES[assessment.risk_index].to_string(),
        risk_level: RISK_LEVELS[assessment.risk_index].to_string(),
        recommendations: recommendations(&features, &internship_code, assessment.risk_index),
        predicted_grade_value: Some(features.average_grade * 10.0),
    })
}

pub fn extract_features(request: &PredictRequest) -> Result<Features, PredictError> {
    let mut total_points = 0.0;
    let mut total_credits = 0.0;
    for course in &request.courses {
        let credits = match &course.credits {
            None => 0.0,
            Some(raw) => raw.as_f64().map(f64::trunc).ok_or_else(|| {
                PredictError::Validation(format!("invalid credits value '{}'", raw.as_text()))
            })?,
        };
        let points = GradeBand::from_range(&course.grade)
            .map(|band| f64::from(band.grade_points()))
            .unwrap_or(0.0);
        total_points += points * credits;
        total_credits += credits;
    }
    let average_grade = total_points / total_credits.max(1.0);

    let certificates: f64 = request
        .certificates
        .iter()
        .filter_map(|raw| {
            let value = raw.as_f64();
            if value.is_none() {
                warn!(certificate = %raw.as_text(), "invalid certificate value skipped");
            }
            value
        })
        .sum();

    let internship = match &request.internship {
        None => 0.0,
        Some(raw) => raw.as_f64().ok_or_else(|| {
            PredictError::Validation(format!("invalid internship value '{}'", raw.as_text()))
        })?,
    };

    Ok(Features {
        attendance: attendance_value(&request.attendance),
        cgpa: cgpa_value(&request.cgpa),
        average_grade,
        certificates,
        internship,
    })
}

pub fn attendance_value(code: &str) -> f64 {
    match code.trim() {
        ">95" => 95.0,
        ">85" => 85.0,
        ">75" => 75.0,
        ">65" => 65.0,
        ">50" => 50.0,
        _ => 0.0,
    }
}

pub fn cgpa_value(code: &str) -> f64 {
    match code.trim() {
        "9~10" => 9.5,
        "8~9" => 8.5,
        "7~8" => 7.5,
        "6~7" => 6.5,
        "5~6" => 5.5,
        _ => 0.0,
    }
}

pub fn assess(features: &Features) -> Assessment {
    let final_grade = (0.4 * features.average_grade
        + 0.25 * features.cgpa
        + 0.15 * (features.attendance / 10.0)
        + 0.1 * (features.certificates / 10.0)
        + 0.1 * (features.internship / 10.0))
        .clamp(0.0, 10.0);
    let grade_index = [5.0, 6.0, 7.0, 8.0, 9.0]
        .iter()
        .filter(|&&edge| final_grade > edge)
        .count();

    Assessment {
        grade_index,
        risk_index: risk_index(risk_score(features)),
    }
}

pub fn risk_score(features: &Features) -> u32 {
    let mut score = 0;

    if features.attendance < 75.0 {
        score += 3;
    } else if features.attendance < 85.0 {
        score += 1;
    }

    if features.cgpa < 6.0 {
        score += 3;
    } else if features.cgpa < 7.0 {
        score += 2;
    } else if features.cgpa < 8.0 {
        score += 1;
    }

    if features.average_grade < 5.0 {
        score += 3;
    } else if features.average_grade < 6.0 {
        score += 2;
    } else if features.average_grade < 7.0 {
        score += 1;
    }

    if features.certificates < 2.0 {
        score += 1;
    }

    if features.internship == 0.0 {
        score += 2;
    } else if features.internship < 6.0 {
        score += 1;
    }

    score
}

fn risk_index(score: u32) -> usize {
    match score {
        s if s >= 6 => 2,
        s if s >= 3 => 1,
        _ => 0,
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
