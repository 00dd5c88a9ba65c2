use serde::{Deserialize, Serialize};

use crate::domain::{CertificateCategory, Credits, GradeBand};

pub const PREDICT_ROUTE: &str = "/predict";
pub const HEALTH_ROUTE: &str = "/healthz";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CourseEntry {
    pub grade: GradeBand,
    pub credits: Credits,
}

/// Request body of `POST /predict`. Field order is the wire order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StudentSubmission {
    pub courses: Vec<CourseEntry>,
    pub attendance: String,
    pub cgpa: String,
    pub internship: String,
    pub certificates: Vec<CertificateCategory>,
}

/// Successful response body of `POST /predict`.
///
/// Every field except `predicted_grade_value` is required; a body missing one
/// of them fails to deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    pub predicted_grade: String,
    pub performance_category: String,
    pub risk_level: String,
    pub recommendations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicted_grade_value: Option<f64>,
}
