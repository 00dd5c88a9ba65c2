//! Plain-text models of the results region.
//!
//! Server-supplied strings are kept as text. [`ResultPanel::to_html`] and
//! [`ErrorPanel::to_html`] escape them before they reach markup.

use std::fmt;

use shared::protocol::PredictionResult;

pub const RESULTS_TITLE: &str = "Prediction Results";
pub const ERROR_TITLE: &str = "Error Getting Prediction";
const ERROR_INTRO: &str = "There was a problem connecting to the prediction service:";
const ERROR_HINT: &str = "Make sure the prediction server is running at the correct address.";

#[derive(Debug, Clone, PartialEq)]
pub struct ResultPanel {
    pub predicted_grade: String,
    pub performance_category: String,
    pub risk_level: String,
    pub recommendations: Vec<String>,
}

impl From<&PredictionResult> for ResultPanel {
    fn from(result: &PredictionResult) -> Self {
        Self {
            predicted_grade: result.predicted_grade.clone(),
            performance_category: result.performance_category.clone(),
            risk_level: result.risk_level.clone(),
            recommendations: result.recommendations.clone(),
        }
    }
}

impl ResultPanel {
    pub fn fields(&self) -> [(&'static str, &str); 3] {
        [
            ("Predicted Final Grade Range", self.predicted_grade.as_str()),
            ("Performance Category", self.performance_category.as_str()),
            ("Risk Level", self.risk_level.as_str()),
        ]
    }

    pub fn to_html(&self) -> String {
        let mut html = format!("<h2>{RESULTS_TITLE}</h2>\n<div class=\"results-content\">\n");
        for (name, value) in self.fields() {
            html.push_str(&format!(
                "<p><strong>{name}:</strong> {}</p>\n",
                escape_html(value)
            ));
        }
        html.push_str("<div class=\"recommendation\">\n<h3>Recommendations:</h3>\n<ul>\n");
        for recommendation in &self.recommendations {
            html.push_str(&format!("<li>{}</li>\n", escape_html(recommendation)));
        }
        html.push_str("</ul>\n</div>\n</div>\n");
        html
    }
}

impl fmt::Display for ResultPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{RESULTS_TITLE}")?;
        for (name, value) in self.fields() {
            writeln!(f, "{name}: {value}")?;
        }
        writeln!(f, "Recommendations:")?;
        for recommendation in &self.recommendations {
            writeln!(f, "  - {recommendation}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorPanel {
    pub message: String,
}

impl ErrorPanel {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn to_html(&self) -> String {
        format!(
            "<div class=\"error-message\">\n<h3>{ERROR_TITLE}</h3>\n<p>{ERROR_INTRO}</p>\n<p><code>{}</code></p>\n<p>{ERROR_HINT}</p>\n</div>\n",
            escape_html(&self.message)
        )
    }
}

impl fmt::Display for ErrorPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{ERROR_TITLE}")?;
        writeln!(f, "{ERROR_INTRO}")?;
        writeln!(f, "  {}", self.message)?;
        writeln!(f, "{ERROR_HINT}")
    }
}

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
#[path = "tests/panel_tests.rs"]
mod tests;
