//! UI port of the form controller and a headless implementation of it.

use shared::domain::{CertificateCategory, Credits, EntryId, GradeBand};

use crate::panel::{ErrorPanel, ResultPanel};

/// Bindings between the controller and the widgets it drives.
///
/// Readers return `None` when the corresponding control is absent.
pub trait FormView {
    fn append_course_row(&mut self, id: EntryId, label: &str);
    fn append_certificate_row(&mut self, id: EntryId, label: &str);

    fn course_grade(&self, id: EntryId) -> Option<GradeBand>;
    fn course_credits(&self, id: EntryId) -> Option<Credits>;
    fn certificate_category(&self, id: EntryId) -> Option<CertificateCategory>;

    fn attendance(&self) -> Option<String>;
    fn cgpa(&self) -> Option<String>;
    fn internship(&self) -> Option<String>;

    /// Disables (busy) or re-enables the submit control and sets its label.
    fn set_busy(&mut self, busy: bool, label: &str);
    fn show_results(&mut self, panel: &ResultPanel);
    fn show_error(&mut self, panel: &ErrorPanel);
    /// Blocking user notification.
    fn alert(&mut self, message: &str);
}

#[derive(Debug, Clone, PartialEq)]
pub struct CourseRow {
    pub id: EntryId,
    pub label: String,
    pub grade: Option<GradeBand>,
    pub credits: Option<Credits>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CertificateRow {
    pub id: EntryId,
    pub label: String,
    pub category: Option<CertificateCategory>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResultsRegion {
    Hidden,
    Results(ResultPanel),
    Error(ErrorPanel),
}

/// In-memory view. New rows start with the default selection of each control.
#[derive(Debug, Clone)]
pub struct MemoryView {
    pub course_rows: Vec<CourseRow>,
    pub certificate_rows: Vec<CertificateRow>,
    pub attendance: Option<String>,
    pub cgpa: Option<String>,
    pub internship: Option<String>,
    pub submit_label: String,
    pub submit_disabled: bool,
    pub busy_history: Vec<bool>,
    pub region: ResultsRegion,
    pub alerts: Vec<String>,
}

impl Default for MemoryView {
    fn default() -> Self {
        Self {
            course_rows: Vec::new(),
            certificate_rows: Vec::new(),
            attendance: Some(String::new()),
            cgpa: Some(String::new()),
            internship: Some("0".to_string()),
            submit_label: crate::controller::SUBMIT_LABEL.to_string(),
            submit_disabled: false,
            busy_history: Vec::new(),
            region: ResultsRegion::Hidden,
            alerts: Vec::new(),
        }
    }
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_course(&mut self, id: EntryId, grade: GradeBand, credits: Credits) -> bool {
        match self.course_rows.iter_mut().find(|row| row.id == id) {
            Some(row) => {
                row.grade = Some(grade);
                row.credits = Some(credits);
                true
            }
            None => false,
        }
    }

    pub fn select_certificate(&mut self, id: EntryId, category: CertificateCategory) -> bool {
        match self.certificate_rows.iter_mut().find(|row| row.id == id) {
            Some(row) => {
                row.category = Some(category);
                true
            }
            None => false,
        }
    }

    pub fn results_visible(&self) -> bool {
        !matches!(self.region, ResultsRegion::Hidden)
    }

    /// Plain text currently shown in the results region.
    pub fn region_text(&self) -> String {
        match &self.region {
            ResultsRegion::Hidden => String::new(),
            ResultsRegion::Results(panel) => panel.to_string(),
            ResultsRegion::Error(panel) => panel.to_string(),
        }
    }
}

impl FormView for MemoryView {
    fn append_course_row(&mut self, id: EntryId, label: &str) {
        self.course_rows.push(CourseRow {
            id,
            label: label.to_string(),
            grade: Some(GradeBand::default()),
            credits: Some(Credits::default()),
        });
    }

    fn append_certificate_row(&mut self, id: EntryId, label: &str) {
        self.certificate_rows.push(CertificateRow {
            id,
            label: label.to_string(),
            category: Some(CertificateCategory::default()),
        });
    }

    fn course_grade(&self, id: EntryId) -> Option<GradeBand> {
        self.course_rows
            .iter()
            .find(|row| row.id == id)
            .and_then(|row| row.grade)
    }

    fn course_credits(&self, id: EntryId) -> Option<Credits> {
        self.course_rows
            .iter()
            .find(|row| row.id == id)
            .and_then(|row| row.credits)
    }

    fn certificate_category(&self, id: EntryId) -> Option<CertificateCategory> {
        self.certificate_rows
            .iter()
            .find(|row| row.id == id)
            .and_then(|row| row.category)
    }

    fn attendance(&self) -> Option<String> {
        self.attendance.clone()
    }

    fn cgpa(&self) -> Option<String> {
        self.cgpa.clone()
    }

    fn internship(&self) -> Option<String> {
        self.internship.clone()
    }

    fn set_busy(&mut self, busy: bool, label: &str) {
        self.submit_disabled = busy;
        self.submit_label = label.to_string();
        self.busy_history.push(busy);
    }

    fn show_results(&mut self, panel: &ResultPanel) {
        self.region = ResultsRegion::Results(panel.clone());
    }

    fn show_error(&mut self, panel: &ErrorPanel) {
        self.region = ResultsRegion::Error(panel.clone());
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}
