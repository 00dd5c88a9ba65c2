use std::ops::{Deref, DerefMut};

use shared::{
    domain::EntryId,
    protocol::{CourseEntry, PredictionResult, StudentSubmission},
};
use tracing::{debug, error, info, warn};

use crate::{
    error::{FormError, SubmitError},
    form::FormRows,
    panel::{ErrorPanel, ResultPanel},
    transport::PredictionService,
    view::FormView,
};

pub const SUBMIT_LABEL: &str = "My Performance";
pub const BUSY_LABEL: &str = "Processing...";
pub const MISSING_FORM_ALERT: &str = "Error: Form elements missing. Please refresh the page.";
pub const PREDICTION_FAILED_ALERT: &str =
    "Failed to get prediction. Please check the logs for more details.";
const DEFAULT_INTERNSHIP: &str = "0";

#[derive(Debug)]
pub enum SubmitOutcome {
    Rendered(PredictionResult),
    Failed(SubmitError),
    /// A required form control was missing; nothing was sent.
    Aborted(SubmitError),
}

impl SubmitOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, SubmitOutcome::Rendered(_))
    }
}

pub struct FormController<V: FormView, P: PredictionService> {
    view: V,
    service: P,
    rows: FormRows,
}

impl<V: FormView, P: PredictionService> FormController<V, P> {
    pub fn new(view: V, service: P) -> Self {
        Self {
            view,
            service,
            rows: FormRows::new(),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    pub fn course_ids(&self) -> &[EntryId] {
        self.rows.courses()
    }

    pub fn certificate_ids(&self) -> &[EntryId] {
        self.rows.certificates()
    }

    pub fn add_course(&mut self) -> EntryId {
        let id = self.rows.push_course();
        let label = self.rows.course_label(id).unwrap_or_default();
        self.view.append_course_row(id, &label);
        debug!(entry = id.0, %label, "course row added");
        id
    }

    pub fn add_certificate(&mut self) -> Result<EntryId, FormError> {
        match self.rows.push_certificate() {
            Ok(id) => {
                let label = self.rows.certificate_label(id).unwrap_or_default();
                self.view.append_certificate_row(id, &label);
                debug!(entry = id.0, %label, "certificate row added");
                Ok(id)
            }
            Err(err) => {
                warn!(%err, "certificate row rejected");
                self.view.alert(&err.to_string());
                Err(err)
            }
        }
    }

    /// Course entries as currently selected in the view, skipping incomplete rows.
    pub fn course_entries(&self) -> Vec<CourseEntry> {
        collect_courses(&self.view, &self.rows)
    }

    pub fn render(&mut self, result: &PredictionResult) {
        render_result(&mut self.view, result);
    }

    /// Collects the form, sends it and renders the outcome. The submit control
    /// is busy for the whole call and released on every exit path.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let mut view = BusyGuard::acquire(&mut self.view);

        let submission = match collect_submission(&*view, &self.rows) {
            Ok(submission) => submission,
            Err(err) => {
                error!(%err, "submit aborted");
                view.alert(MISSING_FORM_ALERT);
                return SubmitOutcome::Aborted(err);
            }
        };

        info!(
            courses = submission.courses.len(),
            certificates = submission.certificates.len(),
            "submitting prediction request"
        );

        match self.service.predict(&submission).await {
            Ok(result) => {
                render_result(&mut *view, &result);
                SubmitOutcome::Rendered(result)
            }
            Err(err) => {
                error!(%err, "prediction request failed");
                view.show_error(&ErrorPanel::new(err.to_string()));
                view.alert(PREDICTION_FAILED_ALERT);
                SubmitOutcome::Failed(err)
            }
        }
    }
}

struct BusyGuard<'a, V: FormView> {
    view: &'a mut V,
}

impl<'a, V: FormView> BusyGuard<'a, V> {
    fn acquire(view: &'a mut V) -> Self {
        view.set_busy(true, BUSY_LABEL);
        Self { view }
    }
}

impl<V: FormView> Deref for BusyGuard<'_, V> {
    type Target = V;

    fn deref(&self) -> &V {
        self.view
    }
}

impl<V: FormView> DerefMut for BusyGuard<'_, V> {
    fn deref_mut(&mut self) -> &mut V {
        self.view
    }
}

impl<V: FormView> Drop for BusyGuard<'_, V> {
    fn drop(&mut self) {
        self.view.set_busy(false, SUBMIT_LABEL);
    }
}

fn collect_courses<V: FormView>(view: &V, rows: &FormRows) -> Vec<CourseEntry> {
    rows.courses()
        .iter()
        .filter_map(|&id| match (view.course_grade(id), view.course_credits(id)) {
            (Some(grade), Some(credits)) => Some(CourseEntry { grade, credits }),
            _ => {
                warn!(entry = id.0, "course row missing grade or credit control; skipped");
                None
            }
        })
        .collect()
}

fn collect_submission<V: FormView>(
    view: &V,
    rows: &FormRows,
) -> Result<StudentSubmission, SubmitError> {
    let courses = collect_courses(view, rows);

    let certificates = rows
        .certificates()
        .iter()
        .filter_map(|&id| {
            let category = view.certificate_category(id);
            if category.is_none() {
                warn!(entry = id.0, "certificate row missing category control; skipped");
            }
            category
        })
        .collect();

    let attendance = view
        .attendance()
        .ok_or(SubmitError::MissingControls("attendance"))?;
    let cgpa = view.cgpa().ok_or(SubmitError::MissingControls("cgpa"))?;
    let internship = view
        .internship()
        .unwrap_or_else(|| DEFAULT_INTERNSHIP.to_string());

    Ok(StudentSubmission {
        courses,
        attendance,
        cgpa,
        internship,
        certificates,
    })
}

fn render_result<V: FormView>(view: &mut V, result: &PredictionResult) {
    view.show_results(&ResultPanel::from(result));
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
