//! [`FormView`] backed by terminal streams.

use std::{collections::HashMap, io::Write};

use client_core::{ErrorPanel, FormView, ResultPanel};
use shared::domain::{CertificateCategory, Credits, EntryId, GradeBand};
use tracing::{debug, warn};

pub struct TerminalView<O: Write, E: Write> {
    out: O,
    err: E,
    html: bool,
    courses: HashMap<EntryId, (GradeBand, Credits)>,
    certificates: HashMap<EntryId, CertificateCategory>,
    pub attendance: Option<String>,
    pub cgpa: Option<String>,
    pub internship: Option<String>,
}

impl<O: Write, E: Write> TerminalView<O, E> {
    pub fn new(out: O, err: E, html: bool) -> Self {
        Self {
            out,
            err,
            html,
            courses: HashMap::new(),
            certificates: HashMap::new(),
            attendance: None,
            cgpa: None,
            internship: None,
        }
    }

    pub fn select_course(&mut self, id: EntryId, grade: GradeBand, credits: Credits) {
        self.courses.insert(id, (grade, credits));
    }

    pub fn select_certificate(&mut self, id: EntryId, category: CertificateCategory) {
        self.certificates.insert(id, category);
    }

    pub fn into_parts(self) -> (O, E) {
        (self.out, self.err)
    }

    fn write_out(&mut self, text: &str) {
        if let Err(error) = self.out.write_all(text.as_bytes()) {
            warn!(%error, "failed to write to output stream");
        }
    }

    fn write_err(&mut self, line: &str) {
        if let Err(error) = writeln!(self.err, "{line}") {
            warn!(%error, "failed to write to error stream");
        }
    }
}

impl<O: Write, E: Write> FormView for TerminalView<O, E> {
    fn append_course_row(&mut self, id: EntryId, label: &str) {
        self.courses.insert(id, (GradeBand::default(), Credits::default()));
        debug!(entry = id.0, label, "course row");
    }

    fn append_certificate_row(&mut self, id: EntryId, label: &str) {
        self.certificates.insert(id, CertificateCategory::default());
        debug!(entry = id.0, label, "certificate row");
    }

    fn course_grade(&self, id: EntryId) -> Option<GradeBand> {
        self.courses.get(&id).map(|(grade, _)| *grade)
    }

    fn course_credits(&self, id: EntryId) -> Option<Credits> {
        self.courses.get(&id).map(|(_, credits)| *credits)
    }

    fn certificate_category(&self, id: EntryId) -> Option<CertificateCategory> {
        self.certificates.get(&id).copied()
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
        if busy {
            self.write_err(label);
        }
    }

    fn show_results(&mut self, panel: &ResultPanel) {
        let text = if self.html {
            panel.to_html()
        } else {
            panel.to_string()
        };
        self.write_out(&text);
    }

    fn show_error(&mut self, panel: &ErrorPanel) {
        let text = if self.html {
            panel.to_html()
        } else {
            panel.to_string()
        };
        self.write_out(&text);
    }

    fn alert(&mut self, message: &str) {
        self.write_err(&format!("! {message}"));
    }
}
