//! Row arena for the course and certificate lists.
//!
//! Rows are identified by an [`EntryId`] handed out at creation; display
//! labels are derived from a row's current position whenever they are needed.

use shared::domain::{EntryId, MAX_CERTIFICATES};

use crate::error::FormError;

#[derive(Debug, Default)]
pub struct FormRows {
    next_id: u64,
    courses: Vec<EntryId>,
    certificates: Vec<EntryId>,
}

impl FormRows {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate(&mut self) -> EntryId {
        self.next_id += 1;
        EntryId(self.next_id)
    }

    pub fn push_course(&mut self) -> EntryId {
        let id = self.allocate();
        self.courses.push(id);
        id
    }

    pub fn push_certificate(&mut self) -> Result<EntryId, FormError> {
        if self.certificates.len() >= MAX_CERTIFICATES {
            return Err(FormError::certificate_limit());
        }
        let id = self.allocate();
        self.certificates.push(id);
        Ok(id)
    }

    pub fn courses(&self) -> &[EntryId] {
        &self.courses
    }

    pub fn certificates(&self) -> &[EntryId] {
        &self.certificates
    }

    pub fn course_label(&self, id: EntryId) -> Option<String> {
        position(&self.courses, id).map(course_label)
    }

    pub fn certificate_label(&self, id: EntryId) -> Option<String> {
        position(&self.certificates, id).map(certificate_label)
    }
}

fn position(ids: &[EntryId], id: EntryId) -> Option<usize> {
    ids.iter().position(|candidate| *candidate == id)
}

pub fn course_label(index: usize) -> String {
    format!("Course {}", index + 1)
}

pub fn certificate_label(index: usize) -> String {
    format!("Certificate-{}", index + 1)
}

#[cfg(test)]
#[path = "tests/form_tests.rs"]
mod tests;
