//! In-memory record store kept in sync with the collection resource.
//!
//! The store never talks to the network. Controllers apply a change here only
//! after the server has confirmed it, so the contents always mirror the last
//! known server state plus the client-only `selected` flags.

use crate::model::{Student, StudentId};

/// A record plus its client-only selection flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredStudent {
    pub student: Student,
    pub selected: bool,
}

impl StoredStudent {
    fn fresh(student: Student) -> Self {
        Self {
            student,
            selected: false,
        }
    }

    pub fn id(&self) -> &StudentId {
        &self.student.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecordStore {
    records: Vec<StoredStudent>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_students(students: Vec<Student>) -> Self {
        let mut store = Self::new();
        store.replace_all(students);
        store
    }

    /// Replace the whole collection with a fresh fetch. Selection is reset.
    pub fn replace_all(&mut self, students: Vec<Student>) {
        self.records = students.into_iter().map(StoredStudent::fresh).collect();
    }

    /// Append a newly created record after the existing ones.
    pub fn append(&mut self, student: Student) {
        self.records.push(StoredStudent::fresh(student));
    }

    /// Replace the record with the same id in place, keeping its selection.
    ///
    /// Returns `false` and leaves the store untouched when no record matches.
    pub fn update(&mut self, student: Student) -> bool {
        match self.records.iter_mut().find(|r| r.student.id == student.id) {
            Some(record) => {
                record.student = student;
                true
            }
            None => false,
        }
    }

    /// Remove the record with `id`. Returns `false` if it was not present.
    pub fn remove(&mut self, id: &StudentId) -> bool {
        let before = self.records.len();
        self.records.retain(|r| &r.student.id != id);
        self.records.len() != before
    }

    pub fn get(&self, id: &StudentId) -> Option<&StoredStudent> {
        self.records.iter().find(|r| &r.student.id == id)
    }

    pub fn records(&self) -> &[StoredStudent] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records shown to the user: everything, or only active ones.
    pub fn visible(&self, active_only: bool) -> impl Iterator<Item = &StoredStudent> + '_ {
        self.records
            .iter()
            .filter(move |r| !active_only || r.student.is_active)
    }

    /// Flip `selected` on the record with `id`. Returns `false` if absent.
    pub fn toggle_selected(&mut self, id: &StudentId) -> bool {
        match self.records.iter_mut().find(|r| &r.student.id == id) {
            Some(record) => {
                record.selected = !record.selected;
                true
            }
            None => false,
        }
    }

    /// Flip `selected` on the `index`-th row of the visible projection.
    pub fn toggle_visible(&mut self, active_only: bool, index: usize) -> bool {
        let Some(id) = self.visible(active_only).nth(index).map(|r| r.id().clone()) else {
            return false;
        };
        self.toggle_selected(&id)
    }

    pub fn selected_count(&self) -> usize {
        self.records.iter().filter(|r| r.selected).count()
    }
}
