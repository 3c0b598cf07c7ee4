//! Plain-text rendering of screen state for the terminal front-end.

use std::fmt::Write;

use crate::model::Student;
use crate::ui::app::Screen;
use crate::ui::detail::DetailState;
use crate::ui::form::{FormMode, FormState};
use crate::ui::list::ListState;
use crate::ui::phase::{Phase, ViewError};

const LOADING: &str = "Loading...";

pub fn render(screen: &Screen) -> String {
    match screen {
        Screen::List(list) => render_list(list.state()),
        Screen::Detail(detail) => render_detail(detail.state()),
        Screen::Form(form) => render_form(form.state()),
    }
}

fn status_label(student: &Student) -> &'static str {
    if student.is_active {
        "Active"
    } else {
        "Graduated"
    }
}

fn push_error(out: &mut String, error: Option<&ViewError>) {
    if let Some(error) = error {
        let _ = writeln!(out, "! {}", error.message);
    }
}

pub fn render_list(state: &ListState) -> String {
    if state.is_loading() {
        return LOADING.to_string();
    }

    let mut out = String::new();
    let _ = writeln!(out, "Total Selected Student: {}", state.selected_count());
    let _ = writeln!(out, "Student Management");
    push_error(&mut out, state.error());
    if state.active_only {
        let _ = writeln!(out, "[x] Show Only Active Students");
    }

    let rows = state.visible();
    if rows.is_empty() {
        let _ = writeln!(out, "No students found.");
        return out;
    }

    let name_width = rows
        .iter()
        .map(|r| r.student.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Name".len());
    let code_width = rows
        .iter()
        .map(|r| r.student.student_code.chars().count())
        .max()
        .unwrap_or(0)
        .max("Code".len());

    let _ = writeln!(
        out,
        "Sel  {:<name_width$}  {:<code_width$}  {:<9}  Id",
        "Name", "Code", "Status"
    );
    for row in rows {
        let mark = if row.selected { "[x]" } else { "[ ]" };
        let _ = writeln!(
            out,
            "{}  {:<name_width$}  {:<code_width$}  {:<9}  {}",
            mark,
            row.student.name,
            row.student.student_code,
            status_label(&row.student),
            row.student.id
        );
    }
    out
}

pub fn render_detail(state: &DetailState) -> String {
    if state.is_loading() {
        return LOADING.to_string();
    }
    if state.is_not_found() {
        return "Student not found\n".to_string();
    }

    let mut out = String::new();
    push_error(&mut out, state.error());
    if let Some(student) = &state.student {
        let _ = writeln!(out, "Name:   {}", student.name);
        let _ = writeln!(out, "Code:   {}", student.student_code);
        let _ = writeln!(out, "Status: {}", status_label(student));
        let _ = writeln!(out, "Id:     {}", student.id);
    }
    out
}

pub fn render_form(state: &FormState) -> String {
    if state.is_loading() && state.fields.name.is_empty() {
        return LOADING.to_string();
    }

    let mut out = String::new();
    let title = match state.mode {
        FormMode::Create => "Add New Student",
        FormMode::Edit { .. } => "Edit Student",
    };
    let _ = writeln!(out, "{}", title);
    push_error(&mut out, state.error());
    let _ = writeln!(out, "Name:         {}", state.fields.name);
    let _ = writeln!(out, "Student Code: {}", state.fields.student_code);
    let _ = writeln!(
        out,
        "Active:       {}",
        if state.fields.is_active { "yes" } else { "no" }
    );
    let disabled = if state.can_submit() { "" } else { " (disabled)" };
    let _ = writeln!(out, "[{}]{}", state.submit_label(), disabled);
    out
}

/// One-line summary of a phase, used in log lines and CLI status output.
pub fn phase_label(phase: &Phase) -> &'static str {
    match phase {
        Phase::Idle => "idle",
        Phase::Loading => "loading",
        Phase::Ready => "ready",
        Phase::Error(_) => "error",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StudentId;
    use crate::store::RecordStore;
    use crate::ui::phase::ErrorKind;

    fn student(id: &str, name: &str, active: bool) -> Student {
        Student {
            id: StudentId::from(id),
            name: name.to_string(),
            student_code: format!("C{}", id),
            is_active: active,
        }
    }

    #[test]
    fn list_shows_rows_and_selection_total() {
        let mut store = RecordStore::from_students(vec![
            student("1", "Ann", true),
            student("2", "Bo", false),
        ]);
        store.toggle_selected(&StudentId::from("2"));
        let state = ListState {
            phase: Phase::Ready,
            store,
            active_only: false,
        };

        let text = render_list(&state);
        assert!(text.contains("Total Selected Student: 1"));
        assert!(text.contains("Ann"));
        assert!(text.contains("Graduated"));
        assert!(text.contains("[x]"));
    }

    #[test]
    fn empty_filtered_list_says_so() {
        let state = ListState {
            phase: Phase::Ready,
            store: RecordStore::from_students(vec![student("1", "Ann", false)]),
            active_only: true,
        };
        assert!(render_list(&state).contains("No students found."));
    }

    #[test]
    fn loading_list_renders_placeholder() {
        let state = ListState {
            phase: Phase::Loading,
            ..ListState::default()
        };
        assert_eq!(render_list(&state), LOADING);
    }

    #[test]
    fn detail_not_found_is_distinct_from_errors() {
        let missing = DetailState {
            phase: Phase::Error(ViewError::new(ErrorKind::NotFound, "gone")),
            student: None,
        };
        assert_eq!(render_detail(&missing), "Student not found\n");

        let broken = DetailState {
            phase: Phase::Error(ViewError::new(ErrorKind::Server, "Database down")),
            student: None,
        };
        assert!(render_detail(&broken).contains("! Database down"));
    }

    #[test]
    fn form_keeps_fields_next_to_error() {
        let mut state = FormState::default();
        state.fields.name = "Ann".to_string();
        state.phase = Phase::Error(ViewError::new(ErrorKind::Server, "Code taken"));

        let text = render_form(&state);
        assert!(text.contains("! Code taken"));
        assert!(text.contains("Name:         Ann"));
        assert!(text.contains("[Add Student]"));
    }
}
