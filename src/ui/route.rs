//! Route table mapping paths to screens.

use std::fmt;

use crate::model::StudentId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    List,
    /// `/students/{id}`
    Detail(StudentId),
    /// `/add-student`
    Create,
    /// `/edit-student/{id}`
    Edit(StudentId),
}

impl Route {
    /// Parse a path. Query strings, fragments and trailing slashes are ignored.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split(|c| c == '?' || c == '#').next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Some(Route::List),
            ["students", id] => Some(Route::Detail(StudentId::from(*id))),
            ["add-student"] => Some(Route::Create),
            ["edit-student", id] => Some(Route::Edit(StudentId::from(*id))),
            _ => None,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::List => "/".to_string(),
            Route::Detail(id) => format!("/students/{}", id),
            Route::Create => "/add-student".to_string(),
            Route::Edit(id) => format!("/edit-student/{}", id),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
