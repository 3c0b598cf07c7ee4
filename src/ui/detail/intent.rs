use crate::model::Student;
use crate::ui::mvi::Intent;
use crate::ui::phase::ViewError;

#[derive(Debug, Clone)]
pub enum DetailIntent {
    Started,
    Loaded { student: Student },
    Failed { error: ViewError },
    DismissError,
}

impl Intent for DetailIntent {}
