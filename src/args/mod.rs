//! Command-line interface.
//!
//! ```text
//! argv → Cli (clap) → Command → route + field edits → App
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::model::StudentId;
use crate::ui::form::FormController;

#[derive(Debug, Parser)]
#[command(name = "roster", version, about = "Manage student records on a remote collection")]
pub struct Cli {
    /// Path to config file (default: platform config dir/roster/config.toml)
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Override the API base URL from config
    #[arg(long, value_name = "URL", global = true)]
    pub base_url: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List all students
    List {
        /// Show only active students
        #[arg(long)]
        active_only: bool,
    },
    /// Show one student
    Show {
        id: String,
    },
    /// Add a student
    Add(AddArgs),
    /// Edit a student; unspecified fields keep their current value
    Edit(EditArgs),
    /// Delete a student
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Debug, Clone, Args)]
pub struct AddArgs {
    #[arg(long, default_value = "")]
    pub name: String,

    #[arg(long, default_value = "")]
    pub code: String,

    /// Create the student as graduated
    #[arg(long)]
    pub inactive: bool,
}

#[derive(Debug, Clone, Args)]
pub struct EditArgs {
    pub id: String,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub code: Option<String>,

    #[arg(long, value_name = "BOOL")]
    pub active: Option<bool>,
}

impl AddArgs {
    /// Fill a freshly opened create form.
    pub fn apply(&self, form: &mut FormController) {
        form.set_name(self.name.clone());
        form.set_student_code(self.code.clone());
        form.set_active(!self.inactive);
    }
}

impl EditArgs {
    pub fn student_id(&self) -> StudentId {
        StudentId::new(self.id.clone())
    }

    /// Overwrite only the fields given on the command line.
    pub fn apply(&self, form: &mut FormController) {
        if let Some(name) = &self.name {
            form.set_name(name.clone());
        }
        if let Some(code) = &self.code {
            form.set_student_code(code.clone());
        }
        if let Some(active) = self.active {
            form.set_active(active);
        }
    }
}
