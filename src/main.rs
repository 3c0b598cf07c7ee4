use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use roster::api::HttpStudentApi;
use roster::args::{Cli, Command};
use roster::config::Config;
use roster::logging::init_tracing;
use roster::model::StudentId;
use roster::ui::app::App;
use roster::ui::phase::Phase;
use roster::ui::render::{phase_label, render};
use roster::ui::route::Route;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            std::process::exit(1);
        }
    }
}

/// Returns `Ok(false)` when the final screen ended in an error.
async fn run(cli: Cli) -> anyhow::Result<bool> {
    let config = load_config(cli.config.as_deref(), cli.base_url.as_deref())?;
    init_tracing(&config.logging, cli.verbose);

    let api = HttpStudentApi::new(&config.api).context("Failed to set up API client")?;
    tracing::debug!(collection = %api.collection_url(), "Using collection");
    let mut app = App::new(Arc::new(api));

    match cli.command {
        Command::List { active_only } => {
            app.open(Route::List).await;
            if active_only {
                if let Some(list) = app.list_mut() {
                    list.toggle_active_only();
                }
            }
        }
        Command::Show { id } => {
            app.open(Route::Detail(StudentId::new(id))).await;
        }
        Command::Add(add) => {
            let pending = app.navigate(Route::Create);
            app.run(pending).await;
            let pending = app.form_mut().and_then(|form| {
                add.apply(form);
                form.submit()
            });
            app.run(pending).await;
        }
        Command::Edit(edit) => {
            app.open(Route::Edit(edit.student_id())).await;
            if matches!(app.screen().phase(), Phase::Error(_)) {
                return Ok(report(&app));
            }
            let pending = app.form_mut().and_then(|form| {
                edit.apply(form);
                form.submit()
            });
            app.run(pending).await;
        }
        Command::Delete { id, yes } => {
            app.open(Route::List).await;
            if matches!(app.screen().phase(), Phase::Error(_)) {
                return Ok(report(&app));
            }
            let confirm = |prompt: &str| yes || prompt_yes_no(prompt);
            let pending = app
                .list_mut()
                .and_then(|list| list.delete(StudentId::new(id), &confirm));
            if pending.is_none() {
                if matches!(app.screen().phase(), Phase::Error(_)) {
                    return Ok(report(&app));
                }
                println!("Cancelled.");
                return Ok(true);
            }
            app.run(pending).await;
        }
    }

    Ok(report(&app))
}

fn load_config(path: Option<&Path>, base_url: Option<&str>) -> anyhow::Result<Config> {
    let mut config = match path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(base_url) = base_url {
        config.api.base_url = base_url.to_string();
        config.validate()?;
    }
    Ok(config)
}

/// Print the active screen. Errors go to stderr as `Error: <message>`.
fn report<A: roster::api::StudentApi>(app: &App<A>) -> bool {
    let phase = app.screen().phase();
    tracing::info!(route = %app.route(), phase = phase_label(phase), "Finished");

    print!("{}", render(app.screen()));
    if let Phase::Error(error) = phase {
        eprintln!("Error: {}", error.message);
        return false;
    }
    true
}

fn prompt_yes_no(prompt: &str) -> bool {
    eprint!("{} [y/N] ", prompt);
    let _ = io::stderr().flush();

    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
