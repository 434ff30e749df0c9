//! Conductor planning CLI.
//!
//! Lists instructional term options and manages per-project construction
//! roadmaps stored under `.conductor/`.

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::NaiveDate;
use clap::{ArgAction, Parser, Subcommand};
use conductor::core::roadmap::RoadmapError;
use conductor::core::terms::term_display_text;
use conductor::exit_codes;
use conductor::io::init::{InitOptions, init_conductor};
use conductor::io::render::render_roadmap;
use conductor::roadmap::{check_roadmap, show_roadmap, update_current_step, update_remix};
use conductor::terms::list_terms;
use serde::Serialize;

#[derive(Parser)]
#[command(
    name = "conductor",
    version,
    about = "Term options and construction roadmaps for textbook projects"
)]
struct Cli {
    /// Workspace root containing `.conductor/`.
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create `.conductor/` with a default config.
    Init {
        /// Overwrite the existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// List selectable instructional terms around a reference date.
    Terms {
        /// Reference date (YYYY-MM-DD); defaults to config, then today.
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Print the full option list (sentinel included) as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Print the display label for a stored term key (e.g. `fq24`).
    TermText { key: String },
    /// Inspect or update a project's construction roadmap.
    Roadmap {
        #[command(subcommand)]
        command: RoadmapCommand,
    },
}

#[derive(Subcommand)]
enum RoadmapCommand {
    /// Show the visible steps for a project.
    Show {
        project: String,
        /// Expand a step's details.
        #[arg(long)]
        open: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Record whether the project remixes existing resources.
    SetRemix {
        project: String,
        #[arg(action = ArgAction::Set)]
        requires_remix: bool,
    },
    /// Mark the project's current step.
    SetCurrent { project: String, step: String },
    /// Report a current step the remix decision no longer allows.
    Check { project: String },
}

fn main() {
    conductor::logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            let code = if err.downcast_ref::<RoadmapError>().is_some() {
                exit_codes::INVALID_STEP
            } else {
                exit_codes::INVALID
            };
            std::process::exit(code);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    let root = cli.root.as_path();
    match cli.command {
        Command::Init { force } => cmd_init(root, force),
        Command::Terms { date, json } => cmd_terms(root, date, json),
        Command::TermText { key } => {
            println!("{}", term_display_text(Some(&key)));
            Ok(exit_codes::OK)
        }
        Command::Roadmap { command } => cmd_roadmap(root, command),
    }
}

fn cmd_init(root: &Path, force: bool) -> Result<i32> {
    let paths = init_conductor(root, &InitOptions { force })?;
    println!("initialized {}", paths.conductor_dir.display());
    Ok(exit_codes::OK)
}

fn cmd_terms(root: &Path, date: Option<NaiveDate>, json: bool) -> Result<i32> {
    let options = list_terms(root, date)?;
    if json {
        print_json(&options)?;
        return Ok(exit_codes::OK);
    }
    for option in options.iter().filter(|o| !o.is_sentinel()) {
        println!("{}\t{}", option.key, option.text);
    }
    Ok(exit_codes::OK)
}

fn cmd_roadmap(root: &Path, command: RoadmapCommand) -> Result<i32> {
    match command {
        RoadmapCommand::Show {
            project,
            open,
            json,
        } => {
            let view = show_roadmap(root, &project, open.as_deref())?;
            if json {
                print_json(&view)?;
            } else {
                print!("{}", render_roadmap(&view)?);
            }
            Ok(exit_codes::OK)
        }
        RoadmapCommand::SetRemix {
            project,
            requires_remix,
        } => {
            let (state, conflicts) = update_remix(root, &project, requires_remix)?;
            println!("requires_remix={}", state.requires_remix);
            for conflict in conflicts {
                eprintln!("warning: {}", conflict);
            }
            Ok(exit_codes::OK)
        }
        RoadmapCommand::SetCurrent { project, step } => {
            let state = update_current_step(root, &project, &step)?;
            println!("current_step={}", state.current_step_key);
            Ok(exit_codes::OK)
        }
        RoadmapCommand::Check { project } => {
            let conflicts = check_roadmap(root, &project)?;
            if conflicts.is_empty() {
                println!("ok");
                return Ok(exit_codes::OK);
            }
            for conflict in conflicts {
                println!("{}", conflict);
            }
            Ok(exit_codes::CONFLICT)
        }
    }
}

/// Print `value` as pretty JSON followed by a newline.
fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
