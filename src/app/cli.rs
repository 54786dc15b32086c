//! CLI adapter.

use std::env;
use std::io;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use dialoguer::{Error as DialoguerError, Input, Select};

use crate::adapters::{
    ArchiveTemplateStore, ConsoleReporter, DialoguerPrompter, MinijinjaRenderer,
};
use crate::app::AppContext;
use crate::app::commands::{InitOutcome, generate, init, list, save};
use crate::domain::{AppError, TemplateName};
use crate::ports::{Reporter, TemplateStore};

#[derive(Parser)]
#[command(name = "tpm")]
#[command(version)]
#[command(
    about = "Create reusable project templates and generate customized projects from them",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a '_template.json' config in the current directory
    #[clap(visible_alias = "i")]
    Init,
    /// Save the current directory as a reusable template
    #[clap(visible_alias = "s")]
    Save {
        /// Save the template with this name
        #[arg(short = 't', long)]
        template_name: Option<String>,
    },
    /// Generate a project from a saved template
    #[clap(visible_alias = "g")]
    Generate {
        /// Template to generate from
        #[arg(short = 't', long)]
        template_name: Option<String>,
        /// Directory where the project will be generated
        #[arg(short, long, value_name = "DIRECTORY")]
        output: Option<PathBuf>,
    },
    /// Show all the saved templates
    #[clap(visible_alias = "ls")]
    List,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init => run_init(),
        Commands::Save { template_name } => run_save(template_name),
        Commands::Generate { template_name, output } => run_generate(template_name, output),
        Commands::List => run_list(),
    };

    match result {
        Ok(()) => {}
        Err(AppError::Cancelled) => {
            eprintln!("Aborted.");
            std::process::exit(1);
        }
        Err(e) => {
            ConsoleReporter::new().error(&e.to_string());
            std::process::exit(1);
        }
    }
}

type DefaultContext =
    AppContext<ArchiveTemplateStore, DialoguerPrompter, ConsoleReporter, MinijinjaRenderer>;

fn app_context() -> Result<DefaultContext, AppError> {
    Ok(AppContext::new(
        ArchiveTemplateStore::default_location()?,
        DialoguerPrompter::new(),
        ConsoleReporter::new(),
        MinijinjaRenderer::new(),
    ))
}

fn run_init() -> Result<(), AppError> {
    let cwd = env::current_dir()?;
    match init::execute(&cwd)? {
        InitOutcome::Created(path) => {
            println!("Initialized a config file at {}", path.display());
        }
        InitOutcome::AlreadyInitialized(path) => {
            println!("Already have config file at {}", path.display());
        }
    }
    Ok(())
}

fn run_save(template_name: Option<String>) -> Result<(), AppError> {
    let ctx = app_context()?;
    let cwd = env::current_dir()?;

    let name = match template_name {
        Some(value) => TemplateName::new(&value)?,
        None => match prompt_save_name(ctx.store(), &cwd)? {
            Some(name) => name,
            None => return Err(AppError::Cancelled),
        },
    };

    save::execute(&ctx, &cwd, &name)?;
    ctx.reporter().success(&format!("'{}' has been saved!", name));
    Ok(())
}

fn run_generate(template_name: Option<String>, output: Option<PathBuf>) -> Result<(), AppError> {
    let ctx = app_context()?;

    let names = list::execute(ctx.store())?;
    if names.is_empty() {
        println!("There are no template(s) yet.");
        return Ok(());
    }

    let name = match template_name {
        Some(value) => TemplateName::new(&value)?,
        None => match prompt_template_choice(&names)? {
            Some(name) => name,
            None => return Err(AppError::Cancelled),
        },
    };

    let output_dir = match output {
        Some(dir) => dir,
        None => env::current_dir()?.join(format!("new-{}", name)),
    };

    generate::execute(&ctx, &name, &output_dir)?;
    ctx.reporter()
        .success(&format!("'{}' has been generated in {}", name, output_dir.display()));
    Ok(())
}

fn run_list() -> Result<(), AppError> {
    let store = ArchiveTemplateStore::default_location()?;
    let names = list::execute(&store)?;
    if names.is_empty() {
        println!("There are no template(s) yet.");
        return Ok(());
    }

    println!("Templates");
    println!("---------");
    for name in names {
        println!("{}", name);
    }
    Ok(())
}

fn prompt_save_name(
    store: &ArchiveTemplateStore,
    cwd: &Path,
) -> Result<Option<TemplateName>, AppError> {
    let suggested = cwd
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default();

    let result = Input::<String>::new()
        .with_prompt("Save as")
        .default(suggested)
        .validate_with(|input: &String| validate_save_name(store, input))
        .interact_text();

    match result {
        Ok(value) => Ok(Some(TemplateName::new(&value)?)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Io(io::Error::other(err))),
    }
}

fn validate_save_name(store: &ArchiveTemplateStore, input: &str) -> Result<(), String> {
    if input.is_empty() {
        return Err("Please enter the template name.".to_string());
    }
    let name = TemplateName::new(input).map_err(|err| err.to_string())?;
    if store.exists(&name) {
        return Err(format!("'{}' already exists.", name));
    }
    Ok(())
}

fn prompt_template_choice(names: &[String]) -> Result<Option<TemplateName>, AppError> {
    let selection = Select::new()
        .with_prompt("Pick a template")
        .items(names)
        .default(0)
        .interact_opt()
        .map_err(|err| AppError::Io(io::Error::other(err)))?;

    match selection {
        Some(index) => Ok(Some(TemplateName::new(&names[index])?)),
        None => Ok(None),
    }
}
