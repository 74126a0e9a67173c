//! Figedit: edit lists of figure records stored as text, JSON, or XML.
//!
//! A figure file holds named rectangles (`name`, `width`, `height`). Figedit
//! loads one, lets the user step a width or height up and down, and saves it
//! back in the format it came from. The format is picked from the file
//! extension (`.txt`, `.json`, `.xml`).
//!
//! # Modules
//!
//! - [`record`]: The figure record and raw-line editing rules
//! - [`codec`]: Format selection and the text, JSON and XML codecs
//! - [`store`]: The in-memory record sequence
//! - [`session`]: One open file with its codec and records
//! - [`interactive`]: The keyboard-driven terminal editor
//! - [`error`]: Error types for figedit operations

pub mod codec;
pub mod error;
pub mod interactive;
pub mod record;
pub mod session;
pub mod store;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

pub use error::FigeditError;
pub use record::{Field, Record};
pub use session::{Direction, Session};

/// The figedit CLI application.
#[derive(Parser)]
#[command(name = "figedit")]
#[command(version, about)]
#[command(propagate_version = true)]
struct Cli {
    /// Amount added or subtracted by each edit.
    #[arg(
        long,
        global = true,
        env = "FIGEDIT_STEP",
        default_value_t = 1,
        value_parser = clap::value_parser!(i64).range(1..)
    )]
    step: i64,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Open a figure file in the interactive editor.
    Edit(EditArgs),
    /// Print the records of a figure file, numbered.
    Show(ShowArgs),
    /// Step one field of one record and save the file.
    Bump(BumpArgs),
    /// Load a figure file and save it in another format.
    Convert(ConvertArgs),
}

/// Arguments for the edit subcommand.
#[derive(clap::Args)]
struct EditArgs {
    /// File to edit; prompted for when omitted.
    path: Option<PathBuf>,

    /// Field edited by Up/Down until switched with Tab.
    #[arg(long, value_enum, default_value_t = FieldArg::Width)]
    field: FieldArg,
}

/// Arguments for the show subcommand.
#[derive(clap::Args)]
struct ShowArgs {
    /// File to print.
    path: PathBuf,
}

/// Arguments for the bump subcommand.
#[derive(clap::Args)]
struct BumpArgs {
    /// File to edit in place.
    path: PathBuf,

    /// 1-based number of the record to change.
    index: usize,

    /// Field to change.
    #[arg(long, value_enum, default_value_t = FieldArg::Width)]
    field: FieldArg,

    /// Decrease instead of increase.
    #[arg(long)]
    down: bool,
}

/// Arguments for the convert subcommand.
#[derive(clap::Args)]
struct ConvertArgs {
    /// File to read.
    input: PathBuf,

    /// File to write; its extension selects the output format.
    output: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
enum FieldArg {
    Width,
    Height,
}

impl From<FieldArg> for Field {
    fn from(arg: FieldArg) -> Self {
        match arg {
            FieldArg::Width => Field::Width,
            FieldArg::Height => Field::Height,
        }
    }
}

/// Run the figedit CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), FigeditError> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Edit(args)) => run_edit(args.path, args.field.into(), cli.step),
        Some(Commands::Show(args)) => run_show(args),
        Some(Commands::Bump(args)) => run_bump(args, cli.step),
        Some(Commands::Convert(args)) => run_convert(args),
        // No subcommand: behave like the classic prompt-driven editor
        None => run_edit(None, Field::Width, cli.step),
    }
}

/// Execute the edit subcommand.
fn run_edit(path: Option<PathBuf>, field: Field, step: i64) -> Result<(), FigeditError> {
    let path = match path {
        Some(path) => path,
        None => prompt_path()?,
    };

    let mut session = Session::open(path)?;
    interactive::run(&mut session, interactive::EditorOptions { field, step })
}

/// Execute the show subcommand.
fn run_show(args: ShowArgs) -> Result<(), FigeditError> {
    let session = Session::open(args.path)?;
    print!("{}", session.render());
    Ok(())
}

/// Execute the bump subcommand.
fn run_bump(args: BumpArgs, step: i64) -> Result<(), FigeditError> {
    let direction = if args.down {
        Direction::Decrease
    } else {
        Direction::Increase
    };

    let mut session = Session::open(args.path)?;
    let updated = session
        .adjust(args.index, args.field.into(), direction, step)?
        .to_string();
    session.save()?;

    println!("{}. {}", args.index, updated);
    Ok(())
}

/// Execute the convert subcommand.
fn run_convert(args: ConvertArgs) -> Result<(), FigeditError> {
    let session = Session::open(args.input)?;
    session.save_as(&args.output)?;

    println!(
        "Converted {} record(s) from {} to {}",
        session.store().len(),
        session.path().display(),
        args.output.display()
    );
    Ok(())
}

fn prompt_path() -> Result<PathBuf, FigeditError> {
    print!("Enter the file path: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;
    Ok(PathBuf::from(input.trim()))
}
