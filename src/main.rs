use tacsyn::main_handler;

use ansi_term::Color::*;
use clap::{builder::styling::*, Args, Parser, Subcommand};
use std::path::PathBuf;

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default())
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Yellow.on_default())
}

#[derive(Parser)]
#[command(
    version,
    about = format!("{} for a tiny typed language",
        Purple.bold().paint("Tactic-driven program synthesis"),
    ),
    long_about = None,
    styles = styles(),
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct Output {
    /// Whether or not to use "quiet" mode (only print the final program)
    #[arg(short, long, action)]
    quiet: bool,

    /// Path to output JSON of the finished program tree (blank for no output)
    #[arg(short, long, value_name = "FILE", default_value = "")]
    json: String,

    /// Whether or not to also print the structure of the program tree
    #[arg(short, long, action)]
    tree: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Apply tactics interactively (commands end with an empty line)
    Interact {
        #[command(flatten)]
        output: Output,
    },

    /// Apply the tactics of a file (commands separated by blank lines)
    Run {
        /// The tactic script to run
        #[arg(short, long, value_name = "FILE")]
        file: PathBuf,

        #[command(flatten)]
        output: Output,
    },
}

impl Output {
    fn config(self) -> main_handler::Config {
        main_handler::Config {
            quiet: self.quiet,
            json: if self.json.is_empty() {
                None
            } else {
                Some(PathBuf::from(self.json))
            },
            tree: self.tree,
        }
    }
}

impl Command {
    pub fn handle(self) -> Result<(), String> {
        match self {
            Self::Interact { output } => {
                main_handler::interact(output.config())
            }
            Self::Run { file, output } => {
                main_handler::run(file, output.config())
            }
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = cli.command.handle();

    match result {
        Ok(()) => (),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1)
        }
    }
}
