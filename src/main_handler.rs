use crate::*;

use ansi_term::Color::*;
use std::fs::File;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Display settings shared by the interactive and file-driven shells.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub quiet: bool,
    pub json: Option<PathBuf>,
    pub tree: bool,
}

fn write_file(path: &PathBuf, s: &str) -> Result<(), String> {
    match File::create(path) {
        Ok(mut file) => write!(file, "{}", s).map_err(|e| e.to_string()),
        Err(e) => Err(e.to_string()),
    }
}

fn check_json_path(json: &Option<PathBuf>) -> Result<(), String> {
    if let Some(path) = json {
        let ok = match path.parent() {
            Some(parent) => parent.as_os_str().is_empty() || parent.exists(),
            None => false,
        };
        if !ok {
            return Err(format!(
                "{} invalid json path '{}'",
                Red.bold().paint("error:"),
                path.display()
            ));
        }
    }
    Ok(())
}

/// A tactic session: one synthesizer plus the output it is printed to.
pub struct Session<W: Write> {
    pub synth: synthesis::Synthesizer,
    config: Config,
    out: W,
}

impl<W: Write> Session<W> {
    pub fn new(config: Config, out: W) -> Result<Self, String> {
        let mut session = Session {
            synth: synthesis::Synthesizer::new(),
            config,
            out,
        };
        session.print_program("Initial program", true)?;
        Ok(session)
    }

    pub fn into_output(self) -> W {
        self.out
    }

    fn print_program(
        &mut self,
        status: &str,
        print_options: bool,
    ) -> Result<(), String> {
        let out = &mut self.out;
        writeln!(out, "{}:", Cyan.bold().paint(status))
            .map_err(|e| e.to_string())?;
        if !self.config.quiet || !print_options {
            writeln!(out, "{}", util::pad_str(self.synth.rendered(), "| "))
                .map_err(|e| e.to_string())?;
        }
        if self.config.tree {
            write!(out, "{}", codegen::tree(&self.synth.program))
                .map_err(|e| e.to_string())?;
        }
        if print_options {
            let options = self.synth.options();
            let options = if options.is_empty() {
                "None".to_owned()
            } else {
                options
                    .iter()
                    .map(|k| k.keyword())
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            writeln!(
                out,
                "{}",
                util::pad_str(&format!("Options: {}", options), "> ")
            )
            .map_err(|e| e.to_string())?;
        }
        Ok(())
    }

    /// Applies one command, printing the result. Returns `true` once the
    /// program is finished.
    pub fn command(&mut self, command: &str) -> Result<bool, String> {
        match self.synth.step(command) {
            Ok(synthesis::Outcome::Stepped { status }) => {
                self.print_program(status, true)?;
                Ok(false)
            }
            Ok(synthesis::Outcome::Finished { .. }) => {
                self.print_program("Finished the program", false)?;
                if let Some(path) = &self.config.json {
                    let contents = serde_json::to_string_pretty(
                        &self.synth.program,
                    )
                    .map_err(|e| e.to_string())?;
                    if let Err(e) = write_file(path, &contents) {
                        eprintln!("file write error: {}\njson:\n{}", e, contents)
                    }
                }
                Ok(true)
            }
            Err(e) => {
                log::debug!("rejected command: {:?}", e);
                writeln!(self.out, "{} {}", Red.bold().paint("Error:"), e)
                    .map_err(|e| e.to_string())?;
                if let error::Error::Syntax(se) = &e {
                    if !self.config.quiet {
                        write!(self.out, "{}", se.report())
                            .map_err(|e| e.to_string())?;
                    }
                }
                Ok(false)
            }
        }
    }

    fn prompt(&mut self) -> Result<(), String> {
        write!(
            self.out,
            "\n{}\n",
            Purple.bold().paint("Input a tactic:")
        )
        .map_err(|e| e.to_string())
    }

    /// Reads commands (blocks of lines ending in an empty line) until the
    /// program is finished or the input ends.
    pub fn interact<R: BufRead>(&mut self, input: R) -> Result<(), String> {
        let mut lines = input.lines();
        loop {
            self.prompt()?;
            write!(self.out, "| ").map_err(|e| e.to_string())?;
            self.out.flush().map_err(|e| e.to_string())?;

            let mut block = vec![];
            let mut eof = false;
            loop {
                match lines.next() {
                    Some(line) => {
                        let line = line.map_err(|e| e.to_string())?;
                        if line.is_empty() {
                            break;
                        }
                        block.push(line);
                        write!(self.out, "| ").map_err(|e| e.to_string())?;
                        self.out.flush().map_err(|e| e.to_string())?;
                    }
                    None => {
                        eof = true;
                        break;
                    }
                }
            }
            writeln!(self.out).map_err(|e| e.to_string())?;

            if !block.is_empty() && self.command(&block.join("\n"))? {
                return Ok(());
            }
            if eof {
                return Ok(());
            }
        }
    }

    /// Runs every command of a script, echoing each one.
    pub fn script(&mut self, script: &str) -> Result<(), String> {
        for command in util::split_commands(script) {
            self.prompt()?;
            writeln!(self.out, "{}\n", util::pad_str(command, "| "))
                .map_err(|e| e.to_string())?;
            if self.command(command)? {
                return Ok(());
            }
        }
        Ok(())
    }
}

pub fn interact(config: Config) -> Result<(), String> {
    check_json_path(&config.json)?;
    let stdin = std::io::stdin();
    let mut session = Session::new(config, std::io::stdout())?;
    session.interact(stdin.lock())
}

pub fn run(file: PathBuf, config: Config) -> Result<(), String> {
    check_json_path(&config.json)?;
    if !file.is_file() {
        return Err(format!(
            "{} file not found '{}'",
            Red.bold().paint("error:"),
            file.display()
        ));
    }
    let script = std::fs::read_to_string(file).map_err(|e| e.to_string())?;
    let mut session = Session::new(config, std::io::stdout())?;
    session.script(&script)
}
