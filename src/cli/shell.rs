use std::{
    borrow::Cow,
    fmt,
    io::{self, BufRead},
};

use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::Validator,
    Cmd, Context as ReadlineContext, Editor, Helper, KeyEvent,
};
use shell_words::split;

use crate::cli::core::{CliError, CliMode, LoopControl, ShellContext};
use crate::cli::output;

const SCRIPT_ENV: &str = "POCKET_LEDGER_CLI_SCRIPT";

pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os(SCRIPT_ENV).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };
    if mode == CliMode::Script {
        colored::control::set_override(false);
    }

    let mut context = ShellContext::new(mode)?;
    tracing::info!(?mode, "shell started");

    match mode {
        CliMode::Interactive => run_interactive(&mut context),
        CliMode::Script => run_script(&mut context),
    }
}

fn run_interactive(context: &mut ShellContext) -> Result<(), CliError> {
    let mut editor = Editor::<CommandHelper, DefaultHistory>::new()?;
    editor.set_helper(Some(CommandHelper::new(context.command_names())));
    editor.bind_sequence(KeyEvent::from('?'), Cmd::Complete);

    if context.config().show_intro {
        output::section("Pocket Ledger");
        output::info("Type `help` to see available commands, `open` to add an entry.");
    }

    while context.running {
        match editor.readline(&context.prompt()) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                editor.add_history_entry(trimmed).ok();
                match context.process_line(trimmed) {
                    Ok(LoopControl::Continue) => {}
                    Ok(LoopControl::Exit) => break,
                    Err(err) => context.report_error(err),
                }
            }
            Err(ReadlineError::Interrupted) => {
                if context.confirm_exit()? {
                    break;
                }
            }
            Err(ReadlineError::Eof) => {
                output::info("Exiting shell.");
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

fn run_script(context: &mut ShellContext) -> Result<(), CliError> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        if !context.running {
            break;
        }
        let line = line?;
        match context.process_line(&line) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(err) => context.report_error(err),
        }
    }
    Ok(())
}

struct CommandHelper {
    commands: Vec<String>,
}

impl CommandHelper {
    fn new(names: Vec<&'static str>) -> Self {
        let mut commands: Vec<String> = names.into_iter().map(str::to_string).collect();
        commands.sort();
        commands.dedup();
        Self { commands }
    }
}

impl Helper for CommandHelper {}

impl Completer for CommandHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let prefix = &line[..pos];
        // only the command word completes
        if prefix.trim_start().contains(char::is_whitespace) {
            return Ok((pos, Vec::new()));
        }
        let start = prefix.len() - prefix.trim_start().len();
        let needle = prefix[start..].to_ascii_lowercase();
        let candidates = self
            .commands
            .iter()
            .filter(|name| name.starts_with(&needle))
            .map(|name| Pair {
                display: name.clone(),
                replacement: name.clone(),
            })
            .collect();
        Ok((start, candidates))
    }
}

impl Hinter for CommandHelper {
    type Hint = String;
}

impl Highlighter for CommandHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Borrowed(line)
    }
}

impl Validator for CommandHelper {}

pub(crate) fn parse_command_line(input: &str) -> Result<Vec<String>, ParseError> {
    split(input).map_err(|err| ParseError {
        message: err.to_string(),
    })
}

#[derive(Debug)]
pub(crate) struct ParseError {
    message: String,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}
