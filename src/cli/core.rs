use std::io;

use dialoguer::{theme::ColorfulTheme, Confirm};
use strsim::levenshtein;

use super::commands::{self, CommandRegistry};
use super::output;
use crate::{
    config::{Config, ConfigManager},
    errors::{AppendError, ConfigError, InputError},
    ledger::Ledger,
    session::InputSession,
};

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Append(#[from] AppendError),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error("exit requested")]
    ExitRequested,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Everything one shell session owns: the ledger, the staged form and preferences.
pub struct ShellContext {
    pub(crate) mode: CliMode,
    pub(crate) running: bool,
    pub(crate) ledger: Ledger,
    pub(crate) session: InputSession,
    pub(crate) config: Config,
    config_manager: ConfigManager,
    registry: CommandRegistry,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        Self::with_config_manager(mode, ConfigManager::new()?)
    }

    pub fn with_config_manager(
        mode: CliMode,
        config_manager: ConfigManager,
    ) -> Result<Self, CliError> {
        let config = config_manager.load()?;
        output::set_theme(config.theme);
        Ok(Self {
            mode,
            running: true,
            ledger: Ledger::new(),
            session: InputSession::new(),
            config,
            config_manager,
            registry: CommandRegistry::new(commands::all_definitions()),
        })
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn session(&self) -> &InputSession {
        &self.session
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub(crate) fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub fn prompt(&self) -> String {
        if self.session.modal_open {
            format!(
                "pocket[{} {}]> ",
                self.session.active_kind,
                self.session.staged_amount()
            )
        } else {
            format!("pocket[{}]> ", self.session.active_kind)
        }
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(definition) = self.registry.get(command) {
            let handler = definition.handler;
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    /// Parses and runs a single shell line.
    pub fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match super::shell::parse_command_line(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                output::warning(&err);
                return Ok(LoopControl::Continue);
            }
        };
        let Some(raw) = tokens.first() else {
            return Ok(LoopControl::Continue);
        };

        let command = raw.to_lowercase();
        let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();

        match self.dispatch(&command, raw, &args) {
            Ok(LoopControl::Exit) => {
                self.running = false;
                Ok(LoopControl::Exit)
            }
            other => other,
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{input}`. Type `help` to see available commands."
        ));

        let best = self
            .registry
            .names()
            .map(|name| (levenshtein(name, &input.to_lowercase()), name))
            .min_by_key(|(distance, _)| *distance);
        if let Some((distance, name)) = best {
            if distance <= 2 {
                output::info(format!("Suggestion: `{name}`?"));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Ok(Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Exit shell?")
            .default(true)
            .interact()?)
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::info("Use `help <command>` for usage details.");
            }
            CommandError::Append(err) => {
                output::warning(err);
                output::info("The form is still open; fix the amount and `confirm` again.");
            }
            other => output::error(other),
        }
    }

    pub(crate) fn persist_config(&self) -> CommandResult {
        self.config_manager.save(&self.config)?;
        output::set_theme(self.config.theme);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::EntryKind;
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    fn script_context() -> (ShellContext, TempDir) {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        let context = ShellContext::with_config_manager(CliMode::Script, manager).unwrap();
        (context, temp)
    }

    fn run(context: &mut ShellContext, lines: &[&str]) {
        for line in lines {
            context.process_line(line).unwrap();
        }
    }

    #[test]
    fn keypad_flow_commits_an_entry() {
        let (mut context, _guard) = script_context();
        run(
            &mut context,
            &["tab income", "open", "key 1 0 0", "category salary", "confirm"],
        );
        assert_eq!(context.ledger().len(), 1);
        assert_eq!(context.ledger().total_for(EntryKind::Income), dec!(100.00));
        assert!(!context.session().modal_open);
        assert_eq!(context.session().staged_amount(), "");
    }

    #[test]
    fn empty_confirm_keeps_form_open() {
        let (mut context, _guard) = script_context();
        run(&mut context, &["open"]);
        let err = context.process_line("confirm").unwrap_err();
        assert!(matches!(err, CommandError::Append(_)));
        assert!(context.session().modal_open);
        assert!(context.ledger().is_empty());
    }

    #[test]
    fn note_is_cleared_by_confirm() {
        let (mut context, _guard) = script_context();
        run(&mut context, &["open", "note coffee beans", "key 7"]);
        assert_eq!(context.session().description, "coffee beans");
        run(&mut context, &["confirm"]);
        assert_eq!(context.session().description, "");
        assert_eq!(context.ledger().len(), 1);
    }

    #[test]
    fn script_mode_exits_without_asking() {
        let (context, _guard) = script_context();
        assert!(context.confirm_exit().unwrap());
    }

    #[test]
    fn exit_stops_the_loop() {
        let (mut context, _guard) = script_context();
        assert_eq!(context.process_line("exit").unwrap(), LoopControl::Exit);
        assert!(!context.running);
    }

    #[test]
    fn unknown_commands_do_not_fail() {
        let (mut context, _guard) = script_context();
        assert_eq!(
            context.process_line("sumary").unwrap(),
            LoopControl::Continue
        );
    }

    #[test]
    fn prompt_reflects_form_state() {
        let (mut context, _guard) = script_context();
        assert_eq!(context.prompt(), "pocket[expense]> ");
        run(&mut context, &["open", "key 4.5"]);
        assert_eq!(context.prompt(), "pocket[expense 4.5]> ");
    }

    #[test]
    fn theme_command_persists_config() {
        let (mut context, guard) = script_context();
        run(&mut context, &["theme dark", "currency €"]);
        let manager = ConfigManager::with_base_dir(guard.path().to_path_buf()).unwrap();
        let stored = manager.load().unwrap();
        assert_eq!(stored.theme, crate::config::Theme::Dark);
        assert_eq!(stored.currency_symbol, "€");
    }
}
