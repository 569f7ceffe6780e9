use super::CommandDefinition;
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::utils::build_info;

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "help",
            "Show available commands",
            "help [command]",
            cmd_help,
        ),
        CommandDefinition::new("version", "Show build metadata", "version", cmd_version),
        CommandDefinition::new("exit", "Exit the shell", "exit", cmd_exit),
    ]
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(name) = args.first() {
        match context.registry().get(&name.to_lowercase()) {
            Some(definition) => {
                output::section(definition.name);
                output::line(format!("  {}", definition.description));
                output::line(format!("  Usage: {}", definition.usage));
            }
            None => context.suggest_command(name),
        }
        return Ok(());
    }

    output::section("Commands");
    for definition in context.registry().iter() {
        output::line(format!("  {:<12} {}", definition.name, definition.description));
    }
    Ok(())
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let meta = build_info::current();
    output::section(format!("pocket_ledger {}", meta.version));
    output::line(format!("  Build hash : {} ({})", meta.git_hash, meta.git_status));
    output::line(format!("  Built at   : {}", meta.timestamp));
    output::line(format!("  Target     : {}", meta.target));
    output::line(format!("  Profile    : {}", meta.profile));
    output::line(format!("  Rustc      : {}", meta.rustc));
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
