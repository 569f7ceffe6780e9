use super::{single_arg, CommandDefinition};
use crate::cli::core::{CommandResult, ShellContext};
use crate::cli::output;
use crate::config::Theme;

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "theme",
            "Switch the color theme",
            "theme <light|dark|plain>",
            cmd_theme,
        ),
        CommandDefinition::new(
            "currency",
            "Set the currency symbol used for amounts",
            "currency <symbol>",
            cmd_currency,
        ),
    ]
}

fn cmd_theme(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let theme: Theme = single_arg(args, "theme <light|dark|plain>")?.parse()?;
    context.config.theme = theme;
    context.persist_config()?;
    output::success(format!("Theme set to {theme}."));
    Ok(())
}

fn cmd_currency(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let symbol = single_arg(args, "currency <symbol>")?;
    context.config.set_currency_symbol(symbol)?;
    context.persist_config()?;
    output::success(format!(
        "Currency symbol set to {}.",
        context.config.currency_symbol
    ));
    Ok(())
}
