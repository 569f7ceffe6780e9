//! Commands that drive the staged entry form.

use super::{single_arg, CommandDefinition};
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::{output, render};
use crate::ledger::{category, EntryKind};

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "tab",
            "Switch between the income and expense tabs",
            "tab <income|expense>",
            cmd_tab,
        ),
        CommandDefinition::new("open", "Open the entry form", "open", cmd_open),
        CommandDefinition::new(
            "close",
            "Close the entry form, keeping typed digits",
            "close",
            cmd_close,
        ),
        CommandDefinition::new(
            "key",
            "Press keypad keys (digits and `.`)",
            "key <keys...>",
            cmd_key,
        ),
        CommandDefinition::new(
            "category",
            "Pick the category for the next entry",
            "category <value>",
            cmd_category,
        ),
        CommandDefinition::new(
            "note",
            "Type a description for the staged entry",
            "note <text...>",
            cmd_note,
        ),
        CommandDefinition::new(
            "confirm",
            "Record the staged entry",
            "confirm",
            cmd_confirm,
        ),
    ]
}

fn cmd_tab(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let raw = single_arg(args, "tab <income|expense>")?;
    let kind = raw
        .parse::<EntryKind>()
        .map_err(|err| CommandError::InvalidArguments(err.to_string()))?;
    context.session.select_kind(kind);
    output::info(render::form_line(&context.session));
    Ok(())
}

fn cmd_open(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.session.open_entry_form();
    output::info(render::form_line(&context.session));
    Ok(())
}

fn cmd_close(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.session.close_entry_form();
    output::info(render::form_line(&context.session));
    Ok(())
}

fn cmd_key(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() {
        return Err(CommandError::InvalidArguments("Usage: key <keys...>".into()));
    }
    if !context.session.modal_open {
        output::warning("The entry form is closed. Use `open` first.");
        return Ok(());
    }
    for ch in args.iter().flat_map(|arg| arg.chars()) {
        match ch {
            '.' => {
                if !context.session.press_decimal() {
                    output::warning("Amount already has a decimal point.");
                }
            }
            '0'..='9' => context.session.press_digit(ch as u8 - b'0')?,
            other => {
                return Err(CommandError::InvalidArguments(format!(
                    "`{other}` is not a keypad key"
                )))
            }
        }
    }
    output::info(render::form_line(&context.session));
    Ok(())
}

fn cmd_category(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let value = single_arg(args, "category <value>")?;
    if category::find(value).is_none() {
        output::warning(format!(
            "`{value}` is not a known category; `{}` will be used.",
            category::default_definition().value
        ));
    }
    context.session.select_category(value);
    output::info(render::form_line(&context.session));
    Ok(())
}

fn cmd_note(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() {
        return Err(CommandError::InvalidArguments("Usage: note <text...>".into()));
    }
    context.session.set_description(args.join(" "));
    output::info(format!("Note: {}", context.session.description));
    Ok(())
}

fn cmd_confirm(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    if !context.session.modal_open {
        output::warning("The entry form is closed. Use `open` first.");
        return Ok(());
    }
    let entry = context.session.commit(&mut context.ledger)?;
    output::success(format!(
        "Recorded {} {} ({})",
        entry.kind(),
        render::format_money(entry.amount(), &context.config.currency_symbol),
        entry.category().label
    ));
    Ok(())
}
