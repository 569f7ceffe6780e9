use super::CommandDefinition;
use crate::cli::core::{CommandResult, ShellContext};
use crate::cli::{output, render};
use crate::ledger::category;

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "summary",
            "Show balance and totals",
            "summary",
            cmd_summary,
        ),
        CommandDefinition::new(
            "list",
            "Show recent transactions, newest first",
            "list",
            cmd_list,
        ),
        CommandDefinition::new(
            "categories",
            "Show the category picker",
            "categories",
            cmd_categories,
        ),
        CommandDefinition::new(
            "status",
            "Show the staged entry form as JSON",
            "status",
            cmd_status,
        ),
    ]
}

fn cmd_summary(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::section("Summary");
    for line in render::summary_lines(context.ledger(), &context.config().currency_symbol) {
        output::line(line);
    }
    Ok(())
}

fn cmd_list(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::section("Recent Transactions");
    if context.ledger().is_empty() {
        output::info("No transactions yet. Use `open` to add one.");
        return Ok(());
    }
    for row in render::recent_rows(context.ledger(), &context.config().currency_symbol) {
        output::line(row);
    }
    Ok(())
}

fn cmd_categories(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::section("Categories");
    let selected = &context.session().selected_category;
    for definition in category::definitions() {
        output::line(render::category_row(definition, &definition.value == selected));
    }
    Ok(())
}

fn cmd_status(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::line(render::form_line(context.session()));
    output::line(serde_json::to_string_pretty(context.session())?);
    Ok(())
}
