use tracker_domain::Displayable;

use crate::cli::core::{CliMode, CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::registry::CommandEntry;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "add",
            "Record an expense against the budget",
            "add <concept> <amount>",
            cmd_add,
        ),
        CommandEntry::new(
            "remove",
            "Remove an expense by row number or id",
            "remove <row|id>",
            cmd_remove,
        ),
        CommandEntry::new("list", "List recorded expenses", "list", cmd_list),
    ]
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (concept, amount) = split_expense_args(args);
    if context.mode() == CliMode::Script {
        return context.add_expense(
            concept.as_deref().unwrap_or_default(),
            amount.unwrap_or_default(),
        );
    }

    if concept.is_none() || amount.is_none() {
        // Fail fast before prompting for fields that could not be stored.
        context.with_ledger(|_| Ok(()))?;
    }
    let concept = match concept {
        Some(concept) => concept,
        None => io::prompt_text(&context.theme, "Expense")?,
    };
    let amount = match amount {
        Some(amount) => amount.to_string(),
        None => io::prompt_text(&context.theme, "Amount")?,
    };
    context.add_expense(&concept, &amount)
}

/// The last argument is the amount; everything before it is the concept, so
/// `add coffee beans 12` works without quoting. A single argument is the
/// concept alone.
fn split_expense_args<'a>(args: &[&'a str]) -> (Option<String>, Option<&'a str>) {
    match args {
        [] => (None, None),
        [concept] => (Some(concept.to_string()), None),
        [concept @ .., amount] => (Some(concept.join(" ")), Some(*amount)),
    }
}

fn cmd_remove(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [selector] => context.remove_expense(selector),
        [] if context.mode() == CliMode::Interactive => remove_with_selector(context),
        _ => Err(CommandError::InvalidArguments(
            "usage: remove <row|id>".into(),
        )),
    }
}

fn remove_with_selector(context: &mut ShellContext) -> CommandResult {
    let labels = context.with_ledger(|ledger| {
        Ok(ledger
            .expenses()
            .iter()
            .map(|expense| expense.display_label())
            .collect::<Vec<_>>())
    })?;
    if labels.is_empty() {
        io::print_info("No expenses to remove.");
        return Ok(());
    }
    match io::select_item(&context.theme, "Select an expense to remove", &labels)? {
        Some(idx) => context.remove_expense(&(idx + 1).to_string()),
        None => {
            io::print_info("Operation cancelled.");
            Ok(())
        }
    }
}

fn cmd_list(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.render_expenses()
}
