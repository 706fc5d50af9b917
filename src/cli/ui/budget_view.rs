//! Renders ledger snapshots: totals panel, expense list and the remaining
//! balance indicator.

use colored::Color;
use tracker_domain::{BudgetHealth, Expense};

use crate::cli::ui::style::UiStyle;
use crate::cli::ui::table::{Table, TableColumn};
use crate::core::services::BudgetSummary;

const LABEL_WIDTH: usize = 10;
const CONCEPT_MAX_WIDTH: usize = 32;

/// Stateless renderer; every method takes the data it shows.
#[derive(Debug, Clone, Copy, Default)]
pub struct BudgetView {
    precision: Option<u8>,
}

impl BudgetView {
    pub fn new(precision: Option<u8>) -> Self {
        Self { precision }
    }

    pub fn format_amount(&self, value: f64) -> String {
        match self.precision {
            Some(precision) => format!("{:.*}", precision as usize, value),
            None => value.to_string(),
        }
    }

    pub fn health_color(health: BudgetHealth) -> Color {
        match health {
            BudgetHealth::Success => Color::Green,
            BudgetHealth::Warning => Color::Yellow,
            BudgetHealth::Danger => Color::Red,
        }
    }

    /// Totals panel shown after the budget is confirmed and on `status`.
    pub fn render_budget(&self, summary: &BudgetSummary, style: &UiStyle) -> String {
        let lines = [
            style.header("Budget"),
            field("Budget", &self.format_amount(summary.total_budget)),
            field("Spent", &self.format_amount(summary.spent)),
            self.render_remaining(summary, style),
        ];
        lines.join("\n")
    }

    /// Remaining balance plus the threshold indicator, colored by health.
    pub fn render_remaining(&self, summary: &BudgetSummary, style: &UiStyle) -> String {
        let color = Self::health_color(summary.health);
        let remaining = style.apply_color(&self.format_amount(summary.remaining), color);
        let indicator = style.apply_color(summary.health.label(), color);
        format!(
            "{}\n{}",
            field("Remaining", &remaining),
            field("Status", &indicator)
        )
    }

    pub fn render_expenses(&self, expenses: &[Expense], style: &UiStyle) -> String {
        let header = style.header("Expenses");
        if expenses.is_empty() {
            return format!("{header}\n  No expenses recorded yet.");
        }
        let mut table = Table::new(vec![
            TableColumn::right("#", 2),
            TableColumn::left("CONCEPT", 12).with_max_width(CONCEPT_MAX_WIDTH),
            TableColumn::right("AMOUNT", 8),
            TableColumn::left("ID", 8),
        ]);
        for (idx, expense) in expenses.iter().enumerate() {
            table.add_row(vec![
                (idx + 1).to_string(),
                expense.concept.clone(),
                self.format_amount(expense.amount),
                expense.short_id(),
            ]);
        }
        format!("{header}\n{}", table.render(style))
    }
}

fn field(label: &str, value: &str) -> String {
    format!(
        "  {:<width$} {}",
        format!("{label}:"),
        value,
        width = LABEL_WIDTH
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracker_domain::Ledger;

    use crate::core::services::SummaryService;

    fn plain_style() -> UiStyle {
        UiStyle {
            header_prefix: "> ".into(),
            horizontal: '-',
            use_color: false,
            color_header: None,
            use_icons: false,
        }
    }

    #[test]
    fn amounts_render_raw_or_with_fixed_precision() {
        assert_eq!(BudgetView::new(None).format_amount(90.0), "90");
        assert_eq!(BudgetView::new(None).format_amount(12.5), "12.5");
        assert_eq!(BudgetView::new(Some(2)).format_amount(90.0), "90.00");
        assert_eq!(BudgetView::new(None).format_amount(-5.0), "-5");
    }

    #[test]
    fn budget_panel_lists_totals_and_indicator() {
        let mut ledger = Ledger::new(100.0);
        ledger.add_expense(Expense::new("groceries", 80.0));
        let summary = SummaryService::summarize(&ledger);

        let rendered = BudgetView::default().render_budget(&summary, &plain_style());

        assert!(rendered.contains("Budget:    100"));
        assert!(rendered.contains("Spent:     80"));
        assert!(rendered.contains("Remaining: 20"));
        assert!(rendered.contains("Status:    danger"));
    }

    #[test]
    fn expense_list_numbers_rows_in_insertion_order() {
        let expenses = vec![Expense::new("coffee", 10.0), Expense::new("rent", 90.0)];

        let rendered = BudgetView::default().render_expenses(&expenses, &plain_style());

        let coffee = rendered.find("coffee").unwrap();
        let rent = rendered.find("rent").unwrap();
        assert!(coffee < rent);
        assert!(rendered.contains(&expenses[0].short_id()));
        assert!(rendered.lines().any(|line| line.trim_start().starts_with("2 ")));
    }

    #[test]
    fn empty_list_has_placeholder() {
        let rendered = BudgetView::default().render_expenses(&[], &plain_style());
        assert!(rendered.contains("No expenses recorded yet."));
    }

    #[test]
    fn plain_style_emits_no_escape_sequences() {
        let mut ledger = Ledger::new(10.0);
        ledger.add_expense(Expense::new("snack", 6.0));
        let summary = SummaryService::summarize(&ledger);
        let view = BudgetView::default();
        let combined = format!(
            "{}\n{}",
            view.render_budget(&summary, &plain_style()),
            view.render_expenses(ledger.expenses(), &plain_style())
        );
        assert!(!combined.contains("\u{1b}["));
    }
}
