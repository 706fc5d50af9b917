//! Parse-with-validation helpers for raw user input.
//!
//! Every entry point returns a typed result; nothing is coerced silently.

use crate::core::errors::ValidationError;

/// A validated expense that has not been recorded yet.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseDraft {
    pub concept: String,
    pub amount: f64,
}

/// Parses the initial budget. Empty, non-numeric, non-finite and
/// non-positive values are rejected.
pub fn parse_budget(raw: &str) -> Result<f64, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyBudget);
    }
    let value = parse_finite(trimmed)
        .ok_or_else(|| ValidationError::BudgetNotNumeric(trimmed.to_string()))?;
    if value <= 0.0 {
        return Err(ValidationError::BudgetNotPositive);
    }
    Ok(value)
}

pub fn parse_amount(raw: &str) -> Result<f64, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingAmount);
    }
    match parse_finite(trimmed) {
        Some(value) if value > 0.0 => Ok(value),
        _ => Err(ValidationError::InvalidAmount),
    }
}

pub fn validate_concept(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingConcept);
    }
    Ok(trimmed.to_string())
}

/// Validates both expense fields, concept first.
pub fn validate_expense(concept: &str, amount: &str) -> Result<ExpenseDraft, ValidationError> {
    let concept = validate_concept(concept)?;
    let amount = parse_amount(amount)?;
    Ok(ExpenseDraft { concept, amount })
}

fn parse_finite(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_accepts_positive_numbers() {
        assert_eq!(parse_budget("100"), Ok(100.0));
        assert_eq!(parse_budget(" 42.5 "), Ok(42.5));
        assert_eq!(parse_budget("1e3"), Ok(1000.0));
    }

    #[test]
    fn budget_rejects_empty_non_numeric_and_non_positive() {
        assert_eq!(parse_budget(""), Err(ValidationError::EmptyBudget));
        assert_eq!(parse_budget("   "), Err(ValidationError::EmptyBudget));
        assert_eq!(
            parse_budget("lots"),
            Err(ValidationError::BudgetNotNumeric("lots".into()))
        );
        assert_eq!(
            parse_budget("inf"),
            Err(ValidationError::BudgetNotNumeric("inf".into()))
        );
        assert_eq!(parse_budget("0"), Err(ValidationError::BudgetNotPositive));
        assert_eq!(parse_budget("-5"), Err(ValidationError::BudgetNotPositive));
    }

    #[test]
    fn amount_distinguishes_missing_from_invalid() {
        assert_eq!(parse_amount(""), Err(ValidationError::MissingAmount));
        assert_eq!(parse_amount("-5"), Err(ValidationError::InvalidAmount));
        assert_eq!(parse_amount("0"), Err(ValidationError::InvalidAmount));
        assert_eq!(parse_amount("ten"), Err(ValidationError::InvalidAmount));
        assert_eq!(parse_amount("NaN"), Err(ValidationError::InvalidAmount));
        assert_eq!(parse_amount("12.75"), Ok(12.75));
    }

    #[test]
    fn concept_is_trimmed_and_required() {
        assert_eq!(validate_concept("  coffee "), Ok("coffee".into()));
        assert_eq!(validate_concept("  "), Err(ValidationError::MissingConcept));
    }

    #[test]
    fn expense_checks_concept_before_amount() {
        assert_eq!(
            validate_expense("", "-1"),
            Err(ValidationError::MissingConcept)
        );
        assert_eq!(
            validate_expense("rent", ""),
            Err(ValidationError::MissingAmount)
        );
        assert_eq!(
            validate_expense("rent", "90"),
            Ok(ExpenseDraft {
                concept: "rent".into(),
                amount: 90.0
            })
        );
    }

    #[test]
    fn messages_match_form_feedback() {
        assert_eq!(
            ValidationError::MissingConcept.to_string(),
            "Please enter the expense name."
        );
        assert_eq!(
            ValidationError::MissingAmount.to_string(),
            "Please enter the amount."
        );
        assert_eq!(
            ValidationError::InvalidAmount.to_string(),
            "Please enter a valid amount."
        );
    }
}
