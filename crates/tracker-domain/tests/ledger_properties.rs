use tracker_domain::{BudgetHealth, Expense, Ledger};
use uuid::Uuid;

fn ledger_with(total: f64, amounts: &[f64]) -> Ledger {
    let mut ledger = Ledger::new(total);
    for (idx, amount) in amounts.iter().enumerate() {
        ledger.add_expense(Expense::new(format!("item {idx}"), *amount));
    }
    ledger
}

#[test]
fn remaining_tracks_total_minus_sum_after_every_add() {
    let amounts = [12.5, 3.25, 40.0, 0.75, 18.0];
    let mut ledger = Ledger::new(150.0);
    let mut spent = 0.0;
    for amount in amounts {
        ledger.add_expense(Expense::new("item", amount));
        spent += amount;
        assert!((ledger.remaining() - (150.0 - spent)).abs() < 1e-9);
    }
    assert!((ledger.spent() - spent).abs() < 1e-9);
}

#[test]
fn removing_existing_id_drops_exactly_one_expense() {
    let mut ledger = ledger_with(500.0, &[100.0, 50.0, 25.0]);
    let target = ledger.expenses()[1].id;
    let before = ledger.len();

    ledger.remove_expense(target);

    assert_eq!(ledger.len(), before - 1);
    assert_eq!(ledger.remaining(), 500.0 - 125.0);
    assert!(ledger.expense(target).is_none());
}

#[test]
fn removing_unknown_id_changes_nothing() {
    let mut ledger = ledger_with(80.0, &[10.0, 20.0]);
    let snapshot: Vec<Uuid> = ledger.expenses().iter().map(|e| e.id).collect();

    assert!(ledger.remove_expense(Uuid::new_v4()).is_none());

    let after: Vec<Uuid> = ledger.expenses().iter().map(|e| e.id).collect();
    assert_eq!(snapshot, after);
    assert_eq!(ledger.remaining(), 50.0);
}

#[test]
fn recalculation_is_idempotent() {
    let mut ledger = ledger_with(100.0, &[33.3, 12.1]);
    let first = ledger.recalculate_remaining();
    let second = ledger.recalculate_remaining();
    assert_eq!(first, second);
    assert_eq!(first, ledger.remaining());
}

#[test]
fn coffee_and_rent_scenario() {
    let mut ledger = Ledger::new(100.0);
    let coffee = ledger.add_expense(Expense::new("coffee", 10.0));
    assert_eq!(ledger.remaining(), 90.0);
    assert_eq!(ledger.health(), BudgetHealth::Success);

    ledger.add_expense(Expense::new("rent", 90.0));
    assert_eq!(ledger.remaining(), 0.0);
    assert_eq!(ledger.health(), BudgetHealth::Danger);

    ledger.remove_expense(coffee);
    assert_eq!(ledger.remaining(), 10.0);
    assert_eq!(ledger.health(), BudgetHealth::Danger);
}

#[test]
fn eighty_percent_spent_is_danger() {
    let ledger = ledger_with(100.0, &[80.0]);
    assert_eq!(ledger.remaining(), 20.0);
    assert_eq!(ledger.health(), BudgetHealth::Danger);
}

#[test]
fn overspending_is_allowed() {
    let ledger = ledger_with(50.0, &[30.0, 45.0]);
    assert_eq!(ledger.remaining(), -25.0);
    assert_eq!(ledger.health(), BudgetHealth::Danger);
}
