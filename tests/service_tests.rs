mod common;

use pocketbook::core::services::{
    BudgetService, GoalService, ProfileService, SummaryService, TransactionService,
};
use pocketbook::domain::{IncomeType, Transaction, TransactionDraft, TransactionKind};

#[test]
fn allowance_then_lunch_scenario() {
    let profile = ProfileService::create("Maya").expect("profile");

    let profile = TransactionService::add(
        &profile,
        TransactionDraft::income(20.0, Some(IncomeType::Allowance), "Allowance", false),
    );
    assert_eq!(profile.balance, 20.0);
    assert!(profile.categories.iter().any(|c| c == "Allowance"));

    let profile = TransactionService::add(
        &profile,
        TransactionDraft::expense(5.0, "Food", Some("lunch".into()), false),
    );
    assert_eq!(profile.balance, 15.0);
    assert_eq!(profile.transactions.len(), 2);
    assert_eq!(profile.transactions[0].kind, TransactionKind::Expense);
    assert_eq!(profile.transactions[0].category, "Food");
    assert_eq!(profile.transactions[1].kind, TransactionKind::Income);
    assert_eq!(profile.transactions[1].category, "Allowance");
}

#[test]
fn balance_invariant_holds_over_a_long_mixed_sequence() {
    let mut profile = ProfileService::create("Theo").expect("profile");
    for n in 1..=20u32 {
        let draft = if n % 3 == 0 {
            TransactionDraft::expense(n as f64, "Fun", None, false)
        } else {
            TransactionDraft::income(n as f64, Some(IncomeType::Chore), "Chores", false)
        };
        profile = TransactionService::add(&profile, draft);
    }
    let expected: f64 = profile
        .transactions
        .iter()
        .map(Transaction::signed_amount)
        .sum();
    assert!((profile.balance - expected).abs() < f64::EPSILON);
}

#[test]
fn breakdown_covers_every_category_in_order() {
    let profile = ProfileService::create("Maya").expect("profile");
    let profile = TransactionService::add(
        &profile,
        TransactionDraft::expense(7.0, "Snacks", None, false),
    );
    let breakdown = SummaryService::category_breakdown(&profile);
    let order: Vec<&str> = breakdown.iter().map(|row| row.category.as_str()).collect();
    assert_eq!(order, ["Food", "Fun", "Subscriptions", "Savings", "Snacks"]);
    assert_eq!(breakdown.last().map(|row| row.spent), Some(7.0));
}

#[test]
fn budgets_track_spend_without_validating_categories() {
    let profile = ProfileService::create("Maya").expect("profile");
    let profile = BudgetService::set(&profile, "Fun", 15.0);
    let profile = BudgetService::set(&profile, "NotACategory", -3.0);
    let profile =
        TransactionService::add(&profile, TransactionDraft::expense(20.0, "Fun", None, false));

    let rows = BudgetService::progress(&profile);
    let fun = rows.iter().find(|row| row.category == "Fun").expect("Fun");
    assert_eq!(fun.spent, 20.0);
    assert!(fun.is_over());
    assert!(rows.iter().any(|row| row.category == "NotACategory"));
}

#[test]
fn goal_completion_signals_once_via_the_book() {
    let (mut book, _guard) = common::setup_test_env();
    let profile_id = book
        .create_profile("Maya")
        .expect("save")
        .expect("id assigned");
    book.add_goal(profile_id, "Bike", 50.0).expect("save");
    let goal_id = book.profile(profile_id).unwrap().goals[0].id;

    let first = book
        .contribute_to_goal(profile_id, goal_id, 40.0)
        .expect("save");
    assert!(first.is_none());

    let crossing = book
        .contribute_to_goal(profile_id, goal_id, 10.0)
        .expect("save");
    let completed = crossing.expect("crossing fires");
    assert_eq!(completed.saved, 50.0);

    let after = book
        .contribute_to_goal(profile_id, goal_id, 5.0)
        .expect("save");
    assert!(after.is_none());
    assert_eq!(book.profile(profile_id).unwrap().goals[0].saved, 55.0);
}

#[test]
fn contribute_never_lowers_saved() {
    let profile = ProfileService::create("Maya").expect("profile");
    let profile = GoalService::add(&profile, "Trip", 200.0);
    let goal_id = profile.goals[0].id;

    let mut current = profile;
    let mut last = 0.0;
    for amount in [10.0, 0.0, 55.5, 134.5, 1.0] {
        let (next, _) = GoalService::contribute(&current, goal_id, amount);
        assert!(next.goals[0].saved >= last);
        last = next.goals[0].saved;
        current = next;
    }
}
