//! Interactive forms producing typed drafts.
//!
//! Each form walks the user through a handful of dialoguer prompts and
//! returns a fully-typed value, or `None` when the user cancels. Numeric
//! parsing happens here; the services downstream assume well-typed input.

use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::domain::{IncomeType, TransactionDraft};

fn theme() -> ColorfulTheme {
    ColorfulTheme::default()
}

/// Name for a new profile. Blank input cancels instead of creating.
pub fn profile_name() -> Option<String> {
    let name: String = Input::with_theme(&theme())
        .with_prompt("Your name?")
        .allow_empty(true)
        .interact_text()
        .ok()?;
    let trimmed = name.trim().to_string();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Collects an income draft: amount, source, category, recurring flag.
pub fn income_draft() -> Option<TransactionDraft> {
    let amount = amount_input("Amount received?")?;
    let labels: Vec<String> = IncomeType::ALL.iter().map(|ty| ty.to_string()).collect();
    let picked = Select::with_theme(&theme())
        .with_prompt("Where did it come from?")
        .items(&labels)
        .default(0)
        .interact_opt()
        .ok()??;
    let income_type = IncomeType::ALL[picked];
    let category: String = Input::with_theme(&theme())
        .with_prompt("Category?")
        .default("Income".into())
        .interact_text()
        .ok()?;
    let recurring = recurring_input("Is this recurring?")?;
    Some(TransactionDraft::income(
        amount,
        Some(income_type),
        category.trim(),
        recurring,
    ))
}

/// Collects an expense draft: amount, category, optional notes, recurring flag.
pub fn expense_draft() -> Option<TransactionDraft> {
    let amount = amount_input("Amount spent?")?;
    let category: String = Input::with_theme(&theme())
        .with_prompt("Category?")
        .default("General".into())
        .interact_text()
        .ok()?;
    let notes: String = Input::with_theme(&theme())
        .with_prompt("Notes?")
        .allow_empty(true)
        .interact_text()
        .ok()?;
    let notes = {
        let trimmed = notes.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    };
    let recurring = recurring_input("Is this recurring (subscription)?")?;
    Some(TransactionDraft::expense(
        amount,
        category.trim(),
        notes,
        recurring,
    ))
}

/// Collects a goal name and target amount.
pub fn goal_draft() -> Option<(String, f64)> {
    let name: String = Input::with_theme(&theme())
        .with_prompt("Goal name?")
        .allow_empty(true)
        .interact_text()
        .ok()?;
    let trimmed = name.trim().to_string();
    if trimmed.is_empty() {
        return None;
    }
    let target = amount_input("Target amount?")?;
    Some((trimmed, target))
}

/// Amount to add to a goal. Zero or negative input cancels.
pub fn contribution_amount() -> Option<f64> {
    let amount = amount_input("How much to add?")?;
    if amount > 0.0 {
        Some(amount)
    } else {
        None
    }
}

/// Collects a category and budget limit.
pub fn budget_entry() -> Option<(String, f64)> {
    let category: String = Input::with_theme(&theme())
        .with_prompt("Category to set budget for?")
        .allow_empty(true)
        .interact_text()
        .ok()?;
    let trimmed = category.trim().to_string();
    if trimmed.is_empty() {
        return None;
    }
    let amount = amount_input("Budget amount?")?;
    Some((trimmed, amount))
}

fn amount_input(prompt: &str) -> Option<f64> {
    Input::<f64>::with_theme(&theme())
        .with_prompt(prompt)
        .interact_text()
        .ok()
}

fn recurring_input(prompt: &str) -> Option<bool> {
    Confirm::with_theme(&theme())
        .with_prompt(prompt)
        .default(false)
        .interact()
        .ok()
}
