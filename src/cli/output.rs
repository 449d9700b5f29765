//! Colored terminal rendering for the dashboard.

use colored::Colorize;

use crate::{
    config::Theme,
    core::services::{BudgetProgress, CategorySpend, GoalCompleted},
    domain::{Profile, TransactionKind},
};

const BAR_WIDTH: usize = 24;
const RECENT_LIMIT: usize = 10;

pub fn info(message: impl std::fmt::Display) {
    println!("{} {}", "[i]".cyan(), message);
}

pub fn header(profile: &Profile, theme: Theme) {
    println!();
    println!(
        "{}  {}",
        format!("Hi {}!", profile.name).bold(),
        format!("Balance: ${:.2}", profile.balance).green().bold()
    );
    println!("{}", format!("theme: {}", theme).dimmed());
}

pub fn goals(profile: &Profile) {
    if profile.goals.is_empty() {
        println!("{}", "No goals yet.".dimmed());
        return;
    }
    println!("{}", "Goals".bold().underline());
    for goal in &profile.goals {
        let bar = progress_bar(goal.progress());
        let amounts = format!("${:.2} / ${:.2}", goal.saved, goal.target);
        if goal.is_reached() {
            println!("  {}  {} {}", goal.name.green(), bar, amounts.green());
        } else {
            println!("  {}  {} {}", goal.name, bar, amounts);
        }
    }
}

pub fn budgets(rows: &[BudgetProgress]) {
    if rows.is_empty() {
        println!("{}", "No budgets set.".dimmed());
        return;
    }
    println!("{}", "Budgets".bold().underline());
    for row in rows {
        let fraction = if row.limit > 0.0 {
            (row.spent / row.limit).clamp(0.0, 1.0)
        } else {
            1.0
        };
        let bar = progress_bar(fraction);
        let figures = format!("${:.2} / ${:.2}", row.spent, row.limit);
        if row.is_over() {
            println!("  {}  {} {}", row.category, bar, figures.red().bold());
        } else {
            println!("  {}  {} {}", row.category, bar, figures);
        }
    }
}

/// Horizontal bar chart over the category breakdown, in category order.
pub fn breakdown_chart(rows: &[CategorySpend]) {
    println!("{}", "Spending by Category".bold().underline());
    let widest = rows
        .iter()
        .map(|row| row.category.len())
        .max()
        .unwrap_or(0);
    let top = rows.iter().map(|row| row.spent).fold(0.0_f64, f64::max);
    for row in rows {
        let width = if top > 0.0 {
            ((row.spent / top) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        println!(
            "  {:<pad$}  {} ${:.2}",
            row.category,
            "█".repeat(width).cyan(),
            row.spent,
            pad = widest
        );
    }
}

pub fn recent_activity(profile: &Profile) {
    println!("{}", "Recent Activity".bold().underline());
    if profile.transactions.is_empty() {
        println!("{}", "  Nothing recorded yet.".dimmed());
        return;
    }
    for txn in profile.transactions.iter().take(RECENT_LIMIT) {
        let arrow = match txn.kind {
            TransactionKind::Income => "↑".green(),
            TransactionKind::Expense => "↓".red(),
        };
        let mut line = format!("${:.2} {}", txn.amount, txn.category);
        if let Some(income_type) = txn.income_type {
            line.push_str(&format!(" ({})", income_type));
        }
        if txn.recurring {
            line.push_str(" ⟳");
        }
        println!("  {} {}  {}", arrow, line, txn.date.format("%Y-%m-%d").to_string().dimmed());
    }
}

/// The confetti moment: a one-shot banner for a freshly completed goal.
pub fn celebrate(completed: &GoalCompleted) {
    let stars = "✶ ✷ ✸ ✹ ✸ ✷ ✶";
    println!();
    println!("  {}", stars.yellow().bold());
    println!(
        "  {}",
        format!(
            "Goal reached! {} — ${:.2} saved of ${:.2}",
            completed.name, completed.saved, completed.target
        )
        .green()
        .bold()
    );
    println!("  {}", stars.yellow().bold());
    println!();
}

fn progress_bar(fraction: f64) -> String {
    let filled = (fraction.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
    format!(
        "[{}{}]",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled)
    )
}
