//! Menu-driven shell gluing forms, services, and rendering together.

use std::path::PathBuf;

use dialoguer::{theme::ColorfulTheme, Select};
use uuid::Uuid;

use crate::{
    cli::{forms, output},
    config::{Config, ConfigManager},
    core::services::{BudgetService, SummaryService},
    core::ProfileBook,
    errors::PocketError,
    storage::JsonStorage,
};

enum Flow {
    Stay,
    SwitchProfile,
    Quit,
}

pub struct Shell {
    book: ProfileBook,
    config_manager: ConfigManager,
    config: Config,
}

impl Shell {
    pub fn new(data_dir: Option<PathBuf>) -> Result<Self, PocketError> {
        let storage = JsonStorage::new(data_dir.clone())?;
        let config_manager = match data_dir {
            Some(base) => ConfigManager::with_base_dir(base)?,
            None => ConfigManager::new()?,
        };
        let config = config_manager.load();
        Ok(Self {
            book: ProfileBook::open(Box::new(storage)),
            config_manager,
            config,
        })
    }

    pub fn run(&mut self) -> Result<(), PocketError> {
        loop {
            let Some(profile_id) = self.pick_profile()? else {
                return Ok(());
            };
            loop {
                match self.dashboard(profile_id)? {
                    Flow::Stay => continue,
                    Flow::SwitchProfile => break,
                    Flow::Quit => return Ok(()),
                }
            }
        }
    }

    /// Profile picker. Returns `None` when the user quits.
    fn pick_profile(&mut self) -> Result<Option<Uuid>, PocketError> {
        loop {
            let mut items: Vec<String> = self
                .book
                .profiles()
                .iter()
                .map(|profile| profile.name.clone())
                .collect();
            let profile_count = items.len();
            items.push("Add profile".into());
            items.push(format!("Toggle theme ({})", self.config.theme));
            items.push("Quit".into());

            let picked = Select::with_theme(&ColorfulTheme::default())
                .with_prompt("Who is budgeting?")
                .items(&items)
                .default(0)
                .interact_opt()
                .unwrap_or(None);

            let Some(index) = picked else {
                return Ok(None);
            };
            if index < profile_count {
                return Ok(Some(self.book.profiles()[index].id));
            }
            match index - profile_count {
                0 => {
                    if let Some(name) = forms::profile_name() {
                        self.book.create_profile(&name)?;
                    }
                }
                1 => self.toggle_theme()?,
                _ => return Ok(None),
            }
        }
    }

    fn dashboard(&mut self, profile_id: Uuid) -> Result<Flow, PocketError> {
        let Some(profile) = self.book.profile(profile_id) else {
            return Ok(Flow::SwitchProfile);
        };
        output::header(profile, self.config.theme);
        output::goals(profile);
        output::budgets(&BudgetService::progress(profile));

        let items = [
            "Add income",
            "Add expense",
            "New goal",
            "Add to goal",
            "Set budget",
            "Spending chart",
            "Recent activity",
            "Toggle theme",
            "Switch profile",
            "Quit",
        ];
        let picked = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("What next?")
            .items(&items)
            .default(0)
            .interact_opt()
            .unwrap_or(None);

        let Some(index) = picked else {
            return Ok(Flow::SwitchProfile);
        };
        match index {
            0 => {
                if let Some(draft) = forms::income_draft() {
                    self.book.add_transaction(profile_id, draft)?;
                }
            }
            1 => {
                if let Some(draft) = forms::expense_draft() {
                    self.book.add_transaction(profile_id, draft)?;
                }
            }
            2 => {
                if let Some((name, target)) = forms::goal_draft() {
                    self.book.add_goal(profile_id, &name, target)?;
                }
            }
            3 => self.contribute(profile_id)?,
            4 => {
                if let Some((category, amount)) = forms::budget_entry() {
                    self.book.set_budget(profile_id, &category, amount)?;
                }
            }
            5 => {
                if let Some(profile) = self.book.profile(profile_id) {
                    output::breakdown_chart(&SummaryService::category_breakdown(profile));
                }
            }
            6 => {
                if let Some(profile) = self.book.profile(profile_id) {
                    output::recent_activity(profile);
                }
            }
            7 => self.toggle_theme()?,
            8 => return Ok(Flow::SwitchProfile),
            _ => return Ok(Flow::Quit),
        }
        Ok(Flow::Stay)
    }

    fn contribute(&mut self, profile_id: Uuid) -> Result<(), PocketError> {
        let Some(profile) = self.book.profile(profile_id) else {
            return Ok(());
        };
        if profile.goals.is_empty() {
            output::info("No goals to add to yet.");
            return Ok(());
        }
        let labels: Vec<String> = profile
            .goals
            .iter()
            .map(|goal| format!("{} (${:.2} / ${:.2})", goal.name, goal.saved, goal.target))
            .collect();
        let goal_ids: Vec<Uuid> = profile.goals.iter().map(|goal| goal.id).collect();
        let picked = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Which goal?")
            .items(&labels)
            .default(0)
            .interact_opt()
            .unwrap_or(None);
        let Some(index) = picked else {
            return Ok(());
        };
        if let Some(amount) = forms::contribution_amount() {
            if let Some(completed) = self
                .book
                .contribute_to_goal(profile_id, goal_ids[index], amount)?
            {
                output::celebrate(&completed);
            }
        }
        Ok(())
    }

    fn toggle_theme(&mut self) -> Result<(), PocketError> {
        self.config.theme = self.config.theme.toggled();
        self.config_manager.save(&self.config)?;
        output::info(format!("Theme set to {}.", self.config.theme));
        Ok(())
    }
}

/// Opens the book from `data_dir` (or the default location) and runs the
/// interactive loop until the user quits.
pub fn run(data_dir: Option<PathBuf>) -> Result<(), PocketError> {
    Shell::new(data_dir)?.run()
}
