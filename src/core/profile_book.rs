//! Facade that coordinates profile state and persistence.

use uuid::Uuid;

use crate::{
    core::services::{
        BudgetService, GoalCompleted, GoalService, ProfileService, TransactionService,
    },
    domain::{Profile, TransactionDraft},
    errors::PocketError,
    storage::StorageBackend,
};

/// Owns the authoritative profile collection.
///
/// Every mutation applies a pure service operation, replaces the stored
/// snapshot for that profile, and saves the whole collection immediately.
/// Mutations addressed to an unknown profile id are silent no-ops, in line
/// with the tolerance rules of the services themselves.
pub struct ProfileBook {
    profiles: Vec<Profile>,
    storage: Box<dyn StorageBackend>,
}

impl ProfileBook {
    /// Loads whatever the backend holds; missing or corrupt data simply
    /// starts the book empty.
    pub fn open(storage: Box<dyn StorageBackend>) -> Self {
        let profiles = storage.load();
        tracing::debug!(count = profiles.len(), "profile book opened");
        Self { profiles, storage }
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn profile(&self, id: Uuid) -> Option<&Profile> {
        self.profiles.iter().find(|profile| profile.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Creates a profile and persists the collection. Returns the new id,
    /// or `None` (without touching storage) when the name is blank.
    pub fn create_profile(&mut self, name: &str) -> Result<Option<Uuid>, PocketError> {
        let Some(profile) = ProfileService::create(name) else {
            return Ok(None);
        };
        let id = profile.id;
        self.profiles.push(profile);
        self.save()?;
        Ok(Some(id))
    }

    /// Appends a transaction to the identified profile and persists.
    pub fn add_transaction(
        &mut self,
        profile_id: Uuid,
        draft: TransactionDraft,
    ) -> Result<(), PocketError> {
        let Some(profile) = self.profile(profile_id) else {
            return Ok(());
        };
        let updated = TransactionService::add(profile, draft);
        self.replace_and_save(updated)
    }

    /// Appends a new goal to the identified profile and persists.
    pub fn add_goal(
        &mut self,
        profile_id: Uuid,
        name: &str,
        target: f64,
    ) -> Result<(), PocketError> {
        let Some(profile) = self.profile(profile_id) else {
            return Ok(());
        };
        let updated = GoalService::add(profile, name, target);
        self.replace_and_save(updated)
    }

    /// Contributes to a goal and persists. The completion signal is
    /// forwarded so the caller can celebrate exactly once.
    pub fn contribute_to_goal(
        &mut self,
        profile_id: Uuid,
        goal_id: Uuid,
        amount: f64,
    ) -> Result<Option<GoalCompleted>, PocketError> {
        let Some(profile) = self.profile(profile_id) else {
            return Ok(None);
        };
        let (updated, completed) = GoalService::contribute(profile, goal_id, amount);
        self.replace_and_save(updated)?;
        Ok(completed)
    }

    /// Sets a category budget and persists.
    pub fn set_budget(
        &mut self,
        profile_id: Uuid,
        category: &str,
        amount: f64,
    ) -> Result<(), PocketError> {
        let Some(profile) = self.profile(profile_id) else {
            return Ok(());
        };
        let updated = BudgetService::set(profile, category, amount);
        self.replace_and_save(updated)
    }

    fn replace_and_save(&mut self, updated: Profile) -> Result<(), PocketError> {
        if let Some(slot) = self
            .profiles
            .iter_mut()
            .find(|profile| profile.id == updated.id)
        {
            *slot = updated;
        }
        self.save()
    }

    fn save(&self) -> Result<(), PocketError> {
        self.storage.save(&self.profiles)
    }
}
