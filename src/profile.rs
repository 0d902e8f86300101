//! Profile store: the single shopper record.

use crate::model::UserProfile;

#[derive(Debug)]
pub struct ProfileStore {
    user: UserProfile,
}

impl ProfileStore {
    pub fn new(user: UserProfile) -> Self {
        Self { user }
    }

    pub fn profile(&self) -> &UserProfile {
        &self.user
    }

    /// Profile as exposed to readers, with the derived orders stat
    /// substituted for the stored one.
    pub fn profile_with_orders(&self, order_count: usize) -> UserProfile {
        let mut user = self.user.clone();
        user.stats.orders = order_count as u32;
        user
    }

    /// One-way flag flip, idempotent. The forced navigation to the
    /// merchant dashboard is composed by the orchestrator.
    pub fn become_merchant(&mut self) {
        if !self.user.is_merchant {
            tracing::info!(name = %self.user.name, "user became a merchant");
        }
        self.user.is_merchant = true;
    }

    /// Full replace of the profile record. Merchant status is one-way
    /// and cannot be revoked through a replace.
    pub fn update_profile(&mut self, mut profile: UserProfile) {
        profile.is_merchant |= self.user.is_merchant;
        self.user = profile;
    }

    /// Invoked when the external workflow collaborator saves a result.
    pub fn record_work_saved(&mut self) {
        self.user.stats.works += 1;
        tracing::debug!(works = self.user.stats.works, "work saved");
    }
}
