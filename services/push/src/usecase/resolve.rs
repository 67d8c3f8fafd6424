use serde_json::Value;

use navette_domain::category::Category;

use crate::domain::repository::ProfileRepository;
use crate::domain::types::{Recipient, TargetFilter};
use crate::error::PushServiceError;

// ── ResolveRecipients ────────────────────────────────────────────────────────

pub struct ResolveRecipientsUseCase<R: ProfileRepository> {
    pub repo: R,
}

impl<R: ProfileRepository> ResolveRecipientsUseCase<R> {
    /// Resolve the eligible recipients for a broadcast: reachable profiles
    /// (token present, not deleted, matching the filter) that have not opted
    /// out of the category. An empty result is a valid outcome.
    pub async fn execute(
        &self,
        filter: &TargetFilter,
        category: Category,
    ) -> Result<Vec<Recipient>, PushServiceError> {
        let profiles = self.repo.find_reachable(filter).await?;
        Ok(profiles
            .into_iter()
            .filter(|p| allows_category(p.notification_preferences.as_ref(), category))
            .map(|p| Recipient {
                subject: p.subject,
                role: p.role,
                push_token: p.push_token,
            })
            .collect())
    }
}

/// Opt-out model: only an explicit `false` under the category key excludes a
/// profile. A missing map, or a missing key, leaves the profile eligible.
pub fn allows_category(preferences: Option<&Value>, category: Category) -> bool {
    !matches!(
        preferences.and_then(|p| p.get(category.as_str())),
        Some(Value::Bool(false))
    )
}
