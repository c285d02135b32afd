use async_trait::async_trait;

use crate::error::Result;
use crate::models::Runner;

/// Key-value persistence contract for runner records.
///
/// A miss is not an error: `find_by_nickname` returns `None` and
/// `delete_by_nickname` completes normally for absent keys. Uniqueness
/// conflicts on create are the calling service's responsibility, checked
/// before `save`.
#[async_trait]
pub trait RunnerStore: Send + Sync {
    async fn find_by_nickname(&self, nickname: &str) -> Result<Option<Runner>>;

    /// Insert-or-replace by nickname. On first insert, assigns
    /// `subscription_date` to the current date when unset; on replace, the
    /// stored `subscription_date` is preserved regardless of the incoming
    /// value. Returns the persisted representation.
    async fn save(&self, runner: Runner) -> Result<Runner>;

    async fn delete_by_nickname(&self, nickname: &str) -> Result<()>;
}
