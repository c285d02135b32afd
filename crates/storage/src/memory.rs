use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Local;
use tokio::sync::RwLock;

use crate::error::Result;
use crate::models::Runner;
use crate::store::RunnerStore;

/// In-memory runner store with the same per-key semantics as the Postgres
/// repository. Used by tests and local development in place of a database.
#[derive(Default)]
pub struct InMemoryRunnerStore {
    runners: RwLock<HashMap<String, Runner>>,
}

impl InMemoryRunnerStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RunnerStore for InMemoryRunnerStore {
    async fn find_by_nickname(&self, nickname: &str) -> Result<Option<Runner>> {
        Ok(self.runners.read().await.get(nickname).cloned())
    }

    async fn save(&self, mut runner: Runner) -> Result<Runner> {
        let mut runners = self.runners.write().await;

        match runners.get(&runner.nickname) {
            // Replace: the stored subscription date always wins.
            Some(existing) => runner.subscription_date = existing.subscription_date,
            // First insert: assign the subscription date if unset.
            None => {
                runner
                    .subscription_date
                    .get_or_insert_with(|| Local::now().date_naive());
            }
        }

        runners.insert(runner.nickname.clone(), runner.clone());
        Ok(runner)
    }

    async fn delete_by_nickname(&self, nickname: &str) -> Result<()> {
        self.runners.write().await.remove(nickname);
        Ok(())
    }
}
