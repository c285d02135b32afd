use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::Result;
use crate::models::Runner;
use crate::store::RunnerStore;

/// Postgres-backed runner store over the `runners` table.
pub struct RunnerRepository {
    pool: PgPool,
}

impl RunnerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RunnerStore for RunnerRepository {
    async fn find_by_nickname(&self, nickname: &str) -> Result<Option<Runner>> {
        let runner = sqlx::query_as::<_, Runner>(
            r#"
            SELECT nickname, runner_name AS name, surname, email,
                   birth_date, subscription_date, last_race
            FROM runners
            WHERE nickname = $1
            "#,
        )
        .bind(nickname)
        .fetch_optional(&self.pool)
        .await?;

        Ok(runner)
    }

    async fn save(&self, runner: Runner) -> Result<Runner> {
        // Upsert keyed on nickname. The conflict arm deliberately leaves
        // subscription_date untouched: it is assigned exactly once, at first
        // insert, by the store itself.
        let saved = sqlx::query_as::<_, Runner>(
            r#"
            INSERT INTO runners
                (nickname, runner_name, surname, email, birth_date, subscription_date, last_race)
            VALUES ($1, $2, $3, $4, $5, COALESCE($6, CURRENT_DATE), $7)
            ON CONFLICT (nickname) DO UPDATE SET
                runner_name = EXCLUDED.runner_name,
                surname = EXCLUDED.surname,
                email = EXCLUDED.email,
                birth_date = EXCLUDED.birth_date,
                last_race = EXCLUDED.last_race
            RETURNING nickname, runner_name AS name, surname, email,
                      birth_date, subscription_date, last_race
            "#,
        )
        .bind(&runner.nickname)
        .bind(&runner.name)
        .bind(&runner.surname)
        .bind(&runner.email)
        .bind(runner.birth_date)
        .bind(runner.subscription_date)
        .bind(&runner.last_race)
        .fetch_one(&self.pool)
        .await?;

        Ok(saved)
    }

    async fn delete_by_nickname(&self, nickname: &str) -> Result<()> {
        sqlx::query("DELETE FROM runners WHERE nickname = $1")
            .bind(nickname)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
