//! Score store operations

use crate::config::DatabaseConfig;
use crate::utils::error::{HubError, Result};
use chrono::{DateTime, FixedOffset, Utc};
use sea_orm::sea_query::OnConflict;
use sea_orm::*;
use sea_orm_migration::MigratorTrait;
use std::time::Duration;
use tracing::{debug, info};

use super::entity as user_scores;
use super::migration::Migrator;

/// A stored score row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreRecord {
    /// Opaque score blob as written by the client
    pub data: serde_json::Value,
    /// Timestamp of the last write
    pub updated_at: DateTime<FixedOffset>,
}

/// SeaORM-backed score store
#[derive(Debug)]
pub struct ScoreStore {
    db: DatabaseConnection,
}

impl ScoreStore {
    /// Connect to the database and run migrations
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let mut opt = ConnectOptions::new(config.url.clone());
        opt.max_connections(config.max_connections)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.connection_timeout))
            .sqlx_logging(true)
            .sqlx_logging_level(log::LevelFilter::Debug);

        let db = Database::connect(opt).await.map_err(HubError::Database)?;

        Migrator::up(&db, None).await.map_err(HubError::Database)?;

        info!("Score store connected");
        Ok(Self { db })
    }

    /// Fetch the score row for a user
    ///
    /// An absent row is a regular outcome, not an error.
    pub async fn fetch(&self, user_id: &str) -> Result<Option<ScoreRecord>> {
        debug!("Fetching scores for user: {}", user_id);

        let model = user_scores::Entity::find_by_id(user_id.to_string())
            .one(&self.db)
            .await
            .map_err(HubError::Database)?;

        Ok(model.map(|m| ScoreRecord {
            data: m.data,
            updated_at: m.updated_at,
        }))
    }

    /// Upsert the score row for a user, replacing any prior blob wholesale
    ///
    /// Conflict target is the user id; repeated identical writes are
    /// idempotent apart from the timestamp.
    pub async fn upsert(&self, user_id: &str, data: serde_json::Value) -> Result<DateTime<Utc>> {
        debug!("Upserting scores for user: {}", user_id);

        let now = Utc::now();
        let model = user_scores::ActiveModel {
            user_id: Set(user_id.to_string()),
            data: Set(data),
            updated_at: Set(now.into()),
        };

        user_scores::Entity::insert(model)
            .on_conflict(
                OnConflict::column(user_scores::Column::UserId)
                    .update_columns([user_scores::Column::Data, user_scores::Column::UpdatedAt])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(HubError::Database)?;

        Ok(now)
    }
}
