use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{sea_query::OnConflict, DatabaseConnection, EntityTrait, Set};

use crate::entities::setting;
use crate::error::AppResult;
use crate::pricing::PricingConfig;

/// Read the pricing settings, falling back to defaults for anything unusable
pub async fn load_pricing(db: &DatabaseConnection) -> AppResult<PricingConfig> {
    let stored: HashMap<String, String> = setting::Entity::find()
        .all(db)
        .await?
        .into_iter()
        .map(|s| (s.key, s.value))
        .collect();

    Ok(PricingConfig::from_stored(|key| {
        stored.get(key).map(String::as_str)
    }))
}

pub async fn save_pricing(db: &DatabaseConnection, pricing: &PricingConfig) -> AppResult<()> {
    let now = Utc::now();
    let rows = pricing
        .to_stored()
        .into_iter()
        .map(|(key, value)| setting::ActiveModel {
            key: Set(key.to_string()),
            value: Set(value),
            updated_at: Set(now.into()),
        });

    setting::Entity::insert_many(rows)
        .on_conflict(
            OnConflict::column(setting::Column::Key)
                .update_columns([setting::Column::Value, setting::Column::UpdatedAt])
                .to_owned(),
        )
        .exec(db)
        .await?;

    Ok(())
}
