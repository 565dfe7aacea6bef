use sea_orm::{sea_query::OnConflict, DatabaseConnection, EntityTrait, Set};

use crate::entities::location;
use crate::error::AppResult;
use crate::registry::LocationRegistry;
use crate::utils::geo::Coordinate;

/// Build the in-memory registry from every stored location
pub async fn load_registry(db: &DatabaseConnection) -> AppResult<LocationRegistry> {
    let rows = location::Entity::find().all(db).await?;

    let mut registry = LocationRegistry::new();
    for row in rows {
        if let Err(e) = registry.upsert(&row.name, row.coordinate()) {
            tracing::warn!(name = %row.name, "Skipping stored location: {}", e);
        }
    }

    Ok(registry)
}

/// Insert or overwrite a location keyed by its normalized name
pub async fn save_location(
    db: &DatabaseConnection,
    name: &str,
    coordinate: Coordinate,
) -> AppResult<()> {
    let row = location::ActiveModel {
        name: Set(name.to_string()),
        latitude: Set(coordinate.latitude),
        longitude: Set(coordinate.longitude),
    };

    location::Entity::insert(row)
        .on_conflict(
            OnConflict::column(location::Column::Name)
                .update_columns([location::Column::Latitude, location::Column::Longitude])
                .to_owned(),
        )
        .exec(db)
        .await?;

    Ok(())
}
