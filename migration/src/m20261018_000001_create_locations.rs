use sea_orm_migration::{prelude::*, schema::*};

/// Starter places around Monrovia, keyed by normalized name.
const STARTER_LOCATIONS: &[(&str, f64, f64)] = &[
    ("red light", 6.3139, -10.7600),
    ("broad street", 6.3106, -10.8010),
    ("elua", 6.2830, -10.7608),
    ("water side", 6.3007, -10.7964),
    ("duala", 6.3325, -10.7925),
    ("sinkor", 6.2826, -10.7757),
    ("mamba point", 6.3029, -10.7868),
    ("mesurado bridge", 6.3005, -10.7969),
    ("st. paul bridge", 6.2915, -10.7380),
    ("popo beach junction", 6.2500, -10.8000),
    ("small catholic junction", 6.2580, -10.7950),
    ("turning point junction", 6.2600, -10.7900),
    ("shared taxi to paynesville", 6.3100, -10.7600),
    ("god's favor woodshop", 6.2750, -10.7800),
    ("trans-west african coastal highway", 6.2800, -10.8000),
    ("hotel africa road", 6.3020, -10.7850),
    ("kyle local road", 6.2950, -10.7900),
    ("caldwell road", 6.3300, -10.7600),
    ("benson street", 6.3070, -10.7990),
    ("mechlin street", 6.3050, -10.7980),
    ("horton avenue", 6.3040, -10.7970),
    ("lynch street", 6.3060, -10.8000),
    ("mcdonald street", 6.3035, -10.7960),
    ("chicken soup factory road", 6.3150, -10.7800),
    ("clay street", 6.3080, -10.7980),
    ("gurley street", 6.3025, -10.7975),
    ("johnson street", 6.3030, -10.7985),
    ("newport street", 6.3035, -10.7920),
    ("water street", 6.3000, -10.7900),
    ("randall street", 6.3030, -10.7940),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Location::Table)
                    .if_not_exists()
                    .col(string_len(Location::Name, 100).primary_key())
                    .col(double(Location::Latitude).not_null())
                    .col(double(Location::Longitude).not_null())
                    .to_owned(),
            )
            .await?;

        // Seed starter locations
        let mut insert = Query::insert()
            .into_table(Location::Table)
            .columns([Location::Name, Location::Latitude, Location::Longitude])
            .to_owned();

        for (name, lat, lon) in STARTER_LOCATIONS {
            insert.values_panic([(*name).into(), (*lat).into(), (*lon).into()]);
        }

        manager.exec_stmt(insert).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Location::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Location {
    Table,
    Name,
    Latitude,
    Longitude,
}
