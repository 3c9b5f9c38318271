use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // One row per owner; the primary key is the upsert conflict target.
        manager
            .create_table(
                Table::create()
                    .table(Settings::Table)
                    .if_not_exists()
                    .col(string(Settings::OwnerId).primary_key())
                    .col(json(Settings::Preferences))
                    .col(json(Settings::Notifications))
                    .col(json(Settings::Integrations))
                    .col(json(Settings::Billing))
                    .col(json(Settings::Security))
                    .col(json(Settings::Appearance))
                    .col(json(Settings::Analytics))
                    .col(json(Settings::Customization))
                    .col(string(Settings::Version))
                    .col(big_integer(Settings::Revision).default(1))
                    .col(timestamp_with_time_zone(Settings::LastUpdated))
                    .col(
                        timestamp_with_time_zone(Settings::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Settings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Settings {
    Table,
    OwnerId,
    Preferences,
    Notifications,
    Integrations,
    Billing,
    Security,
    Appearance,
    Analytics,
    Customization,
    Version,
    Revision,
    LastUpdated,
    CreatedAt,
}
