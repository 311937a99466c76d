use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create monitored_users table
        manager
            .create_table(
                Table::create()
                    .table(MonitoredUsers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(MonitoredUsers::Id).big_integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(MonitoredUsers::UserId).big_integer().not_null())
                    .col(ColumnDef::new(MonitoredUsers::Reason).string().not_null())
                    .col(ColumnDef::new(MonitoredUsers::ActionsCount).big_integer().not_null())
                    .col(ColumnDef::new(MonitoredUsers::TimeWindow).string().not_null())
                    .col(ColumnDef::new(MonitoredUsers::FirstDetected).big_integer().not_null())
                    .col(ColumnDef::new(MonitoredUsers::LastUpdated).big_integer().not_null())
                    .col(ColumnDef::new(MonitoredUsers::Status).string().not_null())
                    .to_owned(),
            )
            .await?;

        // Lookup index for the find-active-by-(user, reason) upsert path
        manager
            .create_index(
                Index::create()
                    .name("idx_monitored_users_user_reason_status")
                    .table(MonitoredUsers::Table)
                    .col(MonitoredUsers::UserId)
                    .col(MonitoredUsers::Reason)
                    .col(MonitoredUsers::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_monitored_users_status")
                    .table(MonitoredUsers::Table)
                    .col(MonitoredUsers::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MonitoredUsers::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum MonitoredUsers {
    Table,
    Id,
    UserId,
    Reason,
    ActionsCount,
    TimeWindow,
    FirstDetected,
    LastUpdated,
    Status,
}
