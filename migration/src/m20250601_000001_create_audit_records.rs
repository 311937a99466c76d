use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create audit_records table (append-only, never updated or deleted)
        manager
            .create_table(
                Table::create()
                    .table(AuditRecords::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(AuditRecords::Id).big_integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(AuditRecords::UserId).big_integer().not_null())
                    .col(ColumnDef::new(AuditRecords::Action).string().not_null())
                    .col(ColumnDef::new(AuditRecords::EntityType).string())
                    .col(ColumnDef::new(AuditRecords::EntityId).big_integer())
                    .col(ColumnDef::new(AuditRecords::Details).text())
                    .col(ColumnDef::new(AuditRecords::IpAddress).string())
                    .col(ColumnDef::new(AuditRecords::Timestamp).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // Create indexes separately
        manager
            .create_index(
                Index::create()
                    .name("idx_audit_records_user_id")
                    .table(AuditRecords::Table)
                    .col(AuditRecords::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_audit_records_action")
                    .table(AuditRecords::Table)
                    .col(AuditRecords::Action)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_audit_records_timestamp")
                    .table(AuditRecords::Table)
                    .col(AuditRecords::Timestamp)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AuditRecords::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum AuditRecords {
    Table,
    Id,
    UserId,
    Action,
    EntityType,
    EntityId,
    Details,
    IpAddress,
    Timestamp,
}
