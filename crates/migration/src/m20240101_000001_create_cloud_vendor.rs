//! Create `cloud_vendor` table.
//! The caller-assigned vendor id is the primary key. Only the phone
//! number is length-bounded; the other columns take any string.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CloudVendor::Table)
                    .if_not_exists()
                    .col(string(CloudVendor::Id).primary_key())
                    .col(text(CloudVendor::Name).not_null())
                    .col(text(CloudVendor::Country).not_null())
                    .col(string_len(CloudVendor::VendorPhoneNumber, 10).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(CloudVendor::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum CloudVendor {
    Table,
    Id,
    Name,
    Country,
    VendorPhoneNumber,
}
