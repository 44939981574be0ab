//! Reference and analytics tables: chick_info, companies.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ChickInfo::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ChickInfo::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ChickInfo::Breed).string().not_null())
                    .col(ColumnDef::new(ChickInfo::Gender).string().not_null())
                    .col(ColumnDef::new(ChickInfo::WeightG).integer().not_null())
                    .col(
                        ColumnDef::new(ChickInfo::ArrivedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Companies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Companies::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Companies::Name).string().not_null())
                    .col(ColumnDef::new(Companies::Country).string().not_null())
                    .col(
                        ColumnDef::new(Companies::EmployeesCount)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Companies::PriceUsd).double().not_null())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Companies::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ChickInfo::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum ChickInfo {
    Table,
    Id,
    Breed,
    Gender,
    WeightG,
    ArrivedAt,
}

#[derive(DeriveIden)]
enum Companies {
    Table,
    Id,
    Name,
    Country,
    EmployeesCount,
    PriceUsd,
}
