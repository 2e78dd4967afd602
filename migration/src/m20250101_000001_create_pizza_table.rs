use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pizzas::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Pizzas::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Pizzas::Name).string().not_null())
                    .col(ColumnDef::new(Pizzas::Description).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx-pizzas-name")
                    .table(Pizzas::Table)
                    .col(Pizzas::Name)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Pizzas::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Pizzas {
    Table,
    Id,
    Name,
    Description,
}
