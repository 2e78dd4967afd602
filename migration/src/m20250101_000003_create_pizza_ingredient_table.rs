use sea_orm_migration::prelude::*;

use super::m20250101_000001_create_pizza_table::Pizzas;
use super::m20250101_000002_create_ingredient_table::Ingredients;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PizzaIngredients::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PizzaIngredients::PizzaId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PizzaIngredients::IngredientId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name("pk-pizza_ingredients")
                            .col(PizzaIngredients::PizzaId)
                            .col(PizzaIngredients::IngredientId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-pizza_ingredients-pizza_id")
                            .from(PizzaIngredients::Table, PizzaIngredients::PizzaId)
                            .to(Pizzas::Table, Pizzas::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-pizza_ingredients-ingredient_id")
                            .from(PizzaIngredients::Table, PizzaIngredients::IngredientId)
                            .to(Ingredients::Table, Ingredients::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PizzaIngredients::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PizzaIngredients {
    Table,
    PizzaId,
    IngredientId,
}
