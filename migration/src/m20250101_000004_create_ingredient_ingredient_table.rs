use sea_orm_migration::prelude::*;

use super::m20250101_000002_create_ingredient_table::Ingredients;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(IngredientIngredients::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(IngredientIngredients::ParentIngredientId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(IngredientIngredients::ChildIngredientId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name("pk-ingredient_ingredients")
                            .col(IngredientIngredients::ParentIngredientId)
                            .col(IngredientIngredients::ChildIngredientId),
                    )
                    // an ingredient is never its own component
                    .check(
                        Expr::col(IngredientIngredients::ParentIngredientId)
                            .ne(Expr::col(IngredientIngredients::ChildIngredientId)),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-ingredient_ingredients-parent_ingredient_id")
                            .from(
                                IngredientIngredients::Table,
                                IngredientIngredients::ParentIngredientId,
                            )
                            .to(Ingredients::Table, Ingredients::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-ingredient_ingredients-child_ingredient_id")
                            .from(
                                IngredientIngredients::Table,
                                IngredientIngredients::ChildIngredientId,
                            )
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
            .drop_table(Table::drop().table(IngredientIngredients::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum IngredientIngredients {
    Table,
    ParentIngredientId,
    ChildIngredientId,
}
