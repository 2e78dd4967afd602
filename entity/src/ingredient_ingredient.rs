use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A directed composition edge: `parent_ingredient_id` is made with
/// `child_ingredient_id`. A row never points an ingredient at itself.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "ingredient_ingredients")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub parent_ingredient_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub child_ingredient_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::ingredient::Entity",
        from = "Column::ParentIngredientId",
        to = "super::ingredient::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Parent,
    #[sea_orm(
        belongs_to = "super::ingredient::Entity",
        from = "Column::ChildIngredientId",
        to = "super::ingredient::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Child,
}

impl ActiveModelBehavior for ActiveModel {}
