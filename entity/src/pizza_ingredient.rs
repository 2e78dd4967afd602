use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "pizza_ingredients")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub pizza_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub ingredient_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::pizza::Entity",
        from = "Column::PizzaId",
        to = "super::pizza::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Pizza,
    #[sea_orm(
        belongs_to = "super::ingredient::Entity",
        from = "Column::IngredientId",
        to = "super::ingredient::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Ingredient,
}

impl Related<super::pizza::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pizza.def()
    }
}

impl Related<super::ingredient::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ingredient.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
