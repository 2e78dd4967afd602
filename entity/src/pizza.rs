use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "pizzas")]
pub struct Model {
    #[sea_orm(primary_key)]
    #[serde(skip_deserializing)]
    pub id: i32,
    pub name: String,
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::pizza_ingredient::Entity")]
    PizzaIngredient,
}

impl Related<super::pizza_ingredient::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PizzaIngredient.def()
    }
}

impl Related<super::ingredient::Entity> for Entity {
    fn to() -> RelationDef {
        super::pizza_ingredient::Relation::Ingredient.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::pizza_ingredient::Relation::Pizza.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
