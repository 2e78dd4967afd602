use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "ingredients")]
pub struct Model {
    #[sea_orm(primary_key)]
    #[serde(skip_deserializing)]
    pub id: i32,
    pub name: String,
    pub is_allergen: bool,
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

impl Related<super::pizza::Entity> for Entity {
    fn to() -> RelationDef {
        super::pizza_ingredient::Relation::Pizza.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::pizza_ingredient::Relation::Ingredient.def().rev())
    }
}

/// Walks one step down the composition relation: from an ingredient to the
/// ingredients it is made of.
#[derive(Debug)]
pub struct SubIngredientLink;

impl Linked for SubIngredientLink {
    type FromEntity = Entity;

    type ToEntity = Entity;

    fn link(&self) -> Vec<RelationDef> {
        vec![
            super::ingredient_ingredient::Relation::Parent.def().rev(),
            super::ingredient_ingredient::Relation::Child.def(),
        ]
    }
}

impl ActiveModelBehavior for ActiveModel {}
