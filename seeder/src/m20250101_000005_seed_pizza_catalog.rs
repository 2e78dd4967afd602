use std::collections::HashMap;

use entity::{ingredient, pizza, pizza_ingredient};
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

use crate::fixture::{INGREDIENTS, PIZZAS};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // schema migrations only create what is missing
        for schema in migration::Migrator::migrations() {
            schema.up(manager).await?;
        }

        let db = manager.get_connection();

        let mut ingredient_ids = HashMap::with_capacity(INGREDIENTS.len());
        for (name, is_allergen) in INGREDIENTS {
            let model = ingredient::ActiveModel {
                name: Set((*name).to_owned()),
                is_allergen: Set(*is_allergen),
                ..Default::default()
            }
            .insert(db)
            .await?;
            ingredient_ids.insert(*name, model.id);
        }

        for fixture in PIZZAS {
            let pizza = pizza::ActiveModel {
                name: Set(fixture.name.to_owned()),
                description: Set(fixture.description.to_owned()),
                ..Default::default()
            }
            .insert(db)
            .await?;

            let links: Vec<_> = fixture
                .ingredients
                .iter()
                .filter_map(|name| match ingredient_ids.get(name) {
                    Some(id) => Some(*id),
                    None => {
                        tracing::warn!(
                            pizza = fixture.name,
                            ingredient = *name,
                            "unknown ingredient skipped"
                        );
                        None
                    }
                })
                .map(|ingredient_id| pizza_ingredient::ActiveModel {
                    pizza_id: Set(pizza.id),
                    ingredient_id: Set(ingredient_id),
                })
                .collect();

            if !links.is_empty() {
                pizza_ingredient::Entity::insert_many(links).exec(db).await?;
            }
        }

        tracing::info!(
            pizzas = PIZZAS.len(),
            ingredients = INGREDIENTS.len(),
            "pizza catalog seeded"
        );
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        let pizza_names: Vec<_> = PIZZAS.iter().map(|p| p.name).collect();
        let ingredient_names: Vec<_> = INGREDIENTS.iter().map(|(name, _)| *name).collect();

        let pizza_ids: Vec<i32> = pizza::Entity::find()
            .filter(pizza::Column::Name.is_in(pizza_names.clone()))
            .all(db)
            .await?
            .into_iter()
            .map(|p| p.id)
            .collect();
        pizza_ingredient::Entity::delete_many()
            .filter(pizza_ingredient::Column::PizzaId.is_in(pizza_ids))
            .exec(db)
            .await?;

        pizza::Entity::delete_many()
            .filter(pizza::Column::Name.is_in(pizza_names))
            .exec(db)
            .await?;
        ingredient::Entity::delete_many()
            .filter(ingredient::Column::Name.is_in(ingredient_names))
            .exec(db)
            .await?;

        tracing::info!("pizza catalog seed removed");
        Ok(())
    }
}
