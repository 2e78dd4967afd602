use std::collections::HashMap;

use ::entity::{
    ingredient, ingredient::SubIngredientLink, pizza, pizza::Entity as Pizza, pizza_ingredient,
};
use itertools::Itertools;
use sea_orm::sea_query::{self, Expr, LikeExpr, SimpleExpr};
use sea_orm::*;

use crate::view::IngredientCatalog;
use crate::{IngredientView, PizzaList, PizzaListOptions, PizzaOrder, PizzaView, ServiceError};

pub struct Query;

impl Query {
    /// Lists pizzas matching every criterion in `options`, each with its
    /// ingredients expanded and its allergens collected.
    #[tracing::instrument(skip(db))]
    pub async fn list_pizzas<C>(db: &C, options: &PizzaListOptions) -> Result<PizzaList, ServiceError>
    where
        C: ConnectionTrait,
    {
        let pizzas = Self::find_pizzas(options).all(db).await?;
        let views = Self::assemble(db, pizzas).await?;
        tracing::debug!(total = views.len(), "pizzas listed");

        Ok(views.into())
    }

    #[tracing::instrument(skip(db))]
    pub async fn find_pizza_by_id<C>(db: &C, id: i32) -> Result<PizzaView, ServiceError>
    where
        C: ConnectionTrait,
    {
        let pizza = Pizza::find_by_id(id)
            .one(db)
            .await?
            .ok_or(ServiceError::NotFound { entity: "pizza", id })?;

        let mut views = Self::assemble(db, vec![pizza]).await?;
        views.pop().ok_or(ServiceError::NotFound { entity: "pizza", id })
    }

    /// Every ingredient with its direct sub-ingredients.
    #[tracing::instrument(skip(db))]
    pub async fn list_ingredients<C>(db: &C) -> Result<Vec<IngredientView>, ServiceError>
    where
        C: ConnectionTrait,
    {
        let catalog = Self::load_catalog(db, None).await?;
        let views = catalog.views();
        tracing::debug!(total = views.len(), "ingredients listed");

        Ok(views)
    }

    /// The filtered and ordered pizza select, before execution.
    pub fn find_pizzas(options: &PizzaListOptions) -> Select<pizza::Entity> {
        let mut select = Pizza::find();

        if let Some(search) = options.search() {
            select = select.filter(
                Condition::any()
                    .add(contains(pizza::Column::Name, search))
                    .add(contains(pizza::Column::Description, search)),
            );
        }

        if let Some(name) = options.ingredient_filter() {
            select = select.filter(Self::having_ingredient(
                Condition::all().add(contains(ingredient::Column::Name, name)),
            ));
        }

        if let Some(name) = options.allergen_filter() {
            select = select.filter(Self::having_ingredient(
                Condition::all()
                    .add(ingredient::Column::IsAllergen.eq(true))
                    .add(contains(ingredient::Column::Name, name)),
            ));
        }

        match options.order() {
            PizzaOrder::Name => select.order_by_asc(pizza::Column::Name),
            PizzaOrder::Unsorted => select,
        }
    }

    /// `pizzas.id IN (pizzas having at least one ingredient matching `condition`)`
    fn having_ingredient(condition: Condition) -> SimpleExpr {
        pizza::Column::Id.in_subquery(
            sea_query::Query::select()
                .column(pizza_ingredient::Column::PizzaId)
                .from(pizza_ingredient::Entity)
                .and_where(
                    pizza_ingredient::Column::IngredientId.in_subquery(
                        sea_query::Query::select()
                            .column(ingredient::Column::Id)
                            .from(ingredient::Entity)
                            .cond_where(condition)
                            .to_owned(),
                    ),
                )
                .to_owned(),
        )
    }

    /// Loads the ingredients of every pizza in one pass and builds their views,
    /// keeping the order of `pizzas`.
    async fn assemble<C>(db: &C, pizzas: Vec<pizza::Model>) -> Result<Vec<PizzaView>, DbErr>
    where
        C: ConnectionTrait,
    {
        if pizzas.is_empty() {
            return Ok(Vec::new());
        }

        let links = pizza_ingredient::Entity::find()
            .filter(pizza_ingredient::Column::PizzaId.is_in(pizzas.iter().map(|p| p.id)))
            .order_by_asc(pizza_ingredient::Column::PizzaId)
            .order_by_asc(pizza_ingredient::Column::IngredientId)
            .all(db)
            .await?;

        let ingredient_ids = links.iter().map(|l| l.ingredient_id).unique().collect_vec();
        let catalog = if ingredient_ids.is_empty() {
            IngredientCatalog::default()
        } else {
            Self::load_catalog(db, Some(ingredient_ids)).await?
        };

        let mut by_pizza: HashMap<i32, Vec<i32>> = HashMap::new();
        for link in links {
            by_pizza
                .entry(link.pizza_id)
                .or_default()
                .push(link.ingredient_id);
        }

        Ok(pizzas
            .into_iter()
            .map(|pizza| {
                let ids = by_pizza.remove(&pizza.id).unwrap_or_default();
                PizzaView::assemble(pizza, &ids, &catalog)
            })
            .collect())
    }

    /// Ingredients (all of them, or those in `ids`) joined with their direct
    /// sub-ingredients in a single query.
    async fn load_catalog<C>(db: &C, ids: Option<Vec<i32>>) -> Result<IngredientCatalog, DbErr>
    where
        C: ConnectionTrait,
    {
        let mut select = ingredient::Entity::find();
        if let Some(ids) = ids {
            select = select.filter(ingredient::Column::Id.is_in(ids));
        }

        let rows = select
            .order_by_asc(ingredient::Column::Id)
            .find_also_linked(SubIngredientLink)
            .all(db)
            .await?;

        Ok(IngredientCatalog::from_rows(rows))
    }
}

const LIKE_ESCAPE: char = '!';

/// `column LIKE '%text%'` where `%`, `_` and the escape character in `text`
/// match themselves.
fn contains<C: ColumnTrait>(column: C, text: &str) -> SimpleExpr {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for c in text.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');

    Expr::col((column.entity_name(), column)).like(LikeExpr::new(pattern).escape(LIKE_ESCAPE))
}
