use std::collections::HashMap;

use ::entity::{ingredient, pizza};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// An ingredient as returned to callers. Nested views never carry their own
/// sub-ingredients: expansion stops one level down.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct IngredientView {
    pub id: i32,
    pub name: String,
    pub is_allergen: bool,
    pub sub_ingredients: Vec<IngredientView>,
}

/// A pizza with its ingredients and the de-duplicated names of every
/// allergen among them.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct PizzaView {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub ingredients: Vec<IngredientView>,
    pub allergens: Vec<String>,
}

/// Result of a pizza listing. `total` is always `pizzas.len()`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct PizzaList {
    pub pizzas: Vec<PizzaView>,
    pub total: usize,
}

impl From<Vec<PizzaView>> for PizzaList {
    fn from(pizzas: Vec<PizzaView>) -> Self {
        Self {
            total: pizzas.len(),
            pizzas,
        }
    }
}

impl IngredientView {
    fn leaf(model: &ingredient::Model) -> Self {
        Self {
            id: model.id,
            name: model.name.clone(),
            is_allergen: model.is_allergen,
            sub_ingredients: Vec::new(),
        }
    }
}

/// Ingredients keyed by id together with their direct components, built from
/// `(ingredient, Option<sub-ingredient>)` rows.
#[derive(Debug, Default)]
pub(crate) struct IngredientCatalog {
    order: Vec<i32>,
    ingredients: HashMap<i32, ingredient::Model>,
    components: HashMap<i32, Vec<ingredient::Model>>,
}

impl IngredientCatalog {
    pub(crate) fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = (ingredient::Model, Option<ingredient::Model>)>,
    {
        let mut catalog = Self::default();
        for (parent, child) in rows {
            let id = parent.id;
            if !catalog.ingredients.contains_key(&id) {
                catalog.order.push(id);
                catalog.ingredients.insert(id, parent);
            }
            if let Some(child) = child {
                let components = catalog.components.entry(id).or_default();
                if components.iter().all(|c| c.id != child.id) {
                    components.push(child);
                }
            }
        }
        catalog
    }

    fn components(&self, id: i32) -> &[ingredient::Model] {
        self.components.get(&id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Expands one ingredient, pushing the names of allergens found (its
    /// components first, then itself) onto `allergens`.
    fn expand(&self, model: &ingredient::Model, allergens: &mut Vec<String>) -> IngredientView {
        let mut view = IngredientView::leaf(model);
        for component in self.components(model.id) {
            view.sub_ingredients.push(IngredientView::leaf(component));
            if component.is_allergen {
                allergens.push(component.name.clone());
            }
        }
        if model.is_allergen {
            allergens.push(model.name.clone());
        }
        view
    }

    /// Every ingredient in the catalog, in the order first seen.
    pub(crate) fn views(&self) -> Vec<IngredientView> {
        let mut discarded = Vec::new();
        self.order
            .iter()
            .filter_map(|id| self.ingredients.get(id))
            .map(|model| self.expand(model, &mut discarded))
            .collect()
    }
}

impl PizzaView {
    /// Builds the view for `pizza` whose direct ingredients are
    /// `ingredient_ids`. Ids missing from `catalog` are skipped.
    pub(crate) fn assemble(
        pizza: pizza::Model,
        ingredient_ids: &[i32],
        catalog: &IngredientCatalog,
    ) -> Self {
        let mut allergens = Vec::new();
        let ingredients = ingredient_ids
            .iter()
            .filter_map(|id| catalog.ingredients.get(id))
            .map(|model| catalog.expand(model, &mut allergens))
            .collect();

        Self {
            id: pizza.id,
            name: pizza.name,
            description: pizza.description,
            ingredients,
            allergens: allergens.into_iter().unique().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ingredient(id: i32, name: &str, is_allergen: bool) -> ingredient::Model {
        ingredient::Model {
            id,
            name: name.to_owned(),
            is_allergen,
        }
    }

    fn margherita() -> pizza::Model {
        pizza::Model {
            id: 1,
            name: "Margherita".to_owned(),
            description: "Classic".to_owned(),
        }
    }

    #[test]
    fn expands_one_level_and_collects_allergens() {
        let sauce = ingredient(1, "Alfredo Sauce", true);
        let cheese = ingredient(2, "Parmesan Cheese", true);
        let basil = ingredient(3, "Basil", false);

        let catalog = IngredientCatalog::from_rows([
            (sauce.clone(), Some(cheese.clone())),
            (sauce.clone(), Some(basil.clone())),
            (basil.clone(), None),
        ]);

        let view = PizzaView::assemble(margherita(), &[1, 3], &catalog);

        assert_eq!(
            view.ingredients,
            vec![
                IngredientView {
                    id: 1,
                    name: "Alfredo Sauce".to_owned(),
                    is_allergen: true,
                    sub_ingredients: vec![
                        IngredientView::leaf(&cheese),
                        IngredientView::leaf(&basil),
                    ],
                },
                IngredientView::leaf(&basil),
            ]
        );
        assert_eq!(
            view.allergens,
            vec!["Parmesan Cheese".to_owned(), "Alfredo Sauce".to_owned()]
        );
    }

    #[test]
    fn allergen_names_are_deduplicated() {
        // two distinct rows that share a name, plus the same component reached twice
        let mozzarella = ingredient(2, "Mozzarella Cheese", true);
        let fresh_mozzarella = ingredient(7, "Mozzarella Cheese", true);
        let pesto = ingredient(4, "Pesto Sauce", false);
        let parmesan = ingredient(5, "Parmesan Cheese", true);
        let alfredo = ingredient(6, "Alfredo Sauce", false);

        let catalog = IngredientCatalog::from_rows([
            (mozzarella, None),
            (fresh_mozzarella, None),
            (pesto, Some(parmesan.clone())),
            (alfredo, Some(parmesan)),
        ]);

        let view = PizzaView::assemble(margherita(), &[2, 7, 4, 6], &catalog);

        let mut allergens = view.allergens.clone();
        allergens.sort();
        assert_eq!(allergens, vec!["Mozzarella Cheese", "Parmesan Cheese"]);
        assert_eq!(view.ingredients.len(), 4);
    }

    #[test]
    fn nested_views_stop_at_one_level() {
        let dough = ingredient(1, "Regular Dough", true);
        let flour = ingredient(2, "Flour", false);
        let wheat = ingredient(3, "Wheat", true);

        let catalog = IngredientCatalog::from_rows([
            (dough.clone(), Some(flour.clone())),
            (flour.clone(), Some(wheat)),
        ]);

        let view = PizzaView::assemble(margherita(), &[1], &catalog);

        assert_eq!(view.ingredients[0].sub_ingredients, vec![IngredientView::leaf(&flour)]);
        assert!(view.ingredients[0].sub_ingredients[0].sub_ingredients.is_empty());
        assert_eq!(view.allergens, vec!["Regular Dough".to_owned()]);
    }

    #[test]
    fn pizza_without_ingredients() {
        let view = PizzaView::assemble(margherita(), &[], &IngredientCatalog::default());

        assert!(view.ingredients.is_empty());
        assert!(view.allergens.is_empty());
    }

    #[test]
    fn catalog_views_keep_first_seen_order() {
        let catalog = IngredientCatalog::from_rows([
            (ingredient(3, "Basil", false), None),
            (ingredient(1, "Tomato Sauce", false), None),
        ]);

        let names: Vec<_> = catalog.views().into_iter().map(|v| v.name).collect();
        assert_eq!(names, vec!["Basil", "Tomato Sauce"]);
    }
}
