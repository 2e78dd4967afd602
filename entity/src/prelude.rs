pub use super::ingredient::Entity as Ingredient;
pub use super::ingredient_ingredient::Entity as IngredientIngredient;
pub use super::pizza::Entity as Pizza;
pub use super::pizza_ingredient::Entity as PizzaIngredient;
