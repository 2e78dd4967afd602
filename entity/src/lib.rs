pub mod prelude;

pub mod ingredient;
pub mod ingredient_ingredient;
pub mod pizza;
pub mod pizza_ingredient;
