use serde::Deserialize;

/// Per-call options for [`Query::list_pizzas`](crate::Query::list_pizzas).
///
/// Each field is optional and an absent or empty value disables that
/// criterion. All given criteria must hold at once.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct PizzaListOptions {
    /// Substring of the pizza name or description.
    pub search: Option<String>,
    /// `"name"` (the default) orders by name; any other value leaves the
    /// store's own order.
    pub sort_by: Option<String>,
    /// Substring of the name of any ingredient on the pizza.
    pub ingredient_filter: Option<String>,
    /// Substring of the name of an allergen-flagged ingredient on the pizza.
    /// This matches ingredient names, not allergen categories.
    pub allergen_filter: Option<String>,
}

/// How listed pizzas are ordered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PizzaOrder {
    /// Ascending by name.
    Name,
    /// Whatever order the store returns.
    Unsorted,
}

impl PizzaOrder {
    /// Parses the `sort_by` parameter. Unknown keys are not an error.
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            None | Some("name") => Self::Name,
            Some(_) => Self::Unsorted,
        }
    }
}

impl PizzaListOptions {
    pub fn search(&self) -> Option<&str> {
        non_empty(&self.search)
    }

    pub fn ingredient_filter(&self) -> Option<&str> {
        non_empty(&self.ingredient_filter)
    }

    pub fn allergen_filter(&self) -> Option<&str> {
        non_empty(&self.allergen_filter)
    }

    pub fn order(&self) -> PizzaOrder {
        PizzaOrder::from_param(self.sort_by.as_deref())
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
