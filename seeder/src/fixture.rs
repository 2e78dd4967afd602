/// `(name, is_allergen)` in insertion order; ids are assigned 1..=30.
pub const INGREDIENTS: &[(&str, bool)] = &[
    ("Tomato Sauce", false),
    ("Mozzarella Cheese", true),
    ("Pepperoni", false),
    ("Mushrooms", false),
    ("Bell Peppers", false),
    ("Onions", false),
    ("Olives", false),
    ("Pineapple", false),
    ("Ham", false),
    ("Bacon", false),
    ("Sausage", false),
    ("Chicken", false),
    ("Basil", false),
    ("Garlic", false),
    ("Parmesan Cheese", true),
    ("Feta Cheese", true),
    ("Goat Cheese", true),
    ("Pesto Sauce", false),
    ("Alfredo Sauce", true),
    ("BBQ Sauce", false),
    ("Jalapeños", false),
    ("Spinach", false),
    ("Artichokes", false),
    ("Sun-dried Tomatoes", false),
    ("Arugula", false),
    ("Prosciutto", false),
    ("Anchovies", true),
    ("Shrimp", true),
    ("Gluten-Free Dough", false),
    ("Regular Dough", true),
];

#[derive(Debug, Clone, Copy)]
pub struct PizzaFixture {
    pub name: &'static str,
    pub description: &'static str,
    pub ingredients: &'static [&'static str],
}

/// Pizzas in insertion order; ids are assigned 1..=12.
pub const PIZZAS: &[PizzaFixture] = &[
    PizzaFixture {
        name: "Margherita",
        description: "Classic Italian pizza with fresh tomatoes, mozzarella, and basil",
        ingredients: &["Tomato Sauce", "Mozzarella Cheese", "Basil"],
    },
    PizzaFixture {
        name: "Pepperoni",
        description: "Traditional pepperoni pizza with mozzarella cheese",
        ingredients: &["Tomato Sauce", "Mozzarella Cheese", "Pepperoni"],
    },
    PizzaFixture {
        name: "Supreme",
        description: "Loaded with pepperoni, sausage, mushrooms, bell peppers, and onions",
        ingredients: &[
            "Tomato Sauce",
            "Mozzarella Cheese",
            "Pepperoni",
            "Sausage",
            "Mushrooms",
            "Bell Peppers",
            "Onions",
        ],
    },
    PizzaFixture {
        name: "Hawaiian",
        description: "Sweet and savory combination of ham and pineapple",
        ingredients: &["Tomato Sauce", "Mozzarella Cheese", "Ham", "Pineapple"],
    },
    PizzaFixture {
        name: "Meat Lovers",
        description: "For the carnivore in you - pepperoni, sausage, bacon, and ham",
        ingredients: &[
            "Tomato Sauce",
            "Mozzarella Cheese",
            "Pepperoni",
            "Sausage",
            "Bacon",
            "Ham",
        ],
    },
    PizzaFixture {
        name: "Veggie Deluxe",
        description: "Fresh vegetables including mushrooms, bell peppers, onions, olives, and spinach",
        ingredients: &[
            "Tomato Sauce",
            "Mozzarella Cheese",
            "Mushrooms",
            "Bell Peppers",
            "Onions",
            "Olives",
            "Spinach",
        ],
    },
    PizzaFixture {
        name: "BBQ Chicken",
        description: "Grilled chicken with BBQ sauce, red onions, and cilantro",
        ingredients: &["BBQ Sauce", "Mozzarella Cheese", "Chicken", "Onions"],
    },
    PizzaFixture {
        name: "Mediterranean",
        description: "Mediterranean flavors with feta cheese, olives, artichokes, and sun-dried tomatoes",
        ingredients: &[
            "Tomato Sauce",
            "Feta Cheese",
            "Olives",
            "Artichokes",
            "Sun-dried Tomatoes",
        ],
    },
    PizzaFixture {
        name: "Pesto Chicken",
        description: "Grilled chicken with pesto sauce, mozzarella, and fresh arugula",
        ingredients: &["Pesto Sauce", "Mozzarella Cheese", "Chicken", "Arugula"],
    },
    PizzaFixture {
        name: "Quattro Stagioni",
        description: "Four seasons pizza with artichokes, mushrooms, prosciutto, and olives",
        ingredients: &[
            "Tomato Sauce",
            "Mozzarella Cheese",
            "Artichokes",
            "Mushrooms",
            "Prosciutto",
            "Olives",
        ],
    },
    PizzaFixture {
        name: "Seafood Special",
        description: "Fresh seafood with shrimp and anchovies",
        ingredients: &["Tomato Sauce", "Mozzarella Cheese", "Shrimp", "Anchovies"],
    },
    PizzaFixture {
        name: "Gluten-Free Margherita",
        description: "Classic margherita made with gluten-free dough",
        ingredients: &[
            "Tomato Sauce",
            "Mozzarella Cheese",
            "Basil",
            "Gluten-Free Dough",
        ],
    },
];
