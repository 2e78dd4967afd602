use std::collections::BTreeSet;

use pizza_store_service::{
    PizzaListOptions, Query, ServiceError,
    sea_orm::{Database, DatabaseConnection, TransactionTrait},
};
use pretty_assertions::assert_eq;
use seeder::{Migrator, MigratorTrait, link_sub_ingredient};

async fn seeded() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

fn options() -> PizzaListOptions {
    PizzaListOptions::default()
}

async fn names(db: &DatabaseConnection, options: PizzaListOptions) -> Vec<String> {
    let list = Query::list_pizzas(db, &options).await.unwrap();
    assert_eq!(list.total, list.pizzas.len());
    list.pizzas.into_iter().map(|p| p.name).collect()
}

#[tokio::test]
async fn lists_every_pizza_once_sorted_by_name() {
    let db = &seeded().await;

    let list = Query::list_pizzas(db, &options()).await.unwrap();
    assert_eq!(list.total, 12);

    let ids: BTreeSet<_> = list.pizzas.iter().map(|p| p.id).collect();
    assert_eq!(ids, (1..=12).collect());

    assert_eq!(
        list.pizzas.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(),
        vec![
            "BBQ Chicken",
            "Gluten-Free Margherita",
            "Hawaiian",
            "Margherita",
            "Meat Lovers",
            "Mediterranean",
            "Pepperoni",
            "Pesto Chicken",
            "Quattro Stagioni",
            "Seafood Special",
            "Supreme",
            "Veggie Deluxe",
        ]
    );
}

#[tokio::test]
async fn unknown_sort_key_still_lists_everything() {
    let db = &seeded().await;

    let listed: BTreeSet<_> = names(
        db,
        PizzaListOptions {
            sort_by: Some("price".to_owned()),
            ..options()
        },
    )
    .await
    .into_iter()
    .collect();
    let sorted: BTreeSet<_> = names(db, options()).await.into_iter().collect();

    assert_eq!(listed, sorted);
}

#[tokio::test]
async fn repeated_listing_is_identical() {
    let db = &seeded().await;
    let options = PizzaListOptions {
        search: Some("Chicken".to_owned()),
        ..options()
    };

    let first = Query::list_pizzas(db, &options).await.unwrap();
    let second = Query::list_pizzas(db, &options).await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn search_matches_name_or_description() {
    let db = &seeded().await;

    assert_eq!(
        names(
            db,
            PizzaListOptions {
                search: Some("Margherita".to_owned()),
                ..options()
            }
        )
        .await,
        vec!["Gluten-Free Margherita", "Margherita"]
    );

    // "Seafood" only appears in a name, "anchovies" only in a description
    assert_eq!(
        names(
            db,
            PizzaListOptions {
                search: Some("anchovies".to_owned()),
                ..options()
            }
        )
        .await,
        vec!["Seafood Special"]
    );
}

#[tokio::test]
async fn search_ignores_ascii_case() {
    let db = &seeded().await;

    for search in ["margherita", "MARGHERITA"] {
        assert_eq!(
            names(
                db,
                PizzaListOptions {
                    search: Some(search.to_owned()),
                    ..options()
                }
            )
            .await,
            vec!["Gluten-Free Margherita", "Margherita"],
            "search={search}"
        );
    }
}

#[tokio::test]
async fn search_wildcards_match_literally() {
    let db = &seeded().await;

    for search in ["%", "_", "Margherit_", "Marg%ita", "!"] {
        assert!(
            names(
                db,
                PizzaListOptions {
                    search: Some(search.to_owned()),
                    ..options()
                }
            )
            .await
            .is_empty(),
            "search={search}"
        );
    }

    assert!(
        names(
            db,
            PizzaListOptions {
                ingredient_filter: Some("%".to_owned()),
                ..options()
            }
        )
        .await
        .is_empty()
    );
}

#[tokio::test]
async fn ingredient_filter_matches_any_ingredient_name() {
    let db = &seeded().await;

    let cheesy = names(
        db,
        PizzaListOptions {
            ingredient_filter: Some("cheese".to_owned()),
            ..options()
        },
    )
    .await;
    for pizza in ["Margherita", "Pepperoni", "Mediterranean"] {
        assert!(cheesy.iter().any(|name| name == pizza), "{pizza} missing");
    }

    assert_eq!(
        names(
            db,
            PizzaListOptions {
                ingredient_filter: Some("Pineapple".to_owned()),
                ..options()
            }
        )
        .await,
        vec!["Hawaiian"]
    );
}

#[tokio::test]
async fn allergen_filter_matches_flagged_ingredient_names() {
    let db = &seeded().await;

    let with_mozzarella = names(
        db,
        PizzaListOptions {
            allergen_filter: Some("Mozzarella".to_owned()),
            ..options()
        },
    )
    .await;
    assert!(with_mozzarella.iter().any(|name| name == "Margherita"));
    assert!(!with_mozzarella.iter().any(|name| name == "Mediterranean"));
    assert_eq!(with_mozzarella.len(), 11);

    // not an allergen, so never matched by the allergen filter
    assert!(
        names(
            db,
            PizzaListOptions {
                allergen_filter: Some("Pineapple".to_owned()),
                ..options()
            }
        )
        .await
        .is_empty()
    );

    // categories are not resolved
    let dairy = Query::list_pizzas(
        db,
        &PizzaListOptions {
            allergen_filter: Some("dairy".to_owned()),
            ..options()
        },
    )
    .await
    .unwrap();
    assert_eq!(dairy.total, 0);
    assert!(dairy.pizzas.is_empty());
}

#[tokio::test]
async fn filters_compose_as_and() {
    let db = &seeded().await;

    assert_eq!(
        names(
            db,
            PizzaListOptions {
                search: Some("chicken".to_owned()),
                ingredient_filter: Some("cheese".to_owned()),
                ..options()
            }
        )
        .await,
        vec!["BBQ Chicken", "Pesto Chicken"]
    );

    // Mediterranean is the only pizza with feta, and it has no mozzarella
    assert!(
        names(
            db,
            PizzaListOptions {
                ingredient_filter: Some("Feta".to_owned()),
                allergen_filter: Some("Mozzarella".to_owned()),
                ..options()
            }
        )
        .await
        .is_empty()
    );
}

#[tokio::test]
async fn finds_single_pizza_with_allergens() {
    let db = &seeded().await;

    let margherita = Query::find_pizza_by_id(db, 1).await.unwrap();
    assert_eq!(margherita.name, "Margherita");
    assert_eq!(
        margherita
            .ingredients
            .iter()
            .map(|i| i.name.as_str())
            .collect::<BTreeSet<_>>(),
        BTreeSet::from(["Basil", "Mozzarella Cheese", "Tomato Sauce"])
    );
    assert!(margherita.ingredients.iter().all(|i| i.sub_ingredients.is_empty()));
    assert_eq!(margherita.allergens, vec!["Mozzarella Cheese".to_owned()]);

    let seafood = Query::find_pizza_by_id(db, 11).await.unwrap();
    assert_eq!(
        seafood.allergens.iter().map(String::as_str).collect::<BTreeSet<_>>(),
        BTreeSet::from(["Anchovies", "Mozzarella Cheese", "Shrimp"])
    );
}

#[tokio::test]
async fn missing_pizza_is_not_found() {
    let db = &seeded().await;

    let err = Query::find_pizza_by_id(db, 999).await.unwrap_err();
    assert!(err.is_not_found());
    assert!(matches!(err, ServiceError::NotFound { id: 999, .. }));
}

#[tokio::test]
async fn lists_all_ingredients() {
    let db = &seeded().await;

    let ingredients = Query::list_ingredients(db).await.unwrap();
    assert_eq!(ingredients.len(), 30);
    assert_eq!(ingredients.iter().filter(|i| i.is_allergen).count(), 8);
    assert!(ingredients.iter().all(|i| i.sub_ingredients.is_empty()));
}

#[tokio::test]
async fn expands_sub_ingredients_one_level() {
    let db = &seeded().await;

    // Pesto Sauce (18) is made with Basil (13) and Parmesan Cheese (15),
    // and Parmesan is in turn linked to Garlic (14)
    link_sub_ingredient(db, 18, 13).await.unwrap();
    link_sub_ingredient(db, 18, 15).await.unwrap();
    link_sub_ingredient(db, 15, 14).await.unwrap();

    let pesto_chicken = Query::find_pizza_by_id(db, 9).await.unwrap();
    let pesto = pesto_chicken
        .ingredients
        .iter()
        .find(|i| i.name == "Pesto Sauce")
        .unwrap();

    assert_eq!(
        pesto
            .sub_ingredients
            .iter()
            .map(|i| i.name.as_str())
            .collect::<BTreeSet<_>>(),
        BTreeSet::from(["Basil", "Parmesan Cheese"])
    );
    assert!(pesto.sub_ingredients.iter().all(|i| i.sub_ingredients.is_empty()));
    assert_eq!(
        pesto_chicken
            .allergens
            .iter()
            .map(String::as_str)
            .collect::<BTreeSet<_>>(),
        BTreeSet::from(["Mozzarella Cheese", "Parmesan Cheese"])
    );

    let ingredients = Query::list_ingredients(db).await.unwrap();
    let parmesan = ingredients.iter().find(|i| i.id == 15).unwrap();
    assert_eq!(parmesan.sub_ingredients.len(), 1);
    assert_eq!(parmesan.sub_ingredients[0].name, "Garlic");
}

#[tokio::test]
async fn runs_inside_a_request_transaction() {
    let db = &seeded().await;

    let txn = db.begin().await.unwrap();
    let list = Query::list_pizzas(&txn, &options()).await.unwrap();
    let pizza = Query::find_pizza_by_id(&txn, list.pizzas[0].id).await.unwrap();
    txn.commit().await.unwrap();

    assert_eq!(pizza, list.pizzas[0]);
}
