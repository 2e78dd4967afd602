pub use sea_orm_migration::prelude::*;

mod fixture;
mod link;
mod m20250101_000005_seed_pizza_catalog;

pub use fixture::{INGREDIENTS, PIZZAS, PizzaFixture};
pub use link::link_sub_ingredient;

/// The catalog fixture. Its history lives in its own table so the schema
/// migrator run at server startup never sees seed versions it doesn't know.
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250101_000005_seed_pizza_catalog::Migration)]
    }

    fn migration_table_name() -> DynIden {
        Alias::new("seaql_seed_migrations").into_iden()
    }
}
