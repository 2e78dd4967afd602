use std::collections::HashSet;

use entity::ingredient_ingredient;
use sea_orm_migration::sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, Set,
};

/// Records `child_id` as a component of `parent_id`.
///
/// Rejects a link from an ingredient to itself, and a link whose child can
/// already reach the parent through existing links, so the composition
/// relation stays acyclic.
pub async fn link_sub_ingredient<C>(
    db: &C,
    parent_id: i32,
    child_id: i32,
) -> Result<ingredient_ingredient::Model, DbErr>
where
    C: ConnectionTrait,
{
    if parent_id == child_id {
        return Err(DbErr::Custom(format!(
            "ingredient {parent_id} cannot be its own sub-ingredient"
        )));
    }

    let mut seen = HashSet::from([child_id]);
    let mut frontier = vec![child_id];
    while !frontier.is_empty() {
        let edges = ingredient_ingredient::Entity::find()
            .filter(ingredient_ingredient::Column::ParentIngredientId.is_in(frontier.clone()))
            .all(db)
            .await?;

        frontier.clear();
        for edge in edges {
            if edge.child_ingredient_id == parent_id {
                return Err(DbErr::Custom(format!(
                    "linking ingredient {child_id} under {parent_id} would create a cycle"
                )));
            }
            if seen.insert(edge.child_ingredient_id) {
                frontier.push(edge.child_ingredient_id);
            }
        }
    }

    ingredient_ingredient::Entity::insert(ingredient_ingredient::ActiveModel {
        parent_ingredient_id: Set(parent_id),
        child_ingredient_id: Set(child_id),
    })
    .exec(db)
    .await?;

    Ok(ingredient_ingredient::Model {
        parent_ingredient_id: parent_id,
        child_ingredient_id: child_id,
    })
}
