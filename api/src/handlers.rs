use axum::Json;
use axum::extract::{Path, Query, State};
use pizza_store_service::sea_orm::TransactionTrait;
use pizza_store_service::{
    IngredientView, PizzaList, PizzaListOptions, PizzaView, Query as QueryCore,
};
use serde::Serialize;

use crate::AppState;
use crate::error::{ApiError, ApiResult};

pub const API_VERSION: &str = "1.0.0";

#[derive(Debug, Serialize)]
pub struct Welcome {
    pub message: &'static str,
    pub version: &'static str,
}

pub async fn root() -> Json<Welcome> {
    Json(Welcome {
        message: "Welcome to Pizza Store API",
        version: API_VERSION,
    })
}

// Each handler runs its queries on one transaction, committed on success and
// rolled back when dropped on error.

pub async fn list_pizzas(
    State(state): State<AppState>,
    Query(options): Query<PizzaListOptions>,
) -> ApiResult<Json<PizzaList>> {
    let txn = state.conn.begin().await?;
    let list = QueryCore::list_pizzas(&txn, &options).await?;
    txn.commit().await?;

    Ok(Json(list))
}

pub async fn get_pizza(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<PizzaView>> {
    // no stored id lies outside the key column's range
    let Ok(id) = i32::try_from(id) else {
        return Err(ApiError::not_found("Pizza not found"));
    };

    let txn = state.conn.begin().await?;
    let pizza = QueryCore::find_pizza_by_id(&txn, id).await?;
    txn.commit().await?;

    Ok(Json(pizza))
}

pub async fn list_ingredients(State(state): State<AppState>) -> ApiResult<Json<Vec<IngredientView>>> {
    let txn = state.conn.begin().await?;
    let ingredients = QueryCore::list_ingredients(&txn).await?;
    txn.commit().await?;

    Ok(Json(ingredients))
}
