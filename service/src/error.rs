use sea_orm::DbErr;

/// Errors from catalog queries.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// A lookup by id matched nothing.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i32 },
    /// The store failed to answer.
    #[error(transparent)]
    Db(#[from] DbErr),
}

impl ServiceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
