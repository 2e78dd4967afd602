//! Read-only catalog queries over the pizza store.
//!
//! Every operation takes the store handle explicitly and is generic over
//! [`ConnectionTrait`](sea_orm::ConnectionTrait), so it runs equally on a
//! pooled connection, a per-request transaction or a mock connection.

mod error;
mod options;
mod query;
mod view;

pub use error::*;
pub use options::*;
pub use query::*;
pub use view::*;

pub use sea_orm;
