//! Controllers own a group of handlers and register them on a [`RouteTable`].
//!
//! A controller is built once from the container through [`Injectable`] and
//! shared behind an `Arc`; each route closure holds a clone of that `Arc`.

use crate::di::Injectable;
use crate::error::Result;
use crate::router::RouteTable;
use std::sync::Arc;

mod get_controller;

pub use get_controller::{GetController, HeaderValues, QueryParams};

pub trait Controller: Injectable {
    /// Register this controller's routes on `table`.
    fn register_routes<S>(self: Arc<Self>, table: &mut RouteTable<S>) -> Result<()>
    where
        S: Clone + Send + Sync + 'static;
}
