// Interface adapters: filesystem access and HTTP handling.

pub mod handlers;
pub mod protocol;
pub mod routes;
pub mod state;
