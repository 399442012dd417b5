pub mod dispatch;
pub mod events;
pub mod handlers;
pub mod routes;
