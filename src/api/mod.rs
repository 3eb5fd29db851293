pub mod error;
pub mod handlers;
pub mod routes;
pub mod schemas;
pub mod state;

pub use routes::create_router;
pub use state::{AppState, SharedState};
