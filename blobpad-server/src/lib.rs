pub mod api;
pub mod api_state;
