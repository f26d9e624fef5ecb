pub mod api;
pub mod components;
pub mod confirm;
pub mod crud;
pub mod form_state;
pub mod notifications;
