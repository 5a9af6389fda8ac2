pub mod api;
pub mod menu;
pub mod order;
