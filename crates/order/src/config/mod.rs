pub mod menu;
pub mod myconfig;
