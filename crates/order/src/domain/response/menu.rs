use crate::config::menu::MenuItem;
use serde::Serialize;

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct MenuItemResponse {
    pub name: String,
    pub price: i64,
}

impl From<&MenuItem> for MenuItemResponse {
    fn from(value: &MenuItem) -> Self {
        MenuItemResponse {
            name: value.name.clone(),
            price: value.price,
        }
    }
}
