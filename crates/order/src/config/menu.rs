use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub name: String,
    pub price: i64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MenuError {
    #[error("menu must contain at least one item")]
    Empty,
    #[error("malformed menu entry '{0}', expected Name=price")]
    Malformed(String),
    #[error("invalid price for '{name}': {value}")]
    InvalidPrice { name: String, value: String },
    #[error("duplicate menu item '{0}'")]
    Duplicate(String),
}

/// Fixed menu price table, kept in configuration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuCatalog {
    items: Vec<MenuItem>,
}

impl Default for MenuCatalog {
    fn default() -> Self {
        Self {
            items: vec![
                MenuItem {
                    name: "Nasi Goreng".into(),
                    price: 10000,
                },
                MenuItem {
                    name: "Mie Goreng".into(),
                    price: 5000,
                },
                MenuItem {
                    name: "Ayam Bakar".into(),
                    price: 20000,
                },
            ],
        }
    }
}

impl MenuCatalog {
    pub fn new(items: Vec<MenuItem>) -> Result<Self, MenuError> {
        if items.is_empty() {
            return Err(MenuError::Empty);
        }

        for (index, item) in items.iter().enumerate() {
            if item.name.is_empty() {
                return Err(MenuError::Malformed(format!("={}", item.price)));
            }
            if item.price <= 0 {
                return Err(MenuError::InvalidPrice {
                    name: item.name.clone(),
                    value: item.price.to_string(),
                });
            }
            if items[..index].iter().any(|other| other.name == item.name) {
                return Err(MenuError::Duplicate(item.name.clone()));
            }
        }

        Ok(Self { items })
    }

    /// Parses `Nasi Goreng=10000,Mie Goreng=5000`.
    pub fn parse(input: &str) -> Result<Self, MenuError> {
        let mut items = Vec::new();

        for entry in input.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (name, price) = entry
                .split_once('=')
                .ok_or_else(|| MenuError::Malformed(entry.to_string()))?;
            let name = name.trim();
            let price = price.trim();

            let price = price.parse::<i64>().map_err(|_| MenuError::InvalidPrice {
                name: name.to_string(),
                value: price.to_string(),
            })?;

            items.push(MenuItem {
                name: name.to_string(),
                price,
            });
        }

        Self::new(items)
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn unit_price(&self, name: &str) -> Option<i64> {
        self.items
            .iter()
            .find(|item| item.name == name)
            .map(|item| item.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(menu: &MenuCatalog) -> Vec<&str> {
        menu.items().iter().map(|item| item.name.as_str()).collect()
    }

    #[test]
    fn test_default_prices() {
        let menu = MenuCatalog::default();

        assert_eq!(menu.unit_price("Nasi Goreng"), Some(10000));
        assert_eq!(menu.unit_price("Mie Goreng"), Some(5000));
        assert_eq!(menu.unit_price("Ayam Bakar"), Some(20000));
        assert_eq!(menu.unit_price("Sate"), None);
        assert_eq!(
            names(&menu),
            vec!["Nasi Goreng", "Mie Goreng", "Ayam Bakar"]
        );
    }

    #[test]
    fn test_parse_keeps_order() {
        let menu = MenuCatalog::parse(" Soto = 12000 , Es Teh=3000,").unwrap();

        assert_eq!(names(&menu), vec!["Soto", "Es Teh"]);
        assert_eq!(menu.unit_price("Es Teh"), Some(3000));
    }

    #[test]
    fn test_parse_rejects_bad_entries() {
        assert_eq!(MenuCatalog::parse(""), Err(MenuError::Empty));
        assert_eq!(
            MenuCatalog::parse("Soto"),
            Err(MenuError::Malformed("Soto".into()))
        );
        assert_eq!(
            MenuCatalog::parse("Soto=murah"),
            Err(MenuError::InvalidPrice {
                name: "Soto".into(),
                value: "murah".into()
            })
        );
        assert_eq!(
            MenuCatalog::parse("Soto=0"),
            Err(MenuError::InvalidPrice {
                name: "Soto".into(),
                value: "0".into()
            })
        );
        assert_eq!(
            MenuCatalog::parse("Soto=1,Soto=2"),
            Err(MenuError::Duplicate("Soto".into()))
        );
    }
}
