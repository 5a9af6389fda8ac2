use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct CreateOrderRequest {
    #[validate(length(min = 1, message = "customer name must not be empty"))]
    pub customer_name: String,

    pub menu_item: String,

    #[validate(range(min = 1, message = "quantity must be greater than 0"))]
    pub quantity: i32,

    /// Time of day only; the date is inferred at submission.
    pub delivery_time: NaiveTime,
}

impl CreateOrderRequest {
    // Checked in this order; only the first failure is reported.
    const FIELD_ORDER: [&'static str; 2] = ["customer_name", "quantity"];

    pub fn first_violation(&self) -> Option<String> {
        let errors = self.validate().err()?;
        let field_errors = errors.field_errors();

        Self::FIELD_ORDER.iter().find_map(|field| {
            field_errors
                .get(*field)
                .and_then(|errs| errs.first())
                .map(|err| {
                    err.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("invalid {field}"))
                })
        })
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SearchOrderRequest {
    pub customer_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, quantity: i32) -> CreateOrderRequest {
        CreateOrderRequest {
            customer_name: name.into(),
            menu_item: "Nasi Goreng".into(),
            quantity,
            delivery_time: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_valid_request() {
        assert_eq!(request("Ani", 1).first_violation(), None);
    }

    #[test]
    fn test_empty_name() {
        assert_eq!(
            request("", 2).first_violation().as_deref(),
            Some("customer name must not be empty")
        );
    }

    #[test]
    fn test_non_positive_quantity() {
        assert_eq!(
            request("Ani", 0).first_violation().as_deref(),
            Some("quantity must be greater than 0")
        );
        assert_eq!(
            request("Ani", -3).first_violation().as_deref(),
            Some("quantity must be greater than 0")
        );
    }

    #[test]
    fn test_name_is_reported_before_quantity() {
        assert_eq!(
            request("", 0).first_violation().as_deref(),
            Some("customer name must not be empty")
        );
    }
}
