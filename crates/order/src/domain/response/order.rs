use crate::model::order::Order as OrderModel;
use serde::Serialize;
use shared::utils::format_timestamp;

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct OrderResponse {
    pub no: usize,
    pub customer_name: String,
    pub menu_item: String,
    pub quantity: i32,
    pub delivery_at: String,
    pub total_price: i64,
}

// model to response
impl From<&OrderModel> for OrderResponse {
    fn from(value: &OrderModel) -> Self {
        OrderResponse {
            no: value.sequence_number,
            customer_name: value.customer_name.clone(),
            menu_item: value.menu_item.clone(),
            quantity: value.quantity,
            delivery_at: format_timestamp(&value.delivery_at),
            total_price: value.total_price,
        }
    }
}

impl From<OrderModel> for OrderResponse {
    fn from(value: OrderModel) -> Self {
        OrderResponse::from(&value)
    }
}
