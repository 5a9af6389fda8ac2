use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One row of the order file. Field order matches the column order on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "No")]
    pub sequence_number: usize,
    #[serde(rename = "Nama")]
    pub customer_name: String,
    #[serde(rename = "Menu")]
    pub menu_item: String,
    #[serde(rename = "Jumlah")]
    pub quantity: i32,
    #[serde(rename = "Waktu Pengiriman", with = "shared::utils::timestamp")]
    pub delivery_at: NaiveDateTime,
    #[serde(rename = "Harga")]
    pub total_price: i64,
}

impl Order {
    pub const COLUMNS: [&'static str; 6] =
        ["No", "Nama", "Menu", "Jumlah", "Waktu Pengiriman", "Harga"];
}
