use crate::model::order::Order;
use chrono::NaiveDateTime;
use std::collections::BTreeMap;

/// Orders in insertion order. The head of the queue is the oldest order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderQueue {
    orders: Vec<Order>,
}

impl OrderQueue {
    pub fn new(orders: Vec<Order>) -> Self {
        Self { orders }
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Display number the next pushed order will get.
    pub fn next_sequence_number(&self) -> usize {
        self.orders.len() + 1
    }

    pub fn push(&mut self, order: Order) {
        self.orders.push(order);
    }

    /// Removes the oldest order and renumbers the rest from 1.
    pub fn pop_front(&mut self) -> Option<Order> {
        if self.orders.is_empty() {
            return None;
        }

        let removed = self.orders.remove(0);
        self.renumber();
        Some(removed)
    }

    fn renumber(&mut self) {
        for (index, order) in self.orders.iter_mut().enumerate() {
            order.sequence_number = index + 1;
        }
    }

    pub fn nearest_delivery(&self) -> Option<NaiveDateTime> {
        self.orders.iter().map(|o| o.delivery_at).min()
    }

    /// Sum of quantities, not the number of rows.
    pub fn total_items(&self) -> i64 {
        self.orders.iter().map(|o| i64::from(o.quantity)).sum()
    }

    pub fn menu_totals(&self) -> BTreeMap<String, i64> {
        let mut totals = BTreeMap::new();
        for order in &self.orders {
            *totals.entry(order.menu_item.clone()).or_insert(0) += i64::from(order.quantity);
        }
        totals
    }

    pub fn find_by_name(&self, name: &str) -> Vec<&Order> {
        self.orders
            .iter()
            .filter(|o| o.customer_name == name)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn order(no: usize, name: &str, menu: &str, quantity: i32, hour: u32) -> Order {
        Order {
            sequence_number: no,
            customer_name: name.into(),
            menu_item: menu.into(),
            quantity,
            delivery_at: NaiveDate::from_ymd_opt(2026, 10, 16)
                .unwrap()
                .and_hms_opt(hour, 0, 0)
                .unwrap(),
            total_price: 1000 * i64::from(quantity),
        }
    }

    fn sample() -> OrderQueue {
        OrderQueue::new(vec![
            order(1, "Ani", "Nasi Goreng", 2, 18),
            order(2, "Budi", "Mie Goreng", 1, 9),
            order(3, "Ani", "Nasi Goreng", 3, 12),
        ])
    }

    #[test]
    fn test_menu_totals_groups_by_menu() {
        let totals = sample().menu_totals();

        assert_eq!(totals.len(), 2);
        assert_eq!(totals["Nasi Goreng"], 5);
        assert_eq!(totals["Mie Goreng"], 1);
    }

    #[test]
    fn test_total_items_counts_quantities() {
        let queue = sample();
        assert_eq!(queue.total_items(), 6);
        assert_eq!(queue.len(), 3);
    }

    #[test]
    fn test_nearest_delivery_ignores_insertion_order() {
        let nearest = sample().nearest_delivery().unwrap();
        assert_eq!(nearest.format("%H:%M").to_string(), "09:00");
    }

    #[test]
    fn test_empty_queue_queries() {
        let queue = OrderQueue::default();

        assert!(queue.nearest_delivery().is_none());
        assert_eq!(queue.total_items(), 0);
        assert!(queue.menu_totals().is_empty());
        assert_eq!(queue.next_sequence_number(), 1);
    }

    #[test]
    fn test_pop_front_renumbers_from_one() {
        let mut queue = sample();

        let removed = queue.pop_front().unwrap();
        assert_eq!(removed.customer_name, "Ani");
        assert_eq!(removed.sequence_number, 1);

        let numbers: Vec<usize> = queue.orders().iter().map(|o| o.sequence_number).collect();
        assert_eq!(numbers, vec![1, 2]);
        assert_eq!(queue.orders()[0].customer_name, "Budi");
        assert_eq!(queue.next_sequence_number(), 3);
    }

    #[test]
    fn test_pop_front_on_empty_queue() {
        let mut queue = OrderQueue::default();
        assert!(queue.pop_front().is_none());
        assert!(queue.is_empty());
    }

    #[test]
    fn test_find_by_name_is_exact_and_ordered() {
        let queue = sample();

        let found = queue.find_by_name("Ani");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].sequence_number, 1);
        assert_eq!(found[1].sequence_number, 3);

        assert!(queue.find_by_name("ani").is_empty());
        assert!(queue.find_by_name("An").is_empty());
    }
}
