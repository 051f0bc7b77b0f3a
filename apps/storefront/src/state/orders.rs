//! # Order History
//!
//! The "My Orders" list. Seeded with two demo orders; checkout adds new ones
//! to the front. Kept in memory only.

use std::sync::{Mutex, MutexGuard, PoisonError};

use bouticlick_core::{Money, Order, OrderLine, OrderStatus, ORDER_NUMBER_PREFIX};
use chrono::NaiveDate;
use tracing::info;
use uuid::Uuid;

/// Placed orders, newest first.
#[derive(Debug, Default)]
pub struct OrderHistory {
    orders: Mutex<Vec<Order>>,
}

impl OrderHistory {
    /// An empty history.
    pub fn new() -> Self {
        OrderHistory::default()
    }

    /// The demo history shown to every signed-in user.
    pub fn with_mock_orders() -> Self {
        OrderHistory {
            orders: Mutex::new(mock_orders()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Order>> {
        self.orders.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Records a just-placed order at the front of the list.
    pub fn confirm(
        &self,
        number: impl Into<String>,
        items: Vec<OrderLine>,
        total: Money,
        date: NaiveDate,
    ) -> Order {
        let order = Order {
            id: Uuid::new_v4().to_string(),
            number: number.into(),
            date,
            status: OrderStatus::Processing,
            total,
            items,
        };

        info!(number = %order.number, total = %order.total, "Order confirmed");
        self.lock().insert(0, order.clone());
        order
    }

    /// A fresh `ORD-` number with six digits, unique within this history.
    pub fn next_order_number(&self) -> String {
        loop {
            let digits = Uuid::new_v4().as_u128() % 1_000_000;
            let number = format!("{}{:06}", ORDER_NUMBER_PREFIX, digits);
            if self.find(&number).is_none() {
                return number;
            }
        }
    }

    pub fn orders(&self) -> Vec<Order> {
        self.lock().clone()
    }

    pub fn find(&self, number: &str) -> Option<Order> {
        self.lock().iter().find(|o| o.number == number).cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

// The recorded totals are what the demo displays; they are not recomputed
// from the lines.
fn mock_orders() -> Vec<Order> {
    vec![
        Order {
            id: "1".to_string(),
            number: "ORD-001".to_string(),
            date: demo_date(2024, 1, 15),
            status: OrderStatus::Delivered,
            total: Money::from_cents(29997),
            items: vec![
                line("Wireless Bluetooth Headphones", 1, 7999),
                line("Smartphone Case", 2, 2499),
            ],
        },
        Order {
            id: "2".to_string(),
            number: "ORD-002".to_string(),
            date: demo_date(2024, 1, 10),
            status: OrderStatus::Shipped,
            total: Money::from_cents(15998),
            items: vec![
                line("Mechanical Keyboard", 1, 12999),
                line("Wireless Mouse", 1, 3999),
            ],
        },
    ]
}

fn line(name: &str, quantity: i64, cents: i64) -> OrderLine {
    OrderLine {
        name: name.to_string(),
        quantity,
        price: Money::from_cents(cents),
    }
}

fn demo_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_orders() {
        let history = OrderHistory::with_mock_orders();
        let orders = history.orders();

        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].number, "ORD-001");
        assert_eq!(orders[0].status, OrderStatus::Delivered);
        assert_eq!(orders[0].date.to_string(), "2024-01-15");
        assert_eq!(orders[0].items[1].line_total(), Money::from_cents(4998));
        assert_eq!(orders[1].total.to_string(), "$159.98");
    }

    #[test]
    fn test_confirm_prepends_processing_order() {
        let history = OrderHistory::with_mock_orders();
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();

        let order = history.confirm(
            "ORD-123456",
            vec![line("Wireless Mouse", 2, 3999)],
            Money::from_cents(7998),
            date,
        );

        assert_eq!(order.status, OrderStatus::Processing);
        assert_eq!(history.len(), 3);
        assert_eq!(history.orders()[0].number, "ORD-123456");
        assert_eq!(history.find("ORD-123456"), Some(order));
        assert_eq!(history.find("ORD-999"), None);
    }

    #[test]
    fn test_next_order_number_format() {
        let history = OrderHistory::new();
        assert!(history.is_empty());

        let number = history.next_order_number();
        assert!(number.starts_with("ORD-"));
        assert_eq!(number.len(), 10);
        assert!(number[4..].chars().all(|c| c.is_ascii_digit()));
    }
}
