//! In-memory warehouse used until a real data source exists.

use tracing::warn;

use crate::charts::CategoryDistribution;

use super::model::{
    DashboardSummary, InventoryItem, Kpi, MetricSeries, Order, OrderStatus, StatCard, StatValue,
    StockStatus,
};
use super::{InventoryRepository, MetricsRepository, OrderRepository};

#[derive(Debug, Clone, Copy, Default)]
pub struct MockWarehouse;

fn item(
    id: &str,
    name: &str,
    sku: &str,
    quantity: u32,
    location: &str,
    status: StockStatus,
) -> InventoryItem {
    InventoryItem {
        id: id.to_string(),
        name: name.to_string(),
        sku: sku.to_string(),
        quantity,
        location: location.to_string(),
        status,
    }
}

impl InventoryRepository for MockWarehouse {
    fn items(&self) -> Vec<InventoryItem> {
        vec![
            item("1", "Laptop", "LAP001", 50, "A1-B2", StockStatus::InStock),
            item("2", "Smartphone", "PHN002", 75, "A2-C3", StockStatus::LowStock),
            item("3", "Headphones", "AUD003", 100, "B1-D4", StockStatus::InStock),
            item("4", "Tablet", "TAB004", 25, "C2-E1", StockStatus::Critical),
            item("5", "Smart Watch", "WCH005", 60, "D1-F2", StockStatus::InStock),
        ]
    }
}

/// Orders as the order feed delivers them, dates in ISO form.
const ORDER_FEED: [(&str, &str, &str, OrderStatus, u32, &str); 4] = [
    ("1", "ORD-001", "Tech Solutions Inc.", OrderStatus::Processing, 5, "2024-02-20"),
    ("2", "ORD-002", "Digital Dynamics", OrderStatus::Shipped, 3, "2024-02-19"),
    ("3", "ORD-003", "Smart Systems Ltd", OrderStatus::Pending, 8, "2024-02-18"),
    ("4", "ORD-004", "Global Electronics", OrderStatus::Delivered, 2, "2024-02-17"),
];

impl OrderRepository for MockWarehouse {
    fn orders(&self) -> Vec<Order> {
        ORDER_FEED
            .iter()
            .filter_map(|&(id, number, customer, status, items, raw_date)| {
                match Order::parse_date(raw_date) {
                    Ok(date) => Some(Order {
                        id: id.to_string(),
                        order_number: number.to_string(),
                        customer: customer.to_string(),
                        status,
                        items,
                        date,
                    }),
                    Err(err) => {
                        warn!(order = number, date = raw_date, "skipping order with bad date: {err}");
                        None
                    }
                }
            })
            .collect()
    }
}

impl MetricsRepository for MockWarehouse {
    fn dashboard_summary(&self) -> DashboardSummary {
        DashboardSummary {
            items_in_stock: 1_234,
            pending_orders: 56,
            low_stock_items: 12,
        }
    }

    fn daily_operations(&self) -> MetricSeries {
        MetricSeries::new(
            ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
            vec![20.0, 45.0, 28.0, 80.0, 99.0, 43.0],
        )
    }

    fn order_volume(&self) -> MetricSeries {
        MetricSeries::new(
            ["Jan", "Feb", "Mar", "Apr", "May", "Jun"],
            vec![20.0, 45.0, 28.0, 80.0, 99.0, 43.0],
        )
    }

    fn daily_shipments(&self) -> MetricSeries {
        MetricSeries::new(
            ["Mon", "Tue", "Wed", "Thu", "Fri"],
            vec![20.0, 45.0, 28.0, 80.0, 99.0],
        )
    }

    fn inventory_distribution(&self) -> Vec<CategoryDistribution> {
        vec![
            CategoryDistribution::new("Electronics", 45.0, "#2563eb"),
            CategoryDistribution::new("Accessories", 28.0, "#eab308"),
            CategoryDistribution::new("Peripherals", 27.0, "#22c55e"),
        ]
    }

    fn kpis(&self) -> Vec<StatCard> {
        vec![
            StatCard {
                kpi: Kpi::TotalOrders,
                value: StatValue::Count(1_234),
                change: 12.3,
            },
            StatCard {
                kpi: Kpi::Revenue,
                value: StatValue::CompactCurrency(45_600.0),
                change: 8.7,
            },
            StatCard {
                kpi: Kpi::AvgOrderValue,
                value: StatValue::Currency(123.0),
                change: 5.2,
            },
            StatCard {
                kpi: Kpi::ReturnRate,
                value: StatValue::Percent(2.4),
                change: -1.1,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn every_feed_order_is_loaded() {
        let orders = MockWarehouse.orders();
        assert_eq!(orders.len(), ORDER_FEED.len());
        assert_eq!(orders[0].date, date!(2024 - 02 - 20));
        assert_eq!(orders[3].date_label(), "Feb 17, 2024");
    }
}
