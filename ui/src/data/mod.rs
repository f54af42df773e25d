//! Data providers behind the screens.
//!
//! Screens only see these traits; [`Repositories::mock`] wires the in-memory
//! warehouse used by every shell today.

mod mock;
mod model;

use std::sync::Arc;

pub use mock::MockWarehouse;
pub use model::*;

use crate::charts::CategoryDistribution;

pub trait InventoryRepository: Send + Sync {
    fn items(&self) -> Vec<InventoryItem>;
}

pub trait OrderRepository: Send + Sync {
    fn orders(&self) -> Vec<Order>;
}

pub trait MetricsRepository: Send + Sync {
    fn dashboard_summary(&self) -> DashboardSummary;
    /// Per-day activity for the dashboard chart.
    fn daily_operations(&self) -> MetricSeries;
    fn order_volume(&self) -> MetricSeries;
    fn daily_shipments(&self) -> MetricSeries;
    fn inventory_distribution(&self) -> Vec<CategoryDistribution>;
    fn kpis(&self) -> Vec<StatCard>;
}

/// Provided through Dioxus context next to the chart renderer.
#[derive(Clone)]
pub struct Repositories {
    pub inventory: Arc<dyn InventoryRepository>,
    pub orders: Arc<dyn OrderRepository>,
    pub metrics: Arc<dyn MetricsRepository>,
}

impl Repositories {
    pub fn mock() -> Self {
        let warehouse = Arc::new(MockWarehouse);
        Self {
            inventory: warehouse.clone(),
            orders: warehouse.clone(),
            metrics: warehouse,
        }
    }
}

/// Items matching `query`, optionally sorted by name.
pub fn filter_inventory(items: &[InventoryItem], query: &str, sort_by_name: bool) -> Vec<InventoryItem> {
    let mut matches: Vec<InventoryItem> = items
        .iter()
        .filter(|item| item.matches(query))
        .cloned()
        .collect();
    if sort_by_name {
        matches.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    }
    matches
}

/// Orders in repository order, or newest first when `newest_first` is set.
pub fn sort_orders(mut orders: Vec<Order>, newest_first: bool) -> Vec<Order> {
    if newest_first {
        orders.sort_by(|a, b| b.date.cmp(&a.date));
    }
    orders
}
