//! Warehouse records shown by the screens.

use time::{macros::format_description, Date};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StockStatus {
    InStock,
    LowStock,
    Critical,
}

impl StockStatus {
    /// Selector value for the `stock-status` message.
    pub fn key(self) -> &'static str {
        match self {
            StockStatus::InStock => "in-stock",
            StockStatus::LowStock => "low-stock",
            StockStatus::Critical => "critical",
        }
    }

    /// Modifier class for the status badge.
    pub fn css_class(self) -> &'static str {
        match self {
            StockStatus::InStock => "status-badge--in-stock",
            StockStatus::LowStock => "status-badge--low-stock",
            StockStatus::Critical => "status-badge--critical",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    pub sku: String,
    pub quantity: u32,
    pub location: String,
    pub status: StockStatus,
}

impl InventoryItem {
    /// Case-insensitive match on name or SKU. A blank query matches everything.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        needle.is_empty()
            || self.name.to_lowercase().contains(&needle)
            || self.sku.to_lowercase().contains(&needle)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    Processing,
    Shipped,
    Pending,
    Delivered,
}

impl OrderStatus {
    /// Selector value for the `order-status` message.
    pub fn key(self) -> &'static str {
        match self {
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Pending => "pending",
            OrderStatus::Delivered => "delivered",
        }
    }

    /// Badge background for the status.
    pub fn color(self) -> &'static str {
        match self {
            OrderStatus::Processing => "#eab308",
            OrderStatus::Shipped => "#2563eb",
            OrderStatus::Delivered => "#22c55e",
            OrderStatus::Pending => "#64748b",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: String,
    pub order_number: String,
    pub customer: String,
    pub status: OrderStatus,
    pub items: u32,
    pub date: Date,
}

impl Order {
    /// Parses an ISO calendar date (`2024-02-20`) as stored by order feeds.
    pub fn parse_date(raw: &str) -> Result<Date, time::error::Parse> {
        Date::parse(raw.trim(), &format_description!("[year]-[month]-[day]"))
    }

    /// `Feb 20, 2024`
    pub fn date_label(&self) -> String {
        self.date
            .format(&format_description!(
                "[month repr:short] [day padding:none], [year]"
            ))
            .unwrap_or_else(|_| self.date.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardSummary {
    pub items_in_stock: u64,
    pub pending_orders: u64,
    pub low_stock_items: u64,
}

/// Categories with one value each, the raw material of line and bar charts.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSeries {
    pub categories: Vec<String>,
    pub values: Vec<f64>,
}

impl MetricSeries {
    pub fn new<I, S>(categories: I, values: impl Into<Vec<f64>>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            categories: categories.into_iter().map(Into::into).collect(),
            values: values.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kpi {
    TotalOrders,
    Revenue,
    AvgOrderValue,
    ReturnRate,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatValue {
    Count(u64),
    Currency(f64),
    CompactCurrency(f64),
    Percent(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatCard {
    pub kpi: Kpi,
    pub value: StatValue,
    /// Period-over-period change in percent.
    pub change: f64,
}

impl StatCard {
    pub fn is_negative(&self) -> bool {
        self.change < 0.0
    }
}
