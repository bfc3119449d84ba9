//! Read-only logistics records.
//!
//! All records are seeded at startup (see [`crate::catalog`]) and never
//! mutated. Enumerated values serialize with the spelling shown on the
//! dashboards, e.g. `"IN TRANSIT"`. Percentages are `u8` in `0..=100`.

use serde::Serialize;
use std::fmt;

// ============= Shipments =============

/// Lifecycle status of a shipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ShipmentStatus {
    /// Moving between origin and destination.
    #[serde(rename = "IN TRANSIT")]
    InTransit,
    /// Handed over at the destination.
    #[serde(rename = "DELIVERED")]
    Delivered,
    /// Booked, not yet collected.
    #[serde(rename = "PENDING")]
    Pending,
    /// Collected from the origin.
    #[serde(rename = "PICKED UP")]
    PickedUp,
    /// Behind its ETA.
    #[serde(rename = "DELAYED")]
    Delayed,
    /// Being prepared at a hub.
    #[serde(rename = "PROCESSING")]
    Processing,
    /// Listed on a carrier manifest.
    #[serde(rename = "MANIFESTED")]
    Manifested,
}

impl ShipmentStatus {
    /// Display spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            ShipmentStatus::InTransit => "IN TRANSIT",
            ShipmentStatus::Delivered => "DELIVERED",
            ShipmentStatus::Pending => "PENDING",
            ShipmentStatus::PickedUp => "PICKED UP",
            ShipmentStatus::Delayed => "DELAYED",
            ShipmentStatus::Processing => "PROCESSING",
            ShipmentStatus::Manifested => "MANIFESTED",
        }
    }
}

impl fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A consignment moving through the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Shipment {
    /// Tracking identifier.
    pub id: &'static str,
    /// Pickup location.
    pub origin: &'static str,
    /// Drop-off location.
    pub destination: &'static str,
    /// Current status.
    pub status: ShipmentStatus,
    /// ETA as displayed ("14:20 PM", "Completed", "TOMORROW").
    pub eta: &'static str,
    /// Weight as displayed ("450.50 KG").
    pub weight: &'static str,
    /// Carrier name, when assigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier: Option<&'static str>,
    /// Route completion, 0–100.
    pub progress: u8,
}

impl Shipment {
    /// Whether the shipment has reached its destination.
    pub fn is_delivered(&self) -> bool {
        self.status == ShipmentStatus::Delivered
    }
}

// ============= Vehicles =============

/// Maintenance or operating status of a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum VehicleStatus {
    /// Serviced and healthy.
    #[serde(rename = "GOOD")]
    Good,
    /// Service window approaching.
    #[serde(rename = "DUE SOON")]
    DueSoon,
    /// Service window missed.
    #[serde(rename = "OVERDUE")]
    Overdue,
    /// On the road.
    #[serde(rename = "ACTIVE")]
    Active,
    /// Reporting a fault.
    #[serde(rename = "WARNING")]
    Warning,
    /// In the workshop.
    #[serde(rename = "SERVICE")]
    Service,
}

impl VehicleStatus {
    /// Display spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            VehicleStatus::Good => "GOOD",
            VehicleStatus::DueSoon => "DUE SOON",
            VehicleStatus::Overdue => "OVERDUE",
            VehicleStatus::Active => "ACTIVE",
            VehicleStatus::Warning => "WARNING",
            VehicleStatus::Service => "SERVICE",
        }
    }
}

impl fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fleet vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Vehicle {
    /// Fleet identifier.
    pub id: &'static str,
    /// Current status.
    pub status: VehicleStatus,
    /// Health score, 0–100.
    pub health: u8,
    /// Time until the next service, as displayed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_in: Option<&'static str>,
}

// ============= Warehouses =============

/// Utilization above which a zone is flagged on the dispatcher dashboard.
pub const OVER_CAPACITY_THRESHOLD: u8 = 85;

/// A storage zone inside a warehouse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WarehouseZone {
    /// Zone identifier.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Goods category stored in the zone.
    pub category: &'static str,
    /// Number of SKUs or units held.
    pub sku_count: u32,
    /// Space in use, 0–100.
    pub utilization: u8,
    /// Unit label for `sku_count` ("SKU", "UNIT").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<&'static str>,
}

impl WarehouseZone {
    /// Utilization strictly above [`OVER_CAPACITY_THRESHOLD`].
    pub fn is_over_capacity(&self) -> bool {
        self.utilization > OVER_CAPACITY_THRESHOLD
    }
}

// ============= Alerts =============

/// Alert urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AlertSeverity {
    /// Needs immediate action.
    #[serde(rename = "CRITICAL")]
    Critical,
    /// Needs attention.
    #[serde(rename = "WARNING")]
    Warning,
    /// Informational.
    #[serde(rename = "INFO")]
    Info,
}

impl AlertSeverity {
    /// Display spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            AlertSeverity::Critical => "CRITICAL",
            AlertSeverity::Warning => "WARNING",
            AlertSeverity::Info => "INFO",
        }
    }
}

impl fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An operational alert on the dispatcher feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Alert {
    /// Alert identifier.
    pub id: &'static str,
    /// Urgency.
    pub severity: AlertSeverity,
    /// Short heading.
    pub title: &'static str,
    /// Detail line.
    pub message: &'static str,
    /// Time of day as displayed ("08:42").
    pub time: &'static str,
}

// ============= Invoices =============

/// One slice of the partner invoice breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InvoiceSlice {
    /// Slice label.
    pub name: &'static str,
    /// Share of all invoices, 0–100.
    pub percent: u8,
    /// Chart colour as a hex string.
    pub color: &'static str,
}
