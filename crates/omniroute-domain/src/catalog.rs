//! The fixed data set behind every dashboard.

use crate::models::{
    Alert, AlertSeverity, InvoiceSlice, Shipment, ShipmentStatus, Vehicle, VehicleStatus,
    WarehouseZone,
};

/// All shipments, in display order.
pub static SHIPMENTS: [Shipment; 7] = [
    Shipment {
        id: "OR-LX-7721",
        origin: "San Francisco, CA",
        destination: "Los Angeles, CA",
        status: ShipmentStatus::InTransit,
        eta: "14:20 PM",
        weight: "450.50 KG",
        carrier: Some("OmniExpress"),
        progress: 65,
    },
    Shipment {
        id: "OR-LX-4412",
        origin: "Seattle, WA",
        destination: "Portland, OR",
        status: ShipmentStatus::Processing,
        eta: "16:45 PM",
        weight: "790.00 KG",
        carrier: Some("OmniExpress"),
        progress: 20,
    },
    Shipment {
        id: "OR-LX-1009",
        origin: "Austin, TX",
        destination: "Dallas, TX",
        status: ShipmentStatus::Delivered,
        eta: "Completed",
        weight: "120.00 KG",
        carrier: Some("OmniExpress"),
        progress: 100,
    },
    Shipment {
        id: "OR-9912",
        origin: "HKG - Hong Kong Intl",
        destination: "LHR - London Heathrow",
        status: ShipmentStatus::InTransit,
        eta: "14:20",
        weight: "450.50 KG",
        carrier: Some("Cathay Cargo"),
        progress: 65,
    },
    Shipment {
        id: "OR-8841",
        origin: "Seattle, WA",
        destination: "Portland, OR",
        status: ShipmentStatus::PickedUp,
        eta: "16:45",
        weight: "790.00 KG",
        carrier: None,
        progress: 15,
    },
    Shipment {
        id: "OR-7729",
        origin: "Austin, TX",
        destination: "Dallas, TX",
        status: ShipmentStatus::Delayed,
        eta: "19:10",
        weight: "120.00 KG",
        carrier: None,
        progress: 45,
    },
    Shipment {
        id: "OR-6610",
        origin: "Chicago, IL",
        destination: "New York, NY",
        status: ShipmentStatus::Pending,
        eta: "TOMORROW",
        weight: "300.00 KG",
        carrier: None,
        progress: 0,
    },
];

/// All fleet vehicles. The first three are maintenance records, the last
/// three are partner fleet units.
pub static VEHICLES: [Vehicle; 6] = [
    Vehicle {
        id: "VH-90210",
        status: VehicleStatus::Good,
        health: 100,
        due_in: Some("12 Days"),
    },
    Vehicle {
        id: "VH-45812",
        status: VehicleStatus::DueSoon,
        health: 75,
        due_in: Some("2 Days"),
    },
    Vehicle {
        id: "VH-11209",
        status: VehicleStatus::Overdue,
        health: 25,
        due_in: Some("Expired"),
    },
    Vehicle {
        id: "OR-7721",
        status: VehicleStatus::Active,
        health: 100,
        due_in: None,
    },
    Vehicle {
        id: "OR-3309",
        status: VehicleStatus::Warning,
        health: 75,
        due_in: None,
    },
    Vehicle {
        id: "OR-0092",
        status: VehicleStatus::Service,
        health: 25,
        due_in: None,
    },
];

/// Warehouse zones.
pub static WAREHOUSE_ZONES: [WarehouseZone; 4] = [
    WarehouseZone {
        id: "ZONE-A-1",
        name: "Zone A-1",
        category: "Perishables & Bio",
        sku_count: 1204,
        utilization: 82,
        unit: Some("SKU"),
    },
    WarehouseZone {
        id: "ZONE-B-4",
        name: "Zone B-4",
        category: "Retail & Hardware",
        sku_count: 3450,
        utilization: 94,
        unit: Some("SKU"),
    },
    WarehouseZone {
        id: "COLD-STOR",
        name: "Cold Storage A",
        category: "Perishables & Bio",
        sku_count: 210,
        utilization: 45,
        unit: Some("UNIT"),
    },
    WarehouseZone {
        id: "HAZMAT",
        name: "Hazmat",
        category: "Chemicals",
        sku_count: 88,
        utilization: 71,
        unit: Some("UNIT"),
    },
];

/// Operational alerts, newest first.
pub static ALERTS: [Alert; 3] = [
    Alert {
        id: "1",
        severity: AlertSeverity::Critical,
        title: "Critical Delay",
        message: "TRK-882 Engine Malfunction - Route 4",
        time: "08:42",
    },
    Alert {
        id: "2",
        severity: AlertSeverity::Warning,
        title: "Weather Warning",
        message: "Heavy rain expected near Hub-North",
        time: "08:35",
    },
    Alert {
        id: "3",
        severity: AlertSeverity::Info,
        title: "Load Complete",
        message: "WH-Zone A finalized for TRK-910",
        time: "08:20",
    },
];

/// Partner invoice breakdown.
pub static INVOICE_BREAKDOWN: [InvoiceSlice; 3] = [
    InvoiceSlice {
        name: "Paid",
        percent: 75,
        color: "#10b77f",
    },
    InvoiceSlice {
        name: "Pending",
        percent: 15,
        color: "#f59e0b",
    },
    InvoiceSlice {
        name: "Disputed",
        percent: 10,
        color: "#3b82f6",
    },
];
