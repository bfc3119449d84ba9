//! Per-role dashboard projections.
//!
//! Every dashboard is a pure function of the role, the selected tab and the
//! static [`catalog`](crate::catalog). Only the first tab of each role has
//! real content; the others project to [`Panel::NotYetImplemented`].

use crate::catalog::{ALERTS, INVOICE_BREAKDOWN, SHIPMENTS, VEHICLES, WAREHOUSE_ZONES};
use crate::error::{DomainError, Result};
use crate::models::{Alert, InvoiceSlice, Shipment, Vehicle, WarehouseZone};
use crate::role::Role;
use serde::Serialize;

const CUSTOMER_TABS: &[&str] = &["Overview", "Tracking", "Shipments", "Settings"];
const DRIVER_TABS: &[&str] = &["Dash", "Route", "History"];
const PARTNER_TABS: &[&str] = &["Overview", "Fleet", "Invoices", "Settings"];
const DISPATCHER_TABS: &[&str] = &["Live", "Map", "Stock", "Ops"];

/// A rendered dashboard: navigation plus the active panel.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    /// Dashboard owner.
    pub role: Role,
    /// Portal label shown in the header.
    pub portal: &'static str,
    /// Tab names, default first.
    pub tabs: &'static [&'static str],
    /// Tab being displayed.
    pub active_tab: &'static str,
    /// Content for the active tab.
    pub panel: Panel,
}

/// Content of one dashboard tab.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Panel {
    /// Customer "Overview" tab.
    CustomerOverview(CustomerOverview),
    /// Driver "Dash" tab.
    DriverDash(DriverDash),
    /// Partner "Overview" tab.
    PartnerOverview(PartnerOverview),
    /// Dispatcher "Live" tab.
    DispatcherLive(DispatcherLive),
    /// Any other tab: an explicit stub.
    NotYetImplemented {
        /// Tab name.
        tab: &'static str,
        /// Panel heading, e.g. "Tracking View".
        heading: String,
        /// Role-specific explanation.
        message: &'static str,
    },
}

impl Panel {
    /// Whether this panel carries real content.
    pub fn is_populated(&self) -> bool {
        !matches!(self, Panel::NotYetImplemented { .. })
    }
}

/// Headline figure card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatCard {
    /// Caption.
    pub label: &'static str,
    /// Figure as displayed.
    pub value: &'static str,
    /// Change indicator, when shown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<&'static str>,
}

/// Entry in a recent-activity list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActivityEntry {
    /// What happened.
    pub title: &'static str,
    /// Supporting detail.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<&'static str>,
    /// Relative or clock time as displayed.
    pub time: &'static str,
}

/// Customer overview content.
#[derive(Debug, Clone, Serialize)]
pub struct CustomerOverview {
    /// Headline figures.
    pub stats: Vec<StatCard>,
    /// Shipments pinned on the live tracking map.
    pub map_markers: Vec<&'static str>,
    /// Shipment status table.
    pub shipments: &'static [Shipment],
    /// Recent activity feed.
    pub activity: Vec<ActivityEntry>,
    /// Feedback form service areas.
    pub feedback_areas: &'static [&'static str],
}

/// Progress of a stop on the driver's manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopStatus {
    /// Already delivered.
    Delivered,
    /// Current destination.
    NextStop,
    /// Later on the route.
    Queued,
}

/// One stop on the driver's manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ManifestStop {
    /// Stop number as displayed ("01").
    pub number: &'static str,
    /// Site name.
    pub title: &'static str,
    /// Street address.
    pub address: &'static str,
    /// Progress.
    pub status: StopStatus,
    /// Scheduled or actual time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<&'static str>,
    /// Load for the stop.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<&'static str>,
}

/// The driver signed in to the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DriverProfile {
    /// Full name.
    pub name: &'static str,
    /// Employee identifier.
    pub id: &'static str,
    /// Duty status.
    pub status: &'static str,
}

/// Driver dash content.
#[derive(Debug, Clone, Serialize)]
pub struct DriverDash {
    /// Driver on shift.
    pub driver: DriverProfile,
    /// Route identifier.
    pub route: &'static str,
    /// Number of stops on the route.
    pub stop_count: u32,
    /// Total load as displayed.
    pub total_weight: &'static str,
    /// Today's manifest.
    pub manifest: Vec<ManifestStop>,
    /// Incident form categories.
    pub incident_categories: &'static [&'static str],
    /// Incident form severity levels.
    pub severity_levels: &'static [&'static str],
    /// Recent activity feed.
    pub activity: Vec<ActivityEntry>,
}

/// Settled or pending partner transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Transaction {
    /// Transaction identifier.
    pub id: &'static str,
    /// Date as displayed.
    pub date: &'static str,
    /// Signed amount as displayed.
    pub amount: &'static str,
}

/// Partner overview content.
#[derive(Debug, Clone, Serialize)]
pub struct PartnerOverview {
    /// Headline figures.
    pub summary: Vec<StatCard>,
    /// Fleet status table.
    pub fleet: &'static [Vehicle],
    /// Invoice breakdown chart.
    pub invoices: &'static [InvoiceSlice],
    /// Invoice total as displayed.
    pub invoice_total: &'static str,
    /// Recent transactions.
    pub transactions: Vec<Transaction>,
}

/// Warehouse zone with its capacity flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ZoneCapacity {
    /// The zone.
    #[serde(flatten)]
    pub zone: &'static WarehouseZone,
    /// Utilization above the warning threshold.
    pub over_capacity: bool,
}

/// Dispatcher live content.
#[derive(Debug, Clone, Serialize)]
pub struct DispatcherLive {
    /// Headline figures.
    pub summary: Vec<StatCard>,
    /// Warehouse capacity list.
    pub warehouse: Vec<ZoneCapacity>,
    /// Critical feed.
    pub alerts: &'static [Alert],
}

/// Tab names for a role, default first.
pub fn tabs(role: Role) -> Result<&'static [&'static str]> {
    match role {
        Role::Customer => Ok(CUSTOMER_TABS),
        Role::Driver => Ok(DRIVER_TABS),
        Role::Partner => Ok(PARTNER_TABS),
        Role::Dispatcher => Ok(DISPATCHER_TABS),
        Role::Landing => Err(DomainError::NoDashboard(role)),
    }
}

/// The populated tab a dashboard opens on.
pub fn default_tab(role: Role) -> Result<&'static str> {
    Ok(tabs(role)?[0])
}

/// Project the dashboard for `role`, on `tab` or the default tab.
///
/// Tab names match case-insensitively.
pub fn project(role: Role, tab: Option<&str>) -> Result<Dashboard> {
    let tabs = tabs(role)?;
    let active_tab = match tab {
        None => tabs[0],
        Some(requested) => tabs
            .iter()
            .copied()
            .find(|t| t.eq_ignore_ascii_case(requested.trim()))
            .ok_or_else(|| DomainError::UnknownTab {
                role,
                tab: requested.to_string(),
            })?,
    };

    let panel = if active_tab == tabs[0] {
        populated_panel(role)
    } else {
        placeholder(role, active_tab)
    };

    Ok(Dashboard {
        role,
        portal: portal_label(role),
        tabs,
        active_tab,
        panel,
    })
}

fn portal_label(role: Role) -> &'static str {
    match role {
        Role::Customer => "Customer Portal",
        Role::Driver => "DRV-v4.0",
        Role::Partner => "Partner Portal",
        Role::Dispatcher => "Dispatcher Command",
        Role::Landing => "OmniRoute",
    }
}

fn placeholder(role: Role, tab: &'static str) -> Panel {
    let (suffix, message) = match role {
        Role::Driver => (
            "Interface",
            "This module is currently being optimized for driver performance.",
        ),
        Role::Partner => (
            "View",
            "This section is currently being integrated with the partner management system.",
        ),
        Role::Dispatcher => (
            "View",
            "This section is currently being integrated with the dispatcher command system.",
        ),
        Role::Customer | Role::Landing => (
            "View",
            "This section is currently being integrated with the real-time data stream.",
        ),
    };

    Panel::NotYetImplemented {
        tab,
        heading: format!("{} {}", tab, suffix),
        message,
    }
}

fn populated_panel(role: Role) -> Panel {
    match role {
        Role::Driver => Panel::DriverDash(driver_dash()),
        Role::Partner => Panel::PartnerOverview(partner_overview()),
        Role::Dispatcher => Panel::DispatcherLive(dispatcher_live()),
        // `tabs` already rejected landing
        Role::Customer | Role::Landing => Panel::CustomerOverview(customer_overview()),
    }
}

fn customer_overview() -> CustomerOverview {
    CustomerOverview {
        stats: vec![
            stat("In Transit", "12", None),
            stat("Delivered", "148", None),
            stat("Alerts", "02", None),
            stat("Credits", "$4.2k", None),
        ],
        map_markers: vec![SHIPMENTS[0].id, SHIPMENTS[1].id],
        shipments: &SHIPMENTS[0..3],
        activity: vec![
            ActivityEntry {
                title: "Shipment Delivered",
                detail: Some("OR-LX-1009 arrived at Terminal A"),
                time: "2m ago",
            },
            ActivityEntry {
                title: "New Tracking Entry",
                detail: Some("Vehicle 8821 assigned to route"),
                time: "14m ago",
            },
            ActivityEntry {
                title: "Address Updated",
                detail: Some("Contact info changed for Client #12"),
                time: "1h ago",
            },
        ],
        feedback_areas: &[
            "Logistics Quality",
            "Platform UI/UX",
            "Driver Performance",
            "Billing & Claims",
        ],
    }
}

fn driver_dash() -> DriverDash {
    DriverDash {
        driver: DriverProfile {
            name: "Marcus Thorne",
            id: "OR-9928",
            status: "On Duty",
        },
        route: "RL-402",
        stop_count: 14,
        total_weight: "1,240.50 KG",
        manifest: vec![
            ManifestStop {
                number: "01",
                title: "Regional Distribution Hub",
                address: "124 Logistics Way, Industrial Park West",
                status: StopStatus::Delivered,
                time: Some("08:30 AM"),
                weight: Some("450.50 KG"),
            },
            ManifestStop {
                number: "02",
                title: "Quantum Retail Plaza",
                address: "890 Merchant Blvd, Suite 4, Downtown",
                status: StopStatus::NextStop,
                time: Some("14:30 PM"),
                weight: Some("790.00 KG"),
            },
            ManifestStop {
                number: "03",
                title: "Harbor Logistics Yard",
                address: "Pier 14, Container Terminal",
                status: StopStatus::Queued,
                time: None,
                weight: None,
            },
        ],
        incident_categories: &[
            "Mechanical Failure",
            "Traffic / Route Obstruction",
            "Cargo Integrity Issue",
            "Medical Emergency",
        ],
        severity_levels: &["LOW", "MEDIUM", "CRITICAL"],
        activity: vec![
            ActivityEntry {
                title: "Stop #1 Delivered",
                detail: None,
                time: "08:34 AM",
            },
            ActivityEntry {
                title: "Shift Started",
                detail: None,
                time: "07:00 AM",
            },
        ],
    }
}

fn partner_overview() -> PartnerOverview {
    PartnerOverview {
        summary: vec![
            stat("Active Fleet", "42", Some("+2")),
            stat("Attendance", "118", Some("98%")),
            stat("Pending Inv", "12.4K", None),
            stat("Service Due", "08", Some("3")),
        ],
        fleet: &VEHICLES[3..6],
        invoices: &INVOICE_BREAKDOWN,
        invoice_total: "$48k",
        transactions: vec![
            Transaction {
                id: "TXN-9982",
                date: "Mar 24, 2024",
                amount: "+$1,240.00",
            },
            Transaction {
                id: "TXN-9971",
                date: "Mar 23, 2024",
                amount: "+$3,450.50",
            },
        ],
    }
}

fn dispatcher_live() -> DispatcherLive {
    DispatcherLive {
        summary: vec![
            stat("Vehicles in Field", "142", Some("+5.2%")),
            stat("Open Alerts", "12", Some("-2%")),
        ],
        warehouse: WAREHOUSE_ZONES[0..2]
            .iter()
            .map(|zone| ZoneCapacity {
                zone,
                over_capacity: zone.is_over_capacity(),
            })
            .collect(),
        alerts: &ALERTS,
    }
}

fn stat(label: &'static str, value: &'static str, trend: Option<&'static str>) -> StatCard {
    StatCard {
        label,
        value,
        trend,
    }
}
