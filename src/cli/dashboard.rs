//! `omniroute dashboard <role>`: a terminal rendition of a role's dashboard.

use super::output::Output;
use crate::types::{parse_role, Result};
use omniroute_domain::dashboard::{
    self, ActivityEntry, CustomerOverview, Dashboard, DispatcherLive, DriverDash, Panel,
    PartnerOverview, StatCard, StopStatus,
};

/// Project `role` (and optionally `tab`) and print it.
pub fn run(role: &str, tab: Option<&str>, output: &Output) -> Result<()> {
    let role = parse_role(role)?;
    let dashboard = dashboard::project(role, tab)?;
    render(&dashboard, output);
    Ok(())
}

/// Print an already projected dashboard.
pub fn render(dashboard: &Dashboard, output: &Output) {
    output.header(&format!("OmniRoute {}", dashboard.portal));
    output.tabs(dashboard.tabs, dashboard.active_tab);

    match &dashboard.panel {
        Panel::CustomerOverview(panel) => customer(panel, output),
        Panel::DriverDash(panel) => driver(panel, output),
        Panel::PartnerOverview(panel) => partner(panel, output),
        Panel::DispatcherLive(panel) => dispatcher(panel, output),
        Panel::NotYetImplemented { heading, message, .. } => {
            output.subheader(heading);
            output.info(message);
        }
    }
    output.newline();
}

fn stats(cards: &[StatCard], output: &Output) {
    for card in cards {
        let value = match card.trend {
            Some(trend) => format!("{} ({})", card.value, trend),
            None => card.value.to_string(),
        };
        output.kv(card.label, &value);
    }
}

fn activity(entries: &[ActivityEntry], output: &Output) {
    output.subheader("Recent Activity");
    for entry in entries {
        let line = match entry.detail {
            Some(detail) => format!("{}  {}: {}", entry.time, entry.title, detail),
            None => format!("{}  {}", entry.time, entry.title),
        };
        output.list_item(&line);
    }
}

fn customer(panel: &CustomerOverview, output: &Output) {
    stats(&panel.stats, output);

    output.subheader("Shipments");
    let widths = [10, 22, 22, 12, 8];
    output.table_header(&["ID", "Origin", "Destination", "Status", "Progress"], &widths);
    for shipment in panel.shipments {
        let progress = format!("{}%", shipment.progress);
        output.table_row(
            &[
                shipment.id,
                shipment.origin,
                shipment.destination,
                shipment.status.as_str(),
                &progress,
            ],
            &widths,
        );
    }

    activity(&panel.activity, output);
}

fn driver(panel: &DriverDash, output: &Output) {
    output.kv("Driver", &format!("{} ({})", panel.driver.name, panel.driver.id));
    output.kv("Status", panel.driver.status);
    output.kv("Route", panel.route);
    output.kv(
        "Load",
        &format!("{} stops, {}", panel.stop_count, panel.total_weight),
    );

    output.subheader("Manifest");
    let widths = [4, 24, 12, 8];
    output.table_header(&["#", "Stop", "Status", "Time"], &widths);
    for stop in &panel.manifest {
        let status = match stop.status {
            StopStatus::Delivered => "Delivered",
            StopStatus::NextStop => "Next stop",
            StopStatus::Queued => "Queued",
        };
        output.table_row(
            &[stop.number, stop.title, status, stop.time.unwrap_or("-")],
            &widths,
        );
    }

    activity(&panel.activity, output);
}

fn partner(panel: &PartnerOverview, output: &Output) {
    stats(&panel.summary, output);

    output.subheader("Fleet Health");
    let widths = [10, 10, 8, 10];
    output.table_header(&["Vehicle", "Status", "Health", "Due"], &widths);
    for vehicle in panel.fleet {
        let health = format!("{}%", vehicle.health);
        output.table_row(
            &[
                vehicle.id,
                vehicle.status.as_str(),
                &health,
                vehicle.due_in.unwrap_or("-"),
            ],
            &widths,
        );
    }

    output.subheader(&format!("Invoices ({})", panel.invoice_total));
    for slice in panel.invoices {
        output.list_item(&format!("{}: {}%", slice.name, slice.percent));
    }

    output.subheader("Transactions");
    for tx in &panel.transactions {
        output.list_item(&format!("{}  {}  {}", tx.id, tx.date, tx.amount));
    }
}

fn dispatcher(panel: &DispatcherLive, output: &Output) {
    stats(&panel.summary, output);

    output.subheader("Warehouse Capacity");
    for zone in &panel.warehouse {
        let line = format!(
            "{} {} ({}): {}%",
            zone.zone.id, zone.zone.name, zone.zone.category, zone.zone.utilization
        );
        if zone.over_capacity {
            output.warning(&line);
        } else {
            output.list_item(&line);
        }
    }

    output.subheader("Critical Feed");
    for alert in panel.alerts {
        output.list_item(&format!(
            "{} [{}] {}: {}",
            alert.time, alert.severity, alert.title, alert.message
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AppError;
    use omniroute_domain::Role;
    use rstest::rstest;

    #[rstest]
    #[case("customer")]
    #[case("Driver")]
    #[case("partner")]
    #[case("DISPATCHER")]
    fn test_every_default_panel_renders(#[case] role: &str) {
        run(role, None, &Output::no_color()).unwrap();
    }

    #[test]
    fn test_stub_tab_renders() {
        let dashboard = dashboard::project(Role::Customer, Some("tracking")).unwrap();
        assert!(!dashboard.panel.is_populated());
        render(&dashboard, &Output::no_color());
    }

    #[test]
    fn test_errors_map_to_app_errors() {
        let output = Output::no_color();
        assert!(matches!(
            run("pilot", None, &output),
            Err(AppError::InvalidInput(_))
        ));
        assert!(matches!(
            run("driver", Some("Payroll"), &output),
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            run("landing", None, &output),
            Err(AppError::InvalidInput(_))
        ));
    }
}
