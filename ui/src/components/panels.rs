//! Dashboard panel renderers, one per populated tab plus the stub

use leptos::prelude::*;
use omniroute_domain::dashboard::{
    ActivityEntry, CustomerOverview, DispatcherLive, DriverDash, ManifestStop, PartnerOverview,
    StatCard, StopStatus,
};
use omniroute_domain::models::{AlertSeverity, ShipmentStatus, VehicleStatus};
use omniroute_domain::Panel;

/// Render whichever panel the dashboard projected
#[component]
pub fn PanelView(panel: Panel) -> impl IntoView {
    match panel {
        Panel::CustomerOverview(content) => view! { <CustomerOverviewPanel content=content /> }.into_any(),
        Panel::DriverDash(content) => view! { <DriverDashPanel content=content /> }.into_any(),
        Panel::PartnerOverview(content) => view! { <PartnerOverviewPanel content=content /> }.into_any(),
        Panel::DispatcherLive(content) => view! { <DispatcherLivePanel content=content /> }.into_any(),
        Panel::NotYetImplemented { heading, message, .. } => {
            view! { <PlaceholderPanel heading=heading message=message /> }.into_any()
        }
    }
}

#[component]
fn StatGrid(stats: Vec<StatCard>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
            {stats.into_iter().map(|card| view! {
                <div class="card p-4">
                    <p class="text-xs uppercase tracking-widest text-slate-500">{card.label}</p>
                    <p class="text-2xl font-bold mt-1">{card.value}</p>
                    {card.trend.map(|trend| view! {
                        <p class="text-xs text-emerald-400 mt-1">{trend}</p>
                    })}
                </div>
            }).collect_view()}
        </div>
    }
}

#[component]
fn ActivityFeed(entries: Vec<ActivityEntry>) -> impl IntoView {
    view! {
        <div class="card p-4">
            <h3 class="section-title">"Recent Activity"</h3>
            <ul class="flex flex-col gap-3 mt-3">
                {entries.into_iter().map(|entry| view! {
                    <li class="flex justify-between gap-4">
                        <div>
                            <p class="text-sm font-medium">{entry.title}</p>
                            {entry.detail.map(|detail| view! {
                                <p class="text-xs text-slate-500">{detail}</p>
                            })}
                        </div>
                        <span class="text-xs text-slate-500 shrink-0">{entry.time}</span>
                    </li>
                }).collect_view()}
            </ul>
        </div>
    }
}

/// Options for a form `<select>`
#[component]
fn Choices(label: &'static str, options: &'static [&'static str]) -> impl IntoView {
    view! {
        <label class="flex flex-col gap-1 text-xs text-slate-400">
            {label}
            <select class="input text-sm">
                {options.iter().map(|option| view! { <option>{*option}</option> }).collect_view()}
            </select>
        </label>
    }
}

fn shipment_badge(status: ShipmentStatus) -> &'static str {
    match status {
        ShipmentStatus::Delivered => "badge badge-success",
        ShipmentStatus::Delayed => "badge badge-error",
        ShipmentStatus::Pending | ShipmentStatus::Processing => "badge badge-muted",
        _ => "badge badge-info",
    }
}

#[component]
fn CustomerOverviewPanel(content: CustomerOverview) -> impl IntoView {
    let on_feedback = |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        tracing::info!("Feedback form submitted");
    };

    view! {
        <div class="flex flex-col gap-6">
            <StatGrid stats=content.stats />

            <div class="card p-4">
                <h3 class="section-title">"Live Tracking"</h3>
                <div class="map-surface mt-3 flex gap-3 flex-wrap">
                    {content.map_markers.into_iter().map(|id| view! {
                        <span class="map-marker">{id}</span>
                    }).collect_view()}
                </div>
            </div>

            <div class="card p-4 overflow-x-auto">
                <h3 class="section-title">"Shipment Status"</h3>
                <table class="data-table mt-3">
                    <thead>
                        <tr><th>"ID"</th><th>"Route"</th><th>"Status"</th><th>"ETA"</th><th>"Weight"</th><th>"Progress"</th></tr>
                    </thead>
                    <tbody>
                        {content.shipments.iter().map(|shipment| view! {
                            <tr>
                                <td class="font-mono">{shipment.id}</td>
                                <td>{format!("{} → {}", shipment.origin, shipment.destination)}</td>
                                <td><span class=shipment_badge(shipment.status)>{shipment.status.as_str()}</span></td>
                                <td>{shipment.eta}</td>
                                <td>{shipment.weight}</td>
                                <td>
                                    <div class="progress-track">
                                        <div class="progress-fill" style=format!("width: {}%", shipment.progress)></div>
                                    </div>
                                </td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            <div class="grid md:grid-cols-2 gap-6">
                <ActivityFeed entries=content.activity />
                <form on:submit=on_feedback class="card p-4 flex flex-col gap-3">
                    <h3 class="section-title">"Service Feedback"</h3>
                    <Choices label="Service area" options=content.feedback_areas />
                    <textarea class="input text-sm" rows="3" placeholder="Tell us how we did"></textarea>
                    <button type="submit" class="btn btn-primary self-start">"Submit"</button>
                </form>
            </div>
        </div>
    }
}

fn stop_class(stop: &ManifestStop) -> &'static str {
    match stop.status {
        StopStatus::Delivered => "manifest-stop opacity-50",
        StopStatus::NextStop => "manifest-stop border-emerald-500",
        StopStatus::Queued => "manifest-stop",
    }
}

#[component]
fn DriverDashPanel(content: DriverDash) -> impl IntoView {
    let on_incident = |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        tracing::info!("Incident report submitted");
    };

    view! {
        <div class="flex flex-col gap-6">
            <div class="card p-4 flex justify-between items-center">
                <div>
                    <p class="text-lg font-semibold">{content.driver.name}</p>
                    <p class="text-xs text-slate-500 font-mono">{content.driver.id}</p>
                </div>
                <span class="badge badge-success">{content.driver.status}</span>
            </div>

            <div class="card p-4">
                <div class="flex justify-between items-baseline">
                    <h3 class="section-title">{format!("Manifest {}", content.route)}</h3>
                    <p class="text-xs text-slate-500">
                        {format!("{} stops · {}", content.stop_count, content.total_weight)}
                    </p>
                </div>
                <ol class="flex flex-col gap-2 mt-3">
                    {content.manifest.iter().map(|stop| view! {
                        <li class=stop_class(stop)>
                            <span class="font-mono text-slate-500">{stop.number}</span>
                            <div class="flex-1">
                                <p class="text-sm font-medium">{stop.title}</p>
                                <p class="text-xs text-slate-500">{stop.address}</p>
                            </div>
                            <div class="text-right text-xs text-slate-400">
                                {stop.time.map(|time| view! { <p>{time}</p> })}
                                {stop.weight.map(|weight| view! { <p>{weight}</p> })}
                            </div>
                        </li>
                    }).collect_view()}
                </ol>
            </div>

            <div class="grid md:grid-cols-2 gap-6">
                <form on:submit=on_incident class="card p-4 flex flex-col gap-3">
                    <h3 class="section-title">"Report Incident"</h3>
                    <Choices label="Category" options=content.incident_categories />
                    <Choices label="Severity" options=content.severity_levels />
                    <button type="submit" class="btn btn-primary self-start">"Report"</button>
                </form>
                <ActivityFeed entries=content.activity />
            </div>
        </div>
    }
}

fn vehicle_badge(status: VehicleStatus) -> &'static str {
    match status {
        VehicleStatus::Good | VehicleStatus::Active => "badge badge-success",
        VehicleStatus::DueSoon | VehicleStatus::Warning => "badge badge-warning",
        VehicleStatus::Overdue => "badge badge-error",
        VehicleStatus::Service => "badge badge-muted",
    }
}

#[component]
fn PartnerOverviewPanel(content: PartnerOverview) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-6">
            <StatGrid stats=content.summary />

            <div class="grid md:grid-cols-2 gap-6">
                <div class="card p-4">
                    <h3 class="section-title">"Fleet Status"</h3>
                    <table class="data-table mt-3">
                        <thead><tr><th>"Vehicle"</th><th>"Status"</th><th>"Health"</th><th>"Due"</th></tr></thead>
                        <tbody>
                            {content.fleet.iter().map(|vehicle| view! {
                                <tr>
                                    <td class="font-mono">{vehicle.id}</td>
                                    <td><span class=vehicle_badge(vehicle.status)>{vehicle.status.as_str()}</span></td>
                                    <td>{format!("{}%", vehicle.health)}</td>
                                    <td>{vehicle.due_in.unwrap_or("-")}</td>
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>

                <div class="card p-4">
                    <h3 class="section-title">"Invoices"</h3>
                    <p class="text-2xl font-bold mt-2">{content.invoice_total}</p>
                    <div class="stacked-bar mt-3">
                        {content.invoices.iter().map(|slice| view! {
                            <div
                                class="h-full"
                                style=format!("width: {}%; background: {}", slice.percent, slice.color)
                                title=slice.name
                            ></div>
                        }).collect_view()}
                    </div>
                    <ul class="mt-3 flex flex-col gap-1 text-xs">
                        {content.invoices.iter().map(|slice| view! {
                            <li class="flex justify-between">
                                <span>{slice.name}</span>
                                <span>{format!("{}%", slice.percent)}</span>
                            </li>
                        }).collect_view()}
                    </ul>
                </div>
            </div>

            <div class="card p-4">
                <h3 class="section-title">"Recent Transactions"</h3>
                <ul class="flex flex-col gap-2 mt-3">
                    {content.transactions.into_iter().map(|tx| view! {
                        <li class="flex justify-between text-sm">
                            <span class="font-mono">{tx.id}</span>
                            <span class="text-slate-500">{tx.date}</span>
                            <span class={if tx.amount.starts_with('-') { "text-red-400" } else { "text-emerald-400" }}>
                                {tx.amount}
                            </span>
                        </li>
                    }).collect_view()}
                </ul>
            </div>
        </div>
    }
}

fn alert_class(severity: AlertSeverity) -> &'static str {
    match severity {
        AlertSeverity::Critical => "alert-row border-red-500",
        AlertSeverity::Warning => "alert-row border-amber-500",
        AlertSeverity::Info => "alert-row border-sky-500",
    }
}

#[component]
fn DispatcherLivePanel(content: DispatcherLive) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-6">
            <StatGrid stats=content.summary />

            <div class="grid md:grid-cols-2 gap-6">
                <div class="card p-4">
                    <h3 class="section-title">"Warehouse Capacity"</h3>
                    <ul class="flex flex-col gap-3 mt-3">
                        {content.warehouse.iter().map(|entry| {
                            let zone = entry.zone;
                            view! {
                                <li>
                                    <div class="flex justify-between text-sm">
                                        <span>{zone.name}</span>
                                        <span class={if entry.over_capacity { "text-red-400 font-semibold" } else { "text-slate-400" }}>
                                            {format!("{}%", zone.utilization)}
                                        </span>
                                    </div>
                                    <p class="text-xs text-slate-500">
                                        {format!("{} · {} {}", zone.category, zone.sku_count, zone.unit.unwrap_or("SKU"))}
                                    </p>
                                    <div class="progress-track mt-1">
                                        <div
                                            class={if entry.over_capacity { "progress-fill bg-red-500" } else { "progress-fill" }}
                                            style=format!("width: {}%", zone.utilization)
                                        ></div>
                                    </div>
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                </div>

                <div class="card p-4">
                    <h3 class="section-title">"Critical Feed"</h3>
                    <ul class="flex flex-col gap-2 mt-3">
                        {content.alerts.iter().map(|alert| view! {
                            <li class=alert_class(alert.severity)>
                                <div class="flex justify-between text-xs">
                                    <span class="font-semibold">{alert.severity.as_str()}</span>
                                    <span class="text-slate-500">{alert.time}</span>
                                </div>
                                <p class="text-sm font-medium">{alert.title}</p>
                                <p class="text-xs text-slate-400">{alert.message}</p>
                            </li>
                        }).collect_view()}
                    </ul>
                </div>
            </div>
        </div>
    }
}

#[component]
fn PlaceholderPanel(heading: String, message: &'static str) -> impl IntoView {
    view! {
        <div class="card p-12 flex flex-col items-center text-center gap-2">
            <h3 class="text-xl font-semibold">{heading}</h3>
            <p class="text-sm text-slate-500 max-w-md">{message}</p>
        </div>
    }
}
