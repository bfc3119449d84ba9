//! Landing page role cards and per-role dashboards.

use crate::types::{DashboardQuery, DashboardView, Result, RoleCardView};
use axum::{
    extract::{Path, Query},
    Json,
};
use omniroute_domain::{dashboard, role::ROLE_CARDS, Role};

/// List the roles a visitor can pick on the landing page
#[utoipa::path(
    get,
    path = "/api/roles",
    responses(
        (status = 200, description = "Role cards in display order", body = Vec<RoleCardView>)
    ),
    tag = "catalog"
)]
pub async fn list_roles() -> Json<Vec<RoleCardView>> {
    Json(ROLE_CARDS.iter().map(RoleCardView::from).collect())
}

/// Get a role's dashboard, on the requested tab or its default one
#[utoipa::path(
    get,
    path = "/api/dashboards/{role}",
    params(
        ("role" = String, Path, description = "customer, driver, partner or dispatcher"),
        DashboardQuery
    ),
    responses(
        (status = 200, description = "Dashboard with its active panel", body = DashboardView),
        (status = 400, description = "The role has no dashboard"),
        (status = 404, description = "Unknown role or tab")
    ),
    tag = "catalog"
)]
pub async fn get_dashboard(
    Path(role): Path<String>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<DashboardView>> {
    let role: Role = role.parse()?;
    let dashboard = dashboard::project(role, query.tab.as_deref())?;
    Ok(Json(dashboard.into()))
}
