use axum::Router;
use storage::Database;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::features::{activities, analytics, bins, classes, dashboard, leaderboard, waste};

#[derive(OpenApi)]
#[openapi(
    paths(
        dashboard::handlers::get_dashboard_stats,
        activities::handlers::list_recent_activities,
        leaderboard::handlers::get_leaderboard,
        classes::handlers::list_classes,
        classes::handlers::get_class,
        classes::handlers::create_class,
        waste::handlers::report_waste,
        waste::handlers::list_waste_entries,
        bins::handlers::report_bin,
        bins::handlers::list_bin_reports,
        analytics::handlers::get_waste_trends,
        analytics::handlers::get_carbon_footprint,
    ),
    components(
        schemas(
            storage::dto::waste::RecordWasteRequest,
            storage::dto::bin_report::RecordBinReportRequest,
            storage::dto::class::CreateClassRequest,
            storage::dto::class::LeaderboardEntry,
            storage::dto::stats::TodayStats,
            storage::dto::stats::DashboardStats,
            storage::models::Class,
            storage::models::House,
            storage::models::WasteEntry,
            storage::models::WasteCategory,
            storage::models::BinReport,
            storage::models::BinStatus,
            storage::models::Activity,
            storage::models::ActivityKind,
        )
    ),
    tags(
        (name = "dashboard", description = "Daily waste totals"),
        (name = "activities", description = "Point-changing activity feed"),
        (name = "leaderboard", description = "Class ranking"),
        (name = "classes", description = "Competing classes"),
        (name = "waste", description = "Waste disposal reports"),
        (name = "bins", description = "Bin condition reports"),
        (name = "analytics", description = "All-time waste analytics"),
    )
)]
pub struct ApiDoc;

pub fn api_routes() -> Router<Database> {
    Router::new()
        .nest("/dashboard", dashboard::routes::routes())
        .nest("/activities", activities::routes::routes())
        .nest("/leaderboard", leaderboard::routes::routes())
        .nest("/classes", classes::routes::routes())
        .nest("/waste", waste::routes::routes())
        .nest("/bins", bins::routes::routes())
        .nest("/analytics", analytics::routes::routes())
}

pub fn app(db: Database) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api", api_routes())
        .layer(CorsLayer::permissive())
        .with_state(db)
}
