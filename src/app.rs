use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, patch, post, put},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/check-in", post(handlers::check_in))
        .route("/calendar", get(handlers::calendar))
        .route("/profile", get(handlers::profile))
        .route("/api/profile", get(handlers::profile))
        .route("/api/profile/stats", get(handlers::profile_stats))
        .route(
            "/weekly-plan",
            get(handlers::list_plans).post(handlers::upsert_plan),
        )
        .route("/weekly-plan/:plan_id", put(handlers::update_plan))
        .route(
            "/weekly-plan/:plan_id/items",
            get(handlers::list_items).post(handlers::add_item),
        )
        .route(
            "/weekly-plan/:plan_id/items/:item_id",
            put(handlers::update_item)
                .patch(handlers::update_item)
                .delete(handlers::delete_item),
        )
        .route(
            "/weekly-plan/:plan_id/items/:item_id/toggle",
            patch(handlers::toggle_item),
        )
        .route(
            "/weekly-plan/:plan_id/apply-template",
            post(handlers::apply_template),
        )
        .route("/workout-templates", get(handlers::list_templates))
        .with_state(state)
}
