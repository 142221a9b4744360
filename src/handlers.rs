use crate::auth::Owner;
use crate::checkin;
use crate::errors::AppError;
use crate::models::{
    ApplyTemplateRequest, CalendarEntry, CalendarQuery, CalendarResponse, CheckInRequest,
    CheckInResponse, HealthResponse, ItemResponse, NewItemRequest, PlanItemsResponse,
    PlanResponse, PlansResponse, ProfileResponse, StatsResponse, StatusResponse,
    TemplateQuery, TemplatesResponse, ToggleItemRequest, UpdateItemRequest, UpdatePlanRequest,
    UpsertPlanRequest,
};
use crate::plans;
use crate::state::AppState;
use crate::stats::{build_stats, reconcile_most_active_day};
use crate::templates;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use chrono::{Datelike, Local, NaiveDate, Utc};
use tracing::info;

type JsonBody<T> = Result<Json<T>, JsonRejection>;
type PathParams<T> = Result<Path<T>, PathRejection>;
type QueryParams<T> = Result<Query<T>, QueryRejection>;

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now().to_rfc3339(),
        service: "Buhat-Buddy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub async fn check_in(
    State(state): State<AppState>,
    Owner(owner): Owner,
    payload: JsonBody<CheckInRequest>,
) -> Result<Json<CheckInResponse>, AppError> {
    let Json(payload) = payload?;
    let response = state
        .write(|data| checkin::check_in(data, owner, payload))
        .await?;
    Ok(Json(response))
}

pub async fn calendar(
    State(state): State<AppState>,
    Owner(owner): Owner,
    query: QueryParams<CalendarQuery>,
) -> Result<Json<CalendarResponse>, AppError> {
    let Query(query) = query?;
    let today = Local::now().date_naive();
    let first = month_start(
        query.year.unwrap_or(today.year()),
        query.month.unwrap_or(today.month()),
    )?;

    let logs: Vec<CalendarEntry> = state
        .read(|data| {
            data.logs_for(owner)
                .into_iter()
                .filter(|log| log.date.year() == first.year() && log.date.month() == first.month())
                .map(|log| CalendarEntry {
                    date: log.date,
                    is_rest_day: log.is_rest_day,
                    workout_text: log.workout_text,
                })
                .collect()
        })
        .await;

    Ok(Json(CalendarResponse { logs }))
}

/// First day of the requested calendar month.
fn month_start(year: i32, month: u32) -> Result<NaiveDate, AppError> {
    if !(1..=12).contains(&month) {
        return Err(AppError::invalid_field("month", "month must be between 1 and 12"));
    }
    NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| AppError::invalid_field("year", "year is out of range"))
}

/// Profile summary. Also reconciles the cached most-active day, writing only
/// when it actually changed.
pub async fn profile(
    State(state): State<AppState>,
    Owner(owner): Owner,
) -> Result<Json<ProfileResponse>, AppError> {
    let user = state
        .write_if_changed(|data| {
            let logs = data.logs_for(owner);
            let user = data.user_mut(owner);
            let changed = reconcile_most_active_day(user, &logs);
            if changed {
                info!(owner, day = ?user.most_active_day, "most active day updated");
            }
            Ok((user.clone(), changed))
        })
        .await?;

    Ok(Json(ProfileResponse {
        xp: user.xp,
        level: user.level,
        title: user.title,
        most_active_day: user.most_active_day,
    }))
}

pub async fn profile_stats(
    State(state): State<AppState>,
    Owner(owner): Owner,
) -> Json<StatsResponse> {
    let logs = state.read(|data| data.logs_for(owner)).await;
    Json(build_stats(&logs))
}

pub async fn list_plans(
    State(state): State<AppState>,
    Owner(owner): Owner,
) -> Json<PlansResponse> {
    let plans = state.read(|data| plans::list_plans(data, owner)).await;
    Json(PlansResponse { plans })
}

pub async fn upsert_plan(
    State(state): State<AppState>,
    Owner(owner): Owner,
    payload: JsonBody<UpsertPlanRequest>,
) -> Result<Json<PlanResponse>, AppError> {
    let Json(payload) = payload?;
    let plan = state
        .write(|data| plans::upsert_plan(data, owner, payload))
        .await?;
    Ok(Json(PlanResponse { plan }))
}

pub async fn update_plan(
    State(state): State<AppState>,
    Owner(owner): Owner,
    plan_id: PathParams<u64>,
    payload: JsonBody<UpdatePlanRequest>,
) -> Result<Json<PlanResponse>, AppError> {
    let Path(plan_id) = plan_id?;
    let Json(payload) = payload?;
    let plan = state
        .write(|data| plans::update_plan(data, owner, plan_id, payload))
        .await?;
    Ok(Json(PlanResponse { plan }))
}

pub async fn list_items(
    State(state): State<AppState>,
    Owner(owner): Owner,
    plan_id: PathParams<u64>,
) -> Result<Json<PlanItemsResponse>, AppError> {
    let Path(plan_id) = plan_id?;
    let response = state
        .read(|data| {
            let plan = plans::authorize_plan(data, owner, plan_id)?.clone();
            Ok::<_, AppError>(PlanItemsResponse {
                plan,
                items: plans::plan_items(data, plan_id),
            })
        })
        .await?;
    Ok(Json(response))
}

pub async fn add_item(
    State(state): State<AppState>,
    Owner(owner): Owner,
    plan_id: PathParams<u64>,
    payload: JsonBody<NewItemRequest>,
) -> Result<Json<ItemResponse>, AppError> {
    let Path(plan_id) = plan_id?;
    let Json(payload) = payload?;
    let item = state
        .write(|data| plans::add_item(data, owner, plan_id, payload))
        .await?;
    Ok(Json(ItemResponse { item }))
}

pub async fn update_item(
    State(state): State<AppState>,
    Owner(owner): Owner,
    ids: PathParams<(u64, u64)>,
    payload: JsonBody<UpdateItemRequest>,
) -> Result<Json<ItemResponse>, AppError> {
    let Path((plan_id, item_id)) = ids?;
    let Json(payload) = payload?;
    let item = state
        .write(|data| plans::update_item(data, owner, plan_id, item_id, payload))
        .await?;
    Ok(Json(ItemResponse { item }))
}

pub async fn toggle_item(
    State(state): State<AppState>,
    Owner(owner): Owner,
    ids: PathParams<(u64, u64)>,
    payload: JsonBody<ToggleItemRequest>,
) -> Result<Json<ItemResponse>, AppError> {
    let Path((plan_id, item_id)) = ids?;
    let Json(payload) = payload?;
    let item = state
        .write(|data| {
            plans::set_item_completed(data, owner, plan_id, item_id, payload.is_completed)
        })
        .await?;
    Ok(Json(ItemResponse { item }))
}

pub async fn delete_item(
    State(state): State<AppState>,
    Owner(owner): Owner,
    ids: PathParams<(u64, u64)>,
) -> Result<Json<StatusResponse>, AppError> {
    let Path((plan_id, item_id)) = ids?;
    state
        .write(|data| plans::delete_item(data, owner, plan_id, item_id))
        .await?;
    Ok(Json(StatusResponse::ok()))
}

pub async fn list_templates(
    State(state): State<AppState>,
    _owner: Owner,
    query: QueryParams<TemplateQuery>,
) -> Result<Json<TemplatesResponse>, AppError> {
    let Query(query) = query?;
    let templates = state
        .read(|data| templates::list_templates(data, &query))
        .await;
    Ok(Json(TemplatesResponse { templates }))
}

pub async fn apply_template(
    State(state): State<AppState>,
    Owner(owner): Owner,
    plan_id: PathParams<u64>,
    payload: JsonBody<ApplyTemplateRequest>,
) -> Result<Json<StatusResponse>, AppError> {
    let Path(plan_id) = plan_id?;
    let Json(payload) = payload?;
    state
        .write(|data| templates::apply_template(data, owner, plan_id, payload.template_id))
        .await?;
    Ok(Json(StatusResponse::ok()))
}
