use crate::errors::AppError;
use crate::models::{
    AppData, NewItemRequest, UpdateItemRequest, UpdatePlanRequest, UpsertPlanRequest, WeeklyPlan,
    WeeklyPlanItem,
};
use crate::stats::weekday_name;
use chrono::Weekday;
use tracing::{info, warn};

const MAX_NAME_LEN: usize = 255;
const MAX_NOTES_LEN: usize = 1000;
const MAX_COUNT: i64 = 1000;
const MAX_POSITION: i64 = 10_000;

/// Canonical weekday name for `raw` ("monday", "Mon" -> "Monday").
pub fn parse_day_of_week(raw: &str) -> Result<&'static str, AppError> {
    raw.trim()
        .parse::<Weekday>()
        .map(weekday_name)
        .map_err(|_| AppError::invalid_field("day_of_week", "day_of_week must be a weekday name"))
}

/// The one ownership check every plan, item and template-apply path goes through.
pub fn authorize_plan(data: &AppData, owner: u64, plan_id: u64) -> Result<&WeeklyPlan, AppError> {
    let plan = data
        .weekly_plans
        .get(&plan_id)
        .ok_or_else(|| AppError::not_found("weekly plan"))?;
    if plan.user_id != owner {
        warn!(owner, plan_id, "weekly plan belongs to another user");
        return Err(AppError::forbidden());
    }
    Ok(plan)
}

/// Resolves an item through its parent plan. An item owned by someone else is
/// forbidden; an item of the caller's that sits under another plan is not found.
pub fn authorize_item(
    data: &AppData,
    owner: u64,
    plan_id: u64,
    item_id: u64,
) -> Result<&WeeklyPlanItem, AppError> {
    authorize_plan(data, owner, plan_id)?;
    let item = data
        .weekly_plan_items
        .get(&item_id)
        .ok_or_else(|| AppError::not_found("plan item"))?;
    if item.weekly_plan_id != plan_id {
        authorize_plan(data, owner, item.weekly_plan_id)?;
        return Err(AppError::not_found("plan item"));
    }
    Ok(item)
}

pub fn list_plans(data: &AppData, owner: u64) -> Vec<WeeklyPlan> {
    data.weekly_plans
        .values()
        .filter(|plan| plan.user_id == owner)
        .cloned()
        .collect()
}

pub fn upsert_plan(
    data: &mut AppData,
    owner: u64,
    request: UpsertPlanRequest,
) -> Result<WeeklyPlan, AppError> {
    let day = parse_day_of_week(&request.day_of_week)?;
    let existing = data
        .weekly_plans
        .values_mut()
        .find(|plan| plan.user_id == owner && plan.day_of_week == day);

    let plan = match existing {
        Some(plan) => {
            if let Some(text) = request.workout_text {
                plan.workout_text = text;
            }
            plan.clone()
        }
        None => {
            data.sequences.weekly_plans += 1;
            let plan = WeeklyPlan {
                id: data.sequences.weekly_plans,
                user_id: owner,
                day_of_week: day.to_string(),
                workout_text: request.workout_text.flatten(),
            };
            data.weekly_plans.insert(plan.id, plan.clone());
            plan
        }
    };

    info!(owner, plan_id = plan.id, day, "weekly plan upserted");
    Ok(plan)
}

pub fn update_plan(
    data: &mut AppData,
    owner: u64,
    plan_id: u64,
    request: UpdatePlanRequest,
) -> Result<WeeklyPlan, AppError> {
    authorize_plan(data, owner, plan_id)?;
    let plan = data
        .weekly_plans
        .get_mut(&plan_id)
        .ok_or_else(|| AppError::not_found("weekly plan"))?;
    if let Some(text) = request.workout_text {
        plan.workout_text = text;
    }
    info!(owner, plan_id, "weekly plan updated");
    Ok(plan.clone())
}

/// Items of `plan_id` in position order.
pub fn plan_items(data: &AppData, plan_id: u64) -> Vec<WeeklyPlanItem> {
    let mut items: Vec<WeeklyPlanItem> = data
        .weekly_plan_items
        .values()
        .filter(|item| item.weekly_plan_id == plan_id)
        .cloned()
        .collect();
    items.sort_by_key(|item| (item.position, item.id));
    items
}

pub fn add_item(
    data: &mut AppData,
    owner: u64,
    plan_id: u64,
    request: NewItemRequest,
) -> Result<WeeklyPlanItem, AppError> {
    authorize_plan(data, owner, plan_id)?;

    let exercise_name = request
        .exercise_name
        .ok_or_else(|| AppError::invalid_field("exercise_name", "exercise_name is required"))
        .and_then(validate_name)?;
    let estimated_reps = validate_count("estimated_reps", request.estimated_reps)?;
    let sets = validate_count("sets", request.sets)?;
    let notes = validate_notes(request.notes)?;

    let position = data
        .weekly_plan_items
        .values()
        .filter(|item| item.weekly_plan_id == plan_id)
        .map(|item| item.position)
        .max()
        .unwrap_or(0)
        + 1;

    data.sequences.weekly_plan_items += 1;
    let item = WeeklyPlanItem {
        id: data.sequences.weekly_plan_items,
        weekly_plan_id: plan_id,
        exercise_name,
        estimated_reps,
        sets,
        notes,
        position,
        is_completed: false,
    };
    data.weekly_plan_items.insert(item.id, item.clone());

    info!(owner, plan_id, item_id = item.id, position, "plan item added");
    Ok(item)
}

pub fn update_item(
    data: &mut AppData,
    owner: u64,
    plan_id: u64,
    item_id: u64,
    request: UpdateItemRequest,
) -> Result<WeeklyPlanItem, AppError> {
    authorize_item(data, owner, plan_id, item_id)?;

    // Validate everything before touching the row.
    let exercise_name = non_null("exercise_name", request.exercise_name)?
        .map(validate_name)
        .transpose()?;
    let estimated_reps = request
        .estimated_reps
        .map(|value| validate_count("estimated_reps", value))
        .transpose()?;
    let sets = request
        .sets
        .map(|value| validate_count("sets", value))
        .transpose()?;
    let notes = request.notes.map(validate_notes).transpose()?;
    let position = non_null("position", request.position)?
        .map(validate_position)
        .transpose()?;

    let item = data
        .weekly_plan_items
        .get_mut(&item_id)
        .ok_or_else(|| AppError::not_found("plan item"))?;
    if let Some(name) = exercise_name {
        item.exercise_name = name;
    }
    if let Some(reps) = estimated_reps {
        item.estimated_reps = reps;
    }
    if let Some(sets) = sets {
        item.sets = sets;
    }
    if let Some(notes) = notes {
        item.notes = notes;
    }
    if let Some(position) = position {
        item.position = position;
    }
    if let Some(done) = request.is_completed {
        item.is_completed = done;
    }

    info!(owner, plan_id, item_id, "plan item updated");
    Ok(item.clone())
}

pub fn set_item_completed(
    data: &mut AppData,
    owner: u64,
    plan_id: u64,
    item_id: u64,
    completed: bool,
) -> Result<WeeklyPlanItem, AppError> {
    update_item(
        data,
        owner,
        plan_id,
        item_id,
        UpdateItemRequest {
            is_completed: Some(completed),
            ..UpdateItemRequest::default()
        },
    )
}

pub fn delete_item(
    data: &mut AppData,
    owner: u64,
    plan_id: u64,
    item_id: u64,
) -> Result<(), AppError> {
    authorize_item(data, owner, plan_id, item_id)?;
    data.weekly_plan_items.remove(&item_id);
    info!(owner, plan_id, item_id, "plan item deleted");
    Ok(())
}

/// Fields that may be omitted from a partial update but never set to null.
fn non_null<T>(field: &'static str, value: Option<Option<T>>) -> Result<Option<T>, AppError> {
    match value {
        Some(None) => Err(AppError::invalid_field(
            field,
            format!("{field} may not be null"),
        )),
        Some(Some(value)) => Ok(Some(value)),
        None => Ok(None),
    }
}

fn validate_name(name: String) -> Result<String, AppError> {
    if name.trim().is_empty() {
        return Err(AppError::invalid_field(
            "exercise_name",
            "exercise_name is required",
        ));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(AppError::invalid_field(
            "exercise_name",
            format!("exercise_name may not exceed {MAX_NAME_LEN} characters"),
        ));
    }
    Ok(name)
}

fn validate_count(field: &'static str, value: Option<i64>) -> Result<Option<u16>, AppError> {
    match value {
        None => Ok(None),
        Some(v) if (0..=MAX_COUNT).contains(&v) => Ok(Some(v as u16)),
        Some(_) => Err(AppError::invalid_field(
            field,
            format!("{field} must be between 0 and {MAX_COUNT}"),
        )),
    }
}

fn validate_notes(notes: Option<String>) -> Result<Option<String>, AppError> {
    match notes {
        Some(text) if text.chars().count() > MAX_NOTES_LEN => Err(AppError::invalid_field(
            "notes",
            format!("notes may not exceed {MAX_NOTES_LEN} characters"),
        )),
        other => Ok(other),
    }
}

fn validate_position(position: i64) -> Result<u32, AppError> {
    if (0..=MAX_POSITION).contains(&position) {
        Ok(position as u32)
    } else {
        Err(AppError::invalid_field(
            "position",
            format!("position must be between 0 and {MAX_POSITION}"),
        ))
    }
}
