use crate::errors::AppError;
use crate::models::{AppData, CheckInRequest, CheckInResponse, WorkoutLog};
use chrono::NaiveDate;
use tracing::info;

const WORKOUT_XP: u32 = 10;
const LEG_DAY_BONUS: u32 = 5;
const XP_PER_LEVEL: u64 = 100;

pub fn xp_for_day(is_rest_day: bool, workout_text: Option<&str>) -> u32 {
    if is_rest_day {
        return 0;
    }
    let leg_day = workout_text
        .map(|text| text.to_lowercase().contains("leg day"))
        .unwrap_or(false);
    if leg_day {
        WORKOUT_XP + LEG_DAY_BONUS
    } else {
        WORKOUT_XP
    }
}

pub fn level_for_xp(xp: u64) -> u32 {
    u32::try_from(xp / XP_PER_LEVEL)
        .unwrap_or(u32::MAX - 1)
        .saturating_add(1)
}

pub fn title_for_level(level: u32) -> &'static str {
    match level {
        0..=5 => "Novice",
        6..=10 => "Expert",
        _ => "God Mode",
    }
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::invalid_field("date", "date must be formatted as YYYY-MM-DD"))
}

/// Records or overwrites one day for `owner` and moves the owner's XP by the
/// difference against whatever that day was previously worth.
pub fn check_in(
    data: &mut AppData,
    owner: u64,
    request: CheckInRequest,
) -> Result<CheckInResponse, AppError> {
    let date = parse_date(&request.date)?;
    let xp = xp_for_day(request.is_rest_day, request.workout_text.as_deref());

    let existing_id = data
        .workout_logs
        .values()
        .find(|log| log.user_id == owner && log.date == date)
        .map(|log| log.id);

    let delta = match existing_id.and_then(|id| data.workout_logs.get(&id)) {
        Some(existing) => i64::from(xp) - i64::from(existing.xp_gained),
        None => i64::from(xp),
    };

    let id = match existing_id {
        Some(id) => id,
        None => {
            data.sequences.workout_logs += 1;
            data.sequences.workout_logs
        }
    };
    let log = WorkoutLog {
        id,
        user_id: owner,
        date,
        is_rest_day: request.is_rest_day,
        workout_text: request.workout_text,
        xp_gained: xp,
    };
    data.workout_logs.insert(id, log.clone());

    let user = data.user_mut(owner);
    let total = i64::try_from(user.xp)
        .unwrap_or(i64::MAX)
        .saturating_add(delta)
        .max(0);
    user.xp = total as u64;
    user.level = level_for_xp(user.xp);
    user.title = title_for_level(user.level).to_string();
    let user = user.clone();

    info!(owner, %date, xp, delta, total_xp = user.xp, "check-in recorded");
    Ok(CheckInResponse { log, user })
}
