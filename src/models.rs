use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: u64,
    pub xp: u64,
    pub level: u32,
    pub title: String,
    pub most_active_day: Option<String>,
}

impl User {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            xp: 0,
            level: 1,
            title: crate::checkin::title_for_level(1).to_string(),
            most_active_day: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutLog {
    pub id: u64,
    pub user_id: u64,
    pub date: NaiveDate,
    pub is_rest_day: bool,
    pub workout_text: Option<String>,
    pub xp_gained: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeeklyPlan {
    pub id: u64,
    pub user_id: u64,
    pub day_of_week: String,
    pub workout_text: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeeklyPlanItem {
    pub id: u64,
    pub weekly_plan_id: u64,
    pub exercise_name: String,
    pub estimated_reps: Option<u16>,
    pub sets: Option<u16>,
    pub notes: Option<String>,
    pub position: u32,
    #[serde(default)]
    pub is_completed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutTemplate {
    pub id: u64,
    pub name: String,
    pub category: String,
    pub equipment_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutTemplateItem {
    pub id: u64,
    pub workout_template_id: u64,
    pub exercise_name: String,
    pub estimated_reps: Option<u16>,
    pub sets: Option<u16>,
    pub position: u32,
}

/// Last id handed out per table.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Sequences {
    pub workout_logs: u64,
    pub weekly_plans: u64,
    pub weekly_plan_items: u64,
    pub workout_templates: u64,
    pub workout_template_items: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppData {
    pub users: BTreeMap<u64, User>,
    pub workout_logs: BTreeMap<u64, WorkoutLog>,
    pub weekly_plans: BTreeMap<u64, WeeklyPlan>,
    pub weekly_plan_items: BTreeMap<u64, WeeklyPlanItem>,
    pub workout_templates: BTreeMap<u64, WorkoutTemplate>,
    pub workout_template_items: BTreeMap<u64, WorkoutTemplateItem>,
    pub sequences: Sequences,
}

impl AppData {
    pub fn user_mut(&mut self, id: u64) -> &mut User {
        self.users.entry(id).or_insert_with(|| User::new(id))
    }

    pub fn user(&self, id: u64) -> User {
        self.users.get(&id).cloned().unwrap_or_else(|| User::new(id))
    }

    /// Owner's logs sorted ascending by date.
    pub fn logs_for(&self, user_id: u64) -> Vec<WorkoutLog> {
        let mut logs: Vec<WorkoutLog> = self
            .workout_logs
            .values()
            .filter(|log| log.user_id == user_id)
            .cloned()
            .collect();
        logs.sort_by_key(|log| log.date);
        logs
    }
}

/// Distinguishes an absent field (`None`) from an explicit `null` (`Some(None)`).
/// Pair with `#[serde(default)]`.
pub fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

#[derive(Debug, Deserialize)]
pub struct CheckInRequest {
    pub date: String,
    #[serde(default)]
    pub workout_text: Option<String>,
    pub is_rest_day: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CheckInResponse {
    pub log: WorkoutLog,
    pub user: User,
}

#[derive(Debug, Deserialize)]
pub struct CalendarQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CalendarEntry {
    pub date: NaiveDate,
    pub is_rest_day: bool,
    pub workout_text: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CalendarResponse {
    pub logs: Vec<CalendarEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub xp: u64,
    pub level: u32,
    pub title: String,
    pub most_active_day: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct XpPoint {
    pub date: NaiveDate,
    pub xp: u64,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct LabelCount {
    pub label: String,
    pub count: u64,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct WeekSummary {
    pub week_start: NaiveDate,
    pub workouts: u64,
    pub rest: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResponse {
    pub xp_over_time: Vec<XpPoint>,
    pub weekday_counts: [u64; 7],
    pub label_distribution: Vec<LabelCount>,
    pub weekly_summary: Vec<WeekSummary>,
}

#[derive(Debug, Deserialize)]
pub struct UpsertPlanRequest {
    pub day_of_week: String,
    #[serde(default, deserialize_with = "present")]
    pub workout_text: Option<Option<String>>,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePlanRequest {
    #[serde(default, deserialize_with = "present")]
    pub workout_text: Option<Option<String>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PlanResponse {
    pub plan: WeeklyPlan,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PlansResponse {
    pub plans: Vec<WeeklyPlan>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PlanItemsResponse {
    pub plan: WeeklyPlan,
    pub items: Vec<WeeklyPlanItem>,
}

#[derive(Debug, Deserialize)]
pub struct NewItemRequest {
    pub exercise_name: Option<String>,
    pub estimated_reps: Option<i64>,
    pub sets: Option<i64>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct UpdateItemRequest {
    #[serde(default, deserialize_with = "present")]
    pub exercise_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub estimated_reps: Option<Option<i64>>,
    #[serde(default, deserialize_with = "present")]
    pub sets: Option<Option<i64>>,
    #[serde(default, deserialize_with = "present")]
    pub notes: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub position: Option<Option<i64>>,
    pub is_completed: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct ToggleItemRequest {
    pub is_completed: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ItemResponse {
    pub item: WeeklyPlanItem,
}

#[derive(Debug, Deserialize)]
pub struct TemplateQuery {
    pub category: Option<String>,
    pub equipment: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TemplateWithItems {
    #[serde(flatten)]
    pub template: WorkoutTemplate,
    pub items: Vec<WorkoutTemplateItem>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TemplatesResponse {
    pub templates: Vec<TemplateWithItems>,
}

#[derive(Debug, Deserialize)]
pub struct ApplyTemplateRequest {
    pub template_id: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub service: &'static str,
    pub version: &'static str,
}
