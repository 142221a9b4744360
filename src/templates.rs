use crate::errors::AppError;
use crate::models::{
    AppData, TemplateQuery, TemplateWithItems, WeeklyPlanItem, WorkoutTemplate,
    WorkoutTemplateItem,
};
use crate::plans::authorize_plan;
use crate::seed::CATALOGUE;
use tracing::info;

pub fn template_items(data: &AppData, template_id: u64) -> Vec<WorkoutTemplateItem> {
    let mut items: Vec<WorkoutTemplateItem> = data
        .workout_template_items
        .values()
        .filter(|item| item.workout_template_id == template_id)
        .cloned()
        .collect();
    items.sort_by_key(|item| (item.position, item.id));
    items
}

/// Templates matching the optional filters, by name, each with its items.
pub fn list_templates(data: &AppData, query: &TemplateQuery) -> Vec<TemplateWithItems> {
    let category = query.category.as_deref().filter(|c| !c.is_empty());
    let equipment = query.equipment.as_deref().filter(|e| !e.is_empty());

    let mut templates: Vec<&WorkoutTemplate> = data
        .workout_templates
        .values()
        .filter(|t| category.is_none_or(|c| t.category == c))
        .filter(|t| equipment.is_none_or(|e| t.equipment_type == e))
        .collect();
    templates.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));

    templates
        .into_iter()
        .map(|template| TemplateWithItems {
            items: template_items(data, template.id),
            template: template.clone(),
        })
        .collect()
}

/// Replaces every item of the plan with copies of the template's items,
/// positioned 1..N in template order.
pub fn apply_template(
    data: &mut AppData,
    owner: u64,
    plan_id: u64,
    template_id: Option<u64>,
) -> Result<usize, AppError> {
    authorize_plan(data, owner, plan_id)?;
    let template_id = template_id
        .ok_or_else(|| AppError::invalid_field("template_id", "template_id is required"))?;
    if !data.workout_templates.contains_key(&template_id) {
        return Err(AppError::not_found("workout template"));
    }
    let source = template_items(data, template_id);

    let removed = data.weekly_plan_items.len();
    data.weekly_plan_items
        .retain(|_, item| item.weekly_plan_id != plan_id);
    let removed = removed - data.weekly_plan_items.len();

    for (idx, template_item) in source.iter().enumerate() {
        data.sequences.weekly_plan_items += 1;
        let item = WeeklyPlanItem {
            id: data.sequences.weekly_plan_items,
            weekly_plan_id: plan_id,
            exercise_name: template_item.exercise_name.clone(),
            estimated_reps: template_item.estimated_reps,
            sets: template_item.sets,
            notes: None,
            position: idx as u32 + 1,
            is_completed: false,
        };
        data.weekly_plan_items.insert(item.id, item);
    }

    info!(
        owner,
        plan_id,
        template_id,
        removed,
        created = source.len(),
        "template applied"
    );
    Ok(source.len())
}

/// Inserts the built-in catalogue when no templates exist. Returns how many
/// templates were added.
pub fn seed_templates(data: &mut AppData) -> usize {
    if !data.workout_templates.is_empty() {
        return 0;
    }
    for entry in CATALOGUE {
        data.sequences.workout_templates += 1;
        let template_id = data.sequences.workout_templates;
        data.workout_templates.insert(
            template_id,
            WorkoutTemplate {
                id: template_id,
                name: entry.name.to_string(),
                category: entry.category.to_string(),
                equipment_type: entry.equipment_type.to_string(),
            },
        );
        for (idx, &(exercise_name, reps, sets)) in entry.items.iter().enumerate() {
            data.sequences.workout_template_items += 1;
            let id = data.sequences.workout_template_items;
            data.workout_template_items.insert(
                id,
                WorkoutTemplateItem {
                    id,
                    workout_template_id: template_id,
                    exercise_name: exercise_name.to_string(),
                    estimated_reps: Some(reps),
                    sets: Some(sets),
                    position: idx as u32 + 1,
                },
            );
        }
    }
    CATALOGUE.len()
}
