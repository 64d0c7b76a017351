mod prompts;
mod render;

pub use prompts::{
    collect_plan_request, prompt_days, prompt_people_count, prompt_preferences,
    prompt_target_calories, prompt_yes_no,
};
pub use render::{display_plan, display_tag_counts};
