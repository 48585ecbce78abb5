pub mod prompts;
pub mod render;

pub use prompts::{
    prompt_body_metrics, prompt_fitness_goal, prompt_next_action, prompt_plan_name,
    prompt_target_profile, prompt_yes_no, NextAction,
};
pub use render::{display_food_list, display_generated, display_plan, display_targets};
