pub mod prompts;
pub mod render;

pub use prompts::{prompt_conditions, prompt_food, prompt_meal_slot, prompt_yes_no};
pub use render::{
    display_condition_advice, display_conditions, display_food_list, display_meals,
    display_recommendations, display_summary,
};
