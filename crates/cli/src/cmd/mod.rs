pub mod doctor;
pub mod list_prompts;
pub mod prompt;
