// Counselor panels: career guidance, resume analysis, learning paths,
// mock interviews and job market insights.
// All LLM calls go through the llm_client::Completion trait.

pub mod career;
pub mod handlers;
pub mod interview;
pub mod learning;
pub mod market;
pub mod prompts;
pub mod resume;
