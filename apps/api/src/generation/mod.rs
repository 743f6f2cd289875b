// Document generation: resume and cold-email composition.
// All LLM calls go through llm_client; no direct provider calls here.

pub mod composer;
pub mod handlers;
pub mod options;
pub mod prompts;
