// Job intake: link scanning, page fetching, AI extraction, paced batches.
// All LLM calls go through llm_client and the session cache.

pub mod batch;
pub mod extractor;
pub mod fetch;
pub mod handlers;
pub mod links;
pub mod prompts;
#[cfg(test)]
pub mod testing;
