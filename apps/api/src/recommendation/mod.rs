// Result Generator: keyword heuristic, canned bundles and the remote path.
// All LLM calls go through llm_client::TextGenerator.

pub mod extract;
pub mod generator;
pub mod handlers;
pub mod heuristic;
pub mod models;
pub mod prompts;
pub mod tables;
