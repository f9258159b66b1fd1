// Chat Relay and the typed hand-off from results to the counsellor.
// All LLM calls go through llm_client::TextGenerator.

pub mod fallback;
pub mod handlers;
pub mod handoff;
pub mod relay;
