// Shared prompt constants and prompt-building utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Audience framing shared by every counsellor-facing prompt.
pub const AUDIENCE_INSTRUCTION: &str = "\
    The audience is high school and college students in India. \
    Prefer concrete entrance exam names, Indian colleges and boards, \
    and career paths available in the Indian context.";
