// Persistence collaborator: saved assessments and chat transcripts.
// Callers log and swallow failures; nothing here blocks the assessment or chat flow.

pub mod handlers;
pub mod records;
pub mod render;
