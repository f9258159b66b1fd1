// Assessment core: question bank, answers, the session state machine and
// answer normalization, plus the server-side session store and service.

pub mod answers;
pub mod handlers;
pub mod normalizer;
pub mod questions;
pub mod service;
pub mod session;
pub mod store;
