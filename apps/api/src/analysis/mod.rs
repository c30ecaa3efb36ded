//! The heuristic extraction-and-scoring engine.
//!
//! Four analyzers (name, profession, skills, compliance score) read the same
//! immutable [`text::ResumeText`] independently; [`summary::summarize`] is
//! the single entry point that runs them all.

pub mod handlers;
pub mod name;
pub mod patterns;
pub mod profession;
pub mod scoring;
pub mod skills;
pub mod summary;
pub mod text;
