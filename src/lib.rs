// Earnwatch: earnings manipulation risk screening for annual reports
//
// This is the library root. Each module corresponds to a stage of the
// analysis pipeline: bytes -> text -> metrics -> baseline delta -> verdict.

pub mod config;
pub mod error;
pub mod extract;
pub mod output;
pub mod pipeline;
pub mod scoring;
