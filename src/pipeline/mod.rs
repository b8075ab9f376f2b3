// Pipelines — end-to-end workflows built from the extract and scoring modules.

pub mod analysis;
