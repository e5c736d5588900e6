// Job matching: profile validation, the skill-overlap matcher, and the storage
// collaborator that supplies pre-filtered posting pools.

pub mod handlers;
pub mod matcher;
pub mod models;
pub mod skills;
pub mod store;
