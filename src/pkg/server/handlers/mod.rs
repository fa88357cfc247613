pub mod auth;
pub mod chat;
pub mod export;
pub mod jobs;
pub mod links;
pub mod mentors;
pub mod probes;
pub mod subscribers;
