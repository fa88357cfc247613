pub mod jobs;
pub mod links;
pub mod mentors;
pub mod subscribers;
