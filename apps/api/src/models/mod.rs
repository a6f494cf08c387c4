pub mod application;
pub mod job;
pub mod profile;
pub mod user;

pub use application::AppliedJob;
pub use job::Job;
pub use profile::UserProfile;
pub use user::{NotAuthenticated, UserId};
