pub mod health;
pub mod job_applications;
