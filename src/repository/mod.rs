pub mod job_application_repository;
