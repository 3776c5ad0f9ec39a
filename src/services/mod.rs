pub mod job_application_service;
