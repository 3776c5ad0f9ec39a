pub mod error_dto;
pub mod job_application_dto;
