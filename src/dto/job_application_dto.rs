use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::job_application::{JobApplication, JobApplicationStatus};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobApplicationPayload {
    #[validate(length(min = 1, max = 200, message = "Company name is required and cannot exceed 200 characters"))]
    pub company_name: String,
    #[validate(length(min = 1, max = 200, message = "Position is required and cannot exceed 200 characters"))]
    pub position: String,
    #[validate(range(min = 1, max = 5, message = "Invalid status value"))]
    pub status: i16,
}

// Full-replacement update: same shape as create, date_applied deliberately
// absent from both.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateJobApplicationPayload {
    #[validate(length(min = 1, max = 200, message = "Company name is required and cannot exceed 200 characters"))]
    pub company_name: String,
    #[validate(length(min = 1, max = 200, message = "Position is required and cannot exceed 200 characters"))]
    pub position: String,
    #[validate(range(min = 1, max = 5, message = "Invalid status value"))]
    pub status: i16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplicationResponse {
    pub id: i32,
    pub company_name: String,
    pub position: String,
    pub status: JobApplicationStatus,
    pub date_applied: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResponse<T> {
    pub data: Vec<T>,
    pub page_number: i64,
    pub page_size: i64,
    pub total_count: i64,
    pub total_pages: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct JobApplicationListQuery {
    pub page_number: Option<i64>,
    pub page_size: Option<i64>,
}

impl From<JobApplication> for JobApplicationResponse {
    fn from(value: JobApplication) -> Self {
        Self {
            id: value.id,
            company_name: value.company_name,
            position: value.position,
            status: value.status,
            date_applied: value.date_applied,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
