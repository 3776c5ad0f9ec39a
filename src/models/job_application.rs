use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Lifecycle of a job application. Stored and serialized as its integer
/// discriminant (1-5), never by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[repr(i16)]
#[serde(into = "i16", try_from = "i16")]
pub enum JobApplicationStatus {
    Applied = 1,
    Interview = 2,
    Offer = 3,
    Rejected = 4,
    Accepted = 5,
}

impl From<JobApplicationStatus> for i16 {
    fn from(value: JobApplicationStatus) -> Self {
        value as i16
    }
}

impl TryFrom<i16> for JobApplicationStatus {
    type Error = String;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(JobApplicationStatus::Applied),
            2 => Ok(JobApplicationStatus::Interview),
            3 => Ok(JobApplicationStatus::Offer),
            4 => Ok(JobApplicationStatus::Rejected),
            5 => Ok(JobApplicationStatus::Accepted),
            other => Err(format!("Invalid status value: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct JobApplication {
    pub id: i32,
    pub company_name: String,
    pub position: String,
    pub status: JobApplicationStatus,
    pub date_applied: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Insert shape. The store assigns id and created_at; date_applied is
/// stamped by the service before it gets here.
#[derive(Debug, Clone)]
pub struct NewJobApplication {
    pub company_name: String,
    pub position: String,
    pub status: JobApplicationStatus,
    pub date_applied: DateTime<Utc>,
}
