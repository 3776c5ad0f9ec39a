use chrono::Utc;
use std::sync::Arc;

use crate::dto::job_application_dto::{
    CreateJobApplicationPayload, JobApplicationResponse, PagedResponse,
    UpdateJobApplicationPayload,
};
use crate::error::{Error, Result};
use crate::models::job_application::{JobApplicationStatus, NewJobApplication};
use crate::repository::job_application_repository::JobApplicationRepository;

#[derive(Clone)]
pub struct JobApplicationService {
    repository: Arc<dyn JobApplicationRepository>,
}

impl JobApplicationService {
    pub fn new(repository: Arc<dyn JobApplicationRepository>) -> Self {
        Self { repository }
    }

    pub async fn get_all(&self) -> Result<Vec<JobApplicationResponse>> {
        let entities = self.repository.get_all().await?;
        Ok(entities.into_iter().map(Into::into).collect())
    }

    pub async fn get_all_paged(
        &self,
        page_number: i64,
        page_size: i64,
    ) -> Result<PagedResponse<JobApplicationResponse>> {
        if page_number < 1 {
            return Err(Error::BadRequest(
                "Page number must be greater than 0.".to_string(),
            ));
        }
        if page_size < 1 {
            return Err(Error::BadRequest(
                "Page size must be greater than 0.".to_string(),
            ));
        }

        let (items, total_count) = self.repository.get_all_paged(page_number, page_size).await?;
        let total_pages = (total_count + page_size - 1) / page_size;

        Ok(PagedResponse {
            data: items.into_iter().map(Into::into).collect(),
            page_number,
            page_size,
            total_count,
            total_pages,
        })
    }

    /// Absence is an expected outcome here, not an error.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<JobApplicationResponse>> {
        let entity = self.repository.get_by_id(id).await?;
        Ok(entity.map(Into::into))
    }

    pub async fn create(
        &self,
        payload: CreateJobApplicationPayload,
    ) -> Result<JobApplicationResponse> {
        let new = NewJobApplication {
            company_name: payload.company_name,
            position: payload.position,
            status: parse_status(payload.status)?,
            // Always stamped server-side; the input shape has no
            // date_applied field and a client-supplied value is never
            // honored.
            date_applied: Utc::now(),
        };

        let created = self.repository.create(new).await?;
        Ok(created.into())
    }

    /// Update assumes the caller believes the resource exists, so a missing
    /// id is an error rather than an absent value. Existence is probed
    /// before the fetch to produce a clean not-found signal.
    pub async fn update(
        &self,
        id: i32,
        payload: UpdateJobApplicationPayload,
    ) -> Result<JobApplicationResponse> {
        if !self.repository.exists(id).await? {
            return Err(not_found(id));
        }

        let mut existing = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;

        existing.company_name = payload.company_name;
        existing.position = payload.position;
        existing.status = parse_status(payload.status)?;
        // date_applied and created_at stay untouched regardless of input.

        let updated = self.repository.update(&existing).await?;
        Ok(updated.into())
    }

    /// Returns whether a row existed and was removed. Never a not-found
    /// error at this layer.
    pub async fn delete(&self, id: i32) -> Result<bool> {
        self.repository.delete(id).await
    }
}

fn not_found(id: i32) -> Error {
    Error::NotFound(format!("Job application with ID {} not found.", id))
}

fn parse_status(value: i16) -> Result<JobApplicationStatus> {
    JobApplicationStatus::try_from(value).map_err(Error::BadRequest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job_application::JobApplication;
    use crate::repository::job_application_repository::MockJobApplicationRepository;
    use chrono::{Duration, Utc};

    fn sample_entity(id: i32) -> JobApplication {
        let created = Utc::now() - Duration::days(3);
        JobApplication {
            id,
            company_name: "Acme".to_string(),
            position: "Engineer".to_string(),
            status: JobApplicationStatus::Applied,
            date_applied: created,
            created_at: created,
            updated_at: None,
        }
    }

    fn service(mock: MockJobApplicationRepository) -> JobApplicationService {
        JobApplicationService::new(Arc::new(mock))
    }

    #[tokio::test]
    async fn paged_rejects_page_number_below_one_without_touching_repository() {
        // No expectations set: any repository call would panic the mock.
        let svc = service(MockJobApplicationRepository::new());

        let err = svc.get_all_paged(0, 10).await.unwrap_err();
        match err {
            Error::BadRequest(msg) => assert_eq!(msg, "Page number must be greater than 0."),
            other => panic!("expected BadRequest, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn paged_rejects_page_size_below_one_without_touching_repository() {
        let svc = service(MockJobApplicationRepository::new());

        let err = svc.get_all_paged(1, 0).await.unwrap_err();
        match err {
            Error::BadRequest(msg) => assert_eq!(msg, "Page size must be greater than 0."),
            other => panic!("expected BadRequest, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn paged_computes_total_pages_by_ceiling_division() {
        let mut mock = MockJobApplicationRepository::new();
        mock.expect_get_all_paged()
            .withf(|page, size| *page == 1 && *size == 10)
            .returning(|_, _| Ok((vec![sample_entity(1)], 1)));

        let page = service(mock).get_all_paged(1, 10).await.unwrap();
        assert_eq!(page.total_count, 1);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.data.len(), 1);

        let mut mock = MockJobApplicationRepository::new();
        mock.expect_get_all_paged()
            .returning(|_, _| Ok((vec![], 21)));

        let page = service(mock).get_all_paged(3, 10).await.unwrap();
        assert_eq!(page.total_pages, 3);
    }

    #[tokio::test]
    async fn create_stamps_date_applied_server_side() {
        let mut mock = MockJobApplicationRepository::new();
        mock.expect_create().returning(|new| {
            Ok(JobApplication {
                id: 7,
                company_name: new.company_name,
                position: new.position,
                status: new.status,
                date_applied: new.date_applied,
                created_at: Utc::now(),
                updated_at: None,
            })
        });

        let before = Utc::now();
        let created = service(mock)
            .create(CreateJobApplicationPayload {
                company_name: "Acme".to_string(),
                position: "Engineer".to_string(),
                status: 1,
            })
            .await
            .unwrap();
        let after = Utc::now();

        assert!(created.date_applied >= before && created.date_applied <= after);
        assert_eq!(created.status, JobApplicationStatus::Applied);
    }

    #[tokio::test]
    async fn update_missing_id_is_not_found_and_mutates_nothing() {
        let mut mock = MockJobApplicationRepository::new();
        mock.expect_exists().returning(|_| Ok(false));
        // get_by_id and update have no expectations; calling them panics.

        let err = service(mock)
            .update(
                42,
                UpdateJobApplicationPayload {
                    company_name: "Acme".to_string(),
                    position: "Engineer".to_string(),
                    status: 2,
                },
            )
            .await
            .unwrap_err();

        match err {
            Error::NotFound(msg) => assert_eq!(msg, "Job application with ID 42 not found."),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn update_preserves_date_applied_and_created_at() {
        let original = sample_entity(5);
        let original_date_applied = original.date_applied;
        let original_created_at = original.created_at;

        let mut mock = MockJobApplicationRepository::new();
        mock.expect_exists().returning(|_| Ok(true));
        {
            let entity = original.clone();
            mock.expect_get_by_id()
                .returning(move |_| Ok(Some(entity.clone())));
        }
        mock.expect_update().returning(|entity| {
            let mut stored = entity.clone();
            stored.updated_at = Some(Utc::now());
            Ok(stored)
        });

        let updated = service(mock)
            .update(
                5,
                UpdateJobApplicationPayload {
                    company_name: "Acme2".to_string(),
                    position: "Senior Engineer".to_string(),
                    status: 3,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.company_name, "Acme2");
        assert_eq!(updated.status, JobApplicationStatus::Offer);
        assert_eq!(updated.date_applied, original_date_applied);
        assert_eq!(updated.created_at, original_created_at);
        let updated_at = updated.updated_at.expect("updated_at set");
        assert!(updated_at >= updated.created_at);
    }

    #[tokio::test]
    async fn delete_reports_whether_a_row_was_removed() {
        let mut mock = MockJobApplicationRepository::new();
        mock.expect_delete().returning(|id| Ok(id == 1));

        let svc = service(mock);
        assert!(svc.delete(1).await.unwrap());
        assert!(!svc.delete(2).await.unwrap());
    }

    #[tokio::test]
    async fn get_by_id_maps_every_field() {
        let entity = sample_entity(9);
        let expected = JobApplicationResponse::from(entity.clone());

        let mut mock = MockJobApplicationRepository::new();
        mock.expect_get_by_id()
            .returning(move |_| Ok(Some(entity.clone())));

        let found = service(mock).get_by_id(9).await.unwrap().unwrap();
        assert_eq!(found, expected);
    }

    #[tokio::test]
    async fn get_by_id_absent_is_none_not_error() {
        let mut mock = MockJobApplicationRepository::new();
        mock.expect_get_by_id().returning(|_| Ok(None));

        assert!(service(mock).get_by_id(404).await.unwrap().is_none());
    }
}
