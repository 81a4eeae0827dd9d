use reqwest::header::ACCEPT;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::api::error::ApiError;
use crate::api::types::{CoursesResponse, EnrollmentsResponse, StudentsResponse};
use crate::config::ApiConfig;

const ERR_STUDENTS: &str = "Failed to fetch students";
const ERR_COURSES: &str = "Failed to fetch courses";
const ERR_ENROLLMENTS: &str = "Failed to fetch course enrollments";

/// Client for the Teachable REST API.
///
/// Every request carries `accept: application/json` and the configured
/// `apikey` header.
pub struct ApiClient {
    client: Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// GET `/users`.
    pub async fn fetch_students(&self) -> Result<StudentsResponse, ApiError> {
        self.get("/users", ERR_STUDENTS).await
    }

    /// GET `/courses`.
    pub async fn fetch_courses(&self) -> Result<CoursesResponse, ApiError> {
        self.get("/courses", ERR_COURSES).await
    }

    /// GET `/courses/{course_id}/enrollments`.
    ///
    /// The course id is interpolated into the path as given.
    pub async fn fetch_students_in_course(
        &self,
        course_id: &str,
    ) -> Result<EnrollmentsResponse, ApiError> {
        self.get(&format!("/courses/{}/enrollments", course_id), ERR_ENROLLMENTS)
            .await
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        error_message: &'static str,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.config.base_url, path);
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .header("apikey", &self.config.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(%status, path, "request failed");
            return Err(ApiError::endpoint(error_message));
        }

        Ok(response.json().await?)
    }
}
