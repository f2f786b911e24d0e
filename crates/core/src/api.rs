//! The course backend as seen by the client

use crate::error::ApiResult;
use crate::types::{
    ActionResponse, Course, LoginRequest, LoginResponse, RegisterRequest, StudentId,
};
use async_trait::async_trait;

/// Backend endpoints the client consumes.
///
/// Implementations return `Ok` for any response that carries a JSON
/// envelope, including `success: false` answers sent with a 4xx status.
/// `Err` is reserved for transport failures and unreadable responses.
///
/// Futures are not required to be `Send` so the browser client can
/// implement this on top of `fetch`.
#[async_trait(?Send)]
pub trait CourseApi {
    /// `POST /login`
    async fn login(&self, request: &LoginRequest) -> ApiResult<LoginResponse>;

    /// `POST /register`
    async fn register(&self, request: &RegisterRequest) -> ApiResult<ActionResponse>;

    /// `GET /student_courses/{studentId}`
    async fn student_courses(&self, student_id: &StudentId) -> ApiResult<Vec<Course>>;

    /// `GET /courses`
    async fn courses(&self) -> ApiResult<Vec<Course>>;

    /// `POST /enroll/{studentId}` with the course as body
    async fn enroll(&self, student_id: &StudentId, course: &Course) -> ApiResult<ActionResponse>;

    /// `POST /drop/{studentId}` with the course as body
    async fn drop_course(
        &self,
        student_id: &StudentId,
        course: &Course,
    ) -> ApiResult<ActionResponse>;
}

// Mock implementation for testing
#[cfg(test)]
pub mod mock {
    use super::*;
    use mockall::mock;

    mock! {
        pub CourseApi {}

        #[async_trait(?Send)]
        impl CourseApi for CourseApi {
            async fn login(&self, request: &LoginRequest) -> ApiResult<LoginResponse>;
            async fn register(&self, request: &RegisterRequest) -> ApiResult<ActionResponse>;
            async fn student_courses(&self, student_id: &StudentId) -> ApiResult<Vec<Course>>;
            async fn courses(&self) -> ApiResult<Vec<Course>>;
            async fn enroll(&self, student_id: &StudentId, course: &Course) -> ApiResult<ActionResponse>;
            async fn drop_course(&self, student_id: &StudentId, course: &Course) -> ApiResult<ActionResponse>;
        }
    }
}
