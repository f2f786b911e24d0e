//! Course backend endpoints

use super::{error::ClientError, typed::CourseClient};
use async_trait::async_trait;
use coursedesk_core::{
    ActionResponse, ApiResult, Course, CourseApi, LoginRequest, LoginResponse, RegisterRequest,
    StudentId,
};
use reqwest::Method;

impl CourseClient {
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ClientError> {
        let req = self.request(Method::POST, "/login").json(request);
        self.execute_envelope(req).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<ActionResponse, ClientError> {
        let req = self.request(Method::POST, "/register").json(request);
        self.execute_envelope(req).await
    }

    /// Courses the student is enrolled in
    pub async fn student_courses(&self, student_id: &StudentId) -> Result<Vec<Course>, ClientError> {
        let req = self.request(Method::GET, &format!("/student_courses/{student_id}"));
        self.execute(req).await
    }

    /// Full course catalog
    pub async fn courses(&self) -> Result<Vec<Course>, ClientError> {
        let req = self.request(Method::GET, "/courses");
        self.execute(req).await
    }

    pub async fn enroll(
        &self,
        student_id: &StudentId,
        course: &Course,
    ) -> Result<ActionResponse, ClientError> {
        let req = self
            .request(Method::POST, &format!("/enroll/{student_id}"))
            .json(course);
        self.execute_envelope(req).await
    }

    pub async fn drop_course(
        &self,
        student_id: &StudentId,
        course: &Course,
    ) -> Result<ActionResponse, ClientError> {
        let req = self
            .request(Method::POST, &format!("/drop/{student_id}"))
            .json(course);
        self.execute_envelope(req).await
    }
}

#[async_trait(?Send)]
impl CourseApi for CourseClient {
    async fn login(&self, request: &LoginRequest) -> ApiResult<LoginResponse> {
        Ok(CourseClient::login(self, request).await?)
    }

    async fn register(&self, request: &RegisterRequest) -> ApiResult<ActionResponse> {
        Ok(CourseClient::register(self, request).await?)
    }

    async fn student_courses(&self, student_id: &StudentId) -> ApiResult<Vec<Course>> {
        Ok(CourseClient::student_courses(self, student_id).await?)
    }

    async fn courses(&self) -> ApiResult<Vec<Course>> {
        Ok(CourseClient::courses(self).await?)
    }

    async fn enroll(&self, student_id: &StudentId, course: &Course) -> ApiResult<ActionResponse> {
        Ok(CourseClient::enroll(self, student_id, course).await?)
    }

    async fn drop_course(
        &self,
        student_id: &StudentId,
        course: &Course,
    ) -> ApiResult<ActionResponse> {
        Ok(CourseClient::drop_course(self, student_id, course).await?)
    }
}
