//! Auth gateway: login, signup and logout against the course backend

use crate::api::CourseApi;
use crate::config::Messages;
use crate::error::{ApiError, CoreError, CoreResult};
use crate::session::SessionStore;
use crate::types::{LoginRequest, LoginResponse, RegisterRequest, Student, StudentId};
use crate::validation::{ValidationError, validate_registration};
use thiserror::Error;
use tracing::{info, warn};

/// Why a login or signup did not go through. `Display` is the message to
/// show the user.
#[derive(Debug, Clone, Error)]
pub enum AuthFailure {
    /// Rejected locally before any request was made
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// The backend answered `success: false`
    #[error("{0}")]
    Rejected(String),

    /// The backend could not be reached or answered nonsense
    #[error("{message}")]
    Unreachable {
        message: &'static str,
        source: ApiError,
    },

    /// Login succeeded but the identifier could not be stored
    #[error("{}", Messages::SESSION_NOT_SAVED)]
    SessionNotSaved(#[source] CoreError),
}

/// Performs authentication requests and records the resulting session
pub struct AuthGateway<A, S> {
    api: A,
    session: S,
}

impl<A, S> AuthGateway<A, S>
where
    A: CourseApi,
    S: SessionStore,
{
    pub fn new(api: A, session: S) -> Self {
        Self { api, session }
    }

    /// Identifier of the student from the last successful login
    pub fn current_student_id(&self) -> Option<StudentId> {
        self.session.student_id()
    }

    /// Log in and store the student identifier.
    ///
    /// The identifier is written before this returns `Ok`, so the course
    /// views can read it as soon as the caller navigates.
    pub async fn login(&self, username: &str, password: &str) -> Result<Student, AuthFailure> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        let response = self.api.login(&request).await.map_err(|source| {
            warn!("Login request failed: {source}");
            AuthFailure::Unreachable {
                message: Messages::LOGIN_UNREACHABLE,
                source,
            }
        })?;

        match response {
            LoginResponse {
                success: true,
                student: Some(student),
                ..
            } => {
                self.session
                    .set_student_id(&student.id)
                    .map_err(AuthFailure::SessionNotSaved)?;
                info!(student_id = %student.id, "Logged in as {}", student.username);
                Ok(student)
            }
            LoginResponse { success: true, .. } => Err(AuthFailure::Unreachable {
                message: Messages::LOGIN_UNREACHABLE,
                source: ApiError::Decode("login succeeded without a student record".into()),
            }),
            rejected => Err(AuthFailure::Rejected(
                rejected.message_or(Messages::LOGIN_FAILED),
            )),
        }
    }

    /// Validate locally, then create the account. Nothing is sent when
    /// validation fails.
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), AuthFailure> {
        validate_registration(request)?;

        let response = self.api.register(request).await.map_err(|source| {
            warn!("Signup request failed: {source}");
            AuthFailure::Unreachable {
                message: Messages::SIGNUP_UNREACHABLE,
                source,
            }
        })?;

        if response.success {
            info!("Registered account {}", request.username);
            Ok(())
        } else {
            Err(AuthFailure::Rejected(
                response.message_or(Messages::SIGNUP_FAILED),
            ))
        }
    }

    /// Forget the stored identifier
    pub fn logout(&self) -> CoreResult<()> {
        self.session.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockCourseApi;
    use crate::session::MemorySessionStore;
    use crate::types::ActionResponse;
    use serde_json::json;

    fn student(id: i64) -> Student {
        serde_json::from_value(json!({"id": id, "username": "abc12", "email": "a@b.com"}))
            .unwrap()
    }

    fn valid_signup() -> RegisterRequest {
        RegisterRequest {
            username: "abc12".into(),
            password: "Abcdef1!".into(),
            confirm_password: "Abcdef1!".into(),
            email: "a@b.com".into(),
        }
    }

    #[tokio::test]
    async fn test_login_stores_student_id() {
        let mut api = MockCourseApi::new();
        api.expect_login()
            .withf(|req| req.username == "abc12" && req.password == "Abcdef1!")
            .times(1)
            .returning(|_| {
                Ok(LoginResponse {
                    success: true,
                    student: Some(student(4)),
                    message: Some("Login successful".into()),
                })
            });

        let gateway = AuthGateway::new(api, MemorySessionStore::new());
        let logged_in = gateway.login("abc12", "Abcdef1!").await.unwrap();

        assert_eq!(logged_in.id, StudentId::new("4"));
        assert_eq!(gateway.current_student_id(), Some(StudentId::new("4")));
    }

    #[tokio::test]
    async fn test_login_rejection_uses_backend_message_or_default() {
        let mut api = MockCourseApi::new();
        let mut responses = vec![
            LoginResponse {
                success: false,
                student: None,
                message: None,
            },
            LoginResponse {
                success: false,
                student: None,
                message: Some("Invalid username or password".into()),
            },
        ];
        api.expect_login()
            .times(2)
            .returning(move |_| Ok(responses.pop().unwrap()));

        let gateway = AuthGateway::new(api, MemorySessionStore::new());

        let first = gateway.login("abc12", "nope").await.unwrap_err();
        assert_eq!(first.to_string(), "Invalid username or password");

        let second = gateway.login("abc12", "nope").await.unwrap_err();
        assert_eq!(second.to_string(), "Login failed.");
        assert_eq!(gateway.current_student_id(), None);
    }

    #[tokio::test]
    async fn test_login_transport_failure_is_generic() {
        let mut api = MockCourseApi::new();
        api.expect_login()
            .returning(|_| Err(ApiError::Transport("connection refused".into())));

        let gateway = AuthGateway::new(api, MemorySessionStore::new());
        let err = gateway.login("abc12", "Abcdef1!").await.unwrap_err();

        assert!(matches!(err, AuthFailure::Unreachable { .. }));
        assert_eq!(err.to_string(), "Server error. Please try again.");
    }

    #[tokio::test]
    async fn test_login_success_without_student_is_treated_as_malformed() {
        let mut api = MockCourseApi::new();
        api.expect_login().returning(|_| {
            Ok(LoginResponse {
                success: true,
                student: None,
                message: None,
            })
        });

        let gateway = AuthGateway::new(api, MemorySessionStore::new());
        let err = gateway.login("abc12", "Abcdef1!").await.unwrap_err();
        assert_eq!(err.to_string(), Messages::LOGIN_UNREACHABLE);
        assert_eq!(gateway.current_student_id(), None);
    }

    #[tokio::test]
    async fn test_invalid_signup_never_reaches_backend() {
        let mut api = MockCourseApi::new();
        api.expect_register().never();

        let gateway = AuthGateway::new(api, MemorySessionStore::new());
        let request = RegisterRequest {
            username: "1abc".into(),
            ..valid_signup()
        };

        let err = gateway.register(&request).await.unwrap_err();
        assert!(matches!(err, AuthFailure::Invalid(ValidationError::Username)));
        assert_eq!(err.to_string(), "Invalid username.");
    }

    #[tokio::test]
    async fn test_signup_outcomes() {
        let mut api = MockCourseApi::new();
        let mut responses = vec![
            Ok(ActionResponse {
                success: true,
                message: Some("Registration successful".into()),
            }),
            Ok(ActionResponse {
                success: false,
                message: Some("Username already taken".into()),
            }),
            Err(ApiError::Transport("timed out".into())),
        ];
        api.expect_register()
            .withf(|req| req.confirm_password == "Abcdef1!")
            .times(3)
            .returning(move |_| responses.remove(0));

        let gateway = AuthGateway::new(api, MemorySessionStore::new());
        let request = valid_signup();

        assert!(gateway.register(&request).await.is_ok());
        assert_eq!(
            gateway.register(&request).await.unwrap_err().to_string(),
            "Username already taken"
        );
        assert_eq!(
            gateway.register(&request).await.unwrap_err().to_string(),
            "Server error. Try again later."
        );
    }

    #[tokio::test]
    async fn test_logout_clears_session() {
        let gateway = AuthGateway::new(
            MockCourseApi::new(),
            MemorySessionStore::with_student(StudentId::new("4")),
        );
        gateway.logout().unwrap();
        assert_eq!(gateway.current_student_id(), None);
    }
}
