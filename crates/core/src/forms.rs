//! Login and signup form state
//!
//! Each form is a plain value updated only through [`Reduce::reduce`]. The
//! submit flow is `Idle -> InFlight -> Idle` with either a cleared draft
//! (success) or an error message (failure).

use crate::types::{LoginRequest, RegisterRequest};

/// State that changes only by applying actions and returning a new value
pub trait Reduce: Sized {
    type Action;

    fn reduce(&self, action: Self::Action) -> Self;
}

/// Whether a mutating request is outstanding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Submission {
    #[default]
    Idle,
    InFlight,
}

impl Submission {
    pub fn is_in_flight(self) -> bool {
        matches!(self, Self::InFlight)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub submission: Submission,
    pub error: Option<String>,
}

pub enum LoginAction {
    SetUsername(String),
    SetPassword(String),
    /// Ignored while a submission is already in flight
    Submit,
    Succeeded,
    Failed(String),
}

impl LoginForm {
    pub fn is_busy(&self) -> bool {
        self.submission.is_in_flight()
    }

    pub fn request(&self) -> LoginRequest {
        LoginRequest {
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_busy() {
            "Authenticating..."
        } else {
            "Login"
        }
    }
}

impl Reduce for LoginForm {
    type Action = LoginAction;

    fn reduce(&self, action: LoginAction) -> Self {
        match action {
            LoginAction::SetUsername(username) => Self {
                username,
                ..self.clone()
            },
            LoginAction::SetPassword(password) => Self {
                password,
                ..self.clone()
            },
            LoginAction::Submit if self.is_busy() => self.clone(),
            LoginAction::Submit => Self {
                submission: Submission::InFlight,
                error: None,
                ..self.clone()
            },
            LoginAction::Succeeded => Self::default(),
            LoginAction::Failed(message) => Self {
                submission: Submission::Idle,
                error: Some(message),
                ..self.clone()
            },
        }
    }
}

/// Fields of the signup form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignupField {
    Username,
    Password,
    ConfirmPassword,
    Email,
}

impl SignupField {
    pub const ALL: [SignupField; 4] = [
        SignupField::Username,
        SignupField::Password,
        SignupField::ConfirmPassword,
        SignupField::Email,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
            Self::Email => "email",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Username => "Username:",
            Self::Password => "Password:",
            Self::ConfirmPassword => "Confirm Password:",
            Self::Email => "Email:",
        }
    }

    pub fn is_secret(self) -> bool {
        matches!(self, Self::Password | Self::ConfirmPassword)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
    pub email: String,
    pub submission: Submission,
    pub error: Option<String>,
}

pub enum SignupAction {
    SetField(SignupField, String),
    Submit,
    Succeeded,
    Failed(String),
}

impl SignupForm {
    pub fn is_busy(&self) -> bool {
        self.submission.is_in_flight()
    }

    pub fn value(&self, field: SignupField) -> &str {
        match field {
            SignupField::Username => &self.username,
            SignupField::Password => &self.password,
            SignupField::ConfirmPassword => &self.confirm_password,
            SignupField::Email => &self.email,
        }
    }

    pub fn request(&self) -> RegisterRequest {
        RegisterRequest {
            username: self.username.clone(),
            password: self.password.clone(),
            confirm_password: self.confirm_password.clone(),
            email: self.email.clone(),
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_busy() {
            "Signing up..."
        } else {
            "Signup"
        }
    }
}

impl Reduce for SignupForm {
    type Action = SignupAction;

    fn reduce(&self, action: SignupAction) -> Self {
        match action {
            SignupAction::SetField(field, value) => {
                let mut next = self.clone();
                match field {
                    SignupField::Username => next.username = value,
                    SignupField::Password => next.password = value,
                    SignupField::ConfirmPassword => next.confirm_password = value,
                    SignupField::Email => next.email = value,
                }
                next
            }
            SignupAction::Submit if self.is_busy() => self.clone(),
            SignupAction::Submit => Self {
                submission: Submission::InFlight,
                error: None,
                ..self.clone()
            },
            SignupAction::Succeeded => Self::default(),
            SignupAction::Failed(message) => Self {
                submission: Submission::Idle,
                error: Some(message),
                ..self.clone()
            },
        }
    }
}
