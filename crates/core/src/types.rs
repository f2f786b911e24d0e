use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Identifier of the logged-in student, used to scope enrollment calls.
///
/// The backend sends a number; anything that arrives is held as text since
/// the client only ever puts it in a URL path or in storage.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct StudentId(String);

impl StudentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for StudentId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(i64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Self(n.to_string()),
            Raw::Text(s) => Self(s),
        })
    }
}

/// Course identifier, kept in whatever JSON form the backend used so the
/// course can be posted back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CourseId {
    Number(i64),
    Text(String),
}

impl CourseId {
    /// Compare against user-typed text (CLI arguments, route params)
    pub fn matches(&self, raw: &str) -> bool {
        match self {
            Self::Number(n) => raw.trim().parse::<i64>().is_ok_and(|r| r == *n),
            Self::Text(s) => s == raw.trim(),
        }
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for CourseId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for CourseId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// A catalog entry. Everything besides the id is owned by the backend and
/// passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Course {
    pub fn new(id: impl Into<CourseId>) -> Self {
        Self {
            id: id.into(),
            attributes: Map::new(),
        }
    }

    /// Attach a display attribute
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Read an attribute as display text. Numbers and booleans are rendered,
    /// nested values are not.
    pub fn text(&self, key: &str) -> Option<String> {
        match self.attributes.get(key)? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    pub fn display_name(&self) -> String {
        ["name", "title", "course_name"]
            .iter()
            .find_map(|key| self.text(key))
            .unwrap_or_else(|| format!("Course {}", self.id))
    }

    pub fn instructor(&self) -> Option<String> {
        self.text("instructor")
    }

    pub fn schedule(&self) -> Option<String> {
        self.text("schedule")
    }

    pub fn credits(&self) -> Option<String> {
        self.text("credits")
    }

    pub fn description(&self) -> Option<String> {
        self.text("description")
    }
}

/// Profile returned by a successful login
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    #[serde(default)]
    pub username: String,
    #[serde(flatten)]
    pub profile: Map<String, Value>,
}

impl Student {
    pub fn email(&self) -> Option<&str> {
        self.profile.get("email").and_then(Value::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    #[serde(rename = "confirmPassword")]
    pub confirm_password: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub student: Option<Student>,
    #[serde(default)]
    pub message: Option<String>,
}

/// `{success, message?}` envelope used by register, enroll and drop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl ActionResponse {
    /// Backend message, or `default` when it is missing or blank
    pub fn message_or(&self, default: &str) -> String {
        message_or(self.message.as_deref(), default)
    }
}

impl LoginResponse {
    pub fn message_or(&self, default: &str) -> String {
        message_or(self.message.as_deref(), default)
    }
}

fn message_or(message: Option<&str>, default: &str) -> String {
    match message {
        Some(m) if !m.trim().is_empty() => m.to_string(),
        _ => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_course_round_trips_attributes_and_numeric_id() {
        let raw = json!({"id": 5, "name": "Compilers", "schedule": "MWF 9:00", "seats": 30});
        let course: Course = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(course.id, CourseId::Number(5));
        assert_eq!(course.display_name(), "Compilers");
        assert_eq!(course.text("seats").as_deref(), Some("30"));
        assert_eq!(serde_json::to_value(&course).unwrap(), raw);
    }

    #[test]
    fn test_course_display_name_falls_back_to_id() {
        let course = Course::new("CS-101");
        assert_eq!(course.display_name(), "Course CS-101");
    }

    #[test]
    fn test_course_id_matches_user_input() {
        assert!(CourseId::Number(7).matches(" 7 "));
        assert!(!CourseId::Number(7).matches("07x"));
        assert!(CourseId::from("CS-101").matches("CS-101"));
    }

    #[test]
    fn test_student_id_accepts_number_or_string() {
        let student: Student =
            serde_json::from_value(json!({"id": 12, "username": "abc12", "email": "a@b.com"}))
                .unwrap();
        assert_eq!(student.id.as_str(), "12");
        assert_eq!(student.email(), Some("a@b.com"));

        let id: StudentId = serde_json::from_value(json!("s-9")).unwrap();
        assert_eq!(id, StudentId::new("s-9"));
    }

    #[test]
    fn test_register_request_uses_camel_case_confirmation() {
        let request = RegisterRequest {
            username: "abc12".into(),
            password: "Abcdef1!".into(),
            confirm_password: "Abcdef1!".into(),
            email: "a@b.com".into(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["confirmPassword"], "Abcdef1!");
    }

    #[test]
    fn test_blank_message_falls_back_to_default() {
        let response = ActionResponse {
            success: false,
            message: Some("  ".into()),
        };
        assert_eq!(response.message_or("Enrollment failed."), "Enrollment failed.");

        let response: ActionResponse = serde_json::from_value(json!({"success": false})).unwrap();
        assert_eq!(response.message_or("Signup failed."), "Signup failed.");
    }
}
