//! Course catalog and enrollment state
//!
//! [`CatalogState`] holds both lists shown on the courses page. It changes
//! only through [`CatalogAction`]s, which [`CourseService`] produces from
//! backend responses.

use crate::api::CourseApi;
use crate::config::Messages;
use crate::forms::Reduce;
use crate::types::{Course, CourseId, StudentId};
use tracing::{debug, info, warn};

/// Load status of one list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListStatus {
    #[default]
    Loading,
    Ready,
    /// The fetch failed; the list stays empty until the next fetch
    Unavailable,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogState {
    pub student_id: Option<StudentId>,
    pub courses: Vec<Course>,
    pub courses_status: ListStatus,
    pub enrolled: Vec<Course>,
    pub enrolled_status: ListStatus,
    /// Courses with an enroll or drop request in flight
    pub pending: Vec<CourseId>,
    /// Blocking message to show the user
    pub alert: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogAction {
    /// The stored student identifier changed (or was read for the first time)
    SessionChanged(Option<StudentId>),
    CoursesLoaded(Vec<Course>),
    CoursesUnavailable,
    EnrolledLoaded {
        student_id: StudentId,
        courses: Vec<Course>,
    },
    EnrolledUnavailable {
        student_id: StudentId,
    },
    ActionStarted(CourseId),
    Enrolled(Course),
    Dropped(CourseId),
    ActionFailed {
        course_id: CourseId,
        message: String,
    },
    DismissAlert,
}

impl CatalogState {
    pub fn for_student(student_id: Option<StudentId>) -> Self {
        Self::default().reduce(CatalogAction::SessionChanged(student_id))
    }

    pub fn is_pending(&self, id: &CourseId) -> bool {
        self.pending.contains(id)
    }

    pub fn is_enrolled(&self, id: &CourseId) -> bool {
        self.enrolled.iter().any(|course| &course.id == id)
    }

    fn is_current(&self, student_id: &StudentId) -> bool {
        self.student_id.as_ref() == Some(student_id)
    }

    fn settle(&self, id: &CourseId) -> Vec<CourseId> {
        self.pending.iter().filter(|p| *p != id).cloned().collect()
    }
}

impl Reduce for CatalogState {
    type Action = CatalogAction;

    fn reduce(&self, action: CatalogAction) -> Self {
        match action {
            CatalogAction::SessionChanged(student_id) if student_id == self.student_id => {
                self.clone()
            }
            CatalogAction::SessionChanged(student_id) => Self {
                enrolled_status: if student_id.is_some() {
                    ListStatus::Loading
                } else {
                    ListStatus::Ready
                },
                student_id,
                enrolled: Vec::new(),
                pending: Vec::new(),
                ..self.clone()
            },
            CatalogAction::CoursesLoaded(courses) => Self {
                courses,
                courses_status: ListStatus::Ready,
                ..self.clone()
            },
            CatalogAction::CoursesUnavailable => Self {
                courses: Vec::new(),
                courses_status: ListStatus::Unavailable,
                ..self.clone()
            },
            CatalogAction::EnrolledLoaded { student_id, .. }
            | CatalogAction::EnrolledUnavailable { student_id }
                if !self.is_current(&student_id) =>
            {
                debug!(%student_id, "Discarding enrolled courses for a previous session");
                self.clone()
            }
            CatalogAction::EnrolledLoaded { courses, .. } => Self {
                enrolled: courses,
                enrolled_status: ListStatus::Ready,
                ..self.clone()
            },
            CatalogAction::EnrolledUnavailable { .. } => Self {
                enrolled: Vec::new(),
                enrolled_status: ListStatus::Unavailable,
                ..self.clone()
            },
            CatalogAction::ActionStarted(id) if self.is_pending(&id) => self.clone(),
            CatalogAction::ActionStarted(id) => {
                let mut next = self.clone();
                next.pending.push(id);
                next
            }
            CatalogAction::Enrolled(course) => {
                let mut next = Self {
                    pending: self.settle(&course.id),
                    ..self.clone()
                };
                next.enrolled.push(course);
                next
            }
            CatalogAction::Dropped(id) => Self {
                pending: self.settle(&id),
                enrolled: self
                    .enrolled
                    .iter()
                    .filter(|course| course.id != id)
                    .cloned()
                    .collect(),
                ..self.clone()
            },
            CatalogAction::ActionFailed { course_id, message } => Self {
                pending: self.settle(&course_id),
                alert: Some(message),
                ..self.clone()
            },
            CatalogAction::DismissAlert => Self {
                alert: None,
                ..self.clone()
            },
        }
    }
}

/// Turns backend calls into [`CatalogAction`]s
pub struct CourseService<A> {
    api: A,
}

impl<A: CourseApi> CourseService<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub async fn load_catalog(&self) -> CatalogAction {
        match self.api.courses().await {
            Ok(courses) => {
                debug!("Loaded {} catalog courses", courses.len());
                CatalogAction::CoursesLoaded(courses)
            }
            Err(e) => {
                warn!("Failed to fetch course catalog: {e}");
                CatalogAction::CoursesUnavailable
            }
        }
    }

    /// Fetch the student's enrolled courses. Skipped without a student.
    pub async fn load_enrolled(&self, student_id: Option<&StudentId>) -> Option<CatalogAction> {
        let Some(student_id) = student_id else {
            debug!("No stored student; skipping enrolled courses");
            return None;
        };

        Some(match self.api.student_courses(student_id).await {
            Ok(courses) => {
                debug!(%student_id, "Loaded {} enrolled courses", courses.len());
                CatalogAction::EnrolledLoaded {
                    student_id: student_id.clone(),
                    courses,
                }
            }
            Err(e) => {
                warn!(%student_id, "Failed to fetch enrolled courses: {e}");
                CatalogAction::EnrolledUnavailable {
                    student_id: student_id.clone(),
                }
            }
        })
    }

    /// Fetch both lists concurrently
    pub async fn load(&self, student_id: Option<&StudentId>) -> Vec<CatalogAction> {
        let (enrolled, catalog) =
            futures::join!(self.load_enrolled(student_id), self.load_catalog());
        enrolled.into_iter().chain(std::iter::once(catalog)).collect()
    }

    pub async fn enroll(&self, student_id: Option<&StudentId>, course: &Course) -> CatalogAction {
        let Some(student_id) = student_id else {
            return not_logged_in(course);
        };

        match self.api.enroll(student_id, course).await {
            Ok(response) if response.success => {
                info!(%student_id, course_id = %course.id, "Enrolled in course");
                CatalogAction::Enrolled(course.clone())
            }
            Ok(response) => {
                let message = response.message_or(Messages::ENROLL_FAILED);
                warn!(%student_id, course_id = %course.id, "Enrollment rejected: {message}");
                CatalogAction::ActionFailed {
                    course_id: course.id.clone(),
                    message,
                }
            }
            Err(e) => {
                warn!(%student_id, course_id = %course.id, "Enroll request failed: {e}");
                CatalogAction::ActionFailed {
                    course_id: course.id.clone(),
                    message: Messages::ENROLL_UNREACHABLE.to_string(),
                }
            }
        }
    }

    pub async fn drop_course(
        &self,
        student_id: Option<&StudentId>,
        course: &Course,
    ) -> CatalogAction {
        let Some(student_id) = student_id else {
            return not_logged_in(course);
        };

        match self.api.drop_course(student_id, course).await {
            Ok(response) if response.success => {
                info!(%student_id, course_id = %course.id, "Dropped course");
                CatalogAction::Dropped(course.id.clone())
            }
            Ok(response) => {
                let message = response.message_or(Messages::DROP_FAILED);
                warn!(%student_id, course_id = %course.id, "Drop rejected: {message}");
                CatalogAction::ActionFailed {
                    course_id: course.id.clone(),
                    message,
                }
            }
            Err(e) => {
                warn!(%student_id, course_id = %course.id, "Drop request failed: {e}");
                CatalogAction::ActionFailed {
                    course_id: course.id.clone(),
                    message: Messages::DROP_UNREACHABLE.to_string(),
                }
            }
        }
    }
}

fn not_logged_in(course: &Course) -> CatalogAction {
    CatalogAction::ActionFailed {
        course_id: course.id.clone(),
        message: Messages::NOT_LOGGED_IN.to_string(),
    }
}
