mod course_card;
mod enrollment_list;
mod error_banner;
mod shell;
mod spinner;

pub use course_card::CourseCard;
pub use enrollment_list::EnrollmentList;
pub use error_banner::ErrorBanner;
pub use shell::PageShell;
pub use spinner::LoadingSpinner;
