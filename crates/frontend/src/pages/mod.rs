mod courses;
mod login;
mod signup;

pub use courses::CoursesPage;
pub use login::LoginPage;
pub use signup::SignupPage;
