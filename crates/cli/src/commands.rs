//! CLI commands

use anyhow::{Result, anyhow, bail};
use clap::Subcommand;
use coursedesk_core::{
    AuthGateway, CatalogState, ClientConfig, Course, CourseApi, CourseService, ListStatus,
    Messages, Reduce, RegisterRequest, SessionStore, StudentId,
};
use coursedesk_http::CourseClient;
use std::io::Write;
use std::path::PathBuf;
use std::rc::Rc;
use tracing::debug;

use crate::session_file::FileSessionStore;

#[derive(Subcommand)]
pub enum Commands {
    /// Log in and remember the student for later commands
    Login {
        username: String,

        /// Account password
        #[arg(long, env = "COURSEDESK_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Create a new student account
    Signup {
        username: String,

        email: String,

        #[arg(long)]
        password: String,

        #[arg(long)]
        confirm_password: String,
    },

    /// List the course catalog and your enrolled courses
    Courses,

    /// Enroll in a course from the catalog
    Enroll {
        /// Course id as shown by `courses`
        course_id: String,
    },

    /// Drop one of your enrolled courses
    Drop {
        /// Course id as shown by `courses`
        course_id: String,
    },

    /// Show the logged-in student
    Whoami,

    /// Forget the stored student
    Logout,
}

/// Resolved settings every command runs with
pub struct CommandContext {
    pub config: ClientConfig,
    pub data_dir: PathBuf,
}

impl Commands {
    pub async fn execute(self, ctx: &CommandContext) -> Result<()> {
        let client = CourseClient::from_config(&ctx.config)?;
        let session = FileSessionStore::in_data_dir(&ctx.data_dir, &ctx.config.session_key);
        debug!("Using session file {}", session.path().display());

        let mut stdout = std::io::stdout().lock();
        self.run(client, Rc::new(session), &mut stdout).await
    }

    async fn run<A, S>(self, api: A, session: Rc<S>, out: &mut impl Write) -> Result<()>
    where
        A: CourseApi,
        S: SessionStore,
    {
        match self {
            Commands::Login { username, password } => {
                let gateway = AuthGateway::new(api, session);
                let student = gateway.login(&username, &password).await?;
                writeln!(out, "Logged in as {} (student {})", student.username, student.id)?;
            }
            Commands::Signup {
                username,
                email,
                password,
                confirm_password,
            } => {
                let gateway = AuthGateway::new(api, session);
                gateway
                    .register(&RegisterRequest {
                        username: username.clone(),
                        password,
                        confirm_password,
                        email,
                    })
                    .await?;
                writeln!(out, "Account created. Log in with `coursedesk login {username}`.")?;
            }
            Commands::Courses => {
                let student_id = session.student_id();
                let service = CourseService::new(api);
                let state = service
                    .load(student_id.as_ref())
                    .await
                    .into_iter()
                    .fold(CatalogState::for_student(student_id), |state, action| {
                        state.reduce(action)
                    });
                print_catalog(&state, out)?;
            }
            Commands::Enroll { course_id } => {
                let student_id = require_student(session.as_ref())?;
                let service = CourseService::new(api);

                let state = CatalogState::for_student(Some(student_id.clone()))
                    .reduce(service.load_catalog().await);
                if state.courses_status == ListStatus::Unavailable {
                    bail!("The course catalog is unavailable right now.");
                }
                let course = find_course(&state.courses, &course_id)
                    .ok_or_else(|| anyhow!("No course with id {course_id} in the catalog"))?;

                let state = state.reduce(service.enroll(Some(&student_id), course).await);
                if let Some(alert) = state.alert {
                    bail!(alert);
                }
                writeln!(out, "Enrolled in {}", course.display_name())?;
            }
            Commands::Drop { course_id } => {
                let student_id = require_student(session.as_ref())?;
                let service = CourseService::new(api);

                let mut state = CatalogState::for_student(Some(student_id.clone()));
                if let Some(action) = service.load_enrolled(Some(&student_id)).await {
                    state = state.reduce(action);
                }
                if state.enrolled_status == ListStatus::Unavailable {
                    bail!("Your enrolled courses are unavailable right now.");
                }
                let course = find_course(&state.enrolled, &course_id)
                    .cloned()
                    .ok_or_else(|| anyhow!("You are not enrolled in course {course_id}"))?;

                let state = state.reduce(service.drop_course(Some(&student_id), &course).await);
                if let Some(alert) = state.alert {
                    bail!(alert);
                }
                writeln!(out, "Dropped {}", course.display_name())?;
            }
            Commands::Whoami => match session.student_id() {
                Some(id) => writeln!(out, "Logged in as student {id}")?,
                None => writeln!(out, "{}", Messages::NOT_LOGGED_IN)?,
            },
            Commands::Logout => {
                session.clear()?;
                writeln!(out, "Logged out")?;
            }
        }

        Ok(())
    }
}

fn require_student(session: &impl SessionStore) -> Result<StudentId> {
    session
        .student_id()
        .ok_or_else(|| anyhow!(Messages::NOT_LOGGED_IN))
}

fn find_course<'a>(courses: &'a [Course], raw_id: &str) -> Option<&'a Course> {
    courses.iter().find(|course| course.id.matches(raw_id))
}

fn course_line(course: &Course) -> String {
    let details: Vec<String> = [
        course.instructor(),
        course.schedule(),
        course.credits().map(|c| format!("{c} credits")),
    ]
    .into_iter()
    .flatten()
    .collect();

    let id = course.id.to_string();
    if details.is_empty() {
        format!("{id:>6}  {}", course.display_name())
    } else {
        format!("{id:>6}  {}  ({})", course.display_name(), details.join(", "))
    }
}

fn print_catalog(state: &CatalogState, out: &mut impl Write) -> Result<()> {
    writeln!(out, "Available courses:")?;
    match state.courses_status {
        ListStatus::Unavailable => writeln!(out, "  (catalog unavailable)")?,
        _ if state.courses.is_empty() => writeln!(out, "  (none)")?,
        _ => {
            for course in &state.courses {
                let marker = if state.is_enrolled(&course.id) {
                    "  [enrolled]"
                } else {
                    ""
                };
                writeln!(out, "{}{marker}", course_line(course))?;
            }
        }
    }

    writeln!(out)?;
    if state.student_id.is_none() {
        writeln!(out, "{}", Messages::NOT_LOGGED_IN)?;
        return Ok(());
    }

    writeln!(out, "Enrolled courses ({}):", state.enrolled.len())?;
    match state.enrolled_status {
        ListStatus::Unavailable => writeln!(out, "  (enrolled courses unavailable)")?,
        _ if state.enrolled.is_empty() => writeln!(out, "  (none)")?,
        _ => {
            for course in &state.enrolled {
                writeln!(out, "{}", course_line(course))?;
            }
        }
    }

    Ok(())
}
