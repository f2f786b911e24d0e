use crate::app::Route;
use coursedesk_core::{
    CatalogAction, CatalogState, Course, CourseService, ListStatus, Messages, StudentId,
    ViewLifetime,
};
use coursedesk_frontend_common::{
    CourseCard, EnrollmentList, LoadingSpinner, PageShell, ViewStateHandle, create_course_client,
    use_session, use_view_lifetime, use_view_state,
};
use tracing::warn;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Copy)]
enum CourseCommand {
    Enroll,
    Drop,
}

impl CourseCommand {
    fn unreachable_message(self) -> &'static str {
        match self {
            Self::Enroll => Messages::ENROLL_UNREACHABLE,
            Self::Drop => Messages::DROP_UNREACHABLE,
        }
    }
}

#[function_component(CoursesPage)]
pub fn courses_page() -> Html {
    let session = use_session();
    let navigator = use_navigator();
    let lifetime = use_view_lifetime();
    let state = use_view_state(CatalogState::default);

    // Catalog once per mount
    {
        let state = state.clone();
        let lifetime = lifetime.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let client = match create_course_client() {
                    Ok(client) => client,
                    Err(e) => {
                        warn!("Failed to create course client: {e}");
                        state.dispatch(CatalogAction::CoursesUnavailable);
                        return;
                    }
                };
                let service = CourseService::new(client);
                if let Some(action) = lifetime.guard(service.load_catalog()).await {
                    state.dispatch(action);
                }
            });
        });
    }

    // Enrolled courses whenever the stored student changes
    {
        let state = state.clone();
        let lifetime = lifetime.clone();
        use_effect_with(
            (session.is_loading, session.student_id.clone()),
            move |(is_loading, student_id)| {
                if *is_loading {
                    return;
                }
                state.dispatch(CatalogAction::SessionChanged(student_id.clone()));

                let student_id = student_id.clone();
                spawn_local(async move {
                    let client = match create_course_client() {
                        Ok(client) => client,
                        Err(e) => {
                            warn!("Failed to create course client: {e}");
                            if let Some(student_id) = student_id {
                                state.dispatch(CatalogAction::EnrolledUnavailable { student_id });
                            }
                            return;
                        }
                    };
                    let service = CourseService::new(client);
                    if let Some(Some(action)) = lifetime
                        .guard(service.load_enrolled(student_id.as_ref()))
                        .await
                    {
                        state.dispatch(action);
                    }
                });
            },
        );
    }

    // Failures are shown as a blocking alert, then cleared
    {
        let state = state.clone();
        let alert = state.alert.clone();
        use_effect_with(alert, move |alert| {
            if let Some(message) = alert {
                gloo::dialogs::alert(message);
                state.dispatch(CatalogAction::DismissAlert);
            }
        });
    }

    let on_enroll = course_command(
        state.clone(),
        lifetime.clone(),
        session.student_id.clone(),
        CourseCommand::Enroll,
    );
    let on_drop = course_command(
        state.clone(),
        lifetime,
        session.student_id.clone(),
        CourseCommand::Drop,
    );

    let on_logout = Callback::from(move |()| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Login);
        }
    });

    let catalog = match state.courses_status {
        ListStatus::Loading => html! {
            <LoadingSpinner text={Some("Loading courses...".to_string())} />
        },
        ListStatus::Unavailable => html! {
            <p class="text-sm text-gray-500">{"The course catalog is unavailable right now."}</p>
        },
        ListStatus::Ready => html! {
            <div class="grid gap-5 grid-cols-[repeat(auto-fill,minmax(300px,1fr))]">
                { for state.courses.iter().map(|course| html! {
                    <CourseCard
                        key={course.id.to_string()}
                        course={course.clone()}
                        enrolled={state.is_enrolled(&course.id)}
                        pending={state.is_pending(&course.id)}
                        on_enroll={on_enroll.clone()}
                    />
                }) }
            </div>
        },
    };

    html! {
        <PageShell on_logout={on_logout}>
            <div class="flex flex-col lg:flex-row gap-8">
                <section class="flex-[3]">
                    <h2 class="text-xl font-semibold text-blue-900 dark:text-blue-200 mb-4">
                        {"Available Courses"}
                    </h2>
                    {catalog}
                </section>
                <EnrollmentList state={(**state).clone()} on_drop={on_drop} />
            </div>
        </PageShell>
    }
}

/// Callback that runs an enroll or drop for the clicked course
fn course_command(
    state: ViewStateHandle<CatalogState>,
    lifetime: ViewLifetime,
    student_id: Option<StudentId>,
    command: CourseCommand,
) -> Callback<Course> {
    Callback::from(move |course: Course| {
        if state.is_pending(&course.id) {
            return;
        }
        state.dispatch(CatalogAction::ActionStarted(course.id.clone()));

        let state = state.clone();
        let lifetime = lifetime.clone();
        let student_id = student_id.clone();
        spawn_local(async move {
            let action = match create_course_client() {
                Ok(client) => {
                    let service = CourseService::new(client);
                    let outcome = async {
                        match command {
                            CourseCommand::Enroll => {
                                service.enroll(student_id.as_ref(), &course).await
                            }
                            CourseCommand::Drop => {
                                service.drop_course(student_id.as_ref(), &course).await
                            }
                        }
                    };
                    lifetime.guard(outcome).await
                }
                Err(e) => {
                    warn!("Failed to create course client: {e}");
                    Some(CatalogAction::ActionFailed {
                        course_id: course.id.clone(),
                        message: command.unreachable_message().to_string(),
                    })
                }
            };

            if let Some(action) = action {
                state.dispatch(action);
            }
        });
    })
}
