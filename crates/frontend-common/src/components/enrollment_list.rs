use super::LoadingSpinner;
use coursedesk_core::{CatalogState, Course, ListStatus};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct EnrollmentListProps {
    pub state: CatalogState,
    pub on_drop: Callback<Course>,
}

/// The student's enrolled courses, each with a "Drop" control
#[function_component(EnrollmentList)]
pub fn enrollment_list(props: &EnrollmentListProps) -> Html {
    let state = &props.state;

    let body = match state.enrolled_status {
        ListStatus::Loading => html! { <LoadingSpinner text={Some("Loading enrollments...".to_string())} /> },
        ListStatus::Unavailable => html! {
            <p class="text-sm text-gray-500">{"Enrolled courses are unavailable right now."}</p>
        },
        ListStatus::Ready if state.enrolled.is_empty() => html! {
            <p class="text-sm text-gray-500">{"No courses enrolled yet."}</p>
        },
        ListStatus::Ready => html! {
            <ul class="flex flex-col gap-2">
                { for state.enrolled.iter().map(|course| {
                    let pending = state.is_pending(&course.id);
                    let on_click = {
                        let course = course.clone();
                        let on_drop = props.on_drop.clone();
                        Callback::from(move |_: MouseEvent| on_drop.emit(course.clone()))
                    };
                    html! {
                        <li key={course.id.to_string()} class="flex items-center justify-between p-3 bg-white dark:bg-gray-800 rounded shadow-sm">
                            <span class="text-gray-900 dark:text-gray-100">{course.display_name()}</span>
                            <button
                                class="px-3 py-1 text-sm bg-red-600 text-white rounded hover:bg-red-700 transition-colors disabled:opacity-50 disabled:cursor-not-allowed"
                                disabled={pending}
                                onclick={on_click}
                            >
                                if pending {
                                    <LoadingSpinner small=true />
                                } else {
                                    {"Drop"}
                                }
                            </button>
                        </li>
                    }
                }) }
            </ul>
        },
    };

    html! {
        <aside class="flex-1 min-w-[250px]">
            <h2 class="text-xl font-semibold text-blue-900 dark:text-blue-200 mb-4">
                {format!("Enrolled Courses ({})", state.enrolled.len())}
            </h2>
            {body}
        </aside>
    }
}
