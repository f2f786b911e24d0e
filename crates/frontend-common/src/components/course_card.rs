use super::LoadingSpinner;
use coursedesk_core::Course;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct CourseCardProps {
    pub course: Course,
    #[prop_or_default]
    pub enrolled: bool,
    /// An enroll request for this course is in flight
    #[prop_or_default]
    pub pending: bool,
    pub on_enroll: Callback<Course>,
}

/// One catalog entry with its "Enroll" control
#[function_component(CourseCard)]
pub fn course_card(props: &CourseCardProps) -> Html {
    let course = &props.course;

    let on_click = {
        let course = course.clone();
        let on_enroll = props.on_enroll.clone();
        Callback::from(move |_: MouseEvent| on_enroll.emit(course.clone()))
    };

    html! {
        <div class="p-4 bg-white dark:bg-gray-800 rounded-lg shadow flex flex-col gap-2">
            <div class="flex items-start justify-between gap-2">
                <h3 class="text-lg font-semibold text-blue-900 dark:text-blue-200">
                    {course.display_name()}
                </h3>
                if props.enrolled {
                    <span class="px-2 py-0.5 text-xs font-medium rounded-full bg-green-100 text-green-800">
                        {"Enrolled"}
                    </span>
                }
            </div>
            if let Some(instructor) = course.instructor() {
                <p class="text-sm text-gray-600 dark:text-gray-400">{format!("Instructor: {instructor}")}</p>
            }
            if let Some(schedule) = course.schedule() {
                <p class="text-sm text-gray-600 dark:text-gray-400">{format!("Schedule: {schedule}")}</p>
            }
            if let Some(credits) = course.credits() {
                <p class="text-sm text-gray-600 dark:text-gray-400">{format!("Credits: {credits}")}</p>
            }
            if let Some(description) = course.description() {
                <p class="text-sm text-gray-700 dark:text-gray-300">{description}</p>
            }
            <button
                class="mt-auto px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors disabled:opacity-50 disabled:cursor-not-allowed"
                disabled={props.pending}
                onclick={on_click}
            >
                if props.pending {
                    <LoadingSpinner small=true />
                } else {
                    {"Enroll"}
                }
            </button>
        </div>
    }
}
