use crate::app::Route;
use coursedesk_core::{AuthGateway, LoginAction, LoginForm, Messages};
use coursedesk_frontend_common::{
    BrowserSessionStore, ErrorBanner, PageShell, SessionAction, create_course_client,
    use_session, use_view_lifetime, use_view_state,
};
use tracing::warn;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let form = use_view_state(LoginForm::default);
    let session = use_session();
    let navigator = use_navigator();
    let lifetime = use_view_lifetime();

    let on_username_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            form.dispatch(LoginAction::SetUsername(input.value()));
        })
    };

    let on_password_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            form.dispatch(LoginAction::SetPassword(input.value()));
        })
    };

    let on_submit = {
        let form = form.clone();
        let session = session.clone();
        let navigator = navigator.clone();
        let lifetime = lifetime.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if form.is_busy() {
                return;
            }

            let request = form.request();
            form.dispatch(LoginAction::Submit);

            let form = form.clone();
            let session = session.clone();
            let navigator = navigator.clone();
            let lifetime = lifetime.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let client = match create_course_client() {
                    Ok(client) => client,
                    Err(e) => {
                        warn!("Failed to create course client: {e}");
                        form.dispatch(LoginAction::Failed(Messages::LOGIN_UNREACHABLE.into()));
                        return;
                    }
                };

                let gateway = AuthGateway::new(client, BrowserSessionStore::default());
                let Some(result) = lifetime
                    .guard(gateway.login(&request.username, &request.password))
                    .await
                else {
                    return;
                };

                match result {
                    Ok(student) => {
                        form.dispatch(LoginAction::Succeeded);
                        session.dispatch(SessionAction::Login(student));
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Courses);
                        }
                    }
                    Err(e) => form.dispatch(LoginAction::Failed(e.to_string())),
                }
            });
        })
    };

    html! {
        <PageShell>
            <div class="max-w-md mx-auto mt-10 p-6 bg-white dark:bg-gray-800 rounded-lg shadow">
                <h2 class="text-2xl font-bold mb-6 text-gray-900 dark:text-white">{"Student Login"}</h2>

                <ErrorBanner message={form.error.clone()} />

                <form onsubmit={on_submit}>
                    <div class="mb-4">
                        <label for="username" class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2">
                            {"Username:"}
                        </label>
                        <input
                            id="username"
                            type="text"
                            class="w-full px-4 py-2 border border-gray-300 dark:border-gray-600 rounded-lg bg-white dark:bg-gray-700 text-gray-900 dark:text-white focus:ring-2 focus:ring-blue-500 focus:border-transparent"
                            value={form.username.clone()}
                            oninput={on_username_input}
                            required=true
                        />
                    </div>
                    <div class="mb-6">
                        <label for="password" class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2">
                            {"Password:"}
                        </label>
                        <input
                            id="password"
                            type="password"
                            class="w-full px-4 py-2 border border-gray-300 dark:border-gray-600 rounded-lg bg-white dark:bg-gray-700 text-gray-900 dark:text-white focus:ring-2 focus:ring-blue-500 focus:border-transparent"
                            value={form.password.clone()}
                            oninput={on_password_input}
                            required=true
                        />
                    </div>
                    <button
                        type="submit"
                        disabled={form.is_busy()}
                        class="w-full px-4 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors disabled:opacity-50 disabled:cursor-not-allowed font-medium"
                    >
                        {form.submit_label()}
                    </button>
                </form>

                <p class="mt-6 text-sm text-center text-gray-600 dark:text-gray-400">
                    {"Don't have an account? "}
                    <Link<Route> to={Route::Signup} classes="text-blue-600 hover:underline">
                        {"Sign up"}
                    </Link<Route>>
                </p>
            </div>
        </PageShell>
    }
}
