use crate::app::Route;
use coursedesk_core::{AuthGateway, Messages, SignupAction, SignupField, SignupForm};
use coursedesk_frontend_common::{
    BrowserSessionStore, ErrorBanner, PageShell, ViewStateHandle, create_course_client,
    use_view_lifetime, use_view_state,
};
use tracing::warn;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(SignupPage)]
pub fn signup_page() -> Html {
    let form = use_view_state(SignupForm::default);
    let navigator = use_navigator();
    let lifetime = use_view_lifetime();

    let on_submit = {
        let form = form.clone();
        let navigator = navigator.clone();
        let lifetime = lifetime.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if form.is_busy() {
                return;
            }

            let request = form.request();
            form.dispatch(SignupAction::Submit);

            let form = form.clone();
            let navigator = navigator.clone();
            let lifetime = lifetime.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let client = match create_course_client() {
                    Ok(client) => client,
                    Err(e) => {
                        warn!("Failed to create course client: {e}");
                        form.dispatch(SignupAction::Failed(Messages::SIGNUP_UNREACHABLE.into()));
                        return;
                    }
                };

                let gateway = AuthGateway::new(client, BrowserSessionStore::default());
                let Some(result) = lifetime.guard(gateway.register(&request)).await else {
                    return;
                };

                match result {
                    Ok(()) => {
                        form.dispatch(SignupAction::Succeeded);
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Login);
                        }
                    }
                    Err(e) => form.dispatch(SignupAction::Failed(e.to_string())),
                }
            });
        })
    };

    html! {
        <PageShell>
            <div class="max-w-md mx-auto mt-10 p-6 bg-white dark:bg-gray-800 rounded-lg shadow">
                <h2 class="text-2xl font-bold mb-6 text-gray-900 dark:text-white">{"Create an Account"}</h2>

                <ErrorBanner message={form.error.clone()} />

                <form onsubmit={on_submit}>
                    { for SignupField::ALL.iter().map(|field| signup_input(&form, *field)) }
                    <button
                        type="submit"
                        disabled={form.is_busy()}
                        class="w-full px-4 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors disabled:opacity-50 disabled:cursor-not-allowed font-medium"
                    >
                        {form.submit_label()}
                    </button>
                </form>

                <p class="mt-6 text-sm text-center text-gray-600 dark:text-gray-400">
                    {"Already have an account? "}
                    <Link<Route> to={Route::Login} classes="text-blue-600 hover:underline">
                        {"Log in"}
                    </Link<Route>>
                </p>
            </div>
        </PageShell>
    }
}

fn signup_input(form: &ViewStateHandle<SignupForm>, field: SignupField) -> Html {
    let on_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            form.dispatch(SignupAction::SetField(field, input.value()));
        })
    };

    let input_type = if field.is_secret() { "password" } else { "text" };

    html! {
        <div class="mb-4" key={field.id()}>
            <label for={field.id()} class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2">
                {field.label()}
            </label>
            <input
                id={field.id()}
                type={input_type}
                class="w-full px-4 py-2 border border-gray-300 dark:border-gray-600 rounded-lg bg-white dark:bg-gray-700 text-gray-900 dark:text-white focus:ring-2 focus:ring-blue-500 focus:border-transparent"
                value={form.value(field).to_string()}
                oninput={on_input}
                required=true
            />
        </div>
    }
}
