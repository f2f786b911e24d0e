use crate::pages::{CoursesPage, LoginPage, SignupPage};
use coursedesk_frontend_common::{LoadingSpinner, SessionProvider, use_session};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/signup")]
    Signup,
    #[at("/courses")]
    Courses,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <SessionProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </SessionProvider>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::Login => html! { <LoginPage /> },
        Route::Signup => html! { <SignupPage /> },
        Route::Courses => html! { <CoursesPage /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

/// Sends the visitor to the course list when a session exists, else to login
#[function_component(Home)]
fn home() -> Html {
    let session = use_session();

    if session.is_loading {
        return html! { <LoadingSpinner /> };
    }

    if session.is_logged_in() {
        html! { <Redirect<Route> to={Route::Courses} /> }
    } else {
        html! { <Redirect<Route> to={Route::Login} /> }
    }
}
