//! Header and footer around every page

use crate::session::{BrowserSessionStore, SessionAction, use_session};
use coursedesk_core::SessionStore;
use tracing::{info, warn};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PageShellProps {
    pub children: Children,
    /// Called after the session has been cleared
    #[prop_or_default]
    pub on_logout: Callback<()>,
}

#[function_component(PageShell)]
pub fn page_shell(props: &PageShellProps) -> Html {
    html! {
        <div class="min-h-screen flex flex-col bg-gray-50 dark:bg-gray-900">
            <Header on_logout={props.on_logout.clone()} />
            <main class="flex-1 p-5">
                {props.children.clone()}
            </main>
            <Footer />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct HeaderProps {
    on_logout: Callback<()>,
}

#[function_component(Header)]
fn header(props: &HeaderProps) -> Html {
    let session = use_session();

    let on_logout = {
        let session = session.clone();
        let on_logout = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| {
            if let Err(e) = BrowserSessionStore::default().clear() {
                warn!("Failed to clear stored session: {e}");
            }
            info!("Logged out");
            session.dispatch(SessionAction::Logout);
            on_logout.emit(());
        })
    };

    html! {
        <header class="flex items-center justify-between px-5 py-4 bg-blue-900 text-white">
            <h1 class="text-xl font-bold">{"Course Enrollment"}</h1>
            if let Some(name) = session.display_name() {
                <div class="flex items-center gap-4">
                    <span class="text-sm">{name}</span>
                    <button
                        class="px-3 py-1 text-sm bg-white/10 rounded hover:bg-white/20 transition-colors"
                        onclick={on_logout}
                    >
                        {"Logout"}
                    </button>
                </div>
            }
        </header>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    html! {
        <footer class="px-5 py-3 text-center text-sm text-gray-500 dark:text-gray-400 border-t border-gray-200 dark:border-gray-700">
            {"Course Enrollment Portal"}
        </footer>
    }
}
