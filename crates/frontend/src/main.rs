mod app;
mod pages;

use app::App;
use coursedesk_frontend_common::logging;

fn main() {
    console_error_panic_hook::set_once();
    logging::init_logging(logging::default_level());
    yew::Renderer::<App>::new().render();
}
