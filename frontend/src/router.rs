use leptos::*;
use leptos_router::*;

use crate::pages::home::HomePage;

pub const ROUTE_PATHS: &[&str] = &["/"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    view! {
        <Router>
            <Routes>
                <Route path="/" view=HomePage/>
            </Routes>
        </Router>
    }
}
