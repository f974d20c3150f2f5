//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::config::ApiConfig;
use crate::net::api::ApiClient;
use crate::pages::dashboard::DashboardPage;

/// Root application component.
///
/// Provides the API client context and sets up client-side routing. The
/// bare root path redirects to the dashboard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ApiConfig::from_env();
    log::info!("name bank api at {}", config.base_url);
    provide_context(ApiClient::new(&config));

    view! {
        <Title text="Name Bank"/>

        <div class="app">
            <header class="app-header">
                <h1>"Naming Platform Backend"</h1>
            </header>
            <main class="app-main">
                <Router>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=|| view! { <Redirect path="/dashboard"/> }/>
                        <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    </Routes>
                </Router>
            </main>
        </div>
    }
}
