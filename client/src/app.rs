//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::home::HomePage;
use crate::state::{admin::AdminState, gallery::GalleryState, notice::NoticeState, ui::UiState};

/// Reloads the works catalog (one fetch-or-fallback). Provided by the home
/// page so the admin panel can refresh the grid after adding a work.
#[derive(Clone, Copy)]
pub struct CatalogReload(pub Callback<()>);

impl CatalogReload {
    pub fn run(self) {
        self.0.run(());
    }
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="description" content="Marketplace design, video editing and web development portfolio"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(RwSignal::new(GalleryState::default()));
    provide_context(RwSignal::new(AdminState::default()));
    provide_context(RwSignal::new(UiState::default()));
    provide_context(RwSignal::new(NoticeState::default()));

    view! {
        <Stylesheet id="site" href="/css/style.css"/>
        <Title text="Portfolio"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
