mod about;
mod contact;
mod experience;
mod footer;
mod header;
mod hero;
mod homepage;
mod loading;
mod projects;
mod scroll;
mod skills;
mod theme;
mod visibility;

pub use theme::{provide_theme, use_theme, ThemeContext};
pub use visibility::{use_visibility, Reveal};

use homepage::HomePage;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use scroll::use_anchor_scroll;

use crate::config::SiteConfig;
use crate::content::PROFILE;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="dark">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content=PROFILE.tagline />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased bg-background text-foreground">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let config = SiteConfig::from_build_env();
    use_anchor_scroll(config.header_height);
    provide_context(config);
    provide_theme();

    view! {
        <Title formatter=|title| format!("{} - {title}", PROFILE.name) />

        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
        resp.set_status(http::StatusCode::NOT_FOUND);
    }

    view! {
        <Title text="Not Found" />
        <main class="min-h-screen flex flex-col items-center justify-center gap-4">
            <h1 class="text-4xl font-bold">"404"</h1>
            <p class="text-xl text-muted-foreground">"Oops! Page not found"</p>
            <a href="/" class="text-primary underline hover:text-primary/80">
                "Return to Home"
            </a>
        </main>
    }
}
