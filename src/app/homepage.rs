use leptos::prelude::*;
use leptos_meta::Title;

use super::{
    about::About, contact::Contact, experience::Experience, footer::Footer, header::Header,
    hero::Hero, loading::LoadingScreen, projects::Projects, skills::Skills,
};
use crate::config::SiteConfig;
use crate::visibility::{Motion, Presence};

#[component]
pub fn HomePage() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let (entered, set_entered) = signal(false);
    let (loading, set_loading) = signal(config.loading_screen);

    let entrance_delay = config.entrance_delay;
    Effect::new(move |_| {
        window().scroll_to_with_x_and_y(0.0, 0.0);
        set_timeout(move || set_entered.set(true), entrance_delay);
    });

    view! {
        <Title text="Portfolio" />
        {move || {
            loading
                .get()
                .then(|| view! { <LoadingScreen on_finished=move |_| set_loading.set(false) /> })
        }}
        <div class=move || {
            format!("min-h-screen {}", Motion::Fade.class(Presence::from(entered.get())))
        }>
            <Header />
            <main>
                <Staged index=0 entered>
                    <Hero />
                </Staged>
                <Staged index=1 entered>
                    <About />
                </Staged>
                <Staged index=2 entered>
                    <Experience />
                </Staged>
                <Staged index=3 entered>
                    <Projects />
                </Staged>
                <Staged index=4 entered>
                    <Skills />
                </Staged>
                <Staged index=5 entered>
                    <Contact />
                </Staged>
            </main>
            <Footer />
        </div>
    }
}

/// One step of the page entrance stagger.
#[component]
fn Staged(index: usize, entered: ReadSignal<bool>, children: Children) -> impl IntoView {
    let delay = expect_context::<SiteConfig>().section_delay_ms(index);
    let style = format!("transition-delay: {delay}ms");

    view! {
        <div
            class=move || Motion::FadeUp.class(Presence::from(entered.get()))
            style=style
        >
            {children()}
        </div>
    }
}
