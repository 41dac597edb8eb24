use leptos::prelude::*;

use super::visibility::Reveal;
use crate::content::ABOUT;
use crate::nav::Section;
use crate::visibility::Motion;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=Section::About.id() class="py-20 bg-secondary/30">
            <div class="section-container">
                <h2 class="section-heading">"About " <span class="gradient-text">"Me"</span></h2>

                <div class="grid md:grid-cols-2 gap-10 items-center">
                    <Reveal motion=Motion::SlideLeft>
                        <Portrait />
                    </Reveal>

                    <Reveal motion=Motion::SlideRight class="space-y-5">
                        <h3 class="text-2xl font-bold">{ABOUT.headline}</h3>
                        {ABOUT
                            .paragraphs
                            .iter()
                            .map(|p| view! { <p class="text-muted-foreground">{*p}</p> })
                            .collect_view()}
                        <div class="flex flex-wrap gap-4 pt-2">
                            {ABOUT
                                .stats
                                .iter()
                                .map(|(value, label)| {
                                    view! {
                                        <div class="card w-full sm:w-[calc(50%-0.5rem)] p-6">
                                            <div class="text-3xl font-bold text-primary mb-2">{*value}</div>
                                            <div class="font-medium">{*label}</div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Portrait() -> impl IntoView {
    view! {
        <div class="relative">
            <div class="bg-gradient-to-r from-primary to-accent p-1 rounded-lg shadow-xl">
                <img
                    src=ABOUT.portrait
                    alt="Portrait"
                    class="aspect-square w-full object-cover rounded-lg"
                />
            </div>
            <div class="absolute -bottom-4 -right-4 w-24 h-24 bg-primary/10 rounded-full -z-10"></div>
        </div>
    }
}
