use leptos::prelude::*;

use super::visibility::Reveal;
use crate::content::{SKILLS, SKILL_LOGOS};
use crate::nav::Section;

const LOGO_STAGGER_MS: u32 = 100;

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id=Section::Skills.id() class="py-20">
            <div class="section-container">
                <h2 class="section-heading">
                    "Technical " <span class="gradient-text">"Skills"</span>
                </h2>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {SKILLS
                        .iter()
                        .map(|category| {
                            view! {
                                <Reveal once=true>
                                    <div class="card h-full p-6 transition-all hover:shadow-lg hover:-translate-y-1">
                                        <h3 class="text-lg font-semibold pb-2">{category.title}</h3>
                                        <div class="flex flex-wrap gap-2">
                                            {category
                                                .skills
                                                .iter()
                                                .map(|s| {
                                                    view! {
                                                        <span class="badge-secondary text-sm px-3 py-1">{*s}</span>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>

                <SkillLogos />
            </div>
        </section>
    }
}

#[component]
fn SkillLogos() -> impl IntoView {
    view! {
        <div class="mt-10 grid grid-cols-3 sm:grid-cols-4 md:grid-cols-6 gap-4">
            {SKILL_LOGOS
                .iter()
                .zip(0u32..)
                .map(|((name, icon), index)| {
                    view! {
                        <Reveal once=true delay_ms={index * LOGO_STAGGER_MS}>
                            <div class="flex flex-col items-center justify-center p-3 transition-transform hover:scale-105">
                                <div class="flex items-center justify-center h-16 w-16 mb-2 rounded-lg bg-background/80 backdrop-blur-sm p-3 shadow-md border border-border">
                                    <img src={*icon} alt={*name} class="h-10 w-10 object-contain" />
                                </div>
                                <span class="text-xs text-center font-medium mt-1">{*name}</span>
                            </div>
                        </Reveal>
                    }
                })
                .collect_view()}
        </div>
    }
}
