use leptos::prelude::*;

use super::visibility::Reveal;
use crate::content::{Experience as Role, EXPERIENCE};
use crate::nav::Section;

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <section id=Section::Experience.id() class="py-20 bg-secondary/30">
            <div class="section-container">
                <h2 class="section-heading">
                    "Work " <span class="gradient-text">"Experience"</span>
                </h2>

                <ol class="relative space-y-12 border-l-2 border-primary/30 ml-2">
                    {EXPERIENCE
                        .iter()
                        .map(|role| {
                            view! {
                                <li class="relative pl-8">
                                    <span class="absolute -left-[9px] top-8 h-4 w-4 rounded-full bg-primary ring-4 ring-background"></span>
                                    <Reveal once=true>
                                        <TimelineCard role />
                                    </Reveal>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </div>
        </section>
    }
}

#[component]
fn TimelineCard(role: &'static Role) -> impl IntoView {
    view! {
        <div class="card relative overflow-hidden border-l-4 border-l-primary">
            <div class="absolute top-0 right-0 h-20 w-20 bg-primary/5 rounded-full transform translate-x-1/3 -translate-y-1/3"></div>
            <div class="p-6 pb-2">
                <div class="flex items-center gap-2 mb-1">
                    <span class="text-primary">"💼"</span>
                    <span class="text-sm text-muted-foreground">{role.period}</span>
                </div>
                <h3 class="text-xl md:text-2xl font-semibold">
                    {role.role} " @ " <span class="text-primary">{role.company}</span>
                </h3>
            </div>
            <div class="p-6 pt-2">
                <ul class="list-disc list-inside space-y-2 mb-4 text-muted-foreground">
                    {role.highlights.iter().map(|h| view! { <li>{*h}</li> }).collect_view()}
                </ul>
                <div class="flex flex-wrap gap-2 mt-4">
                    {role
                        .technologies
                        .iter()
                        .map(|t| view! { <span class="badge-outline">{*t}</span> })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
