use leptos::prelude::*;

use super::visibility::Reveal;
use crate::content::{Project, PROJECTS};
use crate::nav::Section;
use crate::visibility::Motion;

const CARD_STAGGER_MS: u32 = 100;

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id=Section::Projects.id() class="py-20">
            <div class="section-container">
                <Reveal motion=Motion::FadeDown once=true>
                    <h2 class="section-heading">
                        "Featured " <span class="gradient-text">"Projects"</span>
                    </h2>
                </Reveal>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {PROJECTS
                        .iter()
                        .zip(0u32..)
                        .map(|(project, index)| {
                            view! {
                                <Reveal once=true delay_ms={index * CARD_STAGGER_MS} class="h-full">
                                    <ProjectCard project />
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    let (badges, overflow) = project.badges();

    view! {
        <div class="repo-card h-full flex flex-col">
            <div class="h-48 overflow-hidden rounded-t-md">
                <img
                    src=project.image
                    alt=project.title
                    class="w-full h-full object-cover transition-transform hover:scale-105 duration-300"
                />
            </div>
            <div class="p-6 pb-2">
                <div class="flex items-center mb-2">
                    <div
                        class="w-3 h-3 rounded-full mr-2"
                        style={format!("background-color: {}", project.language_color)}
                    ></div>
                    <span class="text-[#8b949e] text-xs">{project.primary_tech()}</span>
                </div>
                <h3 class="text-xl font-semibold hover:text-[#1f6feb] transition-colors">
                    {project.title}
                </h3>
                <div class="flex flex-wrap gap-2 my-2">
                    {badges
                        .iter()
                        .map(|t| view! { <span class="badge-repo">{*t}</span> })
                        .collect_view()}
                    {overflow.map(|n| view! { <span class="badge-repo">{format!("+{n}")}</span> })}
                </div>
            </div>
            <div class="px-6 flex-grow">
                <p class="text-[#8b949e] text-sm">{project.description}</p>
            </div>
            <div class="p-6 flex gap-4">
                <a
                    href=project.repository
                    target="_blank"
                    rel="noopener noreferrer"
                    class="gh-button flex-1 text-sm"
                >
                    <i class="devicon-github-plain mr-2"></i>
                    "Repository"
                </a>
                <a
                    href=project.live_demo
                    target="_blank"
                    rel="noopener noreferrer"
                    class="gh-button-primary flex-1 text-sm"
                >
                    "🔗 Live Demo"
                </a>
            </div>
        </div>
    }
}
