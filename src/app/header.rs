use leptos::prelude::*;

use super::theme::ThemeToggle;
use crate::content::PROFILE;
use crate::nav::Section;

#[component]
pub fn Header() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <nav class="fixed w-full z-50 backdrop-blur-md bg-white/80 dark:bg-navy/80 border-b shadow-sm">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <div class="flex-shrink-0">
                        <a href=Section::Hero.href() class="text-xl font-heading font-bold gradient-text">
                            {PROFILE.name}
                        </a>
                    </div>

                    <div class="hidden md:flex md:items-center md:space-x-8">
                        {Section::NAV
                            .into_iter()
                            .map(|s| {
                                view! {
                                    <a href=s.href() class="hover:text-primary transition-colors">
                                        {s.label()}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="hidden md:flex items-center space-x-3">
                        <SocialLinks class="hover:text-primary transition-colors" />
                        <ThemeToggle />
                    </div>

                    <div class="md:hidden flex items-center">
                        <ThemeToggle />
                        <button
                            type="button"
                            class="inline-flex items-center justify-center p-2 rounded-md text-gray-400 hover:text-primary"
                            aria-expanded=move || menu_open.get().to_string()
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            <span class="sr-only">"Open main menu"</span>
                            <span class="block h-6 w-6 text-xl leading-6">
                                {move || if menu_open.get() { "✕" } else { "☰" }}
                            </span>
                        </button>
                    </div>
                </div>
            </div>

            <div class=move || {
                if menu_open.get() { "block md:hidden" } else { "hidden md:hidden" }
            }>
                <div class="px-2 pt-2 pb-3 space-y-1 sm:px-3 border-t">
                    {Section::NAV
                        .into_iter()
                        .map(|s| {
                            view! {
                                <a
                                    href=s.href()
                                    on:click=move |_| set_menu_open.set(false)
                                    class="block px-3 py-2 rounded-md hover:bg-gray-50 dark:hover:bg-muted hover:text-primary transition-colors"
                                >
                                    {s.label()}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex justify-center space-x-4 pb-4">
                    <SocialLinks class="hover:text-primary transition-colors" />
                </div>
            </div>
        </nav>
    }
}

#[component]
pub fn SocialLinks(#[prop(into)] class: String) -> impl IntoView {
    view! {
        <a
            href=PROFILE.github
            target="_blank"
            rel="noopener noreferrer"
            aria-label="GitHub"
            class=class.clone()
        >
            <i class="devicon-github-plain text-xl"></i>
        </a>
        <a
            href=PROFILE.linkedin
            target="_blank"
            rel="noopener noreferrer"
            aria-label="LinkedIn"
            class=class.clone()
        >
            <i class="devicon-linkedin-plain text-xl"></i>
        </a>
        <a href={format!("mailto:{}", PROFILE.email)} aria-label="Email" class=class>
            <span class="text-xl">"✉"</span>
        </a>
    }
}
