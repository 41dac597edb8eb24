use leptos::prelude::*;

use crate::content::PROFILE;
use crate::nav::Section;

#[component]
pub fn Hero() -> impl IntoView {
    let (first, rest) = PROFILE.name.split_once(' ').unwrap_or((PROFILE.name, ""));

    view! {
        <section
            id=Section::Hero.id()
            class="min-h-screen flex flex-col justify-center relative overflow-hidden pb-16 pt-32"
        >
            <div class="absolute inset-0 -z-10 bg-[radial-gradient(45%_25%_at_50%_50%,hsl(var(--primary)/0.2)_0%,rgba(255,255,255,0)_100%)]"></div>
            <div class="section-container">
                <div class="max-w-3xl mx-auto text-center animate-fade-in">
                    <p class="text-primary font-medium mb-3">{PROFILE.role}</p>
                    <h1 class="mb-6 text-4xl md:text-6xl font-bold">
                        "Hi, I'm " <span class="gradient-text">{first} " " {rest}</span>
                    </h1>
                    <p class="text-lg md:text-xl mb-8 text-muted-foreground">{PROFILE.tagline}</p>
                    <div class="flex flex-col sm:flex-row justify-center gap-4">
                        <a href=Section::Contact.href() class="gh-button-primary px-8 py-3 text-lg">
                            "Get In Touch"
                        </a>
                        <a href=Section::Projects.href() class="gh-button px-8 py-3 text-lg">
                            "View My Work"
                        </a>
                    </div>
                </div>

                <div class="absolute bottom-6 left-1/2 transform -translate-x-1/2 animate-bounce">
                    <a href=Section::About.href() aria-label="Scroll down" class="text-primary text-2xl">
                        "↓"
                    </a>
                </div>
            </div>
        </section>
    }
}
