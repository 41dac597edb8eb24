use leptos::prelude::*;

use crate::loading::LoadingProgress;

const GREETING: &str = "Hello World!";
const LETTER_STAGGER_MS: usize = 80;

/// Full-screen terminal splash shown until the progress bar fills.
#[component]
pub fn LoadingScreen(#[prop(into)] on_finished: Callback<()>) -> impl IntoView {
    let (progress, set_progress) = signal(LoadingProgress::new());
    let (exiting, set_exiting) = signal(false);

    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        use crate::loading::{EXIT, HOLD, START_DELAY, TICK};
        use gloo_timers::future::sleep;

        leptos::task::spawn_local(async move {
            sleep(START_DELAY).await;
            loop {
                sleep(TICK).await;
                match set_progress.try_update(|p| p.tick()) {
                    Some(false) => continue,
                    Some(true) => break,
                    None => return,
                }
            }
            sleep(HOLD).await;
            set_exiting.set(true);
            sleep(EXIT).await;
            on_finished.run(());
        });
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (set_progress, set_exiting, on_finished);

    let letters = GREETING
        .chars()
        .enumerate()
        .map(|(i, c)| {
            let spacing = if c == ' ' { "mx-1" } else { "" };
            view! {
                <span
                    class={format!("inline-block animate-fade-in {spacing}")}
                    style={format!("animation-delay: {}ms", i * LETTER_STAGGER_MS)}
                >
                    {c.to_string()}
                </span>
            }
        })
        .collect_view();

    view! {
        <div class=move || {
            if exiting.get() {
                "fixed inset-0 flex items-center justify-center z-[100] bg-[#0d1117] opacity-0 transition-opacity duration-500"
            } else {
                "fixed inset-0 flex items-center justify-center z-[100] bg-[#0d1117] opacity-100 transition-opacity duration-500"
            }
        }>
            <div class="w-full max-w-md px-8 py-12">
                <div class="flex flex-col items-center">
                    <div class="w-full bg-[#161b22] rounded-lg overflow-hidden border border-[#30363d] shadow-2xl">
                        <div class="flex items-center px-4 py-2 bg-[#161b22] border-b border-[#30363d]">
                            <div class="flex space-x-2">
                                <div class="w-3 h-3 rounded-full bg-[#ff5f56]"></div>
                                <div class="w-3 h-3 rounded-full bg-[#ffbd2e]"></div>
                                <div class="w-3 h-3 rounded-full bg-[#27c93f]"></div>
                            </div>
                            <div class="ml-4 text-xs text-[#8b949e]">"terminal"</div>
                        </div>

                        <div class="p-4 font-mono text-sm">
                            <div class="flex items-center mb-3">
                                <span class="text-[#1f6feb]">"$"</span>
                                <span class="ml-2 text-[#c9d1d9]">"cargo leptos serve"</span>
                            </div>
                            <div class="flex items-center text-xl sm:text-2xl text-[#58a6ff] mb-6 mt-4">
                                <span class="text-[#e34c26]">"println"</span>
                                <span class="text-[#d2a8ff]">"!"</span>
                                <span class="text-white">"("</span>
                                <span class="text-[#a5d6ff] flex">"\"" {letters} "\""</span>
                                <span class="text-white">");"</span>
                            </div>
                            <div class="flex items-center">
                                <span class="text-[#1f6feb]">"$"</span>
                                <div class="ml-2 h-4 w-2 bg-[#c9d1d9] animate-pulse"></div>
                            </div>
                        </div>
                    </div>

                    <div class="w-full h-1 bg-[#30363d] rounded-full mt-8 overflow-hidden">
                        <div
                            class="h-full bg-gradient-to-r from-[#1f6feb] to-[#58a6ff] transition-[width] duration-100"
                            style=move || progress.get().width_style()
                        ></div>
                    </div>
                    <p class="mt-4 text-[#8b949e] text-sm">{move || progress.get().label()}</p>
                </div>
            </div>
        </div>
    }
}
