use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use crate::theme::Theme;
#[cfg(feature = "hydrate")]
use crate::theme::THEME_STORAGE_KEY;

/// The one piece of app-wide mutable state: the active colour theme.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: Signal<Theme>,
    set_theme: WriteSignal<Theme>,
}

impl ThemeContext {
    pub fn set(&self, theme: Theme) {
        self.set_theme.set(theme);
    }

    pub fn toggle(&self) {
        self.set_theme.update(|t| *t = t.toggle());
    }
}

/// Creates the theme context. Call once, from the application root.
pub fn provide_theme() -> ThemeContext {
    #[cfg(feature = "hydrate")]
    let (theme, set_theme, _) = use_local_storage::<Theme, JsonSerdeWasmCodec>(THEME_STORAGE_KEY);
    #[cfg(not(feature = "hydrate"))]
    let (theme, set_theme) = {
        let (theme, set_theme) = signal(Theme::default());
        (Signal::from(theme), set_theme)
    };

    Effect::new(move |_| apply_theme(theme.get()));

    let ctx = ThemeContext { theme, set_theme };
    provide_context(ctx);
    ctx
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

fn apply_theme(theme: Theme) {
    let Some(root) = document().document_element() else {
        return;
    };
    let classes = root.class_list();
    _ = classes.remove_1(theme.toggle().class());
    _ = classes.add_1(theme.class());
    log::debug!("theme set to {}", theme.class());
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();
    let dark = move || ctx.theme.get().is_dark();

    view! {
        <button
            type="button"
            class="inline-flex items-center justify-center h-9 w-9 rounded-full hover:bg-muted transition-colors"
            on:click=move |_| ctx.toggle()
            aria-label=move || ctx.theme.get().toggle_label()
        >
            <span class=move || {
                if dark() {
                    "inline-block text-lg text-blue-300 transition-transform duration-500 rotate-180"
                } else {
                    "inline-block text-lg text-yellow-500 transition-transform duration-500 rotate-0"
                }
            }>{move || if dark() { "☾" } else { "☀" }}</span>
            <span class="sr-only">"Toggle theme"</span>
        </button>
    }
}
