use leptos::prelude::*;

use super::header::SocialLinks;
use crate::content::PROFILE;
use crate::nav::Section;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-navy text-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    <div>
                        <h3 class="text-xl font-bold mb-4">{PROFILE.name}</h3>
                        <p class="text-gray-300 mb-4">{PROFILE.footer_blurb}</p>
                    </div>

                    <div>
                        <h3 class="text-xl font-bold mb-4">"Quick Links"</h3>
                        <ul class="space-y-2">
                            {Section::NAV
                                .into_iter()
                                .map(|s| {
                                    view! {
                                        <li>
                                            <a href=s.href() class="text-gray-300 hover:text-white transition-colors">
                                                {s.label()}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <div>
                        <h3 class="text-xl font-bold mb-4">"Contact Info"</h3>
                        <p class="text-gray-300 mb-2">{PROFILE.location}</p>
                        <p class="text-gray-300 mb-2">{PROFILE.email}</p>
                        <p class="text-gray-300 mb-4">{PROFILE.phone}</p>
                        <div class="flex space-x-4">
                            <SocialLinks class="text-gray-300 hover:text-white transition-colors" />
                        </div>
                    </div>
                </div>

                <hr class="my-8 border-gray-700" />

                <div class="text-center text-gray-400 text-sm">
                    <p>{format!("© {} {}. All rights reserved.", env!("BUILD_YEAR"), PROFILE.name)}</p>
                </div>
            </div>
        </footer>
    }
}
