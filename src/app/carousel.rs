use leptos::prelude::*;
use leptos_use::use_interval_fn;

use crate::carousel::{CarouselState, EMBED_ROTATE_MS, EMBED_WINDOW};
use crate::content::{EmbedRef, INSTAGRAM_EMBEDS, INSTAGRAM_HANDLE, INSTAGRAM_PROFILE};

/// The placeholder blockquote `embed.js` resolves into a rendered post.
fn embed_markup(embed: &EmbedRef) -> String {
    format!(
        r#"<blockquote class="instagram-media" data-instgrm-captioned data-instgrm-permalink="{}" data-instgrm-version="14" style="margin:0 auto; max-width:540px; width:100%;"></blockquote>"#,
        embed.url
    )
}

#[component]
pub fn InstagramSection() -> impl IntoView {
    let embeds: &'static Vec<EmbedRef> = &INSTAGRAM_EMBEDS;
    let state = RwSignal::new(CarouselState::new(embeds.len()));

    if embeds.len() > 1 {
        // free-running while the section is mounted; leptos-use cancels the
        // interval when the owning scope is disposed
        let _ = use_interval_fn(move || state.update(|s| s.tick()), EMBED_ROTATE_MS);
    }

    let slides = move || {
        state
            .get()
            .window(EMBED_WINDOW)
            .into_iter()
            .map(|index| {
                view! {
                    <div class="rounded-2xl bg-white/80 border border-pink-100 shadow-sm overflow-hidden">
                        <div inner_html=embed_markup(&embeds[index])></div>
                        <p class="px-4 py-2 text-xs text-gray-400">"Instagram Highlight"</p>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <section id="instagram" class="py-20 md:py-28">
            <div class="max-w-6xl mx-auto px-4">
                <div class="text-center mb-12">
                    <span class="text-pink-500 font-medium mb-2 block">"Live from Instagram"</span>
                    <h2 class="text-3xl md:text-4xl font-bold">"Instagram Highlights"</h2>
                    <p class="text-gray-600 mt-3">
                        "Selected posts and reels embedded directly from my Instagram profile "
                        <a
                            href=INSTAGRAM_PROFILE
                            target="_blank"
                            rel="noopener noreferrer"
                            class="text-pink-500 hover:text-pink-600"
                        >
                            {INSTAGRAM_HANDLE}
                        </a> "."
                    </p>
                </div>
                {if embeds.is_empty() {
                    view! {
                        <p class="text-center text-gray-500">
                            "No posts configured yet - add post links to content/instagram.json."
                        </p>
                    }
                        .into_any()
                } else {
                    view! {
                        <div
                            class="relative"
                            on:mouseenter=move |_| state.update(|s| s.set_hovered(true))
                            on:mouseleave=move |_| state.update(|s| s.set_hovered(false))
                        >
                            <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3">{slides}</div>
                            {state
                                .get_untracked()
                                .has_controls()
                                .then(|| {
                                    view! {
                                        <button
                                            class="absolute left-0 top-1/2 -translate-y-1/2 -translate-x-3 w-10 h-10 rounded-full bg-white shadow border border-pink-100 text-pink-500 hover:bg-pink-50"
                                            aria-label="Previous posts"
                                            on:click=move |_| state.update(|s| s.rewind())
                                        >
                                            "‹"
                                        </button>
                                        <button
                                            class="absolute right-0 top-1/2 -translate-y-1/2 translate-x-3 w-10 h-10 rounded-full bg-white shadow border border-pink-100 text-pink-500 hover:bg-pink-50"
                                            aria-label="Next posts"
                                            on:click=move |_| state.update(|s| s.advance())
                                        >
                                            "›"
                                        </button>
                                        <div class="flex justify-center gap-2 mt-6">
                                            {(0..embeds.len())
                                                .map(|i| {
                                                    view! {
                                                        <button
                                                            class=move || {
                                                                if state.get().active() == i {
                                                                    "w-6 h-2 rounded-full bg-pink-500 transition-all duration-200"
                                                                } else {
                                                                    "w-2 h-2 rounded-full bg-pink-200 hover:bg-pink-300 transition-all duration-200"
                                                                }
                                                            }
                                                            aria-label=format!("Go to post {}", i + 1)
                                                            on:click=move |_| state.update(|s| s.select(i))
                                                        ></button>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    }
                                })}
                        </div>
                    }
                        .into_any()
                }}
            </div>
        </section>
    }
}
