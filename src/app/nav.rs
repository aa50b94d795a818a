use leptos::{ev, prelude::*};
use wasm_bindgen::JsCast;

use crate::section::{active_at, LayoutMetrics, Section, SectionMetrics, SCROLL_PROBE_OFFSET};

/// Navigation state for the page: which section is active and whether the
/// mobile menu is open. Copyable handle over two signals, created once per
/// page and passed down as a prop.
#[derive(Clone, Copy)]
pub struct NavState {
    active: RwSignal<Section>,
    menu_open: RwSignal<bool>,
}

impl NavState {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Section::Home),
            menu_open: RwSignal::new(false),
        }
    }

    pub fn active(&self) -> Section {
        self.active.get()
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open.get()
    }

    pub fn set_active(&self, section: Section) {
        self.active.set(section);
    }

    pub fn toggle_menu(&self) {
        self.menu_open.update(|open| *open = !*open);
    }

    /// Smooth-scroll to `section`, mark it active without waiting for the
    /// scroll listener, and close the mobile menu. A section with no rendered
    /// element means the markup and registry disagree; log and leave state
    /// untouched.
    pub fn navigate(&self, section: Section) {
        let Some(element) = document().get_element_by_id(section.id()) else {
            log::warn!("no element with id '{}', ignoring navigation", section.id());
            return;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        self.active.set(section);
        self.menu_open.set(false);
    }
}

impl Default for NavState {
    fn default() -> Self {
        Self::new()
    }
}

/// Layout metrics read from the rendered DOM.
struct DomLayout;

impl LayoutMetrics for DomLayout {
    fn metrics(&self, section: Section) -> Option<SectionMetrics> {
        let element = document().get_element_by_id(section.id())?;
        let element = element.dyn_ref::<web_sys::HtmlElement>()?;
        Some(SectionMetrics {
            top: element.offset_top() as f64,
            height: element.offset_height() as f64,
        })
    }
}

/// Highlight the section under the (header-offset) scroll position. Runs
/// once at mount and on every scroll event; when no section interval
/// matches, the previous highlight is retained.
pub fn use_scroll_spy(nav: NavState) {
    // effects never run during SSR, so the window access is safe
    Effect::new(move |_| {
        let probe = move || {
            let position = window().scroll_y().unwrap_or_default() + SCROLL_PROBE_OFFSET;
            if let Some(section) = active_at(&DomLayout, position) {
                nav.set_active(section);
            }
        };
        probe();
        let handle = window_event_listener(ev::scroll, move |_| probe());
        on_cleanup(move || handle.remove());
    });
}

#[component]
pub fn NavBar(nav: NavState) -> impl IntoView {
    let link_class = move |section: Section| {
        if nav.active() == section {
            "text-pink-500 font-semibold"
        } else {
            "text-gray-600 hover:text-pink-500 transition-colors duration-200"
        }
    };

    view! {
        <header class="fixed top-0 inset-x-0 z-50 bg-white/80 backdrop-blur-md border-b border-pink-100 shadow-sm">
            <div class="max-w-6xl mx-auto px-4 py-4 flex items-center justify-between">
                <button
                    class="text-xl font-bold bg-gradient-to-r from-pink-500 to-purple-500 bg-clip-text text-transparent"
                    on:click=move |_| nav.navigate(Section::Home)
                >
                    "Sana Hafeez"
                </button>
                <nav class="hidden md:flex items-center gap-6">
                    {Section::ALL
                        .iter()
                        .map(|&section| {
                            view! {
                                <button
                                    class=move || link_class(section)
                                    on:click=move |_| nav.navigate(section)
                                >
                                    {section.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
                <button
                    class="md:hidden text-2xl text-gray-600"
                    aria-label="Toggle navigation menu"
                    on:click=move |_| nav.toggle_menu()
                >
                    {move || if nav.is_menu_open() { "✕" } else { "☰" }}
                </button>
            </div>
            {move || {
                nav.is_menu_open()
                    .then(|| {
                        view! {
                            <nav class="md:hidden flex flex-col gap-2 px-4 pb-4 bg-white/95">
                                {Section::ALL
                                    .iter()
                                    .map(|&section| {
                                        view! {
                                            <button
                                                class=move || {
                                                    format!("py-2 text-left {}", link_class(section))
                                                }
                                                on:click=move |_| nav.navigate(section)
                                            >
                                                {section.label()}
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </nav>
                        }
                    })
            }}
        </header>
    }
}
