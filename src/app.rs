mod carousel;
mod contact;
mod nav;
mod sections;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content;
use carousel::InstagramSection;
use contact::ContactSection;
use nav::{use_scroll_spy, NavBar, NavState};
use sections::{
    AboutSection, EducationSection, ExperienceSection, HeroSection, ProjectsSection, SkillsSection,
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                // resolves the Instagram blockquote placeholders into embeds
                <script defer=true src="https://www.instagram.com/embed.js"></script>
                <MetaTags />
            </head>
            <body class="bg-gradient-to-br from-rose-50 via-pink-50 to-purple-50 text-gray-800">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // sets the document title
        <Title formatter=|title| format!("Sana Hafeez | {title}") />
        <Meta
            name="description"
            content="Portfolio of Sana Hafeez - UI/UX designer, digital marketing enthusiast, and software engineering student."
        />

        <Router>
            <main class="min-h-screen overflow-x-hidden">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
        </Router>
    }
}

/// The single page: fixed nav over a stack of sections in registry order.
#[component]
fn HomePage() -> impl IntoView {
    let nav = NavState::new();
    use_scroll_spy(nav);

    view! {
        <Title text="Portfolio" />
        <NavBar nav />
        <HeroSection nav />
        <AboutSection />
        <EducationSection />
        <ExperienceSection />
        <ProjectsSection />
        <InstagramSection />
        <SkillsSection />
        <ContactSection />
        <Footer />
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="py-8 border-t border-pink-200/60 bg-white/40">
            <div class="max-w-6xl mx-auto px-4 flex flex-col sm:flex-row items-center justify-between gap-4">
                <p class="text-sm text-gray-600">
                    "© 2025 Sana Hafeez. Crafted with love and creativity."
                </p>
                <div class="flex items-center gap-4">
                    {content::SOCIAL_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="text-gray-500 hover:text-pink-500 text-xl transition-colors duration-200"
                                    aria-label=link.label
                                >
                                    <i class=link.icon></i>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <p class="text-xs text-gray-400">"Last updated " {env!("BUILD_DATE")}</p>
            </div>
        </footer>
    }
}
