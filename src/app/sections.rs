use leptos::prelude::*;

use super::nav::NavState;
use crate::content::{
    ABOUT, CERTIFICATIONS, EDUCATION, EXPERIENCE, FOCUS_AREAS, HERO, PROJECTS, SKILL_GROUPS,
};
use crate::section::Section;

#[component]
fn SectionHeading(kicker: &'static str, title: &'static str) -> impl IntoView {
    view! {
        <div class="text-center mb-12">
            <span class="text-pink-500 font-medium mb-2 block">{kicker}</span>
            <h2 class="text-3xl md:text-4xl font-bold">{title}</h2>
        </div>
    }
}

#[component]
pub fn HeroSection(nav: NavState) -> impl IntoView {
    view! {
        <section id="home" class="min-h-screen flex items-center pt-24 pb-12">
            <div class="max-w-6xl mx-auto px-4 flex flex-col md:flex-row items-center gap-10">
                <div class="flex-1">
                    <span class="inline-block px-4 py-1 rounded-full bg-pink-100 text-pink-600 text-sm mb-4">
                        {HERO.badge}
                    </span>
                    <h1 class="text-4xl md:text-5xl font-bold mb-4">
                        {HERO.greeting} " "
                        <span class="bg-gradient-to-r from-pink-500 to-purple-500 bg-clip-text text-transparent">
                            {HERO.name}
                        </span>
                    </h1>
                    <p class="text-lg text-purple-600 font-medium mb-2">{HERO.tagline}</p>
                    <p class="text-xl font-semibold mb-4">{HERO.highlight}</p>
                    <p class="text-gray-600 mb-8 max-w-xl">{HERO.blurb}</p>
                    <div class="flex flex-wrap gap-4">
                        <button
                            class="px-6 py-3 rounded-full bg-gradient-to-r from-pink-500 to-purple-500 text-white font-medium shadow hover:shadow-lg transition-shadow duration-200"
                            on:click=move |_| nav.navigate(Section::Contact)
                        >
                            "Get In Touch"
                        </button>
                        <button
                            class="px-6 py-3 rounded-full border border-pink-300 text-pink-600 font-medium hover:bg-pink-50 transition-colors duration-200"
                            on:click=move |_| nav.navigate(Section::Projects)
                        >
                            "View My Work"
                        </button>
                    </div>
                </div>
                <div class="flex-shrink-0">
                    <img
                        src=HERO.portrait
                        alt="Portrait of Sana Hafeez"
                        class="w-64 h-64 md:w-80 md:h-80 rounded-full object-cover border-4 border-pink-200 shadow-xl"
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="py-20 md:py-28">
            <div class="max-w-6xl mx-auto px-4">
                <SectionHeading kicker="Get to know me" title="About Me" />
                <div class="flex flex-col lg:flex-row gap-10">
                    <div class="flex-1">
                        {ABOUT
                            .paragraphs
                            .iter()
                            .map(|p| view! { <p class="text-gray-600 leading-relaxed mb-4">{*p}</p> })
                            .collect_view()}
                        <p class="text-sm text-gray-500">
                            "📍 " {ABOUT.location} " · ✉️ " {ABOUT.email}
                        </p>
                    </div>
                    <div class="flex-1 grid gap-4">
                        {FOCUS_AREAS
                            .iter()
                            .map(|area| {
                                view! {
                                    <div class="p-5 rounded-2xl bg-white/70 border border-pink-100 shadow-sm">
                                        <div class=format!(
                                            "w-10 h-10 flex items-center justify-center rounded-xl bg-gradient-to-br {} text-white text-lg mb-3",
                                            area.accent,
                                        )>{area.icon}</div>
                                        <h3 class="font-semibold mb-1">{area.title}</h3>
                                        <p class="text-sm text-gray-500">{area.blurb}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn EducationSection() -> impl IntoView {
    view! {
        <section id="education" class="py-20 md:py-28 bg-white/40">
            <div class="max-w-6xl mx-auto px-4">
                <SectionHeading kicker="Academic journey" title="Education" />
                <div class="max-w-3xl mx-auto p-6 rounded-2xl bg-white/80 border border-pink-100 shadow-sm">
                    <div class="flex items-start gap-4">
                        <div class="w-14 h-14 flex items-center justify-center rounded-xl bg-gradient-to-br from-pink-500 to-purple-500 text-white font-bold">
                            {EDUCATION.monogram}
                        </div>
                        <div>
                            <h3 class="font-semibold text-lg">{EDUCATION.degree}</h3>
                            <p class="text-pink-600">{EDUCATION.school}</p>
                            <p class="text-sm text-gray-500 mb-4">{EDUCATION.window}</p>
                            <div class="flex flex-wrap gap-2">
                                {EDUCATION
                                    .courses
                                    .iter()
                                    .map(|course| {
                                        view! {
                                            <span class="px-3 py-1 rounded-full bg-purple-50 text-purple-600 text-xs">
                                                {*course}
                                            </span>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn ExperienceSection() -> impl IntoView {
    view! {
        <section id="experience" class="py-20 md:py-28">
            <div class="max-w-6xl mx-auto px-4">
                <SectionHeading kicker="Where I've worked" title="Experience" />
                <div class="grid md:grid-cols-2 gap-6">
                    {EXPERIENCE
                        .iter()
                        .map(|exp| {
                            view! {
                                <div class="p-6 rounded-2xl bg-white/80 border border-pink-100 shadow-sm">
                                    <div class=format!(
                                        "inline-block px-3 py-1 rounded-full bg-gradient-to-r {} text-white text-xs mb-3",
                                        exp.accent,
                                    )>{exp.window}</div>
                                    <h3 class="font-semibold text-lg">{exp.role}</h3>
                                    <p class="text-pink-600 mb-3">{exp.company}</p>
                                    <p class="text-sm text-gray-600 mb-4">{exp.summary}</p>
                                    <div class="flex flex-wrap gap-2">
                                        {exp.skills
                                            .iter()
                                            .map(|skill| {
                                                view! {
                                                    <span class="px-3 py-1 rounded-full bg-pink-50 text-pink-600 text-xs">
                                                        {*skill}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn ProjectsSection() -> impl IntoView {
    // index of the project whose detail paragraph is expanded
    let expanded = RwSignal::new(None::<usize>);

    view! {
        <section id="projects" class="py-20 md:py-28 bg-white/40">
            <div class="max-w-6xl mx-auto px-4">
                <SectionHeading kicker="Things I've built" title="Projects" />
                <div class="grid md:grid-cols-2 gap-6">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(i, project)| {
                            view! {
                                <div class="p-6 rounded-2xl bg-white/80 border border-pink-100 shadow-sm flex flex-col">
                                    <div class="flex items-center justify-between mb-3">
                                        <span class=format!(
                                            "px-3 py-1 rounded-full bg-gradient-to-r {} text-white text-xs",
                                            project.accent,
                                        )>{project.kind}</span>
                                        <span class="text-xs text-gray-400">{project.date}</span>
                                    </div>
                                    <h3 class="font-semibold text-lg mb-2">{project.title}</h3>
                                    <p class="text-sm text-gray-600 mb-4">{project.summary}</p>
                                    {project
                                        .details
                                        .map(|details| {
                                            view! {
                                                <div>
                                                    {move || {
                                                        (expanded.get() == Some(i))
                                                            .then(|| {
                                                                view! {
                                                                    <p class="text-sm text-gray-500 mb-4 border-l-2 border-pink-200 pl-3">
                                                                        {details}
                                                                    </p>
                                                                }
                                                            })
                                                    }}
                                                    <button
                                                        class="text-sm text-pink-500 hover:text-pink-600 mb-4"
                                                        on:click=move |_| {
                                                            expanded
                                                                .update(|e| {
                                                                    *e = if *e == Some(i) { None } else { Some(i) };
                                                                })
                                                        }
                                                    >
                                                        {move || {
                                                            if expanded.get() == Some(i) {
                                                                "Show less ▲"
                                                            } else {
                                                                "Read more ▼"
                                                            }
                                                        }}
                                                    </button>
                                                </div>
                                            }
                                        })}
                                    <div class="flex flex-wrap gap-2 mt-auto">
                                        {project
                                            .stack
                                            .iter()
                                            .map(|tech| {
                                                view! {
                                                    <span class="px-3 py-1 rounded-full bg-purple-50 text-purple-600 text-xs">
                                                        {*tech}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                    {project
                                        .link
                                        .map(|link| {
                                            view! {
                                                <a
                                                    href=link
                                                    target="_blank"
                                                    rel="noopener noreferrer"
                                                    class="text-sm text-purple-500 hover:text-purple-600 mt-3"
                                                >
                                                    "View on GitHub →"
                                                </a>
                                            }
                                        })}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn SkillsSection() -> impl IntoView {
    view! {
        <section id="skills" class="py-20 md:py-28">
            <div class="max-w-6xl mx-auto px-4">
                <SectionHeading kicker="What I work with" title="Skills & Certifications" />
                <div class="grid md:grid-cols-2 gap-6 mb-10">
                    {SKILL_GROUPS
                        .iter()
                        .map(|group| {
                            view! {
                                <div class="p-6 rounded-2xl bg-white/80 border border-pink-100 shadow-sm">
                                    <div class="flex items-center gap-3 mb-4">
                                        <span class=format!(
                                            "w-10 h-10 flex items-center justify-center rounded-xl bg-gradient-to-br {} text-white",
                                            group.accent,
                                        )>{group.badge}</span>
                                        <h3 class="font-semibold">{group.title}</h3>
                                    </div>
                                    <div class="grid grid-cols-2 gap-3">
                                        {group
                                            .skills
                                            .iter()
                                            .map(|skill| {
                                                view! {
                                                    <div class="flex items-center gap-2 p-2 rounded-lg bg-pink-50/60">
                                                        <i class=format!(
                                                            "{} {} text-xl",
                                                            skill.icon,
                                                            skill.tint,
                                                        )></i>
                                                        <span class="text-sm">{skill.name}</span>
                                                    </div>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex flex-wrap justify-center gap-4">
                    {CERTIFICATIONS
                        .iter()
                        .map(|cert| {
                            view! {
                                <div class=format!(
                                    "flex items-center gap-2 px-4 py-2 rounded-full bg-gradient-to-r {} text-white text-sm shadow",
                                    cert.accent,
                                )>
                                    <i class=cert.icon></i>
                                    {cert.title}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
