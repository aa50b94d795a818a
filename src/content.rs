use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Embedded content assets; currently just the Instagram embed list.
#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

pub struct Hero {
    pub badge: &'static str,
    pub greeting: &'static str,
    pub name: &'static str,
    pub tagline: &'static str,
    pub highlight: &'static str,
    pub blurb: &'static str,
    pub portrait: &'static str,
}

pub const HERO: Hero = Hero {
    badge: "Welcome to my creative space",
    greeting: "Hi, I'm",
    name: "Sana Hafeez",
    tagline: "UI/UX Designer | Digital Marketing Enthusiast",
    highlight: "Crafting beautiful digital experiences",
    blurb: "Passionate about creating stunning visuals, intuitive interfaces, and strategic \
            digital solutions that make a lasting impact.",
    portrait: "/images/pic.jpg",
};

pub struct About {
    pub paragraphs: &'static [&'static str],
    pub location: &'static str,
    pub email: &'static str,
}

pub const ABOUT: About = About {
    paragraphs: &[
        "I'm a passionate Software Engineering student at the National University of Modern \
         Languages with a creative soul. While I'm equipped with technical skills, my heart \
         lies in the world of design and digital creativity.",
        "I believe in the power of beautiful design to transform user experiences. My journey \
         combines technical knowledge with artistic vision, allowing me to create digital \
         experiences that are both functional and visually stunning.",
    ],
    location: "Abbottabad, Pakistan",
    email: "sanahafeez8oct@gmail.com",
};

pub struct FocusArea {
    pub title: &'static str,
    pub blurb: &'static str,
    pub icon: &'static str,
    pub accent: &'static str,
}

pub const FOCUS_AREAS: [FocusArea; 3] = [
    FocusArea {
        title: "UI/UX Design",
        blurb: "Creating intuitive user experiences",
        icon: "🎨",
        accent: "from-pink-400 to-rose-500",
    },
    FocusArea {
        title: "Digital Marketing",
        blurb: "Strategic online brand presence",
        icon: "📣",
        accent: "from-purple-400 to-violet-500",
    },
    FocusArea {
        title: "Graphic Design",
        blurb: "Visual storytelling & branding",
        icon: "✏️",
        accent: "from-fuchsia-400 to-pink-500",
    },
];

pub struct Education {
    pub school: &'static str,
    pub monogram: &'static str,
    pub degree: &'static str,
    pub window: &'static str,
    pub courses: &'static [&'static str],
}

pub const EDUCATION: Education = Education {
    school: "National University of Modern Languages",
    monogram: "NUML",
    degree: "Bachelor of Science in Software Engineering",
    window: "Sep 2021 – May 2026",
    courses: &[
        "Data Structures",
        "Operating Systems",
        "OOP",
        "DBMS",
        "Internet Technology",
        "AI",
        "Software Methodology",
        "Computer Architecture",
        "Algorithm Analysis",
    ],
};

pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub window: &'static str,
    pub summary: &'static str,
    pub skills: &'static [&'static str],
    pub accent: &'static str,
}

pub const EXPERIENCE: [Experience; 2] = [
    Experience {
        role: "Frontend & Design Intern",
        company: "Inotech Solutions",
        window: "2024",
        summary: "Focused on UI/UX design and frontend development, creating visually appealing \
                  interfaces.",
        skills: &["UI Design", "Frontend Dev", "Figma"],
        accent: "from-pink-500 to-rose-500",
    },
    Experience {
        role: "Software Engineer Intern",
        company: "NTC Islamabad",
        window: "June 2022 – August 2022",
        summary: "Configured network infrastructure, monitored performance, and troubleshot \
                  LAN/WAN issues.",
        skills: &["Networking", "Cisco", "Troubleshooting"],
        accent: "from-purple-500 to-fuchsia-500",
    },
];

pub struct Project {
    pub title: &'static str,
    pub kind: &'static str,
    pub date: &'static str,
    pub summary: &'static str,
    pub stack: &'static [&'static str],
    pub accent: &'static str,
    pub link: Option<&'static str>,
    pub details: Option<&'static str>,
}

pub const PROJECTS: [Project; 4] = [
    Project {
        title: "Student Management System",
        kind: "Web Application",
        date: "Jan 2024",
        summary: "Comprehensive web app for managing student records with responsive UI for \
                  registration, course assignments, and attendance.",
        stack: &["HTML", "CSS", "JavaScript", "Python"],
        accent: "from-pink-500 to-rose-500",
        link: None,
        details: None,
    },
    Project {
        title: "WireGuard VPN System",
        kind: "Network Security",
        date: "Nov 2024",
        summary: "Secure VPN solution using WireGuard with Python automation for tunnel \
                  configuration and performance optimization.",
        stack: &["Cisco", "Python", "WireGuard", "Networking"],
        accent: "from-purple-500 to-fuchsia-500",
        link: None,
        details: None,
    },
    Project {
        title: "Habit Tracking App",
        kind: "Mobile / Web App",
        date: "2024",
        summary: "A simple and clean habit tracker that helps users build consistency with \
                  daily routines.",
        stack: &["React", "TypeScript", "CSS"],
        accent: "from-emerald-500 to-teal-500",
        link: Some("https://github.com/sanahafeez9t9/HabitTrackingApp"),
        details: Some(
            "This project lets users create, update, and monitor daily habits with progress \
             visualization and a friendly UI, focusing on usability and motivation.",
        ),
    },
    Project {
        title: "Personal Portfolio Website",
        kind: "Web Portfolio",
        date: "2025",
        summary: "My personal portfolio, showcasing projects, skills, and a live Instagram \
                  section.",
        stack: &["Rust", "Leptos", "Tailwind CSS", "Axum"],
        accent: "from-rose-500 to-purple-500",
        link: Some("https://github.com/sanahafeez9t9/My_Portfolio"),
        details: Some(
            "This responsive portfolio highlights my design, development, and marketing skills \
             with themed sections, a contact form, and custom Instagram embeds.",
        ),
    },
];

pub struct Skill {
    pub name: &'static str,
    pub icon: &'static str,
    pub tint: &'static str,
}

pub struct SkillGroup {
    pub title: &'static str,
    pub badge: &'static str,
    pub accent: &'static str,
    pub skills: &'static [Skill],
}

pub const SKILL_GROUPS: [SkillGroup; 2] = [
    SkillGroup {
        title: "Design & Creative Tools",
        badge: "🎨",
        accent: "from-pink-500 to-rose-500",
        skills: &[
            Skill {
                name: "Figma",
                icon: "devicon-figma-plain",
                tint: "text-purple-500",
            },
            Skill {
                name: "Adobe XD",
                icon: "devicon-xd-plain",
                tint: "text-pink-500",
            },
            Skill {
                name: "Canva",
                icon: "devicon-canva-original",
                tint: "text-blue-500",
            },
            Skill {
                name: "Photoshop",
                icon: "devicon-photoshop-plain",
                tint: "text-blue-600",
            },
        ],
    },
    SkillGroup {
        title: "Programming Languages",
        badge: "</>",
        accent: "from-purple-500 to-fuchsia-500",
        skills: &[
            Skill {
                name: "Python",
                icon: "devicon-python-plain",
                tint: "text-yellow-500",
            },
            Skill {
                name: "JavaScript",
                icon: "devicon-javascript-plain",
                tint: "text-yellow-400",
            },
            Skill {
                name: "Java",
                icon: "devicon-java-plain",
                tint: "text-orange-500",
            },
            Skill {
                name: "C++",
                icon: "devicon-cplusplus-plain",
                tint: "text-blue-500",
            },
            Skill {
                name: "HTML",
                icon: "devicon-html5-plain",
                tint: "text-orange-600",
            },
            Skill {
                name: "CSS",
                icon: "devicon-css3-plain",
                tint: "text-blue-600",
            },
        ],
    },
];

pub struct Certification {
    pub title: &'static str,
    pub icon: &'static str,
    pub accent: &'static str,
}

pub const CERTIFICATIONS: [Certification; 2] = [
    Certification {
        title: "MEAN Stack Development",
        icon: "devicon-mongodb-plain",
        accent: "from-green-500 to-teal-500",
    },
    Certification {
        title: "UI/UX Design",
        icon: "devicon-figma-plain",
        accent: "from-pink-500 to-purple-500",
    },
];

pub struct ContactChannel {
    pub label: &'static str,
    pub value: &'static str,
    pub href: Option<&'static str>,
    pub icon: &'static str,
}

pub const CONTACT_CHANNELS: [ContactChannel; 5] = [
    ContactChannel {
        label: "Email",
        value: "sanahafeez8oct@gmail.com",
        href: Some("mailto:sanahafeez8oct@gmail.com"),
        icon: "✉️",
    },
    ContactChannel {
        label: "Phone",
        value: "+92 314 3707610",
        href: Some("tel:+923143707610"),
        icon: "📞",
    },
    ContactChannel {
        label: "GitHub",
        value: "sanahafeez9t9",
        href: Some("https://github.com/sanahafeez9t9"),
        icon: "🐙",
    },
    ContactChannel {
        label: "LinkedIn",
        value: "sanahafeez",
        href: Some("https://www.linkedin.com/in/sana-hafeez-839599361/"),
        icon: "💼",
    },
    ContactChannel {
        label: "Location",
        value: "Abbottabad, Pakistan",
        href: None,
        icon: "📍",
    },
];

pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        label: "GitHub",
        href: "https://github.com/sanahafeez9t9",
        icon: "devicon-github-original",
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/sana-hafeez-839599361/",
        icon: "devicon-linkedin-plain",
    },
    SocialLink {
        label: "Email",
        href: "mailto:sanahafeez8oct@gmail.com",
        icon: "✉",
    },
];

pub const INSTAGRAM_HANDLE: &str = "@sana_zi9t9";
pub const INSTAGRAM_PROFILE: &str = "https://www.instagram.com/sana_zi9t9";

/// One embedded Instagram post; `url` is the post permalink the embed script
/// resolves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedRef {
    pub url: String,
}

/// Embed list from `content/instagram.json`. A missing or malformed file
/// yields an empty list, which the Instagram section renders as a hint to
/// configure it.
pub static INSTAGRAM_EMBEDS: LazyLock<Vec<EmbedRef>> = LazyLock::new(|| {
    Assets::get("instagram.json")
        .and_then(|file| serde_json::from_slice(&file.data).ok())
        .unwrap_or_default()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instagram_embed_list_parses() {
        let embeds = &*INSTAGRAM_EMBEDS;
        assert!(!embeds.is_empty());
        assert!(embeds
            .iter()
            .all(|e| e.url.starts_with("https://www.instagram.com/")));
    }

    #[test]
    fn embed_refs_round_trip_as_plain_urls() {
        let parsed: Vec<EmbedRef> =
            serde_json::from_str(r#"[{"url": "https://www.instagram.com/p/ABC123/"}]"#)
                .expect("embed list should deserialize");
        assert_eq!(parsed[0].url, "https://www.instagram.com/p/ABC123/");
    }
}
