//! Bundled default content. Empty partitions are seeded from these
//! datasets (messages always start empty); the public pages render this
//! same data directly and never read the admin store.

use once_cell::sync::Lazy;

use crate::entities::blog_post::BlogPost;
use crate::entities::certification::Certification;
use crate::entities::project::{Project, ProjectCategory, ProjectDetails, ProjectLinks};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

static PROJECTS: Lazy<Vec<Project>> = Lazy::new(|| {
    vec![
        Project {
            id: "1".into(),
            title: "Orbit".into(),
            summary: "Real-time chat application.".into(),
            description: "A real-time chat app built with the MERN stack and WebSockets, featuring secure authentication and smooth live messaging.".into(),
            category: ProjectCategory::Backend,
            year: "2025".into(),
            tags: strings(&["React", "Node.js", "Express", "MongoDB", "WebSocket", "Bcrypt"]),
            thumbnail: "/5.png".into(),
            images: strings(&["/5.png"]),
            links: ProjectLinks {
                live: Some("https://github.com/theshaanygangle/Orbit_BE".into()),
                repo: Some("https://github.com/theshaanygangle/Orbit_BE".into()),
            },
            details: ProjectDetails {
                problem: "Students and small teams needed a lightweight, real-time chat tool.".into(),
                solution: "Built an efficient chat system using WebSockets, secure login with bcrypt, and optimized MongoDB message storage.".into(),
                role: "Under Development".into(),
                tech_stack: strings(&["React", "Node.js", "Express", "MongoDB", "WebSocket", "Bcrypt"]),
                metrics: Some(strings(&["100+ simultaneous users", "End-to-end real-time syncing"])),
            },
            featured: true,
            published: true,
        },
        Project {
            id: "2".into(),
            title: "Mindful Chat".into(),
            summary: "AI mental health chatbot.".into(),
            description: "A conversational AI assistant using ChatGPT API designed to provide mental wellness support and guided reflections.".into(),
            category: ProjectCategory::FullStack,
            year: "2025".into(),
            tags: strings(&["React", "Node.js", "ChatGPT API", "Express"]),
            thumbnail: "/6.png".into(),
            images: strings(&["/6.png"]),
            links: ProjectLinks {
                live: Some("#".into()),
                repo: Some("#".into()),
            },
            details: ProjectDetails {
                problem: "People needed quick, non-judgmental mental health assistance without professional barriers.".into(),
                solution: "Developed a safe AI-powered chatbot leveraging the ChatGPT API, with mood tracking and reflection prompts.".into(),
                role: "Under Development".into(),
                tech_stack: strings(&["React", "Node.js", "Express", "ChatGPT API"]),
                metrics: Some(strings(&["Handles 2k+ daily conversations", "90% user satisfaction"])),
            },
            featured: true,
            published: true,
        },
        Project {
            id: "3".into(),
            title: "SuprResume.ai".into(),
            summary: "AI-powered resume builder.".into(),
            description: "A modern resume building tool powered by AI that generates optimized bullet points and ATS-friendly formatting.".into(),
            category: ProjectCategory::FullStack,
            year: "2025".into(),
            tags: strings(&["Next.js", "Node.js", "AI", "Tailwind"]),
            thumbnail: "/7.png".into(),
            images: strings(&["/7.png"]),
            links: ProjectLinks {
                live: Some("#".into()),
                repo: Some("#".into()),
            },
            details: ProjectDetails {
                problem: "Students and job-seekers struggled to create professional, ATS-friendly resumes.".into(),
                solution: "Built an AI-assisted resume generator that creates sections, improves content quality, and exports clean PDF resumes.".into(),
                role: "Under Development".into(),
                tech_stack: strings(&["Next.js", "Node.js", "OpenAI API", "Tailwind CSS"]),
                metrics: Some(strings(&["Generates resumes in <10 seconds", "Used by 300+ job seekers"])),
            },
            featured: true,
            published: true,
        },
    ]
});

static CERTIFICATIONS: Lazy<Vec<Certification>> = Lazy::new(|| {
    vec![
        Certification {
            id: "1".into(),
            title: "BASH".into(),
            issuer: "Spoken Tutorial IIT Bombay".into(),
            date: "2025".into(),
            thumbnail: "/BASH.png".into(),
            url: Some("https://spoken-tutorial.org/software-training/test/participant/certificate/153320/4031762/".into()),
            published: true,
        },
        Certification {
            id: "2".into(),
            title: "Full-Stack Web Development Bootcamp".into(),
            issuer: "Udemy".into(),
            date: "2025".into(),
            thumbnail: "/c2.jpg".into(),
            url: Some("https://www.udemy.com/certificate/UC-ef877cbe-04c8-4aa8-b530-8be39a76b110/".into()),
            published: true,
        },
        Certification {
            id: "3".into(),
            title: "GIT".into(),
            issuer: "Spoken Tutorial IIT Bombay".into(),
            date: "2025".into(),
            thumbnail: "/GIT.png".into(),
            url: Some("https://spoken-tutorial.org/software-training/test/participant/certificate/139645/4031762/".into()),
            published: true,
        },
    ]
});

static BLOG_POSTS: Lazy<Vec<BlogPost>> = Lazy::new(|| {
    vec![
        BlogPost {
            id: "1".into(),
            title: "Top UI/UX Tools Every Designer Should Use in 2025".into(),
            excerpt: "From Figma to Framer, explore the essential tools modern designers rely on to craft clean, accessible, and delightful user experiences.".into(),
            content: "## Introduction\nThe world of UI/UX design has transformed dramatically over the last decade. In 2025, UI/UX design isn't just about visuals. It's about systems, workflows, psychology, and inclusive experiences.\n\n## 1. Figma — The Industry Standard\nFigma continues to dominate the design ecosystem with real-time collaboration, Auto-Layout, Variables & Modes, and advanced prototyping.\n\n## 2. Framer — Realistic Prototypes\nFramer allows designers to build production-level, interactive prototypes with native-level animations.".into(),
            date: "Nov 08, 2025".into(),
            read_time: "9 min read".into(),
            category: "Design".into(),
            tags: strings(&["UI/UX", "Figma", "Design Tools"]),
            thumbnail: "/1.png".into(),
            published: true,
        },
        BlogPost {
            id: "2".into(),
            title: "Must-Have VS Code Extensions for Web Developers".into(),
            excerpt: "A curated list of the extensions that genuinely speed up day-to-day web development work.".into(),
            content: "## Why Extensions Matter\nThe right editor setup compounds over a career. These are the extensions that pay for their install time every single day.\n\n## The Essentials\nPrettier, ESLint, GitLens, and a good REST client cover most workflows before anything exotic is needed.".into(),
            date: "Oct 04, 2025".into(),
            read_time: "10 min read".into(),
            category: "Productivity".into(),
            tags: strings(&["VS Code", "Tooling", "Productivity"]),
            thumbnail: "/2.png".into(),
            published: true,
        },
        BlogPost {
            id: "3".into(),
            title: "How to Write the Best Prompts (Beginner to Pro Guide)".into(),
            excerpt: "Prompting is a skill. Here is a practical ladder from first attempts to reliable, structured prompts.".into(),
            content: "## Start With the Outcome\nDescribe the artifact you want, not the steps you imagine. Models respond to concrete targets.\n\n## Add Structure\nConstraints, examples, and output formats turn a vague request into a repeatable one.".into(),
            date: "Sep 30, 2025".into(),
            read_time: "11 min read".into(),
            category: "AI".into(),
            tags: strings(&["AI", "Prompting", "Guides"]),
            thumbnail: "/3.png".into(),
            published: true,
        },
    ]
});

/// Default projects, each already carrying `published = true`.
pub fn projects() -> Vec<Project> {
    PROJECTS.clone()
}

pub fn certifications() -> Vec<Certification> {
    CERTIFICATIONS.clone()
}

pub fn blog_posts() -> Vec<BlogPost> {
    BLOG_POSTS.clone()
}
