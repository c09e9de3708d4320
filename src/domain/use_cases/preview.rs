//! Preview rendering for in-progress drafts. Takes the injected draft
//! directly, never a store lookup, so unsaved edits show exactly what a
//! visitor would see after saving.

use std::fmt::Write;

use crate::entities::blog_post::BlogPost;
use crate::entities::certification::Certification;
use crate::entities::project::Project;
use crate::use_cases::editor::EditorDraft;
use crate::utils::markdown::render_post_body;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewMode {
    /// Summary card, as listings show it.
    Card,
    /// Full detail page.
    Detail,
}

pub fn render(draft: &EditorDraft, mode: PreviewMode) -> String {
    match (draft, mode) {
        (EditorDraft::Project(p), PreviewMode::Card) => project_card(p),
        (EditorDraft::Project(p), PreviewMode::Detail) => project_detail(p),
        (EditorDraft::Blog(b), PreviewMode::Card) => blog_card(b),
        (EditorDraft::Blog(b), PreviewMode::Detail) => blog_detail(b),
        // Certifications only have a card rendering.
        (EditorDraft::Cert(c), _) => cert_card(c),
    }
}

pub fn project_card(p: &Project) -> String {
    let mut out = String::new();
    if p.featured {
        out.push_str("[Featured]\n");
    }
    let _ = writeln!(out, "{} ({})", p.title, p.year);
    let _ = writeln!(out, "{} | {}", p.category, p.thumbnail);
    let _ = writeln!(out, "{}", p.summary);
    if !p.tags.is_empty() {
        let _ = writeln!(out, "Tags: {}", p.tags.join(", "));
    }
    out
}

pub fn project_detail(p: &Project) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# {}", p.title);
    let _ = writeln!(out, "{} · {}", p.category, p.year);
    if let Some(hero) = p.hero_image() {
        let _ = writeln!(out, "Hero: {hero}");
    }
    let _ = writeln!(out, "\n{}", p.description);
    if !p.details.problem.is_empty() {
        let _ = writeln!(out, "\n## The Problem\n{}", p.details.problem);
    }
    if !p.details.solution.is_empty() {
        let _ = writeln!(out, "\n## The Solution\n{}", p.details.solution);
    }
    if !p.details.tech_stack.is_empty() {
        let _ = writeln!(out, "\nTech Stack: {}", p.details.tech_stack.join(", "));
    }
    if !p.details.role.is_empty() {
        let _ = writeln!(out, "Role: {}", p.details.role);
    }
    if let Some(metrics) = &p.details.metrics {
        for metric in metrics {
            let _ = writeln!(out, "- {metric}");
        }
    }
    if let Some(live) = &p.links.live {
        let _ = writeln!(out, "Live: {live}");
    }
    if let Some(repo) = &p.links.repo {
        let _ = writeln!(out, "Repo: {repo}");
    }
    for image in p.images.iter().skip(1) {
        let _ = writeln!(out, "Gallery: {image}");
    }
    out
}

pub fn blog_card(b: &BlogPost) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", b.title);
    let _ = writeln!(out, "{} · {} · {}", b.date, b.read_time, b.category);
    let _ = writeln!(out, "{} | {}", b.thumbnail, b.excerpt);
    if !b.tags.is_empty() {
        let _ = writeln!(out, "Tags: {}", b.tags.join(", "));
    }
    out
}

/// The markdown body goes through the sanitized HTML pipeline, the same
/// rendering the public detail page uses.
pub fn blog_detail(b: &BlogPost) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# {}", b.title);
    let _ = writeln!(out, "{} · {} · {}", b.date, b.read_time, b.category);
    if !b.tags.is_empty() {
        let _ = writeln!(out, "Tags: {}", b.tags.join(", "));
    }
    let _ = writeln!(out, "\n{}", render_post_body(&b.content));
    out
}

pub fn cert_card(c: &Certification) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", c.title);
    let _ = writeln!(out, "{} · {}", c.issuer, c.date);
    let _ = writeln!(out, "{}", c.thumbnail);
    if let Some(url) = &c.url {
        let _ = writeln!(out, "Verify: {url}");
    }
    out
}
