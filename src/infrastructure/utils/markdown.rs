use pulldown_cmark::{html, Options, Parser};
use ammonia::{Builder, UrlRelative};

/// Renders a post body to sanitized HTML. Relative URLs stay intact
/// because gallery and thumbnail assets are same-origin paths like
/// `/1.png`.
pub fn render_post_body(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::all());

    let mut raw_html = String::with_capacity(markdown.len() * 2);
    html::push_html(&mut raw_html, parser);

    Builder::default()
        .link_rel(Some("nofollow noopener noreferrer"))
        .url_relative(UrlRelative::PassThrough)
        .clean(&raw_html)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings_render_as_html() {
        let html = render_post_body("## Introduction\n\nBody text.");
        assert!(html.contains("<h2>Introduction</h2>"));
        assert!(html.contains("<p>Body text.</p>"));
    }

    #[test]
    fn script_tags_are_stripped() {
        let html = render_post_body("hello <script>alert(1)</script>");
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn same_origin_images_survive_sanitization() {
        let html = render_post_body("![diagram](/diagrams/flow.png)");
        assert!(html.contains("src=\"/diagrams/flow.png\""));
    }

    #[test]
    fn links_get_rel_attributes() {
        let html = render_post_body("[site](https://example.com)");
        assert!(html.contains("nofollow"));
    }
}
