//! HTML templates for the web shell.
//!
//! Maps view-models to markup. Values are escaped on output; the view-models
//! themselves keep them verbatim. The element ids and `data-*` attributes are
//! the contract with `assets/gstore.js`.

use std::fmt::Write;

use super::{DetailView, LoadFailureView, MainView};

/// Escapes text for use in element content and double-quoted attributes.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Renders the featured panel and the app grid.
#[must_use]
pub fn main_view_html(view: &MainView) -> String {
    let mut output = String::new();

    if let Some(featured) = &view.featured {
        let _ = writeln!(output, r#"<section class="featured" id="featuredApp">"#);
        let _ = writeln!(
            output,
            r#"  <img src="{}" class="featured-icon" alt="{} logo">"#,
            escape(&featured.icon_url),
            escape(&featured.name)
        );
        let _ = writeln!(output, r#"  <div class="featured-body">"#);
        let _ = writeln!(output, "    <h1>{}</h1>", escape(&featured.name));
        let _ = writeln!(
            output,
            r#"    <p class="lead">{}</p>"#,
            escape(&featured.description)
        );
        let _ = writeln!(
            output,
            r#"    <a href="{}" class="btn btn-primary">View Details</a>"#,
            escape(&featured.link)
        );
        let _ = writeln!(output, "  </div>");
        let _ = writeln!(output, "</section>");
    }

    let _ = writeln!(output, r#"<div class="app-grid" id="appListGrid">"#);
    for tile in &view.tiles {
        let _ = writeln!(
            output,
            r#"  <a href="{}" class="app-card">"#,
            escape(&tile.link)
        );
        let _ = writeln!(
            output,
            r#"    <img src="{}" alt="{} icon">"#,
            escape(&tile.icon_url),
            escape(&tile.name)
        );
        let _ = writeln!(
            output,
            r#"    <h5>{} <span class="muted">v{}</span></h5>"#,
            escape(&tile.name),
            escape(&tile.version)
        );
        let _ = writeln!(
            output,
            r#"    <p class="muted">{}</p>"#,
            escape(&tile.description)
        );
        let _ = writeln!(output, "  </a>");
    }
    let _ = writeln!(output, "</div>");

    output
}

/// Renders the detail page of one app.
#[must_use]
pub fn detail_view_html(view: &DetailView) -> String {
    let mut output = String::new();

    let _ = writeln!(
        output,
        r#"<a href="{}" class="btn btn-light">&larr; Back to All Apps</a>"#,
        escape(&view.back_link)
    );
    let _ = writeln!(output, r#"<section class="app-header">"#);
    let _ = writeln!(
        output,
        r#"  <img src="{}" class="app-icon" alt="{} icon">"#,
        escape(&view.icon_url),
        escape(&view.name)
    );
    let _ = writeln!(output, "  <h1>{}</h1>", escape(&view.name));
    let _ = writeln!(
        output,
        r#"  <p class="muted">By {} | Category: {}</p>"#,
        escape(&view.publisher),
        escape(&view.category)
    );
    let _ = writeln!(output, "  <p>{}</p>", escape(&view.long_description));
    let _ = writeln!(
        output,
        "  <p><strong>Version:</strong> {}</p>",
        escape(&view.version)
    );
    if let Some(license) = &view.license {
        let _ = writeln!(
            output,
            "  <p><strong>License:</strong> {}</p>",
            escape(license)
        );
    }
    if let Some(homepage) = &view.homepage {
        let _ = writeln!(
            output,
            r#"  <a href="{}" target="_blank" class="btn btn-light">Homepage</a>"#,
            escape(homepage)
        );
    }
    if let Some(download) = &view.download {
        let _ = writeln!(
            output,
            r#"  <a href="{}" target="_blank" class="btn btn-light">Download</a>"#,
            escape(download)
        );
    }
    let _ = writeln!(
        output,
        r#"  <button class="btn btn-primary" data-app-name="{}">Install App</button>"#,
        escape(&view.install.app_name)
    );
    let _ = writeln!(output, "</section>");

    let _ = writeln!(output, "<h3>Gallery</h3>");
    let _ = writeln!(output, r#"<div class="gallery">"#);
    for tile in &view.gallery {
        let _ = writeln!(output, r#"  <figure class="gallery-item">"#);
        let _ = writeln!(
            output,
            r#"    <img src="{src}" class="gallery-image" alt="{title}" data-img-src="{src}" data-img-title="{title}">"#,
            src = escape(&tile.image_url),
            title = escape(&tile.title)
        );
        let _ = writeln!(
            output,
            "    <figcaption>{}</figcaption>",
            escape(&tile.title)
        );
        let _ = writeln!(output, "  </figure>");
    }
    let _ = writeln!(output, "</div>");

    output
}

/// Renders the load failure message that replaces the app grid.
#[must_use]
pub fn load_failure_html(view: &LoadFailureView) -> String {
    format!(
        "<div class=\"app-grid\" id=\"appListGrid\"><p class=\"text-danger\">{}</p></div>\n",
        escape(&view.message)
    )
}
