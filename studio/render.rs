/// Template renderer for the studio's single page.
///
/// The page lives in `studio/assets/studio.html` with `{{TOKEN}}`
/// placeholders, loaded at compile time. The architecture description and
/// default rendering options are injected as JSON so the client can lay
/// out the diagram without a bootstrap request.

use glyph_nn::network::arch;
use glyph_nn::VizOptions;

const TEMPLATE: &str = include_str!("assets/studio.html");

/// Renders the index page with all placeholders substituted.
pub fn render_index() -> String {
    let arch_json = serde_json::to_string(&arch::layers())
        .expect("architecture description serializes");
    let options_json = serde_json::to_string(&VizOptions::default())
        .expect("default options serialize");

    let html = TEMPLATE
        .replace("{{ARCH_JSON}}", &arch_json)
        .replace("{{DEFAULT_OPTIONS}}", &options_json);

    blank_remaining(html)
}

/// Replaces any `{{UPPERCASE_TOKEN}}` that wasn't substituted with an
/// empty string, so a missed token produces a clean page rather than
/// leaking template markup to the browser.
fn blank_remaining(mut html: String) -> String {
    while let Some(start) = html.find("{{") {
        if let Some(end) = html[start..].find("}}") {
            let abs_end = start + end + 2;
            html.replace_range(start..abs_end, "");
        } else {
            break;
        }
    }
    html
}
