//! HTML rendering of the card page.

use std::fmt::{self, Write};

use bizcard_core::config::{CardConfig, DeliveryPolicy};
use bizcard_core::constants::{CONTACT_FILE_ROUTE, CONTACT_OPEN_ROUTE, PROFILE_IMAGE_ROUTE};
use bizcard_rfc::rfc::link::contact_actions;
use bizcard_rfc::rfc::vcard::ContactRecord;

use super::escape::escape_html;

/// Where the save-contact button points for a policy.
#[must_use]
pub const fn save_contact_href(policy: DeliveryPolicy) -> &'static str {
    match policy {
        DeliveryPolicy::Download => CONTACT_FILE_ROUTE,
        DeliveryPolicy::Handoff => CONTACT_OPEN_ROUTE,
    }
}

/// ## Summary
/// Renders the full card page.
///
/// Optional fields that are absent or blank leave no markup behind.
#[must_use]
pub fn render(card: &CardConfig, image_src: &str, policy: DeliveryPolicy) -> String {
    let mut html = String::with_capacity(2048);
    if let Err(e) = write_page(&mut html, card, image_src, policy) {
        tracing::error!(error = %e, "Failed to render card page");
    }
    html
}

fn write_page(
    html: &mut String,
    card: &CardConfig,
    image_src: &str,
    policy: DeliveryPolicy,
) -> fmt::Result {
    let record = ContactRecord::from(card);
    let name = escape_html(&record.full_name);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    writeln!(html, "<title>{name}</title>")?;
    html.push_str(STYLE);
    html.push_str("</head>\n<body>\n<main class=\"card\">\n");

    writeln!(
        html,
        "<img id=\"profile-image\" class=\"avatar\" src=\"{}\" alt=\"{name}\">",
        escape_html(image_src)
    )?;
    writeln!(
        html,
        "<input id=\"profile-image-input\" type=\"file\" accept=\"image/*\" data-upload=\"{PROFILE_IMAGE_ROUTE}\">"
    )?;
    writeln!(html, "<h1>{name}</h1>")?;

    if let Some(title) = card.title.as_deref().filter(|t| !t.trim().is_empty()) {
        writeln!(html, "<p class=\"title\">{}</p>", escape_html(title))?;
    }
    if let Some(org) = record.organization() {
        writeln!(html, "<p class=\"organization\">{}</p>", escape_html(org))?;
    }
    if let Some(address) = record.address() {
        writeln!(html, "<p class=\"address\">{}</p>", escape_html(&address.street))?;
    }

    html.push_str("<nav class=\"actions\">\n");
    for action in contact_actions(&record) {
        let target = if action.external {
            " target=\"_blank\" rel=\"noopener noreferrer\""
        } else {
            ""
        };
        writeln!(
            html,
            "<a class=\"action\" href=\"{}\"{target}>{}</a>",
            escape_html(&action.href),
            action.kind.label()
        )?;
    }
    html.push_str("</nav>\n");

    writeln!(
        html,
        "<a class=\"save\" href=\"{}\">Save contact</a>",
        save_contact_href(policy)
    )?;

    html.push_str("</main>\n");
    html.push_str(SCRIPT);
    html.push_str("</body>\n</html>\n");

    Ok(())
}

const STYLE: &str = r"<style>
body{margin:0;min-height:100vh;display:flex;align-items:center;justify-content:center;font-family:sans-serif;background:#f1f5f9}
.card{background:#fff;border-radius:1rem;padding:2rem;max-width:22rem;text-align:center;box-shadow:0 4px 24px rgba(0,0,0,.08)}
.avatar{width:8rem;height:8rem;border-radius:50%;object-fit:cover;cursor:pointer}
#profile-image-input{display:none}
.title,.organization,.address{margin:.25rem 0;color:#475569}
.actions{display:flex;flex-wrap:wrap;gap:.5rem;justify-content:center;margin:1.5rem 0}
.action,.save{padding:.5rem 1rem;border-radius:.5rem;text-decoration:none}
.action{background:#e2e8f0;color:#0f172a}
.save{display:inline-block;background:#0f172a;color:#fff}
</style>
";

const SCRIPT: &str = r"<script>
(() => {
  const img = document.getElementById('profile-image');
  const input = document.getElementById('profile-image-input');
  img.addEventListener('click', () => input.click());
  input.addEventListener('change', async () => {
    const file = input.files[0];
    if (!file) return;
    const res = await fetch(input.dataset.upload, {
      method: 'POST',
      headers: { 'Content-Type': file.type },
      body: file,
    });
    if (res.ok) img.src = (await res.json()).src;
  });
})();
</script>
";
