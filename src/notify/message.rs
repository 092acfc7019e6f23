use chrono::{DateTime, Utc};
use url::Url;

use crate::models::{Listing, Purpose};

/// Public site that relative listing links resolve against
pub const SITE_BASE_URL: &str = "https://www.bayut.com";

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

/// Render one listing as a WhatsApp message.
///
/// The heading and timestamp lines are always present; every other line is
/// dropped when its value is empty. Community name is labelled "Area:" like
/// the size line.
pub fn format_message(listing: &Listing, purpose: Purpose, now: DateTime<Utc>) -> String {
    let title = listing
        .first_text(&["/title", "/headline"])
        .unwrap_or_else(|| "Listing".to_string());
    let price = listing
        .first_text(&["/price", "/price_display"])
        .unwrap_or_else(|| "N/A".to_string());
    let area = listing.text("/area").unwrap_or_default();
    let community = listing.text("/full/cluster/name").unwrap_or_default();
    let agent = listing.text("/agency/name").unwrap_or_default();
    let link = listing
        .first_text(&["/url", "/permalink"])
        .map(|link| absolute_link(&link))
        .unwrap_or_default();

    let mut lines = vec![format!("{}: {}", purpose.label(), title)];
    for (label, value) in [
        ("Price", price),
        ("Area", area),
        ("Area", community),
        ("Agent", agent),
        ("Link", link),
    ] {
        if !value.trim().is_empty() {
            lines.push(format!("{}: {}", label, value));
        }
    }
    lines.push(now.format(TIMESTAMP_FORMAT).to_string());

    lines.join("\n")
}

/// Absolute http(s) links with a host pass through untouched. Anything else
/// is treated as a path on the public site, so the host never changes.
pub fn absolute_link(link: &str) -> String {
    if let Ok(url) = Url::parse(link) {
        if matches!(url.scheme(), "http" | "https") && url.host().is_some() {
            return link.to_string();
        }
    }

    if link.starts_with('/') {
        format!("{}{}", SITE_BASE_URL, link)
    } else {
        format!("{}/{}", SITE_BASE_URL, link)
    }
}
