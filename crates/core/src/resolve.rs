//! Content-resolution helpers for the catalog.
//!
//! Pure lookups and rewrites used by the detail view: find a record by id,
//! pull the one labeled documentation link out of rich-text details, and
//! turn a video share link into its embeddable form. Absence is a normal
//! outcome everywhere here; nothing in this module fails.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::types::{ProductId, ProductRecord};

/// Video host whose share links are rewritten to embed form.
const VIDEO_HOST: &str = "loom.com";

/// Matches a markdown link labeled exactly "Written Instructions".
///
/// This is a literal label match, not a general link extractor: only that
/// one labeled link is recognized.
static INSTRUCTIONS_LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[Written Instructions\]\(([^)]+)\)").expect("Invalid regex")
});

/// Find the record with the given identifier.
///
/// Identifiers are unique, so the first match is the only match. `None` is
/// the ordinary answer for an id that is not in the catalog.
#[must_use]
pub fn find_product<'a>(id: &ProductId, catalog: &'a [ProductRecord]) -> Option<&'a ProductRecord> {
    catalog.iter().find(|record| &record.id == id)
}

/// Extract the "Written Instructions" link target from rich-text details.
///
/// Returns the first matching link's URL, or `None` when the details carry
/// no such labeled link.
#[must_use]
pub fn instructions_link(details: &str) -> Option<&str> {
    INSTRUCTIONS_LINK_RE
        .captures(details)?
        .get(1)
        .map(|m| m.as_str())
}

/// Rewrite a video share link to its embeddable form.
///
/// `https://loom.com/share/<id>[?sid=<sid>]` becomes
/// `https://loom.com/embed/<id>[?sid=<sid>]`, preserving the optional `sid`
/// parameter. Anything else - other hosts, other paths, extra query
/// parameters, or input that is not a URL at all - passes through
/// unchanged, which also makes the rewrite idempotent.
#[must_use]
pub fn embed_url(raw: &str) -> Cow<'_, str> {
    let Ok(url) = Url::parse(raw) else {
        return Cow::Borrowed(raw);
    };

    let on_video_host = url
        .host_str()
        .is_some_and(|host| host == VIDEO_HOST || host.ends_with(".loom.com"));
    if !on_video_host {
        return Cow::Borrowed(raw);
    }

    let Some(mut segments) = url.path_segments() else {
        return Cow::Borrowed(raw);
    };
    let (Some("share"), Some(share_id), None) =
        (segments.next(), segments.next(), segments.next())
    else {
        return Cow::Borrowed(raw);
    };
    if share_id.is_empty() {
        return Cow::Borrowed(raw);
    }

    // The share pattern carries at most a single sid parameter.
    let sid = match url.query() {
        None => None,
        Some(query) => match query.strip_prefix("sid=") {
            Some(value) if !value.contains('&') => Some(value.to_string()),
            _ => return Cow::Borrowed(raw),
        },
    };

    let mut embed = url.clone();
    embed.set_path(&format!("/embed/{share_id}"));
    match sid {
        Some(sid) => embed.set_query(Some(&format!("sid={sid}"))),
        None => embed.set_query(None),
    }

    Cow::Owned(embed.to_string())
}
