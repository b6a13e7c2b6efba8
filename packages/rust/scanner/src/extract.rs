//! Similar-item extraction from recommendation page markup.
//!
//! Each `div.similar_grid_item` container yields one [`GameItem`]: the appid
//! and display name come from the store link's path, the category from the
//! nearest ancestor `div` carrying an id attribute.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;
use url::Url;

use similarscan_shared::{AppId, GameItem};

/// `/app/<digits>/<name>` segment inside a store link.
static APP_HREF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"app/(\d+)(?:/([^/?#]+))?").unwrap());

/// Base for resolving relative store links.
static STORE_BASE: LazyLock<Url> =
    LazyLock::new(|| Url::parse("https://store.steampowered.com/").unwrap());

/// Extract every similar-item container from one page of markup.
///
/// Items come back in document order, all at the given traversal depth.
/// Markup missing expected structure yields fewer (or zero) items, never
/// an error.
pub fn similar_items(html: &str, depth: u32) -> Vec<GameItem> {
    let doc = Html::parse_document(html);
    let item_sel = Selector::parse("div.similar_grid_item").unwrap();
    let link_sel = Selector::parse("a[href]").unwrap();

    let mut items = Vec::new();
    for container in doc.select(&item_sel) {
        let Some(href) = container
            .select(&link_sel)
            .next()
            .and_then(|a| a.value().attr("href"))
        else {
            debug!("similar item without a store link, skipping");
            continue;
        };

        let href = resolve_href(href);
        let (appid, name) = parse_href(&href);
        let category = normalize_category(parent_div_id(container));

        items.push(GameItem {
            appid,
            href,
            name,
            depth,
            category,
        });
    }

    items
}

/// Resolve a possibly-relative store link to an absolute URL.
fn resolve_href(href: &str) -> String {
    match STORE_BASE.join(href) {
        Ok(url) => url.to_string(),
        Err(_) => href.to_string(),
    }
}

/// Pull the appid and display name out of a store link.
///
/// The appid is the digit run after the `/app/` path segment; the name is
/// the segment after it. With no digit run the appid is absent (not an
/// error) and the name falls back to the link's trailing path segment.
fn parse_href(href: &str) -> (Option<AppId>, String) {
    if let Some(caps) = APP_HREF_RE.captures(href) {
        let appid = caps[1].parse().ok().map(AppId);
        let name = caps
            .get(2)
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| trailing_segment(href));
        (appid, name)
    } else {
        (None, trailing_segment(href))
    }
}

/// Last non-empty path segment of a link, query and fragment stripped.
fn trailing_segment(href: &str) -> String {
    let path = href
        .split(['?', '#'])
        .next()
        .unwrap_or(href)
        .trim_end_matches('/');
    path.rsplit('/').next().unwrap_or("").to_string()
}

/// Nearest ancestor `div` with a non-empty id, walking parent pointers
/// closest-first up to the document root.
fn parent_div_id(el: ElementRef<'_>) -> Option<&str> {
    for node in el.ancestors() {
        let Some(ancestor) = ElementRef::wrap(node) else {
            continue;
        };
        if ancestor.value().name() == "div" {
            if let Some(id) = ancestor.value().attr("id") {
                if !id.is_empty() {
                    return Some(id);
                }
            }
        }
    }
    None
}

/// Strip trailing digits from a container id so numbered sibling tabs
/// collapse to one category (`tab-FreeGames2` → `tab-FreeGames`).
/// Idempotent; `None` maps to the empty string.
pub fn normalize_category(raw: Option<&str>) -> String {
    raw.map(|id| id.trim_end_matches(|c: char| c.is_ascii_digit()).to_string())
        .unwrap_or_default()
}
