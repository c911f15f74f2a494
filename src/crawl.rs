use crate::error::Result;
use regex::Regex;
use reqwest::{Client, Url};
use std::collections::{HashSet, VecDeque};
use std::sync::OnceLock;

fn attribute_urls() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?:href|src)\s*=\s*["']([^"'<>]+)["']"#).expect("valid attribute regex")
    })
}

fn image_path() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\.(?:jpe?g|png)$").expect("valid extension regex"))
}

/// Fetch filter: admits resources whose path carries an image extension.
pub fn is_image_url(url: &Url) -> bool {
    image_path().is_match(url.path())
}

pub fn is_same_origin(a: &Url, b: &Url) -> bool {
    a.scheme() == b.scheme()
        && a.host_str() == b.host_str()
        && a.port_or_known_default() == b.port_or_known_default()
}

/// Pulls `href` and `src` attribute values out of an HTML body and resolves
/// them against the page URL. Values that do not form a URL are dropped.
pub fn extract_links(page: &Url, body: &str) -> Vec<Url> {
    attribute_urls()
        .captures_iter(body)
        .filter_map(|caps| page.join(&caps[1]).ok())
        .collect()
}

/// Breadth-first crawl of the seed's site. Pages on the same origin are
/// fetched and scanned for links; image URLs are recorded instead of fetched.
/// Returns the completed, de-duplicated list of discovered images once the
/// queue drains. The seed itself is never part of the result.
///
/// A page fetch error aborts the crawl and propagates to the caller.
pub async fn crawl_site(client: &Client, seed: &Url) -> Result<Vec<Url>> {
    let mut queue = VecDeque::from([seed.clone()]);
    let mut visited: HashSet<Url> = HashSet::from([seed.clone()]);
    let mut seen_images: HashSet<Url> = HashSet::new();
    let mut images = Vec::new();

    while let Some(page) = queue.pop_front() {
        let response = client.get(page.clone()).send().await?;
        let body = response.text().await?;

        for mut link in extract_links(&page, &body) {
            link.set_fragment(None);
            if !is_same_origin(seed, &link) {
                continue;
            }
            if is_image_url(&link) {
                if &link != seed && seen_images.insert(link.clone()) {
                    images.push(link);
                }
            } else if visited.insert(link.clone()) {
                queue.push_back(link);
            }
        }
    }

    Ok(images)
}
