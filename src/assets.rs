//! Collection artwork with ordered fallbacks.
//!
//! Each collection lists candidate image URLs tried in order; once they are
//! exhausted an inline SVG placeholder is served, which always renders.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collection {
    pub id: &'static str,
    pub name: &'static str,
    pub images: &'static [&'static str],
    pub color: &'static str,
    pub background: &'static str,
}

pub static COLLECTIONS: [Collection; 3] = [
    Collection {
        id: "grungy-geezers",
        name: "Grungy Geezers",
        images: &[
            "/images/Grungy Geezer 1st Spot.png",
            "https://i.imgur.com/XuKXxmE.jpg",
        ],
        color: "#c10000",
        background: "#222",
    },
    Collection {
        id: "daku-motokos",
        name: "Daku Motokos",
        images: &[
            "/images/Daku Motokos 2nd Spot.png",
            "https://i.imgur.com/yknACVk.jpg",
        ],
        color: "#8364e2",
        background: "#222",
    },
    Collection {
        id: "ic-zombies",
        name: "IC Zombies",
        images: &[
            "/images/IC Zombies 3rd spot .png",
            "https://i.imgur.com/HwSEJ22.jpg",
        ],
        color: "#c10000",
        background: "#111",
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource<'a> {
    Candidate(&'a str),
    Placeholder(String),
}

impl Collection {
    pub fn placeholder(&self) -> String {
        placeholder_svg(self.name, self.color, self.background)
    }

    /// Source to show after `attempt` failed loads.
    pub fn image_source(&self, attempt: usize) -> ImageSource<'static> {
        next_source(self.images, attempt, || self.placeholder())
    }
}

/// Pure fallback step: the `attempt`-th candidate, or the placeholder once
/// every candidate has been tried.
pub fn next_source<'a>(
    candidates: &[&'a str],
    attempt: usize,
    placeholder: impl FnOnce() -> String,
) -> ImageSource<'a> {
    match candidates.get(attempt).copied() {
        Some(url) => ImageSource::Candidate(url),
        None => ImageSource::Placeholder(placeholder()),
    }
}

pub fn placeholder_svg(name: &str, color: &str, background: &str) -> String {
    format!(
        concat!(
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="200" height="200" viewBox="0 0 200 200">"##,
            r##"<rect width="200" height="200" fill="{background}"/>"##,
            r##"<text x="100" y="95" font-family="sans-serif" font-size="18" fill="{color}" text-anchor="middle">{name}</text>"##,
            r##"<text x="100" y="120" font-family="sans-serif" font-size="10" fill="#999" text-anchor="middle">Collection image placeholder</text>"##,
            "</svg>"
        ),
        background = escape_xml(background),
        color = escape_xml(color),
        name = escape_xml(name),
    )
}

fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[derive(Debug, Clone, Serialize)]
pub struct CollectionView {
    pub id: &'static str,
    pub name: &'static str,
    pub image_candidates: Vec<&'static str>,
    pub placeholder_svg: String,
}

impl From<&Collection> for CollectionView {
    fn from(collection: &Collection) -> Self {
        CollectionView {
            id: collection.id,
            name: collection.name,
            image_candidates: collection.images.to_vec(),
            placeholder_svg: collection.placeholder(),
        }
    }
}

pub fn collection_views() -> Vec<CollectionView> {
    COLLECTIONS.iter().map(CollectionView::from).collect()
}

pub fn find_collection(id: &str) -> Option<&'static Collection> {
    COLLECTIONS.iter().find(|collection| collection.id == id)
}
