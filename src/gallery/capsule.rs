use std::collections::HashMap;

use super::carousel::MediaItem;
use super::GalleryKind;

pub trait AttributeSource {
    fn attribute(&self, name: &str) -> Option<String>;
}

impl AttributeSource for HashMap<&str, &str> {
    fn attribute(&self, name: &str) -> Option<String> {
        self.get(name).map(|value| value.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl AttributeSource for web_sys::Element {
    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tag {
    pub label: String,
    highlighted: bool,
}

impl Tag {
    fn new(label: &str, allow_list: &[&str]) -> Self {
        let lowered = label.to_lowercase();
        Self {
            label: label.to_string(),
            highlighted: allow_list.iter().any(|entry| *entry == lowered),
        }
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    pub fn class_name(&self) -> String {
        if !self.highlighted {
            return "tag".to_string();
        }
        let slug = self
            .label
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-");
        format!("tag tag-{slug}")
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExternalLink {
    pub id: &'static str,
    pub label: &'static str,
    pub href: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Capsule {
    pub title: String,
    pub paragraphs: Vec<String>,
    pub tags: Vec<Tag>,
    pub media: Vec<MediaItem>,
    pub links: Vec<ExternalLink>,
}

impl Capsule {
    pub fn load(kind: GalleryKind, source: &impl AttributeSource) -> Self {
        let read = |field: &str| {
            let name = format!("{}{field}", kind.attribute_prefix());
            let value = source.attribute(&name);
            if value.is_none() && matches!(field, "title" | "images") {
                tracing::debug!("gallery: capsule has no {name}");
            }
            value.unwrap_or_default()
        };

        let title = read("title").trim().to_string();
        let paragraphs = split_paragraphs(&read("description"));
        let tags = split_list(&read("tags"))
            .iter()
            .map(|label| Tag::new(label, kind.highlighted_tags()))
            .collect();

        let mut media = Vec::new();
        if kind == GalleryKind::Projects {
            let video = read("video").trim().to_string();
            if !video.is_empty() {
                media.push(MediaItem::Video(video));
            }
        }
        media.extend(split_list(&read("images")).into_iter().map(MediaItem::Image));

        let links = kind
            .links()
            .iter()
            .filter_map(|&(field, id, label)| {
                let href = read(field).trim().to_string();
                (!href.is_empty()).then_some(ExternalLink { id, label, href })
            })
            .collect();

        Self {
            title,
            paragraphs,
            tags,
            media,
            links,
        }
    }
}

fn split_paragraphs(raw: &str) -> Vec<String> {
    raw.split('|')
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty())
        .map(str::to_string)
        .collect()
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}
