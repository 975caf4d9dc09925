use dioxus::prelude::*;

use super::{GalleryKind, GalleryModals, MediaItem};
use crate::video::{embed_url, thumbnail_url};

const PLAYER_PERMISSIONS: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

#[component]
pub fn GalleryModal(kind: GalleryKind, modals: GalleryModals) -> Element {
    let mut gallery = modals.slot(kind);
    let Some(current) = gallery() else {
        return rsx! {};
    };
    let ids = kind.ids();
    let close = move || modals.close(kind);
    let active = current.carousel.index();

    rsx! {
        div { id: ids.modal, class: "modal active",
            div {
                class: "modal-overlay",
                onclick: move |event| {
                    event.stop_propagation();
                    close();
                },
            }
            div { class: "modal-content",
                button {
                    r#type: "button",
                    class: "modal-close",
                    aria_label: "Close",
                    onclick: move |event| {
                        event.stop_propagation();
                        close();
                    },
                    "×"
                }
                h2 { id: ids.title, class: "modal-title", "{current.capsule.title}" }
                div { class: if kind == GalleryKind::Projects { "project-main-media" } else { "game-main-media" },
                    if let Some(item) = current.carousel.current() {
                        MainMedia { kind, item: item.clone() }
                    }
                    button {
                        r#type: "button",
                        class: "nav-arrow left-arrow",
                        aria_label: "Previous",
                        onclick: move |_| {
                            if let Some(open) = gallery.write().as_mut() {
                                open.carousel.previous();
                            }
                        },
                        "<"
                    }
                    button {
                        r#type: "button",
                        class: "nav-arrow right-arrow",
                        aria_label: "Next",
                        onclick: move |_| {
                            if let Some(open) = gallery.write().as_mut() {
                                open.carousel.next();
                            }
                        },
                        ">"
                    }
                }
                div { id: ids.thumbnails, class: "thumbnail-strip",
                    for (index, item) in current.carousel.items().iter().enumerate() {
                        Thumbnail {
                            key: "{index}",
                            kind,
                            item: item.clone(),
                            active: index == active,
                            onselect: move |_| {
                                if let Some(open) = gallery.write().as_mut() {
                                    open.carousel.jump(index);
                                }
                            },
                        }
                    }
                }
                div { id: ids.tags, class: "modal-tags",
                    for tag in current.capsule.tags.iter() {
                        span { class: tag.class_name(), "{tag.label}" }
                    }
                }
                div { id: ids.description, class: "modal-description",
                    for paragraph in current.capsule.paragraphs.iter() {
                        p { class: "modal-paragraph", "{paragraph}" }
                    }
                }
                if !current.capsule.links.is_empty() {
                    div { class: "modal-links",
                        for link in current.capsule.links.iter() {
                            a {
                                id: link.id,
                                class: "modal-button",
                                href: "{link.href}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "{link.label}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn MainMedia(kind: GalleryKind, item: MediaItem) -> Element {
    match item {
        MediaItem::Video(source) => rsx! {
            iframe {
                class: "main-video",
                src: embed_url(&source),
                width: "100%",
                height: "100%",
                allow: PLAYER_PERMISSIONS,
                allowfullscreen: true,
            }
        },
        MediaItem::Image(source) => {
            let (id, alt) = match kind {
                GalleryKind::Games => ("mainGameImage", "Screenshot"),
                GalleryKind::Projects => ("mainProjectImage", "Project image"),
            };
            rsx! {
                img { id, class: "main-image", src: "{source}", alt }
            }
        }
    }
}

#[component]
fn Thumbnail(
    kind: GalleryKind,
    item: MediaItem,
    active: bool,
    onselect: EventHandler<MouseEvent>,
) -> Element {
    let class = if active { "thumbnail active" } else { "thumbnail" };
    match (kind, item) {
        (GalleryKind::Games, item) => rsx! {
            img {
                class,
                src: "{item.source()}",
                alt: "Screenshot",
                onclick: move |event| onselect.call(event),
            }
        },
        (GalleryKind::Projects, MediaItem::Video(source)) => rsx! {
            div {
                class: "{class} carousel-thumb video-thumb",
                onclick: move |event| onselect.call(event),
                if let Some(thumbnail) = thumbnail_url(&source) {
                    img { src: thumbnail, alt: "Video thumbnail" }
                }
                div { class: "play-icon", "▶" }
            }
        },
        (GalleryKind::Projects, MediaItem::Image(source)) => rsx! {
            div {
                class: "{class} carousel-thumb",
                onclick: move |event| onselect.call(event),
                img { src: "{source}", alt: "Project image" }
            }
        },
    }
}
