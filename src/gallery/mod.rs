mod capsule;
mod carousel;
mod modal;

use dioxus::prelude::*;

pub use capsule::{AttributeSource, Capsule};
pub use carousel::{Carousel, MediaItem};
pub use modal::GalleryModal;

pub const CAPSULE_SELECTOR: &str = ".game-capsule";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GalleryKind {
    Games,
    Projects,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModalIds {
    pub modal: &'static str,
    pub title: &'static str,
    pub thumbnails: &'static str,
    pub tags: &'static str,
    pub description: &'static str,
}

impl GalleryKind {
    pub fn attribute_prefix(self) -> &'static str {
        match self {
            GalleryKind::Games => "data-game-",
            GalleryKind::Projects => "data-project-",
        }
    }

    pub fn highlighted_tags(self) -> &'static [&'static str] {
        match self {
            GalleryKind::Games => &[
                "level design",
                "programming",
                "narrative",
                "art",
                "audio",
                "game design",
                "systems design",
            ],
            GalleryKind::Projects => &["art", "narrative", "prop design", "manufacturing", "design"],
        }
    }

    pub fn links(self) -> &'static [(&'static str, &'static str, &'static str)] {
        match self {
            GalleryKind::Games => &[
                ("itch", "itchButton", "itch.io"),
                ("doc", "docButton", "Design doc"),
            ],
            GalleryKind::Projects => &[],
        }
    }

    pub fn ids(self) -> ModalIds {
        match self {
            GalleryKind::Games => ModalIds {
                modal: "gameModal",
                title: "gameTitle",
                thumbnails: "thumbnailContainer",
                tags: "gameTags",
                description: "gameDescriptionContainer",
            },
            GalleryKind::Projects => ModalIds {
                modal: "projectModal",
                title: "projectTitle",
                thumbnails: "projectThumbnailContainer",
                tags: "projectTags",
                description: "projectDescriptionContainer",
            },
        }
    }

    fn identifying_fields(self) -> &'static [&'static str] {
        match self {
            GalleryKind::Games => &["title", "images"],
            GalleryKind::Projects => &["title", "images", "video"],
        }
    }

    pub fn detect(source: &impl AttributeSource) -> Option<Self> {
        [GalleryKind::Projects, GalleryKind::Games]
            .into_iter()
            .find(|kind| {
                kind.identifying_fields().iter().any(|field| {
                    source
                        .attribute(&format!("{}{field}", kind.attribute_prefix()))
                        .is_some()
                })
            })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Gallery {
    pub kind: GalleryKind,
    pub capsule: Capsule,
    pub carousel: Carousel<MediaItem>,
}

impl Gallery {
    pub fn open(kind: GalleryKind, mut capsule: Capsule) -> Self {
        let carousel = Carousel::new(std::mem::take(&mut capsule.media));
        Self {
            kind,
            capsule,
            carousel,
        }
    }
}

/// The two modal instances, independent of each other. `None` means closed.
#[derive(Clone, Copy, PartialEq)]
pub struct GalleryModals {
    pub games: Signal<Option<Gallery>>,
    pub projects: Signal<Option<Gallery>>,
}

impl GalleryModals {
    pub fn slot(self, kind: GalleryKind) -> Signal<Option<Gallery>> {
        match kind {
            GalleryKind::Games => self.games,
            GalleryKind::Projects => self.projects,
        }
    }

    pub fn open(self, gallery: Gallery) {
        tracing::debug!(
            "gallery: open {:?} \"{}\" with {} items",
            gallery.kind,
            gallery.capsule.title,
            gallery.carousel.len()
        );
        self.slot(gallery.kind).set(Some(gallery));
    }

    pub fn close(self, kind: GalleryKind) {
        tracing::debug!("gallery: close {kind:?}");
        self.slot(kind).set(None);
    }

    pub fn any_open(self) -> bool {
        self.games.read().is_some() || self.projects.read().is_some()
    }
}

pub fn use_gallery_modals() -> GalleryModals {
    GalleryModals {
        games: use_signal(|| None),
        projects: use_signal(|| None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;
    use std::collections::HashMap;

    thread_local! {
        static HOSTED: Cell<Option<GalleryModals>> = const { Cell::new(None) };
    }

    fn modal_host() -> Element {
        let modals = use_gallery_modals();
        HOSTED.with(|hosted| hosted.set(Some(modals)));
        rsx! {}
    }

    fn capsule_with_images(count: usize) -> Capsule {
        Capsule {
            media: (0..count)
                .map(|index| MediaItem::Image(format!("img/{index}.png")))
                .collect(),
            ..Capsule::default()
        }
    }

    fn cursor(slot: Signal<Option<Gallery>>) -> Option<usize> {
        slot.read().as_ref().map(|open| open.carousel.index())
    }

    #[test]
    fn detects_kind_from_attribute_names() {
        let game: HashMap<&str, &str> = [("data-game-title", "Moth")].into_iter().collect();
        let project: HashMap<&str, &str> =
            [("data-project-images", "a.png")].into_iter().collect();
        let plain: HashMap<&str, &str> = [("data-title", "x")].into_iter().collect();
        assert_eq!(GalleryKind::detect(&game), Some(GalleryKind::Games));
        assert_eq!(GalleryKind::detect(&project), Some(GalleryKind::Projects));
        assert_eq!(GalleryKind::detect(&plain), None);
    }

    #[test]
    fn opening_starts_at_first_item() {
        let capsule = Capsule {
            title: "Props".into(),
            media: vec![
                MediaItem::Video("https://youtu.be/abc".into()),
                MediaItem::Image("a.png".into()),
            ],
            ..Capsule::default()
        };
        let mut gallery = Gallery::open(GalleryKind::Projects, capsule);
        assert_eq!(gallery.carousel.index(), 0);
        assert!(gallery.capsule.media.is_empty());
        assert_eq!(
            gallery.carousel.current(),
            Some(&MediaItem::Video("https://youtu.be/abc".into()))
        );
        gallery.carousel.previous();
        assert_eq!(gallery.carousel.index(), 1);
    }

    #[test]
    fn project_with_only_a_video_is_detected() {
        let project: HashMap<&str, &str> =
            [("data-project-video", "https://youtu.be/abc123")].into_iter().collect();
        let game: HashMap<&str, &str> =
            [("data-game-video", "https://youtu.be/abc123")].into_iter().collect();
        assert_eq!(GalleryKind::detect(&project), Some(GalleryKind::Projects));
        assert_eq!(GalleryKind::detect(&game), None);
    }

    #[test]
    fn modal_kinds_open_and_close_independently() {
        let mut dom = VirtualDom::new(modal_host);
        dom.rebuild_in_place();
        let modals = HOSTED.with(Cell::get).unwrap();

        dom.in_runtime(|| {
            assert!(!modals.any_open());

            modals.open(Gallery::open(GalleryKind::Games, capsule_with_images(3)));
            let mut games = modals.games;
            if let Some(open) = games.write().as_mut() {
                open.carousel.next();
            }
            assert!(modals.any_open());

            modals.open(Gallery::open(GalleryKind::Projects, capsule_with_images(2)));
            assert_eq!(cursor(modals.games), Some(1));
            assert_eq!(cursor(modals.projects), Some(0));
            assert!(modals.any_open());

            modals.close(GalleryKind::Games);
            assert_eq!(cursor(modals.games), None);
            assert_eq!(cursor(modals.projects), Some(0));
            assert!(modals.any_open());

            modals.close(GalleryKind::Projects);
            assert!(!modals.any_open());
        });
    }
}
