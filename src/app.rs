use dioxus::prelude::*;

use crate::config::{use_site_config, SiteConfig};
use crate::gallery::{use_gallery_modals, GalleryKind, GalleryModal};
#[cfg(target_arch = "wasm32")]
use crate::gallery::{Capsule, Gallery, GalleryModals, CAPSULE_SELECTOR};
use crate::router::{use_page_state, ContentView, PageKey, PageState};

const MAIN_CSS: Asset = asset!("/assets/main.css");
const CONTENT_ID: &str = "content";

const NAV_LINKS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("games", "Games"),
    ("projects", "Projects"),
    ("contact", "Contact"),
];

#[component]
pub fn App() -> Element {
    let config_resource = use_site_config();
    let Some(config) = config_resource() else {
        return rsx! {
            document::Title { "Portfolio" }
            div { class: "page loading",
                h1 { "Loading..." }
            }
        };
    };

    rsx! {
        document::Title { "Portfolio" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        SiteShell { config }
    }
}

#[component]
fn SiteShell(config: SiteConfig) -> Element {
    use_context_provider(|| config.clone());
    let pages = use_page_state();
    use_context_provider(|| pages);
    let modals = use_gallery_modals();

    #[cfg(target_arch = "wasm32")]
    {
        let mut listeners = use_signal(|| None::<ShellListeners>);
        let install_config = config.clone();
        use_effect(move || {
            if listeners.peek().is_some() {
                return;
            }
            let installed = ShellListeners::install(install_config.clone(), pages, modals);
            if installed.is_none() {
                tracing::warn!("app: failed to install document listeners");
            }
            listeners.set(installed);
            pages.open_current(&install_config);
        });

        crate::grid::use_grid_corrector(CONTENT_ID);

        let contact_config = config.clone();
        use_effect(move || {
            let _swapped = pages.content.read();
            crate::contact::attach_contact_handler(
                &contact_config.form_endpoint,
                &contact_config.form_subject,
            );
        });

        use_effect(move || crate::dom::set_scroll_locked(modals.any_open()));
    }

    let html = pages.content.read().html().to_string();

    rsx! {
        header { class: "site-header",
            nav { class: "site-nav", aria_label: "Main navigation",
                for (page, label) in NAV_LINKS.iter().copied() {
                    NavLink { key: "{page}", page, label }
                }
            }
        }
        main { id: CONTENT_ID, class: "content", dangerous_inner_html: "{html}" }
        GalleryModal { kind: GalleryKind::Games, modals }
        GalleryModal { kind: GalleryKind::Projects, modals }
    }
}

#[component]
fn NavLink(page: &'static str, label: &'static str) -> Element {
    let config = use_context::<SiteConfig>();
    let pages = use_context::<PageState>();
    let active = matches!(&*pages.content.read(), ContentView::Page { key, .. } if key.as_str() == page);

    rsx! {
        a {
            href: "#{page}",
            class: if active { "nav-link active" } else { "nav-link" },
            onclick: move |event| {
                event.prevent_default();
                pages.navigate(PageKey::parse(page), config.pages_path.clone());
            },
            "{label}"
        }
    }
}

#[cfg(target_arch = "wasm32")]
struct ShellListeners {
    _popstate: crate::dom::EventListener,
    _click: crate::dom::EventListener,
}

#[cfg(target_arch = "wasm32")]
impl ShellListeners {
    fn install(config: SiteConfig, pages: PageState, modals: GalleryModals) -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;

        let popstate_config = config.clone();
        let popstate = crate::dom::EventListener::new(&window, "popstate", move |_event| {
            pages.open_current(&popstate_config);
        })?;

        let click = crate::dom::EventListener::new(&document, "click", move |event| {
            crate::contact::attach_contact_handler(&config.form_endpoint, &config.form_subject);
            open_clicked_capsule(&event, modals);
        })?;

        Some(Self {
            _popstate: popstate,
            _click: click,
        })
    }
}

#[cfg(target_arch = "wasm32")]
fn open_clicked_capsule(event: &web_sys::Event, modals: GalleryModals) {
    use wasm_bindgen::JsCast;

    let Some(target) = event
        .target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
    else {
        return;
    };
    let Ok(Some(capsule)) = target.closest(CAPSULE_SELECTOR) else {
        return;
    };
    let Some(kind) = GalleryKind::detect(&capsule) else {
        return;
    };
    modals.open(Gallery::open(kind, Capsule::load(kind, &capsule)));
}
