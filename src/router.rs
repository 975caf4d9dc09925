use dioxus::prelude::*;

use crate::config::SiteConfig;
use crate::error::FetchError;

pub const NOT_FOUND_HTML: &str = "<p>Page not found.</p>";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageKey(String);

impl PageKey {
    pub fn parse(raw: &str) -> Option<Self> {
        let key = raw.trim();
        if key.is_empty() || key.contains(['/', '\\', '?', '#']) || key.contains("..") {
            return None;
        }
        Some(Self(key.to_string()))
    }

    pub fn from_hash(hash: &str, home: &str) -> Option<Self> {
        let raw = hash.strip_prefix('#').unwrap_or(hash);
        if raw.is_empty() {
            return Self::parse(home);
        }
        let decoded = urlencoding::decode(raw).ok()?;
        Self::parse(&decoded)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn fragment_path(&self, pages_path: &str) -> String {
        let base = pages_path.trim().trim_end_matches('/');
        if base.is_empty() {
            format!("{}.html", self.0)
        } else {
            format!("{base}/{}.html", self.0)
        }
    }

    pub fn hash(&self) -> String {
        format!("#{}", self.0)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum ContentView {
    #[default]
    Loading,
    Page {
        key: PageKey,
        html: String,
    },
    NotFound,
}

impl ContentView {
    pub fn html(&self) -> &str {
        match self {
            ContentView::Loading => "",
            ContentView::Page { html, .. } => html,
            ContentView::NotFound => NOT_FOUND_HTML,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HistoryUpdate {
    Push(String),
    Keep,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Navigation {
    pub content: ContentView,
    pub history: HistoryUpdate,
}

/// Turns a finished fragment fetch into the content to show and the history
/// change to make. History is only touched by a successful fetch, and never
/// gets a second entry for the fragment it already shows.
pub fn resolve(key: &PageKey, current_hash: &str, outcome: Result<String, FetchError>) -> Navigation {
    match outcome {
        Ok(html) => {
            let shown = current_hash.strip_prefix('#').unwrap_or(current_hash);
            let shown = urlencoding::decode(shown)
                .map(|decoded| decoded.into_owned())
                .unwrap_or_else(|_| shown.to_string());
            let history = if shown == key.as_str() {
                HistoryUpdate::Keep
            } else {
                HistoryUpdate::Push(key.hash())
            };
            Navigation {
                content: ContentView::Page {
                    key: key.clone(),
                    html,
                },
                history,
            }
        }
        Err(_) => Navigation {
            content: ContentView::NotFound,
            history: HistoryUpdate::Keep,
        },
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// Hands out navigation tickets; only the newest ticket may write the
/// content region, so a slow response cannot overwrite a newer page.
#[derive(Clone, Debug, Default)]
pub struct Navigator {
    generation: u64,
}

impl Navigator {
    pub fn begin(&mut self) -> Ticket {
        self.generation += 1;
        Ticket(self.generation)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.generation == ticket.0
    }
}

#[derive(Clone, Copy, PartialEq)]
pub struct PageState {
    pub content: Signal<ContentView>,
    navigator: Signal<Navigator>,
}

pub fn use_page_state() -> PageState {
    PageState {
        content: use_signal(ContentView::default),
        navigator: use_signal(Navigator::default),
    }
}

impl PageState {
    pub fn open_current(self, config: &SiteConfig) {
        let key = PageKey::from_hash(&current_hash(), &config.home_page);
        self.navigate(key, config.pages_path.clone());
    }

    #[cfg(target_arch = "wasm32")]
    pub fn navigate(self, key: Option<PageKey>, pages_path: String) {
        let PageState {
            mut content,
            mut navigator,
        } = self;
        let ticket = navigator.write().begin();
        let Some(key) = key else {
            tracing::warn!("router: rejected page key");
            content.set(ContentView::NotFound);
            return;
        };
        tracing::debug!("router: navigate to {}", key.as_str());
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = fetch_fragment(&key.fragment_path(&pages_path)).await;
            if !navigator.peek().is_current(ticket) {
                tracing::debug!("router: dropping superseded response for {}", key.as_str());
                return;
            }
            if let Err(err) = &outcome {
                tracing::warn!("router: {} not found ({err})", key.as_str());
            }
            let navigation = resolve(&key, &current_hash(), outcome);
            content.set(navigation.content);
            if let HistoryUpdate::Push(hash) = navigation.history {
                push_history(&hash);
            }
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn navigate(self, key: Option<PageKey>, pages_path: String) {
        tracing::debug!(
            "router: {:?} under {pages_path} needs a browser to load",
            key.as_ref().map(PageKey::as_str)
        );
    }
}

#[cfg(target_arch = "wasm32")]
async fn fetch_fragment(path: &str) -> Result<String, FetchError> {
    let response = gloo_net::http::Request::get(path)
        .send()
        .await
        .map_err(|err| FetchError::Network(err.to_string()))?;
    if !response.ok() {
        return Err(FetchError::Status {
            status: response.status(),
            status_text: response.status_text(),
        });
    }
    response
        .text()
        .await
        .map_err(|err| FetchError::Decode(err.to_string()))
}

#[cfg(target_arch = "wasm32")]
fn current_hash() -> String {
    web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
fn current_hash() -> String {
    String::new()
}

#[cfg(target_arch = "wasm32")]
fn push_history(hash: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(history) = window.history() else {
        return;
    };
    if let Err(err) =
        history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(hash))
    {
        tracing::warn!("router: pushState failed: {}", crate::dom::js_error_message(&err));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn key(raw: &str) -> PageKey {
        PageKey::parse(raw).unwrap()
    }

    #[test]
    fn empty_fragment_defaults_to_home() {
        assert_eq!(PageKey::from_hash("", "home"), Some(key("home")));
        assert_eq!(PageKey::from_hash("#", "home"), Some(key("home")));
        assert_eq!(PageKey::from_hash("#games", "home"), Some(key("games")));
    }

    #[test]
    fn fragment_is_percent_decoded() {
        assert_eq!(
            PageKey::from_hash("#my%20work", "home").map(|k| k.fragment_path("pages")),
            Some("pages/my work.html".to_string()),
        );
    }

    #[test]
    fn path_like_keys_are_rejected() {
        assert_eq!(PageKey::parse("../secret"), None);
        assert_eq!(PageKey::from_hash("#a%2Fb", "home"), None);
        assert_eq!(PageKey::parse("   "), None);
    }

    #[test]
    fn query_and_fragment_characters_are_rejected() {
        assert_eq!(PageKey::from_hash("#home%3Fx", "home"), None);
        assert_eq!(PageKey::from_hash("#home%23top", "home"), None);
        assert_eq!(PageKey::parse("home?x"), None);
    }

    #[test]
    fn fragment_path_follows_convention() {
        assert_eq!(key("contact").fragment_path("pages/"), "pages/contact.html");
        assert_eq!(key("contact").fragment_path(""), "contact.html");
    }

    #[test]
    fn successful_fetch_swaps_content_and_pushes_key() {
        let navigation = resolve(&key("games"), "#home", Ok("<h1>Games</h1>".into()));
        assert_eq!(navigation.content.html(), "<h1>Games</h1>");
        assert_eq!(navigation.history, HistoryUpdate::Push("#games".into()));
    }

    #[test]
    fn fragment_already_shown_is_not_pushed_twice() {
        let navigation = resolve(&key("games"), "#games", Ok("<h1>Games</h1>".into()));
        assert_eq!(navigation.history, HistoryUpdate::Keep);
    }

    #[test]
    fn failed_fetch_renders_placeholder_without_history() {
        let navigation = resolve(
            &key("missing"),
            "#home",
            Err(FetchError::Status {
                status: 404,
                status_text: "Not Found".into(),
            }),
        );
        assert_eq!(navigation.content, ContentView::NotFound);
        assert_eq!(navigation.content.html(), NOT_FOUND_HTML);
        assert_eq!(navigation.history, HistoryUpdate::Keep);

        let offline = resolve(&key("home"), "", Err(FetchError::Network("offline".into())));
        assert_eq!(offline.content.html(), NOT_FOUND_HTML);
    }

    #[test]
    fn only_latest_ticket_is_current() {
        let mut navigator = Navigator::default();
        let first = navigator.begin();
        assert!(navigator.is_current(first));
        let second = navigator.begin();
        assert!(!navigator.is_current(first));
        assert!(navigator.is_current(second));
    }
}
