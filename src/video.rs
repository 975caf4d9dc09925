const EMBED_QUERY: &str = "autoplay=1&mute=1&rel=0&enablejsapi=1";

pub fn extract_video_id(url: &str) -> Option<&str> {
    let id = if url.contains("youtube.com/watch?v=") {
        url.split_once("v=")
            .map(|(_, rest)| rest.split('&').next().unwrap_or(rest))
    } else if url.contains("youtu.be/") {
        url.split_once("youtu.be/")
            .map(|(_, rest)| rest.split('?').next().unwrap_or(rest))
    } else if url.contains("youtube.com/embed/") {
        url.split_once("embed/")
            .map(|(_, rest)| rest.split('?').next().unwrap_or(rest))
    } else {
        None
    };
    id.filter(|id| !id.is_empty())
}

pub fn embed_url(url: &str) -> String {
    match extract_video_id(url) {
        Some(id) => format!("https://www.youtube.com/embed/{id}?{EMBED_QUERY}"),
        None => url.to_string(),
    }
}

pub fn thumbnail_url(url: &str) -> Option<String> {
    extract_video_id(url).map(|id| format!("https://img.youtube.com/vi/{id}/hqdefault.jpg"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn extracts_watch_id_without_trailing_params() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s"),
            Some("dQw4w9WgXcQ"),
        );
    }

    #[test]
    fn extracts_short_link_id() {
        assert_eq!(
            extract_video_id("https://youtu.be/jfKfPfyJRdk?si=abc"),
            Some("jfKfPfyJRdk"),
        );
    }

    #[test]
    fn extracts_embed_id() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/embed/jfKfPfyJRdk?autoplay=1"),
            Some("jfKfPfyJRdk"),
        );
    }

    #[test]
    fn unknown_shape_has_no_id() {
        assert_eq!(extract_video_id("https://vimeo.com/123456"), None);
        assert_eq!(extract_video_id("https://youtu.be/"), None);
    }

    #[test]
    fn embed_url_keeps_unrecognized_url() {
        assert_eq!(
            embed_url("https://vimeo.com/123456"),
            "https://vimeo.com/123456"
        );
        assert_eq!(
            embed_url("https://youtu.be/abc123"),
            "https://www.youtube.com/embed/abc123?autoplay=1&mute=1&rel=0&enablejsapi=1",
        );
    }

    #[test]
    fn thumbnail_requires_an_id() {
        assert_eq!(
            thumbnail_url("https://www.youtube.com/watch?v=abc123").as_deref(),
            Some("https://img.youtube.com/vi/abc123/hqdefault.jpg"),
        );
        assert_eq!(thumbnail_url("not a video"), None);
    }
}
