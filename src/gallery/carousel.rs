#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MediaItem {
    Image(String),
    Video(String),
}

impl MediaItem {
    pub fn source(&self) -> &str {
        match self {
            MediaItem::Image(source) | MediaItem::Video(source) => source,
        }
    }
}

/// Ordered items plus a cursor that wraps in both directions.
///
/// The cursor is always a valid index while the carousel has items; every
/// move on an empty carousel is a no-op.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Carousel<T> {
    items: Vec<T>,
    index: usize,
}

impl<T> Default for Carousel<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            index: 0,
        }
    }
}

impl<T> Carousel<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items, index: 0 }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn current(&self) -> Option<&T> {
        self.items.get(self.index)
    }

    pub fn next(&mut self) {
        if !self.items.is_empty() {
            self.index = (self.index + 1) % self.items.len();
        }
    }

    pub fn previous(&mut self) {
        if !self.items.is_empty() {
            self.index = (self.index + self.items.len() - 1) % self.items.len();
        }
    }

    pub fn jump(&mut self, index: usize) -> bool {
        if index < self.items.len() {
            self.index = index;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn images(count: usize) -> Carousel<MediaItem> {
        Carousel::new(
            (0..count)
                .map(|i| MediaItem::Image(format!("img/{i}.png")))
                .collect(),
        )
    }

    #[test]
    fn next_cycles_back_to_start() {
        let mut carousel = images(4);
        carousel.jump(2);
        for _ in 0..4 {
            carousel.next();
        }
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn previous_from_start_wraps_to_last() {
        let mut carousel = images(3);
        carousel.previous();
        assert_eq!(carousel.index(), 2);
        assert_eq!(carousel.current().map(MediaItem::source), Some("img/2.png"));
    }

    #[test]
    fn empty_carousel_ignores_moves() {
        let mut carousel: Carousel<MediaItem> = Carousel::default();
        carousel.next();
        carousel.previous();
        assert!(!carousel.jump(0));
        assert_eq!(carousel.index(), 0);
        assert_eq!(carousel.current(), None);
    }

    #[test]
    fn jump_rejects_out_of_range() {
        let mut carousel = images(2);
        assert!(carousel.jump(1));
        assert!(!carousel.jump(5));
        assert_eq!(carousel.index(), 1);
    }
}
