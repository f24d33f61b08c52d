use hashlink::LinkedHashMap;

use crate::config::RECENCY_WINDOW;
use crate::storage::PageId;

/// The last few distinct pages referenced. Back of the map is the most recent.
#[derive(Debug)]
pub struct RecencyWindow {
    pages: LinkedHashMap<PageId, ()>,
    len: usize,
}

impl RecencyWindow {
    pub fn new() -> Self {
        Self::with_len(RECENCY_WINDOW)
    }

    pub fn with_len(len: usize) -> Self {
        RecencyWindow {
            pages: LinkedHashMap::with_capacity(len + 1),
            len,
        }
    }

    pub fn push(&mut self, page: PageId) {
        // Re-referencing a page moves it to the most recent end
        self.pages.remove(&page);
        self.pages.insert(page, ());

        while self.pages.len() > self.len {
            self.pages.pop_front();
        }
    }

    /// Pages in the window, most recent first.
    pub fn pages(&self) -> Vec<PageId> {
        let mut pages: Vec<PageId> = self.pages.keys().copied().collect();
        pages.reverse();
        pages
    }

    pub fn contains(&self, page: PageId) -> bool {
        self.pages.contains_key(&page)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl Default for RecencyWindow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
pub mod test {
    use super::RecencyWindow;

    #[test]
    fn keeps_last_three_distinct() {
        let mut window = RecencyWindow::new();
        for page in [1, 2, 3, 4] {
            window.push(page);
        }
        assert_eq!(window.pages(), vec![4, 3, 2]);
        assert!(!window.contains(1));

        window.push(3);
        assert_eq!(window.pages(), vec![3, 4, 2]);

        window.push(3);
        assert_eq!(window.len(), 3);
        assert_eq!(window.pages(), vec![3, 4, 2]);
    }
}
