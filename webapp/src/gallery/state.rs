use api::gallery::{GalleryPageResp, ImageRecord};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerState {
    Idle,
    Busy,
    Failed,
    // both terminal: no further fetch is ever launched
    Exhausted,
    Empty,
}

/// Pagination state for the photo grid, owned by the Gallery component
/// and mutated only by its handlers.
///
/// Pages are requested one at a time; the trigger is non-actionable while
/// a fetch is outstanding, so at most one request is ever in flight.  A
/// failed fetch parks the page number so that a retry re-requests it
/// instead of skipping ahead.
#[derive(Clone, Debug, PartialEq)]
pub struct PagedGallery {
    pub photos: Vec<ImageRecord>,
    next_page: u32,
    pending: u32,
    trigger: TriggerState,
}

impl PagedGallery {
    pub fn new() -> Self {
        PagedGallery {
            photos: Vec::new(),
            next_page: 1,
            pending: 1,
            trigger: TriggerState::Idle,
        }
    }

    pub fn trigger(&self) -> TriggerState {
        self.trigger
    }

    pub fn actionable(&self) -> bool {
        matches!(self.trigger, TriggerState::Idle | TriggerState::Failed)
    }

    /// Start a fetch, returning the page to request, or None if the
    /// trigger is busy or terminal.
    pub fn begin_fetch(&mut self) -> Option<u32> {
        match self.trigger {
            TriggerState::Idle => {
                self.pending = self.next_page;
                self.next_page += 1;
                self.trigger = TriggerState::Busy;
                Some(self.pending)
            }
            TriggerState::Failed => {
                self.trigger = TriggerState::Busy;
                Some(self.pending)
            }
            _ => None,
        }
    }

    /// Record a successful response: append its photos in order and
    /// settle the trigger.
    pub fn complete(&mut self, resp: GalleryPageResp) {
        if self.trigger != TriggerState::Busy {
            return;
        }

        let first_page_empty = self.photos.is_empty() && resp.photos.is_empty();
        let has_next = resp.has_next;

        self.photos.extend(resp.photos);

        self.trigger = if first_page_empty {
            TriggerState::Empty
        } else if has_next {
            TriggerState::Idle
        } else {
            TriggerState::Exhausted
        };
    }

    pub fn fail(&mut self) {
        if self.trigger == TriggerState::Busy {
            self.trigger = TriggerState::Failed;
        }
    }

    pub fn trigger_label(&self) -> &'static str {
        match self.trigger {
            TriggerState::Idle => "Load More",
            TriggerState::Busy => "Loading...",
            TriggerState::Failed => "Couldn't load, retry?",
            TriggerState::Exhausted => "No More Images",
            TriggerState::Empty => "No Images",
        }
    }
}

impl Default for PagedGallery {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(alt: &str) -> ImageRecord {
        ImageRecord {
            link: format!("/media/gallery-photos/{alt}.png"),
            src: format!("/media/gallery-photos/{alt}.thumb.png"),
            alt: alt.to_owned(),
        }
    }

    fn page(alts: &[&str], has_next: bool) -> GalleryPageResp {
        GalleryPageResp {
            photos: alts.iter().map(|a| photo(a)).collect(),
            has_next,
        }
    }

    #[test]
    fn successful_fetches_append_in_response_order() {
        let mut gallery = PagedGallery::new();

        assert_eq!(gallery.begin_fetch(), Some(1));
        gallery.complete(page(&["a", "b"], true));

        assert_eq!(gallery.begin_fetch(), Some(2));
        gallery.complete(page(&["c"], true));

        let alts: Vec<&str> = gallery.photos.iter().map(|p| p.alt.as_str()).collect();
        assert_eq!(alts, vec!["a", "b", "c"]);
        assert_eq!(gallery.trigger(), TriggerState::Idle);
    }

    #[test]
    fn has_next_false_is_terminal() {
        let mut gallery = PagedGallery::new();

        gallery.begin_fetch();
        gallery.complete(page(&["a"], false));

        assert_eq!(gallery.trigger(), TriggerState::Exhausted);
        assert!(!gallery.actionable());
        assert_eq!(gallery.begin_fetch(), None);
    }

    #[test]
    fn empty_first_page_disables_the_trigger() {
        let mut gallery = PagedGallery::new();

        gallery.begin_fetch();
        gallery.complete(page(&[], true));

        assert_eq!(gallery.trigger(), TriggerState::Empty);
        assert_eq!(gallery.trigger_label(), "No Images");
        assert_eq!(gallery.begin_fetch(), None);
    }

    #[test]
    fn no_fetch_may_start_while_one_is_outstanding() {
        let mut gallery = PagedGallery::new();

        assert_eq!(gallery.begin_fetch(), Some(1));
        assert_eq!(gallery.begin_fetch(), None);
        assert!(!gallery.actionable());
    }

    #[test]
    fn retry_after_failure_requests_the_same_page() {
        let mut gallery = PagedGallery::new();

        gallery.begin_fetch();
        gallery.complete(page(&["a"], true));

        assert_eq!(gallery.begin_fetch(), Some(2));
        gallery.fail();
        assert!(gallery.actionable());

        // the retry must not skip ahead to page 3
        assert_eq!(gallery.begin_fetch(), Some(2));
        gallery.complete(page(&["b"], true));

        assert_eq!(gallery.begin_fetch(), Some(3));
    }

    #[test]
    fn stray_completions_are_ignored_when_not_busy() {
        let mut gallery = PagedGallery::new();

        gallery.complete(page(&["a"], true));
        assert!(gallery.photos.is_empty());
        assert_eq!(gallery.trigger(), TriggerState::Idle);
    }
}
