use std::cell::RefCell;

use super::*;

// =============================================================
// Helpers
// =============================================================

fn images(n: usize) -> Vec<GalleryImage> {
    (0..n)
        .map(|i| GalleryImage::new(format!("/img/photo-{i}.jpg"), format!("Photo {i}")))
        .collect()
}

fn core(n: usize) -> LightboxCore {
    LightboxCore::new(images(n))
}

fn shown(actions: &[Action]) -> Option<&GalleryImage> {
    actions.iter().find_map(|action| match action {
        Action::Show(image) => Some(image),
        _ => None,
    })
}

fn shown_src(actions: &[Action]) -> Option<&str> {
    shown(actions).map(|image| image.src.as_str())
}

// =============================================================
// Key mapping
// =============================================================

#[test]
fn key_from_dom_maps_navigation_keys() {
    assert_eq!(Key::from_dom("Escape"), Key::Escape);
    assert_eq!(Key::from_dom("ArrowLeft"), Key::ArrowLeft);
    assert_eq!(Key::from_dom("ArrowRight"), Key::ArrowRight);
    assert_eq!(Key::from_dom("Enter"), Key::Other);
    assert_eq!(Key::from_dom("escape"), Key::Other);
}

// =============================================================
// Open / close
// =============================================================

#[test]
fn new_lightbox_is_closed_at_first_image() {
    let lb = core(3);
    assert!(!lb.is_open());
    assert_eq!(lb.current_index(), 0);
    assert_eq!(lb.len(), 3);
}

#[test]
fn open_shows_requested_image_and_reveals() {
    let mut lb = core(3);
    let actions = lb.open(1);
    assert_eq!(
        actions,
        vec![
            Action::Show(GalleryImage::new("/img/photo-1.jpg", "Photo 1")),
            Action::Reveal,
            Action::Protect,
        ]
    );
    assert!(lb.is_open());
    assert_eq!(lb.current_index(), 1);
}

#[test]
fn open_each_index_shows_matching_source() {
    let set = images(5);
    let mut lb = LightboxCore::new(set.clone());
    for (i, expected) in set.iter().enumerate() {
        let actions = lb.open(i);
        assert_eq!(shown(&actions), Some(expected));
        assert_eq!(lb.current_image(), Some(expected));
    }
}

#[test]
fn open_out_of_range_is_ignored() {
    let mut lb = core(2);
    assert!(lb.open(2).is_empty());
    assert!(!lb.is_open());
    assert_eq!(lb.current_index(), 0);
}

#[test]
fn open_again_while_open_switches_image() {
    let mut lb = core(3);
    lb.open(0);
    let actions = lb.open(2);
    assert_eq!(shown_src(&actions), Some("/img/photo-2.jpg"));
    assert!(lb.is_open());
}

#[test]
fn close_hides_and_is_idempotent() {
    let mut lb = core(3);
    lb.open(1);
    assert_eq!(lb.close(), vec![Action::Hide]);
    assert!(!lb.is_open());
    assert_eq!(lb.close(), vec![Action::Hide]);
    assert!(!lb.is_open());
}

#[test]
fn reopen_after_close_starts_from_clicked_index() {
    let mut lb = core(4);
    lb.open(3);
    lb.close();
    let actions = lb.open(1);
    assert_eq!(shown_src(&actions), Some("/img/photo-1.jpg"));
}

// =============================================================
// Navigation
// =============================================================

#[test]
fn next_wraps_from_last_to_first() {
    let mut lb = core(3);
    lb.open(2);
    let actions = lb.next();
    assert_eq!(lb.current_index(), 0);
    assert_eq!(shown_src(&actions), Some("/img/photo-0.jpg"));
}

#[test]
fn prev_wraps_from_first_to_last() {
    let mut lb = core(3);
    lb.open(0);
    let actions = lb.prev();
    assert_eq!(lb.current_index(), 2);
    assert_eq!(shown_src(&actions), Some("/img/photo-2.jpg"));
}

#[test]
fn next_n_times_returns_to_start() {
    for n in 1..=6 {
        for start in 0..n {
            let mut lb = core(n);
            lb.open(start);
            for _ in 0..n {
                lb.next();
            }
            assert_eq!(lb.current_index(), start, "n={n} start={start}");
        }
    }
}

#[test]
fn prev_then_next_is_identity() {
    for n in 2..=5 {
        for start in 0..n {
            let mut lb = core(n);
            lb.open(start);
            lb.prev();
            lb.next();
            assert_eq!(lb.current_index(), start);
            lb.next();
            lb.prev();
            assert_eq!(lb.current_index(), start);
        }
    }
}

#[test]
fn single_image_navigation_stays_put() {
    let mut lb = core(1);
    lb.open(0);
    assert_eq!(shown_src(&lb.next()), Some("/img/photo-0.jpg"));
    assert_eq!(shown_src(&lb.prev()), Some("/img/photo-0.jpg"));
    assert_eq!(lb.current_index(), 0);
}

#[test]
fn empty_gallery_never_panics() {
    let mut lb = core(0);
    assert!(lb.is_empty());
    assert!(lb.open(0).is_empty());
    assert!(lb.next().is_empty());
    assert!(lb.prev().is_empty());
    assert!(lb.on_key(Key::ArrowRight).is_empty());
    assert_eq!(lb.current_image(), None);
    assert_eq!(lb.close(), vec![Action::Hide]);
}

// =============================================================
// Keyboard
// =============================================================

#[test]
fn arrow_right_walks_and_wraps_three_thumbnails() {
    let mut lb = core(3);
    assert_eq!(shown_src(&lb.open(0)), Some("/img/photo-0.jpg"));
    lb.on_key(Key::ArrowRight);
    let actions = lb.on_key(Key::ArrowRight);
    assert_eq!(shown_src(&actions), Some("/img/photo-2.jpg"));
    let actions = lb.on_key(Key::ArrowRight);
    assert_eq!(shown_src(&actions), Some("/img/photo-0.jpg"));
}

#[test]
fn arrow_left_steps_back() {
    let mut lb = core(3);
    lb.open(1);
    let actions = lb.on_key(Key::ArrowLeft);
    assert_eq!(shown_src(&actions), Some("/img/photo-0.jpg"));
}

#[test]
fn escape_closes() {
    let mut lb = core(3);
    lb.open(0);
    assert_eq!(lb.on_key(Key::Escape), vec![Action::Hide]);
    assert!(!lb.is_open());
}

#[test]
fn keys_are_ignored_while_closed() {
    let mut lb = core(3);
    assert!(lb.on_key(Key::ArrowRight).is_empty());
    assert!(lb.on_key(Key::ArrowLeft).is_empty());
    assert!(lb.on_key(Key::Escape).is_empty());
    assert_eq!(lb.current_index(), 0);

    lb.open(1);
    lb.close();
    assert!(lb.on_key(Key::ArrowRight).is_empty());
    assert_eq!(lb.current_index(), 1);
}

#[test]
fn other_keys_do_nothing_while_open() {
    let mut lb = core(3);
    lb.open(1);
    assert!(lb.on_key(Key::Other).is_empty());
    assert!(lb.is_open());
    assert_eq!(lb.current_index(), 1);
}

// =============================================================
// Overlay clicks
// =============================================================

#[test]
fn backdrop_click_closes() {
    let mut lb = core(2);
    lb.open(0);
    assert_eq!(lb.on_overlay_click(true), vec![Action::Hide]);
    assert!(!lb.is_open());
}

#[test]
fn content_click_keeps_overlay_open() {
    let mut lb = core(2);
    lb.open(0);
    assert!(lb.on_overlay_click(false).is_empty());
    assert!(lb.is_open());
}

// =============================================================
// Mounting
// =============================================================

/// Host that records each install step instead of touching a page.
#[derive(Default)]
struct FakeHost {
    gallery: Option<Vec<GalleryImage>>,
    fail_thumbnail_wiring: bool,
    calls: RefCell<Vec<&'static str>>,
}

impl FakeHost {
    fn with_gallery(n: usize) -> Self {
        Self { gallery: Some(images(n)), ..Default::default() }
    }

    fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: &'static str) {
        self.calls.borrow_mut().push(call);
    }
}

impl GalleryHost for FakeHost {
    type Gallery = Vec<GalleryImage>;
    type Overlay = ();
    type Mounted = LightboxCore;

    fn find_gallery(&self) -> Result<Option<Vec<GalleryImage>>, PageError> {
        self.record("find_gallery");
        Ok(self.gallery.clone())
    }

    fn protect(&self, _gallery: &Vec<GalleryImage>) -> Result<(), PageError> {
        self.record("protect");
        Ok(())
    }

    fn create_overlay(&self) -> Result<(), PageError> {
        self.record("create_overlay");
        Ok(())
    }

    fn thumbnails(&self, gallery: &Vec<GalleryImage>) -> Vec<GalleryImage> {
        self.record("thumbnails");
        gallery.clone()
    }

    fn attach(&self, _overlay: (), core: LightboxCore) -> Result<LightboxCore, PageError> {
        self.record("attach");
        Ok(core)
    }

    fn wire_thumbnails(&self, _gallery: &Vec<GalleryImage>, _mounted: &LightboxCore) -> Result<(), PageError> {
        self.record("wire_thumbnails");
        if self.fail_thumbnail_wiring {
            return Err(PageError::Dom("addEventListener threw".to_owned()));
        }
        Ok(())
    }
}

#[test]
fn mount_without_gallery_creates_no_overlay() {
    let host = FakeHost::default();
    let mounted = mount(&host).unwrap();
    assert!(mounted.is_none());
    assert_eq!(host.calls(), vec!["find_gallery"]);
}

#[test]
fn mount_indexes_thumbnails_in_order() {
    let host = FakeHost::with_gallery(3);
    let mut lb = mount(&host).unwrap().unwrap();
    assert_eq!(lb.len(), 3);
    assert!(!lb.is_open());
    assert_eq!(shown_src(&lb.open(2)), Some("/img/photo-2.jpg"));
}

#[test]
fn mount_builds_one_overlay_and_binds_controls_before_thumbnails() {
    let host = FakeHost::with_gallery(2);
    mount(&host).unwrap();
    assert_eq!(
        host.calls(),
        vec!["find_gallery", "protect", "create_overlay", "thumbnails", "attach", "wire_thumbnails"]
    );
}

#[test]
fn mount_with_empty_gallery_still_builds_overlay() {
    let host = FakeHost::with_gallery(0);
    let mut lb = mount(&host).unwrap().unwrap();
    assert!(lb.is_empty());
    assert!(lb.open(0).is_empty());
    assert_eq!(host.calls().iter().filter(|c| **c == "create_overlay").count(), 1);
}

#[test]
fn failed_thumbnail_wiring_leaves_controls_bound() {
    let host = FakeHost { fail_thumbnail_wiring: true, ..FakeHost::with_gallery(3) };
    assert!(mount(&host).is_err());
    let calls = host.calls();
    let attach = calls.iter().position(|c| *c == "attach");
    let wire = calls.iter().position(|c| *c == "wire_thumbnails");
    assert!(attach.is_some());
    assert!(attach < wire);
}
