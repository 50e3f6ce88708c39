//! Gallery lightbox: a full-page overlay for browsing gallery images.
//!
//! The thumbnail set is read once when the lightbox is installed and stays
//! fixed for the page lifetime; indices into it are the only navigation
//! state. [`LightboxCore`] owns that state and returns [`Action`]s, which
//! [`Lightbox`] applies to the overlay elements. [`mount`] runs the install
//! steps through [`GalleryHost`]. Both splits keep the wraparound,
//! visibility and install rules testable without a browser.

#[cfg(test)]
#[path = "lightbox_test.rs"]
mod lightbox_test;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, HtmlElement, HtmlImageElement, KeyboardEvent};

use crate::config::PageConfig;
use crate::consts::{
    ACTIVE_CLASS, LIGHTBOX_CLASS, LIGHTBOX_CLOSE_SELECTOR, LIGHTBOX_IMAGE_SELECTOR, LIGHTBOX_MARKUP,
    LIGHTBOX_NEXT_SELECTOR, LIGHTBOX_PREV_SELECTOR,
};
use crate::dom;
use crate::error::PageError;
use crate::protect;

/// One gallery image as captured at install time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
}

impl GalleryImage {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self { src: src.into(), alt: alt.into() }
    }
}

/// Keys the overlay responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    Other,
}

impl Key {
    /// Map a `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_dom(key: &str) -> Self {
        match key {
            "Escape" => Self::Escape,
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            _ => Self::Other,
        }
    }
}

/// Effects for the host to apply to the overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Put this image in the overlay's image slot.
    Show(GalleryImage),
    /// Make the overlay visible and lock page scroll.
    Reveal,
    /// Hide the overlay and unlock page scroll.
    Hide,
    /// Re-apply copy protection to gallery and overlay images.
    Protect,
}

/// Lightbox state: the fixed image set, visibility, and current index.
///
/// `index` is always `< images.len()` when the set is non-empty.
#[derive(Debug, Clone, Default)]
pub struct LightboxCore {
    images: Vec<GalleryImage>,
    open: bool,
    index: usize,
}

impl LightboxCore {
    #[must_use]
    pub fn new(images: Vec<GalleryImage>) -> Self {
        Self { images, open: false, index: 0 }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn current_image(&self) -> Option<&GalleryImage> {
        self.images.get(self.index)
    }

    /// Open the overlay on image `index`. Out-of-range indices are ignored.
    pub fn open(&mut self, index: usize) -> Vec<Action> {
        let Some(image) = self.images.get(index) else {
            log::debug!("lightbox open({index}) ignored: {} image(s)", self.images.len());
            return Vec::new();
        };
        self.index = index;
        self.open = true;
        vec![Action::Show(image.clone()), Action::Reveal, Action::Protect]
    }

    /// Hide the overlay. Calling it while hidden is harmless.
    pub fn close(&mut self) -> Vec<Action> {
        self.open = false;
        vec![Action::Hide]
    }

    /// Step forward, wrapping from the last image to the first.
    pub fn next(&mut self) -> Vec<Action> {
        let len = self.images.len();
        if len == 0 {
            return Vec::new();
        }
        self.index = (self.index + 1) % len;
        self.show_current()
    }

    /// Step back, wrapping from the first image to the last.
    pub fn prev(&mut self) -> Vec<Action> {
        let len = self.images.len();
        if len == 0 {
            return Vec::new();
        }
        self.index = (self.index + len - 1) % len;
        self.show_current()
    }

    /// Keyboard navigation. Ignored while the overlay is hidden.
    pub fn on_key(&mut self, key: Key) -> Vec<Action> {
        if !self.open {
            return Vec::new();
        }
        match key {
            Key::Escape => self.close(),
            Key::ArrowLeft => self.prev(),
            Key::ArrowRight => self.next(),
            Key::Other => Vec::new(),
        }
    }

    /// A click landed on the overlay. Only the bare backdrop closes it.
    pub fn on_overlay_click(&mut self, on_backdrop: bool) -> Vec<Action> {
        if on_backdrop { self.close() } else { Vec::new() }
    }

    fn show_current(&self) -> Vec<Action> {
        self.images
            .get(self.index)
            .map(|image| vec![Action::Show(image.clone())])
            .unwrap_or_default()
    }
}

// =============================================================
// Mounting
// =============================================================

/// Page operations the lightbox needs in order to mount itself.
pub trait GalleryHost {
    /// The gallery container with its thumbnails.
    type Gallery;
    /// A built overlay, not yet bound to any state.
    type Overlay;
    /// The mounted lightbox, shared with its event handlers.
    type Mounted;

    fn find_gallery(&self) -> Result<Option<Self::Gallery>, PageError>;
    /// Copy protection for gallery images, the container, and Ctrl/Cmd+S.
    fn protect(&self, gallery: &Self::Gallery) -> Result<(), PageError>;
    /// Build the overlay (hidden) and add it to the page.
    fn create_overlay(&self) -> Result<Self::Overlay, PageError>;
    fn thumbnails(&self, gallery: &Self::Gallery) -> Vec<GalleryImage>;
    /// Bind the close, backdrop, nav and keyboard handlers.
    fn attach(&self, overlay: Self::Overlay, core: LightboxCore) -> Result<Self::Mounted, PageError>;
    /// Make each thumbnail open the overlay at its own index.
    fn wire_thumbnails(&self, gallery: &Self::Gallery, mounted: &Self::Mounted) -> Result<(), PageError>;
}

/// Mount the lightbox on `host`.
///
/// Returns `Ok(None)` without creating an overlay when there is no gallery.
/// Thumbnails are bound last: once any thumbnail can open the overlay, the
/// overlay can be closed.
pub fn mount<H: GalleryHost>(host: &H) -> Result<Option<H::Mounted>, PageError> {
    let Some(gallery) = host.find_gallery()? else {
        return Ok(None);
    };
    host.protect(&gallery)?;
    let overlay = host.create_overlay()?;
    let images = host.thumbnails(&gallery);
    log::debug!("lightbox indexed {} thumbnail(s)", images.len());

    let mounted = host.attach(overlay, LightboxCore::new(images))?;
    host.wire_thumbnails(&gallery, &mounted)?;
    Ok(Some(mounted))
}

// =============================================================
// Browser binding
// =============================================================

/// The installed overlay: core state plus the elements it drives.
pub struct Lightbox {
    pub core: LightboxCore,
    document: Document,
    body: HtmlElement,
    overlay: Element,
    image: HtmlImageElement,
    protected_selector: String,
}

impl Lightbox {
    pub fn open(&mut self, index: usize) {
        let actions = self.core.open(index);
        self.apply(actions);
    }

    pub fn close(&mut self) {
        let actions = self.core.close();
        self.apply(actions);
    }

    pub fn next(&mut self) {
        let actions = self.core.next();
        self.apply(actions);
    }

    pub fn prev(&mut self) {
        let actions = self.core.prev();
        self.apply(actions);
    }

    pub fn on_key(&mut self, key: Key) {
        let actions = self.core.on_key(key);
        self.apply(actions);
    }

    pub fn on_overlay_click(&mut self, on_backdrop: bool) {
        let actions = self.core.on_overlay_click(on_backdrop);
        self.apply(actions);
    }

    fn apply(&self, actions: Vec<Action>) {
        for action in &actions {
            if let Err(err) = self.apply_one(action) {
                log::error!("lightbox {action:?} failed: {err}");
            }
        }
    }

    fn apply_one(&self, action: &Action) -> Result<(), PageError> {
        match action {
            Action::Show(image) => {
                self.image.set_src(&image.src);
                self.image.set_alt(&image.alt);
                Ok(())
            }
            Action::Reveal => {
                self.overlay.class_list().add_1(ACTIVE_CLASS).map_err(PageError::dom)?;
                self.body.style().set_property("overflow", "hidden").map_err(PageError::dom)
            }
            Action::Hide => {
                self.overlay.class_list().remove_1(ACTIVE_CLASS).map_err(PageError::dom)?;
                self.body.style().set_property("overflow", "").map_err(PageError::dom)
            }
            Action::Protect => {
                protect::guard_images(&self.document, &self.protected_selector)?;
                Ok(())
            }
        }
    }
}

/// Gallery container and its thumbnail images, in document order.
pub struct DomGallery {
    container: Element,
    thumbs: Vec<HtmlImageElement>,
}

/// Overlay elements created from [`LIGHTBOX_MARKUP`].
pub struct OverlayParts {
    body: HtmlElement,
    overlay: Element,
    image: HtmlImageElement,
    close: Element,
    prev: Element,
    next: Element,
}

pub struct DomGalleryHost<'a> {
    document: &'a Document,
    config: &'a PageConfig,
}

impl<'a> DomGalleryHost<'a> {
    pub fn new(document: &'a Document, config: &'a PageConfig) -> Self {
        Self { document, config }
    }
}

impl GalleryHost for DomGalleryHost<'_> {
    type Gallery = DomGallery;
    type Overlay = OverlayParts;
    type Mounted = Rc<RefCell<Lightbox>>;

    fn find_gallery(&self) -> Result<Option<DomGallery>, PageError> {
        let selector = &self.config.gallery_selector;
        let Some(container) = self.document.query_selector(selector).map_err(PageError::dom)? else {
            log::debug!("no gallery `{selector}`, lightbox skipped");
            return Ok(None);
        };
        let thumbs = dom::query_all_in(&container, &self.config.thumb_selector)?;
        Ok(Some(DomGallery { container, thumbs }))
    }

    fn protect(&self, gallery: &DomGallery) -> Result<(), PageError> {
        protect::guard_images(self.document, &self.config.protected_image_selector())?;
        protect::guard_container(&gallery.container)?;
        protect::block_save_shortcut(self.document)
    }

    fn create_overlay(&self) -> Result<OverlayParts, PageError> {
        let body = self.document.body().ok_or_else(|| PageError::missing("body"))?;
        let overlay = self.document.create_element("div").map_err(PageError::dom)?;
        overlay.set_class_name(LIGHTBOX_CLASS);
        overlay.set_inner_html(LIGHTBOX_MARKUP);
        let parts = OverlayParts {
            image: dom::require_in(&overlay, LIGHTBOX_IMAGE_SELECTOR)?,
            close: dom::require_in(&overlay, LIGHTBOX_CLOSE_SELECTOR)?,
            prev: dom::require_in(&overlay, LIGHTBOX_PREV_SELECTOR)?,
            next: dom::require_in(&overlay, LIGHTBOX_NEXT_SELECTOR)?,
            body,
            overlay,
        };
        parts.body.append_child(&parts.overlay).map_err(PageError::dom)?;
        protect::guard_images(self.document, &self.config.protected_image_selector())?;
        Ok(parts)
    }

    fn thumbnails(&self, gallery: &DomGallery) -> Vec<GalleryImage> {
        gallery.thumbs.iter().map(|img| GalleryImage::new(img.src(), img.alt())).collect()
    }

    fn attach(&self, parts: OverlayParts, core: LightboxCore) -> Result<Rc<RefCell<Lightbox>>, PageError> {
        let lightbox = Rc::new(RefCell::new(Lightbox {
            core,
            document: self.document.clone(),
            body: parts.body,
            overlay: parts.overlay.clone(),
            image: parts.image,
            protected_selector: self.config.protected_image_selector(),
        }));

        let lb = Rc::clone(&lightbox);
        dom::listen(&parts.close, "click", move |_| lb.borrow_mut().close())?;

        let lb = Rc::clone(&lightbox);
        let backdrop: EventTarget = parts.overlay.clone().into();
        dom::listen(&parts.overlay, "click", move |event| {
            let on_backdrop = event.target().is_some_and(|target| target == backdrop);
            lb.borrow_mut().on_overlay_click(on_backdrop);
        })?;

        let lb = Rc::clone(&lightbox);
        dom::listen(&parts.prev, "click", move |event| {
            event.stop_propagation();
            lb.borrow_mut().prev();
        })?;

        let lb = Rc::clone(&lightbox);
        dom::listen(&parts.next, "click", move |event| {
            event.stop_propagation();
            lb.borrow_mut().next();
        })?;

        let lb = Rc::clone(&lightbox);
        dom::listen(self.document, "keydown", move |event| {
            if let Some(key_event) = event.dyn_ref::<KeyboardEvent>() {
                lb.borrow_mut().on_key(Key::from_dom(&key_event.key()));
            }
        })?;

        Ok(lightbox)
    }

    fn wire_thumbnails(&self, gallery: &DomGallery, lightbox: &Rc<RefCell<Lightbox>>) -> Result<(), PageError> {
        for (index, thumb) in gallery.thumbs.iter().enumerate() {
            let wrapper: Element = thumb.parent_element().unwrap_or_else(|| thumb.clone().into());
            if let Some(wrapper) = wrapper.dyn_ref::<HtmlElement>() {
                wrapper.style().set_property("cursor", "pointer").map_err(PageError::dom)?;
            }
            let lb = Rc::clone(lightbox);
            dom::listen(&wrapper, "click", move |_| lb.borrow_mut().open(index))?;
        }
        Ok(())
    }
}

/// Install the lightbox if the page has a gallery.
pub fn install(document: &Document, config: &PageConfig) -> Result<Option<Rc<RefCell<Lightbox>>>, PageError> {
    mount(&DomGalleryHost::new(document, config))
}
