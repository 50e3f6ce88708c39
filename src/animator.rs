//! Floating background shapes.
//!
//! Seven small SVGs are placed inside the visual canvas container and each
//! inner `<g>` drifts around its center on a circle-like path. One shape also
//! spins. The first frame is drawn on mount; after that the loop reschedules
//! itself with `requestAnimationFrame` for the life of the page.

#[cfg(test)]
#[path = "animator_test.rs"]
mod animator_test;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Window};

use crate::config::PageConfig;
use crate::consts::{FRAME_STEP, ROTATION_RATE_DEG, SHAPE_FILL};
use crate::dom;
use crate::error::PageError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeKind {
    Circle { r: f64 },
    /// Square centered on the origin.
    RoundedSquare { half: f64, rx: f64 },
    /// Upward triangle centered on the origin.
    Triangle,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeSpec {
    /// Id of the animated `<g>` element.
    pub id: &'static str,
    pub kind: ShapeKind,
    /// Inline CSS placing the SVG within the container.
    pub placement: &'static str,
    /// Width and height of the SVG viewport.
    pub size: f64,
    /// Phase multiplier applied to the clock.
    pub speed: f64,
    /// Radius of the drift path.
    pub distance: f64,
    pub rotates: bool,
}

pub const SHAPES: [ShapeSpec; 7] = [
    ShapeSpec {
        id: "g1",
        kind: ShapeKind::Circle { r: 30.0 },
        placement: "top: 10%; left: 15%;",
        size: 100.0,
        speed: 1.0,
        distance: 6.0,
        rotates: false,
    },
    ShapeSpec {
        id: "g2",
        kind: ShapeKind::RoundedSquare { half: 15.0, rx: 5.0 },
        placement: "top: 60%; left: 8%;",
        size: 80.0,
        speed: 1.3,
        distance: 5.0,
        rotates: false,
    },
    ShapeSpec {
        id: "g3",
        kind: ShapeKind::Circle { r: 20.0 },
        placement: "top: 20%; right: 20%;",
        size: 70.0,
        speed: 0.8,
        distance: 7.0,
        rotates: false,
    },
    ShapeSpec {
        id: "g4",
        kind: ShapeKind::Triangle,
        placement: "bottom: 15%; right: 12%;",
        size: 90.0,
        speed: 1.1,
        distance: 4.0,
        rotates: true,
    },
    ShapeSpec {
        id: "g5",
        kind: ShapeKind::RoundedSquare { half: 12.0, rx: 4.0 },
        placement: "top: 45%; left: 45%;",
        size: 60.0,
        speed: 1.5,
        distance: 5.0,
        rotates: false,
    },
    ShapeSpec {
        id: "g6",
        kind: ShapeKind::Circle { r: 22.0 },
        placement: "bottom: 40%; left: 25%;",
        size: 75.0,
        speed: 0.9,
        distance: 6.0,
        rotates: false,
    },
    ShapeSpec {
        id: "g7",
        kind: ShapeKind::RoundedSquare { half: 10.0, rx: 3.0 },
        placement: "top: 70%; right: 35%;",
        size: 65.0,
        speed: 1.2,
        distance: 4.0,
        rotates: false,
    },
];

impl ShapeSpec {
    /// Resting center of the shape, in SVG user units.
    #[must_use]
    pub fn base(&self) -> f64 {
        self.size / 2.0
    }

    /// Offset center at clock value `t`.
    #[must_use]
    pub fn position_at(&self, t: f64) -> (f64, f64) {
        let phase = t * self.speed;
        (
            self.base() + phase.sin() * self.distance,
            self.base() + phase.cos() * self.distance,
        )
    }

    /// `transform` attribute value at clock value `t`.
    #[must_use]
    pub fn transform_at(&self, t: f64) -> String {
        let (x, y) = self.position_at(t);
        if self.rotates {
            format!("translate({x} {y}) rotate({})", t * ROTATION_RATE_DEG)
        } else {
            format!("translate({x} {y})")
        }
    }

    /// The standalone `<svg>` element for this shape.
    #[must_use]
    pub fn markup(&self) -> String {
        let size = self.size;
        let base = self.base();
        let body = match self.kind {
            ShapeKind::Circle { r } => format!(r#"<circle r="{r}" fill="{SHAPE_FILL}"></circle>"#),
            ShapeKind::RoundedSquare { half, rx } => format!(
                r#"<rect x="-{half}" y="-{half}" width="{w}" height="{w}" rx="{rx}" fill="{SHAPE_FILL}"></rect>"#,
                w = half * 2.0
            ),
            ShapeKind::Triangle => format!(r#"<polygon points="0,-15 13,7.5 -13,7.5" fill="{SHAPE_FILL}"></polygon>"#),
        };
        format!(
            r#"<svg class="float-shape" style="{placement}" width="{size}" height="{size}" viewBox="0 0 {size} {size}"><g id="{id}" transform="translate({base} {base})">{body}</g></svg>"#,
            placement = self.placement,
            id = self.id,
        )
    }
}

/// Markup for the whole scene.
#[must_use]
pub fn scene_markup() -> String {
    SHAPES.iter().map(ShapeSpec::markup).collect()
}

/// Monotonic animation clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct Clock {
    t: f64,
}

impl Clock {
    /// Advance one frame and return the new time.
    pub fn tick(&mut self) -> f64 {
        self.t += FRAME_STEP;
        self.t
    }

    #[must_use]
    pub fn now(&self) -> f64 {
        self.t
    }
}

// =============================================================
// Mounting
// =============================================================

/// Page operations the animator needs.
pub trait SceneHost {
    /// Handle to one animated `<g>`.
    type Shape;

    /// Put `markup` in the canvas container. `false` when the page has none.
    fn fill_canvas(&self, markup: &str) -> bool;
    fn find_shape(&self, id: &str) -> Option<Self::Shape>;
    fn set_transform(&self, shape: &Self::Shape, transform: &str) -> Result<(), PageError>;
}

/// Mounted shapes and their clock.
pub struct Scene<S> {
    shapes: Vec<(ShapeSpec, S)>,
    clock: Clock,
}

impl<S> Scene<S> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    #[must_use]
    pub fn now(&self) -> f64 {
        self.clock.now()
    }

    /// Advance the clock one frame and move every shape.
    pub fn advance<H: SceneHost<Shape = S>>(&mut self, host: &H) {
        let t = self.clock.tick();
        for (spec, shape) in &self.shapes {
            if let Err(err) = host.set_transform(shape, &spec.transform_at(t)) {
                log::error!("shape {} not moved: {err}", spec.id);
            }
        }
    }
}

/// Fill the canvas and draw the first frame.
///
/// Returns `None` and touches nothing else when the page has no canvas.
pub fn mount<H: SceneHost>(host: &H) -> Option<Scene<H::Shape>> {
    if !host.fill_canvas(&scene_markup()) {
        return None;
    }
    let shapes = SHAPES
        .iter()
        .filter_map(|spec| host.find_shape(spec.id).map(|shape| (*spec, shape)))
        .collect();
    let mut scene = Scene { shapes, clock: Clock::default() };
    scene.advance(host);
    Some(scene)
}

// =============================================================
// Browser binding
// =============================================================

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

pub struct DomSceneHost {
    document: Document,
    canvas_id: String,
}

impl SceneHost for DomSceneHost {
    type Shape = Element;

    fn fill_canvas(&self, markup: &str) -> bool {
        let Some(container) = self.document.get_element_by_id(&self.canvas_id) else {
            log::debug!("no #{}, animator skipped", self.canvas_id);
            return false;
        };
        container.set_inner_html(markup);
        true
    }

    fn find_shape(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn set_transform(&self, shape: &Element, transform: &str) -> Result<(), PageError> {
        shape.set_attribute("transform", transform).map_err(PageError::dom)
    }
}

/// Fill the visual canvas and start the loop.
///
/// Returns `Ok(false)` when the page has no canvas container.
pub fn install(document: &Document, config: &PageConfig) -> Result<bool, PageError> {
    let host = DomSceneHost { document: document.clone(), canvas_id: config.canvas_id.clone() };
    let Some(scene) = mount(&host) else {
        return Ok(false);
    };
    start_loop(dom::window()?, host, scene)?;
    Ok(true)
}

fn start_loop(window: Window, host: DomSceneHost, mut scene: Scene<Element>) -> Result<(), PageError> {
    let frame: FrameCallback = Rc::new(RefCell::new(None));
    let frame_for_cb = Rc::clone(&frame);
    let window_for_cb = window.clone();

    *frame.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
        scene.advance(&host);
        if let Some(cb) = frame_for_cb.borrow().as_ref() {
            if let Err(err) = window_for_cb.request_animation_frame(cb.as_ref().unchecked_ref()) {
                log::error!("animation stopped: {}", PageError::dom(err));
            }
        }
    }) as Box<dyn FnMut(f64)>));

    if let Some(cb) = frame.borrow().as_ref() {
        window.request_animation_frame(cb.as_ref().unchecked_ref()).map_err(PageError::dom)?;
    }
    Ok(())
}
