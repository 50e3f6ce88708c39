//! Shared constants for the page features.

// ── Theme ───────────────────────────────────────────────────────

/// Toggle icon shown while the light theme is active.
pub const MOON_GLYPH: &str = "\u{1F319}";

/// Toggle icon shown while the dark theme is active.
pub const SUN_GLYPH: &str = "\u{2600}\u{FE0F}";

// ── Markers ─────────────────────────────────────────────────────

/// Class marking the current nav link and the visible lightbox.
pub const ACTIVE_CLASS: &str = "active";

/// Attribute set on images whose copy-protection listeners are attached.
pub const PROTECTED_ATTR: &str = "data-pagekit-protected";

/// Id of the optional `<script type="application/json">` configuration block.
pub const CONFIG_ELEMENT_ID: &str = "pagekit-config";

// ── Lightbox ────────────────────────────────────────────────────

pub const LIGHTBOX_CLASS: &str = "lightbox";
pub const LIGHTBOX_CLOSE_SELECTOR: &str = ".lightbox-close";
pub const LIGHTBOX_PREV_SELECTOR: &str = ".lightbox-prev";
pub const LIGHTBOX_NEXT_SELECTOR: &str = ".lightbox-next";
pub const LIGHTBOX_IMAGE_SELECTOR: &str = "img";

/// Inner markup of the overlay. Built once per page.
pub const LIGHTBOX_MARKUP: &str = r#"
      <div class="lightbox-content">
        <span class="lightbox-close">&times;</span>
        <img src="" alt="Preview">
        <div class="lightbox-nav">
          <button class="lightbox-prev">&#10094;</button>
          <button class="lightbox-next">&#10095;</button>
        </div>
      </div>
    "#;

// ── Animator ────────────────────────────────────────────────────

/// Animation clock advance per frame.
pub const FRAME_STEP: f64 = 0.015;

/// Degrees of rotation per clock unit for rotating shapes.
pub const ROTATION_RATE_DEG: f64 = 20.0;

/// Fill color of every floating shape.
pub const SHAPE_FILL: &str = "#3b3e79";
