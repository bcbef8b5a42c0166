//! Core data model for a SiteCanvas editing session.
//!
//! A `Scene` is the flat, ordered collection of `Element`s placed on the
//! canvas of one website page. Elements are free-form positioned (drag
//! placement, no layout solver) and stacked by an integer `layer` value.
//! The renderer reads the scene; it never writes it. All mutation goes
//! through the pure operations in [`crate::scene`], which produce a new
//! `Scene` value each time so undo snapshots never alias.

use crate::id::ElementId;
use serde::{Deserialize, Serialize};

// ─── Geometry floors ─────────────────────────────────────────────────────

/// Smallest width an element can be resized to.
pub const MIN_WIDTH: f32 = 50.0;
/// Smallest height an element can be resized to.
pub const MIN_HEIGHT: f32 = 20.0;
/// Offset applied to duplicated and pasted elements.
pub const DUPLICATE_OFFSET: f32 = 20.0;

/// Canvas-local position. Elements never leave the top-left quadrant.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Clamp both components to ≥ 0.
    pub fn clamped(self) -> Self {
        Self {
            x: self.x.max(0.0),
            y: self.y.max(0.0),
        }
    }

    /// Translate by a delta, clamping the result to the canvas origin.
    pub fn translated(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy).clamped()
    }
}

/// Element dimensions in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Clamp to the resize floors (width ≥ 50, height ≥ 20).
    pub fn clamped(self) -> Self {
        Self {
            width: self.width.max(MIN_WIDTH),
            height: self.height.max(MIN_HEIGHT),
        }
    }
}

// ─── Color ───────────────────────────────────────────────────────────────

/// RGBA color, stored as 4 × u8 the way web style values are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

fn hex_val(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse a hex color string: `#RGB`, `#RRGGBB`, `#RRGGBBAA`.
    /// The leading `#` is optional.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let bytes = hex.strip_prefix('#').unwrap_or(hex).as_bytes();
        let pair = |i: usize| Some(hex_val(bytes[i])? << 4 | hex_val(bytes[i + 1])?);
        match bytes.len() {
            3 => {
                let r = hex_val(bytes[0])?;
                let g = hex_val(bytes[1])?;
                let b = hex_val(bytes[2])?;
                Some(Self::rgb(r * 17, g * 17, b * 17))
            }
            6 => Some(Self::rgb(pair(0)?, pair(2)?, pair(4)?)),
            8 => Some(Self {
                r: pair(0)?,
                g: pair(2)?,
                b: pair(4)?,
                a: pair(6)?,
            }),
            _ => None,
        }
    }

    /// Emit as lowercase hex, `#rrggbb` for opaque colors.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

// ─── Styling ─────────────────────────────────────────────────────────────

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Per-element style overrides. Every property is optional; unset
/// properties fall through to the published theme's base styles.
///
/// This is a closed, typed property set rather than a free-form
/// string map — unknown style keys cannot exist in a scene.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Style {
    pub background: Option<Color>,
    pub text_color: Option<Color>,
    pub font_size: Option<f32>,
    pub font_weight: Option<u16>,
    pub corner_radius: Option<f32>,
    pub text_align: Option<TextAlign>,
    pub opacity: Option<f32>,
}

// ─── Element kinds ───────────────────────────────────────────────────────

/// The fixed set of placeable component kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementKind {
    Text,
    Heading,
    Button,
    Image,
    Container,
    Divider,
}

impl ElementKind {
    /// Kinds whose `content` is rendered as editable text.
    /// Double-click opens the inline text editor only for these.
    pub fn is_text_bearing(self) -> bool {
        matches!(self, Self::Text | Self::Heading | Self::Button)
    }

    /// Prefix for generated element IDs (`button_3`, `divider_11`).
    pub fn id_prefix(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Heading => "heading",
            Self::Button => "button",
            Self::Image => "image",
            Self::Container => "container",
            Self::Divider => "divider",
        }
    }

    /// Default content for a freshly placed element of this kind.
    pub fn default_content(self) -> &'static str {
        match self {
            Self::Text => "Add your text here",
            Self::Heading => "Heading",
            Self::Button => "Click Me",
            Self::Image | Self::Container | Self::Divider => "",
        }
    }

    /// Default size for a freshly placed element of this kind.
    pub fn default_size(self) -> Size {
        match self {
            Self::Text => Size::new(240.0, 40.0),
            Self::Heading => Size::new(320.0, 56.0),
            Self::Button => Size::new(120.0, 48.0),
            Self::Image => Size::new(300.0, 200.0),
            Self::Container => Size::new(400.0, 300.0),
            Self::Divider => Size::new(300.0, 20.0),
        }
    }

    /// Default style for a freshly placed element of this kind.
    pub fn default_style(self) -> Style {
        match self {
            Self::Text => Style {
                text_color: Color::from_hex("#1f2937"),
                font_size: Some(16.0),
                ..Style::default()
            },
            Self::Heading => Style {
                text_color: Color::from_hex("#111827"),
                font_size: Some(32.0),
                font_weight: Some(700),
                ..Style::default()
            },
            Self::Button => Style {
                background: Color::from_hex("#3b82f6"),
                text_color: Color::from_hex("#ffffff"),
                font_size: Some(16.0),
                corner_radius: Some(8.0),
                ..Style::default()
            },
            Self::Image => Style {
                background: Color::from_hex("#e5e7eb"),
                ..Style::default()
            },
            Self::Container => Style {
                background: Color::from_hex("#f3f4f6"),
                corner_radius: Some(8.0),
                ..Style::default()
            },
            Self::Divider => Style {
                background: Color::from_hex("#d1d5db"),
                ..Style::default()
            },
        }
    }
}

// ─── Elements & Scene ────────────────────────────────────────────────────

/// A single placed visual object on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Stable identifier, unique within the scene.
    pub id: ElementId,

    /// What kind of component this is.
    pub kind: ElementKind,

    /// Text payload. Only rendered for text-bearing kinds, but kept for
    /// all kinds so `set_content` never has to reject.
    pub content: String,

    /// Style overrides.
    pub style: Style,

    /// Canvas-local top-left corner, always ≥ (0, 0).
    pub position: Point,

    /// Dimensions, respecting the resize floors.
    pub size: Size,

    /// Stacking order — higher paints on top. Not required to stay
    /// contiguous after deletes.
    pub layer: u32,

    /// When locked, drag and resize are ignored; programmatic toggles
    /// still work.
    pub locked: bool,

    /// Hidden elements stay in the scene but are not rendered or
    /// interactive outside preview mode.
    pub hidden: bool,
}

impl Element {
    /// Create a fresh element of `kind` at `position` with the kind's
    /// default content, style, and size.
    pub fn new(kind: ElementKind, position: Point, layer: u32) -> Self {
        Self {
            id: ElementId::generate(kind.id_prefix()),
            kind,
            content: kind.default_content().to_string(),
            style: kind.default_style(),
            position: position.clamped(),
            size: kind.default_size(),
            layer,
            locked: false,
            hidden: false,
        }
    }

    /// Axis-aligned bounds test in canvas coordinates.
    pub fn bounds_contain(&self, x: f32, y: f32) -> bool {
        x >= self.position.x
            && x <= self.position.x + self.size.width
            && y >= self.position.y
            && y <= self.position.y + self.size.height
    }
}

/// The ordered collection of elements in one editing session.
///
/// Scenes are plain values: cheap to clone, compared by value, and never
/// mutated in place by callers — every operation returns a new `Scene`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Scene {
    pub elements: Vec<Element>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an element by ID.
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Highest layer value in use, or 0 for an empty scene.
    /// New elements are placed at `max_layer() + 1`.
    pub fn max_layer(&self) -> u32 {
        self.elements.iter().map(|e| e.layer).max().unwrap_or(0)
    }
}
