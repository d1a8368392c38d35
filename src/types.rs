//! Opaque handles and visual primitives shared across the data model.
//!
//! The data source never renders anything itself, so custom header views,
//! accessory views, and row images are carried as opaque identity handles
//! that the host widget resolves to its own view and image objects. Two
//! handles compare equal only when they refer to the same underlying object.

use std::sync::atomic::{AtomicU64, Ordering};

/// A global counter for generating unique handle identities.
static HANDLE_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

fn next_handle_id() -> u64 {
    HANDLE_ID_COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// Identity handle for a host-owned view object.
///
/// Used for custom section headers/footers and custom row accessories.
/// Equality is object identity: a clone of a handle refers to the same view,
/// while two separately created handles never compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewHandle(u64);

impl ViewHandle {
    /// Creates a handle with a fresh identity.
    pub fn new() -> Self {
        Self(next_handle_id())
    }

    /// Returns the raw identity value.
    ///
    /// Hosts typically use this as a key into their own view registry.
    #[inline]
    pub fn id(&self) -> u64 {
        self.0
    }
}

impl Default for ViewHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Identity handle for a host-owned image object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageHandle(u64);

impl ImageHandle {
    /// Creates a handle with a fresh identity.
    pub fn new() -> Self {
        Self(next_handle_id())
    }

    /// Returns the raw identity value.
    #[inline]
    pub fn id(&self) -> u64 {
        self.0
    }
}

impl Default for ImageHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// An RGBA color with components in the 0.0-1.0 range.
///
/// Used for edit-action button backgrounds. The host maps this to its own
/// color type when rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Creates a color from RGBA components (0.0-1.0 range).
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from RGB components.
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Creates a color from 8-bit RGBA components.
    #[inline]
    pub fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }
}

/// Visual effect applied behind an edit-action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackgroundEffect {
    /// Blur of the content behind the button.
    Blur,
    /// Vibrancy effect layered over a blur.
    Vibrancy,
}
