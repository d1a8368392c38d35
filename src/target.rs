//! The host-widget side of the binding.
//!
//! The concrete rendering widget is not part of this crate. A host implements
//! [`TableTarget`] so a [`DataSource`](crate::DataSource) can attach to it;
//! once attached, the host answers its own paint and gesture cycle by calling
//! back into the data source's query surface (`section_count`, `row_count`,
//! `cell_content`, `did_select`, and friends) and renders each
//! [`CellContent`] it receives.

use std::sync::Weak;

use crate::row::{AccessoryHint, RowId, TemplateId};
use crate::source::DataSource;
use crate::types::{ImageHandle, ViewHandle};

/// A host table widget that a [`DataSource`] can bind to.
///
/// Binding is exclusive: a data source drives at most one target, and when it
/// is re-pointed at another widget it first calls `bind_source(None)` on the
/// old one so stale queries can never reach it. The source hands the target a
/// `Weak` back-reference, so an abandoned target never keeps the data source
/// alive.
pub trait TableTarget: Send + Sync {
    /// Installs or clears the data source feeding this widget.
    ///
    /// Called with `Some` when a source attaches and `None` when it detaches.
    /// After a `None` call the widget must not route any further queries or
    /// gesture events to the previously bound source.
    fn bind_source(&self, source: Option<Weak<DataSource>>);

    /// Requests a full re-query of every visible cell.
    ///
    /// The source calls this after its section list is replaced and after a
    /// fresh attach. Whether the re-query happens immediately or on the next
    /// paint cycle is up to the host; the source does not observe completion.
    fn reload(&self);
}

/// Renderable content for one cell, produced by
/// [`DataSource::cell_content`](crate::DataSource::cell_content).
///
/// Everything the host needs to draw the cell, plus the [`RowId`] so the host
/// can correlate later gesture reports with the row that produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct CellContent {
    /// Primary text.
    pub text: Option<String>,
    /// Secondary text.
    pub detail_text: Option<String>,
    /// Leading image.
    pub image: Option<ImageHandle>,
    /// Which accessory affordance to draw.
    pub accessory_hint: AccessoryHint,
    /// Custom accessory view, present only with
    /// [`AccessoryHint::CustomView`].
    pub accessory_view: Option<ViewHandle>,
    /// Visual template that renders this cell.
    pub template: TemplateId,
    /// Identifier of the row this content was built from.
    pub row_id: RowId,
}
