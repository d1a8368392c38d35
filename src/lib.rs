//! Declarative section/row data source for table and list views.
//!
//! This crate lets callers describe table content as plain data instead of
//! implementing a widget's callback protocol by hand. Content is a list of
//! [`Section`]s, each holding ordered [`Row`]s with display text, an
//! accessory, and optional behaviors. A [`DataSource`] binds that model to a
//! host widget and answers the widget's pull-based queries by indexing into
//! the current list.
//!
//! # Core Types
//!
//! - [`Row`]: one list item, with content, an [`Accessory`], and callbacks
//! - [`Section`]: an ordered group of rows with optional header/footer
//! - [`DataSource`]: the adapter binding sections to a [`TableTarget`]
//! - [`TableTarget`]: the callback surface a host widget implements
//! - [`CellContent`]: the renderable the host receives per cell
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use slate_table::{Accessory, DataSource, Row, Section};
//!
//! let source = Arc::new(DataSource::new());
//! source.set_sections(vec![
//!     Section::new(vec![
//!         Row::new()
//!             .with_text("Notifications")
//!             .with_accessory(Accessory::DisclosureIndicator)
//!             .with_selection_action(|| println!("open notification settings")),
//!     ])
//!     .with_header("Settings"),
//! ]);
//!
//! assert_eq!(source.section_count(), 1);
//! assert_eq!(source.header_title(0).as_deref(), Some("Settings"));
//! assert!(source.can_select(0, 0));
//! ```
//!
//! # Architecture Overview
//!
//! ```text
//! ┌──────────────┐  set_sections   ┌──────────────┐  pull queries  ┌──────────────┐
//! │    Caller    │────────────────>│  DataSource  │<───────────────│ Host widget  │
//! │ (Sections,   │                 │  (adapter)   │────────────────│ (TableTarget)│
//! │  Rows)       │<────────────────│              │  CellContent,  │              │
//! └──────────────┘  callbacks run  └──────────────┘  reload        └──────────────┘
//! ```
//!
//! Data flows one direction: the caller assigns sections, the host pulls
//! counts and [`CellContent`] on demand, and gestures the host reports are
//! routed back to the callbacks stored on the addressed row. Replacing the
//! section list triggers a full reload of the bound target; there is no
//! incremental diffing.
//!
//! # Threading
//!
//! The data source is callback-driven and expects to live on the single
//! thread that owns the host widget. Its internal locks exist to keep reads
//! consistent when a stored callback re-enters the source, not to support
//! concurrent callers.

mod row;
mod section;
mod signal;
mod source;
mod target;
mod types;

pub use row::{
    Accessory, AccessoryHint, Context, EditAction, EditActionStyle, Row, RowId, SelectionAction,
    SwipeActionsConfiguration, TemplateId,
};
pub use section::{HeaderFooter, Section};
pub use signal::{ConnectionId, Signal};
pub use source::{DataSource, SourceError, SourceSignals};
pub use target::{CellContent, TableTarget};
pub use types::{BackgroundEffect, Color, ImageHandle, ViewHandle};
