//! Section description: an ordered group of rows with optional extremities.

use std::fmt;

use crate::row::Row;
use crate::types::ViewHandle;

/// A section header or footer.
///
/// The `Title` variant is sized naturally by the host; the `View` variant
/// must carry an explicit height because the host cannot measure an opaque
/// view handle.
#[derive(Debug, Clone, PartialEq)]
pub enum HeaderFooter {
    /// Plain text, sized by the host.
    Title(String),
    /// Custom host view with an explicit height.
    View {
        /// The host view rendered in the header/footer region.
        view: ViewHandle,
        /// Height of the header/footer region.
        height: f32,
    },
}

impl HeaderFooter {
    /// Returns the title for the `Title` variant.
    pub fn title(&self) -> Option<&str> {
        match self {
            HeaderFooter::Title(title) => Some(title),
            HeaderFooter::View { .. } => None,
        }
    }

    /// Returns the view for the `View` variant.
    pub fn view(&self) -> Option<ViewHandle> {
        match self {
            HeaderFooter::Title(_) => None,
            HeaderFooter::View { view, .. } => Some(*view),
        }
    }

    /// Returns the explicit height for the `View` variant.
    pub fn height(&self) -> Option<f32> {
        match self {
            HeaderFooter::Title(_) => None,
            HeaderFooter::View { height, .. } => Some(*height),
        }
    }
}

impl From<&str> for HeaderFooter {
    fn from(title: &str) -> Self {
        HeaderFooter::Title(title.to_owned())
    }
}

impl From<String> for HeaderFooter {
    fn from(title: String) -> Self {
        HeaderFooter::Title(title)
    }
}

/// An ordered group of rows with an optional header and footer.
///
/// Sections have no identity of their own; the data source addresses them by
/// position in its section list, and row order within a section defines
/// on-screen order.
///
/// ```
/// use slate_table::{Row, Section};
///
/// let section = Section::new(vec![Row::new().with_text("and")])
///     .with_header("Head")
///     .with_footer("shoulders");
///
/// assert_eq!(section.len(), 1);
/// assert_eq!(section.header().unwrap().title(), Some("Head"));
/// ```
#[derive(Clone, Default)]
pub struct Section {
    header: Option<HeaderFooter>,
    rows: Vec<Row>,
    footer: Option<HeaderFooter>,
}

impl Section {
    /// Creates a section containing the given rows.
    pub fn new(rows: Vec<Row>) -> Self {
        Self {
            header: None,
            rows,
            footer: None,
        }
    }

    /// Creates a section with no rows.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Sets the header.
    pub fn with_header(mut self, header: impl Into<HeaderFooter>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Sets the footer.
    pub fn with_footer(mut self, footer: impl Into<HeaderFooter>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// The section header.
    pub fn header(&self) -> Option<&HeaderFooter> {
        self.header.as_ref()
    }

    /// The section footer.
    pub fn footer(&self) -> Option<&HeaderFooter> {
        self.footer.as_ref()
    }

    /// The rows, in display order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the section has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl fmt::Debug for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Section")
            .field("header", &self.header)
            .field("rows", &self.rows.len())
            .field("footer", &self.footer)
            .finish()
    }
}
