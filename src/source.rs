//! The data source: binds a section list to a host table widget.
//!
//! [`DataSource`] owns the entire displayable state as an ordered list of
//! [`Section`]s and answers the host's pull-based queries by direct indexing
//! into that list. There is no caching and no incremental diffing: replacing
//! the section list triggers a full reload of the bound target, after which
//! the host re-queries everything it displays.
//!
//! # Threading and reentrancy
//!
//! All queries and gesture callbacks are expected on the single thread that
//! owns the host widget. Internal locks exist only so that caller-supplied
//! callbacks may re-enter the source: every stored callback is cloned out of
//! the lock before it runs, so a selection action may itself call
//! [`set_sections`](DataSource::set_sections) or
//! [`set_target`](DataSource::set_target).

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::row::{EditAction, Row, SwipeActionsConfiguration, TemplateId};
use crate::section::Section;
use crate::signal::Signal;
use crate::target::{CellContent, TableTarget};
use crate::types::ViewHandle;

/// Errors reported by the checked query surface.
///
/// An out-of-range position indicates the host and the source have
/// desynchronized; the panicking query surface treats it as fatal, while the
/// `try_*` twins surface it as this error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// A section index exceeded the current section count.
    SectionOutOfRange {
        /// The requested section index.
        section: usize,
        /// The current section count.
        count: usize,
    },
    /// A row index exceeded the row count of its section.
    RowOutOfRange {
        /// The section holding the requested row.
        section: usize,
        /// The requested row index.
        row: usize,
        /// The current row count of that section.
        count: usize,
    },
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SectionOutOfRange { section, count } => {
                write!(f, "section index {section} out of range (section count {count})")
            }
            Self::RowOutOfRange { section, row, count } => {
                write!(
                    f,
                    "row index {row} out of range in section {section} (row count {count})"
                )
            }
        }
    }
}

impl std::error::Error for SourceError {}

/// Signals emitted by a [`DataSource`].
///
/// The section list is only ever replaced wholesale, so content changes are
/// announced as a reset bracket rather than fine-grained insert/remove
/// notifications.
pub struct SourceSignals {
    /// Emitted just before the section list is replaced.
    pub sections_about_to_change: Signal<()>,
    /// Emitted after the section list has been replaced.
    pub sections_changed: Signal<()>,
    /// Emitted after the bound target changes.
    pub target_changed: Signal<()>,
}

impl Default for SourceSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceSignals {
    /// Creates a new set of source signals.
    pub fn new() -> Self {
        Self {
            sections_about_to_change: Signal::new(),
            sections_changed: Signal::new(),
            target_changed: Signal::new(),
        }
    }

    /// Emits the replacement bracket around `replace_fn`.
    pub fn emit_sections_changed<F>(&self, replace_fn: F)
    where
        F: FnOnce(),
    {
        self.sections_about_to_change.emit(());
        replace_fn();
        self.sections_changed.emit(());
    }
}

/// Declarative data source for a table widget.
///
/// Construct sections and rows, assign them with
/// [`set_sections`](Self::set_sections), and attach the source to a host with
/// [`set_target`](Self::set_target). The host then pulls counts, cell
/// content, and extremity content on demand and reports gestures back through
/// [`did_select`](Self::did_select) and
/// [`did_activate_accessory`](Self::did_activate_accessory).
///
/// ```
/// use std::sync::Arc;
/// use slate_table::{DataSource, Row, Section};
///
/// let source = Arc::new(DataSource::new());
/// source.set_sections(vec![
///     Section::new(vec![Row::new().with_text("Your"), Row::new().with_text("Boat")]),
/// ]);
///
/// assert_eq!(source.section_count(), 1);
/// assert_eq!(source.row_count(0), 2);
/// assert_eq!(source.cell_content(0, 0).text.as_deref(), Some("Your"));
/// ```
pub struct DataSource {
    sections: RwLock<Vec<Section>>,
    target: RwLock<Option<Arc<dyn TableTarget>>>,
    default_template: TemplateId,
    signals: SourceSignals,
}

impl Default for DataSource {
    fn default() -> Self {
        Self::new()
    }
}

impl DataSource {
    /// Creates an empty data source using the standard two-line template for
    /// rows that do not name their own.
    pub fn new() -> Self {
        Self::with_default_template(TemplateId::default())
    }

    /// Creates an empty data source with an explicit default template.
    pub fn with_default_template(default_template: TemplateId) -> Self {
        Self {
            sections: RwLock::new(Vec::new()),
            target: RwLock::new(None),
            default_template,
            signals: SourceSignals::new(),
        }
    }

    /// The template used for rows without an explicit one.
    pub fn default_template(&self) -> &TemplateId {
        &self.default_template
    }

    /// The signals for this source.
    pub fn signals(&self) -> &SourceSignals {
        &self.signals
    }

    /// Read-only access to the current section list.
    pub fn sections(&self) -> impl std::ops::Deref<Target = Vec<Section>> + '_ {
        self.sections.read()
    }

    /// Replaces the section list atomically.
    ///
    /// If a target is bound it is asked for a full reload; every visible cell
    /// is re-fetched. No partial update is ever attempted.
    pub fn set_sections(&self, sections: Vec<Section>) {
        tracing::trace!(
            target: "slate_table::source",
            sections = sections.len(),
            "replacing section list"
        );
        self.signals.emit_sections_changed(|| {
            *self.sections.write() = sections;
        });
        self.reload_target();
    }

    /// The currently bound target, if any.
    pub fn target(&self) -> Option<Arc<dyn TableTarget>> {
        self.target.read().clone()
    }

    /// Binds this source to a host widget, or detaches it with `None`.
    ///
    /// A previously bound target has its binding cleared first, so stale
    /// queries can never reach this source after retargeting. The new target
    /// receives a `Weak` back-reference and an immediate full reload. The
    /// stored section list is unaffected.
    pub fn set_target(self: &Arc<Self>, target: Option<Arc<dyn TableTarget>>) {
        let previous = {
            let mut slot = self.target.write();
            std::mem::replace(&mut *slot, target.clone())
        };

        if let Some(previous) = previous {
            previous.bind_source(None);
        }
        if let Some(target) = target {
            tracing::trace!(target: "slate_table::source", "binding target");
            target.bind_source(Some(Arc::downgrade(self)));
            target.reload();
        }
        self.signals.target_changed.emit(());
    }

    /// Returns the number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.read().len()
    }

    /// Returns the number of rows in a section.
    ///
    /// # Panics
    ///
    /// Panics if `section` is out of range.
    pub fn row_count(&self, section: usize) -> usize {
        expect(self.try_row_count(section))
    }

    /// Checked variant of [`row_count`](Self::row_count).
    pub fn try_row_count(&self, section: usize) -> Result<usize, SourceError> {
        self.with_section(section, Section::len)
    }

    /// Returns a snapshot of the row at the given position.
    ///
    /// # Panics
    ///
    /// Panics if the position is out of range.
    pub fn row_at(&self, section: usize, row: usize) -> Row {
        expect(self.try_row_at(section, row))
    }

    /// Checked variant of [`row_at`](Self::row_at).
    pub fn try_row_at(&self, section: usize, row: usize) -> Result<Row, SourceError> {
        self.with_row(section, row, Row::clone)
    }

    /// Builds the renderable content for the cell at the given position.
    ///
    /// The returned content carries the row's identifier so the host can
    /// route subsequent gesture reports at this position back to the row.
    ///
    /// # Panics
    ///
    /// Panics if the position is out of range.
    pub fn cell_content(&self, section: usize, row: usize) -> CellContent {
        let row = self.row_at(section, row);
        CellContent {
            text: row.text().map(str::to_owned),
            detail_text: row.detail_text().map(str::to_owned),
            image: row.image(),
            accessory_hint: row.accessory().hint(),
            accessory_view: row.accessory().view(),
            template: row
                .template()
                .cloned()
                .unwrap_or_else(|| self.default_template.clone()),
            row_id: row.id(),
        }
    }

    /// Returns the header title if the section's header is plain text.
    ///
    /// # Panics
    ///
    /// Panics if `section` is out of range.
    pub fn header_title(&self, section: usize) -> Option<String> {
        expect(self.with_section(section, |s| {
            s.header().and_then(|h| h.title()).map(str::to_owned)
        }))
    }

    /// Returns the footer title if the section's footer is plain text.
    ///
    /// # Panics
    ///
    /// Panics if `section` is out of range.
    pub fn footer_title(&self, section: usize) -> Option<String> {
        expect(self.with_section(section, |s| {
            s.footer().and_then(|f| f.title()).map(str::to_owned)
        }))
    }

    /// Returns the header view if the section's header is a custom view.
    ///
    /// # Panics
    ///
    /// Panics if `section` is out of range.
    pub fn header_view(&self, section: usize) -> Option<ViewHandle> {
        expect(self.with_section(section, |s| s.header().and_then(|h| h.view())))
    }

    /// Returns the footer view if the section's footer is a custom view.
    ///
    /// # Panics
    ///
    /// Panics if `section` is out of range.
    pub fn footer_view(&self, section: usize) -> Option<ViewHandle> {
        expect(self.with_section(section, |s| s.footer().and_then(|f| f.view())))
    }

    /// Returns the explicit header height if the header is a custom view.
    ///
    /// # Panics
    ///
    /// Panics if `section` is out of range.
    pub fn header_height(&self, section: usize) -> Option<f32> {
        expect(self.with_section(section, |s| s.header().and_then(|h| h.height())))
    }

    /// Returns the explicit footer height if the footer is a custom view.
    ///
    /// # Panics
    ///
    /// Panics if `section` is out of range.
    pub fn footer_height(&self, section: usize) -> Option<f32> {
        expect(self.with_section(section, |s| s.footer().and_then(|f| f.height())))
    }

    /// Returns `true` if the row at the position has a selection action.
    ///
    /// Hosts use this for "should highlight on touch".
    ///
    /// # Panics
    ///
    /// Panics if the position is out of range.
    pub fn can_select(&self, section: usize, row: usize) -> bool {
        expect(self.with_row(section, row, Row::is_selectable))
    }

    /// Returns `true` if the row at the position has edit actions.
    ///
    /// # Panics
    ///
    /// Panics if the position is out of range.
    pub fn can_edit(&self, section: usize, row: usize) -> bool {
        expect(self.with_row(section, row, Row::can_edit))
    }

    /// Returns the row's edit actions verbatim, in order.
    ///
    /// Invoking an action's callback when its affordance is activated is the
    /// host's responsibility.
    ///
    /// # Panics
    ///
    /// Panics if the position is out of range.
    pub fn edit_actions(&self, section: usize, row: usize) -> Vec<EditAction> {
        expect(self.with_row(section, row, |r| r.edit_actions().to_vec()))
    }

    /// Returns the row's trailing swipe-actions configuration, if any.
    ///
    /// # Panics
    ///
    /// Panics if the position is out of range.
    pub fn trailing_swipe_actions(
        &self,
        section: usize,
        row: usize,
    ) -> Option<SwipeActionsConfiguration> {
        expect(self.with_row(section, row, |r| r.swipe_actions().cloned()))
    }

    /// Reports that the row body at the position was selected.
    ///
    /// Invokes the row's selection action synchronously, exactly once. A row
    /// without one is a no-op: hosts should not report selection on a
    /// non-selectable row, but the source tolerates it. The action may
    /// re-enter this source.
    ///
    /// # Panics
    ///
    /// Panics if the position is out of range.
    pub fn did_select(&self, section: usize, row: usize) {
        let action = expect(self.with_row(section, row, |r| r.selection_action().cloned()));
        match action {
            Some(action) => action(),
            None => tracing::trace!(
                target: "slate_table::source",
                section,
                row,
                "selection reported for a non-selectable row"
            ),
        }
    }

    /// Reports that the row's accessory button at the position was activated.
    ///
    /// Invokes the accessory callback synchronously, exactly once; only the
    /// detail-button variants carry one, every other accessory is a no-op.
    /// The callback may re-enter this source.
    ///
    /// # Panics
    ///
    /// Panics if the position is out of range.
    pub fn did_activate_accessory(&self, section: usize, row: usize) {
        let action = expect(self.with_row(section, row, |r| r.accessory().action().cloned()));
        match action {
            Some(action) => action(),
            None => tracing::trace!(
                target: "slate_table::source",
                section,
                row,
                "accessory activation reported for an accessory without a callback"
            ),
        }
    }

    fn reload_target(&self) {
        let target = self.target.read().clone();
        if let Some(target) = target {
            tracing::trace!(target: "slate_table::source", "requesting full reload");
            target.reload();
        }
    }

    /// Runs `f` against the section at `section`.
    ///
    /// The read guard is released before this returns, so `f` must not stash
    /// borrows; callers clone what they need out of the section.
    fn with_section<R>(
        &self,
        section: usize,
        f: impl FnOnce(&Section) -> R,
    ) -> Result<R, SourceError> {
        let sections = self.sections.read();
        let count = sections.len();
        sections
            .get(section)
            .map(f)
            .ok_or(SourceError::SectionOutOfRange { section, count })
    }

    fn with_row<R>(
        &self,
        section: usize,
        row: usize,
        f: impl FnOnce(&Row) -> R,
    ) -> Result<R, SourceError> {
        self.with_section(section, |s| {
            s.rows()
                .get(row)
                .map(f)
                .ok_or(SourceError::RowOutOfRange {
                    section,
                    row,
                    count: s.len(),
                })
        })?
    }
}

impl fmt::Debug for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataSource")
            .field("sections", &self.sections.read().len())
            .field("bound", &self.target.read().is_some())
            .field("default_template", &self.default_template)
            .finish()
    }
}

fn expect<T>(result: Result<T, SourceError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::{Accessory, AccessoryHint, EditAction, EditActionStyle};
    use crate::section::HeaderFooter;
    use parking_lot::Mutex;
    use std::sync::Weak;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct TestTable {
        source: Mutex<Option<Weak<DataSource>>>,
        reloads: AtomicUsize,
    }

    impl TableTarget for TestTable {
        fn bind_source(&self, source: Option<Weak<DataSource>>) {
            *self.source.lock() = source;
        }

        fn reload(&self) {
            self.reloads.fetch_add(1, Ordering::SeqCst);
        }
    }

    impl TestTable {
        fn bound(&self) -> Option<Arc<DataSource>> {
            self.source.lock().as_ref()?.upgrade()
        }

        fn reload_count(&self) -> usize {
            self.reloads.load(Ordering::SeqCst)
        }
    }

    fn row(text: &str) -> Row {
        Row::new().with_text(text)
    }

    #[test]
    fn test_counts_follow_sections() {
        let source = DataSource::new();
        assert_eq!(source.section_count(), 0);

        source.set_sections(vec![
            Section::new(vec![row("Your"), row("Boat")]),
            Section::new(vec![row("Gently"), row("Down"), row("The"), row("Stream")]),
            Section::new(vec![row("Merrily"), row("Merrily")]),
        ]);
        assert_eq!(source.section_count(), 3);
        assert_eq!(source.row_count(0), 2);
        assert_eq!(source.row_count(1), 4);
        assert_eq!(source.row_count(2), 2);

        source.set_sections(Vec::new());
        assert_eq!(source.section_count(), 0);
    }

    #[test]
    fn test_cell_content() {
        let source = DataSource::new();
        source.set_sections(vec![Section::new(vec![
            row("Merrily")
                .with_detail_text("merrily")
                .with_accessory(Accessory::DisclosureIndicator),
        ])]);

        let cell = source.cell_content(0, 0);
        assert_eq!(cell.text.as_deref(), Some("Merrily"));
        assert_eq!(cell.detail_text.as_deref(), Some("merrily"));
        assert_eq!(cell.accessory_hint, AccessoryHint::Chevron);
        assert!(cell.accessory_view.is_none());
        assert_eq!(cell.template, TemplateId::TWO_LINE);
        assert_eq!(cell.row_id, source.row_at(0, 0).id());
    }

    #[test]
    fn test_cell_content_template_resolution() {
        let source = DataSource::with_default_template(TemplateId::new("compact"));
        source.set_sections(vec![Section::new(vec![
            row("plain"),
            row("custom").with_template(TemplateId::new("banner")),
        ])]);

        assert_eq!(source.cell_content(0, 0).template, TemplateId::new("compact"));
        assert_eq!(source.cell_content(0, 1).template, TemplateId::new("banner"));
    }

    #[test]
    fn test_cell_content_custom_accessory_view() {
        let view = ViewHandle::new();
        let source = DataSource::new();
        source.set_sections(vec![Section::new(vec![
            row("badge").with_accessory(Accessory::View(view)),
        ])]);

        let cell = source.cell_content(0, 0);
        assert_eq!(cell.accessory_hint, AccessoryHint::CustomView);
        assert_eq!(cell.accessory_view, Some(view));
    }

    #[test]
    fn test_extremity_titles() {
        let source = DataSource::new();
        source.set_sections(vec![
            Section::new(vec![row("and")])
                .with_header("Head")
                .with_footer("shoulders"),
            Section::new(vec![row("and")]).with_header("Knees"),
            Section::new(vec![row("and")]).with_footer("toes"),
        ]);

        assert_eq!(source.header_title(0).as_deref(), Some("Head"));
        assert_eq!(source.footer_title(0).as_deref(), Some("shoulders"));
        assert_eq!(source.header_title(1).as_deref(), Some("Knees"));
        assert!(source.footer_title(1).is_none());
        assert!(source.header_title(2).is_none());
        assert_eq!(source.footer_title(2).as_deref(), Some("toes"));
    }

    #[test]
    fn test_extremity_views() {
        let header = ViewHandle::new();
        let footer = ViewHandle::new();
        let source = DataSource::new();
        source.set_sections(vec![
            Section::empty()
                .with_header(HeaderFooter::View { view: header, height: 100.0 })
                .with_footer(HeaderFooter::View { view: footer, height: 44.0 }),
        ]);

        assert_eq!(source.header_view(0), Some(header));
        assert_eq!(source.header_height(0), Some(100.0));
        assert_eq!(source.footer_view(0), Some(footer));
        assert_eq!(source.footer_height(0), Some(44.0));

        // Title extremities report no view and no explicit height.
        source.set_sections(vec![Section::empty().with_header("Head")]);
        assert!(source.header_view(0).is_none());
        assert!(source.header_height(0).is_none());
        assert!(source.header_title(0).is_some());
    }

    #[test]
    fn test_highlight() {
        let source = DataSource::new();
        source.set_sections(vec![Section::new(vec![row("Cookies")])]);
        assert!(!source.can_select(0, 0));

        source.set_sections(vec![Section::new(vec![
            row("Cupcakes").with_selection_action(|| {}),
        ])]);
        assert!(source.can_select(0, 0));
    }

    #[test]
    fn test_selection_invokes_action_once() {
        let fired = Arc::new(AtomicUsize::new(0));
        let probe = fired.clone();

        let source = DataSource::new();
        source.set_sections(vec![Section::new(vec![
            row("Button").with_selection_action(move || {
                probe.fetch_add(1, Ordering::SeqCst);
            }),
        ])]);

        source.did_select(0, 0);
        assert_eq!(fired.load(Ordering::SeqCst), 1);

        source.did_select(0, 0);
        assert_eq!(fired.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_selection_on_non_selectable_row_is_a_noop() {
        let source = DataSource::new();
        source.set_sections(vec![Section::new(vec![row("Plain")])]);
        source.did_select(0, 0);
    }

    #[test]
    fn test_accessory_activation() {
        let fired = Arc::new(AtomicUsize::new(0));
        let probe = fired.clone();

        let source = DataSource::new();
        source.set_sections(vec![Section::new(vec![
            row("Banana Cream Pie").with_accessory(Accessory::DetailButton(Arc::new(move || {
                probe.fetch_add(1, Ordering::SeqCst);
            }))),
            row("No callback").with_accessory(Accessory::DisclosureIndicator),
            row("No accessory"),
        ])]);

        source.did_activate_accessory(0, 0);
        assert_eq!(fired.load(Ordering::SeqCst), 1);

        source.did_activate_accessory(0, 1);
        source.did_activate_accessory(0, 2);
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_edit_actions_returned_verbatim() {
        let source = DataSource::new();
        source.set_sections(vec![Section::new(vec![
            row("Inbox").with_edit_actions(vec![
                EditAction::new("Archive"),
                EditAction::new("Delete").with_style(EditActionStyle::Destructive),
            ]),
            row("Plain"),
        ])]);

        assert!(source.can_edit(0, 0));
        assert!(!source.can_edit(0, 1));

        let actions = source.edit_actions(0, 0);
        assert_eq!(actions.len(), 2);
        assert_eq!(actions[0].title(), "Archive");
        assert_eq!(actions[1].title(), "Delete");
        assert_eq!(actions[1].style(), EditActionStyle::Destructive);

        assert!(source.edit_actions(0, 1).is_empty());
    }

    #[test]
    fn test_trailing_swipe_actions() {
        let source = DataSource::new();
        source.set_sections(vec![Section::new(vec![
            row("Mail").with_swipe_actions(
                SwipeActionsConfiguration::new(vec![EditAction::new("Delete")])
                    .with_full_swipe(false),
            ),
            row("Plain"),
        ])]);

        let config = source.trailing_swipe_actions(0, 0).unwrap();
        assert_eq!(config.actions().len(), 1);
        assert!(!config.performs_first_action_with_full_swipe());

        assert!(source.trailing_swipe_actions(0, 1).is_none());
    }

    #[test]
    fn test_retargeting_detaches_previous_target() {
        let source = Arc::new(DataSource::new());
        source.set_sections(vec![Section::new(vec![row("Row")])]);

        let table_a = Arc::new(TestTable::default());
        source.set_target(Some(table_a.clone()));
        assert!(table_a.bound().is_some_and(|s| Arc::ptr_eq(&s, &source)));
        assert_eq!(table_a.reload_count(), 1);

        let table_b = Arc::new(TestTable::default());
        source.set_target(Some(table_b.clone()));
        assert!(table_a.bound().is_none());
        assert!(table_b.bound().is_some_and(|s| Arc::ptr_eq(&s, &source)));
        assert_eq!(table_b.reload_count(), 1);

        // The queries reaching B reflect the stored sections.
        let via_b = table_b.bound().unwrap();
        assert_eq!(via_b.section_count(), 1);
        assert_eq!(via_b.row_count(0), 1);

        source.set_target(None);
        assert!(table_b.bound().is_none());
        assert!(source.target().is_none());
    }

    #[test]
    fn test_set_sections_reloads_bound_target() {
        let source = Arc::new(DataSource::new());
        let table = Arc::new(TestTable::default());
        source.set_target(Some(table.clone()));
        assert_eq!(table.reload_count(), 1);

        source.set_sections(vec![Section::new(vec![row("Row")])]);
        assert_eq!(table.reload_count(), 2);

        source.set_sections(Vec::new());
        assert_eq!(table.reload_count(), 3);
    }

    #[test]
    fn test_signal_bracket_around_replacement() {
        let source = Arc::new(DataSource::new());
        source.set_sections(vec![Section::new(vec![row("old")])]);

        let observed = Arc::new(Mutex::new(Vec::new()));

        let probe = observed.clone();
        let observer = source.clone();
        source.signals().sections_about_to_change.connect(move |_| {
            probe.lock().push(("before", observer.section_count()));
        });

        let probe = observed.clone();
        let observer = source.clone();
        source.signals().sections_changed.connect(move |_| {
            probe.lock().push(("after", observer.section_count()));
        });

        source.set_sections(vec![Section::empty(), Section::empty()]);

        let events = observed.lock();
        assert_eq!(*events, vec![("before", 1), ("after", 2)]);
    }

    #[test]
    fn test_selection_action_may_reenter_set_sections() {
        let source = Arc::new(DataSource::new());

        let inner = Arc::downgrade(&source);
        source.set_sections(vec![Section::new(vec![
            row("Clear").with_selection_action(move || {
                if let Some(source) = inner.upgrade() {
                    source.set_sections(Vec::new());
                }
            }),
        ])]);

        source.did_select(0, 0);
        assert_eq!(source.section_count(), 0);
    }

    #[test]
    fn test_try_queries_report_positions() {
        let source = DataSource::new();
        source.set_sections(vec![Section::new(vec![row("only")])]);

        assert_eq!(
            source.try_row_count(3),
            Err(SourceError::SectionOutOfRange { section: 3, count: 1 })
        );
        let err = source.try_row_at(0, 5).unwrap_err();
        assert_eq!(
            err,
            SourceError::RowOutOfRange { section: 0, row: 5, count: 1 }
        );
        assert_eq!(
            err.to_string(),
            "row index 5 out of range in section 0 (row count 1)"
        );

        assert!(source.try_row_at(0, 0).is_ok());
    }

    #[test]
    #[should_panic(expected = "section index 0 out of range")]
    fn test_row_count_panics_out_of_range() {
        DataSource::new().row_count(0);
    }

    #[test]
    #[should_panic(expected = "row index 1 out of range in section 0")]
    fn test_did_select_panics_out_of_range() {
        let source = DataSource::new();
        source.set_sections(vec![Section::new(vec![row("only")])]);
        source.did_select(0, 1);
    }
}
