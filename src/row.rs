//! Row description: content, accessory, and behaviors for one list item.
//!
//! A [`Row`] is an immutable value snapshot. "Editing" a table means building
//! new rows and assigning a new section list to the data source; the source
//! never mutates a row in place. Rows are cheap to clone: callbacks, images,
//! and context values are reference-counted.
//!
//! # Identity
//!
//! Every row carries a [`RowId`] that is generated at construction unless the
//! caller supplies one. Equality and hashing use the ID alone: two rows with
//! the same ID are the same logical row even if their display fields differ.
//! IDs must not be reused for distinct logical rows within one data source's
//! lifetime, since event dispatch relies on them being stable.

use std::any::Any;
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::types::{BackgroundEffect, Color, ImageHandle, ViewHandle};

/// Row or accessory activation callback.
pub type SelectionAction = Arc<dyn Fn() + Send + Sync>;

/// String-keyed bag of caller-defined metadata attached to a row.
///
/// The data source never interprets these values; they ride along for the
/// caller's own dispatch logic.
pub type Context = HashMap<String, Arc<dyn Any + Send + Sync>>;

/// A global counter for generating unique row identities.
static ROW_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Stable unique identifier for a row.
///
/// The sole basis for row equality and hashing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(u64);

impl RowId {
    /// Generates a fresh, process-unique identifier.
    pub fn next() -> Self {
        Self(ROW_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Creates an identifier from a caller-chosen value.
    ///
    /// Callers that construct their own IDs are responsible for keeping them
    /// unique among the rows handed to a single data source.
    #[inline]
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier value.
    #[inline]
    pub const fn raw(&self) -> u64 {
        self.0
    }
}

/// String key naming the visual template (cell class) that renders a row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TemplateId(Cow<'static, str>);

impl TemplateId {
    /// The standard two-line template: primary text with secondary detail.
    pub const TWO_LINE: TemplateId = TemplateId(Cow::Borrowed("two-line"));

    /// Creates a template key from any string.
    pub fn new(key: impl Into<Cow<'static, str>>) -> Self {
        Self(key.into())
    }

    /// Returns the registered string key.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TemplateId {
    fn default() -> Self {
        Self::TWO_LINE
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Host-facing rendering hint derived from an accessory variant.
///
/// Hosts that draw their own accessory affordances switch on this instead of
/// matching [`Accessory`] directly, which keeps callback payloads out of the
/// rendering path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessoryHint {
    /// Show nothing.
    None,
    /// Show a chevron.
    Chevron,
    /// Show a checkmark.
    Checkmark,
    /// Show an info button.
    InfoButton,
    /// Show an info button and a chevron.
    InfoButtonChevron,
    /// Show the custom view supplied with the accessory.
    CustomView,
}

/// A small trailing affordance on a row.
#[derive(Clone)]
pub enum Accessory {
    /// No accessory.
    None,
    /// Chevron indicating further navigation.
    DisclosureIndicator,
    /// Checkmark.
    Checkmark,
    /// Info button; the callback runs when the button is activated.
    DetailButton(SelectionAction),
    /// Info button with chevron; the callback runs when the button is activated.
    DetailDisclosureButton(SelectionAction),
    /// Custom host view.
    View(ViewHandle),
}

impl Accessory {
    /// Returns the rendering hint for this variant.
    pub fn hint(&self) -> AccessoryHint {
        match self {
            Accessory::None => AccessoryHint::None,
            Accessory::DisclosureIndicator => AccessoryHint::Chevron,
            Accessory::Checkmark => AccessoryHint::Checkmark,
            Accessory::DetailButton(_) => AccessoryHint::InfoButton,
            Accessory::DetailDisclosureButton(_) => AccessoryHint::InfoButtonChevron,
            Accessory::View(_) => AccessoryHint::CustomView,
        }
    }

    /// Returns the activation callback for the button variants.
    pub fn action(&self) -> Option<&SelectionAction> {
        match self {
            Accessory::DetailButton(action) | Accessory::DetailDisclosureButton(action) => {
                Some(action)
            }
            _ => None,
        }
    }

    /// Returns the custom view for the `View` variant.
    pub fn view(&self) -> Option<ViewHandle> {
        match self {
            Accessory::View(view) => Some(*view),
            _ => None,
        }
    }
}

impl Default for Accessory {
    fn default() -> Self {
        Accessory::None
    }
}

/// Accessories compare by variant tag; callbacks are never compared.
/// Custom views compare by view identity.
impl PartialEq for Accessory {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Accessory::None, Accessory::None) => true,
            (Accessory::DisclosureIndicator, Accessory::DisclosureIndicator) => true,
            (Accessory::Checkmark, Accessory::Checkmark) => true,
            (Accessory::DetailButton(_), Accessory::DetailButton(_)) => true,
            (Accessory::DetailDisclosureButton(_), Accessory::DetailDisclosureButton(_)) => true,
            (Accessory::View(l), Accessory::View(r)) => l == r,
            _ => false,
        }
    }
}

impl Eq for Accessory {}

impl fmt::Debug for Accessory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Accessory::None => write!(f, "Accessory::None"),
            Accessory::DisclosureIndicator => write!(f, "Accessory::DisclosureIndicator"),
            Accessory::Checkmark => write!(f, "Accessory::Checkmark"),
            Accessory::DetailButton(_) => write!(f, "Accessory::DetailButton(..)"),
            Accessory::DetailDisclosureButton(_) => {
                write!(f, "Accessory::DetailDisclosureButton(..)")
            }
            Accessory::View(view) => f.debug_tuple("Accessory::View").field(view).finish(),
        }
    }
}

/// Styling tag for an edit-action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EditActionStyle {
    /// Standard button styling.
    #[default]
    Normal,
    /// Destructive styling, typically red.
    Destructive,
}

/// An action shown when swiping a row to edit, such as Delete.
#[derive(Clone, Default)]
pub struct EditAction {
    title: String,
    style: EditActionStyle,
    background_color: Option<Color>,
    background_effect: Option<BackgroundEffect>,
    action: Option<SelectionAction>,
}

impl EditAction {
    /// Creates an edit action with the given button title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Sets the button style.
    pub fn with_style(mut self, style: EditActionStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets the button background color.
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    /// Sets the visual effect applied to the button background.
    pub fn with_background_effect(mut self, effect: BackgroundEffect) -> Self {
        self.background_effect = Some(effect);
        self
    }

    /// Sets the callback invoked when the action is activated.
    pub fn with_action(mut self, action: impl Fn() + Send + Sync + 'static) -> Self {
        self.action = Some(Arc::new(action));
        self
    }

    /// Title of the action's button.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Styling for the button.
    pub fn style(&self) -> EditActionStyle {
        self.style
    }

    /// Background color of the button, if customized.
    pub fn background_color(&self) -> Option<Color> {
        self.background_color
    }

    /// Visual effect behind the button, if customized.
    pub fn background_effect(&self) -> Option<BackgroundEffect> {
        self.background_effect
    }

    /// Callback invoked when the action is activated.
    pub fn action(&self) -> Option<&SelectionAction> {
        self.action.as_ref()
    }
}

impl fmt::Debug for EditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditAction")
            .field("title", &self.title)
            .field("style", &self.style)
            .field("background_color", &self.background_color)
            .field("background_effect", &self.background_effect)
            .field("has_action", &self.action.is_some())
            .finish()
    }
}

/// Trailing swipe actions for a row, in display order.
///
/// Unlike [`EditAction`]s, which the host renders through its legacy edit
/// affordance, a swipe configuration also controls whether a full-length
/// swipe triggers the first action directly.
#[derive(Clone, Debug, Default)]
pub struct SwipeActionsConfiguration {
    actions: Vec<EditAction>,
    performs_first_action_with_full_swipe: bool,
}

impl SwipeActionsConfiguration {
    /// Creates a configuration from the given actions.
    ///
    /// Full-swipe activation of the first action is enabled by default.
    pub fn new(actions: Vec<EditAction>) -> Self {
        Self {
            actions,
            performs_first_action_with_full_swipe: true,
        }
    }

    /// Sets whether a full-length swipe activates the first action.
    pub fn with_full_swipe(mut self, enabled: bool) -> Self {
        self.performs_first_action_with_full_swipe = enabled;
        self
    }

    /// The actions, in display order.
    pub fn actions(&self) -> &[EditAction] {
        &self.actions
    }

    /// Whether a full-length swipe activates the first action.
    pub fn performs_first_action_with_full_swipe(&self) -> bool {
        self.performs_first_action_with_full_swipe
    }
}

/// Description of one table row.
///
/// All fields have defaults, so construction always succeeds:
///
/// ```
/// use slate_table::{Accessory, Row};
///
/// let row = Row::new()
///     .with_text("Merrily")
///     .with_detail_text("merrily")
///     .with_accessory(Accessory::DisclosureIndicator);
///
/// assert_eq!(row.text(), Some("Merrily"));
/// assert!(!row.is_selectable());
/// ```
#[derive(Clone)]
pub struct Row {
    id: RowId,
    text: Option<String>,
    detail_text: Option<String>,
    accessory: Accessory,
    image: Option<ImageHandle>,
    selection_action: Option<SelectionAction>,
    edit_actions: Vec<EditAction>,
    swipe_actions: Option<SwipeActionsConfiguration>,
    template: Option<TemplateId>,
    context: Option<Context>,
}

impl Row {
    /// Creates an empty row with a freshly generated identifier.
    pub fn new() -> Self {
        Self {
            id: RowId::next(),
            text: None,
            detail_text: None,
            accessory: Accessory::None,
            image: None,
            selection_action: None,
            edit_actions: Vec::new(),
            swipe_actions: None,
            template: None,
            context: None,
        }
    }

    /// Replaces the generated identifier with a caller-supplied one.
    pub fn with_id(mut self, id: RowId) -> Self {
        self.id = id;
        self
    }

    /// Sets the primary display text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Sets the secondary display text.
    pub fn with_detail_text(mut self, detail_text: impl Into<String>) -> Self {
        self.detail_text = Some(detail_text.into());
        self
    }

    /// Sets the accessory.
    pub fn with_accessory(mut self, accessory: Accessory) -> Self {
        self.accessory = accessory;
        self
    }

    /// Sets the row image.
    pub fn with_image(mut self, image: ImageHandle) -> Self {
        self.image = Some(image);
        self
    }

    /// Sets the callback invoked when the row body is selected.
    pub fn with_selection_action(mut self, action: impl Fn() + Send + Sync + 'static) -> Self {
        self.selection_action = Some(Arc::new(action));
        self
    }

    /// Sets the swipe-to-edit actions.
    pub fn with_edit_actions(mut self, actions: Vec<EditAction>) -> Self {
        self.edit_actions = actions;
        self
    }

    /// Sets the trailing swipe-actions configuration.
    pub fn with_swipe_actions(mut self, configuration: SwipeActionsConfiguration) -> Self {
        self.swipe_actions = Some(configuration);
        self
    }

    /// Sets the visual template that renders this row.
    ///
    /// Rows without an explicit template use the data source's default.
    pub fn with_template(mut self, template: TemplateId) -> Self {
        self.template = Some(template);
        self
    }

    /// Attaches caller-defined metadata.
    pub fn with_context(mut self, context: Context) -> Self {
        self.context = Some(context);
        self
    }

    /// The row's stable identifier.
    #[inline]
    pub fn id(&self) -> RowId {
        self.id
    }

    /// The primary display text.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// The secondary display text.
    pub fn detail_text(&self) -> Option<&str> {
        self.detail_text.as_deref()
    }

    /// The row's accessory.
    pub fn accessory(&self) -> &Accessory {
        &self.accessory
    }

    /// The row image.
    pub fn image(&self) -> Option<ImageHandle> {
        self.image
    }

    /// The callback invoked when the row body is selected.
    pub fn selection_action(&self) -> Option<&SelectionAction> {
        self.selection_action.as_ref()
    }

    /// The swipe-to-edit actions, in display order.
    pub fn edit_actions(&self) -> &[EditAction] {
        &self.edit_actions
    }

    /// The trailing swipe-actions configuration.
    pub fn swipe_actions(&self) -> Option<&SwipeActionsConfiguration> {
        self.swipe_actions.as_ref()
    }

    /// The explicit template, if one was set.
    pub fn template(&self) -> Option<&TemplateId> {
        self.template.as_ref()
    }

    /// The registered string key of the explicit template, if one was set.
    pub fn template_identifier(&self) -> Option<&str> {
        self.template.as_ref().map(TemplateId::as_str)
    }

    /// Caller-defined metadata.
    pub fn context(&self) -> Option<&Context> {
        self.context.as_ref()
    }

    /// Returns `true` if the row has edit actions.
    pub fn can_edit(&self) -> bool {
        !self.edit_actions.is_empty()
    }

    /// Returns `true` if the row has a selection action.
    pub fn is_selectable(&self) -> bool {
        self.selection_action.is_some()
    }
}

impl Default for Row {
    fn default() -> Self {
        Self::new()
    }
}

/// Rows compare by identifier only.
impl PartialEq for Row {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Row {}

impl Hash for Row {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Row")
            .field("id", &self.id)
            .field("text", &self.text)
            .field("detail_text", &self.detail_text)
            .field("accessory", &self.accessory)
            .field("selectable", &self.is_selectable())
            .field("edit_actions", &self.edit_actions.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[test]
    fn test_row_equality_is_id_only() {
        let a = Row::new().with_text("Apple");
        let b = a.clone().with_text("Banana");
        assert_eq!(a, b);

        let c = Row::new().with_text("Apple");
        assert_ne!(a, c);
    }

    #[test]
    fn test_row_with_explicit_id() {
        let a = Row::new().with_id(RowId::from_raw(7));
        let b = Row::new().with_id(RowId::from_raw(7));
        assert_eq!(a, b);
        assert_eq!(a.id().raw(), 7);
    }

    #[test]
    fn test_row_hashes_by_id() {
        use std::collections::HashSet;

        let row = Row::new().with_text("Original");
        let renamed = row.clone().with_text("Renamed");

        let mut set = HashSet::new();
        set.insert(row);
        assert!(set.contains(&renamed));
    }

    #[test]
    fn test_accessory_equality_ignores_callbacks() {
        let a = Accessory::DetailButton(Arc::new(|| {}));
        let b = Accessory::DetailButton(Arc::new(|| println!("different")));
        assert_eq!(a, b);

        let c = Accessory::DetailDisclosureButton(Arc::new(|| {}));
        assert_ne!(a, c);
        assert_ne!(Accessory::None, Accessory::Checkmark);
    }

    #[test]
    fn test_accessory_view_equality_is_identity() {
        let view = ViewHandle::new();
        assert_eq!(Accessory::View(view), Accessory::View(view));
        assert_ne!(Accessory::View(view), Accessory::View(ViewHandle::new()));
    }

    #[test]
    fn test_accessory_hints() {
        assert_eq!(Accessory::None.hint(), AccessoryHint::None);
        assert_eq!(Accessory::DisclosureIndicator.hint(), AccessoryHint::Chevron);
        assert_eq!(Accessory::Checkmark.hint(), AccessoryHint::Checkmark);
        assert_eq!(
            Accessory::DetailButton(Arc::new(|| {})).hint(),
            AccessoryHint::InfoButton
        );
        assert_eq!(
            Accessory::DetailDisclosureButton(Arc::new(|| {})).hint(),
            AccessoryHint::InfoButtonChevron
        );
        assert_eq!(
            Accessory::View(ViewHandle::new()).hint(),
            AccessoryHint::CustomView
        );
    }

    #[test]
    fn test_accessory_action_only_on_button_variants() {
        assert!(Accessory::DetailButton(Arc::new(|| {})).action().is_some());
        assert!(
            Accessory::DetailDisclosureButton(Arc::new(|| {}))
                .action()
                .is_some()
        );
        assert!(Accessory::None.action().is_none());
        assert!(Accessory::DisclosureIndicator.action().is_none());
        assert!(Accessory::View(ViewHandle::new()).action().is_none());
    }

    #[test]
    fn test_derived_properties() {
        let plain = Row::new();
        assert!(!plain.can_edit());
        assert!(!plain.is_selectable());
        assert!(plain.template_identifier().is_none());

        let row = Row::new()
            .with_selection_action(|| {})
            .with_edit_actions(vec![EditAction::new("Delete")])
            .with_template(TemplateId::new("compact"));
        assert!(row.can_edit());
        assert!(row.is_selectable());
        assert_eq!(row.template_identifier(), Some("compact"));
    }

    #[test]
    fn test_edit_action_builder() {
        let fired = Arc::new(Mutex::new(0));
        let probe = fired.clone();

        let action = EditAction::new("Delete")
            .with_style(EditActionStyle::Destructive)
            .with_background_color(Color::rgb(1.0, 0.0, 0.0))
            .with_background_effect(BackgroundEffect::Blur)
            .with_action(move || *probe.lock() += 1);

        assert_eq!(action.title(), "Delete");
        assert_eq!(action.style(), EditActionStyle::Destructive);
        assert_eq!(action.background_color(), Some(Color::rgb(1.0, 0.0, 0.0)));
        assert_eq!(action.background_effect(), Some(BackgroundEffect::Blur));

        action.action().unwrap()();
        assert_eq!(*fired.lock(), 1);
    }

    #[test]
    fn test_swipe_actions_configuration() {
        let config = SwipeActionsConfiguration::new(vec![
            EditAction::new("Archive"),
            EditAction::new("Delete").with_style(EditActionStyle::Destructive),
        ]);
        assert!(config.performs_first_action_with_full_swipe());
        assert_eq!(config.actions().len(), 2);

        let config = config.with_full_swipe(false);
        assert!(!config.performs_first_action_with_full_swipe());
    }

    #[test]
    fn test_context_round_trip() {
        let mut context = Context::new();
        context.insert("badge".to_string(), Arc::new(3_u32) as Arc<dyn Any + Send + Sync>);

        let row = Row::new().with_context(context);
        let badge = row
            .context()
            .and_then(|ctx| ctx.get("badge"))
            .and_then(|value| value.downcast_ref::<u32>());
        assert_eq!(badge, Some(&3));
    }
}
