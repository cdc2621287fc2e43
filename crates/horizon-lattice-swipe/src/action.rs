//! Swipe actions and ordered action lists.
//!
//! A [`SwipeAction`] describes one button revealed behind a row. It only
//! carries resource references; resolving them to colors, strings and icons is
//! up to the host's renderer. Actions for a row form an [`ActionList`] whose
//! order is both the left-to-right button layout and the primary-action rule:
//! the last action is the one a long swipe launches.

use std::slice;

/// Reference to a color resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorRef(pub u32);

/// Reference to a dimension resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DimenRef(pub u32);

/// Reference to a string resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StringRef(pub u32);

/// Reference to an icon resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IconRef(pub u32);

/// A single action, launchable by tapping its button or by a long swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwipeAction {
    /// Button background color.
    pub background_color: ColorRef,
    /// Button text color.
    pub text_color: ColorRef,
    /// Button text size.
    pub text_size: DimenRef,
    /// Button label.
    pub text: StringRef,
    /// Icon drawn above the label.
    pub icon: IconRef,
}

impl SwipeAction {
    /// Creates an action.
    pub fn new(
        background_color: ColorRef,
        text_color: ColorRef,
        text_size: DimenRef,
        text: StringRef,
        icon: IconRef,
    ) -> Self {
        Self {
            background_color,
            text_color,
            text_size,
            text,
            icon,
        }
    }
}

/// Button layout chosen from the number of actions a row has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowViewType {
    /// No actions; the row cannot be swiped.
    NoActionButton,
    /// One action button.
    OneActionButton,
    /// Two action buttons.
    TwoActionButton,
    /// Three or more action buttons.
    ThreeActionButton,
}

/// The ordered actions available for one row.
///
/// An empty list means the row has no actions and swiping it is disabled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionList {
    actions: Vec<SwipeAction>,
}

impl ActionList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of actions.
    #[inline]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether the row has no actions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// The action at `index`, counting from the leftmost button.
    pub fn get(&self, index: usize) -> Option<&SwipeAction> {
        self.actions.get(index)
    }

    /// The action a long swipe launches: the last one.
    pub fn primary(&self) -> Option<&SwipeAction> {
        self.actions.last()
    }

    /// Iterates over the actions in button order.
    pub fn iter(&self) -> slice::Iter<'_, SwipeAction> {
        self.actions.iter()
    }

    /// Button layout for this list.
    pub fn view_type(&self) -> RowViewType {
        match self.actions.len() {
            0 => RowViewType::NoActionButton,
            1 => RowViewType::OneActionButton,
            2 => RowViewType::TwoActionButton,
            _ => RowViewType::ThreeActionButton,
        }
    }
}

impl From<Vec<SwipeAction>> for ActionList {
    fn from(actions: Vec<SwipeAction>) -> Self {
        Self { actions }
    }
}

/// A missing list means "no actions".
impl From<Option<Vec<SwipeAction>>> for ActionList {
    fn from(actions: Option<Vec<SwipeAction>>) -> Self {
        actions.map(Self::from).unwrap_or_default()
    }
}

impl From<&[SwipeAction]> for ActionList {
    fn from(actions: &[SwipeAction]) -> Self {
        Self {
            actions: actions.to_vec(),
        }
    }
}

impl FromIterator<SwipeAction> for ActionList {
    fn from_iter<I: IntoIterator<Item = SwipeAction>>(iter: I) -> Self {
        Self {
            actions: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ActionList {
    type Item = &'a SwipeAction;
    type IntoIter = slice::Iter<'a, SwipeAction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(id: u32) -> SwipeAction {
        SwipeAction::new(ColorRef(id), ColorRef(0), DimenRef(0), StringRef(id), IconRef(id))
    }

    #[test]
    fn test_primary_is_last() {
        let list = ActionList::from(vec![action(1), action(2), action(3)]);
        assert_eq!(list.primary(), Some(&action(3)));
        assert_eq!(list.get(0), Some(&action(1)));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_missing_list_is_empty() {
        let list = ActionList::from(None);
        assert!(list.is_empty());
        assert!(list.primary().is_none());
        assert_eq!(list.view_type(), RowViewType::NoActionButton);
    }

    #[test]
    fn test_view_type() {
        let two: ActionList = [action(1), action(2)].into_iter().collect();
        assert_eq!(two.view_type(), RowViewType::TwoActionButton);
        let four: ActionList = (0..4).map(action).collect();
        assert_eq!(four.view_type(), RowViewType::ThreeActionButton);
    }
}
