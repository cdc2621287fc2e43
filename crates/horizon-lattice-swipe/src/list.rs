//! Contracts with the host list view and its adapter.
//!
//! The list view renders and recycles rows; the adapter knows the data and,
//! through [`SwipeActionProvider`], which actions each row offers. Both are
//! supplied by the host. [`RowList`] is a headless list view for tests and
//! console hosts.

use crate::action::ActionList;
use crate::row::{RowState, SwipeRow};

/// Provides the actions available for a row.
///
/// Implementations must be pure: the same bound data yields the same list,
/// and the method may be called repeatedly. Return an empty list to disable
/// swiping for a row.
pub trait SwipeActionProvider {
    /// Actions for the row at `position`, in button order.
    fn actions(&self, position: usize) -> ActionList;
}

impl<F> SwipeActionProvider for F
where
    F: Fn(usize) -> ActionList,
{
    fn actions(&self, position: usize) -> ActionList {
        self(position)
    }
}

/// Data adapter bound to a swipeable list.
pub trait SwipeAdapter: SwipeActionProvider {
    /// Number of items in the data set.
    fn item_count(&self) -> usize;
}

/// The list-rendering surface swipe actions are attached to.
pub trait SwipeListView {
    /// The row holder type.
    type Row: SwipeRow;

    /// Width of a row; the full distance a row can be swiped.
    fn row_width(&self) -> f32;

    /// The bound row at `position`, if it is currently materialized.
    fn row_mut(&mut self, position: usize) -> Option<&mut Self::Row>;

    /// Binds an adapter with `item_count` items.
    fn bind_adapter(&mut self, item_count: usize);

    /// Forces the row at `position` to be redrawn from its data.
    fn notify_item_changed(&mut self, position: usize);

    /// Enables or disables click handling on all rows. Called with `false`
    /// while a row is open or settling.
    fn set_items_clickable(&mut self, _clickable: bool) {}
}

/// A headless list view backed by a `Vec` of [`RowState`].
#[derive(Debug, Clone)]
pub struct RowList {
    rows: Vec<RowState>,
    row_width: f32,
    changed: Vec<usize>,
    clickable: bool,
}

impl RowList {
    /// Creates an empty list whose rows are `row_width` wide.
    pub fn new(row_width: f32) -> Self {
        Self {
            rows: Vec::new(),
            row_width,
            changed: Vec::new(),
            clickable: true,
        }
    }

    /// Number of rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the list has no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The row at `position`.
    pub fn row(&self, position: usize) -> Option<&RowState> {
        self.rows.get(position)
    }

    /// Whether rows currently accept clicks.
    #[inline]
    pub fn items_clickable(&self) -> bool {
        self.clickable
    }

    /// Positions passed to [`SwipeListView::notify_item_changed`] since the
    /// last call, in order.
    pub fn take_changed(&mut self) -> Vec<usize> {
        std::mem::take(&mut self.changed)
    }
}

impl SwipeListView for RowList {
    type Row = RowState;

    fn row_width(&self) -> f32 {
        self.row_width
    }

    fn row_mut(&mut self, position: usize) -> Option<&mut RowState> {
        self.rows.get_mut(position)
    }

    fn bind_adapter(&mut self, item_count: usize) {
        self.rows.clear();
        self.rows.resize_with(item_count, RowState::new);
        self.changed.clear();
    }

    fn notify_item_changed(&mut self, position: usize) {
        if let Some(row) = self.rows.get_mut(position) {
            row.request_redraw();
            self.changed.push(position);
        }
    }

    fn set_items_clickable(&mut self, clickable: bool) {
        self.clickable = clickable;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_adapter_creates_closed_rows() {
        let mut list = RowList::new(320.0);
        list.bind_adapter(4);
        assert_eq!(list.len(), 4);
        assert!(list.row(3).is_some_and(|row| !row.is_open()));
        assert!(list.row(4).is_none());
    }

    #[test]
    fn test_notify_item_changed_records_position() {
        let mut list = RowList::new(320.0);
        list.bind_adapter(2);
        list.notify_item_changed(1);
        list.notify_item_changed(7);
        assert_eq!(list.take_changed(), vec![1]);
        assert!(list.take_changed().is_empty());
    }

    #[test]
    fn test_closure_provider() {
        let provider = |position: usize| {
            if position == 0 {
                ActionList::new()
            } else {
                ActionList::from(None)
            }
        };
        assert!(provider.actions(0).is_empty());
        assert!(provider.actions(5).is_empty());
    }
}
