//! The combo list model: flattening, filtering, and selection identity

use std::collections::HashSet;

use log::debug;

use crate::query::Query;
use crate::rows::{Group, Item, Row};

/// What the rendering layer must refresh after a model mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invalidation {
    /// Nothing visible changed.
    None,
    /// Refresh only these filtered-row positions (a checkmark moved).
    Rows(Vec<usize>),
    /// Row identities and positions changed arbitrarily; reload everything.
    Reload,
}

/// Observer notified whenever the selected item changes.
///
/// `None` means "no item selected". This is the widget's delegate surface;
/// the model never assumes anything about who is listening.
pub trait SelectionObserver {
    fn selection_changed(&mut self, item: Option<&Item>);
}

/// Supplies the group/item collection at construction time.
pub trait GroupProvider {
    fn groups(&self) -> Vec<Group>;
}

/// Borrowed view of one filtered row, for rendering.
///
/// Item rows carry their parent group so a renderer can show context
/// without a second lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowContent<'a> {
    Group(&'a Group),
    Item(&'a Item, &'a Group),
}

/// A searchable, grouped combo list.
///
/// Holds the two-level collection flattened into an unfiltered row
/// sequence, the filtered subsequence for the current filter string, and
/// a tag-keyed selection. Filtering is a full, synchronous recomputation
/// on every filter change; row counts are small enough that diffing
/// would buy nothing.
#[derive(Debug, Clone, Default)]
pub struct ComboList {
    groups: Vec<Group>,
    unfiltered_rows: Vec<Row>,
    filtered_rows: Vec<Row>,
    filter: String,
    selected_tag: Option<i64>,
    previously_selected_tag: Option<i64>,
}

impl ComboList {
    /// Build the list from a group collection.
    ///
    /// # Panics
    ///
    /// Panics if two items share a tag. Tags are the selection identity
    /// and must be unique across the whole list; a duplicate is a
    /// programming error, not a recoverable condition.
    pub fn new(groups: Vec<Group>) -> Self {
        let mut list = Self::default();
        list.rebuild(groups);
        list
    }

    /// Build the list by querying a provider for the collection.
    pub fn from_provider(provider: &impl GroupProvider) -> Self {
        Self::new(provider.groups())
    }

    /// Replace the group collection and rebuild both row sequences.
    ///
    /// The selected tag is retained; if the new collection no longer
    /// contains it, the selection simply has no row to land on.
    pub fn set_groups(&mut self, groups: Vec<Group>) -> Invalidation {
        self.rebuild(groups);
        Invalidation::Reload
    }

    /// The current filter string.
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Change the filter string and recompute the filtered sequence.
    ///
    /// Row identities and positions can change arbitrarily between filter
    /// strings, so any change answers with a full reload.
    pub fn set_filter(&mut self, filter: &str) -> Invalidation {
        if filter == self.filter {
            return Invalidation::None;
        }
        self.filter = filter.to_string();
        self.update_filtered_rows();
        Invalidation::Reload
    }

    /// Number of rows in the filtered sequence.
    pub fn row_count(&self) -> usize {
        self.filtered_rows.len()
    }

    /// Number of rows before filtering (groups plus items).
    pub fn unfiltered_row_count(&self) -> usize {
        self.unfiltered_rows.len()
    }

    /// Content of the filtered row at `index`.
    pub fn row_at(&self, index: usize) -> RowContent<'_> {
        match self.filtered_rows[index] {
            Row::Group { group, .. } => RowContent::Group(&self.groups[group]),
            Row::Item { group, item, .. } => {
                RowContent::Item(&self.groups[group].items[item], &self.groups[group])
            }
        }
    }

    /// Whether the filtered row at `index` is a group header.
    pub fn is_group_row(&self, index: usize) -> bool {
        self.filtered_rows[index].is_group()
    }

    /// Whether the filtered row at `index` can be selected.
    pub fn is_selectable(&self, index: usize) -> bool {
        !self.is_group_row(index)
    }

    /// The tag of the filtered row at `index`, if it is an item row.
    pub fn tag_at(&self, index: usize) -> Option<i64> {
        self.filtered_rows[index].tag()
    }

    /// Position of the row carrying `tag` in the filtered sequence.
    ///
    /// `None` when the tag's row is currently filtered out; the selection
    /// itself is unaffected by that.
    pub fn row_index_of_tag(&self, tag: i64) -> Option<usize> {
        self.filtered_rows.iter().position(|row| row.tag() == Some(tag))
    }

    /// The item carrying `tag`, searched within the filtered sequence.
    pub fn item_with_tag(&self, tag: Option<i64>) -> Option<&Item> {
        let tag = tag?;
        self.filtered_rows.iter().find_map(|row| match *row {
            Row::Item {
                group, item, tag: t, ..
            } if t == tag => Some(&self.groups[group].items[item]),
            _ => None,
        })
    }

    /// The committed selection, by tag.
    pub fn selected_tag(&self) -> Option<i64> {
        self.selected_tag
    }

    /// Commit a selection by tag (`None` clears it).
    ///
    /// Answers with the filtered-row positions of both the previous and
    /// the new selection where present, so a renderer can move its
    /// indicator without reloading. Tags whose rows are filtered out stay
    /// selected; they just contribute no row to refresh.
    pub fn set_selected_tag(&mut self, tag: Option<i64>) -> Invalidation {
        self.previously_selected_tag = self.selected_tag;
        self.selected_tag = tag;

        let mut rows: Vec<usize> = Vec::new();
        for t in [self.previously_selected_tag, self.selected_tag]
            .into_iter()
            .flatten()
        {
            if let Some(row_index) = self.row_index_of_tag(t) {
                if !rows.contains(&row_index) {
                    rows.push(row_index);
                }
            }
        }
        if rows.is_empty() {
            Invalidation::None
        } else {
            Invalidation::Rows(rows)
        }
    }

    /// Row-position driven selection.
    ///
    /// `None` announces "no item selected" without touching the committed
    /// tag. Group rows are not selectable and are ignored. Item rows
    /// commit their tag and notify the observer.
    pub fn select(
        &mut self,
        index: Option<usize>,
        observer: &mut impl SelectionObserver,
    ) -> Invalidation {
        let Some(index) = index else {
            observer.selection_changed(None);
            return Invalidation::None;
        };
        match self.filtered_rows[index] {
            Row::Group { .. } => Invalidation::None,
            Row::Item { tag, .. } => {
                let invalidation = self.set_selected_tag(Some(tag));
                observer.selection_changed(self.item_with_tag(Some(tag)));
                invalidation
            }
        }
    }

    fn rebuild(&mut self, groups: Vec<Group>) {
        let mut seen_tags = HashSet::new();
        let mut rows = Vec::new();
        let mut index = 0;
        for (g, group) in groups.iter().enumerate() {
            rows.push(Row::Group { group: g, index });
            index += 1;
            for (i, item) in group.items.iter().enumerate() {
                assert!(
                    seen_tags.insert(item.tag),
                    "duplicate item tag {} in group {:?}",
                    item.tag,
                    group.label
                );
                rows.push(Row::Item {
                    group: g,
                    item: i,
                    tag: item.tag,
                    index,
                });
                index += 1;
            }
        }
        self.groups = groups;
        self.unfiltered_rows = rows;
        self.update_filtered_rows();
    }

    fn update_filtered_rows(&mut self) {
        let query = Query::new(&self.filter);
        let filtered: Vec<Row> = self
            .unfiltered_rows
            .iter()
            .copied()
            .filter(|row| row_matches(&self.groups, *row, &query))
            .collect();
        debug!(
            "filter {:?} kept {} of {} rows",
            self.filter,
            filtered.len(),
            self.unfiltered_rows.len()
        );
        self.filtered_rows = filtered;
    }
}

/// The row matching policy: relevance is inherited both ways.
///
/// An item matches through its own label or its group's label, so a
/// clearly matching header keeps all its children discoverable. A group
/// matches through its own label or any child's label, so a header never
/// disappears while one of its children is still shown.
fn row_matches(groups: &[Group], row: Row, query: &Query) -> bool {
    match row {
        Row::Item { group, item, .. } => {
            let group = &groups[group];
            if query.matches(group.label_tokens()) {
                return true;
            }
            query.matches(group.items[item].label_tokens())
        }
        Row::Group { group, .. } => {
            let group = &groups[group];
            if query.matches(group.label_tokens()) {
                return true;
            }
            group
                .items
                .iter()
                .any(|item| query.matches(item.label_tokens()))
        }
    }
}
