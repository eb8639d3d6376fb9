//! Input collection types and the flattened row projection

use crate::tokens::tokenize;

/// A selectable entry in the list.
///
/// The tag is an opaque integer identifying the item uniquely across the
/// whole list. It is the stable selection key across filter changes and
/// can only ever mean an item; group rows never carry one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub label: String,
    pub tag: i64,
    label_tokens: Vec<String>,
}

impl Item {
    pub fn new(label: impl Into<String>, tag: i64) -> Self {
        let label = label.into();
        let label_tokens = tokenize(&label);
        Self {
            label,
            tag,
            label_tokens,
        }
    }

    /// Tokenized label, computed once at construction.
    pub fn label_tokens(&self) -> &[String] {
        &self.label_tokens
    }
}

/// A labeled group of items.
///
/// Groups have no tag; they are identified by position in the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub label: String,
    pub items: Vec<Item>,
    label_tokens: Vec<String>,
}

impl Group {
    pub fn new(label: impl Into<String>, items: Vec<Item>) -> Self {
        let label = label.into();
        let label_tokens = tokenize(&label);
        Self {
            label,
            items,
            label_tokens,
        }
    }

    /// Tokenized label, computed once at construction.
    pub fn label_tokens(&self) -> &[String] {
        &self.label_tokens
    }
}

/// One row of the flattened group/item sequence.
///
/// Rows reference the source collection by index rather than owning it;
/// they are rebuilt whenever the collection is resupplied. `index` is the
/// position in the unfiltered sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row {
    Group {
        group: usize,
        index: usize,
    },
    Item {
        group: usize,
        item: usize,
        tag: i64,
        index: usize,
    },
}

impl Row {
    /// The selection key for item rows; group rows have none.
    pub fn tag(&self) -> Option<i64> {
        match *self {
            Row::Group { .. } => None,
            Row::Item { tag, .. } => Some(tag),
        }
    }

    /// Position in the unfiltered sequence.
    pub fn index(&self) -> usize {
        match *self {
            Row::Group { index, .. } | Row::Item { index, .. } => index,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, Row::Group { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_tokens_computed_at_construction() {
        let item = Item::new("New Tab", 7);
        assert_eq!(item.label_tokens(), ["new", "tab"]);
        assert_eq!(item.tag, 7);
    }

    #[test]
    fn test_group_rows_never_carry_a_tag() {
        let row = Row::Group { group: 0, index: 0 };
        assert!(row.tag().is_none());
        assert!(row.is_group());
    }

    #[test]
    fn test_item_row_exposes_tag_and_index() {
        let row = Row::Item {
            group: 0,
            item: 1,
            tag: 42,
            index: 2,
        };
        assert_eq!(row.tag(), Some(42));
        assert_eq!(row.index(), 2);
        assert!(!row.is_group());
    }
}
