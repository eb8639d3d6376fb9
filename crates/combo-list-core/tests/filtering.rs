//! End-to-end filtering scenarios over a realistic grouped catalog

use combo_list_core::{ComboList, Group, Invalidation, Item, RowContent};

fn catalog() -> Vec<Group> {
    vec![
        Group::new(
            "Session",
            vec![
                Item::new("New Session", 100),
                Item::new("Close Session", 101),
                Item::new("Restart Session", 102),
            ],
        ),
        Group::new(
            "Window",
            vec![
                Item::new("New Window", 200),
                Item::new("Move Window Left", 201),
            ],
        ),
        Group::new("Clipboard", vec![Item::new("Paste Special", 300)]),
    ]
}

fn visible_labels(list: &ComboList) -> Vec<String> {
    (0..list.row_count())
        .map(|i| match list.row_at(i) {
            RowContent::Group(group) => format!("[{}]", group.label),
            RowContent::Item(item, _) => item.label.clone(),
        })
        .collect()
}

#[test]
fn empty_filter_shows_every_row_in_order() {
    let list = ComboList::new(catalog());
    assert_eq!(
        visible_labels(&list),
        vec![
            "[Session]",
            "New Session",
            "Close Session",
            "Restart Session",
            "[Window]",
            "New Window",
            "Move Window Left",
            "[Clipboard]",
            "Paste Special",
        ]
    );
}

#[test]
fn filtering_keeps_relative_order() {
    let mut list = ComboList::new(catalog());
    list.set_filter("new");
    assert_eq!(
        visible_labels(&list),
        vec!["[Session]", "New Session", "[Window]", "New Window"]
    );
}

#[test]
fn header_is_retained_while_a_child_matches() {
    let mut list = ComboList::new(catalog());
    list.set_filter("paste");
    // "Clipboard" does not start with "paste" but its child does
    assert_eq!(visible_labels(&list), vec!["[Clipboard]", "Paste Special"]);
}

#[test]
fn matching_header_promotes_all_children() {
    let mut list = ComboList::new(catalog());
    list.set_filter("win");
    // "Move Window Left" matches on its own; "New Window" does too, but the
    // header match alone would keep both
    assert_eq!(
        visible_labels(&list),
        vec!["[Window]", "New Window", "Move Window Left"]
    );
}

#[test]
fn multi_token_filter_uses_and_semantics() {
    let mut list = ComboList::new(catalog());
    list.set_filter("new se");
    assert_eq!(visible_labels(&list), vec!["[Session]", "New Session"]);
}

#[test]
fn unmatched_filter_empties_the_list() {
    let mut list = ComboList::new(catalog());
    list.set_filter("zzz");
    assert!(visible_labels(&list).is_empty());
}

#[test]
fn refiltering_with_the_same_string_is_idempotent() {
    let mut list = ComboList::new(catalog());
    list.set_filter("win");
    let first = visible_labels(&list);
    assert_eq!(list.set_filter("win"), Invalidation::None);
    assert_eq!(visible_labels(&list), first);
}

#[test]
fn selection_round_trips_through_a_hiding_filter() {
    let mut list = ComboList::new(catalog());
    list.set_selected_tag(Some(201)); // Move Window Left

    list.set_filter("paste"); // hides everything under Window
    assert_eq!(list.selected_tag(), Some(201));
    assert!(list.row_index_of_tag(201).is_none());

    list.set_filter("");
    let row = list.row_index_of_tag(201).expect("row restored");
    assert_eq!(list.tag_at(row), Some(201));
    assert_eq!(list.selected_tag(), Some(201));
}
