//! Demo catalog: the group/item collection fed into the combo list
//!
//! This module bridges app data into the core crate by implementing
//! GroupProvider - either from a toml catalog file or from a built-in
//! sample set.

use anyhow::Result;
use combo_list_core::{Group, GroupProvider, Item};
use serde::Deserialize;

/// On-disk catalog format
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    group: Vec<GroupEntry>,
}

#[derive(Debug, Deserialize)]
struct GroupEntry {
    label: String,
    #[serde(default)]
    item: Vec<ItemEntry>,
}

#[derive(Debug, Deserialize)]
struct ItemEntry {
    label: String,
    tag: i64,
}

/// Provides the group/item collection shown in the combo list
#[derive(Debug, Clone)]
pub struct Catalog {
    groups: Vec<Group>,
}

impl Catalog {
    /// Load from a toml catalog file, falling back to the built-in sample
    /// set when no file is configured or it cannot be read.
    pub fn load(path: Option<&str>) -> Self {
        if let Some(path) = path {
            match Self::from_file(path) {
                Ok(catalog) => {
                    log::debug!("Loaded catalog from {}", path);
                    return catalog;
                }
                Err(err) => {
                    log::warn!("Failed to load catalog {}: {}", path, err);
                }
            }
        }
        Self::builtin()
    }

    fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let file: CatalogFile = toml::from_str(&content)?;
        let groups = file
            .group
            .into_iter()
            .map(|group| {
                let items = group
                    .item
                    .into_iter()
                    .map(|item| Item::new(item.label, item.tag))
                    .collect();
                Group::new(group.label, items)
            })
            .collect();
        Ok(Self { groups })
    }

    /// Built-in sample: a grouped action picker in the style of a terminal
    /// emulator's key-binding editor.
    pub fn builtin() -> Self {
        Self {
            groups: vec![
                Group::new(
                    "Session",
                    vec![
                        Item::new("New Session", 100),
                        Item::new("Close Session", 101),
                        Item::new("Restart Session", 102),
                        Item::new("Duplicate Session", 103),
                    ],
                ),
                Group::new(
                    "Window",
                    vec![
                        Item::new("New Window", 200),
                        Item::new("Close Window", 201),
                        Item::new("Move Window Left", 202),
                        Item::new("Move Window Right", 203),
                        Item::new("Toggle Full Screen", 204),
                    ],
                ),
                Group::new(
                    "Clipboard",
                    vec![
                        Item::new("Copy", 300),
                        Item::new("Paste", 301),
                        Item::new("Paste Special", 302),
                    ],
                ),
                Group::new(
                    "Profiles",
                    vec![
                        Item::new("Open Default Profile", 400),
                        Item::new("Edit Current Profile", 401),
                    ],
                ),
            ],
        }
    }
}

impl GroupProvider for Catalog {
    fn groups(&self) -> Vec<Group> {
        self.groups.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_catalog_has_unique_tags() {
        let catalog = Catalog::builtin();
        let mut tags = HashSet::new();
        for group in catalog.groups() {
            for item in &group.items {
                assert!(tags.insert(item.tag), "tag {} repeated", item.tag);
            }
        }
    }

    #[test]
    fn test_catalog_file_parses_groups_and_items() {
        let toml_src = r#"
            [[group]]
            label = "Fruits"

            [[group.item]]
            label = "Apple"
            tag = 1

            [[group.item]]
            label = "Banana"
            tag = 2

            [[group]]
            label = "Veg"

            [[group.item]]
            label = "Carrot"
            tag = 3
        "#;
        let file: CatalogFile = toml::from_str(toml_src).unwrap();
        assert_eq!(file.group.len(), 2);
        assert_eq!(file.group[0].item.len(), 2);
        assert_eq!(file.group[1].item[0].tag, 3);
    }

    #[test]
    fn test_missing_catalog_file_falls_back_to_builtin() {
        let catalog = Catalog::load(Some("/no/such/catalog.toml"));
        assert!(!catalog.groups().is_empty());
    }
}
