use super::hotkey::Hotkey;
use crate::catalog::PhraseCatalog;
use crate::utils::ItcError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

/// One persisted Alt+key binding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortcutBinding {
    pub index: usize,
    pub key: Hotkey,
}

/// Catalog index -> hotkey, with every key used at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortcutMap {
    bindings: BTreeMap<usize, Hotkey>,
    catalog_len: usize,
}

impl ShortcutMap {
    /// Bindings taken from the catalog's default hotkey column.
    ///
    /// Entries whose default is unparseable or already taken are left unbound.
    pub fn defaults(catalog: &PhraseCatalog) -> Self {
        let mut map = Self {
            bindings: BTreeMap::new(),
            catalog_len: catalog.len(),
        };

        for (index, entry) in catalog.entries().iter().enumerate() {
            let Some(raw) = entry.hotkey.as_deref() else {
                continue;
            };
            match Hotkey::parse(raw) {
                Ok(key) => {
                    if let Err(e) = map.rebind(index, key) {
                        warn!("Skipping default hotkey for phrase #{}: {}", index, e);
                    }
                }
                Err(e) => warn!("Skipping default hotkey for phrase #{}: {}", index, e),
            }
        }
        map
    }

    /// Strict constructor: any duplicate key or out-of-range index is an error.
    pub fn from_bindings(bindings: &[ShortcutBinding], catalog_len: usize) -> Result<Self, ItcError> {
        let mut map = Self {
            bindings: BTreeMap::new(),
            catalog_len,
        };
        for binding in bindings {
            if map.bindings.contains_key(&binding.index) {
                return Err(ItcError::InvalidHotkey(format!(
                    "phrase #{} is bound twice",
                    binding.index
                )));
            }
            map.rebind(binding.index, binding.key.clone())?;
        }
        Ok(map)
    }

    pub fn lookup(&self, key: &Hotkey) -> Option<usize> {
        self.bindings
            .iter()
            .find(|(_, bound)| *bound == key)
            .map(|(index, _)| *index)
    }

    pub fn key_for(&self, index: usize) -> Option<&Hotkey> {
        self.bindings.get(&index)
    }

    /// Bind `index` to `key`, replacing its previous key.
    pub fn rebind(&mut self, index: usize, key: Hotkey) -> Result<(), ItcError> {
        if index >= self.catalog_len {
            return Err(ItcError::EntryNotFound(index));
        }
        if let Some(owner) = self.lookup(&key) {
            if owner == index {
                return Ok(());
            }
            return Err(ItcError::ShortcutConflict {
                key: key.to_string(),
                index: owner,
            });
        }
        self.bindings.insert(index, key);
        Ok(())
    }

    pub fn unbind(&mut self, index: usize) -> Option<Hotkey> {
        self.bindings.remove(&index)
    }

    pub fn to_bindings(&self) -> Vec<ShortcutBinding> {
        self.bindings
            .iter()
            .map(|(index, key)| ShortcutBinding {
                index: *index,
                key: key.clone(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PhraseEntry;

    fn key(s: &str) -> Hotkey {
        Hotkey::parse(s).unwrap()
    }

    fn two_phrase_catalog() -> PhraseCatalog {
        PhraseCatalog::new(vec![
            PhraseEntry::new("ﷺ", "salutation").with_hotkey("1"),
            PhraseEntry::new("ﷻ", "majesty").with_hotkey("2"),
        ])
    }

    #[test]
    fn test_defaults_follow_catalog() {
        let map = ShortcutMap::defaults(&PhraseCatalog::builtin());
        assert_eq!(map.len(), 16);
        assert_eq!(map.lookup(&key("Alt+1")), Some(0));
        assert_eq!(map.lookup(&key("Alt+'")), Some(15));
    }

    #[test]
    fn test_defaults_skip_duplicate_keys() {
        let catalog = PhraseCatalog::new(vec![
            PhraseEntry::new("ﷺ", "a").with_hotkey("1"),
            PhraseEntry::new("ﷻ", "b").with_hotkey("1"),
            PhraseEntry::new("﷽", "c").with_hotkey("not a key"),
        ]);
        let map = ShortcutMap::defaults(&catalog);
        assert_eq!(map.len(), 1);
        assert_eq!(map.lookup(&key("1")), Some(0));
        assert!(map.key_for(1).is_none());
    }

    #[test]
    fn test_rebind_conflict() {
        let mut map = ShortcutMap::defaults(&two_phrase_catalog());
        let err = map.rebind(1, key("Alt+1")).unwrap_err();
        assert!(matches!(err, ItcError::ShortcutConflict { index: 0, .. }));
        // Unchanged after the failed rebind
        assert_eq!(map.key_for(1), Some(&key("2")));
    }

    #[test]
    fn test_rebind_same_key_is_noop() {
        let mut map = ShortcutMap::defaults(&two_phrase_catalog());
        map.rebind(0, key("1")).unwrap();
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_rebind_frees_old_key() {
        let mut map = ShortcutMap::defaults(&two_phrase_catalog());
        map.rebind(0, key("q")).unwrap();
        assert_eq!(map.lookup(&key("1")), None);
        map.rebind(1, key("1")).unwrap();
        assert_eq!(map.lookup(&key("1")), Some(1));
    }

    #[test]
    fn test_from_bindings_rejects_out_of_range() {
        let bindings = vec![ShortcutBinding {
            index: 5,
            key: key("1"),
        }];
        assert!(matches!(
            ShortcutMap::from_bindings(&bindings, 2),
            Err(ItcError::EntryNotFound(5))
        ));
    }

    #[test]
    fn test_bindings_round_trip() {
        let map = ShortcutMap::defaults(&two_phrase_catalog());
        let rebuilt = ShortcutMap::from_bindings(&map.to_bindings(), 2).unwrap();
        assert_eq!(rebuilt, map);
    }
}
