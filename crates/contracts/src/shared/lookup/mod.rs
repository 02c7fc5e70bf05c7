//! Справочники (master data): разрешение бизнес-кода в запись справочника
//!
//! Ядро зависит только от трейта [`Lookup`]. Моковые словари и будущий сетевой
//! справочник (после загрузки снимка) реализуют один и тот же контракт.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Результат разрешения кода
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Resolution<E> {
    Found(E),
    NotFound,
}

impl<E> Resolution<E> {
    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Found(_))
    }

    pub fn into_option(self) -> Option<E> {
        match self {
            Resolution::Found(entry) => Some(entry),
            Resolution::NotFound => None,
        }
    }
}

impl<E> From<Option<E>> for Resolution<E> {
    fn from(value: Option<E>) -> Self {
        value.map_or(Resolution::NotFound, Resolution::Found)
    }
}

/// Запись справочника с бизнес-кодом
pub trait MasterDataEntry {
    fn code(&self) -> &str;
}

/// Справочник: код -> запись. Промах - это `NotFound`, не ошибка.
pub trait Lookup {
    type Entry;

    fn resolve(&self, code: &str) -> Resolution<Self::Entry>;
}

/// Нормализация кода перед поиском
pub fn normalize_code(code: &str) -> String {
    code.to_uppercase()
}

/// Справочник в памяти, ключи хранятся в верхнем регистре
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MasterData<E> {
    entries: HashMap<String, E>,
}

impl<E> Default for MasterData<E> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<E: MasterDataEntry> MasterData<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entry: E) {
        self.entries.insert(normalize_code(entry.code()), entry);
    }

    pub fn get(&self, code: &str) -> Option<&E> {
        self.entries.get(&normalize_code(code))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Коды в алфавитном порядке (для подсказок в поле ввода кода)
    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }
}

impl<E: MasterDataEntry> FromIterator<E> for MasterData<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut data = MasterData::new();
        for entry in iter {
            data.insert(entry);
        }
        data
    }
}

impl<E: MasterDataEntry + Clone> Lookup for MasterData<E> {
    type Entry = E;

    fn resolve(&self, code: &str) -> Resolution<E> {
        match self.get(code) {
            Some(entry) => Resolution::Found(entry.clone()),
            None => {
                log::debug!("Master data miss for code '{}'", code);
                Resolution::NotFound
            }
        }
    }
}

impl<L: Lookup + ?Sized> Lookup for &L {
    type Entry = L::Entry;

    fn resolve(&self, code: &str) -> Resolution<Self::Entry> {
        (**self).resolve(code)
    }
}
