//! 記憶體倉庫（依ID存取的實體集合）

use std::collections::{HashMap, HashSet};

use crate::record::Identifiable;
use crate::{Hub, Parcel, PickupPoint, Rider};

/// 依ID存取的記憶體倉庫
///
/// 保留首次插入的順序；重複ID以最後一次寫入為準（位置不變）。
#[derive(Debug, Clone)]
pub struct Repository<T> {
    entries: Vec<T>,
    index: HashMap<String, usize>,
}

pub type HubRepo = Repository<Hub>;
pub type ParcelRepo = Repository<Parcel>;
pub type RiderRepo = Repository<Rider>;
pub type PickupRepo = Repository<PickupPoint>;

impl<T: Identifiable> Repository<T> {
    /// 創建空倉庫
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// 新增或覆蓋實體
    pub fn add(&mut self, entity: T) {
        match self.index.get(entity.id()) {
            Some(&pos) => self.entries[pos] = entity,
            None => {
                self.index.insert(entity.id().to_string(), self.entries.len());
                self.entries.push(entity);
            }
        }
    }

    /// 依ID查找
    pub fn get(&self, id: &str) -> Option<&T> {
        self.index.get(id).map(|&pos| &self.entries[pos])
    }

    /// 所有實體（插入順序）
    pub fn all(&self) -> &[T] {
        &self.entries
    }

    /// 檢查ID是否存在
    pub fn exists(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// 所有ID
    pub fn ids(&self) -> HashSet<String> {
        self.index.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Identifiable> Default for Repository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Identifiable> Extend<T> for Repository<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for entity in iter {
            self.add(entity);
        }
    }
}

impl<T: Identifiable> FromIterator<T> for Repository<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut repo = Self::new();
        repo.extend(iter);
        repo
    }
}
