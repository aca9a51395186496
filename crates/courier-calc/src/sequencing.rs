//! 分派後的預覽排序
//!
//! 對單一騎手已分派的包裹重新排序，不改動分派結果本身。
//! 兩種排序都是穩定分割：符合條件者在前，組內保留原順序。

use std::iter::{Chain, FusedIterator};
use std::vec;

use courier_core::Parcel;
use rust_decimal::Decimal;

/// 穩定分割迭代器
///
/// 第一次取值時才讀完來源並分成兩組；只能走訪一次。
pub struct StablePartition<I: Iterator, F> {
    source: Option<I>,
    predicate: F,
    buffered: Chain<vec::IntoIter<I::Item>, vec::IntoIter<I::Item>>,
}

impl<I, F> Iterator for StablePartition<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(source) = self.source.take() {
            let (front, back): (Vec<_>, Vec<_>) = source.partition(|item| (self.predicate)(item));
            self.buffered = front.into_iter().chain(back);
        }
        self.buffered.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.source {
            Some(source) => source.size_hint(),
            None => self.buffered.size_hint(),
        }
    }
}

impl<I, F> FusedIterator for StablePartition<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item) -> bool,
{
}

/// 將符合條件的項目排到前面（組內順序不變）
pub fn stable_partition<I, F>(items: I, predicate: F) -> StablePartition<I::IntoIter, F>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> bool,
{
    StablePartition {
        source: Some(items.into_iter()),
        predicate,
        buffered: Vec::new().into_iter().chain(Vec::new()),
    }
}

/// 急件在前，其餘在後
pub fn express_then_normal<'a, I>(parcels: I) -> impl Iterator<Item = &'a Parcel>
where
    I: IntoIterator<Item = &'a Parcel>,
{
    stable_partition(parcels, |p: &&'a Parcel| p.is_express())
}

/// 重量 ≥ 門檻者在前，較輕者在後
pub fn heavy_first<'a, I>(parcels: I, threshold_kg: Decimal) -> impl Iterator<Item = &'a Parcel>
where
    I: IntoIterator<Item = &'a Parcel>,
{
    stable_partition(parcels, move |p: &&'a Parcel| p.weight_kg >= threshold_kg)
}

/// 預覽排序：先依優先級，再依重量門檻
pub fn preview_order<'a, I>(parcels: I, threshold_kg: Decimal) -> impl Iterator<Item = &'a Parcel>
where
    I: IntoIterator<Item = &'a Parcel>,
{
    heavy_first(express_then_normal(parcels), threshold_kg)
}
