//! Short names for everyday containers and pointers.
//!
//! The numeric primitives already have short names in Rust (`u8`, `i64`,
//! `f32`, ...) along with their limits (`u8::MAX`, `f32::EPSILON`), so only
//! the pieces without a terse spelling are aliased here.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::sync::Arc;

/// One-byte boolean.
#[allow(non_camel_case_types)]
pub type b8 = bool;

/// Hash map (unordered).
pub type Umap<K, V> = HashMap<K, V>;
/// Ordered map.
pub type Omap<K, V> = BTreeMap<K, V>;
/// Hash set (unordered).
pub type Uset<T> = HashSet<T>;
/// Ordered set.
pub type Oset<T> = BTreeSet<T>;
pub type Opt<T> = Option<T>;
pub type Str = String;

/// Uniquely owned heap value.
pub type Uptr<T> = Box<T>;
/// Shared, thread-safe reference-counted value.
pub type Sptr<T> = Arc<T>;

pub fn unew<T>(value: T) -> Uptr<T> {
    Box::new(value)
}

pub fn snew<T>(value: T) -> Sptr<T> {
    Arc::new(value)
}

/// A mask with only bit `n` set.
pub const fn bit(n: u32) -> u32 {
    1 << n
}
