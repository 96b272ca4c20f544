//! Bounded ordered retention: keep the top-K entries seen so far.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────┐
//!   │                  BoundedRetentionSet<K, V, C>                     │
//!   │                                                                   │
//!   │   capacity (immutable, readable without the lock)                 │
//!   │                                                                   │
//!   │   RwLock<RetentionCore<K, V, C>>  (parking_lot, upgradeable)      │
//!   │   ┌─────────────────────────────────────────────────────────────┐ │
//!   │   │ entries: SortedEntries<K, V>   ascending by comparer        │ │
//!   │   │   [(2, d)] [(3, c)] [(5, b)]                                 │ │
//!   │   │      ▲                                                      │ │
//!   │   │ min: Some(2)  ───────┘   always the first key, or None      │ │
//!   │   │ comparer: C                                                 │ │
//!   │   └─────────────────────────────────────────────────────────────┘ │
//!   └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Admission
//!
//! | Set state          | Key                          | Result                   |
//! |--------------------|------------------------------|--------------------------|
//! | empty / not full   | new                          | admitted                 |
//! | full               | ranks above the minimum      | admitted, minimum evicted|
//! | full               | ranks at or below the minimum| rejected                 |
//! | any                | already present              | rejected, value kept     |
//!
//! With `capacity == 0` a call on the empty set is admitted and trimmed in
//! the same step: `try_insert` returns `true` and nothing is retained.
//!
//! ## Performance
//!
//! | Operation     | Time        | Lock                              |
//! |---------------|-------------|-----------------------------------|
//! | `try_insert`  | O(capacity) | shared; upgradeable + exclusive only when the key may qualify |
//! | `traverse`    | O(len)      | shared while copying              |
//! | `contains_key`| O(log len)  | shared                            |
//!
//! ## Thread Safety
//!
//! - [`RetentionCore`]: single owner, `&mut self` inserts.
//! - [`BoundedRetentionSet`]: `Send + Sync` when `K`, `V` and `C` are; share via `Arc`.
//! - Lock waits are unbounded. Calling `try_insert` on the same set from
//!   inside its comparer deadlocks.
mod concurrent;
mod retention_core;

pub use self::concurrent::{BoundedRetentionSet, Traverse};
pub use self::retention_core::{MAX_PREALLOC, RetentionCore};
