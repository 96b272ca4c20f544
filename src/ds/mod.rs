pub mod sorted_entries;

pub use sorted_entries::SortedEntries;
