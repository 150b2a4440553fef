pub mod merge_sort;

pub use merge_sort::{merge, merge_by, merge_sort, merge_sort_by, merge_sort_by_key};
