//! Paging, ordering and search application for query collections.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::query::{ApplyPaging, Paging};
//!
//! let page = Paging::new(2, 3);
//! let items: Vec<i32> = (1..=10).apply_paging(&page).collect();
//! assert_eq!(items, [4, 5, 6]);
//! ```

pub mod order;
pub mod paging;

pub use order::{OrderBy, Search};
pub use paging::{ApplyPaging, Paging, DEFAULT_PAGE_SIZE};
