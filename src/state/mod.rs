//! Page state for the folio viewer.
//!
//! Each view keeps its state in a plain struct with no terminal handles, so
//! the filtering, carousel and scroll-spy rules can be unit tested directly.
//!
//! # Architecture
//!
//! ```text
//! App
//! ├── WorkListController  - Category filter, sorted list and carousel slide
//! ├── DetailState         - Tabs and scroll position of one work
//! │   └── SectionScrollSpy - Active section tracking
//! └── BlogState           - Post list navigation
//! ```

pub mod blog;
pub mod detail;
pub mod related;
pub mod scroll_spy;
pub mod work_list;

pub use blog::BlogState;
pub use detail::{DetailState, DetailTab};
pub use related::{related_work, RelatedWork};
pub use scroll_spy::{SectionBounds, SectionScrollSpy};
pub use work_list::{Swipe, SwipeTracker, WorkListController};
