mod conversions;
mod order;
mod paging;
mod types;

pub use conversions::{build_page, format_published_at, record_to_item, DISPLAY_DATE_FORMAT};
pub use order::{sort_records, Direction, NewsColumn, NewsOrder};
pub use paging::{page_count, resolve_window, wrap_page, PageWindow};
pub use types::{NewsItem, NewsRecord, PageRequest, PageResult};
