mod news;

pub use news::PagedNewsService;
