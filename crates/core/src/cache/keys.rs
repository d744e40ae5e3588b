/// Prefix shared by every cached news page.
pub const NEWS_PAGE_PREFIX: &str = "news:";

/// Returns the cache key for a page of news.
///
/// The key is built from the requested page *before* wrap-around, so page
/// 4 and page 0 of a four-page list are cached separately even though they
/// hold the same items.
pub fn news_page_key(page: u64, page_size: u64) -> String {
    format!("{NEWS_PAGE_PREFIX}page={page};per={page_size}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_news_page_key() {
        assert_eq!(news_page_key(0, 2), "news:page=0;per=2");
        assert_eq!(news_page_key(12, 5), "news:page=12;per=5");
    }

    #[test]
    fn test_news_page_key_is_deterministic() {
        assert_eq!(news_page_key(3, 2), news_page_key(3, 2));
        assert_ne!(news_page_key(3, 2), news_page_key(2, 3));
    }

    #[test]
    fn test_news_page_key_prefix() {
        assert!(news_page_key(1, 1).starts_with(NEWS_PAGE_PREFIX));
    }
}
