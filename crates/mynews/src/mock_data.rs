use chrono::{Duration, Utc};
use mynews_core::news::NewsRecord;

/// Generates demo news records numbered from 1.
///
/// Record `i` is published `i` days ago and carries sort value `100 + i`,
/// so the newest item comes first in paging order.
pub fn demo_records(count: usize) -> Vec<NewsRecord> {
    let now = Utc::now();

    (1..=count as i64)
        .map(|i| {
            NewsRecord::new(
                i,
                format!("News item #{i}"),
                format!("This is the text of news item #{i}. A short summary could go here."),
            )
            .with_published_at(now - Duration::days(i))
            .with_sort(100 + i)
        })
        .collect()
}
