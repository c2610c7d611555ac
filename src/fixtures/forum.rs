//! Sample forum posts, lost-and-found notices included.

use slateport_models::forum::{ForumPost, categories};

#[must_use]
pub fn sample() -> Vec<ForumPost> {
    vec![
        ForumPost {
            id: "pst-01".to_string(),
            title: "Study group for the OS endsem".to_string(),
            content: "Meeting in the library annex every evening this week, 6 to 8. All welcome."
                .to_string(),
            category: Some(categories::GENERAL.to_string()),
            author_name: Some("Sana Khan".to_string()),
            reply_count: Some(5),
            created_at: super::ts("2026-08-10T18:20:00Z"),
        },
        ForumPost {
            id: "pst-02".to_string(),
            title: "Lost: blue water bottle near LH-1".to_string(),
            content: "Left it after the 9am lecture on Monday. Has a robotics club sticker."
                .to_string(),
            category: Some(categories::LOST_FOUND.to_string()),
            author_name: Some("Dev Patel".to_string()),
            reply_count: Some(2),
            created_at: super::ts("2026-08-11T10:02:00Z"),
        },
        ForumPost {
            id: "pst-03".to_string(),
            title: "Robotics club demo day".to_string(),
            content: "Live demos in the main quad this Saturday from 11am. Come see the line followers race.".to_string(),
            category: Some(categories::EVENTS.to_string()),
            author_name: Some("Rohan Mehta".to_string()),
            reply_count: Some(8),
            created_at: super::ts("2026-08-12T14:45:00Z"),
        },
        ForumPost {
            id: "pst-04".to_string(),
            title: "Found: scientific calculator in LAB-3".to_string(),
            content: "Found after the Wednesday practical. Describe it to claim at the lab office."
                .to_string(),
            category: Some(categories::LOST_FOUND.to_string()),
            author_name: Some("Arjun Singh".to_string()),
            reply_count: Some(1),
            created_at: super::ts("2026-08-13T08:15:00Z"),
        },
    ]
}

/// Sample posts filtered to one category.
#[must_use]
pub fn sample_in_category(category: &str) -> Vec<ForumPost> {
    sample()
        .into_iter()
        .filter(|post| post.category.as_deref() == Some(category))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lost_found_filter_keeps_only_that_category() {
        let posts = sample_in_category(categories::LOST_FOUND);
        assert_eq!(posts.len(), 2);
        assert!(
            posts
                .iter()
                .all(|p| p.category.as_deref() == Some(categories::LOST_FOUND))
        );
    }
}
