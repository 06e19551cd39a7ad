use chrono::Utc;
use coursetrack::ContentItem;
use coursetrack::models::ContentItemId;

pub fn content_item(id: &str, title: &str) -> ContentItem {
    ContentItem {
        id: ContentItemId::new(id),
        title: title.to_string(),
        description: format!("{title} training module"),
        duration_label: Some("12 min".to_string()),
        media_source: format!("media/{id}.mp4"),
        audience: "beneficiary".to_string(),
        created_at: Some(Utc::now()),
    }
}
