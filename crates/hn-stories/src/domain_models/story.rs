//! Story domain model

use hn_client::StoryDto;

/// A story as the application sees it.
///
/// Sparse index records (missing titles, urls, counts) are normalized to
/// empty strings and zero here, so list rendering and sorting never deal
/// with absent fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Story {
    /// Stable unique id; removal key and list key
    pub object_id: String,
    pub title: String,
    pub url: String,
    pub author: String,
    pub num_comments: u64,
    pub points: u64,
}

impl From<StoryDto> for Story {
    fn from(dto: StoryDto) -> Self {
        Self {
            object_id: dto.object_id,
            title: dto.title.unwrap_or_default(),
            url: dto.url.unwrap_or_default(),
            author: dto.author.unwrap_or_default(),
            num_comments: dto.num_comments.unwrap_or_default(),
            points: dto.points.unwrap_or_default(),
        }
    }
}
