//! Sort keys for the story list

use crate::domain_models::Story;
use strum::Display;

/// Column the story list is ordered by
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
pub enum SortKey {
    /// Fetch order, untouched
    #[default]
    None,
    /// Ascending by title
    Title,
    /// The author column ranks by comment count, descending; this is the
    /// shipped column behavior and is kept bit-for-bit
    Author,
    /// Descending by points
    Point,
}

/// Current sort key plus direction toggle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortState {
    pub key: SortKey,
    pub reversed: bool,
}

impl SortState {
    /// Activate a sort key. Activating the already-active key flips the
    /// direction; switching keys resets to the base direction.
    pub fn toggled(self, key: SortKey) -> Self {
        if self.key == key {
            Self {
                key,
                reversed: !self.reversed,
            }
        } else {
            Self {
                key,
                reversed: false,
            }
        }
    }
}

/// Produce the display ordering of `data` for a sort key and direction.
///
/// Pure projection: the underlying list keeps fetch order, removal keys
/// stay valid regardless of the ordering on screen.
pub fn sorted_view(data: &[Story], key: SortKey, reversed: bool) -> Vec<Story> {
    let mut view = data.to_vec();
    match key {
        SortKey::None => {}
        SortKey::Title => view.sort_by(|a, b| a.title.cmp(&b.title)),
        SortKey::Author => view.sort_by(|a, b| b.num_comments.cmp(&a.num_comments)),
        SortKey::Point => view.sort_by(|a, b| b.points.cmp(&a.points)),
    }
    if reversed {
        view.reverse();
    }
    view
}
