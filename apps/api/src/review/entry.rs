use serde::{Deserialize, Serialize};

use crate::highlight::{annotate, is_new_item, AnnotatedToken, BoundaryMode};

/// One entry's worth of suggested content to review against what the user
/// currently has. `current_*` fields are absent when the entry is brand new.
#[derive(Debug, Clone, Deserialize)]
pub struct EntryReviewRequest {
    pub current_description: Option<Vec<String>>,
    pub suggested_description: Vec<String>,
    pub current_technologies: Option<Vec<String>>,
    pub suggested_technologies: Vec<String>,
}

/// Annotated token sequence for one description bullet.
#[derive(Debug, Clone, Serialize)]
pub struct BulletAnnotation {
    pub tokens: Vec<AnnotatedToken>,
}

/// Highlight decision for one scalar tag.
#[derive(Debug, Clone, Serialize)]
pub struct TagAnnotation {
    pub name: String,
    pub is_new: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct EntryReviewResponse {
    pub description: Vec<BulletAnnotation>,
    pub technologies: Vec<TagAnnotation>,
}

/// Annotates a whole suggested entry.
///
/// Bullets are paired by position: suggested bullet `i` diffs against current
/// bullet `i`, and a missing counterpart (index out of range, or the whole
/// list absent) is an empty baseline, so the entire bullet highlights as new.
/// Tags use plain set non-membership.
pub fn review_entry(req: &EntryReviewRequest, mode: BoundaryMode) -> EntryReviewResponse {
    let current_bullets: &[String] = req.current_description.as_deref().unwrap_or(&[]);

    let description = req
        .suggested_description
        .iter()
        .enumerate()
        .map(|(i, suggested)| BulletAnnotation {
            tokens: annotate(current_bullets.get(i).map(String::as_str), suggested, mode),
        })
        .collect();

    let technologies = req
        .suggested_technologies
        .iter()
        .map(|tag| TagAnnotation {
            name: tag.clone(),
            is_new: is_new_item(req.current_technologies.as_deref(), tag),
        })
        .collect();

    EntryReviewResponse {
        description,
        technologies,
    }
}
