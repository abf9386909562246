use serde::{Deserialize, Serialize};

/// Video game stored in the in-memory database.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameEntity {
    /// Stable identifier for the game.
    pub id: String,
    /// Display title of the game.
    pub title: String,
    /// Platforms the game ships on (e.g. "Switch", "PS5").
    pub platform: Vec<String>,
}

/// Review written by an author about a single game.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReviewEntity {
    /// Stable identifier for the review.
    pub id: String,
    /// Score given by the author.
    pub rating: i32,
    /// Free-form review body.
    pub content: String,
    /// Identifier of the author who wrote the review. Not checked on write.
    pub author_id: String,
    /// Identifier of the reviewed game. Not checked on write.
    pub game_id: String,
}

/// Author publishing reviews.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthorEntity {
    /// Stable identifier for the author.
    pub id: String,
    /// Display name of the author.
    pub name: String,
    /// Whether the author identity has been verified.
    pub verified: bool,
}

/// Partial update of a [`GameEntity`]. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct GamePatch {
    /// New title.
    pub title: Option<String>,
    /// New platform list, replacing the old one entirely.
    pub platform: Option<Vec<String>>,
}

/// Partial update of a [`ReviewEntity`]. Foreign keys cannot be changed.
#[derive(Debug, Clone, Default)]
pub struct ReviewPatch {
    /// New rating.
    pub rating: Option<i32>,
    /// New review body.
    pub content: Option<String>,
}

/// Partial update of an [`AuthorEntity`].
#[derive(Debug, Clone, Default)]
pub struct AuthorPatch {
    /// New display name.
    pub name: Option<String>,
    /// New verification flag.
    pub verified: Option<bool>,
}

impl GamePatch {
    /// Build the merged record, overwriting only the supplied fields.
    pub fn merge(self, current: &GameEntity) -> GameEntity {
        GameEntity {
            id: current.id.clone(),
            title: self.title.unwrap_or_else(|| current.title.clone()),
            platform: self.platform.unwrap_or_else(|| current.platform.clone()),
        }
    }
}

impl ReviewPatch {
    /// Build the merged record, overwriting only the supplied fields.
    pub fn merge(self, current: &ReviewEntity) -> ReviewEntity {
        ReviewEntity {
            id: current.id.clone(),
            rating: self.rating.unwrap_or(current.rating),
            content: self.content.unwrap_or_else(|| current.content.clone()),
            author_id: current.author_id.clone(),
            game_id: current.game_id.clone(),
        }
    }
}

impl AuthorPatch {
    /// Build the merged record, overwriting only the supplied fields.
    pub fn merge(self, current: &AuthorEntity) -> AuthorEntity {
        AuthorEntity {
            id: current.id.clone(),
            name: self.name.unwrap_or_else(|| current.name.clone()),
            verified: self.verified.unwrap_or(current.verified),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zelda() -> GameEntity {
        GameEntity {
            id: "1".into(),
            title: "Zelda".into(),
            platform: vec!["Switch".into()],
        }
    }

    #[test]
    fn game_patch_overwrites_only_supplied_fields() {
        let patch = GamePatch {
            title: Some("Zelda 2".into()),
            platform: None,
        };

        let merged = patch.merge(&zelda());
        assert_eq!(
            merged,
            GameEntity {
                id: "1".into(),
                title: "Zelda 2".into(),
                platform: vec!["Switch".into()],
            }
        );
    }

    #[test]
    fn empty_patch_keeps_record() {
        assert_eq!(GamePatch::default().merge(&zelda()), zelda());
    }

    #[test]
    fn review_patch_keeps_foreign_keys() {
        let review = ReviewEntity {
            id: "4".into(),
            rating: 3,
            content: "meh".into(),
            author_id: "2".into(),
            game_id: "5".into(),
        };
        let merged = ReviewPatch {
            rating: Some(9),
            content: None,
        }
        .merge(&review);

        assert_eq!(merged.rating, 9);
        assert_eq!(merged.content, "meh");
        assert_eq!(merged.author_id, "2");
        assert_eq!(merged.game_id, "5");
    }

    #[test]
    fn author_patch_toggles_verified() {
        let author = AuthorEntity {
            id: "1".into(),
            name: "mario".into(),
            verified: true,
        };
        let merged = AuthorPatch {
            name: None,
            verified: Some(false),
        }
        .merge(&author);

        assert_eq!(merged.name, "mario");
        assert!(!merged.verified);
    }
}
