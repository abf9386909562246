use std::collections::HashSet;

use serde::Deserialize;

use crate::{
    dao::{
        models::{AuthorEntity, GameEntity, ReviewEntity},
        table::{MAX_SEED_ID, Record, Table},
    },
    error::SeedError,
};

/// Initial content of the database, as read from the seed file.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Seed {
    /// Games, in the order they will be listed.
    #[serde(default)]
    pub games: Vec<GameEntity>,
    /// Reviews, in the order they will be listed.
    #[serde(default)]
    pub reviews: Vec<ReviewEntity>,
    /// Authors, in the order they will be listed.
    #[serde(default)]
    pub authors: Vec<AuthorEntity>,
}

impl Seed {
    /// Reject seeds that repeat an id within one entity kind or carry a numeric id
    /// above [`MAX_SEED_ID`].
    pub fn validate(&self) -> Result<(), SeedError> {
        check_ids(&self.games)?;
        check_ids(&self.reviews)?;
        check_ids(&self.authors)?;
        Ok(())
    }
}

fn check_ids<T: Record>(rows: &[T]) -> Result<(), SeedError> {
    let mut seen = HashSet::with_capacity(rows.len());
    for row in rows {
        if row.id().parse::<u64>().is_ok_and(|id| id > MAX_SEED_ID) {
            return Err(SeedError::IdOutOfRange {
                kind: T::KIND,
                id: row.id().to_owned(),
                max: MAX_SEED_ID,
            });
        }
        if !seen.insert(row.id()) {
            return Err(SeedError::DuplicateId {
                kind: T::KIND,
                id: row.id().to_owned(),
            });
        }
    }
    Ok(())
}

/// The three entity tables. Foreign keys between them are not enforced.
#[derive(Debug, Clone, Default)]
pub struct Database {
    /// Games table.
    pub games: Table<GameEntity>,
    /// Reviews table.
    pub reviews: Table<ReviewEntity>,
    /// Authors table.
    pub authors: Table<AuthorEntity>,
}

impl Database {
    /// Build the tables from `seed`, keeping the seed order.
    pub fn seeded(seed: Seed) -> Self {
        Self {
            games: Table::seeded(seed.games),
            reviews: Table::seeded(seed.reviews),
            authors: Table::seeded(seed.authors),
        }
    }

    /// Reviews whose `game_id` points at `game_id`.
    pub fn reviews_for_game(&self, game_id: &str) -> Vec<ReviewEntity> {
        self.reviews.filter(|review| review.game_id == game_id)
    }

    /// Reviews whose `author_id` points at `author_id`.
    pub fn reviews_by_author(&self, author_id: &str) -> Vec<ReviewEntity> {
        self.reviews.filter(|review| review.author_id == author_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(id: &str, author_id: &str, game_id: &str) -> ReviewEntity {
        ReviewEntity {
            id: id.into(),
            rating: 5,
            content: "ok".into(),
            author_id: author_id.into(),
            game_id: game_id.into(),
        }
    }

    #[test]
    fn relationship_scans_keep_store_order() {
        let db = Database::seeded(Seed {
            reviews: vec![
                review("1", "1", "2"),
                review("2", "2", "1"),
                review("3", "1", "1"),
            ],
            ..Seed::default()
        });

        let for_game: Vec<_> = db.reviews_for_game("1").into_iter().map(|r| r.id).collect();
        assert_eq!(for_game, vec!["2", "3"]);

        let by_author: Vec<_> = db.reviews_by_author("1").into_iter().map(|r| r.id).collect();
        assert_eq!(by_author, vec!["1", "3"]);

        assert!(db.reviews_for_game("42").is_empty());
    }

    #[test]
    fn validate_rejects_duplicate_ids() {
        let seed = Seed {
            reviews: vec![review("1", "1", "1"), review("1", "2", "2")],
            ..Seed::default()
        };

        let err = seed.validate().unwrap_err();
        assert!(matches!(
            err,
            SeedError::DuplicateId { kind: "review", ref id } if id == "1"
        ));
    }

    #[test]
    fn validate_rejects_ids_past_ceiling() {
        let seed = Seed {
            authors: vec![AuthorEntity {
                id: u64::MAX.to_string(),
                name: "mario".into(),
                verified: true,
            }],
            ..Seed::default()
        };

        assert!(matches!(
            seed.validate(),
            Err(SeedError::IdOutOfRange { kind: "author", max: MAX_SEED_ID, .. })
        ));
    }

    #[test]
    fn same_id_across_kinds_is_fine() {
        let seed = Seed {
            games: vec![GameEntity {
                id: "1".into(),
                title: "Zelda".into(),
                platform: vec!["Switch".into()],
            }],
            reviews: vec![review("1", "1", "1")],
            authors: vec![AuthorEntity {
                id: "1".into(),
                name: "mario".into(),
                verified: true,
            }],
        };

        assert!(seed.validate().is_ok());
    }
}
