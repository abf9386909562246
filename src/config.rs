//! Application-level configuration loading, including the database seed.

use std::{
    env,
    ffi::OsString,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use tracing::{info, warn};

use crate::{
    dao::{
        database::Seed,
        models::{AuthorEntity, GameEntity, ReviewEntity},
    },
    error::SeedError,
};

/// Default location on disk where the server looks for the JSON seed.
const DEFAULT_SEED_PATH: &str = "config/seed.json";
/// Environment variable that overrides [`DEFAULT_SEED_PATH`].
const SEED_PATH_ENV: &str = "GAME_REVIEWS_SEED_PATH";

#[derive(Debug, Clone)]
/// Immutable runtime configuration captured at startup.
pub struct AppConfig {
    seed: Seed,
}

impl AppConfig {
    /// Load the configuration from the seed path selected by the environment.
    pub fn load() -> Self {
        Self::load_from(&resolve_seed_path(env::var_os(SEED_PATH_ENV)))
    }

    /// Load the seed stored at `path`, falling back to the baked-in sample data.
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match parse_seed(&contents) {
                Ok(seed) => {
                    info!(
                        path = %path.display(),
                        games = seed.games.len(),
                        reviews = seed.reviews.len(),
                        authors = seed.authors.len(),
                        "loaded database seed from config"
                    );
                    Self { seed }
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "invalid seed file; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "seed file not found; using built-in sample data"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %SeedError::from(err),
                    "failed to read seed; falling back to defaults"
                );
                Self::default()
            }
        }
    }

    /// Consume the configuration, keeping only the seed.
    pub fn into_seed(self) -> Seed {
        self.seed
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
        }
    }
}

/// Parse and validate the JSON seed document.
pub fn parse_seed(contents: &str) -> Result<Seed, SeedError> {
    let seed: Seed = serde_json::from_str(contents)?;
    seed.validate()?;
    Ok(seed)
}

/// Resolve the seed path, honouring a non-empty override.
fn resolve_seed_path(override_path: Option<OsString>) -> PathBuf {
    override_path
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SEED_PATH))
}

fn game(id: &str, title: &str, platform: &[&str]) -> GameEntity {
    GameEntity {
        id: id.into(),
        title: title.into(),
        platform: platform.iter().map(|p| (*p).to_owned()).collect(),
    }
}

fn author(id: &str, name: &str, verified: bool) -> AuthorEntity {
    AuthorEntity {
        id: id.into(),
        name: name.into(),
        verified,
    }
}

fn review(id: &str, rating: i32, author_id: &str, game_id: &str) -> ReviewEntity {
    ReviewEntity {
        id: id.into(),
        rating,
        content: "lorem ipsum".into(),
        author_id: author_id.into(),
        game_id: game_id.into(),
    }
}

/// Built-in sample data shipped with the binary.
pub fn default_seed() -> Seed {
    Seed {
        games: vec![
            game("1", "Zelda, Tears of the Kingdom", &["Switch"]),
            game("2", "Final Fantasy 7 Remake", &["PS5", "Xbox"]),
            game("3", "Elden Ring", &["PS5", "Xbox", "PC"]),
            game("4", "Mario Kart", &["Switch"]),
            game("5", "Pokemon Scarlet", &["PS5", "Xbox", "PC"]),
        ],
        reviews: vec![
            review("1", 9, "1", "2"),
            review("2", 10, "2", "1"),
            review("3", 7, "3", "3"),
            review("4", 5, "2", "4"),
            review("5", 8, "2", "5"),
            review("6", 7, "1", "2"),
            review("7", 10, "3", "1"),
        ],
        authors: vec![
            author("1", "mario", true),
            author("2", "yoshi", false),
            author("3", "peach", true),
        ],
    }
}
