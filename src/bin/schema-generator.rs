//! Print the GraphQL schema in SDL form.

use game_reviews_back::{dao::database::Seed, graphql::build_schema, state::AppState};

fn main() {
    let schema = build_schema(AppState::new(Seed::default()));
    print!("{}", schema.sdl());
}
