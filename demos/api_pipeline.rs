//! End-to-end outcome pipeline: load, enrich, and render as JSON.
//!
//! Run with:
//!
//! ```sh
//! cargo run --example api_pipeline --features "async serde"
//! ```

use outcome_rail::async_ext::FutureOutcomeExt;
use outcome_rail::{convert, field_errors, Outcome};
use serde::Serialize;

#[derive(Clone, Serialize)]
struct User {
    id: u64,
    name: String,
}

#[derive(Serialize)]
struct UserDto {
    id: u64,
    display_name: String,
}

async fn load_user(id: u64) -> Outcome<User> {
    match id {
        0 => Outcome::not_found().with_message(format!("user {}", id)),
        1 => Outcome::validation_failure(field_errors! {
            "id" => ["reserved identifier"],
        }),
        _ => Outcome::success(User {
            id,
            name: format!("user-{}", id),
        }),
    }
}

async fn render(id: u64) -> String {
    let outcome = load_user(id)
        .map_async(|user| User {
            name: user.name.to_uppercase(),
            ..user
        })
        .await;

    let dto = convert::map_outcome(Some(outcome), |user| UserDto {
        id: user.id,
        display_name: user.name,
    });

    serde_json::to_string_pretty(&dto).expect("outcome serializes")
}

#[tokio::main]
async fn main() {
    for id in [7, 0, 1] {
        println!("--- user {} ---", id);
        println!("{}", render(id).await);
    }
}
