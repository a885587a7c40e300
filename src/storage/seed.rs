use super::memory::BlogStore;
use crate::blog::types::{CategoryForm, PostForm};

use anyhow::Result;
use chrono::{Duration, Utc};

/// Fills an empty store with a couple of authors, categories and posts.
pub fn seed_demo(store: &BlogStore) -> Result<()> {
    let _admin = store.create_user("admin", true);
    let alice = store.create_user("alice", false);
    let bob = store.create_user("bob", false);

    let music = store.create_category(CategoryForm {
        title: "Music".to_string(),
        description: Some("Records, gigs and gear".to_string()),
    });
    let travel = store.create_category(CategoryForm {
        title: "Travel".to_string(),
        description: None,
    });

    let posts = [
        (alice.id, "First steps", "Hello world, this blog is open.", vec![], true),
        (alice.id, "Vinyl finds", "Three records I found at the flea market.", vec![music.id], true),
        (bob.id, "Lisbon in spring", "Trams, tiles and far too many pastries.", vec![travel.id], true),
        (bob.id, "Festival diary", "A weekend of music on the coast.", vec![music.id, travel.id], true),
        (alice.id, "Rehearsal notes", "Working on the new set list.", vec![music.id], true),
        (bob.id, "Packing list", "Everything that fits in one backpack.", vec![travel.id], true),
        (alice.id, "Draft: unfinished thoughts", "Not ready yet.", vec![], false),
    ];

    let start = Utc::now() - Duration::days(posts.len() as i64);
    for (offset, (owner, title, body, categories, published)) in posts.into_iter().enumerate() {
        store.create_post_at(
            owner,
            PostForm {
                title: title.to_string(),
                body: body.to_string(),
                categories,
                published,
            },
            start + Duration::days(offset as i64),
        )?;
    }

    tracing::info!("Seeded demo content: {} posts", store.post_count());
    Ok(())
}
