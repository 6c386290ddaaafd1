//! Baseline data seeding, run once at startup after the schema is ensured.

use crate::store::{BookFields, BookStore};

/// The three fixed baseline records. Seeding always resets the table to
/// exactly these, regardless of prior content.
const BASELINE_BOOKS: &[(&str, &str, &str)] = &[
    (
        "Harry Potter and the Order of the Phoenix",
        "https://bit.ly/2IcnSwz",
        "Harry Potter and Dumbledore's warning about the return of Lord Voldemort is not heeded by the wizard authorities who, in turn, look to undermine Dumbledore's authority at Hogwarts and discredit Harry.",
    ),
    (
        "The Lord of the Rings: The Fellowship of the Ring",
        "https://bit.ly/2tC1Lcg",
        "A young hobbit, Frodo, who has found the One Ring that belongs to the Dark Lord Sauron, begins his journey with eight companions to Mount Doom, the only place where it can be destroyed.",
    ),
    (
        "Avengers: Endgame",
        "https://bit.ly/2Pzczlb",
        "Adrift in space with no food or water, Tony Stark sends a message to Pepper Potts as his oxygen supply starts to dwindle. Meanwhile, the remaining Avengers -- Thor, Black Widow, Captain America, and Bruce Banner -- must figure out a way to bring back their vanquished allies for an epic showdown with Thanos -- the evil demigod who decimated the planet and the universe.",
    ),
];

/// Clear the table and insert the baseline books. Idempotent across runs;
/// assigned ids are not deterministic because AUTOINCREMENT does not reset
/// on delete.
pub async fn seed_baseline(store: &BookStore) -> Result<(), sqlx::Error> {
    store.clear_all().await?;
    for (name, img, summary) in BASELINE_BOOKS {
        store
            .insert(&BookFields {
                name: Some((*name).to_string()),
                img: Some((*img).to_string()),
                summary: Some((*summary).to_string()),
            })
            .await?;
    }
    tracing::info!(count = BASELINE_BOOKS.len(), "database seeded");
    Ok(())
}
