mod common;

use diesel::prelude::*;

use tripmind::domain::types::UserId;
use tripmind::photos::{Photo, PhotoSearchError, PhotoSearcher};
use tripmind::repository::{
    DestinationReader, DieselRepository, FacilityReader, LinkReader, SuggestionReader,
};
use tripmind::services::assistant::{process_ai_response, process_ai_suggestion};

struct StubPhotos;

impl PhotoSearcher for StubPhotos {
    fn search_photos(
        &self,
        query: &str,
        per_page: u32,
        _page: u32,
    ) -> Result<Vec<Photo>, PhotoSearchError> {
        let slug = query.replace(' ', "-").to_lowercase();
        Ok((0..per_page)
            .map(|i| Photo {
                medium_url: format!("https://img.example.com/{slug}/{i}-medium.jpg"),
                original_url: format!("https://img.example.com/{slug}/{i}.jpg"),
            })
            .collect())
    }
}

fn seed_category(test_db: &common::TestDb, id: i32, name: &str) {
    use tripmind::schema::categories;
    let pool = test_db.pool();
    let mut conn = pool.get().unwrap();
    diesel::insert_into(categories::table)
        .values((
            categories::id.eq(id),
            categories::name.eq(name),
            categories::description.eq::<Option<String>>(None),
        ))
        .execute(&mut conn)
        .unwrap();
}

const DUBAI_REPLY: &str = r#"Sure thing! Here's what I put together:
```json
{
    "action": "create_destination",
    "success": true,
    "message": "Great choice!",
    "destination": {
        "denumire": "Dubai",
        "tara": "UAE",
        "oras": "Dubai",
        "regiune": "Middle East",
        "descriere": "A dazzling city of superlatives.",
        "pretAdult": 2500,
        "pretMinor": 1500,
        "categorii": ["Lux"],
        "facilitati": ["Pool"],
        "puncteDeInteres": [],
        "photoSearchQueries": ["Dubai skyline"]
    }
}
```"#;

#[test]
fn test_full_destination_pipeline_against_sqlite() {
    let test_db = common::TestDb::new();
    seed_category(&test_db, 1, "Lux");
    let repo = DieselRepository::new(test_db.pool());

    let result = process_ai_response(DUBAI_REPLY, &repo, &StubPhotos);

    assert!(result.success, "pipeline failed: {}", result.message);
    assert_eq!(result.message, "Great choice!");
    let id = result.destination_id.expect("destination id");
    assert!(id.get() > 0);

    let destinations = repo.list_destinations().unwrap();
    assert_eq!(destinations.len(), 1);
    assert_eq!(destinations[0].name, "Dubai");
    assert_eq!(destinations[0].country, "UAE");

    assert_eq!(repo.list_category_links(id).unwrap().len(), 1);

    let facilities = repo.list_facilities().unwrap();
    assert_eq!(facilities.len(), 1);
    assert_eq!(facilities[0].name, "Pool");
    assert_eq!(repo.list_facility_links(id).unwrap().len(), 1);

    assert_eq!(repo.list_destination_images(id).unwrap().len(), 2);
}

#[test]
fn test_repeat_reply_is_idempotent() {
    let test_db = common::TestDb::new();
    seed_category(&test_db, 1, "Lux");
    let repo = DieselRepository::new(test_db.pool());

    let first = process_ai_response(DUBAI_REPLY, &repo, &StubPhotos);
    let second = process_ai_response(DUBAI_REPLY, &repo, &StubPhotos);

    assert!(second.success);
    assert_eq!(second.destination_id, first.destination_id);
    assert_eq!(repo.list_destinations().unwrap().len(), 1);
}

#[test]
fn test_suggestion_pipeline_creates_minimal_destination() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let reply = r#"{
        "action": "create_suggestion",
        "success": true,
        "message": "Saved!",
        "suggestion": {
            "titlu": "Weekend in Rome",
            "bugetEstimat": 800,
            "descriere": "Two days of ruins and pasta",
            "destinatieDenumire": "Rome",
            "destinatieTara": "Italy",
            "destinatieOras": "Rome"
        }
    }"#;

    let result = process_ai_suggestion(reply, UserId::new(7).unwrap(), &repo);

    assert!(result.success, "pipeline failed: {}", result.message);
    let suggestion_id = result.suggestion_id.expect("suggestion id");

    let suggestion = repo.get_suggestion_by_id(suggestion_id).unwrap().unwrap();
    assert!(suggestion.ai_generated);
    assert_eq!(suggestion.estimated_budget, 800.0);

    let destinations = repo.list_destinations().unwrap();
    assert_eq!(destinations.len(), 1);
    assert_eq!(destinations[0].minor_price, 400.0);
}
