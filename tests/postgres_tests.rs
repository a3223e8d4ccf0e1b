// tests/postgres_tests.rs
//
// Run with: DATABASE_URL=postgres://... cargo test -- --ignored

use trivia::{
    models::question::NewQuestion,
    store::{PgStore, QuestionStore},
};

async fn connect() -> PgStore {
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(1)
        .connect(&database_url)
        .await
        .expect("Failed to connect to Postgres for testing.");

    let store = PgStore::new(pool);
    store.migrate().await.expect("Failed to migrate database");
    store
}

#[tokio::test]
#[ignore = "requires a Postgres database in DATABASE_URL"]
async fn seed_migration_loads_categories() {
    let store = connect().await;

    let categories = store.categories().await.unwrap();
    let science = store.category(1).await.unwrap();

    assert!(categories.len() >= 6);
    assert!(categories.windows(2).all(|w| w[0].id < w[1].id));
    assert_eq!(science.map(|c| c.kind), Some("Science".to_string()));
}

#[tokio::test]
#[ignore = "requires a Postgres database in DATABASE_URL"]
async fn insert_then_delete_round_trip() {
    let store = connect().await;

    let created = store
        .insert_question(NewQuestion {
            question: "How much is the fish?".to_string(),
            answer: "12,50€".to_string(),
            category: 3,
            difficulty: 2,
        })
        .await
        .unwrap();

    let questions = store.questions().await.unwrap();
    assert!(questions.contains(&created));
    assert!(questions.windows(2).all(|w| w[0].id < w[1].id));

    assert!(store.delete_question(created.id).await.unwrap());
    assert!(!store.delete_question(created.id).await.unwrap());
}
