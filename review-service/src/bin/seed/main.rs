//! Development data seeder.
//!
//! Run separately from the server (`cargo run --bin seed`). Safe to run
//! more than once: every insert is keyed on a natural lookup first, so an
//! already-seeded database is left untouched.

use auth::PasswordHasher;
use chrono::Utc;
use review_service::config::Config;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use sqlx::Row;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use uuid::Uuid;

const SEED_PASSWORD: &str = "ilovelamp";

async fn seed_user(
    pool: &PgPool,
    hasher: &PasswordHasher,
    username: &str,
) -> Result<Uuid, anyhow::Error> {
    let existing = sqlx::query("SELECT id FROM users WHERE username = $1")
        .bind(username)
        .fetch_optional(pool)
        .await?;

    if let Some(row) = existing {
        let id: Uuid = row.try_get("id")?;
        tracing::info!(username, %id, "User already seeded");
        return Ok(id);
    }

    let id = Uuid::new_v4();
    let password_hash = hasher
        .hash(SEED_PASSWORD)
        .map_err(|e| anyhow::anyhow!("password hashing failed: {}", e))?;

    sqlx::query(
        "INSERT INTO users (id, username, password_hash, created_at) VALUES ($1, $2, $3, $4)",
    )
    .bind(id)
    .bind(username)
    .bind(&password_hash)
    .bind(Utc::now())
    .execute(pool)
    .await?;

    tracing::info!(username, %id, "User seeded");
    Ok(id)
}

async fn seed_book(
    pool: &PgPool,
    title: &str,
    author: &str,
    description: &str,
) -> Result<Uuid, anyhow::Error> {
    let existing = sqlx::query("SELECT id FROM books WHERE title = $1 AND author = $2")
        .bind(title)
        .bind(author)
        .fetch_optional(pool)
        .await?;

    if let Some(row) = existing {
        let id: Uuid = row.try_get("id")?;
        tracing::info!(title, %id, "Book already seeded");
        return Ok(id);
    }

    let id = Uuid::new_v4();
    sqlx::query(
        "INSERT INTO books (id, title, author, description, created_at) VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(id)
    .bind(title)
    .bind(author)
    .bind(description)
    .bind(Utc::now())
    .execute(pool)
    .await?;

    tracing::info!(title, %id, "Book seeded");
    Ok(id)
}

async fn seed_review(
    pool: &PgPool,
    user_id: Uuid,
    book_id: Uuid,
    rating: i32,
    review_text: &str,
) -> Result<Uuid, anyhow::Error> {
    let existing = sqlx::query("SELECT id FROM reviews WHERE user_id = $1 AND book_id = $2")
        .bind(user_id)
        .bind(book_id)
        .fetch_optional(pool)
        .await?;

    if let Some(row) = existing {
        let id: Uuid = row.try_get("id")?;
        tracing::info!(%id, "Review already seeded");
        return Ok(id);
    }

    let id = Uuid::new_v4();
    sqlx::query(
        "INSERT INTO reviews (id, user_id, book_id, rating, review_text, created_at) \
         VALUES ($1, $2, $3, $4, $5, $6)",
    )
    .bind(id)
    .bind(user_id)
    .bind(book_id)
    .bind(rating)
    .bind(review_text)
    .bind(Utc::now())
    .execute(pool)
    .await?;

    tracing::info!(%id, "Review seeded");
    Ok(id)
}

async fn seed_comment(
    pool: &PgPool,
    user_id: Uuid,
    review_id: Uuid,
    comment_text: &str,
) -> Result<(), anyhow::Error> {
    let existing = sqlx::query("SELECT id FROM comments WHERE user_id = $1 AND review_id = $2")
        .bind(user_id)
        .bind(review_id)
        .fetch_optional(pool)
        .await?;

    if existing.is_some() {
        tracing::info!("Comment already seeded");
        return Ok(());
    }

    let id = Uuid::new_v4();
    sqlx::query(
        "INSERT INTO comments (id, user_id, review_id, comment_text, created_at) \
         VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(id)
    .bind(user_id)
    .bind(review_id)
    .bind(comment_text)
    .bind(Utc::now())
    .execute(pool)
    .await?;

    tracing::info!(%id, "Comment seeded");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seed=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Database migrations completed");

    let hasher = PasswordHasher::new();

    let ben = seed_user(&pool, &hasher, "ben").await?;
    let taylor = seed_user(&pool, &hasher, "taylor").await?;
    let gleyber = seed_user(&pool, &hasher, "gleyber").await?;

    let book1 = seed_book(
        &pool,
        "The Philosophers Stone",
        "J.K. Rowling",
        "Harry goes to Hogwarts",
    )
    .await?;
    let book2 = seed_book(
        &pool,
        "Fellowship of the Ring",
        "J.R.R. Tolkien",
        "The fellowship sets out to destroy the One Ring",
    )
    .await?;
    let book3 = seed_book(
        &pool,
        "The Great Gatsby",
        "F. Scott Fitzgerald",
        "Rich alcoholic love triangle",
    )
    .await?;

    let review1 = seed_review(
        &pool,
        ben,
        book1,
        5,
        "Great first edition to the series!",
    )
    .await?;
    let review2 = seed_review(&pool, taylor, book2, 4, "Loved it! RIP Gandalf :(").await?;
    let review3 = seed_review(
        &pool,
        gleyber,
        book3,
        3,
        "classic, but feels like a book about nothing",
    )
    .await?;

    seed_comment(
        &pool,
        taylor,
        review1,
        "i agree, but still too childish for me!",
    )
    .await?;
    seed_comment(&pool, ben, review3, "Gatsby aint deserve that!").await?;
    seed_comment(&pool, gleyber, review2, "RIP BOROMIR").await?;

    tracing::info!("Seeding complete");

    Ok(())
}
