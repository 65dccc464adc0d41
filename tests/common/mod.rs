use chrono::Utc;
use coursebook::config::cors::CorsConfig;
use coursebook::router::init_router;
use coursebook::state::AppState;
use coursebook::utils::password::hash_password;
use data_encoding::BASE64;
use sqlx::SqlitePool;
use uuid::Uuid;

pub fn setup_test_app(pool: SqlitePool) -> axum::Router {
    let state = AppState {
        db: pool,
        cors_config: CorsConfig::from_env(),
    };
    init_router(state)
}

#[allow(dead_code)]
pub struct TestUser {
    pub id: Uuid,
    pub email: String,
    pub password: String,
}

/// Insert a user directly, the way signup would: digest in the store, never
/// the plaintext.
#[allow(dead_code)]
pub async fn create_test_user(pool: &SqlitePool, email: &str, password: &str) -> TestUser {
    let hashed = hash_password(password).unwrap();
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query(
        "INSERT INTO users (id, first_name, last_name, email_address, password, created_at, updated_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7)",
    )
    .bind(id)
    .bind("Test")
    .bind("User")
    .bind(email)
    .bind(&hashed)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await
    .unwrap();

    TestUser {
        id,
        email: email.to_string(),
        password: password.to_string(),
    }
}

#[allow(dead_code)]
pub async fn create_test_course(
    pool: &SqlitePool,
    user_id: Uuid,
    title: &str,
    description: &str,
) -> Uuid {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query(
        "INSERT INTO courses (id, user_id, title, description, estimated_time, materials_needed, created_at, updated_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
    )
    .bind(id)
    .bind(user_id)
    .bind(title)
    .bind(description)
    .bind(Some("6 hours"))
    .bind(None::<String>)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await
    .unwrap();

    id
}

#[allow(dead_code)]
pub fn basic_auth_header(email: &str, password: &str) -> String {
    format!(
        "Basic {}",
        BASE64.encode(format!("{email}:{password}").as_bytes())
    )
}

#[allow(dead_code)]
pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}
