use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::ConnectionTrait;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let backend = manager.get_database_backend();
        let conn = manager.get_connection();

        let statements: &[&str] = match backend {
            sea_orm::DatabaseBackend::Postgres => &[
                "CREATE TABLE IF NOT EXISTS brewery (id UUID PRIMARY KEY NOT NULL, name VARCHAR(255) NOT NULL)",
                "CREATE TABLE IF NOT EXISTS style (id UUID PRIMARY KEY NOT NULL, name VARCHAR(255) NOT NULL)",
                "CREATE TABLE IF NOT EXISTS beer (id UUID PRIMARY KEY NOT NULL, name VARCHAR(255) NOT NULL)",
                "CREATE TABLE IF NOT EXISTS location (id UUID PRIMARY KEY NOT NULL, name VARCHAR(255) NOT NULL)",
                r"CREATE TABLE IF NOT EXISTS container (
    id UUID PRIMARY KEY NOT NULL,
    type VARCHAR(255) NOT NULL,
    size VARCHAR(255) NOT NULL
)",
                r"CREATE TABLE IF NOT EXISTS beer_brewery (
    beer UUID NOT NULL REFERENCES beer(id) ON DELETE CASCADE,
    brewery UUID NOT NULL REFERENCES brewery(id) ON DELETE CASCADE,
    PRIMARY KEY (beer, brewery)
)",
                r"CREATE TABLE IF NOT EXISTS beer_style (
    beer UUID NOT NULL REFERENCES beer(id) ON DELETE CASCADE,
    style UUID NOT NULL REFERENCES style(id) ON DELETE CASCADE,
    PRIMARY KEY (beer, style)
)",
                r"CREATE TABLE IF NOT EXISTS review (
    id UUID PRIMARY KEY NOT NULL,
    beer UUID NOT NULL REFERENCES beer(id),
    container UUID NOT NULL REFERENCES container(id),
    location UUID NULL REFERENCES location(id),
    rating INTEGER NOT NULL,
    smell TEXT NULL,
    taste TEXT NULL,
    additional_info TEXT NULL,
    time TIMESTAMPTZ NOT NULL,
    created_at TIMESTAMPTZ NOT NULL
)",
                r"CREATE TABLE IF NOT EXISTS storage (
    id UUID PRIMARY KEY NOT NULL,
    beer UUID NOT NULL REFERENCES beer(id),
    container UUID NOT NULL REFERENCES container(id),
    best_before DATE NOT NULL,
    additional_info TEXT NULL,
    created_at TIMESTAMPTZ NOT NULL
)",
                "CREATE INDEX IF NOT EXISTS idx_beer_style_style ON beer_style(style)",
                "CREATE INDEX IF NOT EXISTS idx_beer_brewery_brewery ON beer_brewery(brewery)",
                "CREATE INDEX IF NOT EXISTS idx_review_beer ON review(beer)",
                "CREATE INDEX IF NOT EXISTS idx_review_location ON review(location)",
                "CREATE INDEX IF NOT EXISTS idx_review_time ON review(time)",
                "CREATE INDEX IF NOT EXISTS idx_storage_beer ON storage(beer)",
            ],
            sea_orm::DatabaseBackend::MySql => &[
                "CREATE TABLE IF NOT EXISTS brewery (id BINARY(16) PRIMARY KEY NOT NULL, name VARCHAR(255) NOT NULL)",
                "CREATE TABLE IF NOT EXISTS style (id BINARY(16) PRIMARY KEY NOT NULL, name VARCHAR(255) NOT NULL)",
                "CREATE TABLE IF NOT EXISTS beer (id BINARY(16) PRIMARY KEY NOT NULL, name VARCHAR(255) NOT NULL)",
                "CREATE TABLE IF NOT EXISTS location (id BINARY(16) PRIMARY KEY NOT NULL, name VARCHAR(255) NOT NULL)",
                r"CREATE TABLE IF NOT EXISTS container (
    id BINARY(16) PRIMARY KEY NOT NULL,
    type VARCHAR(255) NOT NULL,
    size VARCHAR(255) NOT NULL
)",
                r"CREATE TABLE IF NOT EXISTS beer_brewery (
    beer BINARY(16) NOT NULL,
    brewery BINARY(16) NOT NULL,
    PRIMARY KEY (beer, brewery),
    KEY idx_beer_brewery_brewery (brewery),
    FOREIGN KEY (beer) REFERENCES beer(id) ON DELETE CASCADE,
    FOREIGN KEY (brewery) REFERENCES brewery(id) ON DELETE CASCADE
)",
                r"CREATE TABLE IF NOT EXISTS beer_style (
    beer BINARY(16) NOT NULL,
    style BINARY(16) NOT NULL,
    PRIMARY KEY (beer, style),
    KEY idx_beer_style_style (style),
    FOREIGN KEY (beer) REFERENCES beer(id) ON DELETE CASCADE,
    FOREIGN KEY (style) REFERENCES style(id) ON DELETE CASCADE
)",
                r"CREATE TABLE IF NOT EXISTS review (
    id BINARY(16) PRIMARY KEY NOT NULL,
    beer BINARY(16) NOT NULL,
    container BINARY(16) NOT NULL,
    location BINARY(16) NULL,
    rating INT NOT NULL,
    smell TEXT NULL,
    taste TEXT NULL,
    additional_info TEXT NULL,
    time TIMESTAMP NOT NULL,
    created_at TIMESTAMP NOT NULL,
    KEY idx_review_beer (beer),
    KEY idx_review_location (location),
    KEY idx_review_time (time),
    FOREIGN KEY (beer) REFERENCES beer(id),
    FOREIGN KEY (container) REFERENCES container(id),
    FOREIGN KEY (location) REFERENCES location(id)
)",
                r"CREATE TABLE IF NOT EXISTS storage (
    id BINARY(16) PRIMARY KEY NOT NULL,
    beer BINARY(16) NOT NULL,
    container BINARY(16) NOT NULL,
    best_before DATE NOT NULL,
    additional_info TEXT NULL,
    created_at TIMESTAMP NOT NULL,
    KEY idx_storage_beer (beer),
    FOREIGN KEY (beer) REFERENCES beer(id),
    FOREIGN KEY (container) REFERENCES container(id)
)",
            ],
            sea_orm::DatabaseBackend::Sqlite => &[
                "CREATE TABLE IF NOT EXISTS brewery (id TEXT PRIMARY KEY NOT NULL, name TEXT NOT NULL)",
                "CREATE TABLE IF NOT EXISTS style (id TEXT PRIMARY KEY NOT NULL, name TEXT NOT NULL)",
                "CREATE TABLE IF NOT EXISTS beer (id TEXT PRIMARY KEY NOT NULL, name TEXT NOT NULL)",
                "CREATE TABLE IF NOT EXISTS location (id TEXT PRIMARY KEY NOT NULL, name TEXT NOT NULL)",
                r"CREATE TABLE IF NOT EXISTS container (
    id TEXT PRIMARY KEY NOT NULL,
    type TEXT NOT NULL,
    size TEXT NOT NULL
)",
                r"CREATE TABLE IF NOT EXISTS beer_brewery (
    beer TEXT NOT NULL REFERENCES beer(id) ON DELETE CASCADE,
    brewery TEXT NOT NULL REFERENCES brewery(id) ON DELETE CASCADE,
    PRIMARY KEY (beer, brewery)
)",
                r"CREATE TABLE IF NOT EXISTS beer_style (
    beer TEXT NOT NULL REFERENCES beer(id) ON DELETE CASCADE,
    style TEXT NOT NULL REFERENCES style(id) ON DELETE CASCADE,
    PRIMARY KEY (beer, style)
)",
                r"CREATE TABLE IF NOT EXISTS review (
    id TEXT PRIMARY KEY NOT NULL,
    beer TEXT NOT NULL REFERENCES beer(id),
    container TEXT NOT NULL REFERENCES container(id),
    location TEXT NULL REFERENCES location(id),
    rating INTEGER NOT NULL,
    smell TEXT NULL,
    taste TEXT NULL,
    additional_info TEXT NULL,
    time TEXT NOT NULL,
    created_at TEXT NOT NULL
)",
                r"CREATE TABLE IF NOT EXISTS storage (
    id TEXT PRIMARY KEY NOT NULL,
    beer TEXT NOT NULL REFERENCES beer(id),
    container TEXT NOT NULL REFERENCES container(id),
    best_before TEXT NOT NULL,
    additional_info TEXT NULL,
    created_at TEXT NOT NULL
)",
                "CREATE INDEX IF NOT EXISTS idx_beer_style_style ON beer_style(style)",
                "CREATE INDEX IF NOT EXISTS idx_beer_brewery_brewery ON beer_brewery(brewery)",
                "CREATE INDEX IF NOT EXISTS idx_review_beer ON review(beer)",
                "CREATE INDEX IF NOT EXISTS idx_review_location ON review(location)",
                "CREATE INDEX IF NOT EXISTS idx_review_time ON review(time)",
                "CREATE INDEX IF NOT EXISTS idx_storage_beer ON storage(beer)",
            ],
        };

        for sql in statements {
            conn.execute_unprepared(sql).await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let conn = manager.get_connection();
        for table in [
            "storage",
            "review",
            "beer_style",
            "beer_brewery",
            "container",
            "location",
            "beer",
            "style",
            "brewery",
        ] {
            conn.execute_unprepared(&format!("DROP TABLE IF EXISTS {table}"))
                .await?;
        }
        Ok(())
    }
}
