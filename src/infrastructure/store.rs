//! Post persistence backed by SQLite

use crate::domain::{now_timestamp, NewPost, Post, PostFields, PostId, PostStatus};
use crate::error::Result;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, Type, ValueRef};
use rusqlite::{params, Connection, OptionalExtension, Row, ToSql};
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// Abstract store holding the single post table
pub trait PostStore {
    /// Insert a post and return its new id. Stamps `createdAt` when the
    /// request carries none. Performs no validation.
    fn add(&self, post: &NewPost) -> Result<PostId>;

    /// Overwrite title, tags, status and content. `createdAt` is never
    /// touched. Returns `false` when no post has this id.
    fn update(&self, id: PostId, fields: &PostFields) -> Result<bool>;

    /// Remove a post. Returns `false` when no post has this id.
    fn delete(&self, id: PostId) -> Result<bool>;

    /// Every post in insertion order
    fn list(&self) -> Result<Vec<Post>>;

    /// Primary-key lookup
    fn get(&self, id: PostId) -> Result<Option<Post>>;
}

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS posts (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT,
        tags TEXT,
        status TEXT NOT NULL DEFAULT 'draft',
        content TEXT,
        created_at TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_posts_title ON posts(title);
    CREATE INDEX IF NOT EXISTS idx_posts_status ON posts(status);
    CREATE INDEX IF NOT EXISTS idx_posts_created_at ON posts(created_at);
";

const SELECT_COLUMNS: &str = "SELECT id, title, tags, status, content, created_at FROM posts";

/// SQLite implementation of PostStore.
///
/// `AUTOINCREMENT` guarantees ids of deleted posts are never handed out again.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the database file at `path`
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        debug!(path = %path.display(), "opened post store");
        Self::with_connection(conn)
    }

    /// Fresh store that lives only as long as the value
    pub fn open_in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(SqliteStore { conn })
    }

    fn post_from_row(row: &Row<'_>) -> rusqlite::Result<Post> {
        let tags: Option<String> = row.get(2)?;
        let tags = tags
            .map(|json| serde_json::from_str::<Vec<String>>(&json))
            .transpose()
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e)))?;

        Ok(Post {
            id: row.get(0)?,
            title: row.get(1)?,
            tags,
            status: row.get(3)?,
            content: row.get(4)?,
            created_at: row.get(5)?,
        })
    }
}

fn encode_tags(tags: Option<&Vec<String>>) -> Result<Option<String>> {
    Ok(tags.map(serde_json::to_string).transpose()?)
}

impl PostStore for SqliteStore {
    fn add(&self, post: &NewPost) -> Result<PostId> {
        let fields = &post.fields;
        let created_at = match &post.created_at {
            Some(stamp) => stamp.clone(),
            None => now_timestamp(),
        };
        let tags = encode_tags(fields.tags.as_ref())?;

        self.conn.execute(
            "INSERT INTO posts (title, tags, status, content, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![fields.title, tags, fields.status, fields.content, created_at],
        )?;

        let id = self.conn.last_insert_rowid();
        debug!(id, "added post");
        Ok(id)
    }

    fn update(&self, id: PostId, fields: &PostFields) -> Result<bool> {
        let tags = encode_tags(fields.tags.as_ref())?;

        let affected = self.conn.execute(
            "UPDATE posts SET title = ?1, tags = ?2, status = ?3, content = ?4
             WHERE id = ?5",
            params![fields.title, tags, fields.status, fields.content, id],
        )?;

        debug!(id, affected, "updated post");
        Ok(affected > 0)
    }

    fn delete(&self, id: PostId) -> Result<bool> {
        let affected = self.conn.execute("DELETE FROM posts WHERE id = ?1", [id])?;
        debug!(id, affected, "deleted post");
        Ok(affected > 0)
    }

    fn list(&self) -> Result<Vec<Post>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{} ORDER BY id", SELECT_COLUMNS))?;
        let rows = stmt.query_map([], Self::post_from_row)?;

        let mut posts = Vec::new();
        for row in rows {
            posts.push(row?);
        }
        Ok(posts)
    }

    fn get(&self, id: PostId) -> Result<Option<Post>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{} WHERE id = ?1", SELECT_COLUMNS))?;
        let post = stmt.query_row([id], Self::post_from_row).optional()?;
        Ok(post)
    }
}

impl ToSql for PostStatus {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for PostStatus {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let text = value.as_str()?;
        PostStatus::from_str(text).map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}
