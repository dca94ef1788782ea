//! Raw record shapes returned by the external repository.
//!
//! Records are plain data: the modeled fields every backend provides, plus a
//! flattened `extra` map carrying any backend-specific fields opaquely. An
//! entity owns its record exclusively and never mutates it after
//! construction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use corpus_core::{ContentId, UserId};

/// Attached image metadata for a content record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thumbnail {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// One raw content record ("post", "page", ...).
///
/// `parent = None` marks a root node of the content tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRecord {
    pub id: ContentId,
    #[serde(default)]
    pub parent: Option<ContentId>,
    pub author: UserId,
    pub kind: String,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<Thumbnail>,
    pub created_at: DateTime<Utc>,
    /// Backend-specific fields, passed through opaquely.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ContentRecord {
    /// Minimal record for seeding stores in tests/dev.
    pub fn new(id: impl Into<ContentId>, title: impl Into<String>) -> Self {
        let id = id.into();
        let title = title.into();
        Self {
            id,
            parent: None,
            author: UserId::new(0),
            kind: "post".to_string(),
            title,
            slug: format!("content-{id}"),
            body: String::new(),
            excerpt: None,
            password: None,
            thumbnail: None,
            created_at: Utc::now(),
            extra: Map::new(),
        }
    }

    pub fn with_parent(mut self, parent: impl Into<ContentId>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<UserId>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn with_thumbnail(mut self, thumbnail: Thumbnail) -> Self {
        self.thumbnail = Some(thumbnail);
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Named-field lookup for the dynamic-read fallback: modeled fields
    /// first, then the opaque `extra` map.
    pub fn field(&self, name: &str) -> Option<Value> {
        match name {
            "id" => Some(Value::from(self.id.as_u64())),
            "parent" => self.parent.map(|p| Value::from(p.as_u64())),
            "author" => Some(Value::from(self.author.as_u64())),
            "kind" => Some(Value::String(self.kind.clone())),
            "title" => Some(Value::String(self.title.clone())),
            "slug" => Some(Value::String(self.slug.clone())),
            "body" => Some(Value::String(self.body.clone())),
            "excerpt" => self.excerpt.clone().map(Value::String),
            "password" => self.password.clone().map(Value::String),
            "thumbnail" => self
                .thumbnail
                .as_ref()
                .and_then(|t| serde_json::to_value(t).ok()),
            "created_at" => Some(Value::String(self.created_at.to_rfc3339())),
            _ => self.extra.get(name).cloned(),
        }
    }
}

/// One raw user record from the external user directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    pub login: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserRecord {
    /// Minimal record for seeding directories in tests/dev.
    pub fn new(id: impl Into<UserId>, login: impl Into<String>) -> Self {
        let login = login.into();
        Self {
            id: id.into(),
            display_name: login.clone(),
            nickname: login.clone(),
            login,
            first_name: String::new(),
            last_name: String::new(),
            description: String::new(),
            email: String::new(),
            url: None,
            avatar: None,
            extra: Map::new(),
        }
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Named-field lookup for the dynamic-read fallback.
    pub fn field(&self, name: &str) -> Option<Value> {
        match name {
            "id" => Some(Value::from(self.id.as_u64())),
            "login" => Some(Value::String(self.login.clone())),
            "display_name" => Some(Value::String(self.display_name.clone())),
            "nickname" => Some(Value::String(self.nickname.clone())),
            "first_name" => Some(Value::String(self.first_name.clone())),
            "last_name" => Some(Value::String(self.last_name.clone())),
            "description" => Some(Value::String(self.description.clone())),
            "email" => Some(Value::String(self.email.clone())),
            "url" => self.url.clone().map(Value::String),
            "avatar" => self.avatar.clone().map(Value::String),
            _ => self.extra.get(name).cloned(),
        }
    }
}
