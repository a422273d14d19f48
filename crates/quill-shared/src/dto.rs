//! Data Transfer Objects - request/response types for the service boundary.

use serde::{Deserialize, Serialize};

use quill_core::domain::{Post, PostContent};

/// Request to create a new post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub body: String,
    pub image_url: String,
}

/// Request to overwrite the text fields of an existing post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub title: String,
    pub body: String,
    pub image_url: String,
}

/// Request to append a comment to a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentRequest {
    pub comment: String,
}

/// Response containing a post's public state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub owner_id: String,
    pub title: String,
    pub body: String,
    pub image_url: String,
    pub likes: i64,
    pub comments: Vec<String>,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl From<CreatePostRequest> for PostContent {
    fn from(req: CreatePostRequest) -> Self {
        Self {
            title: req.title,
            body: req.body,
            image_url: req.image_url,
        }
    }
}

impl From<UpdatePostRequest> for PostContent {
    fn from(req: UpdatePostRequest) -> Self {
        Self {
            title: req.title,
            body: req.body,
            image_url: req.image_url,
        }
    }
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.to_string(),
            owner_id: post.owner_id.to_string(),
            title: post.title,
            body: post.body,
            image_url: post.image_url,
            likes: post.likes,
            comments: post.comments,
            created_at: post.created_at.to_rfc3339(),
            updated_at: post.updated_at.map(|t| t.to_rfc3339()),
        }
    }
}
