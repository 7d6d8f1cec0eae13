//! PostgreSQL post repository.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DbConn, DbErr, EntityTrait, NotSet, QueryOrder, Set, Unchanged,
};

use postline_core::domain::{NewPost, Post, PostId, PostPatch};
use postline_core::error::RepoError;
use postline_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};

/// PostgreSQL post repository.
pub struct PostgresPostRepository {
    db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    #[cfg(test)]
    pub(crate) fn into_connection(self) -> DbConn {
        self.db
    }
}

fn classify(err: DbErr) -> RepoError {
    match err {
        DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        DbErr::ConnectionAcquire(e) => RepoError::Connection(e.to_string()),
        other => {
            let err_str = other.to_string();
            if err_str.contains("duplicate") || err_str.contains("unique") {
                RepoError::Constraint(err_str)
            } else {
                RepoError::Query(err_str)
            }
        }
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn list_all(&self) -> Result<Vec<Post>, RepoError> {
        let rows = PostEntity::find()
            .order_by_desc(post::Column::CreatedAt)
            .order_by_desc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(classify)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        tracing::debug!(post_id = id, "Finding post by id");

        let row = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(classify)?;

        Ok(row.map(Into::into))
    }

    async fn insert(&self, new_post: NewPost) -> Result<Post, RepoError> {
        let now = Utc::now();
        let model = post::ActiveModel {
            id: NotSet,
            title: Set(new_post.title),
            body: Set(new_post.body),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };

        let row = model.insert(&self.db).await.map_err(classify)?;
        tracing::debug!(post_id = row.id, "Inserted post");

        Ok(row.into())
    }

    async fn replace(&self, id: PostId, patch: PostPatch) -> Result<Post, RepoError> {
        // One UPDATE ... WHERE id = $1 RETURNING *; no row means no such post.
        let mut model = post::ActiveModel {
            id: Unchanged(id),
            updated_at: Set(Utc::now().into()),
            ..Default::default()
        };
        if let Some(title) = patch.title {
            model.title = Set(title);
        }
        if let Some(body) = patch.body {
            model.body = Set(body);
        }

        match model.update(&self.db).await {
            Ok(row) => {
                tracing::debug!(post_id = id, "Updated post");
                Ok(row.into())
            }
            Err(DbErr::RecordNotUpdated) => Err(RepoError::NotFound),
            Err(e) => Err(classify(e)),
        }
    }

    async fn remove(&self, id: PostId) -> Result<(), RepoError> {
        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(classify)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        tracing::debug!(post_id = id, "Deleted post");
        Ok(())
    }
}
