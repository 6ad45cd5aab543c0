//! PostgreSQL post store.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, DbConn, DbErr, EntityTrait, QueryOrder, Set,
};

use blog_core::domain::{Post, PostChanges, PostId};
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

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

fn map_db_err(err: DbErr) -> RepoError {
    match err {
        DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => RepoError::NotFound,
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => RepoError::Connection(err.to_string()),
        other => RepoError::Query(other.to_string()),
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create(&self, post: Post) -> Result<Post, RepoError> {
        tracing::debug!(post_id = %post.id, "Inserting post");

        let model = post::ActiveModel::from(post)
            .insert(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.into())
    }

    async fn list_all(&self) -> Result<Vec<Post>, RepoError> {
        let models = PostEntity::find()
            .order_by_asc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        tracing::debug!(count = models.len(), "Listed posts");
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: PostId) -> Result<Post, RepoError> {
        PostEntity::find_by_id(id.as_uuid())
            .one(&self.db)
            .await
            .map_err(map_db_err)?
            .map(Into::into)
            .ok_or(RepoError::NotFound)
    }

    async fn update_by_id(&self, id: PostId, changes: PostChanges) -> Result<Post, RepoError> {
        if changes.is_empty() {
            return self.find_by_id(id).await;
        }

        tracing::debug!(post_id = %id, "Updating post");

        // `created` stays NotSet so the UPDATE never touches it.
        let active = post::ActiveModel {
            id: Set(id.as_uuid()),
            title: changes.title.map_or(NotSet, Set),
            image: changes.image.map_or(NotSet, Set),
            body: changes.body.map_or(NotSet, Set),
            created: NotSet,
        };

        let model = active.update(&self.db).await.map_err(map_db_err)?;
        Ok(model.into())
    }

    async fn delete_by_id(&self, id: PostId) -> Result<(), RepoError> {
        tracing::debug!(post_id = %id, "Deleting post");

        let result = PostEntity::delete_by_id(id.as_uuid())
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}
