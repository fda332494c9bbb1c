//! PostgreSQL customer store.

use super::CustomerRepository;
use crate::error::AppError;
use crate::model::Customer;
use crate::store::{CUSTOMER_ID_SEQUENCE, CUSTOMER_TABLE};
use async_trait::async_trait;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PgCustomerRepository {
    pool: PgPool,
}

impl PgCustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert(&self, customer: &Customer) -> Result<Customer, AppError> {
        let sql = format!(
            "INSERT INTO {} (first_name, last_name, email) VALUES ($1, $2, $3) \
             RETURNING id, first_name, last_name, email",
            CUSTOMER_TABLE
        );
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, Customer>(&sql)
            .bind(&customer.first_name)
            .bind(&customer.last_name)
            .bind(&customer.email)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    /// Upsert row `id`. When `id` is at or beyond the sequence's next value, move the sequence
    /// to `id` so the next store-assigned id is `id + 1`. The sequence never moves backwards, so
    /// ids of deleted rows are not handed out again.
    async fn upsert(&self, id: i32, customer: &Customer) -> Result<Customer, AppError> {
        let sql = format!(
            "INSERT INTO {t} (id, first_name, last_name, email) VALUES ($1, $2, $3, $4) \
             ON CONFLICT (id) DO UPDATE SET first_name = EXCLUDED.first_name, \
             last_name = EXCLUDED.last_name, email = EXCLUDED.email \
             RETURNING id, first_name, last_name, email",
            t = CUSTOMER_TABLE
        );
        let bump = format!(
            "SELECT setval('{s}', $1::bigint) FROM {s} \
             WHERE $1::bigint >= CASE WHEN is_called THEN last_value + 1 ELSE last_value END",
            s = CUSTOMER_ID_SEQUENCE
        );
        tracing::debug!(sql = %sql, id, "query (tx)");
        let mut tx = self.pool.begin().await?;
        let row = sqlx::query_as::<_, Customer>(&sql)
            .bind(id)
            .bind(&customer.first_name)
            .bind(&customer.last_name)
            .bind(&customer.email)
            .fetch_one(&mut *tx)
            .await?;
        sqlx::query(&bump).bind(i64::from(id)).execute(&mut *tx).await?;
        tx.commit().await?;
        Ok(row)
    }
}

#[async_trait]
impl CustomerRepository for PgCustomerRepository {
    async fn save(&self, customer: &Customer) -> Result<Customer, AppError> {
        match customer.id {
            Some(id) => self.upsert(id, customer).await,
            None => self.insert(customer).await,
        }
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Customer>, AppError> {
        let sql = format!(
            "SELECT id, first_name, last_name, email FROM {} WHERE id = $1",
            CUSTOMER_TABLE
        );
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Customer>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find_all_desc(&self) -> Result<Vec<Customer>, AppError> {
        let sql = format!(
            "SELECT id, first_name, last_name, email FROM {} ORDER BY id DESC",
            CUSTOMER_TABLE
        );
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Customer>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), AppError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", CUSTOMER_TABLE);
        tracing::debug!(sql = %sql, id, "query");
        sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ensure_customer_table;

    async fn connect() -> PgCustomerRepository {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let pool = sqlx::postgres::PgPoolOptions::new()
            .max_connections(2)
            .connect(&url)
            .await
            .expect("connect");
        ensure_customer_table(&pool).await.expect("create table");
        PgCustomerRepository::new(pool)
    }

    #[tokio::test]
    #[ignore = "needs a PostgreSQL server at DATABASE_URL"]
    async fn insert_find_delete_round_trip() {
        let repo = connect().await;
        let created = repo.save(&Customer::new("Ann", "Lee", "ann@x.com")).await.unwrap();
        let id = created.id.expect("assigned id");

        assert_eq!(repo.find_by_id(id).await.unwrap(), Some(created.clone()));

        let listed = repo.find_all_desc().await.unwrap();
        assert!(listed.windows(2).all(|w| w[0].id >= w[1].id));

        repo.delete_by_id(id).await.unwrap();
        repo.delete_by_id(id).await.unwrap();
        assert!(repo.find_by_id(id).await.unwrap().is_none());
    }

    #[tokio::test]
    #[ignore = "needs a PostgreSQL server at DATABASE_URL"]
    async fn explicit_id_keeps_sequence_ahead() {
        let repo = connect().await;
        let seeded = repo.save(&Customer::new("Seed", "S", "s@x.com")).await.unwrap();
        let high = seeded.id.unwrap() + 1000;
        repo.save(&Customer {
            id: Some(high),
            ..Customer::new("High", "H", "h@x.com")
        })
        .await
        .unwrap();
        let next = repo.save(&Customer::new("Next", "N", "n@x.com")).await.unwrap();
        assert!(next.id.unwrap() > high);

        for id in [seeded.id.unwrap(), high, next.id.unwrap()] {
            repo.delete_by_id(id).await.unwrap();
        }
    }

    #[tokio::test]
    #[ignore = "needs a PostgreSQL server at DATABASE_URL"]
    async fn overwrite_after_deleting_newest_does_not_reissue_its_id() {
        let repo = connect().await;
        let a = repo.save(&Customer::new("Ann", "Lee", "ann@x.com")).await.unwrap();
        let c = repo.save(&Customer::new("Cy", "C", "c@x.com")).await.unwrap();
        repo.delete_by_id(c.id.unwrap()).await.unwrap();

        repo.save(&Customer {
            id: a.id,
            ..Customer::new("Anna", "Lee", "ann@x.com")
        })
        .await
        .unwrap();
        let d = repo.save(&Customer::new("Dee", "D", "d@x.com")).await.unwrap();
        assert!(d.id.unwrap() > c.id.unwrap());

        for id in [a.id.unwrap(), d.id.unwrap()] {
            repo.delete_by_id(id).await.unwrap();
        }
    }

    #[tokio::test]
    #[ignore = "needs a PostgreSQL server at DATABASE_URL"]
    async fn service_update_does_not_reissue_deleted_id() {
        use crate::service::CustomerService;
        use std::sync::Arc;

        let svc = CustomerService::new(Arc::new(connect().await));
        let a = svc.save(Customer::new("Ann", "Lee", "ann@x.com")).await.unwrap();
        let c = svc.save(Customer::new("Cy", "C", "c@x.com")).await.unwrap();
        svc.delete(c.id.unwrap()).await.unwrap();

        svc.update(a.id.unwrap(), Customer::new("Anna", "Lee", "ann@x.com"))
            .await
            .unwrap();
        let d = svc.save(Customer::new("Dee", "D", "d@x.com")).await.unwrap();
        assert_ne!(d.id, c.id);
        assert!(d.id.unwrap() > c.id.unwrap());

        for id in [a.id.unwrap(), d.id.unwrap()] {
            svc.delete(id).await.unwrap();
        }
    }
}
