use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;
use crate::loans::domain::model::{LoanEntity, next_loan_id};
use crate::loans::repository::LoanRepository;

// FileLoanRepository keeps the loan history as a JSON array in one file. Every
// operation reads the file and mutations rewrite it whole while holding the lock.
#[derive(Debug)]
pub struct FileLoanRepository {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileLoanRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    async fn read_all(&self) -> LibraryResult<Vec<LoanEntity>> {
        if !fs::try_exists(&self.path).await? {
            return Ok(vec![]);
        }
        let data = fs::read_to_string(&self.path).await?;
        if data.trim().is_empty() {
            return Ok(vec![]);
        }
        serde_json::from_str(&data).map_err(|err| {
            warn!(path = %self.path.display(), error = %err, "unreadable loan cache");
            LibraryError::serialization(format!("loan cache {} is not valid: {}", self.path.display(), err).as_str())
        })
    }

    async fn write_all(&self, loans: &[LoanEntity]) -> LibraryResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(loans)?;
        fs::write(&self.path, json).await?;
        debug!(path = %self.path.display(), loans = loans.len(), "loan cache written");
        Ok(())
    }
}

#[async_trait]
impl Repository<LoanEntity> for FileLoanRepository {
    async fn create(&self, entity: &LoanEntity) -> LibraryResult<LoanEntity> {
        let _guard = self.lock.lock().await;
        let mut loans = self.read_all().await?;
        let created = LoanEntity { id: next_loan_id(&loans), ..entity.clone() };
        loans.push(created.clone());
        self.write_all(&loans).await?;
        info!(loan_id = created.id, user_id = created.user_id, book_id = created.book_id, "loan registered");
        Ok(created)
    }

    async fn update(&self, entity: &LoanEntity) -> LibraryResult<LoanEntity> {
        let _guard = self.lock.lock().await;
        let mut loans = self.read_all().await?;
        match loans.iter_mut().find(|l| l.id == entity.id) {
            Some(existing) => *existing = entity.clone(),
            None => return Err(LibraryError::not_found(format!("loan not found for {}", entity.id).as_str())),
        }
        self.write_all(&loans).await?;
        info!(loan_id = entity.id, status = %entity.status, "loan updated");
        Ok(entity.clone())
    }

    async fn get(&self, id: i64) -> LibraryResult<LoanEntity> {
        let loans = self.read_all().await?;
        loans.into_iter().find(|l| l.id == id)
            .ok_or_else(|| LibraryError::not_found(format!("loan not found for {}", id).as_str()))
    }

    async fn delete(&self, id: i64) -> LibraryResult<usize> {
        let _guard = self.lock.lock().await;
        let mut loans = self.read_all().await?;
        let before = loans.len();
        loans.retain(|l| l.id != id);
        let removed = before - loans.len();
        if removed == 0 {
            return Err(LibraryError::not_found(format!("loan not found for {}", id).as_str()));
        }
        self.write_all(&loans).await?;
        info!(loan_id = id, "loan removed");
        Ok(removed)
    }

    async fn query(&self, predicate: &HashMap<String, String>) -> LibraryResult<Vec<LoanEntity>> {
        let loans = self.read_all().await?;
        Ok(loans.into_iter().filter(|l| l.matches(predicate)).collect())
    }
}

#[async_trait]
impl LoanRepository for FileLoanRepository {
    async fn list(&self) -> LibraryResult<Vec<LoanEntity>> {
        self.read_all().await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::PathBuf;
    use chrono::NaiveDate;
    use uuid::Uuid;
    use crate::core::library::{LibraryError, LoanStatus};
    use crate::core::repository::Repository;
    use crate::loans::domain::model::LoanEntity;
    use crate::loans::repository::LoanRepository;
    use crate::loans::repository::file_loan_repository::FileLoanRepository;

    fn cache_path() -> PathBuf {
        std::env::temp_dir().join(format!("biblio-{}", Uuid::new_v4())).join("loans.json")
    }

    fn loan(user_id: i64, book_id: i64) -> LoanEntity {
        LoanEntity::new(user_id, book_id,
                        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                        NaiveDate::from_ymd_opt(2024, 3, 31).unwrap())
    }

    #[tokio::test]
    async fn test_should_start_empty() {
        let repo = FileLoanRepository::new(cache_path());
        assert!(repo.list().await.expect("should list").is_empty());
        assert!(matches!(repo.get(1).await, Err(LibraryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_should_create_with_increasing_ids() {
        let path = cache_path();
        let repo = FileLoanRepository::new(path.clone());

        assert_eq!(1, repo.create(&loan(1, 1)).await.expect("should create").id);
        assert_eq!(2, repo.create(&loan(1, 2)).await.expect("should create").id);
        repo.delete(1).await.expect("should delete");
        assert_eq!(3, repo.create(&loan(2, 1)).await.expect("should create").id);

        // a second instance sees the same file
        let other = FileLoanRepository::new(path);
        let ids: Vec<i64> = other.list().await.expect("should list").iter().map(|l| l.id).collect();
        assert_eq!(vec![2, 3], ids);
    }

    #[tokio::test]
    async fn test_should_update_loan() {
        let repo = FileLoanRepository::new(cache_path());
        let mut created = repo.create(&loan(1, 1)).await.expect("should create");
        created.status = LoanStatus::Returned;
        repo.update(&created).await.expect("should update");
        assert_eq!(LoanStatus::Returned, repo.get(created.id).await.expect("should get").status);

        created.id = 99;
        assert!(matches!(repo.update(&created).await, Err(LibraryError::NotFound { .. })));
        assert!(matches!(repo.delete(99).await, Err(LibraryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_should_query_loans() {
        let repo = FileLoanRepository::new(cache_path());
        let _ = repo.create(&loan(1, 1)).await.expect("should create");
        let _ = repo.create(&loan(2, 1)).await.expect("should create");
        let _ = repo.create(&loan(1, 3)).await.expect("should create");

        let res = repo.query(&HashMap::from([("user_id".to_string(), "1".to_string())])).await.expect("should query");
        assert_eq!(2, res.len());
        let res = repo.query(&HashMap::from([("book_id".to_string(), "1".to_string()),
            ("status".to_string(), "Ativo".to_string())])).await.expect("should query");
        assert_eq!(2, res.len());
    }

    #[tokio::test]
    async fn test_should_reject_corrupt_cache() {
        let path = cache_path();
        tokio::fs::create_dir_all(path.parent().unwrap()).await.unwrap();
        tokio::fs::write(&path, "{not json").await.unwrap();
        let repo = FileLoanRepository::new(path);
        assert!(matches!(repo.list().await, Err(LibraryError::Serialization { .. })));
    }
}
