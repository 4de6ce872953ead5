use crate::domain::repository::StudentRepository;
use crate::domain::student::{Student, StudentPayload};
use anyhow::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

#[derive(Default)]
struct StudentTable {
    // BTreeMap keeps find_all ordered by id.
    rows: BTreeMap<u64, Student>,
    last_id: u64,
}

#[derive(Clone)]
pub struct InMemoryStudentRepository {
    storage: Arc<RwLock<StudentTable>>,
}

impl InMemoryStudentRepository {
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RwLock::new(StudentTable::default())),
        }
    }
}

impl Default for InMemoryStudentRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StudentRepository for InMemoryStudentRepository {
    #[instrument(skip(self, student))]
    async fn create(&self, student: StudentPayload) -> Result<Student> {
        let mut storage = self.storage.write().await;
        storage.last_id += 1;
        let saved = Student::from_payload(storage.last_id, student);
        storage.rows.insert(saved.id, saved.clone());
        debug!(student_id = saved.id, "Student saved to memory storage");
        Ok(saved)
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<Student>> {
        let storage = self.storage.read().await;
        Ok(storage.rows.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Student>> {
        let storage = self.storage.read().await;
        Ok(storage.rows.values().cloned().collect())
    }

    #[instrument(skip(self, student), fields(student_id = student.id))]
    async fn update(&self, student: Student) -> Result<bool> {
        let mut storage = self.storage.write().await;
        match storage.rows.get_mut(&student.id) {
            Some(row) => {
                *row = student;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: u64) -> Result<bool> {
        let mut storage = self.storage.write().await;
        Ok(storage.rows.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: &str, age: u32) -> StudentPayload {
        StudentPayload {
            name: name.to_string(),
            email: format!("{}@school.edu", name.to_lowercase()),
            age,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_ids_and_find_by_id() {
        let repo = InMemoryStudentRepository::new();

        let created = repo.create(payload("Alice", 20)).await.unwrap();

        assert_eq!(created.id, 1);
        let found = repo.find_by_id(created.id).await.unwrap();
        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn test_find_all_is_ordered_by_id() {
        let repo = InMemoryStudentRepository::new();
        for (i, name) in ["Carol", "Alice", "Bob"].iter().enumerate() {
            repo.create(payload(name, 18 + i as u32)).await.unwrap();
        }

        let all = repo.find_all().await.unwrap();

        let ids: Vec<u64> = all.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(all[0].name, "Carol");
    }

    #[tokio::test]
    async fn test_update_replaces_existing_row() {
        let repo = InMemoryStudentRepository::new();
        let mut student = repo.create(payload("Alice", 20)).await.unwrap();
        student.age = 21;

        assert!(repo.update(student.clone()).await.unwrap());
        assert_eq!(repo.find_by_id(student.id).await.unwrap().unwrap().age, 21);
    }

    #[tokio::test]
    async fn test_update_missing_row_returns_false() {
        let repo = InMemoryStudentRepository::new();
        let ghost = Student::from_payload(42, payload("Ghost", 30));

        assert!(!repo.update(ghost).await.unwrap());
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_removes_row_once() {
        let repo = InMemoryStudentRepository::new();
        let student = repo.create(payload("Alice", 20)).await.unwrap();

        assert!(repo.delete(student.id).await.unwrap());
        assert!(!repo.delete(student.id).await.unwrap());
        assert!(repo.find_by_id(student.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = InMemoryStudentRepository::new();
        let first = repo.create(payload("Alice", 20)).await.unwrap();
        repo.delete(first.id).await.unwrap();

        let second = repo.create(payload("Bob", 22)).await.unwrap();

        assert_eq!(second.id, 2);
    }
}
