use crate::domain::error::DomainError;
use crate::domain::repository::StudentRepository;
use crate::domain::student::{Student, StudentPayload};
use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

const MIN_AGE: u32 = 1;
const MAX_AGE: u32 = 150;

fn validate(req: &StudentPayload) -> Result<(), DomainError> {
    for (field, value) in [("name", &req.name), ("email", &req.email)] {
        if value.trim().is_empty() {
            warn!(field = field, "Student field is blank");
            return Err(DomainError::Validation(format!("{} is required", field)));
        }
    }
    if !(MIN_AGE..=MAX_AGE).contains(&req.age) {
        warn!(age = req.age, "Student age out of range");
        return Err(DomainError::Validation(format!(
            "age must be between {} and {}",
            MIN_AGE, MAX_AGE
        )));
    }
    Ok(())
}

pub struct StudentService<R: StudentRepository> {
    repository: Arc<R>,
}

impl<R: StudentRepository> StudentService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn create_student(&self, req: StudentPayload) -> Result<Student> {
        validate(&req)?;
        self.repository.create(req).await
    }

    pub async fn get_student(&self, id: u64) -> Result<Student> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::StudentNotFound(id).into())
    }

    /// Blank or absent `search` returns every student.
    #[instrument(skip(self))]
    pub async fn list_students(&self, search: Option<&str>) -> Result<Vec<Student>> {
        let students = self.repository.find_all().await?;
        let students: Vec<Student> = match search.map(str::trim).filter(|term| !term.is_empty()) {
            Some(term) => students.into_iter().filter(|s| s.matches(term)).collect(),
            None => students,
        };
        debug!(count = students.len(), "Students listed");
        Ok(students)
    }

    pub async fn update_student(&self, id: u64, req: StudentPayload) -> Result<Student> {
        validate(&req)?;
        let student = Student::from_payload(id, req);
        if !self.repository.update(student.clone()).await? {
            return Err(DomainError::StudentNotFound(id).into());
        }
        Ok(student)
    }

    pub async fn delete_student(&self, id: u64) -> Result<()> {
        if !self.repository.delete(id).await? {
            return Err(DomainError::StudentNotFound(id).into());
        }
        Ok(())
    }
}
