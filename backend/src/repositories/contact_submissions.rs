use diesel::prelude::*;

use crate::{
    models::landing_models::{ContactSubmission, NewContactSubmission},
    repositories::errors::RepositoryError,
    schema::contact_submissions,
    DbPool,
};

/// Append-only store of contact form records.
pub struct ContactSubmissionRepository {
    pool: DbPool,
}

impl ContactSubmissionRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn insert(&self, new_submission: NewContactSubmission) -> Result<ContactSubmission, RepositoryError> {
        let mut conn = self.pool.get()?;
        let created = conn.transaction(|conn| {
            diesel::insert_into(contact_submissions::table)
                .values(&new_submission)
                .execute(conn)?;

            contact_submissions::table
                .order(contact_submissions::id.desc())
                .select(ContactSubmission::as_select())
                .first(conn)
        })?;
        Ok(created)
    }
}

#[cfg(test)]
impl ContactSubmissionRepository {
    pub fn count(&self) -> Result<i64, RepositoryError> {
        let mut conn = self.pool.get()?;
        let total = contact_submissions::table.count().get_result(&mut conn)?;
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::memory_pool;

    fn submission(name: &str) -> NewContactSubmission {
        NewContactSubmission {
            name: name.to_string(),
            company: "Acme Studio".to_string(),
            email: "jane@acme.test".to_string(),
            phone: None,
            preferred_solution: "Compliance Checker".to_string(),
            pain_points: "[]".to_string(),
            note: None,
            created_at: "2025-06-01T10:00:00.000Z".to_string(),
        }
    }

    #[test]
    fn insert_returns_the_stored_row() {
        let repo = ContactSubmissionRepository::new(memory_pool());
        let first = repo.insert(submission("Jane Tan")).unwrap();
        let second = repo.insert(submission("Joe Lim")).unwrap();

        assert_eq!(first.name, "Jane Tan");
        assert_eq!(second.name, "Joe Lim");
        assert!(second.id > first.id);
        assert_eq!(second.phone, None);
        assert_eq!(repo.count().unwrap(), 2);
    }
}
