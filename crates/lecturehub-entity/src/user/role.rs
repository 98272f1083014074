//! User role enumeration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Roles available on the platform.
///
/// Instructors may create lectures; both roles may enroll in them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Creates and owns lectures.
    Instructor,
    /// Enrolls in lectures.
    Student,
}

impl UserRole {
    /// Check if this role may create lectures.
    pub fn can_create_lectures(&self) -> bool {
        matches!(self, Self::Instructor)
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Instructor => "instructor",
            Self::Student => "student",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = lecturehub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "instructor" => Ok(Self::Instructor),
            "student" => Ok(Self::Student),
            _ => Err(lecturehub_core::AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: instructor, student"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("student".parse::<UserRole>().unwrap(), UserRole::Student);
        assert_eq!(
            "INSTRUCTOR".parse::<UserRole>().unwrap(),
            UserRole::Instructor
        );
        assert!("admin".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_only_instructors_create_lectures() {
        assert!(UserRole::Instructor.can_create_lectures());
        assert!(!UserRole::Student.can_create_lectures());
    }
}
