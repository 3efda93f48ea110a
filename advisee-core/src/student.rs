//! Student identity fields used on the declaration form

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::grade::Semester;

/// Descriptive student details. Not used in any calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudentInfo {
    pub first_name: String,
    pub middle_initial: String,
    pub surname: String,
    pub student_id: String,
    pub contact_no: String,
    pub email: String,
    pub academic_year: String,
    pub semester: Semester,
    /// Term the student intends to graduate at the end of
    pub graduation_term: String,
}

impl Default for StudentInfo {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            middle_initial: String::new(),
            surname: String::new(),
            student_id: String::new(),
            contact_no: String::new(),
            email: String::new(),
            academic_year: chrono::Local::now().year().to_string(),
            semester: Semester::default(),
            graduation_term: String::new(),
        }
    }
}

impl StudentInfo {
    /// "First M Surname", skipping blank parts
    pub fn full_name(&self) -> String {
        [&self.first_name, &self.middle_initial, &self.surname]
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Identity fields that are still blank
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("first_name", &self.first_name),
            ("surname", &self.surname),
            ("student_id", &self.student_id),
            ("email", &self.email),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

/// Optional edits to apply to `StudentInfo`
#[derive(Debug, Clone, Default)]
pub struct StudentUpdate {
    pub first_name: Option<String>,
    pub middle_initial: Option<String>,
    pub surname: Option<String>,
    pub student_id: Option<String>,
    pub contact_no: Option<String>,
    pub email: Option<String>,
    pub academic_year: Option<String>,
    pub semester: Option<Semester>,
    pub graduation_term: Option<String>,
}

impl StudentUpdate {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.middle_initial.is_none()
            && self.surname.is_none()
            && self.student_id.is_none()
            && self.contact_no.is_none()
            && self.email.is_none()
            && self.academic_year.is_none()
            && self.semester.is_none()
            && self.graduation_term.is_none()
    }

    /// Apply the set fields, trimming text
    pub fn apply(self, info: &mut StudentInfo) {
        fn set(target: &mut String, value: Option<String>) {
            if let Some(v) = value {
                *target = v.trim().to_string();
            }
        }

        set(&mut info.first_name, self.first_name);
        set(&mut info.middle_initial, self.middle_initial);
        set(&mut info.surname, self.surname);
        set(&mut info.student_id, self.student_id);
        set(&mut info.contact_no, self.contact_no);
        set(&mut info.email, self.email);
        set(&mut info.academic_year, self.academic_year);
        set(&mut info.graduation_term, self.graduation_term);
        if let Some(semester) = self.semester {
            info.semester = semester;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_academic_year_is_current() {
        let info = StudentInfo::default();
        assert_eq!(info.academic_year, chrono::Local::now().year().to_string());
        assert_eq!(info.semester, Semester::Fall);
    }

    #[test]
    fn test_full_name_skips_blank_parts() {
        let mut info = StudentInfo {
            first_name: "Ada".to_string(),
            surname: "Lovelace".to_string(),
            ..Default::default()
        };
        assert_eq!(info.full_name(), "Ada Lovelace");

        info.middle_initial = "K".to_string();
        assert_eq!(info.full_name(), "Ada K Lovelace");
    }

    #[test]
    fn test_missing_fields() {
        let info = StudentInfo {
            first_name: "Ada".to_string(),
            email: "  ".to_string(),
            ..Default::default()
        };
        assert_eq!(info.missing_fields(), vec!["surname", "student_id", "email"]);
    }

    #[test]
    fn test_update_applies_only_set_fields() {
        let mut info = StudentInfo {
            first_name: "Ada".to_string(),
            surname: "Lovelace".to_string(),
            ..Default::default()
        };
        let update = StudentUpdate {
            surname: Some("  Byron ".to_string()),
            semester: Some(Semester::Spring),
            ..Default::default()
        };
        assert!(!update.is_empty());
        update.apply(&mut info);

        assert_eq!(info.first_name, "Ada");
        assert_eq!(info.surname, "Byron");
        assert_eq!(info.semester, Semester::Spring);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let info: StudentInfo = serde_json::from_str(r#"{"first_name": "Ada"}"#).unwrap();
        assert_eq!(info.first_name, "Ada");
        assert_eq!(info.semester, Semester::Fall);
        assert!(!info.academic_year.is_empty());
    }
}
