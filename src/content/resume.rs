//! `resume.json`: education, experience, and skills.

use serde::Deserialize;

/// Resume page content.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ResumeContent {
    #[serde(default)]
    pub page_text: PageText,
    #[serde(default)]
    pub degrees: Vec<Degree>,
    #[serde(default)]
    pub experience: Option<Experience>,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
}

/// Section heading labels, overridable from content.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct PageText {
    pub education: String,
    pub experience: String,
    pub skills: String,
}

impl Default for PageText {
    fn default() -> Self {
        Self {
            education: "Education".to_string(),
            experience: "Experience".to_string(),
            skills: "Skills".to_string(),
        }
    }
}

/// One degree block with its exam grid.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct Degree {
    pub title: String,
    #[serde(default)]
    pub info: String,
    pub institution: String,
    #[serde(default)]
    pub institution_url: Option<String>,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub exams: Vec<Exam>,
}

/// One exam card.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Exam {
    pub name: String,
    #[serde(default)]
    pub grade: Option<String>,
}

/// Work experience block.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct Experience {
    pub position: String,
    pub company: String,
    #[serde(default)]
    pub company_url: Option<String>,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
}

/// One named skill group.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SkillCategory {
    pub title: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_resume_json() {
        let json = r#"{
            "page_text": {"education": "Studies", "experience": "Work", "skills": "Skills"},
            "degrees": [{
                "title": "MSc Data Science",
                "info": "110/110",
                "institution": "University of Pisa",
                "institution_url": "https://www.unipi.it",
                "period": "2021 - 2023",
                "location": "Pisa, Italy",
                "exams": [
                    {"name": "Data Mining", "grade": "30"},
                    {"name": "Statistics"}
                ]
            }],
            "experience": {
                "position": "Full-stack Developer",
                "company": "Acme",
                "period": "2019 - 2020",
                "location": "Remote",
                "description": "Frontend-heavy product work.",
                "responsibilities": ["Built UI components", "Maintained REST endpoints"]
            },
            "skills": [
                {"title": "Languages", "skills": ["Python", "Rust", "SQL"]}
            ]
        }"#;

        let resume: ResumeContent = serde_json::from_str(json).unwrap();
        assert_eq!(resume.page_text.education, "Studies");
        assert_eq!(resume.degrees.len(), 1);
        assert_eq!(resume.degrees[0].exams.len(), 2);
        assert_eq!(resume.degrees[0].exams[1].grade, None);
        assert_eq!(
            resume.experience.as_ref().unwrap().responsibilities.len(),
            2
        );
        assert_eq!(resume.skills[0].skills.len(), 3);
    }

    #[test]
    fn test_default_page_text() {
        let resume: ResumeContent = serde_json::from_str("{}").unwrap();
        assert_eq!(resume.page_text.education, "Education");
        assert_eq!(resume.page_text.skills, "Skills");
        assert!(resume.degrees.is_empty());
    }
}
