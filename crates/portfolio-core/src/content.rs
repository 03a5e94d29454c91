//! Static page content.
//!
//! Everything the page shows comes from one [`Content`] value: either the
//! built-in literal content or a JSON file with the same shape. Content is
//! read-only once loaded; [`Content::validate`] catches malformed records
//! before the page is ever rendered.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PortfolioError, PortfolioResult};

/// Hero and footer details.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub location: String,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    pub footer: String,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Education {
    pub school: String,
    pub degree: String,
    pub graduation: String,
    #[serde(default)]
    pub gpa: Option<String>,
    #[serde(default)]
    pub awards: Vec<String>,
    #[serde(default)]
    pub coursework: Vec<String>,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Experience {
    pub role: String,
    pub organization: String,
    pub period: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

/// One portfolio item in the project gallery.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Image path or URL; a placeholder is shown if it fails to load.
    pub image: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub demo_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
}

/// A proficiency bar.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Percentage in `0..=100`.
    pub level: u8,
}

impl Skill {
    pub fn new(name: impl Into<String>, level: u8) -> Self {
        Self {
            name: name.into(),
            level,
        }
    }

    /// Level clamped for display as a bar width.
    pub fn width_percent(&self) -> u8 {
        self.level.min(100)
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct SkillGroup {
    pub title: String,
    pub skills: Vec<Skill>,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Content {
    pub profile: Profile,
    #[serde(default)]
    pub about: Vec<String>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skill_groups: Vec<SkillGroup>,
    #[serde(default)]
    pub additional_skills: Vec<String>,
    /// Hero subtitle captions, cycled every few seconds.
    #[serde(default)]
    pub captions: Vec<String>,
    /// Labels floating around the background orbit.
    #[serde(default)]
    pub orbit_skills: Vec<String>,
}

impl Content {
    /// Parse content from JSON and validate it.
    pub fn from_json(json: &str) -> PortfolioResult<Self> {
        let content: Content = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    /// Read, parse and validate a content file.
    pub fn load(path: impl AsRef<Path>) -> PortfolioResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let content = Self::from_json(&json)?;
        tracing::info!(
            path = %path.display(),
            projects = content.projects.len(),
            skill_groups = content.skill_groups.len(),
            "Loaded content file"
        );
        Ok(content)
    }

    /// Check every record for problems a reviewer would reject.
    ///
    /// All problems are collected into one error rather than stopping at the
    /// first.
    pub fn validate(&self) -> PortfolioResult<()> {
        let mut problems = Vec::new();

        if self.profile.name.trim().is_empty() {
            problems.push("profile name is empty".to_string());
        }
        check_url(&mut problems, "profile linkedin_url", &self.profile.linkedin_url);

        for edu in &self.education {
            if edu.school.trim().is_empty() {
                problems.push("education entry has empty school".to_string());
            }
        }

        for exp in &self.experience {
            if exp.role.trim().is_empty() {
                problems.push(format!("experience at '{}' has empty role", exp.organization));
            }
        }

        let mut ids = HashSet::new();
        for project in &self.projects {
            if !ids.insert(project.id) {
                problems.push(format!("duplicate project id {}", project.id));
            }
            if project.title.trim().is_empty() {
                problems.push(format!("project {} has empty title", project.id));
            }
            if project.tags.iter().any(|t| t.trim().is_empty()) {
                problems.push(format!("project {} has an empty tag", project.id));
            }
            check_url(&mut problems, &format!("project {} demo_url", project.id), &project.demo_url);
            check_url(
                &mut problems,
                &format!("project {} github_url", project.id),
                &project.github_url,
            );
        }

        for group in &self.skill_groups {
            if group.title.trim().is_empty() {
                problems.push("skill group has empty title".to_string());
            }
            for skill in &group.skills {
                if skill.name.trim().is_empty() {
                    problems.push(format!("skill in '{}' has empty name", group.title));
                }
                if skill.level > 100 {
                    problems.push(format!(
                        "skill '{}' has level {} (max 100)",
                        skill.name, skill.level
                    ));
                }
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(PortfolioError::InvalidContent(problems.join("; ")))
        }
    }

    /// Built-in content shown when no content file is given.
    ///
    /// Captions are left empty; they are supplied from configuration.
    pub fn builtin() -> Self {
        Self {
            profile: Profile {
                name: "Smyan Thota".to_string(),
                email: "smyanisworking@gmail.com".to_string(),
                location: "Cleveland OH".to_string(),
                linkedin_url: Some("https://www.linkedin.com/in/smyanthota".to_string()),
                footer: "\u{a9} 2024 Smyan Satyarthi Thota. All rights reserved.".to_string(),
            },
            about: strings(&[
                "\u{1f44b} Hey there! I'm Smyan, a Data Engineer with a twist. Think of me as a data chef, whipping up delicious insights from raw ingredients (aka data) in the kitchen of financial services.",
                "\u{1f680} My superpower? Turning messy data into streamlined pipelines faster than you can say \"ETL\". I've been known to make APIs dance, CRMs sing, and databases do backflips (figuratively, of course).",
                "\u{1f3cb}\u{fe0f}\u{200d}\u{2642}\u{fe0f} At my current gig, I'm the gym trainer for lazy data, getting it into shape with advanced workflows and automation. I've successfully connected more third-party apps than a social butterfly at a tech conference.",
                "\u{2601}\u{fe0f} Cloud is my playground, and I've mastered the art of data migration without losing a single byte. It's like playing Jenga with terabytes of data - thrilling, right?",
                "\u{1f575}\u{fe0f}\u{200d}\u{2642}\u{fe0f} In my past life as a Database Intern at Bartronics India Ltd, I was the Sherlock Holmes of stored procedures, solving the mystery of slow queries and making POS machines communicate faster than office gossip.",
                "\u{1f916} When I'm not wrangling data, you'll find me geeking out over Machine Learning models. My idea of a good time? Implementing low-latency ML solutions while sipping on a cup of perfectly brewed coffee.",
                "\u{1f4a1} My mission? To prove that data isn't just numbers and charts - it's the secret sauce to making better decisions and building systems that make a real impact. Let's turn those bytes into insights that bite!",
            ]),
            education: vec![Education {
                school: "Case Western Reserve University".to_string(),
                degree: "Bachelor's in Computer Science".to_string(),
                graduation: "May 2024".to_string(),
                gpa: Some("3.7".to_string()),
                awards: strings(&["Dean's Honor List", "University Scholarship Recipient"]),
                coursework: strings(&[
                    "Machine Learning",
                    "Artificial Intelligence",
                    "Computer Architecture",
                    "Algorithms",
                    "Data Structures",
                    "Full Stack Web Development",
                    "Data Science: Statistical Learning",
                    "Software Engineering",
                ]),
            }],
            experience: vec![
                Experience {
                    role: "Data Engineer".to_string(),
                    organization: "MAI Capital Management, Cleveland".to_string(),
                    period: "2023 \u{2013} Present".to_string(),
                    highlights: strings(&[
                        "Orchestrated ETL pipelines like a data symphony conductor",
                        "Crafted Python scripts that automate data tasks faster than you can say \"efficiency\"",
                        "Built SQL queries so complex, they make database admins weep tears of joy",
                        "Tamed wild datasets with pandas, turning data chaos into data zen",
                        "Implemented Fort Knox-level secure data transfers using Paramiko for SFTP",
                        "Played data matchmaker, ensuring different systems talk to each other without awkward silences",
                    ]),
                },
                Experience {
                    role: "Database Intern".to_string(),
                    organization: "Bartronics India Limited, Hyderabad".to_string(),
                    period: "2021 \u{2013} 2023".to_string(),
                    highlights: strings(&[
                        "Performed database CPR, reviving slow queries and reducing execution times by 25%",
                        "Implemented indexing strategies so clever, they made search operations feel like teleportation",
                        "Deployed patches to 5000+ POS machines, turning them into a nationwide network of happy little computers",
                    ]),
                },
            ],
            projects: vec![
                Project {
                    id: 1,
                    title: "End to End Sales and Inventory ERP Product".to_string(),
                    description: "Led the development of a comprehensive ERP platform for BikoWo, an electric bike company. Integrated various business processes, implemented PowerBI reports, and managed stock and logistics. Raised $100K and generated $370K in revenue.".to_string(),
                    image: "/placeholder.svg?height=600&width=800".to_string(),
                    tags: strings(&["ERP", "PowerBI", "Business Intelligence"]),
                    demo_url: Some("https://example.com/bikowo-erp".to_string()),
                    github_url: Some("https://github.com/smyanthota/bikowo-erp".to_string()),
                },
                Project {
                    id: 2,
                    title: "Gamified Calendar".to_string(),
                    description: "Developed a responsive multi-page front-end UI with graphical representations using React JS. Established connectivity between the front-end and the database as part of a 5-member team.".to_string(),
                    image: "/placeholder.svg?height=600&width=800".to_string(),
                    tags: strings(&["React", "UI/UX", "Database Integration"]),
                    demo_url: Some("https://example.com/gamified-calendar".to_string()),
                    github_url: Some("https://github.com/smyanthota/gamified-calendar".to_string()),
                },
            ],
            skill_groups: vec![
                group("Programming Languages", &[("Java", 90), ("Python", 95), ("SQL", 90)]),
                group(
                    "Web Technologies",
                    &[
                        ("HTML/CSS", 85),
                        ("JavaScript", 90),
                        ("React", 85),
                        ("Angular", 80),
                        ("Node.js", 85),
                    ],
                ),
                group(
                    "Databases",
                    &[
                        ("PostgreSQL", 90),
                        ("Microsoft SQL Server", 85),
                        ("MongoDB", 80),
                        ("NoSQL", 75),
                    ],
                ),
                group(
                    "Cloud & DevOps",
                    &[("Azure", 80), ("AWS", 75), ("Docker", 80), ("Git", 90)],
                ),
                group(
                    "Data Science & ML",
                    &[
                        ("TensorFlow", 85),
                        ("PyTorch", 80),
                        ("Keras", 85),
                        ("Scikit-learn", 85),
                    ],
                ),
                group(
                    "Data Visualization",
                    &[("Microsoft Power BI", 90), ("Tableau", 85)],
                ),
            ],
            additional_skills: strings(&[
                "Erwin Data Modelling",
                "Agile & SCRUM",
                "Paramiko",
                "Data Engineering",
            ]),
            captions: Vec::new(),
            orbit_skills: Vec::new(),
        }
    }
}

impl Default for Content {
    fn default() -> Self {
        Self::builtin()
    }
}

fn check_url(problems: &mut Vec<String>, what: &str, url: &Option<String>) {
    if let Some(url) = url {
        if url.trim().is_empty() {
            problems.push(format!("{what} is blank"));
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn group(title: &str, skills: &[(&str, u8)]) -> SkillGroup {
    SkillGroup {
        title: title.to_string(),
        skills: skills
            .iter()
            .map(|(name, level)| Skill::new(*name, *level))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_content_is_valid() {
        let content = Content::builtin();
        content.validate().unwrap();
        assert_eq!(content.projects.len(), 2);
        assert_eq!(content.skill_groups.len(), 6);
        let skills: usize = content.skill_groups.iter().map(|g| g.skills.len()).sum();
        assert_eq!(skills, 22);
        assert!(content.captions.is_empty());
    }

    #[test]
    fn rejects_level_over_100() {
        let mut content = Content::builtin();
        content.skill_groups[0].skills.push(Skill::new("Rust", 120));
        let err = content.validate().unwrap_err();
        assert!(err.to_string().contains("'Rust' has level 120"));
    }

    #[test]
    fn rejects_duplicate_project_ids() {
        let mut content = Content::builtin();
        content.projects[1].id = 1;
        let err = content.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate project id 1"));
    }

    #[test]
    fn collects_every_problem() {
        let mut content = Content::builtin();
        content.profile.name = "  ".to_string();
        content.projects[0].github_url = Some(String::new());
        content.projects[1].tags.push(String::new());
        let msg = content.validate().unwrap_err().to_string();
        assert!(msg.contains("profile name is empty"));
        assert!(msg.contains("project 1 github_url is blank"));
        assert!(msg.contains("project 2 has an empty tag"));
    }

    #[test]
    fn zero_projects_is_valid() {
        let mut content = Content::builtin();
        content.projects.clear();
        content.validate().unwrap();
    }

    #[test]
    fn width_is_clamped() {
        assert_eq!(Skill::new("x", 250).width_percent(), 100);
        assert_eq!(Skill::new("x", 42).width_percent(), 42);
    }

    #[test]
    fn minimal_json_uses_defaults() {
        let json = r#"{
            "profile": {
                "name": "Ada",
                "email": "ada@example.com",
                "location": "London",
                "footer": "(c) Ada"
            },
            "captions": ["Analyst"]
        }"#;
        let content = Content::from_json(json).unwrap();
        assert_eq!(content.profile.linkedin_url, None);
        assert!(content.projects.is_empty());
        assert_eq!(content.captions, vec!["Analyst".to_string()]);
    }

    #[test]
    fn missing_required_field_is_parse_error() {
        let err = Content::from_json(r#"{ "profile": { "name": "Ada" } }"#).unwrap_err();
        assert!(matches!(err, PortfolioError::Json(_)));
    }
}
