//! Page content
//!
//! Everything the portfolio says about its owner, as plain data. The
//! built-in defaults carry the full page copy; a config file can
//! override any part of it without touching code.

use serde::{Deserialize, Serialize};

/// The whole page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Content {
    pub profile: Profile,
    pub cube: CubeContent,
    pub skills: Vec<SkillCategory>,
    pub projects: Vec<Project>,
    pub about: About,
    pub contact: Contact,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// The name shown in the splash and hero titles
    pub name: String,
    /// Small line under the splash title
    pub subtitle: String,
    /// The pill line in the hero
    pub tagline: String,
    /// Roles line, rendered with separators
    pub roles: Vec<String>,
    pub location: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CubeContent {
    pub heading: String,
    pub description: String,
    /// Labels for front, back, right, left, top, bottom
    pub faces: [String; 6],
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub skills: Vec<Skill>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency, 0..=100
    pub level: u8,
}

/// Project classification, used by the list's type tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectKind {
    ThreeD,
    Web,
}

impl ProjectKind {
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::ThreeD => "3D",
            Self::Web => "Web",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub kind: ProjectKind,
    pub technologies: Vec<String>,
    #[serde(default)]
    pub repo: Option<String>,
    #[serde(default)]
    pub live: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct About {
    pub paragraphs: Vec<String>,
    pub stats: Vec<Stat>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub email: String,
    pub github: String,
    pub linkedin: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "SIDDHARTH CHOUHAN".to_string(),
            subtitle: "3D DESIGNER & DEVELOPER".to_string(),
            tagline: "Turning Ideas into Reality".to_string(),
            roles: vec![
                "Full-Stack Developer".to_string(),
                "3D Designer".to_string(),
                "Content Creator".to_string(),
            ],
            location: "Located in India".to_string(),
        }
    }
}

impl Default for CubeContent {
    fn default() -> Self {
        Self {
            heading: "Interactive 3D Design".to_string(),
            description: "Experience immersive web-based 3D interactivity".to_string(),
            faces: [
                "3D".to_string(),
                "Web".to_string(),
                "Design".to_string(),
                "UX".to_string(),
                "UI".to_string(),
                "Creative".to_string(),
            ],
        }
    }
}

impl Default for About {
    fn default() -> Self {
        Self {
            paragraphs: vec![
                "I'm a passionate B.Tech 2nd-year student with a deep love for \
                 programming and technology. My journey in tech has been driven by \
                 curiosity and a desire to create meaningful solutions."
                    .to_string(),
                "Beyond coding, I've gained valuable experience in event management. \
                 This diverse background allows me to bring both technical expertise \
                 and strong organizational skills to every project."
                    .to_string(),
            ],
            stats: vec![
                Stat {
                    value: "15+".to_string(),
                    label: "Projects Completed".to_string(),
                },
                Stat {
                    value: "5+".to_string(),
                    label: "Events Managed".to_string(),
                },
                Stat {
                    value: "4+".to_string(),
                    label: "Programming Languages".to_string(),
                },
                Stat {
                    value: "20+".to_string(),
                    label: "Video Edits".to_string(),
                },
            ],
        }
    }
}

impl Default for Contact {
    fn default() -> Self {
        Self {
            email: "hello@example.dev".to_string(),
            github: "github.com/siddharth".to_string(),
            linkedin: "linkedin.com/in/siddharth".to_string(),
        }
    }
}

impl Default for Content {
    fn default() -> Self {
        Self {
            profile: Profile::default(),
            cube: CubeContent::default(),
            skills: vec![
                SkillCategory {
                    title: "Programming".to_string(),
                    skills: vec![
                        Skill {
                            name: "Python".to_string(),
                            level: 90,
                        },
                        Skill {
                            name: "HTML/CSS".to_string(),
                            level: 85,
                        },
                        Skill {
                            name: "JavaScript".to_string(),
                            level: 80,
                        },
                        Skill {
                            name: "React".to_string(),
                            level: 75,
                        },
                    ],
                },
                SkillCategory {
                    title: "Technical".to_string(),
                    skills: vec![
                        Skill {
                            name: "Microsoft 365".to_string(),
                            level: 95,
                        },
                        Skill {
                            name: "SQL".to_string(),
                            level: 80,
                        },
                        Skill {
                            name: "Web Development".to_string(),
                            level: 85,
                        },
                        Skill {
                            name: "Git".to_string(),
                            level: 75,
                        },
                    ],
                },
                SkillCategory {
                    title: "Creative".to_string(),
                    skills: vec![
                        Skill {
                            name: "Video Editing".to_string(),
                            level: 85,
                        },
                        Skill {
                            name: "Photo Editing".to_string(),
                            level: 80,
                        },
                        Skill {
                            name: "Content Creation".to_string(),
                            level: 75,
                        },
                        Skill {
                            name: "UI/UX Design".to_string(),
                            level: 70,
                        },
                    ],
                },
                SkillCategory {
                    title: "Soft Skills".to_string(),
                    skills: vec![
                        Skill {
                            name: "Event Management".to_string(),
                            level: 90,
                        },
                        Skill {
                            name: "Communication".to_string(),
                            level: 85,
                        },
                        Skill {
                            name: "Team Leadership".to_string(),
                            level: 80,
                        },
                        Skill {
                            name: "Problem Solving".to_string(),
                            level: 85,
                        },
                    ],
                },
            ],
            projects: vec![
                Project {
                    title: "3D Interactive Dashboard".to_string(),
                    description: "A dynamic dashboard with 3D interactive elements and \
                                  data visualization components"
                        .to_string(),
                    kind: ProjectKind::ThreeD,
                    technologies: vec![
                        "React".to_string(),
                        "Three.js".to_string(),
                        "D3.js".to_string(),
                        "WebGL".to_string(),
                    ],
                    repo: Some("github.com/siddharth/3d-dashboard".to_string()),
                    live: None,
                },
                Project {
                    title: "3D Product Configurator".to_string(),
                    description: "A customizable 3D product viewer that lets users \
                                  modify appearance and features in real time"
                        .to_string(),
                    kind: ProjectKind::ThreeD,
                    technologies: vec![
                        "Three.js".to_string(),
                        "React".to_string(),
                        "WebGL".to_string(),
                        "GLSL Shaders".to_string(),
                    ],
                    repo: Some("github.com/siddharth/configurator".to_string()),
                    live: Some("configurator.example.dev".to_string()),
                },
                Project {
                    title: "Portfolio Site".to_string(),
                    description: "This site: a single-page portfolio with an intro \
                                  animation, theme toggle and a hand-rotatable cube"
                        .to_string(),
                    kind: ProjectKind::Web,
                    technologies: vec!["Rust".to_string(), "ratatui".to_string()],
                    repo: Some("github.com/siddharth/folio".to_string()),
                    live: None,
                },
            ],
            about: About::default(),
            contact: Contact::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_complete() {
        let content = Content::default();
        assert!(!content.profile.name.is_empty());
        assert_eq!(content.skills.len(), 4);
        assert!(content.skills.iter().all(|c| !c.skills.is_empty()));
        assert!(!content.projects.is_empty());
        assert_eq!(content.about.stats.len(), 4);
    }

    #[test]
    fn skill_levels_are_percentages() {
        let content = Content::default();
        for category in &content.skills {
            for skill in &category.skills {
                assert!(skill.level <= 100, "{} out of range", skill.name);
            }
        }
    }

    #[test]
    fn partial_toml_override_keeps_defaults_elsewhere() {
        let content: Content = toml::from_str(
            r#"
            [profile]
            name = "ADA LOVELACE"
            "#,
        )
        .unwrap();

        assert_eq!(content.profile.name, "ADA LOVELACE");
        // Untouched sections keep the built-in copy
        assert_eq!(content.profile.tagline, Profile::default().tagline);
        assert_eq!(content.skills.len(), 4);
    }
}
