//! Read-only course catalog.
//!
//! The built-in list is the default data source. A TOML file with
//! `[[courses]]` tables can be injected instead at start-up.

use crate::course::{Course, NO_PREREQUISITES};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate course code `{0}`")]
    DuplicateCode(String),
    #[error("course `{title}` has an empty code")]
    EmptyCode { title: String },
    #[error("course `{code}` must have a positive number of credit hours")]
    ZeroCreditHours { code: String },
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    courses: Vec<Course>,
}

/// On-disk shape. Only becomes a [`Catalog`] through [`Catalog::new`].
#[derive(Deserialize)]
struct RawCatalog {
    courses: Vec<Course>,
}

impl Catalog {
    /// Builds a catalog, enforcing unique non-empty codes and positive credit hours.
    pub fn new(courses: Vec<Course>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(courses.len());
        for course in &courses {
            if course.code.trim().is_empty() {
                return Err(CatalogError::EmptyCode {
                    title: course.title.clone(),
                });
            }
            if course.credit_hours == 0 {
                return Err(CatalogError::ZeroCreditHours {
                    code: course.code.clone(),
                });
            }
            if !seen.insert(course.code.as_str()) {
                return Err(CatalogError::DuplicateCode(course.code.clone()));
            }
        }
        Ok(Self { courses })
    }

    /// The ten courses shipped with the application.
    pub fn builtin() -> Self {
        let courses = vec![
            Course::new(
                "Mobile App Development",
                "CS301",
                5,
                "Learn to build mobile apps using Jetpack Compose.",
                "Basic web dev knowledge",
            ),
            Course::new(
                "Graphics Design",
                "CS302",
                3,
                "Introduction to digital design principles and creative tools.",
                NO_PREREQUISITES,
            ),
            Course::new(
                "Cyber Security",
                "CS303",
                3,
                "Understand security threats and protection techniques.",
                "Networking Basics",
            ),
            Course::new(
                "Fundamentals of AI",
                "CS304",
                5,
                "Explore machine learning concepts and neural networks.",
                "Python",
            ),
            Course::new(
                "Software Engineering",
                "CS305",
                4,
                "Explore software design and development methodologies.",
                "Programming Basics",
            ),
            Course::new(
                "Game Development",
                "CS307",
                5,
                "Develop games using Unity and Unreal Engine.",
                "Basic programming knowledge",
            ),
            Course::new(
                "UI/UX Design",
                "CS308",
                3,
                "Master user experience principles for mobile & web apps.",
                NO_PREREQUISITES,
            ),
            Course::new(
                "Data Science",
                "CS309",
                5,
                "Learn data analysis, visualization, and machine learning.",
                "Python & Statistics",
            ),
            Course::new(
                "Blockchain Technology",
                "CS310",
                4,
                "Understand decentralized applications and smart contracts.",
                "Basic cryptography knowledge",
            ),
            Course::new(
                "Embedded Systems",
                "CS311",
                4,
                "Work with IoT and microcontrollers for smart devices.",
                "Electronics & C Programming",
            ),
        ];
        Self { courses }
    }

    pub fn from_toml_str(input: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog = toml::from_str(input)?;
        Self::new(raw.courses)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_toml_str(&contents)?;
        tracing::info!(path = %path.display(), courses = catalog.len(), "loaded catalog file");
        Ok(catalog)
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
