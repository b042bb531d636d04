//! Source-hosting (GitHub) models

use serde::{Deserialize, Serialize};

use super::common::{Framework, RecordId};

/// Frameworks offered when creating a repository
pub const GITHUB_FRAMEWORKS: &[Framework] = &[
    Framework { value: "nextjs", label: "Next.js" },
    Framework { value: "react", label: "React" },
    Framework { value: "svelte", label: "Svelte" },
    Framework { value: "vue", label: "Vue.js" },
    Framework { value: "python", label: "Python" },
    Framework { value: "nodejs", label: "Node.js" },
];

/// A repository as listed by `GET /api/github/repositories`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryRecord {
    pub id: RecordId,
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub html_url: Option<String>,

    #[serde(default)]
    pub private: bool,

    #[serde(default)]
    pub default_branch: Option<String>,

    #[serde(default)]
    pub stargazers_count: Option<u64>,

    #[serde(default)]
    pub framework: Option<String>,
}

impl RepositoryRecord {
    pub fn branch(&self) -> &str {
        self.default_branch.as_deref().unwrap_or("main")
    }

    pub fn stars(&self) -> u64 {
        self.stargazers_count.unwrap_or(0)
    }
}

/// Body of `POST /api/github/repositories`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryDraft {
    pub name: String,
    pub description: String,
    pub private: bool,
    pub framework: String,
}

impl Default for RepositoryDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            private: false,
            framework: "nextjs".to_string(),
        }
    }
}

/// Response of `GET /api/github/repositories`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RepositoryList {
    #[serde(default)]
    pub repositories: Vec<RepositoryRecord>,
}

/// Response of `POST /api/github/repositories`
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedRepository {
    pub repository: RepositoryRecord,
}
