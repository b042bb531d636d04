//! Deployment-hosting (Vercel) models

use serde::{Deserialize, Serialize};

use super::common::{EnvVar, Framework, RecordId};

/// Frameworks offered when creating a project
pub const VERCEL_FRAMEWORKS: &[Framework] = &[
    Framework { value: "nextjs", label: "Next.js" },
    Framework { value: "react", label: "Create React App" },
    Framework { value: "vue", label: "Vue.js" },
    Framework { value: "svelte", label: "SvelteKit" },
    Framework { value: "nuxt", label: "Nuxt.js" },
    Framework { value: "gatsby", label: "Gatsby" },
    Framework { value: "vite", label: "Vite" },
];

/// A project as listed by `GET /api/vercel/projects`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: RecordId,
    pub name: String,

    #[serde(default)]
    pub framework: Option<String>,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub updated_at: Option<String>,
}

impl ProjectRecord {
    pub fn is_live(&self) -> bool {
        self.url.as_deref().is_some_and(|u| !u.is_empty())
    }
}

/// Body of `POST /api/vercel/projects`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    pub name: String,
    pub framework: String,
    pub git_repo: String,
    pub environment_vars: Vec<EnvVar>,
}

impl Default for ProjectDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            framework: "nextjs".to_string(),
            git_repo: String::new(),
            environment_vars: vec![EnvVar::default()],
        }
    }
}

/// Response of `GET /api/vercel/projects`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectList {
    #[serde(default)]
    pub projects: Vec<ProjectRecord>,
}

/// Response of `POST /api/vercel/projects`
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedProject {
    pub project: ProjectRecord,
}

/// A deployment started by `POST /api/vercel/projects/:id/deploy`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeploymentInfo {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub status: Option<String>,
}

/// Response of `POST /api/vercel/projects/:id/deploy`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeployResponse {
    #[serde(default)]
    pub deployment: DeploymentInfo,
}
