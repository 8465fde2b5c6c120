//! Repository slug resolution.
//!
//! The comparison branch is cloned from `https://github.com/{owner}/{name}.git`.
//! When the slug is not configured explicitly, callers inject one or more
//! resolvers: CI environment variables, or the `origin` remote of the
//! enclosing git repository.

use std::path::PathBuf;
use std::sync::LazyLock;

use regex::Regex;

/// Environment variables consulted for the slug, in order.
pub const REPOSITORY_ENV_VARS: &[&str] = &["GITHUB_REPOSITORY", "TRAVIS_REPO_SLUG"];

static SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_.-]+/[A-Za-z0-9_.-]+$").expect("valid regex"));

static GITHUB_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:(?:https?|git|ssh)://(?:[^@/]+@)?|[^@/]+@)github\.com[:/](?P<owner>[A-Za-z0-9_.-]+)/(?P<name>[A-Za-z0-9_.-]+?)(?:\.git)?/?$",
    )
    .expect("valid regex")
});

/// Returns true for `owner/name` shaped strings.
#[must_use]
pub fn is_valid_slug(slug: &str) -> bool {
    SLUG_RE.is_match(slug)
}

/// Extract `owner/name` from a GitHub remote URL (https, ssh or scp-like).
///
/// Returns `None` for remotes hosted anywhere else.
#[must_use]
pub fn slug_from_remote_url(url: &str) -> Option<String> {
    let caps = GITHUB_URL_RE.captures(url.trim())?;
    Some(format!("{}/{}", &caps["owner"], &caps["name"]))
}

/// Source of a default repository slug.
pub trait RepositoryResolver {
    fn resolve(&self) -> Option<String>;
}

/// Reads the slug from environment variables through an injected lookup.
pub struct EnvRepositoryResolver<F> {
    vars: Vec<String>,
    lookup: F,
}

fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

impl EnvRepositoryResolver<fn(&str) -> Option<String>> {
    /// Resolver over the real process environment and [`REPOSITORY_ENV_VARS`].
    #[must_use]
    pub fn from_process_env() -> Self {
        Self::new(process_env)
    }
}

impl<F: Fn(&str) -> Option<String>> EnvRepositoryResolver<F> {
    #[must_use]
    pub fn new(lookup: F) -> Self {
        Self {
            vars: REPOSITORY_ENV_VARS.iter().map(ToString::to_string).collect(),
            lookup,
        }
    }

    #[must_use]
    pub fn with_vars<I, S>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.vars = vars.into_iter().map(Into::into).collect();
        self
    }
}

impl<F: Fn(&str) -> Option<String>> RepositoryResolver for EnvRepositoryResolver<F> {
    fn resolve(&self) -> Option<String> {
        self.vars.iter().find_map(|var| {
            (self.lookup)(var)
                .map(|value| value.trim().to_string())
                .filter(|value| is_valid_slug(value))
        })
    }
}

/// Reads the slug from a remote of the git repository containing `path`.
#[derive(Debug, Clone)]
pub struct GitRemoteResolver {
    path: PathBuf,
    remote: String,
}

impl GitRemoteResolver {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            remote: "origin".to_string(),
        }
    }

    #[must_use]
    pub fn with_remote(mut self, remote: impl Into<String>) -> Self {
        self.remote = remote.into();
        self
    }

    fn remote_url(&self) -> Option<String> {
        let repo = gix::discover(&self.path)
            .map_err(|e| {
                tracing::debug!(path = %self.path.display(), error = %e, "no enclosing git repository");
            })
            .ok()?;
        let remote = repo
            .find_remote(self.remote.as_str())
            .map_err(|e| {
                tracing::debug!(remote = %self.remote, error = %e, "remote not found");
            })
            .ok()?;
        let url = remote.url(gix::remote::Direction::Fetch)?;
        Some(url.to_bstring().to_string())
    }
}

impl RepositoryResolver for GitRemoteResolver {
    fn resolve(&self) -> Option<String> {
        let url = self.remote_url()?;
        let slug = slug_from_remote_url(&url);
        if slug.is_none() {
            tracing::debug!(%url, remote = %self.remote, "remote is not a GitHub URL");
        }
        slug
    }
}

/// Tries each resolver in order and returns the first slug found.
#[derive(Default)]
pub struct ChainResolver {
    resolvers: Vec<Box<dyn RepositoryResolver>>,
}

impl ChainResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, resolver: impl RepositoryResolver + 'static) -> Self {
        self.resolvers.push(Box::new(resolver));
        self
    }

    /// Environment variables first, then the `origin` remote of the working directory.
    #[must_use]
    pub fn standard() -> Self {
        Self::new()
            .with(EnvRepositoryResolver::from_process_env())
            .with(GitRemoteResolver::new("."))
    }
}

impl RepositoryResolver for ChainResolver {
    fn resolve(&self) -> Option<String> {
        self.resolvers.iter().find_map(|r| r.resolve())
    }
}

/// Resolver that never yields a slug.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoRepository;

impl RepositoryResolver for NoRepository {
    fn resolve(&self) -> Option<String> {
        None
    }
}

#[cfg(test)]
#[path = "repository_tests.rs"]
mod tests;
