mod comparison;
mod language;
mod loader;
mod model;
pub mod repository;

pub use comparison::{ComparisonConfig, StagingMode};
pub use language::Language;
pub use loader::{
    ConfigLoader, ConfigStore, DiskConfigStore, FileConfigLoader, LOCAL_CONFIG_NAME, LoadResult,
};
pub use model::{
    ChecksConfig, Config, CpdConfig, DEFAULT_BRANCH, DEFAULT_MINIMUM_TOKENS, DEFAULT_STAGING_DIR,
};
pub use repository::{
    ChainResolver, EnvRepositoryResolver, GitRemoteResolver, NoRepository, RepositoryResolver,
};
