//! Common constants used throughout the winthrop application.

/// Branch that hosts the generated static site.
pub const SITE_BRANCH: &str = "gh-pages";

/// Commit message used for every commit the scaffolder makes.
pub const INITIAL_COMMIT_MESSAGE: &str = "Initial commit by winthrop";

/// Git configuration key for the committer's name.
pub const IDENTITY_USERNAME: &str = "user.name";

/// Git configuration key for the committer's email.
pub const IDENTITY_EMAIL: &str = "user.email";
