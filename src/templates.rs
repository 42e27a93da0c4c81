//! Embedded template store.
//! The opaque template assets the scaffolder writes into generated projects,
//! compiled into the binary so the tool has no install-relative paths.

use crate::config::License;

/// Jekyll site layout. Placeholders: `reponame`, `repopath`, `username`.
pub const SITE_LAYOUT: &str = include_str!("../templates/site.html");

/// Travis CI configuration. Placeholder: `email`.
pub const CI_CONFIG: &str = include_str!("../templates/travis.yml");

/// Jekyll site configuration, written verbatim.
pub const JEKYLL_CONFIG: &str = include_str!("../templates/_config.yml");

/// Shared gitignore for both the project and the site branch.
pub const GITIGNORE: &str = include_str!("../templates/gitignore");

/// Viewport fix shipped with the generated site.
pub const SCALE_FIX_JS: &str = include_str!("../templates/scale.fix.js");

/// Base stylesheet for the generated site.
pub const STYLES_CSS: &str = include_str!("../templates/styles.css");

/// Syntax highlighting stylesheet for the generated site.
pub const PYGMENT_CSS: &str = include_str!("../templates/pygment_trac.css");

/// Verbatim license text embedded into the generated readme.
pub fn license_text(license: License) -> &'static str {
    match license {
        License::Mit => include_str!("../templates/licenses/MIT.txt"),
        License::Bsd => include_str!("../templates/licenses/BSD.txt"),
        License::Gpl => include_str!("../templates/licenses/GPL.txt"),
        License::Lgpl => include_str!("../templates/licenses/LGPL.txt"),
        License::Proprietary => include_str!("../templates/licenses/Proprietary.txt"),
    }
}
