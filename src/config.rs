//! Validated generation options for winthrop.
//! Turns raw command-line arguments into an immutable [`Config`], rejecting
//! invalid enum spellings before the pipeline performs any side effect.

use crate::cli::Args;
use crate::error::{Error, Result};

/// Documentation style applied to the generated module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocStyle {
    Docco,
    Jsdoc3,
    None,
}

impl DocStyle {
    fn parse(s: &str) -> Result<Self> {
        match s {
            "docco" => Ok(DocStyle::Docco),
            "jsdoc3" => Ok(DocStyle::Jsdoc3),
            "none" => Ok(DocStyle::None),
            other => Err(Error::InvalidDocStyle(other.to_string())),
        }
    }

    /// Command-line tool backing this style, if any.
    pub fn tool(&self) -> Option<&'static str> {
        match self {
            DocStyle::Docco => Some("docco"),
            DocStyle::Jsdoc3 => Some("jsdoc3"),
            DocStyle::None => None,
        }
    }
}

/// Test framework wired into the generated module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestFramework {
    Nodeunit,
    Mocha,
    Expresso,
    None,
}

impl TestFramework {
    fn parse(s: &str) -> Result<Self> {
        match s {
            "nodeunit" => Ok(TestFramework::Nodeunit),
            "mocha" => Ok(TestFramework::Mocha),
            "expresso" => Ok(TestFramework::Expresso),
            "none" => Ok(TestFramework::None),
            other => Err(Error::InvalidTestFramework(other.to_string())),
        }
    }

    /// Test runner executable, if any.
    pub fn runner(&self) -> Option<&'static str> {
        match self {
            TestFramework::Nodeunit => Some("nodeunit"),
            TestFramework::Mocha => Some("mocha"),
            TestFramework::Expresso => Some("expresso"),
            TestFramework::None => None,
        }
    }
}

/// License embedded into the generated readme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum License {
    Mit,
    Bsd,
    Gpl,
    Lgpl,
    Proprietary,
}

impl License {
    fn parse(s: &str) -> Result<Self> {
        match s {
            "MIT" => Ok(License::Mit),
            "BSD" => Ok(License::Bsd),
            "GPL" => Ok(License::Gpl),
            "LGPL" => Ok(License::Lgpl),
            "Proprietary" => Ok(License::Proprietary),
            other => Err(Error::InvalidLicense(other.to_string())),
        }
    }

    /// Display name used in the readme's license heading.
    pub fn name(&self) -> &'static str {
        match self {
            License::Mit => "MIT",
            License::Bsd => "BSD",
            License::Gpl => "GPL",
            License::Lgpl => "LGPL",
            License::Proprietary => "Proprietary",
        }
    }
}

/// Validated, immutable record of generation options.
#[derive(Debug, Clone)]
pub struct Config {
    pub reponame: String,
    pub doc_style: DocStyle,
    pub test_framework: TestFramework,
    pub license: License,
    pub browserify: bool,
    pub coverage: bool,
    pub executable: bool,
    pub global: bool,
    pub halstead: bool,
    pub minify: bool,
    pub open: bool,
    pub blog: bool,
    pub site: bool,
}

impl Config {
    /// Validates raw arguments into a `Config`.
    ///
    /// # Errors
    /// * `Error::ValidationError` for an empty or path-like repository name
    /// * `Error::InvalidDocStyle`, `Error::InvalidTestFramework` or
    ///   `Error::InvalidLicense` for unsupported enum values
    pub fn from_args(args: &Args) -> Result<Self> {
        let reponame = args.reponame.trim();
        if reponame.is_empty() {
            return Err(Error::ValidationError(
                "repository name must not be empty".to_string(),
            ));
        }
        if reponame.contains(['/', '\\']) {
            return Err(Error::ValidationError(format!(
                "repository name '{}' must not contain path separators",
                reponame
            )));
        }

        Ok(Config {
            reponame: reponame.to_string(),
            doc_style: DocStyle::parse(&args.doc)?,
            test_framework: TestFramework::parse(&args.test)?,
            license: License::parse(&args.license)?,
            browserify: args.browserify,
            coverage: args.coverage,
            executable: args.executable,
            global: args.global,
            halstead: args.halstead,
            minify: args.minify,
            open: args.open,
            blog: args.blog,
            site: args.site,
        })
    }
}
