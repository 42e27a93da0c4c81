//! In-memory construction of the generated artifacts.
//! Everything here is pure: given a validated [`Config`], the builders
//! produce the package manifest, publish script and readme without touching
//! the filesystem. The pipeline decides when the results reach disk.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::config::{Config, TestFramework};
use crate::error::Result;
use crate::templates;

/// Wildcard dependency version; pinning is left to the generated project.
const ANY_VERSION: &str = "*";

/// The `package.json` document for the generated module.
///
/// Maps keep insertion order so serializing the same `Config` twice yields
/// byte-identical output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub name: String,
    pub version: String,
    pub description: String,
    pub main: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bin: Option<String>,
    #[serde(rename = "preferGlobal", skip_serializing_if = "Option::is_none")]
    pub prefer_global: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
    pub scripts: IndexMap<String, String>,
    #[serde(rename = "devDependencies")]
    pub dev_dependencies: IndexMap<String, String>,
}

impl Default for Manifest {
    fn default() -> Self {
        Manifest {
            name: String::new(),
            version: "0.1.0".to_string(),
            description: "Description Here!".to_string(),
            main: String::new(),
            bin: None,
            prefer_global: None,
            private: None,
            scripts: IndexMap::new(),
            dev_dependencies: IndexMap::new(),
        }
    }
}

impl Manifest {
    /// Builds the manifest from the base defaults, applying one mutation per
    /// applicable flag. Re-applying a flag is a no-op.
    pub fn build(config: &Config) -> Self {
        let mut manifest = Manifest {
            name: config.reponame.clone(),
            main: format!("./lib/{}.js", config.reponame),
            ..Manifest::default()
        };

        if config.browserify {
            manifest.add_dev_dependency("browserify");
        }
        if config.coverage {
            manifest.add_dev_dependency("jscoverage");
        }
        if let Some(tool) = config.doc_style.tool() {
            manifest.add_dev_dependency(tool);
        }
        if config.executable {
            manifest.bin = Some(format!("./bin/{}.js", config.reponame));
        }
        if config.global {
            manifest.prefer_global = Some(true);
        }
        if config.halstead {
            manifest.add_dev_dependency("complexity-report");
        }
        if config.minify {
            manifest.add_dev_dependency("uglify-js");
        }
        if !config.open {
            manifest.private = Some(true);
        }
        if let Some(runner) = config.test_framework.runner() {
            manifest.add_dev_dependency(runner);
            manifest
                .scripts
                .insert("test".to_string(), format!("{} test/test.js", runner));
        }

        manifest
    }

    fn add_dev_dependency(&mut self, name: &str) {
        self.dev_dependencies.insert(name.to_string(), ANY_VERSION.to_string());
    }

    /// Serializes the manifest as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        let mut rendered = serde_json::to_string_pretty(self)?;
        rendered.push('\n');
        Ok(rendered)
    }
}

/// The `prepublish.sh` script: an ordered list of shell command lines.
///
/// Section order is fixed: tests, documentation, site build, minification,
/// then the unconditional commit/tag/push tail.
#[derive(Debug, Clone)]
pub struct PublishScript {
    lines: Vec<String>,
}

impl PublishScript {
    pub fn build(config: &Config, manifest: &Manifest) -> Self {
        let mut script = PublishScript { lines: vec!["#!/usr/bin/env bash".to_string()] };

        if config.test_framework != TestFramework::None {
            script.section(&["# Run the tests", "npm test"]);
        }

        if let Some(tool) = config.doc_style.tool() {
            script.section(&[
                "# Build documentation",
                &format!("{} ./lib/{}.js", tool, config.reponame),
            ]);
        }

        if config.site {
            script.section(&[
                "# Build the index page",
                "md2jekyllhtml readme.md",
                "touch new-index.html",
                "echo --- >> new-index.html",
                "echo layout: site >> new-index.html",
                &format!("echo title: {} >> new-index.html", config.reponame),
                &format!("echo subtitle: {} >> new-index.html", manifest.description),
                "echo --- >> new-index.html",
                "cat readme.html >> new-index.html",
                "rm readme.html",
                "git stash",
            ]);
            script.section(&[
                "# Put the documentation in the gh-pages branch",
                "mv docs docs-new",
                "git checkout gh-pages",
                "rm -rf docs",
                "rm -rf index.html",
                "mv docs-new docs",
                "mv new-index.html index.html",
                "git commit -am \"Automatic documentation for version $npm_package_version\"",
                "git checkout master",
                "git stash pop",
            ]);
        }

        if config.minify && config.browserify {
            script.section(&[
                "# Generate the minified version of the code",
                &format!(
                    "browserify ./lib/{}.js -o ./lib/browserify-temp.js",
                    config.reponame
                ),
                &format!(
                    "uglifyjs ./lib/browserify-temp.js > ./lib/{}.min.js",
                    config.reponame
                ),
                "rm ./lib/browserify-temp.js",
            ]);
        }
        if config.minify && !config.browserify {
            script.section(&[
                "# Generate the minified version of the code",
                &format!(
                    "uglifyjs ./lib/{}.js > ./lib/{}.min.js",
                    config.reponame, config.reponame
                ),
            ]);
        }

        script.lines.push(String::new());
        script.lines.extend(
            [
                "# Commit the changes to master",
                "git commit -am \"Automatic build for version $npm_package_version\"",
                "git tag $npm_package_version",
                "git push",
                "git push --tags",
            ]
            .map(String::from),
        );

        script
    }

    // Each section is preceded by a blank separator line.
    fn section(&mut self, lines: &[&str]) {
        self.lines.push(String::new());
        self.lines.extend(lines.iter().map(|line| line.to_string()));
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn render(&self) -> String {
        let mut rendered = self.lines.join("\n");
        rendered.push('\n');
        rendered
    }
}

/// The `readme.md` document: an ordered list of text lines.
#[derive(Debug, Clone)]
pub struct Readme {
    lines: Vec<String>,
}

impl Readme {
    pub fn build(config: &Config) -> Self {
        let install_command = if config.global {
            format!("npm install -g {}", config.reponame)
        } else {
            format!("npm install {}", config.reponame)
        };

        let title = format!("# {}", config.reponame);
        let license_heading = format!("## License ({})", config.license.name());

        let mut lines: Vec<String> = [
            title.as_str(),
            "",
            "Description Here!",
            "",
            "## Install",
            "",
            "```sh",
            install_command.as_str(),
            "```",
            "",
            "## Usage",
            "",
            "Fill in usage here",
            "",
            license_heading.as_str(),
            "",
        ]
        .iter()
        .map(|line| line.to_string())
        .collect();
        lines.push(templates::license_text(config.license).to_string());

        Readme { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn render(&self) -> String {
        self.lines.join("\n")
    }
}

/// Front-matter header for a generated static-site page.
pub fn front_matter(title: &str, subtitle: &str) -> String {
    format!("---\nlayout: site\ntitle: {}\nsubtitle: {}\n---\n", title, subtitle)
}

/// The in-memory artifacts the pipeline writes to disk.
#[derive(Debug, Clone)]
pub struct Artifacts {
    pub manifest: Manifest,
    pub publish_script: PublishScript,
    pub readme: Readme,
}

/// Constructs every artifact for the given options. Deterministic and total:
/// the same `Config` always yields byte-identical artifact content.
pub fn build(config: &Config) -> Artifacts {
    let manifest = Manifest::build(config);
    let publish_script = PublishScript::build(config, &manifest);
    let readme = Readme::build(config);

    Artifacts { manifest, publish_script, readme }
}
