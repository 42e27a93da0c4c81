use winthrop::artifacts::{self, front_matter, Manifest, PublishScript, Readme};
use winthrop::config::{Config, DocStyle, License, TestFramework};

fn base_config() -> Config {
    Config {
        reponame: "demo".to_string(),
        doc_style: DocStyle::Docco,
        test_framework: TestFramework::Nodeunit,
        license: License::Mit,
        browserify: false,
        coverage: true,
        executable: false,
        global: false,
        halstead: true,
        minify: true,
        open: true,
        blog: false,
        site: true,
    }
}

#[test]
fn test_build_is_deterministic() {
    let config = base_config();
    let first = artifacts::build(&config);
    let second = artifacts::build(&config);

    assert_eq!(first.manifest.to_json().unwrap(), second.manifest.to_json().unwrap());
    assert_eq!(first.publish_script.render(), second.publish_script.render());
    assert_eq!(first.readme.render(), second.readme.render());
}

#[test]
fn test_manifest_name_and_main() {
    let manifest = Manifest::build(&base_config());

    assert_eq!(manifest.name, "demo");
    assert_eq!(manifest.main, "./lib/demo.js");
}

#[test]
fn test_manifest_dev_dependencies_track_flags() {
    let mut config = base_config();
    config.browserify = true;
    let manifest = Manifest::build(&config);

    assert!(manifest.dev_dependencies.contains_key("browserify"));
    assert!(manifest.dev_dependencies.contains_key("jscoverage"));
    assert!(manifest.dev_dependencies.contains_key("docco"));
    assert!(manifest.dev_dependencies.contains_key("complexity-report"));
    assert!(manifest.dev_dependencies.contains_key("uglify-js"));
    assert!(manifest.dev_dependencies.contains_key("nodeunit"));
    assert_eq!(manifest.dev_dependencies.get("browserify").map(String::as_str), Some("*"));

    config.browserify = false;
    config.coverage = false;
    config.halstead = false;
    config.minify = false;
    config.doc_style = DocStyle::None;
    config.test_framework = TestFramework::None;
    let manifest = Manifest::build(&config);

    assert!(manifest.dev_dependencies.is_empty());
    assert!(manifest.scripts.is_empty());
}

#[test]
fn test_manifest_test_script_tracks_framework() {
    let mut config = base_config();
    config.test_framework = TestFramework::Mocha;
    let manifest = Manifest::build(&config);

    assert_eq!(manifest.scripts.get("test").map(String::as_str), Some("mocha test/test.js"));
    assert!(manifest.dev_dependencies.contains_key("mocha"));
}

#[test]
fn test_manifest_private_tracks_open() {
    let mut config = base_config();
    let manifest = Manifest::build(&config);
    assert_eq!(manifest.private, None);

    config.open = false;
    let manifest = Manifest::build(&config);
    assert_eq!(manifest.private, Some(true));
    assert!(manifest.to_json().unwrap().contains("\"private\": true"));
}

#[test]
fn test_manifest_global_marker() {
    let mut config = base_config();
    let manifest = Manifest::build(&config);
    assert_eq!(manifest.prefer_global, None);
    assert!(!manifest.to_json().unwrap().contains("preferGlobal"));

    config.global = true;
    let manifest = Manifest::build(&config);
    assert_eq!(manifest.prefer_global, Some(true));
    assert!(manifest.to_json().unwrap().contains("\"preferGlobal\": true"));
}

#[test]
fn test_manifest_executable_entry() {
    let mut config = base_config();
    config.executable = true;
    let manifest = Manifest::build(&config);

    assert_eq!(manifest.bin.as_deref(), Some("./bin/demo.js"));
}

#[test]
fn test_publish_script_section_order() {
    let mut config = base_config();
    config.browserify = true;
    let script = PublishScript::build(&config, &Manifest::build(&config));
    let lines = script.lines();

    assert_eq!(lines[0], "#!/usr/bin/env bash");

    let position = |needle: &str| {
        lines
            .iter()
            .position(|line| line == needle)
            .unwrap_or_else(|| panic!("missing line: {}", needle))
    };

    let tests = position("npm test");
    let docs = position("# Build documentation");
    let site = position("# Build the index page");
    let minify = position("# Generate the minified version of the code");
    let tail = position("# Commit the changes to master");

    assert!(tests < docs);
    assert!(docs < site);
    assert!(site < minify);
    assert!(minify < tail);
    assert_eq!(lines.last().map(String::as_str), Some("git push --tags"));
}

#[test]
fn test_publish_script_minify_variants() {
    let mut config = base_config();
    config.browserify = true;
    let bundled = PublishScript::build(&config, &Manifest::build(&config)).render();

    assert!(bundled.contains("browserify ./lib/demo.js -o ./lib/browserify-temp.js"));
    assert!(bundled.contains("uglifyjs ./lib/browserify-temp.js > ./lib/demo.min.js"));
    assert!(bundled.contains("rm ./lib/browserify-temp.js"));

    config.browserify = false;
    let plain = PublishScript::build(&config, &Manifest::build(&config)).render();

    assert!(plain.contains("uglifyjs ./lib/demo.js > ./lib/demo.min.js"));
    assert!(!plain.contains("browserify"));
}

#[test]
fn test_publish_script_conditional_sections() {
    let mut config = base_config();
    config.test_framework = TestFramework::None;
    config.doc_style = DocStyle::None;
    config.site = false;
    config.minify = false;
    let script = PublishScript::build(&config, &Manifest::build(&config)).render();

    assert!(!script.contains("npm test"));
    assert!(!script.contains("# Build documentation"));
    assert!(!script.contains("# Build the index page"));
    assert!(!script.contains("uglifyjs"));
    // The commit/tag/push tail is unconditional.
    assert!(script.contains("git tag $npm_package_version"));
    assert!(script.ends_with("git push --tags\n"));
}

#[test]
fn test_readme_install_command_tracks_global() {
    let mut config = base_config();
    let readme = Readme::build(&config).render();
    assert!(readme.contains("npm install demo"));
    assert!(!readme.contains("npm install -g"));

    config.global = true;
    let readme = Readme::build(&config).render();
    assert!(readme.contains("npm install -g demo"));
}

#[test]
fn test_readme_license_section() {
    let mut config = base_config();
    config.license = License::Gpl;
    let readme = Readme::build(&config).render();

    assert!(readme.contains("## License (GPL)"));
    assert!(readme.contains("GNU General Public License"));
}

#[test]
fn test_readme_title_and_sections() {
    let readme = Readme::build(&base_config());
    let lines = readme.lines();

    assert_eq!(lines[0], "# demo");
    assert!(lines.iter().any(|line| line == "## Install"));
    assert!(lines.iter().any(|line| line == "## Usage"));
}

#[test]
fn test_front_matter() {
    let page = front_matter("demo", "Description Here!");

    assert_eq!(page, "---\nlayout: site\ntitle: demo\nsubtitle: Description Here!\n---\n");
}
