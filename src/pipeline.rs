//! The scaffolding pipeline.
//! An ordered sequence of side-effecting steps that turns validated options
//! and prebuilt artifacts into a committed repository on disk. Strictly
//! sequential: every step observes its predecessor's result, and the first
//! failure aborts the run with no rollback of completed steps.

use log::debug;

use crate::artifacts::{front_matter, Artifacts};
use crate::config::{Config, TestFramework};
use crate::constants::{
    IDENTITY_EMAIL, IDENTITY_USERNAME, INITIAL_COMMIT_MESSAGE, SITE_BRANCH,
};
use crate::error::Result;
use crate::renderer::TemplateRenderer;
use crate::templates;
use crate::workspace::Workspace;

/// State threaded through the pipeline once the shared prefix has run:
/// resolved identity plus the finalized site and CI templates. Owned by the
/// pipeline and discarded when the run ends.
struct PipelineContext {
    reponame: String,
    site_page: String,
    ci_config: String,
}

/// Executes the pipeline.
///
/// # Flow
/// 1. Create the project directory (fatal if it exists)
/// 2. Initialize the git repository
/// 3. Resolve identity: username, then email
/// 4. Finalize the site and CI templates with the resolved values
/// 5. Branch once on the `blog` flag into exactly one sub-pipeline
pub fn run<W: Workspace>(
    workspace: &mut W,
    renderer: &dyn TemplateRenderer,
    config: &Config,
    artifacts: &Artifacts,
) -> Result<()> {
    workspace.create_root()?;
    workspace.init_repo()?;

    let username = workspace.identity_value(IDENTITY_USERNAME)?;
    let email = workspace.identity_value(IDENTITY_EMAIL)?;
    debug!("Resolved identity: {} <{}>", username, email);

    let substitutions = serde_json::json!({
        "reponame": config.reponame,
        "repopath": format!("/{}/", config.reponame),
        "username": username,
        "email": email,
    });
    let context = PipelineContext {
        reponame: config.reponame.clone(),
        site_page: renderer.render(templates::SITE_LAYOUT, &substitutions)?,
        ci_config: renderer.render(templates::CI_CONFIG, &substitutions)?,
    };

    if config.blog {
        blog_pipeline(workspace, artifacts, &context)
    } else {
        full_pipeline(workspace, config, artifacts, &context)
    }
}

/// Blog sub-pipeline: the site scaffold lands directly on the current
/// branch, together with a generated front-matter index page, and is
/// captured by a single commit.
fn blog_pipeline<W: Workspace>(
    workspace: &mut W,
    artifacts: &Artifacts,
    context: &PipelineContext,
) -> Result<()> {
    debug!("Scaffolding a blog in '{}'", workspace.root().display());

    let index_page = front_matter(&context.reponame, &artifacts.manifest.description);
    write_site_scaffold(workspace, context, Some(&index_page))?;
    workspace.commit_all(INITIAL_COMMIT_MESSAGE)
}

/// Full-project sub-pipeline: module skeleton and generated files on the
/// main branch, then the site scaffold on an orphan branch.
fn full_pipeline<W: Workspace>(
    workspace: &mut W,
    config: &Config,
    artifacts: &Artifacts,
    context: &PipelineContext,
) -> Result<()> {
    debug!("Scaffolding project '{}'", context.reponame);

    workspace.write_file(".gitignore", templates::GITIGNORE)?;
    workspace.create_dir("lib")?;
    workspace.write_file(&format!("lib/{}.js", context.reponame), "")?;

    if config.test_framework != TestFramework::None {
        workspace.create_dir("test")?;
        workspace.write_file("test/test.js", "")?;
    }
    if config.executable {
        workspace.create_dir("bin")?;
        let entry_script = format!("bin/{}.js", context.reponame);
        workspace.write_file(&entry_script, "")?;
        workspace.make_executable(&entry_script)?;
    }

    workspace.write_file(".travis.yml", &context.ci_config)?;
    workspace.write_file("package.json", &artifacts.manifest.to_json()?)?;
    workspace.write_file("prepublish.sh", &artifacts.publish_script.render())?;
    workspace.make_executable("prepublish.sh")?;
    workspace.write_file("readme.md", &artifacts.readme.render())?;
    workspace.commit_all(INITIAL_COMMIT_MESSAGE)?;

    // The site history lives on an orphan branch, parallel to the project
    // history. Record where we started so the run can return there.
    let main_branch = workspace.current_branch()?;
    workspace.create_orphan_branch(SITE_BRANCH)?;
    workspace.remove_tracked()?;
    write_site_scaffold(workspace, context, None)?;
    workspace.commit_all(INITIAL_COMMIT_MESSAGE)?;
    workspace.checkout(&main_branch)
}

/// Shared Jekyll scaffold step group. The blog path passes a generated
/// index page; the full path leaves index generation to the publish script.
fn write_site_scaffold<W: Workspace>(
    workspace: &mut W,
    context: &PipelineContext,
    index_page: Option<&str>,
) -> Result<()> {
    workspace.create_dir("_layouts")?;
    workspace.write_file("_layouts/site.html", &context.site_page)?;
    workspace.write_file("_config.yml", templates::JEKYLL_CONFIG)?;
    workspace.create_dir("_includes")?;
    workspace.write_file("_includes/.gitkeep", "")?;
    workspace.create_dir("_posts")?;
    workspace.write_file("_posts/.gitkeep", "")?;
    workspace.create_dir("_site")?;
    workspace.write_file("_site/.gitkeep", "")?;
    workspace.create_dir("images")?;
    workspace.write_file("images/.gitkeep", "")?;
    if let Some(page) = index_page {
        workspace.write_file("index.html", page)?;
    }
    workspace.create_dir("javascripts")?;
    workspace.write_file("javascripts/scale.fix.js", templates::SCALE_FIX_JS)?;
    workspace.create_dir("stylesheets")?;
    workspace.write_file("stylesheets/pygment_trac.css", templates::PYGMENT_CSS)?;
    workspace.write_file("stylesheets/styles.css", templates::STYLES_CSS)?;
    workspace.write_file(".gitignore", templates::GITIGNORE)?;
    Ok(())
}
