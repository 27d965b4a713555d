//! Integration tests for stitch-core.
//!
//! The ports are implemented by tiny in-test fakes so these tests exercise the
//! public API only.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::{TimeZone, Utc};
use stitch_core::application::{ApplicationError, recipe};
use stitch_core::domain::DomainError;
use stitch_core::prelude::*;

#[derive(Clone, Default)]
struct FakeFs(Arc<Mutex<BTreeMap<PathBuf, Vec<u8>>>>);

impl FakeFs {
    fn with(path: &str, content: &str) -> Self {
        let fs = Self::default();
        fs.0.lock()
            .unwrap()
            .insert(PathBuf::from(path), content.as_bytes().to_vec());
        fs
    }

    fn text(&self, path: &str) -> Option<String> {
        self.0
            .lock()
            .unwrap()
            .get(Path::new(path))
            .map(|b| String::from_utf8_lossy(b).into_owned())
    }

    fn paths(&self) -> Vec<String> {
        self.0
            .lock()
            .unwrap()
            .keys()
            .map(|p| p.display().to_string())
            .collect()
    }
}

impl Filesystem for FakeFs {
    fn read_file(&self, path: &Path) -> StitchResult<String> {
        self.text(&path.display().to_string())
            .ok_or_else(|| {
                ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "no such file".into(),
                }
                .into()
            })
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> StitchResult<()> {
        self.0
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_vec());
        Ok(())
    }

    fn create_dir_all(&self, _path: &Path) -> StitchResult<()> {
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.0.lock().unwrap().contains_key(path)
    }
}

/// Replaces `{{ app.name }}` and nothing else.
struct NameRenderer;

impl TemplateRenderer for NameRenderer {
    fn render(&self, _name: &str, source: &str, context: &RenderContext) -> StitchResult<String> {
        Ok(source.replace("{{ app.name }}", &context.project().name))
    }
}

struct FixedSource(Vec<VirtualFile>);

impl TemplateSource for FixedSource {
    fn files(&self) -> StitchResult<Vec<VirtualFile>> {
        Ok(self.0.clone())
    }

    fn describe(&self) -> String {
        "fixed".into()
    }
}

fn tree() -> FixedSource {
    FixedSource(vec![
        VirtualFile::new("actions/auth.go", "package actions // {{ app.name }}\n").unwrap(),
        VirtualFile::new("migrations/create_users.fizz", "create_table(\"users\") {}\n").unwrap(),
        VirtualFile::new("templates/auth/new.html", "<h1>Sign in</h1>\n").unwrap(),
        VirtualFile::new(
            "templates/users/new.html",
            "<%= form_for(user) { %>\n      <%= f.InputTag(\"PasswordConfirmation\", {}) %>\n<% } %>\n",
        )
        .unwrap(),
    ])
}

fn request(attrs: &[&str]) -> RunRequest {
    RunRequest {
        root: PathBuf::from("/shop"),
        project: ProjectMeta::from_root("/shop"),
        attributes: AttributeSet::from_args(attrs).unwrap(),
        dry_run: false,
    }
}

fn stamp() -> RunTimestamp {
    RunTimestamp::at(Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 58).unwrap())
}

const CURRENT_APP: &str = "func App() *buffalo.App {\n\tappOnce.Do(func() {\n\t\tapp = buffalo.New(buffalo.Options{})\n\t})\n\treturn app\n}\n";
const LEGACY_APP: &str = "func App() *buffalo.App {\n\tif app == nil {\n\t\tapp = buffalo.New(buffalo.Options{})\n\t}\n\treturn app\n}\n";

#[test]
fn auth_run_materializes_tree_and_patches_setup() {
    let fs = FakeFs::with("/shop/actions/app.go", CURRENT_APP);
    let service = ScaffoldService::new(
        Box::new(tree()),
        Box::new(NameRenderer),
        Box::new(fs.clone()),
    );

    let report = service
        .run_at(
            &recipe::auth("migrations"),
            &request(&["nickname:string", "age:int"]),
            stamp(),
        )
        .unwrap();

    assert_eq!(
        fs.paths(),
        vec![
            "/shop/actions/app.go",
            "/shop/actions/auth.go",
            "/shop/migrations/20241231235958_create_users.fizz",
            "/shop/templates/auth/new.plush.html",
            "/shop/templates/users/new.plush.html",
        ]
    );
    assert_eq!(
        fs.text("/shop/actions/auth.go").unwrap(),
        "package actions // shop\n"
    );

    let form = fs.text("/shop/templates/users/new.plush.html").unwrap();
    let nickname = form.find("InputTag(\"Nickname\"").unwrap();
    let age = form.find("InputTag(\"Age\"").unwrap();
    let confirmation = form.find("PasswordConfirmation").unwrap();
    assert!(confirmation < nickname && nickname < age);

    let app = fs.text("/shop/actions/app.go").unwrap();
    let lines: Vec<&str> = app.lines().collect();
    assert_eq!(lines[1], "\tappOnce.Do(func() {");
    assert_eq!(lines[2], "\t\t// AuthMiddleware");
    assert!(app.contains("\t\tauth.GET(\"/new\", AuthNew)\n"));
    assert!(app.ends_with("\t\tapp = buffalo.New(buffalo.Options{})\n\t})\n\treturn app\n}\n"));

    assert!(report.warnings.is_empty());
    assert_eq!(report.written.len(), 4);
}

#[test]
fn legacy_setup_is_patched_with_a_warning() {
    let fs = FakeFs::with("/shop/actions/app.go", LEGACY_APP);
    let service = ScaffoldService::new(
        Box::new(tree()),
        Box::new(NameRenderer),
        Box::new(fs.clone()),
    );

    let report = service
        .run_at(&recipe::auth("migrations"), &request(&[]), stamp())
        .unwrap();

    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.anchor, "if app == nil {");
    let app = fs.text("/shop/actions/app.go").unwrap();
    assert_eq!(app.lines().nth(2), Some("\t\t// AuthMiddleware"));
}

#[test]
fn unrecognized_setup_leaves_project_untouched() {
    let original = "package actions\n\nfunc App() {}\n";
    let fs = FakeFs::with("/shop/actions/app.go", original);
    let service = ScaffoldService::new(
        Box::new(tree()),
        Box::new(NameRenderer),
        Box::new(fs.clone()),
    );

    let err = service
        .run_at(&recipe::auth("migrations"), &request(&["age:int"]), stamp())
        .unwrap_err();

    match err {
        StitchError::Domain(DomainError::AnchorNotFound { attempted, .. }) => {
            assert_eq!(attempted, vec!["appOnce.Do(func() {", "if app == nil {"]);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(fs.paths(), vec!["/shop/actions/app.go"]);
    assert_eq!(fs.text("/shop/actions/app.go").unwrap(), original);
}

#[test]
fn reserved_attributes_are_not_injected() {
    let fs = FakeFs::with("/shop/actions/app.go", CURRENT_APP);
    let service = ScaffoldService::new(
        Box::new(tree()),
        Box::new(NameRenderer),
        Box::new(fs.clone()),
    );

    service
        .run_at(
            &recipe::auth("migrations"),
            &request(&["email:string", "nickname"]),
            stamp(),
        )
        .unwrap();

    let form = fs.text("/shop/templates/users/new.plush.html").unwrap();
    assert!(!form.contains("InputTag(\"Email\""));
    assert!(form.contains("InputTag(\"Nickname\", {})"));
}
