//! Generator recipes: which transformers run, and what gets patched.
//!
//! A [`Recipe`] is plain data. The scaffold service turns it into a
//! [`Pipeline`] once per run, handing every stage the run's context and
//! timestamp.

use crate::{
    application::{
        pipeline::{ExtensionRename, FieldInjection, Pipeline, Relocation, Substitution},
        ports::TemplateRenderer,
    },
    domain::{Anchor, Attribute, PatchRequest, RenderContext, RunTimestamp},
};

/// Field injection settings.
#[derive(Debug, Clone)]
pub struct InjectionSpec {
    pub target: String,
    pub marker: String,
    pub row: fn(&Attribute) -> String,
}

/// Timestamped relocation settings.
#[derive(Debug, Clone)]
pub struct RelocationSpec {
    pub suffix: String,
    pub dir: String,
}

/// Everything that distinguishes one generator from another, apart from its
/// template tree.
#[derive(Debug, Clone)]
pub struct Recipe {
    pub name: &'static str,
    pub injection: Option<InjectionSpec>,
    pub renames: Vec<(String, String)>,
    pub relocation: Option<RelocationSpec>,
    pub patch: PatchRequest,
}

impl Recipe {
    /// Build the pipeline for one run.
    ///
    /// Order: substitution, field injection, extension renames, relocation.
    pub fn pipeline<'a>(
        &'a self,
        renderer: &'a dyn TemplateRenderer,
        context: &'a RenderContext,
        timestamp: &'a RunTimestamp,
    ) -> Pipeline<'a> {
        let mut pipeline = Pipeline::new().with(Substitution::new(renderer, context));

        if let Some(spec) = &self.injection {
            pipeline.push(FieldInjection::new(
                spec.target.as_str(),
                spec.marker.as_str(),
                context.attributes(),
                spec.row,
            ));
        }
        for (from, to) in &self.renames {
            pipeline.push(ExtensionRename::new(from.as_str(), to.as_str()));
        }
        if let Some(spec) = &self.relocation {
            pipeline.push(Relocation::new(spec.suffix.as_str(), spec.dir.as_str(), timestamp));
        }

        pipeline
    }
}

// ── auth ──────────────────────────────────────────────────────────────────────

/// The registration form rendered by the template tree.
pub const AUTH_FORM_PATH: &str = "templates/users/new.html";

/// The last built-in input row of the registration form.
pub const AUTH_FORM_MARKER: &str = r#"<%= f.InputTag("PasswordConfirmation""#;

/// The app setup file wired up by the patch.
pub const AUTH_SETUP_PATH: &str = "actions/app.go";

/// Anchor of apps generated by current versions.
pub const AUTH_PRIMARY_ANCHOR: &str = "appOnce.Do(func() {";

/// Anchor of apps generated by CLI v0.18.8 or older.
pub const AUTH_LEGACY_ANCHOR: &str = "if app == nil {";

const AUTH_SETUP_LINES: &[&str] = &[
    "// AuthMiddleware",
    "s := MockSender{}",
    "app.Use(SetupRecoverySender(s))",
    "app.Use(SetCurrentUser)",
    "// STITCH-AUTH: enable to use across all routes",
    "// WARNING: in default configuration, no routes are protected by auth.",
    "// app.Use(Authorize)",
    "",
    "// Routes for Auth",
    "auth := app.Group(\"/login\")",
    "auth.GET(\"/new\", AuthNew)",
    "auth.POST(\"/\", AuthCreate)",
    "auth.DELETE(\"/\", AuthDestroy)",
    "",
    "// Password recovery",
    "app.GET(\"/password_reset\", PasswordResetForm)",
    "app.POST(\"/password_reset\", PasswordReset)",
    "app.GET(\"/account_recovery\", AccountRecoveryForm)",
    "app.POST(\"/account_recovery\", AccountRecovery)",
    "// enable SKIP if using Authorize on these routes.",
    "// auth.Middleware.Skip(Authorize, AuthLanding, AuthNew, AuthCreate, PasswordResetForm, PasswordReset, AccountRecoveryForm, AccountRecovery)",
    "",
    "// Routes for User registration",
    "users := app.Group(\"/users\")",
    "users.GET(\"/new\", UsersNew)",
    "users.POST(\"/\", UsersCreate)",
    "// enable REMOVE if Authorize is in use.",
    "// users.Middleware.Remove(Authorize)",
    "",
];

fn auth_form_row(attr: &Attribute) -> String {
    format!("      <%= f.InputTag(\"{}\", {{}}) %>", attr.display_name())
}

/// The auth generator: login, registration and password recovery.
///
/// `migrations_dir` is where the users migration is relocated to.
pub fn auth(migrations_dir: &str) -> Recipe {
    Recipe {
        name: "auth",
        injection: Some(InjectionSpec {
            target: AUTH_FORM_PATH.into(),
            marker: AUTH_FORM_MARKER.into(),
            row: auth_form_row,
        }),
        renames: vec![(".html".into(), ".plush.html".into())],
        relocation: Some(RelocationSpec {
            suffix: ".fizz".into(),
            dir: migrations_dir.into(),
        }),
        patch: PatchRequest::new(AUTH_SETUP_PATH, Anchor::new(AUTH_PRIMARY_ANCHOR))
            .fallback(
                Anchor::new(AUTH_LEGACY_ANCHOR)
                    .with_note("built with CLI v0.18.8 or older; consider migrating App() to appOnce"),
            )
            .payload(AUTH_SETUP_LINES.iter().copied()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockTemplateRenderer;
    use crate::domain::{AttributeSet, ProjectMeta};

    #[test]
    fn auth_recipe_registers_stages_in_order() {
        let recipe = auth("migrations");
        let renderer = MockTemplateRenderer::new();
        let ctx = RenderContext::new(ProjectMeta::from_root("shop"), AttributeSet::new());
        let ts = RunTimestamp::now();

        let pipeline = recipe.pipeline(&renderer, &ctx, &ts);
        assert_eq!(
            pipeline.stage_names(),
            vec!["substitution", "field-injection", "extension-rename", "relocation"]
        );
    }

    #[test]
    fn auth_anchors_are_primary_then_legacy() {
        let recipe = auth("migrations");
        let markers: Vec<&str> = recipe.patch.anchors().iter().map(|a| a.marker.as_str()).collect();
        assert_eq!(markers, vec![AUTH_PRIMARY_ANCHOR, AUTH_LEGACY_ANCHOR]);
        assert_eq!(recipe.patch.target(), AUTH_SETUP_PATH);
    }

    #[test]
    fn auth_form_row_uses_display_name() {
        let attr = Attribute::parse("favorite_color:string").unwrap();
        assert_eq!(auth_form_row(&attr), "      <%= f.InputTag(\"FavoriteColor\", {}) %>");
    }
}
