//! Renderer backed by minijinja.
//!
//! Templates see exactly three names: `app` (project metadata), `attrs` (the
//! user attributes) and the `option` helper. Undefined names are errors and
//! nothing is HTML-escaped, since the output is Go and Plush source.

use minijinja::{AutoEscape, Environment, Error, ErrorKind, UndefinedBehavior, Value, context};
use stitch_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::{RenderContext, attribute::option_fragment},
    error::StitchResult,
};
use tracing::{instrument, trace};

/// Production renderer.
#[derive(Debug)]
pub struct MiniJinjaRenderer {
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_keep_trailing_newline(true);
        env.add_function("option", option);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    #[instrument(skip(self, source, context), fields(bytes = source.len()))]
    fn render(&self, name: &str, source: &str, context: &RenderContext) -> StitchResult<String> {
        let ctx = context! {
            app => Value::from_serialize(context.project()),
            attrs => Value::from_serialize(context.attributes()),
        };

        let rendered = self
            .env
            .render_named_str(name, source, ctx)
            .map_err(|e| ApplicationError::RenderingFailed {
                path: name.to_string(),
                reason: describe(&e),
            })?;

        trace!(bytes = rendered.len(), "rendered");
        Ok(rendered)
    }
}

/// `option(x)`: the column option fragment for a type tag or an attribute.
fn option(value: Value) -> Result<String, Error> {
    let type_tag = match value.as_str() {
        Some(tag) => tag.to_string(),
        None => value
            .get_attr("type_tag")
            .ok()
            .and_then(|tag| tag.as_str().map(str::to_string))
            .ok_or_else(|| {
                Error::new(
                    ErrorKind::InvalidOperation,
                    "option() expects a type tag or an attribute",
                )
            })?,
    };
    Ok(option_fragment(&type_tag).to_string())
}

fn describe(err: &Error) -> String {
    match err.line() {
        Some(line) => format!("{} (line {line})", err.kind()),
        None => err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stitch_core::{
        domain::{AttributeSet, ProjectMeta},
        error::StitchError,
    };

    fn ctx(args: &[&str]) -> RenderContext {
        RenderContext::new(
            ProjectMeta::new("shop", "github.com/acme/shop", "/work/shop"),
            AttributeSet::from_args(args).unwrap(),
        )
    }

    #[test]
    fn renders_app_metadata() {
        let out = MiniJinjaRenderer::new()
            .render(
                "actions/auth.go",
                "import \"{{ app.module_path }}/models\"\n",
                &ctx(&[]),
            )
            .unwrap();
        assert_eq!(out, "import \"github.com/acme/shop/models\"\n");
    }

    #[test]
    fn iterates_attributes_in_order() {
        let src = "{% for a in attrs %}{{ a.display_name }} {{ a.go_type }};{% endfor %}";
        let out = MiniJinjaRenderer::new()
            .render("models/user.go", src, &ctx(&["nickname", "age:int", "bio:nulls.String"]))
            .unwrap();
        assert_eq!(out, "Nickname string;Age int;Bio nulls.String;");
    }

    #[test]
    fn option_accepts_tags_and_attributes() {
        let src = "{% for a in attrs %}[{{ option(a) }}]{% endfor %}[{{ option(\"int?\") }}]";
        let out = MiniJinjaRenderer::new()
            .render("m.fizz", src, &ctx(&["age:int", "bio:nulls.Text"]))
            .unwrap();
        assert_eq!(out, "[][\"null\": true][\"null\": true]");
    }

    #[test]
    fn rendering_is_deterministic() {
        let renderer = MiniJinjaRenderer::new();
        let src = "{{ app.name }}{% for a in attrs %} {{ a.column_type }}{% endfor %}\n";
        let c = ctx(&["nickname", "age:int"]);
        let first = renderer.render("x", src, &c).unwrap();
        let second = renderer.render("x", src, &c).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn plush_tags_and_go_braces_pass_through() {
        let src = "<%= f.InputTag(\"Email\", {}) %>\napp = buffalo.New(buffalo.Options{})\n";
        let out = MiniJinjaRenderer::new().render("x.html", src, &ctx(&[])).unwrap();
        assert_eq!(out, src);
    }

    #[test]
    fn undefined_name_is_a_rendering_error() {
        let err = MiniJinjaRenderer::new()
            .render("actions/auth.go", "{{ nope.field }}", &ctx(&[]))
            .unwrap_err();
        assert!(matches!(
            err,
            StitchError::Application(ApplicationError::RenderingFailed { ref path, .. })
                if path == "actions/auth.go"
        ));
    }

    #[test]
    fn malformed_syntax_is_a_rendering_error() {
        let err = MiniJinjaRenderer::new()
            .render("models/user.go", "{% for a in attrs %}", &ctx(&[]))
            .unwrap_err();
        assert!(err.to_string().starts_with("failed to render models/user.go"));
    }
}
