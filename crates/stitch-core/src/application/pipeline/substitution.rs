//! Variable substitution: renders each file's text as a template.

use crate::{
    application::{pipeline::Transformer, ports::TemplateRenderer},
    domain::{RenderContext, VirtualFile},
    error::StitchResult,
};

/// Renders text files through the [`TemplateRenderer`] port.
///
/// Binary files are passed through untouched.
pub struct Substitution<'a> {
    renderer: &'a dyn TemplateRenderer,
    context: &'a RenderContext,
}

impl<'a> Substitution<'a> {
    pub fn new(renderer: &'a dyn TemplateRenderer, context: &'a RenderContext) -> Self {
        Self { renderer, context }
    }
}

impl Transformer for Substitution<'_> {
    fn name(&self) -> &'static str {
        "substitution"
    }

    fn transform(&self, file: &VirtualFile) -> StitchResult<VirtualFile> {
        let Some(source) = file.text() else {
            return Ok(file.clone());
        };
        let rendered = self
            .renderer
            .render(&file.path().to_slash(), source, self.context)?;
        Ok(file.with_content(rendered))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{ApplicationError, ports::MockTemplateRenderer};
    use crate::domain::{AttributeSet, ProjectMeta};
    use crate::error::StitchError;

    fn context() -> RenderContext {
        RenderContext::new(ProjectMeta::from_root("shop"), AttributeSet::new())
    }

    #[test]
    fn passes_path_as_template_name() {
        let mut renderer = MockTemplateRenderer::new();
        renderer
            .expect_render()
            .withf(|name, source, _| name == "models/user.go" && source == "{{ app.name }}")
            .times(1)
            .returning(|_, _, ctx| Ok(ctx.project().name.clone()));

        let ctx = context();
        let stage = Substitution::new(&renderer, &ctx);
        let file = VirtualFile::new("models/user.go", "{{ app.name }}").unwrap();
        let out = stage.transform(&file).unwrap();

        assert_eq!(out.text(), Some("shop"));
        assert_eq!(out.path(), file.path());
    }

    #[test]
    fn binary_files_skip_the_renderer() {
        let mut renderer = MockTemplateRenderer::new();
        renderer.expect_render().never();

        let ctx = context();
        let stage = Substitution::new(&renderer, &ctx);
        let file = VirtualFile::new("public/logo.png", vec![0x89, 0xff, 0x00]).unwrap();
        assert_eq!(stage.transform(&file).unwrap(), file);
    }

    #[test]
    fn render_errors_propagate() {
        let mut renderer = MockTemplateRenderer::new();
        renderer.expect_render().returning(|name, _, _| {
            Err(ApplicationError::RenderingFailed {
                path: name.to_string(),
                reason: "unexpected end of input".into(),
            }
            .into())
        });

        let ctx = context();
        let stage = Substitution::new(&renderer, &ctx);
        let file = VirtualFile::new("actions/auth.go", "{{ broken").unwrap();
        let err = stage.transform(&file).unwrap_err();
        assert!(matches!(
            err,
            StitchError::Application(ApplicationError::RenderingFailed { ref path, .. }) if path == "actions/auth.go"
        ));
    }
}
