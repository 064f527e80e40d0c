//! Full article composition.

use postcraft_images::{GeneratedImage, ImagePlacer, InsertionPlan};
use postcraft_renderer::{
    ClassPresenter, InlineStylePresenter, MarkdownRenderer, Presenter, RenderStyle, plain_text,
};

use crate::content::GeneratedContent;

/// Rendered article, ready for the preview, the DOM, or the clipboard.
#[derive(Clone, Debug)]
pub struct ComposedArticle {
    /// HTML fragment. Not sanitized.
    pub html: String,
    /// Plain-text rendering for clipboard targets without HTML support.
    pub plain_text: String,
    /// Insertion plan, when images were placed.
    pub plan: Option<InsertionPlan>,
}

/// Composes title, body with placed images, and hashtags into one document.
pub struct ArticleComposer<P: Presenter> {
    placer: ImagePlacer<P>,
    renderer: MarkdownRenderer<P>,
}

impl<P: Presenter> ArticleComposer<P> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            placer: ImagePlacer::new(),
            renderer: MarkdownRenderer::new(),
        }
    }

    /// Use a custom image placer (e.g. with different captions).
    #[must_use]
    pub fn with_placer(mut self, placer: ImagePlacer<P>) -> Self {
        self.placer = placer;
        self
    }

    /// Compose and render an article.
    pub fn compose(
        &self,
        content: &GeneratedContent,
        images: &[GeneratedImage],
    ) -> ComposedArticle {
        let (markdown, plan) = self.merged_markdown(content, images);
        let html = self.renderer.render(&markdown);
        let plain_text = plain_text(&html);

        tracing::debug!(
            images = images.len(),
            hashtags = content.hashtags.len(),
            html_len = html.len(),
            "Composed article"
        );

        ComposedArticle {
            html,
            plain_text,
            plan,
        }
    }

    /// Build the markdown fed to the renderer.
    ///
    /// The title `<h1>` and the hashtag `<div>` are separated from the body by
    /// blank lines so each forms its own block paragraph.
    pub fn merged_markdown(
        &self,
        content: &GeneratedContent,
        images: &[GeneratedImage],
    ) -> (String, Option<InsertionPlan>) {
        let mut sections = Vec::with_capacity(3);

        let title = content.title.trim();
        if !title.is_empty() {
            let mut line = String::new();
            P::title(title, &mut line);
            sections.push(line);
        }

        let body = content.content.replace("\r\n", "\n");
        let plan = if images.is_empty() {
            sections.push(body);
            None
        } else {
            let lines: Vec<&str> = body.split('\n').collect();
            let (merged, plan) = self.placer.place_with_plan(&lines, images);
            sections.push(merged.join("\n"));
            Some(plan)
        };

        let hashtags = content.normalized_hashtags();
        if !hashtags.is_empty() {
            let mut line = String::new();
            P::hashtags(&hashtags, &mut line);
            sections.push(line);
        }

        (sections.join("\n\n"), plan)
    }
}

impl<P: Presenter> Default for ArticleComposer<P> {
    fn default() -> Self {
        Self::new()
    }
}

/// Compose with the presenter selected at runtime.
///
/// `captions` replaces the default caption list when given.
pub fn compose_with_style(
    style: RenderStyle,
    captions: Option<Vec<String>>,
    content: &GeneratedContent,
    images: &[GeneratedImage],
) -> ComposedArticle {
    match style {
        RenderStyle::Class => composer::<ClassPresenter>(captions).compose(content, images),
        RenderStyle::Inline => composer::<InlineStylePresenter>(captions).compose(content, images),
    }
}

fn composer<P: Presenter>(captions: Option<Vec<String>>) -> ArticleComposer<P> {
    let composer = ArticleComposer::<P>::new();
    match captions {
        Some(captions) => composer.with_placer(ImagePlacer::new().with_captions(captions)),
        None => composer,
    }
}
