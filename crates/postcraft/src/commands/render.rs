//! `postcraft render` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::{Args, ValueEnum};
use postcraft_article::compose_with_style;
use postcraft_config::{CliSettings, Config, ExportFormat};
use postcraft_renderer::RenderStyle;

use super::input::{load_content, load_images};
use crate::error::CliError;
use crate::output::Output;

/// Presenter selection on the command line.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum StyleArg {
    /// Tailwind utility classes.
    Class,
    /// Inline `style` attributes.
    Inline,
}

impl From<StyleArg> for RenderStyle {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::Class => Self::Class,
            StyleArg::Inline => Self::Inline,
        }
    }
}

/// Output format selection on the command line.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum FormatArg {
    Html,
    Text,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Html => Self::Html,
            FormatArg::Text => Self::Text,
        }
    }
}

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Article to render: a JSON backend response or a markdown file.
    input: PathBuf,

    /// Article title (overrides the JSON title).
    #[arg(long)]
    title: Option<String>,

    /// Hashtag to append (repeatable, replaces the JSON hashtags).
    #[arg(long = "hashtag")]
    hashtags: Vec<String>,

    /// Image URL to place in the article (repeatable).
    #[arg(long = "image")]
    images: Vec<String>,

    /// JSON file with an array of image URLs.
    #[arg(long = "images", value_name = "FILE")]
    images_file: Option<PathBuf>,

    /// Presenter style (overrides config).
    #[arg(long, value_enum)]
    style: Option<StyleArg>,

    /// Output format (overrides config).
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// Write to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover postcraft.toml).
    #[arg(short, long, env = super::CONFIG_ENV)]
    config: Option<PathBuf>,

    /// Enable verbose output (show detailed logs).
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl RenderArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            style: self.style.map(Into::into),
            format: self.format.map(Into::into),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        if let Some(path) = &config.config_path {
            tracing::debug!(path = %path.display(), "Loaded configuration");
        }

        let mut content = load_content(&self.input)?;
        if let Some(title) = self.title {
            content.title = title;
        }
        if !self.hashtags.is_empty() {
            content.hashtags = self.hashtags;
        }
        let images = load_images(self.images_file.as_deref(), &self.images)?;

        let article = compose_with_style(
            config.render.style,
            config.images.captions,
            &content,
            &images,
        );

        if let Some(plan) = &article.plan {
            output.appended_images(images.len(), plan);
        }

        let rendered = match config.export.format {
            ExportFormat::Html => &article.html,
            ExportFormat::Text => &article.plain_text,
        };

        match &self.output {
            Some(path) => {
                std::fs::write(path, rendered)?;
                output.rendered(&self.input, config.render.style, path);
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                writeln!(stdout, "{rendered}")?;
            }
        }

        Ok(())
    }
}
