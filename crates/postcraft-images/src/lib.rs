//! Heading-aware placement of generated images.
//!
//! Given an article's lines and an ordered list of [`GeneratedImage`]s, the
//! [`ImagePlacer`] computes an [`InsertionPlan`] and splices one `<figure>`
//! line per image into the line stream, set off by blank lines so it renders
//! as its own block. The merged lines are then joined and rendered like any
//! other article text.
//!
//! # Example
//!
//! ```
//! use postcraft_images::{GeneratedImage, ImagePlacer};
//! use postcraft_renderer::InlineStylePresenter;
//!
//! let lines = ["intro", "more", "# Heading", "body"];
//! let images = [GeneratedImage::new("https://cdn.example.com/a.png")];
//! let merged = ImagePlacer::<InlineStylePresenter>::new().place(&lines, &images);
//! assert_eq!(merged.len(), 7);
//! assert_eq!(merged[2], "");
//! assert!(merged[3].starts_with("<figure"));
//! assert_eq!(merged[5], "# Heading");
//! ```

mod image;
mod placer;
mod plan;

pub use image::{DEFAULT_CAPTIONS, GeneratedImage, caption_for, default_captions};
pub use placer::ImagePlacer;
pub use plan::{DENSE_HEADING_THRESHOLD, InsertionPlan, PlacementStrategy, heading_indices};
