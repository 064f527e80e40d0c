//! Insertion point computation.
//!
//! Articles with at least [`DENSE_HEADING_THRESHOLD`] headings get images at
//! three fixed positions: the second heading, the middle heading and the last
//! heading. Sparser articles fall back to even spacing over the line count.

use std::sync::LazyLock;

use regex::Regex;

static HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#{1,3}\s").unwrap());

/// Heading count at which placement switches to heading anchors.
pub const DENSE_HEADING_THRESHOLD: usize = 4;

/// How anchors were chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlacementStrategy {
    /// Second, middle and last heading.
    HeadingAnchored,
    /// `step * (i + 1)` with `step = lines / (images + 1)`.
    EvenlySpaced,
}

/// Computed insertion points for a set of images.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InsertionPlan {
    pub strategy: PlacementStrategy,
    /// Line indices of `#`, `##` and `###` headings.
    pub headings: Vec<usize>,
    /// Strictly increasing line indices, at most one per image.
    ///
    /// An index equal to the line count means "after the last line".
    pub anchors: Vec<usize>,
}

impl InsertionPlan {
    /// Compute the plan for `image_count` images over `lines`.
    ///
    /// Anchors are zipped with images positionally: when fewer images than
    /// anchors exist, only the first anchors are kept.
    pub fn compute<S: AsRef<str>>(lines: &[S], image_count: usize) -> Self {
        let headings = heading_indices(lines);
        let total = lines.len();

        let (strategy, mut anchors) = if headings.len() >= DENSE_HEADING_THRESHOLD {
            let count = headings.len();
            (
                PlacementStrategy::HeadingAnchored,
                vec![headings[1], headings[count / 2], headings[count - 1]],
            )
        } else {
            let step = total / (image_count + 1);
            (
                PlacementStrategy::EvenlySpaced,
                (1..=image_count).map(|i| step * i).collect(),
            )
        };

        for anchor in &mut anchors {
            *anchor = (*anchor).min(total);
        }
        anchors.sort_unstable();
        anchors.dedup();
        anchors.truncate(image_count);

        tracing::debug!(
            ?strategy,
            headings = headings.len(),
            lines = total,
            images = image_count,
            ?anchors,
            "Computed image insertion plan"
        );

        Self {
            strategy,
            headings,
            anchors,
        }
    }
}

/// Indices of lines that start with one to three `#` followed by whitespace.
pub fn heading_indices<S: AsRef<str>>(lines: &[S]) -> Vec<usize> {
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| HEADING.is_match(line.as_ref()))
        .map(|(i, _)| i)
        .collect()
}
