//! Splicing image markup into an article's line stream.

use std::marker::PhantomData;

use postcraft_renderer::Presenter;

use crate::image::{GeneratedImage, caption_for, default_captions};
use crate::plan::InsertionPlan;

/// Places generated images into article lines.
///
/// Figure markup comes from the presenter `P`, so placed images match the
/// styling variant the merged article is rendered with.
pub struct ImagePlacer<P: Presenter> {
    captions: Vec<String>,
    _presenter: PhantomData<fn() -> P>,
}

impl<P: Presenter> ImagePlacer<P> {
    /// Create a placer with the default caption list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            captions: default_captions(),
            _presenter: PhantomData,
        }
    }

    /// Replace the caption list.
    ///
    /// Images past the end of the list still get `인포그래픽 N`.
    #[must_use]
    pub fn with_captions(mut self, captions: Vec<String>) -> Self {
        self.captions = captions;
        self
    }

    /// Caption for the image at `index`.
    pub fn caption(&self, index: usize) -> String {
        caption_for(index, &self.captions)
    }

    /// Figure markup for each image, in order. Each entry is a single line.
    pub fn markup(&self, images: &[GeneratedImage]) -> Vec<String> {
        images
            .iter()
            .enumerate()
            .map(|(i, image)| {
                let mut out = String::new();
                P::figure(&image.url, &self.caption(i), &mut out);
                out
            })
            .collect()
    }

    /// Return a new line array with image markup spliced in.
    ///
    /// With no images the lines are returned unchanged.
    pub fn place<S: AsRef<str>>(&self, lines: &[S], images: &[GeneratedImage]) -> Vec<String> {
        self.place_with_plan(lines, images).0
    }

    /// Like [`place`](Self::place), also returning the plan that was used.
    pub fn place_with_plan<S: AsRef<str>>(
        &self,
        lines: &[S],
        images: &[GeneratedImage],
    ) -> (Vec<String>, InsertionPlan) {
        let plan = InsertionPlan::compute(lines, images.len());
        let merged = merge(lines, &plan.anchors, self.markup(images));
        (merged, plan)
    }
}

impl<P: Presenter> Default for ImagePlacer<P> {
    fn default() -> Self {
        Self::new()
    }
}

/// Emit each markup before the line at its splice point; leftovers go at the
/// end.
///
/// Every figure is separated from its neighbours by blank lines so it renders
/// as its own block instead of landing inside a `<p>` or a table.
fn merge<S: AsRef<str>>(lines: &[S], anchors: &[usize], markup: Vec<String>) -> Vec<String> {
    let mut merged = Vec::with_capacity(lines.len() + 3 * markup.len());
    let splice_points: Vec<usize> = anchors
        .iter()
        .map(|&anchor| table_start(lines, anchor))
        .collect();
    let mut pending = splice_points.iter().peekable();
    let mut markup = markup.into_iter();

    for (index, line) in lines.iter().enumerate() {
        let mut after_figure = false;
        while pending.next_if(|&&point| point == index).is_some() {
            if let Some(figure) = markup.next() {
                push_figure(&mut merged, figure);
                after_figure = true;
            }
        }

        let line = line.as_ref();
        if after_figure && !line.trim().is_empty() {
            merged.push(String::new());
        }
        merged.push(line.to_owned());
    }

    for figure in markup {
        push_figure(&mut merged, figure);
    }
    merged
}

fn push_figure(merged: &mut Vec<String>, figure: String) {
    if merged.last().is_some_and(|line| !line.trim().is_empty()) {
        merged.push(String::new());
    }
    merged.push(figure);
}

/// First row of the pipe table containing `anchor`, or `anchor` itself when it
/// does not fall below a table row.
fn table_start<S: AsRef<str>>(lines: &[S], anchor: usize) -> usize {
    let is_row = |index: usize| {
        lines
            .get(index)
            .is_some_and(|line| line.as_ref().trim_start().starts_with('|'))
    };
    if !is_row(anchor) {
        return anchor;
    }
    let mut start = anchor;
    while start > 0 && is_row(start - 1) {
        start -= 1;
    }
    start
}

#[cfg(test)]
mod tests {
    use super::*;
    use postcraft_renderer::{ClassPresenter, InlineStylePresenter};
    use pretty_assertions::assert_eq;

    fn images(n: usize) -> Vec<GeneratedImage> {
        (0..n)
            .map(|i| GeneratedImage::new(format!("https://cdn.example.com/{i}.png")))
            .collect()
    }

    fn article(total: usize, headings: &[usize]) -> Vec<String> {
        (0..total)
            .map(|i| {
                if headings.contains(&i) {
                    format!("## Heading {i}")
                } else {
                    format!("line {i}")
                }
            })
            .collect()
    }

    /// Positions of figure lines in the merged output.
    fn figure_positions(merged: &[String]) -> Vec<usize> {
        merged
            .iter()
            .enumerate()
            .filter(|(_, line)| line.starts_with("<figure"))
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn test_no_images_is_identity() {
        let lines = article(8, &[0, 3]);
        let placer = ImagePlacer::<ClassPresenter>::new();
        assert_eq!(placer.place(&lines, &[]), lines);
    }

    #[test]
    fn test_figure_precedes_anchor_line() {
        let lines = article(20, &[0, 5, 10, 15, 18]);
        let placer = ImagePlacer::<InlineStylePresenter>::new();
        let merged = placer.place(&lines, &images(3));

        assert_eq!(merged.len(), 29);
        assert_eq!(figure_positions(&merged), vec![6, 14, 25]);
        assert_eq!(merged[8], "## Heading 5");
        assert_eq!(merged[16], "## Heading 10");
        assert_eq!(merged[27], "## Heading 18");
        assert!(merged[6].contains("0.png"));
        assert!(merged[6].contains("핵심 요약 인포그래픽"));
        assert!(merged[14].contains("프로세스 인포그래픽"));
        assert!(merged[25].contains("데이터 인포그래픽"));
    }

    #[test]
    fn test_figures_are_separated_by_blank_lines() {
        let lines = article(20, &[0, 5, 10, 15, 18]);
        let placer = ImagePlacer::<ClassPresenter>::new();
        let merged = placer.place(&lines, &images(3));

        for pos in figure_positions(&merged) {
            assert_eq!(merged[pos - 1], "");
            assert_eq!(merged[pos + 1], "");
        }
    }

    #[test]
    fn test_two_images_dense_headings() {
        let lines = article(20, &[0, 5, 10, 15, 18]);
        let placer = ImagePlacer::<ClassPresenter>::new();
        let (merged, plan) = placer.place_with_plan(&lines, &images(2));

        assert_eq!(plan.anchors, vec![5, 10]);
        assert_eq!(figure_positions(&merged), vec![6, 14]);
        assert_eq!(merged.len(), 26);
    }

    #[test]
    fn test_extra_images_are_appended() {
        let lines = article(20, &[0, 5, 10, 15, 18]);
        let placer = ImagePlacer::<ClassPresenter>::new();
        let merged = placer.place(&lines, &images(5));

        assert_eq!(merged.len(), 33);
        assert_eq!(figure_positions(&merged), vec![6, 14, 25, 30, 32]);
        assert_eq!(merged[28], "line 19");
        assert!(merged[30].contains("3.png"));
        assert!(merged[30].contains("인포그래픽 4"));
        assert!(merged[32].contains("인포그래픽 5"));
    }

    #[test]
    fn test_sparse_article_single_image() {
        let lines = article(10, &[]);
        let placer = ImagePlacer::<ClassPresenter>::new();
        let merged = placer.place(&lines, &images(1));
        assert_eq!(figure_positions(&merged), vec![6]);
        assert_eq!(merged[4], "line 4");
        assert_eq!(merged[8], "line 5");
    }

    #[test]
    fn test_anchor_inside_prose_splits_paragraph() {
        let lines = ["a", "b", "c", "d"];
        let placer = ImagePlacer::<ClassPresenter>::new();
        let (merged, plan) = placer.place_with_plan(&lines, &images(1));

        assert_eq!(plan.anchors, vec![2]);
        assert_eq!(merged[..3], ["a", "b", ""]);
        assert!(merged[3].starts_with("<figure"));
        assert_eq!(merged[4..], ["", "c", "d"]);
    }

    #[test]
    fn test_anchor_inside_table_moves_to_header_row() {
        let lines = [
            "intro",
            "",
            "| A | B |",
            "|---|---|",
            "| 1 | 2 |",
            "| 3 | 4 |",
            "| 5 | 6 |",
        ];
        let placer = ImagePlacer::<ClassPresenter>::new();
        let (merged, plan) = placer.place_with_plan(&lines, &images(1));

        assert_eq!(plan.anchors, vec![3]);
        assert_eq!(figure_positions(&merged), vec![2]);
        assert_eq!(merged[..2], ["intro", ""]);
        assert_eq!(
            merged[3..],
            ["", "| A | B |", "|---|---|", "| 1 | 2 |", "| 3 | 4 |", "| 5 | 6 |"]
        );
    }

    #[test]
    fn test_table_start() {
        let lines = ["text", "| a |", "|---|", "| 1 |", "after"];
        assert_eq!(table_start(&lines, 0), 0);
        assert_eq!(table_start(&lines, 1), 1);
        assert_eq!(table_start(&lines, 3), 1);
        assert_eq!(table_start(&lines, 4), 4);
        assert_eq!(table_start(&lines, 5), 5);
    }

    #[test]
    fn test_colliding_anchors_append_remaining() {
        let lines = article(2, &[]);
        let placer = ImagePlacer::<ClassPresenter>::new();
        let merged = placer.place(&lines, &images(3));
        assert_eq!(figure_positions(&merged), vec![0, 5, 7]);
        assert_eq!(merged[2], "line 0");
        assert_eq!(merged[3], "line 1");
    }

    #[test]
    fn test_empty_article_appends_all() {
        let lines: Vec<String> = Vec::new();
        let placer = ImagePlacer::<ClassPresenter>::new();
        let merged = placer.place(&lines, &images(2));
        assert_eq!(merged.len(), 3);
        assert_eq!(figure_positions(&merged), vec![0, 2]);
    }

    #[test]
    fn test_custom_captions() {
        let placer =
            ImagePlacer::<ClassPresenter>::new().with_captions(vec!["Overview".to_owned()]);
        assert_eq!(placer.caption(0), "Overview");
        assert_eq!(placer.caption(1), "인포그래픽 2");
    }

    #[test]
    fn test_markup_lines_are_single_line() {
        let placer = ImagePlacer::<InlineStylePresenter>::new();
        for figure in placer.markup(&images(4)) {
            assert!(!figure.contains('\n'));
            assert!(figure.starts_with("<figure"));
        }
    }

    #[test]
    fn test_accepts_borrowed_lines() {
        let content = "# A\nbody\n## B\nbody\n## C\nbody\n## D\nbody";
        let lines: Vec<&str> = content.split('\n').collect();
        let placer = ImagePlacer::<ClassPresenter>::new();
        let merged = placer.place(&lines, &images(1));
        assert_eq!(merged.len(), 11);
        assert_eq!(figure_positions(&merged), vec![3]);
        assert_eq!(merged[5], "## B");
    }
}
