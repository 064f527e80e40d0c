//! Terminal reporting for rendered articles and insertion plans.
//!
//! Everything goes to stderr so rendered output on stdout stays pipeable.

use std::path::Path;

use console::{Style, Term};
use postcraft_images::{InsertionPlan, PlacementStrategy};
use postcraft_renderer::RenderStyle;

/// Colored stderr reporter.
pub(crate) struct Output {
    term: Term,
    green: Style,
    yellow: Style,
    red: Style,
    cyan_bold: Style,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            green: Style::new().green(),
            yellow: Style::new().yellow(),
            red: Style::new().red(),
            cyan_bold: Style::new().cyan().bold(),
        }
    }

    /// Report a failed command.
    pub(crate) fn error(&self, err: &dyn std::error::Error) {
        self.line(&self.red, &format!("Error: {err}"));
    }

    /// Report an article written to `dest`.
    pub(crate) fn rendered(&self, input: &Path, style: RenderStyle, dest: &Path) {
        self.line(
            &self.green,
            &format!(
                "Rendered {} ({style} style) to {}",
                input.display(),
                dest.display()
            ),
        );
    }

    /// Print the plan for `input`: heading lines, strategy and anchors.
    pub(crate) fn plan(&self, input: &Path, line_count: usize, plan: &InsertionPlan) {
        self.line(
            &self.cyan_bold,
            &format!("{} ({line_count} lines)", input.display()),
        );
        for row in plan_rows(plan) {
            let _ = self.term.write_line(&row);
        }
    }

    /// Warn when images did not get an anchor and end up after the last line.
    pub(crate) fn appended_images(&self, image_count: usize, plan: &InsertionPlan) {
        let appended = appended_count(image_count, plan);
        if appended > 0 {
            self.line(
                &self.yellow,
                &format!("{appended} image(s) appended after the last line"),
            );
        }
    }

    fn line(&self, style: &Style, msg: &str) {
        let _ = self.term.write_line(&style.apply_to(msg).to_string());
    }
}

/// Images without an anchor of their own.
fn appended_count(image_count: usize, plan: &InsertionPlan) -> usize {
    image_count.saturating_sub(plan.anchors.len())
}

fn plan_rows(plan: &InsertionPlan) -> [String; 3] {
    let strategy = match plan.strategy {
        PlacementStrategy::HeadingAnchored => "before headings",
        PlacementStrategy::EvenlySpaced => "evenly spaced",
    };
    [
        format!("Headings: {}", join_indices(&plan.headings)),
        format!("Strategy: {strategy}"),
        format!("Anchors:  {}", join_indices(&plan.anchors)),
    ]
}

fn join_indices(indices: &[usize]) -> String {
    if indices.is_empty() {
        return "-".to_owned();
    }
    indices
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lines(total: usize, headings: &[usize]) -> Vec<String> {
        (0..total)
            .map(|i| {
                if headings.contains(&i) {
                    format!("## H{i}")
                } else {
                    format!("line {i}")
                }
            })
            .collect()
    }

    #[test]
    fn test_plan_rows_heading_anchored() {
        let plan = InsertionPlan::compute(&lines(20, &[0, 5, 10, 15, 18]), 2);
        assert_eq!(
            plan_rows(&plan),
            [
                "Headings: 0, 5, 10, 15, 18".to_owned(),
                "Strategy: before headings".to_owned(),
                "Anchors:  5, 10".to_owned(),
            ]
        );
    }

    #[test]
    fn test_plan_rows_without_images() {
        let plan = InsertionPlan::compute(&lines(10, &[]), 0);
        assert_eq!(
            plan_rows(&plan),
            [
                "Headings: -".to_owned(),
                "Strategy: evenly spaced".to_owned(),
                "Anchors:  -".to_owned(),
            ]
        );
    }

    #[test]
    fn test_appended_count() {
        let plan = InsertionPlan::compute(&lines(20, &[0, 5, 10, 15, 18]), 5);
        assert_eq!(appended_count(5, &plan), 2);
        assert_eq!(appended_count(3, &plan), 0);
    }
}
