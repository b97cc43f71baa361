//! Report rendering as plain text or HTML fragments.
//!
//! Rendering is streamed through a [`Renderer`] so that each section reaches
//! the output as soon as its data is known; [`render`] composes the same
//! pieces into a string for a single command record.

use std::io::Write;

use itertools::Itertools;

use crate::command_records::{CommandRecord, InvocationResult};
use crate::error::Result;

const HTML_LINE_BREAK: &str = "<br />";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    #[default]
    Plain,
    Html,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    pub mode: RenderMode,
    /// Suppresses descriptive and progress lines. Captured output is always written.
    pub quiet: bool,
}

impl RenderOptions {
    pub fn new(html: bool, quiet: bool) -> Self {
        let mode = if html {
            RenderMode::Html
        } else {
            RenderMode::Plain
        };

        Self { mode, quiet }
    }
}

pub struct Renderer<W: Write> {
    out: W,
    options: RenderOptions,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W, options: RenderOptions) -> Self {
        Self { out, options }
    }

    /// Writes the title and lookup line shown once per run.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn preamble(&mut self, region: &str, command_id: &str) -> Result<()> {
        if self.options.mode == RenderMode::Html {
            write!(self.out, "<h1>{region} - {command_id}</h1>")?;
        }

        if !self.options.quiet {
            writeln!(self.out, "Looking for command '{command_id}' in '{region}'")?;
        }

        Ok(())
    }

    /// Writes the instance index (HTML only) and the command comment.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn command(&mut self, record: &CommandRecord) -> Result<()> {
        if self.options.mode == RenderMode::Html {
            let items = record
                .instance_ids()
                .iter()
                .map(|id| format!("<li><a href='#{id}'>{id}</a></li>"))
                .join("");
            writeln!(self.out, "<ul>")?;
            writeln!(self.out, "{items}</ul>")?;
        }

        if !self.options.quiet {
            if let Some(comment) = &record.comment {
                writeln!(self.out, "{comment}")?;
            }
        }

        Ok(())
    }

    /// Writes the heading that precedes an instance's output.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn instance(&mut self, instance_id: &str) -> Result<()> {
        match self.options.mode {
            RenderMode::Html => write!(self.out, "<h3 id='{instance_id}'>{instance_id}</h3>")?,
            RenderMode::Plain if !self.options.quiet => {
                writeln!(self.out, "Getting details for {instance_id}")?;
            }
            RenderMode::Plain => {}
        }

        Ok(())
    }

    /// Writes the captured standard output of one invocation.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output fails.
    pub fn output(&mut self, invocation: &InvocationResult) -> Result<()> {
        let standard_output = invocation.standard_output_or_empty();
        match self.options.mode {
            RenderMode::Html => {
                writeln!(self.out, "{}", standard_output.replace('\n', HTML_LINE_BREAK))?;
                writeln!(self.out, "<hr />")?;
            }
            RenderMode::Plain => writeln!(self.out, "{standard_output}")?,
        }

        // Keep what was rendered visible if a later lookup fails
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Renders one command record and its invocations.
///
/// Invocations are written in the order given, each under a heading for its
/// own instance ID.
///
/// # Errors
///
/// Returns an error if writing to the in-memory buffer fails.
pub fn render(
    options: RenderOptions,
    record: &CommandRecord,
    invocations: &[InvocationResult],
) -> Result<String> {
    let mut renderer = Renderer::new(Vec::new(), options);

    renderer.command(record)?;
    for invocation in invocations {
        renderer.instance(&invocation.instance_id)?;
        renderer.output(invocation)?;
    }

    Ok(String::from_utf8_lossy(&renderer.into_inner()).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command_records::TargetGroup;

    fn record(comment: Option<&str>, targets: Vec<TargetGroup>) -> CommandRecord {
        CommandRecord {
            id: "cmd-1".to_string(),
            comment: comment.map(ToString::to_string),
            targets,
        }
    }

    fn invocation(instance_id: &str, output: &str) -> InvocationResult {
        InvocationResult {
            instance_id: instance_id.to_string(),
            standard_output: Some(output.to_string()),
            status: Some("Success".to_string()),
        }
    }

    fn two_groups() -> CommandRecord {
        record(
            Some("check disks"),
            vec![
                TargetGroup::new(Some("tag:Role"), &["i1", "i2"]),
                TargetGroup::new(Some("tag:Env"), &["i3"]),
            ],
        )
    }

    fn invocations() -> Vec<InvocationResult> {
        vec![
            invocation("i1", "disk ok\n/dev/sda1 40%"),
            invocation("i2", "disk ok"),
            invocation("i3", "<b>full</b>\n\n"),
        ]
    }

    #[test]
    fn test_plain_report() {
        let report =
            render(RenderOptions::new(false, false), &two_groups(), &invocations()).unwrap();
        assert_eq!(
            report,
            "check disks\n\
             Getting details for i1\n\
             disk ok\n/dev/sda1 40%\n\
             Getting details for i2\n\
             disk ok\n\
             Getting details for i3\n\
             <b>full</b>\n\n\n"
        );
    }

    #[test]
    fn test_html_report() {
        let report =
            render(RenderOptions::new(true, false), &two_groups(), &invocations()).unwrap();
        assert_eq!(
            report,
            "<ul>\n\
             <li><a href='#i1'>i1</a></li><li><a href='#i2'>i2</a></li><li><a href='#i3'>i3</a></li></ul>\n\
             check disks\n\
             <h3 id='i1'>i1</h3>disk ok<br />/dev/sda1 40%\n<hr />\n\
             <h3 id='i2'>i2</h3>disk ok\n<hr />\n\
             <h3 id='i3'>i3</h3><b>full</b><br /><br />\n<hr />\n"
        );
    }

    #[test]
    fn test_empty_targets() {
        let empty = record(Some("nothing to do"), vec![]);

        let plain = render(RenderOptions::new(false, false), &empty, &[]).unwrap();
        assert_eq!(plain, "nothing to do\n");

        let html = render(RenderOptions::new(true, false), &empty, &[]).unwrap();
        assert_eq!(html, "<ul>\n</ul>\nnothing to do\n");
    }

    #[test]
    fn test_missing_comment_is_omitted() {
        let report = render(RenderOptions::new(false, false), &record(None, vec![]), &[]).unwrap();
        assert!(report.is_empty());
    }

    #[test]
    fn test_html_index_and_sections_share_order() {
        let report = render(RenderOptions::new(true, true), &two_groups(), &invocations()).unwrap();
        let positions: Vec<usize> = ["#i1'", "#i2'", "#i3'", "id='i1'", "id='i2'", "id='i3'"]
            .iter()
            .map(|needle| report.find(needle).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_plain_output_is_verbatim() {
        let report =
            render(RenderOptions::new(false, true), &two_groups(), &invocations()).unwrap();
        for invocation in invocations() {
            assert!(report.contains(invocation.standard_output_or_empty()));
        }
    }

    #[test]
    fn test_html_replaces_only_newlines() {
        let report = render(RenderOptions::new(true, true), &two_groups(), &invocations()).unwrap();
        for invocation in invocations() {
            let expected = invocation.standard_output_or_empty().replace('\n', "<br />");
            assert!(report.contains(&expected));
        }
        assert!(report.contains("<b>full</b>"));
    }

    #[test]
    fn test_quiet_removes_only_descriptive_lines() {
        let loud = render(RenderOptions::new(false, false), &two_groups(), &invocations()).unwrap();
        let quiet = render(RenderOptions::new(false, true), &two_groups(), &invocations()).unwrap();

        let expected: Vec<&str> = loud
            .lines()
            .filter(|line| *line != "check disks" && !line.starts_with("Getting details for "))
            .collect();
        assert_eq!(quiet.lines().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_quiet_html_keeps_headings() {
        let quiet = render(RenderOptions::new(true, true), &two_groups(), &invocations()).unwrap();
        assert!(!quiet.contains("check disks"));
        assert!(quiet.contains("<h3 id='i2'>i2</h3>"));
    }

    #[test]
    fn test_absent_output_renders_empty() {
        let mut empty = invocation("i1", "");
        empty.standard_output = None;
        let report = render(
            RenderOptions::new(false, true),
            &record(None, vec![TargetGroup::new(None, &["i1"])]),
            &[empty],
        )
        .unwrap();
        assert_eq!(report, "\n");
    }

    #[test]
    fn test_preamble() {
        let mut renderer = Renderer::new(Vec::new(), RenderOptions::new(true, false));
        renderer.preamble("ap-southeast-2", "cmd-1").unwrap();
        assert_eq!(
            String::from_utf8(renderer.into_inner()).unwrap(),
            "<h1>ap-southeast-2 - cmd-1</h1>Looking for command 'cmd-1' in 'ap-southeast-2'\n"
        );

        let mut renderer = Renderer::new(Vec::new(), RenderOptions::new(false, true));
        renderer.preamble("ap-southeast-2", "cmd-1").unwrap();
        assert!(renderer.into_inner().is_empty());
    }

    #[test]
    fn test_render_is_deterministic() {
        let options = RenderOptions::new(true, false);
        assert_eq!(
            render(options, &two_groups(), &invocations()).unwrap(),
            render(options, &two_groups(), &invocations()).unwrap()
        );
    }
}
