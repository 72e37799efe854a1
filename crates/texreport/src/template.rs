//! LaTeX markup for report blocks
//!
//! All markup syntax lives here. The [`Template`] trait carries the
//! standard rendering as default methods so alternative styles only need
//! to override the blocks they change.

use crate::figure::FigureReference;
use crate::options::ReportOptions;
use crate::table::Table;
use std::path::Path;

/// Caption and placement of a figure or table
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlockStyle {
    pub caption: Option<String>,
    /// Emit a real LaTeX float (`[H]` placement) instead of an inline
    /// minipage
    pub float: bool,
}

impl BlockStyle {
    pub fn caption(caption: impl Into<String>) -> Self {
        Self {
            caption: Some(caption.into()),
            float: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SectionLevel {
    #[default]
    Section,
    Subsection,
    Subsubsection,
}

impl SectionLevel {
    pub fn command(self) -> &'static str {
        match self {
            SectionLevel::Section => "section",
            SectionLevel::Subsection => "subsection",
            SectionLevel::Subsubsection => "subsubsection",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SectionOptions {
    /// Start a new page before the heading
    pub newpage: bool,
    /// Unnumbered heading
    pub starred: bool,
}

/// Markup for every block a report can contain
pub trait Template {
    fn head(&self, options: &ReportOptions, date: &str) -> String {
        let margins = &options.margins;
        format!(
            r"\documentclass[{paper},{size}pt]{{article}}
\usepackage{{graphicx}}
\usepackage{{amsmath}}
\usepackage{{amssymb}}
\usepackage[{paper},{orientation},left={left},right={right},top={top},bottom={bottom}]{{geometry}}
\usepackage{{caption}}
\usepackage{{booktabs}}
\usepackage{{float}}

\title{{{title}}}
\author{{{author}}}
\date{{{date}}}
\begin{{document}}
\maketitle
",
            paper = options.paper,
            size = options.font_size,
            orientation = options.orientation,
            left = margins.left,
            right = margins.right,
            top = margins.top,
            bottom = margins.bottom,
            title = options.title,
            author = options.author,
            date = date,
        )
    }

    fn tail(&self) -> String {
        "\n\\end{document}\n".to_string()
    }

    fn figure(&self, reference: &FigureReference, style: &BlockStyle) -> String {
        let (pre, post) = float_wrapper("figure", style);
        format!(
            "{}\n  \\includegraphics[{}={}]{{{}}}\n{}",
            pre,
            reference.dimension.keyword(),
            reference.size,
            latex_path(&reference.path),
            post
        )
    }

    fn section(&self, level: SectionLevel, title: &str, options: SectionOptions) -> String {
        let star = if options.starred { "*" } else { "" };
        let heading = format!("\n\\{}{}{{{}}}\n", level.command(), star, title);
        if options.newpage {
            format!("\\newpage\n{}", heading)
        } else {
            heading
        }
    }

    fn table(&self, table: &Table, style: &BlockStyle) -> String {
        let (pre, post) = float_wrapper("table", style);
        let mut lines = vec![
            pre,
            format!("\\begin{{tabular}}{{{}}}", table.column_spec()),
            "  \\toprule".to_string(),
        ];
        if let Some(header) = &table.header {
            lines.push(format!("  {}\\\\", header.join(" & ")));
            lines.push("  \\midrule".to_string());
        }
        for row in &table.rows {
            lines.push(format!("  {}\\\\", row.join(" & ")));
        }
        lines.push("  \\bottomrule".to_string());
        lines.push("\\end{tabular}".to_string());
        lines.push(post);
        lines.join("\n")
    }

    fn equation(&self, content: &str) -> String {
        format!("\\begin{{equation}}\n{}\n\\end{{equation}}\n", content)
    }
}

/// The default report style
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardTemplate;

impl Template for StandardTemplate {}

/// Opening and closing markup around a figure or table body.
///
/// Non-floating blocks are wrapped in a full-width minipage so they stay
/// exactly where they were added.
pub fn float_wrapper(kind: &str, style: &BlockStyle) -> (String, String) {
    let mut pre = vec![String::new()];
    let mut post = Vec::new();
    if style.float {
        pre.push(format!("\\begin{{{}}}[H]", kind));
        pre.push("  \\centering".to_string());
        if let Some(caption) = &style.caption {
            post.push(format!("  \\caption{{{}}}", caption));
        }
        post.push(format!("\\end{{{}}}", kind));
    } else {
        pre.push("\\noindent%".to_string());
        pre.push("\\begin{minipage}{\\linewidth}%".to_string());
        pre.push("\\vspace{0.3cm}".to_string());
        pre.push("\\makebox[\\linewidth]{%".to_string());
        post.push("}".to_string());
        if let Some(caption) = &style.caption {
            post.push(format!("\\captionof{{{}}}{{{}}}", kind, caption));
        }
        post.push("\\vspace{0.3cm}".to_string());
        post.push("\\end{minipage}".to_string());
    }
    post.push(String::new());
    (pre.join("\n"), post.join("\n"))
}

/// Paths in markup always use forward slashes
pub fn latex_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

// =============================================================================
// Block helpers
// =============================================================================

pub fn make_section(title: &str, options: SectionOptions) -> String {
    StandardTemplate.section(SectionLevel::Section, title, options)
}

pub fn make_subsection(title: &str, options: SectionOptions) -> String {
    StandardTemplate.section(SectionLevel::Subsection, title, options)
}

pub fn make_subsubsection(title: &str, options: SectionOptions) -> String {
    StandardTemplate.section(SectionLevel::Subsubsection, title, options)
}

pub fn make_equation(content: &str) -> String {
    StandardTemplate.equation(content)
}

pub fn make_table(table: &Table, style: &BlockStyle) -> String {
    StandardTemplate.table(table, style)
}

pub fn make_figure(reference: &FigureReference, style: &BlockStyle) -> String {
    StandardTemplate.figure(reference, style)
}

/// Bold text
pub fn bold(text: &str) -> String {
    format!(" {{\\bf {}}}", text)
}

/// Italic text
pub fn italic(text: &str) -> String {
    format!(" {{\\it {}}}", text)
}
