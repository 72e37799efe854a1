use std::path::Path;
use tempfile::TempDir;
use texreport::template::{bold, italic, make_equation, make_section};
use texreport::*;

struct Square(f64);

impl Renderable for Square {
    fn size_inches(&self) -> (f64, f64) {
        (self.0, self.0)
    }

    fn set_size_inches(&mut self, width: f64, _height: f64) {
        self.0 = width;
    }

    fn save(&mut self, path: &Path, _format: &str) -> Result<()> {
        std::fs::write(path, format!("{}", self.0))?;
        Ok(())
    }
}

fn options(dir: &TempDir) -> ReportOptions {
    ReportOptions {
        file_name: "test".to_string(),
        working_dir: dir.path().join("out"),
        title: "A simple report".to_string(),
        author: "Someone".to_string(),
        date: Some("01.02.2024".to_string()),
        ..Default::default()
    }
}

#[test]
fn test_create_writes_head_and_directories() {
    let dir = TempDir::new().unwrap();
    let report = Report::create(options(&dir)).unwrap();
    assert_eq!(report.tex_path(), dir.path().join("out/test.tex"));
    assert!(dir.path().join("out/figures").is_dir());
    assert_eq!(report.geometry().content_width(), Length::cm(17.0));

    let tex = std::fs::read_to_string(report.close().unwrap()).unwrap();
    assert!(tex.starts_with("\\documentclass[a4paper,10pt]{article}\n"));
    assert!(tex.contains(
        "\\usepackage[a4paper,portrait,left=2cm,right=2cm,top=2cm,bottom=2cm]{geometry}"
    ));
    assert!(tex.contains("\\title{A simple report}\n\\author{Someone}\n\\date{01.02.2024}"));
    assert!(tex.ends_with("\\maketitle\n\n\\end{document}\n"));
}

#[test]
fn test_blocks_are_written_in_order() {
    let dir = TempDir::new().unwrap();
    let mut report = Report::create(options(&dir)).unwrap();

    report
        .add_section("First part $x$", SectionOptions::default())
        .unwrap();
    report.add_text("Lorem ipsum").unwrap();
    report.add_equation("x = 1").unwrap();
    report
        .add_subsection(
            "Results",
            SectionOptions {
                newpage: true,
                starred: true,
            },
        )
        .unwrap();
    report
        .add_subsubsection("Details", SectionOptions::default())
        .unwrap();
    report.add("% raw").unwrap();
    report.add_all(["% one", "% two"]).unwrap();

    let tex = std::fs::read_to_string(report.close().unwrap()).unwrap();
    let body = tex.split("\\maketitle\n").nth(1).unwrap();
    assert_eq!(
        body,
        "\n\\section{First part $x$}\nLorem ipsum\n\
         \\begin{equation}\nx = 1\n\\end{equation}\n\
         \\newpage\n\n\\subsection*{Results}\n\
         \n\\subsubsection{Details}\n\
         % raw\n% one\n% two\n\
         \n\\end{document}\n"
    );
}

#[test]
fn test_table_block() {
    let dir = TempDir::new().unwrap();
    let mut report = Report::create(options(&dir)).unwrap();

    let table = Table::new(vec![
        vec!["1".into(), "2".into()],
        vec!["3".into(), "4".into()],
    ])
    .with_header(vec![bold("a"), italic("b")]);
    report
        .add_table(&table, &BlockStyle::caption("Results"))
        .unwrap();
    assert!(report.add_table(&Table::default(), &BlockStyle::default()).is_err());

    let tex = std::fs::read_to_string(report.close().unwrap()).unwrap();
    assert!(tex.contains(
        "\\begin{tabular}{ll}\n  \\toprule\n   {\\bf a} &  {\\it b}\\\\\n  \\midrule\n  1 & 2\\\\\n  3 & 4\\\\\n  \\bottomrule\n\\end{tabular}\n}\n\\captionof{table}{Results}\n"
    ));
}

#[test]
fn test_figure_block_references_relative_path() {
    let dir = TempDir::new().unwrap();
    let mut report = Report::create(options(&dir)).unwrap();

    let style = BlockStyle {
        caption: Some("A nice plot".to_string()),
        float: true,
    };
    let request = FigureRequest::prebuilt(Square(3.0), SizeSpec::AbsoluteWidth(Length::cm(5.0)))
        .name("plot1");
    let reference = report.add_figure(request, &style).unwrap();
    assert!(reference.rendered());
    assert_eq!(reference.path, dir.path().join("out/figures/plot1.pdf"));
    assert!(reference.path.exists());

    let tex = std::fs::read_to_string(report.close().unwrap()).unwrap();
    assert!(tex.contains(
        "\n\\begin{figure}[H]\n  \\centering\n  \\includegraphics[width=5cm]{figures/plot1.pdf}\n  \\caption{A nice plot}\n\\end{figure}\n"
    ));
}

#[test]
fn test_cached_figure_keeps_requested_size() {
    let dir = TempDir::new().unwrap();

    // First build renders the figure
    let mut report = Report::create(options(&dir)).unwrap();
    let request = FigureRequest::prebuilt(Square(3.0), SizeSpec::WidthRatio(0.8)).name("plot");
    assert!(report.add_figure(request, &BlockStyle::default()).unwrap().rendered());
    report.close().unwrap();

    // Second build reuses the file but emits the new size
    let mut report = Report::create(options(&dir)).unwrap();
    let request = FigureRequest::deferred(
        || -> Result<Square> { panic!("supplier must not run on a cache hit") },
        SizeSpec::WidthRatio(0.4),
    )
    .name("plot");
    let (block, reference) = report.make_figure(request, &BlockStyle::default()).unwrap();
    assert!(!reference.rendered());
    let size = report.geometry().content_width() * 0.4;
    assert_eq!(reference.size, size);
    let expected = format!("[width={}]{{figures/plot.pdf}}", size);
    assert!(block.contains(&expected), "{block}");

    // Forcing everything renders again
    report.set_force_all(true);
    let request = FigureRequest::prebuilt(Square(3.0), SizeSpec::WidthRatio(0.4)).name("plot");
    assert!(report.add_figure(request, &BlockStyle::default()).unwrap().rendered());
}

#[test]
fn test_unnamed_figure_uses_name_source() {
    let dir = TempDir::new().unwrap();
    let mut report = Report::create(options(&dir)).unwrap();
    report.set_name_source(|| "fixed".to_string());

    let request = FigureRequest::prebuilt(Square(1.0), SizeSpec::HeightRatio(0.1)).format("svg");
    let reference = report.add_figure(request, &BlockStyle::default()).unwrap();
    assert_eq!(reference.path, dir.path().join("out/figures/fixed.svg"));
}

#[test]
fn test_invalid_options_are_rejected() {
    let dir = TempDir::new().unwrap();
    let mut options = options(&dir);
    options.margins = PageMargins::uniform(Length::cm(11.0));
    assert!(matches!(Report::create(options), Err(ReportError::Config(_))));
}

#[test]
fn test_block_helpers() {
    assert_eq!(
        make_section("Intro", SectionOptions { newpage: false, starred: true }),
        "\n\\section*{Intro}\n"
    );
    assert_eq!(
        make_equation("a^2 + b^2 = c^2"),
        "\\begin{equation}\na^2 + b^2 = c^2\n\\end{equation}\n"
    );
    assert_eq!(bold("x"), " {\\bf x}");
}
