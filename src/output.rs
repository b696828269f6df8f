use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::PathBuf;
use std::sync::Arc;

use crate::colors::Colors;
use crate::config::OutputFormat;
use crate::properties::PropertyTable;

/// Resolved properties for one file.
#[derive(Debug, Clone)]
pub struct Report {
    pub path: PathBuf,
    pub properties: Arc<PropertyTable>,
}

pub struct OutputContext {
    pub format: OutputFormat,
    pub colors: Colors,
    pub show_progress: bool,
}

impl OutputContext {
    pub fn new(format: OutputFormat, use_colors: bool, show_progress: bool) -> Self {
        Self {
            format,
            colors: Colors::new(use_colors),
            show_progress,
        }
    }
}

/// Render reports in the configured format.
pub fn render(reports: &[Report], ctx: &OutputContext) -> Result<String, toml::ser::Error> {
    match ctx.format {
        OutputFormat::Plain => Ok(render_plain(reports, &ctx.colors)),
        OutputFormat::Toml => render_toml(reports),
    }
}

/// `key=value` lines; with more than one file each block gets a `[path]` header.
fn render_plain(reports: &[Report], colors: &Colors) -> String {
    let with_headers = reports.len() > 1;
    let mut out = String::new();

    for report in reports {
        if with_headers {
            let _ = writeln!(out, "{}", colors.header(report.path.display()));
        }
        for (key, value) in report.properties.iter() {
            let _ = writeln!(out, "{}={value}", colors.key(key));
        }
    }

    out
}

fn render_toml(reports: &[Report]) -> Result<String, toml::ser::Error> {
    let tables: BTreeMap<String, &PropertyTable> = reports
        .iter()
        .map(|r| (r.path.display().to_string(), r.properties.as_ref()))
        .collect();
    toml::to_string(&tables)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::PropertyValue;

    fn report(path: &str, entries: &[(&str, PropertyValue)]) -> Report {
        Report {
            path: PathBuf::from(path),
            properties: Arc::new(entries.iter().cloned().collect()),
        }
    }

    fn plain() -> OutputContext {
        OutputContext::new(OutputFormat::Plain, false, false)
    }

    #[test]
    fn test_plain_single_file_has_no_header() {
        let reports = [report(
            "/p/a.md",
            &[
                ("indent_style", "space".into()),
                ("trim_trailing_whitespace", false.into()),
            ],
        )];

        let out = render(&reports, &plain()).unwrap();
        assert_eq!(out, "indent_style=space\ntrim_trailing_whitespace=false\n");
    }

    #[test]
    fn test_plain_multiple_files_have_headers() {
        let reports = [
            report("/p/a.md", &[("k", "1".into())]),
            report("/p/b.c", &[]),
        ];

        let out = render(&reports, &plain()).unwrap();
        assert_eq!(out, "[/p/a.md]\nk=1\n[/p/b.c]\n");
    }

    #[test]
    fn test_plain_colored_keys() {
        let reports = [report("/p/a", &[("k", "v".into())])];
        let ctx = OutputContext::new(OutputFormat::Plain, true, false);

        let out = render(&reports, &ctx).unwrap();
        assert!(out.contains("\x1b[33mk\x1b[0m=v"));
    }

    #[test]
    fn test_toml_keeps_types() {
        let reports = [report(
            "/p/a.py",
            &[
                ("indent_size", PropertyValue::Integer(4)),
                ("indent_style", "space".into()),
                ("insert_final_newline", true.into()),
            ],
        )];
        let ctx = OutputContext::new(OutputFormat::Toml, false, false);

        let out = render(&reports, &ctx).unwrap();
        let parsed: toml::Table = toml::from_str(&out).unwrap();
        let table = parsed["/p/a.py"].as_table().unwrap();
        assert_eq!(table["indent_size"].as_integer(), Some(4));
        assert_eq!(table["indent_style"].as_str(), Some("space"));
        assert_eq!(table["insert_final_newline"].as_bool(), Some(true));
    }
}
