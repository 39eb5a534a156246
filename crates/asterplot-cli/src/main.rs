use asterplot_render::{LayoutOptions, SvgRenderOptions, layout_gallery, render_gallery_svg};
use serde::Serialize;
use std::path::Path;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Data(asterplot_core::Error),
    Render(asterplot_render::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Data(err) => write!(f, "{err}"),
            CliError::Render(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<asterplot_core::Error> for CliError {
    fn from(value: asterplot_core::Error) -> Self {
        Self::Data(value)
    }
}

impl From<asterplot_render::Error> for CliError {
    fn from(value: asterplot_render::Error) -> Self {
        Self::Render(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    Load,
    Layout,
    #[default]
    Render,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    data_dir: Option<String>,
    pretty: bool,
    charts_per_row: Option<usize>,
    diagram_id: Option<String>,
    out: Option<String>,
}

fn usage() -> &'static str {
    "asterplot-cli\n\
\n\
USAGE:\n\
  asterplot-cli load [--pretty] <data-dir>\n\
  asterplot-cli layout [--pretty] [--charts-per-row <n>] <data-dir>\n\
  asterplot-cli [render] [--charts-per-row <n>] [--id <diagram-id>] [--out <path>] <data-dir>\n\
\n\
NOTES:\n\
  - <data-dir> must contain author_info.json, author_order.json and data_other.csv.\n\
  - load prints the merged dataset as JSON; layout prints the gallery layout as JSON.\n\
  - render prints SVG to stdout by default; use --out to write a file.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1).peekable();
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "load" => args.command = Command::Load,
            "layout" => args.command = Command::Layout,
            "render" => args.command = Command::Render,
            "--pretty" => args.pretty = true,
            "--charts-per-row" => {
                let Some(n) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                let n = n.parse::<usize>().map_err(|_| CliError::Usage(usage()))?;
                if n == 0 {
                    return Err(CliError::Usage(usage()));
                }
                args.charts_per_row = Some(n);
            }
            "--id" => {
                let Some(id) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.diagram_id = Some(id.clone());
            }
            "--out" => {
                let Some(out) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out = Some(out.clone());
            }
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            path => {
                if args.data_dir.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.data_dir = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    Ok(())
}

fn write_text(text: &str, out: Option<&str>) -> Result<(), CliError> {
    match out {
        None => {
            print!("{text}");
            Ok(())
        }
        Some(path) => {
            std::fs::write(path, text)?;
            Ok(())
        }
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let Some(data_dir) = args.data_dir.as_deref() else {
        return Err(CliError::Usage(usage()));
    };
    let dataset = asterplot_core::load_dataset(Path::new(data_dir))?;

    let layout_opts = LayoutOptions {
        charts_per_row: args
            .charts_per_row
            .unwrap_or(LayoutOptions::default().charts_per_row),
    };

    match args.command {
        Command::Load => write_json(&dataset, args.pretty),
        Command::Layout => {
            let layout = layout_gallery(&dataset, &layout_opts)?;
            write_json(&layout, args.pretty)
        }
        Command::Render => {
            let layout = layout_gallery(&dataset, &layout_opts)?;
            let svg_options = SvgRenderOptions {
                diagram_id: args.diagram_id.clone(),
            };
            let svg = render_gallery_svg(&layout, &svg_options);
            write_text(&svg, args.out.as_deref())
        }
    }
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    match run(args) {
        Ok(()) => {}
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
