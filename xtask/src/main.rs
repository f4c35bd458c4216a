use camino::{Utf8Path, Utf8PathBuf};
use miette::{Context, IntoDiagnostic};
use penscript::{Program, SvgOptions, SvgSurface};
use rayon::prelude::*;
use std::fs;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: cargo xtask <command>");
        eprintln!("Commands:");
        eprintln!("  check <file>...          Syntax-check programs");
        eprintln!("  render <file> [out.svg]  Run a program and write SVG");
        eprintln!("  gallery                  Render demos/*.txt into gallery.html");
        std::process::exit(1);
    }

    match args[1].as_str() {
        "check" => check(&args[2..]),
        "render" => match &args[2..] {
            [input] => render(Utf8Path::new(input), &Utf8Path::new(input).with_extension("svg")),
            [input, output] => render(Utf8Path::new(input), Utf8Path::new(output)),
            _ => {
                eprintln!("Usage: cargo xtask render <file> [out.svg]");
                std::process::exit(1);
            }
        },
        "gallery" => gallery(),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            std::process::exit(1);
        }
    }
}

/// Report every invalid line of every file, failing if any was found
fn check(files: &[String]) -> miette::Result<()> {
    let mut failures = 0;
    for file in files {
        let program = Program::load(file)?;
        for error in program.validate().into_iter().filter_map(Result::err) {
            eprintln!("{file}: {:?}", miette::Report::new(error));
            failures += 1;
        }
    }

    if failures > 0 {
        miette::bail!("{failures} invalid line(s)");
    }
    println!("{} file(s) ok", files.len());
    Ok(())
}

fn render(input: &Utf8Path, output: &Utf8Path) -> miette::Result<()> {
    let svg = render_file(input)?;
    fs::write(output, svg)
        .into_diagnostic()
        .wrap_err_with(|| format!("writing {output}"))?;
    println!("Wrote {output}");
    Ok(())
}

fn render_file(path: &Utf8Path) -> miette::Result<String> {
    let program = Program::load(path)?;
    let mut surface = SvgSurface::new(SvgOptions::default());
    program.run(&mut surface)?;
    Ok(surface.to_svg())
}

struct Entry {
    name: String,
    source: String,
    output: Result<String, String>,
}

fn gallery() -> miette::Result<()> {
    let root = Utf8Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Utf8Path::to_path_buf)
        .unwrap_or_else(|| Utf8PathBuf::from(".."));
    let demos = root.join("demos");
    let output_path = root.join("gallery.html");

    let mut paths: Vec<Utf8PathBuf> = demos
        .read_dir_utf8()
        .into_diagnostic()
        .wrap_err_with(|| format!("reading {demos}"))?
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|p| p.extension() == Some("txt"))
        .collect();
    paths.sort();

    let entries: Vec<Entry> = paths
        .par_iter()
        .map(|path| Entry {
            name: path.file_stem().unwrap_or(path.as_str()).to_string(),
            source: fs::read_to_string(path).unwrap_or_default(),
            output: render_file(path).map_err(|e| format!("{e:?}")),
        })
        .collect();

    let failed = entries.iter().filter(|e| e.output.is_err()).count();

    let mut html = String::new();
    html.push_str(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>penscript gallery</title>
    <style>
        body { font-family: system-ui, sans-serif; margin: 0; background: #eee; color: #333; }
        .page { max-width: 1000px; margin: 0 auto; padding: 24px; }
        h1 { font-weight: 600; font-size: 20px; margin: 0 0 24px 0; }
        .card { background: white; border-radius: 8px; box-shadow: 0 1px 3px rgba(0,0,0,0.08); margin-bottom: 16px; overflow: hidden; }
        .card-header { padding: 12px 16px; border-bottom: 1px solid #eee; background: #fafafa; font-weight: 600; font-size: 13px; }
        .card-body { display: grid; grid-template-columns: 1fr 2fr; gap: 12px; padding: 12px 16px; }
        .source { background: #f8f8f8; border: 1px solid #e0e0e0; padding: 8px 10px; font-family: monospace; font-size: 11px; white-space: pre-wrap; border-radius: 4px; }
        .svg-container svg { max-width: 100%; height: auto; border: 1px solid #e5e5e5; }
        .error { color: #991b1b; font-family: monospace; font-size: 11px; white-space: pre-wrap; background: #fef2f2; padding: 12px; }
    </style>
</head>
<body>
<div class="page">
"#,
    );
    html.push_str(&format!(
        "<h1>{} program(s), {} failed</h1>\n",
        entries.len(),
        failed
    ));

    for entry in &entries {
        let rendered = match &entry.output {
            Ok(svg) => format!(r#"<div class="svg-container">{svg}</div>"#),
            Err(e) => format!(r#"<div class="error">{}</div>"#, html_escape(e)),
        };
        html.push_str(&format!(
            r#"
<div class="card" id="{name}">
    <div class="card-header">{name}</div>
    <div class="card-body">
        <div class="source">{source}</div>
        {rendered}
    </div>
</div>
"#,
            name = html_escape(&entry.name),
            source = html_escape(&entry.source),
        ));
    }

    html.push_str("</div>\n</body></html>\n");

    fs::write(&output_path, html)
        .into_diagnostic()
        .wrap_err_with(|| format!("writing {output_path}"))?;
    println!("Generated gallery at: {output_path}");
    Ok(())
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
