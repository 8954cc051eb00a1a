use std::fs;
use std::io::{Write, stdin, stdout};
use std::path::Path;

use anyhow::{Context, Result};
use itertools::Itertools;
use serde_json::Value;
use wordviz::{ChartKind, DEFAULT_WORDS, MAX_WORDS, MIN_WORDS, RunConfig, TextSource, cloud, export};

const OUT_DIR: &str = "wordviz-out";
const CHART_FILE: &str = "chart.html";
const CLOUD_FILE: &str = "wordcloud.png";
const DOWNLOAD_FILENAME: &str = "news.txt";
const DOWNLOAD_LABEL: &str = "下载";
const PREVIEW_LINES: usize = 8;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    println!("词云程序 (word frequency visualizer)");
    println!("------------------------------------");

    loop {
        let Some(source) = prompt_source()? else {
            break;
        };
        let num_words = prompt_num_words()?;
        let chart_kind = prompt_chart_kind()?;
        let config = RunConfig::new(source, num_words, chart_kind);

        // Transport errors are fatal for the run, not for the session.
        match wordviz::run(&config) {
            Ok(output) => display(&output)?,
            Err(err) => eprintln!("error: {err}"),
        }
        println!();
    }

    Ok(())
}

fn display(output: &wordviz::RunOutput) -> Result<()> {
    if output.word_counts.is_empty() {
        println!("(no words to rank)");
    } else {
        println!("top words:");
        let table = output
            .word_counts
            .iter()
            .map(|(word, count)| format!("  {word:<12} {count}"))
            .join("\n");
        println!("{table}");
    }

    fs::create_dir_all(OUT_DIR).with_context(|| format!("create {OUT_DIR}"))?;

    match &output.chart {
        Some(option) => {
            let path = Path::new(OUT_DIR).join(CHART_FILE);
            fs::write(&path, chart_html(option)).with_context(|| format!("write {path:?}"))?;
            println!("chart:      {}", path.display());
        }
        None => println!("chart:      (nothing to draw)"),
    }

    let cloud_path = Path::new(OUT_DIR).join(CLOUD_FILE);
    match cloud::render_to_png(&output.source_text, &cloud_path)? {
        Some(path) => println!("word cloud: {}", path.display()),
        None => println!("word cloud: (no text)"),
    }

    if !output.preview.is_empty() {
        println!("preview:");
        for line in output.preview.lines().take(PREVIEW_LINES) {
            println!("  {line}");
        }
    }

    if prompt("save text as download link? [y/N] ")?.eq_ignore_ascii_case("y") {
        let link = export::text_download_link(&output.preview, DOWNLOAD_FILENAME, DOWNLOAD_LABEL);
        println!("{link}");
    }

    Ok(())
}

/// Minimal HTML display surface: the chart option handed to ECharts.
fn chart_html(option: &Value) -> String {
    format!(
        r#"<!doctype html>
<html>
<head><meta charset="utf-8"><title>词频统计</title></head>
<body>
<div id="chart" style="width:900px;height:600px;"></div>
<script src="https://cdn.jsdelivr.net/npm/echarts@5/dist/echarts.min.js"></script>
<script>
echarts.init(document.getElementById('chart')).setOption({option});
</script>
</body>
</html>
"#
    )
}

/// Returns `None` when the user quits.
fn prompt_source() -> Result<Option<TextSource>> {
    println!("input: 1) url  2) file  q) quit");
    loop {
        let choice = prompt("> ")?;
        match choice.as_str() {
            "1" => {
                let url = prompt("url: ")?;
                if url.is_empty() {
                    continue;
                }
                return Ok(Some(TextSource::Url(url)));
            }
            "2" => {
                let path = prompt("file path: ")?;
                match fs::read(&path) {
                    Ok(bytes) => return Ok(Some(TextSource::Upload(bytes))),
                    Err(err) => eprintln!("could not read {path}: {err}"),
                }
            }
            "q" | "quit" | "exit" => return Ok(None),
            _ => println!("input: 1) url  2) file  q) quit"),
        }
    }
}

fn prompt_num_words() -> Result<usize> {
    let line = prompt(&format!(
        "word count {MIN_WORDS}-{MAX_WORDS} [{DEFAULT_WORDS}]: "
    ))?;
    if line.is_empty() {
        return Ok(DEFAULT_WORDS);
    }
    // Out-of-range values are clamped by RunConfig.
    Ok(line.parse().unwrap_or(DEFAULT_WORDS))
}

fn prompt_chart_kind() -> Result<ChartKind> {
    let menu = ChartKind::ALL
        .iter()
        .enumerate()
        .map(|(i, kind)| format!("{}) {} {}", i + 1, kind.label(), kind.name()))
        .join("  ");
    println!("chart style: {menu}");
    loop {
        let line = prompt("> ")?;
        if line.is_empty() {
            return Ok(ChartKind::Pie);
        }
        if let Ok(index) = line.parse::<usize>() {
            if (1..=ChartKind::ALL.len()).contains(&index) {
                return Ok(ChartKind::ALL[index - 1]);
            }
        }
        if let Ok(kind) = line.parse::<ChartKind>() {
            return Ok(kind);
        }
        println!("pick 1-{} or a style name", ChartKind::ALL.len());
    }
}

fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    stdout().flush()?;
    let mut line = String::new();
    stdin().read_line(&mut line).context("read stdin")?;
    Ok(line.trim().to_string())
}
