//! End-to-end pipeline runs over the upload path (no network).

use wordviz::{ChartKind, RunConfig, TextSource};

#[test]
fn uploaded_html_document_runs_end_to_end() {
    let html = "<html><body><p>我们喜欢猫  我们喜欢狗</p></body></html>";
    let config = RunConfig::new(
        TextSource::Upload(html.as_bytes().to_vec()),
        5,
        ChartKind::Bar,
    );

    let output = wordviz::run(&config).expect("pipeline should run");

    // Preview keeps the words, drops the markup, collapses whitespace.
    assert!(output.preview.contains("我们喜欢猫"));
    assert!(!output.preview.contains('<'));
    assert!(!output.preview.contains("  "));

    // CJK routing, capped ranking.
    assert!(!output.word_counts.is_empty());
    assert!(output.word_counts.len() <= 5);
    let repeated = output
        .word_counts
        .iter()
        .find(|(word, _)| word == "我们")
        .expect("我们 should be ranked");
    assert_eq!(repeated.1, 2);

    // Chart present and shaped for the bar style.
    let chart = output.chart.expect("chart for non-empty counts");
    assert_eq!(chart["series"][0]["type"], "bar");
}

#[test]
fn empty_upload_yields_absence_not_errors() {
    let config = RunConfig::new(TextSource::Upload(Vec::new()), 20, ChartKind::Pie);
    let output = wordviz::run(&config).expect("empty input is not an error");
    assert!(output.preview.is_empty());
    assert!(output.word_counts.is_empty());
    assert!(output.chart.is_none());
}

#[test]
fn counts_never_come_from_the_preview_variant() {
    // Internal whitespace: the preview keeps a separator, the counting path
    // deletes it, so the ranked token shows the fused form.
    let config = RunConfig::new(
        TextSource::Upload("a  b".as_bytes().to_vec()),
        20,
        ChartKind::Line,
    );
    let output = wordviz::run(&config).expect("pipeline should run");
    assert_eq!(output.preview, "a\nb");
    assert_eq!(output.word_counts, vec![("ab".to_string(), 1)]);
}
