use super::bare_config;
use helpdoc::{convert, RenderConfig};
use insta::assert_snapshot;
use std::path::PathBuf;

fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"))
}

#[test]
fn title_and_paragraph_at_twenty_columns() {
    let rendered = convert("# Title\n\nHello world.", &bare_config(20));
    assert_eq!(
        rendered.text,
        "1. Title ... |title|\n\
         \n\
         1. TITLE     *title*\n\
         \n\
         Hello world.\n"
    );
    for line in rendered.text.lines() {
        assert!(line.len() <= 20, "line too wide: {line:?}");
    }
}

#[test]
fn list_items_wrap_with_shared_continuation_indent() {
    let source = "- alpha beta gamma\n- delta epsilon\n- zeta eta theta\n";
    let mut config = bare_config(10);
    config.flags.no_toc = true;
    let rendered = convert(source, &config);
    assert_eq!(
        rendered.text,
        "- alpha\n  beta\n  gamma\n- delta\n  epsilon\n- zeta eta\n  theta\n"
    );
}

#[test]
fn nested_list_and_code_inside_item() {
    let source = "1. First\n\n   ```\n   let x = 1;\n   ```\n\n2. Second\n   - inner\n";
    let mut config = bare_config(40);
    config.flags.no_toc = true;
    let rendered = convert(source, &config);
    assert_eq!(
        rendered.text,
        "1. First\n\
         \n\
         \x20  >\n\
         \x20      let x = 1;\n\
         <\n\
         \n\
         2. Second\n\
         \n\
         \x20  - inner\n"
    );
}

#[test]
fn kitchensink_layout() {
    let mut config = RenderConfig::for_help_file("demo.txt");
    config.cols = 40;
    config.description = Some("Demo plugin".to_string());

    let rendered = convert(&fixture("kitchensink.md"), &config);
    assert!(!rendered.text.contains("ignored front matter"));
    assert_snapshot!("kitchensink_help", rendered.text);
}

#[test]
fn rendering_is_deterministic() {
    let source = fixture("kitchensink.md");
    let config = RenderConfig::for_help_file("demo.txt");
    assert_eq!(convert(&source, &config), convert(&source, &config));
}

#[test]
fn no_toc_only_removes_the_toc() {
    let source = fixture("kitchensink.md");
    let with_toc = convert(&source, &bare_config(60));
    let mut config = bare_config(60);
    config.flags.no_toc = true;
    let without_toc = convert(&source, &config);

    assert!(with_toc.text.ends_with(&without_toc.text));
    assert!(!without_toc.text.contains('|'));
    assert_eq!(with_toc.tags, without_toc.tags);
}

#[test]
fn skipped_heading_level_does_not_repeat_numbers() {
    let rendered = convert("# A\n\n### B\n\n## C\n", &bare_config(40));
    let lines: Vec<&str> = rendered.text.lines().collect();
    assert!(lines[0].starts_with("1. A "));
    assert!(lines[1].starts_with("    1.1. B ") && lines[1].ends_with(" |b|"));
    assert!(lines[2].starts_with("  1.2. C ") && lines[2].ends_with(" |c|"));
    assert!(rendered.text.contains("\n1.1. B "));
    assert!(rendered.text.contains("\n1.2. C "));
}

#[test]
fn heading_as_first_block_of_list_item_keeps_the_marker() {
    let mut config = bare_config(40);
    config.flags.no_toc = true;
    let rendered = convert("# A\n\n- ## Inner\n  text\n", &config);
    let lines: Vec<&str> = rendered.text.lines().collect();
    assert!(lines.iter().all(|line| line.trim() != "-"));
    assert!(lines.iter().all(|line| !line.starts_with("---")));
    assert!(lines
        .iter()
        .any(|line| line.starts_with("- 1.1. INNER") && line.ends_with("*inner*")));
    assert!(lines.contains(&"  text"));
}
