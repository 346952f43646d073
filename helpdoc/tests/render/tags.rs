use super::bare_config;
use helpdoc::{convert, format_tag_index, RenderConfig};

#[test]
fn repeated_heading_gets_numbered_tag() {
    let rendered = convert("# Setup\n\nOne.\n\n# Setup\n\nTwo.\n", &bare_config(40));
    let lines: Vec<&str> = rendered.text.lines().collect();

    assert!(lines[0].starts_with("1. Setup ") && lines[0].ends_with(" |setup|"));
    assert!(lines[1].starts_with("2. Setup ") && lines[1].ends_with(" |setup_2|"));
    assert!(rendered.text.contains("*setup*\n"));
    assert!(rendered.text.contains("*setup_2*\n"));
    assert_eq!(
        rendered.tags.iter().map(String::as_str).collect::<Vec<_>>(),
        vec!["setup", "setup_2"]
    );
}

#[test]
fn distinct_headings_get_distinct_tags() {
    let source = "# Getting Started\n\n## Options\n\n## Key_Maps\n\n# FAQ?\n";
    let rendered = convert(source, &bare_config(79));
    assert_eq!(
        rendered.tags.iter().map(String::as_str).collect::<Vec<_>>(),
        vec!["faq", "getting_started", "key_maps", "options"]
    );
}

#[test]
fn pascal_tags_carry_pascal_prefix() {
    let mut config = RenderConfig::for_help_file("my_plugin.txt");
    config.flags.pascal = true;
    let rendered = convert("# getting started\n", &config);
    assert!(rendered.tags.contains("MyPlugin-GettingStarted"));
    assert!(rendered.text.contains("*MyPlugin-GettingStarted*"));
}

#[test]
fn every_defined_tag_is_indexed_once() {
    let source = "# One\n\n## Two\n\n# One\n";
    let rendered = convert(source, &RenderConfig::for_help_file("x.txt"));
    let index = format_tag_index(&rendered.tags, "x.txt");

    let names: Vec<&str> = index
        .lines()
        .map(|line| line.split('\t').next().unwrap())
        .collect();
    assert_eq!(names, vec!["x-one", "x-one_2", "x-two", "x.txt"]);
    for tag in &rendered.tags {
        assert_eq!(rendered.text.matches(&format!("*{tag}*")).count(), 1);
    }
}

#[test]
fn escaped_stars_do_not_define_tags() {
    let mut config = bare_config(40);
    config.flags.no_toc = true;
    let rendered = convert("\\*foo\\* bar\n", &config);
    assert_eq!(rendered.text, "`*foo*` bar\n");
    assert!(rendered.tags.is_empty());
}

#[test]
fn escaped_stars_in_heading_stay_out_of_the_tag_set() {
    let rendered = convert("# Use \\*opt\\*\n", &bare_config(40));
    assert!(rendered.text.contains("1. USE `*OPT*`"));
    assert_eq!(
        rendered.tags.iter().map(String::as_str).collect::<Vec<_>>(),
        vec!["use_opt"]
    );
}
