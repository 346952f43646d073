// Command-line interface for helpdoc
//
// md2help renders a Markdown file as a Vim help file. The heavy lifting lives in the
// helpdoc library; this binary parses arguments, layers configuration and reports errors.
//
// Usage:
//  md2help [options] <input> <output>
//
// Configuration is layered lowest to highest:
//  built-in defaults < ./helpdoc.toml < --config FILE < command line flags
//
// The output file name becomes the help title (`*name.txt*`) and its stem the prefix of
// every generated tag.

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use helpdoc::publish::{publish, PublishSpec};
use helpdoc::render::RenderConfig;
use helpdoc_config::{ConfigError, HelpdocConfig, Loader, PROJECT_CONFIG_FILE};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn build_cli() -> Command {
    Command::new("md2help")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert Markdown into a Vim help file")
        .long_about(
            "md2help renders a Markdown document as a plain-text Vim help file with a table \
            of contents, tagged headings and wrapped text.\n\n\
            Examples:\n  \
            md2help README.md doc/plugin.txt                   # Render with defaults\n  \
            md2help README.md doc/plugin.txt --generate-tags   # Also write doc/tags\n  \
            md2help README.md doc/plugin.txt --cols 100 --notoc",
        )
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .help("Markdown file to read")
                .required(true)
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("output")
                .help("Help file to write")
                .required(true)
                .index(2)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("cols")
                .long("cols")
                .value_name("N")
                .help("Column width for wrapping and alignment [default: 79]")
                .value_parser(clap::value_parser!(u16).range(1..)),
        )
        .arg(
            Arg::new("tabs")
                .long("tabs")
                .value_name("N")
                .help("Tab width used in code blocks [default: 8]")
                .value_parser(clap::value_parser!(u16).range(1..)),
        )
        .arg(
            Arg::new("notoc")
                .long("notoc")
                .help("Do not emit a table of contents")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("norules")
                .long("norules")
                .help("Do not emit rules above headings")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("pascal")
                .long("pascal")
                .help("Build tags in PascalCase instead of snake_case")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("generate-tags")
                .long("generate-tags")
                .help("Write a tags index next to the output file")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("desc")
                .long("desc")
                .value_name("STRING")
                .help("Short description shown on the first line"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a helpdoc.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log progress to stderr (repeat for more detail)")
                .action(ArgAction::Count),
        )
}

fn main() {
    let matches = match build_cli().try_get_matches() {
        Ok(matches) => matches,
        Err(e) => e.exit(),
    };

    install_tracing(matches.get_count("verbose"));

    let config = load_cli_config(&matches).unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    });
    debug!(?config, "resolved configuration");

    let input = matches
        .get_one::<String>("input")
        .expect("input is required");
    let output = matches
        .get_one::<String>("output")
        .expect("output is required");

    let mut render = RenderConfig::from(&config.render);
    render.description = matches.get_one::<String>("desc").cloned();

    let spec = PublishSpec::new(input, output)
        .with_config(render)
        .with_tags(config.tags.generate)
        .with_tags_filename(config.tags.filename.clone());

    if let Err(err) = publish(spec) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

/// Install a stderr subscriber. `-v` selects debug, `-vv` trace; otherwise `RUST_LOG`
/// applies, falling back to warnings only.
fn install_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Layer config files and command line flags over the built-in defaults.
fn load_cli_config(matches: &ArgMatches) -> Result<HelpdocConfig, ConfigError> {
    let mut loader = Loader::new().with_optional_file(PROJECT_CONFIG_FILE);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }

    if let Some(cols) = matches.get_one::<u16>("cols") {
        loader = loader.set_override("render.cols", i64::from(*cols))?;
    }
    if let Some(tabs) = matches.get_one::<u16>("tabs") {
        loader = loader.set_override("render.tabs", i64::from(*tabs))?;
    }
    if matches.get_flag("notoc") {
        loader = loader.set_override("render.toc", false)?;
    }
    if matches.get_flag("norules") {
        loader = loader.set_override("render.rules", false)?;
    }
    if matches.get_flag("pascal") {
        loader = loader.set_override("render.pascal", true)?;
    }
    if matches.get_flag("generate-tags") {
        loader = loader.set_override("tags.generate", true)?;
    }

    loader.build()
}
