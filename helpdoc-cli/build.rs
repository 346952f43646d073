use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of build_cli() in src/main.rs
// We need to duplicate this here since build scripts can't access src/ modules
fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("md2help")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert Markdown into a Vim help file")
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
        .arg(Arg::new("cols").long("cols").value_name("N"))
        .arg(Arg::new("tabs").long("tabs").value_name("N"))
        .arg(Arg::new("notoc").long("notoc").action(ArgAction::SetTrue))
        .arg(Arg::new("norules").long("norules").action(ArgAction::SetTrue))
        .arg(Arg::new("pascal").long("pascal").action(ArgAction::SetTrue))
        .arg(
            Arg::new("generate-tags")
                .long("generate-tags")
                .action(ArgAction::SetTrue),
        )
        .arg(Arg::new("desc").long("desc").value_name("STRING"))
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count),
        );

    generate_to(Bash, &mut cmd, "md2help", &outdir)?;
    generate_to(Zsh, &mut cmd, "md2help", &outdir)?;
    generate_to(Fish, &mut cmd, "md2help", &outdir)?;

    Ok(())
}
