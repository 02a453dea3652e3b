//! Exports the bundled content registry as canonical JSON.
//!
//! Intended for content tooling: the exported file round-trips through
//! `ContentRegistry::from_file`, so downstream editors can start from the
//! shipped data.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use catalogue_data::{ContentRegistry, RegistryError, write_registry};

const DEFAULT_FILE_NAME: &str = "content.json";

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{message}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), String> {
    let Some(options) = parse_args(env::args().skip(1))? else {
        print_usage(io::stdout().lock());
        return Ok(());
    };

    std::fs::create_dir_all(&options.out_dir)
        .map_err(|err| format!("failed to create '{}': {err}", options.out_dir))?;
    let dir = Dir::open_ambient_dir(&options.out_dir, ambient_authority())
        .map_err(|err| format!("failed to open '{}': {err}", options.out_dir))?;

    let registry = ContentRegistry::builtin();
    write_registry(&dir, Utf8Path::new(&options.file_name), &registry)
        .map_err(|err: RegistryError| err.to_string())?;

    let target = format!("{}/{}", options.out_dir, options.file_name);
    if let Err(err) = writeln!(io::stdout().lock(), "wrote {target}") {
        drop(err);
    }
    Ok(())
}

struct Options {
    out_dir: String,
    file_name: String,
}

/// Parses CLI arguments; `Ok(None)` means help was requested.
fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Option<Options>, String> {
    let mut out_dir = None;
    let mut file_name = DEFAULT_FILE_NAME.to_owned();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(None),
            "--out" => {
                out_dir = Some(
                    args.next()
                        .ok_or_else(|| "--out requires a directory argument".to_owned())?,
                );
            }
            "--file" => {
                file_name = args
                    .next()
                    .ok_or_else(|| "--file requires a file name argument".to_owned())?;
            }
            other => return Err(format!("unrecognised argument: {other}")),
        }
    }

    let out_dir = out_dir.ok_or_else(|| "--out <dir> is required (see --help)".to_owned())?;
    Ok(Some(Options { out_dir, file_name }))
}

fn print_usage(mut out: impl Write) {
    let usage = concat!(
        "Usage: content-export --out <dir> [options]\n",
        "\n",
        "Options:\n",
        "  --out <dir>      Directory to write the registry into\n",
        "  --file <name>    Target file name (defaults to content.json)\n",
        "  -h, --help       Print this help output\n",
    );
    if let Err(err) = out.write_all(usage.as_bytes()) {
        drop(err);
    }
}
