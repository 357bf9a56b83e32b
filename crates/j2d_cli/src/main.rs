//! java2dart: translate Java sources to Dart.
//!
//! Usage:
//!   java2dart <file>
//!   java2dart -p java2dart.json [--rename KEY=NAME]...
//!   java2dart --source-root src --out-dir out

mod tracing_config;

use clap::Parser as ClapParser;
use j2d_compiler::Program;
use j2d_options::{load_compiler_options, CompilerOptions, ConfigError, Rename};
use miette::{IntoDiagnostic, WrapErr};
use std::path::Path;
use std::process;
use std::time::Instant;

#[derive(ClapParser, Debug)]
#[command(name = "java2dart", about = "java2dart - translates Java sources to Dart", version)]
struct Cli {
    /// Java file to translate.
    #[arg(value_name = "FILE")]
    file: Option<String>,

    /// Path to a java2dart.json project file.
    #[arg(short = 'p', long = "project")]
    project: Option<String>,

    /// Directory searched recursively for .java files.
    #[arg(long = "source-root", value_name = "DIR")]
    source_roots: Vec<String>,

    /// Rename every occurrence of a binding key after translation.
    #[arg(long = "rename", value_name = "KEY=NAME")]
    renames: Vec<Rename>,

    /// Write .dart files below this directory.
    #[arg(long = "out-dir", value_name = "DIR")]
    out_dir: Option<String>,

    /// Key unresolved identifiers by their text.
    #[arg(long = "best-effort-keys")]
    best_effort_keys: bool,

    /// Print the files of the batch.
    #[arg(long = "list-files")]
    list_files: bool,

    /// Print each binding key with its occurrence count.
    #[arg(long = "list-keys")]
    list_keys: bool,
}

impl Cli {
    fn is_batch(&self) -> bool {
        self.project.is_some() || !self.source_roots.is_empty()
    }
}

// ANSI color codes
const YELLOW: &str = "\x1b[33m";
const GRAY: &str = "\x1b[90m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

fn main() {
    tracing_config::init_tracing();
    let cli = Cli::parse();

    if !cli.is_batch() {
        let Some(file) = &cli.file else {
            println!("Usage: java2dart <file>");
            process::exit(1);
        };
        if !Path::new(file).is_file() {
            println!("File does not exist: {}", file);
            process::exit(1);
        }
    }

    if let Err(report) = run(&cli) {
        eprintln!("{:?}", report);
        process::exit(1);
    }
}

/// Project file first, then command-line additions and overrides.
fn build_options(cli: &Cli) -> Result<CompilerOptions, ConfigError> {
    let mut options = match &cli.project {
        Some(project) => load_compiler_options(project)?,
        None => CompilerOptions::default(),
    };
    options.source_roots.extend(cli.source_roots.iter().cloned());
    options.files.extend(cli.file.iter().cloned());
    if cli.out_dir.is_some() {
        options.out_dir = cli.out_dir.clone();
    }
    options.best_effort_keys |= cli.best_effort_keys;
    options.renames.extend(cli.renames.iter().cloned());
    Ok(options)
}

fn run(cli: &Cli) -> miette::Result<()> {
    let start = Instant::now();
    let options = build_options(cli).into_diagnostic()?;

    let mut program = Program::new(options);
    program.load_root_files().into_diagnostic().wrap_err("cannot collect source files")?;
    if program.is_empty() {
        return Err(miette::miette!("no Java source files found"));
    }
    if cli.list_files {
        for path in program.source_paths() {
            println!("{}", path);
        }
    }

    let mut translated = program.translate().into_diagnostic().wrap_err("translation failed")?;
    for collision in translated.collisions() {
        print_warning(&format!(
            "best-effort key '{}' is shared by {}",
            collision.key,
            collision.scopes.join(", ")
        ));
    }
    translated.apply_renames().into_diagnostic().wrap_err("rename failed")?;

    if cli.list_keys {
        for (key, count) in translated.registry().keys() {
            println!("{}\t{}", key, count);
        }
    }

    if translated.options.out_dir.is_some() {
        let files = translated.write_outputs().into_diagnostic()?;
        let elapsed = start.elapsed();
        if stderr_is_terminal() {
            eprintln!("{}Translated {} files in {:.2}s.{}", GRAY, files.len(), elapsed.as_secs_f64(), RESET);
        } else {
            eprintln!("Translated {} files in {:.2}s.", files.len(), elapsed.as_secs_f64());
        }
    } else if cli.is_batch() {
        for (path, text) in translated.render_all() {
            println!("// {}", path);
            println!("{}", text);
        }
    } else {
        for (_, text) in translated.render_all() {
            println!("{}", text);
        }
    }
    Ok(())
}

fn print_warning(msg: &str) {
    tracing::warn!("{}", msg);
    if stderr_is_terminal() {
        eprintln!("{}{}warning{}: {}", BOLD, YELLOW, RESET, msg);
    } else {
        eprintln!("warning: {}", msg);
    }
}

fn stderr_is_terminal() -> bool {
    #[cfg(unix)]
    {
        unsafe { libc::isatty(2) != 0 }
    }
    #[cfg(not(unix))]
    {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("java2dart").chain(args.iter().copied())).expect("valid arguments")
    }

    #[test]
    fn test_single_file_mode() {
        let cli = parse(&["src/Main.java"]);
        assert!(!cli.is_batch());
        let options = build_options(&cli).expect("options");
        assert_eq!(options.files, vec!["src/Main.java"]);
        assert!(options.source_roots.is_empty());
    }

    #[test]
    fn test_batch_flags() {
        let cli = parse(&[
            "--source-root",
            "src",
            "--source-root",
            "lib",
            "--rename",
            "Ltest/Main;.foo(I)V=foo2",
            "--out-dir",
            "out",
            "--best-effort-keys",
        ]);
        assert!(cli.is_batch());
        let options = build_options(&cli).expect("options");
        assert_eq!(options.source_roots, vec!["src", "lib"]);
        assert_eq!(options.out_dir.as_deref(), Some("out"));
        assert!(options.best_effort_keys);
        assert_eq!(options.renames, vec![Rename { key: "Ltest/Main;.foo(I)V".to_string(), new_name: "foo2".to_string() }]);
    }

    #[test]
    fn test_malformed_rename_is_rejected() {
        assert!(Cli::try_parse_from(["java2dart", "--rename", "foo2", "Main.java"]).is_err());
    }

    #[test]
    fn test_missing_project_file() {
        let cli = parse(&["-p", "/definitely/not/here.json"]);
        assert!(matches!(build_options(&cli), Err(ConfigError::Io { .. })));
    }
}
