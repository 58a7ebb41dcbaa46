//! Document the command line interface
use std::collections::HashMap;
use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use structopt::clap::ErrorKind;
use structopt::StructOpt;

use crate::commands::split;
use crate::error::ConfigError;
use crate::models::NAME_SEPARATOR;
use crate::parser::parse_total;
use crate::Error;

/// Command line options
#[derive(Debug, StructOpt, Clone)]
#[structopt(about = "Split a bill proportionally to what everyone ordered.

Tax, tip, bag fees and the like are shared in proportion to each person's subtotal.",
version = env ! ("CARGO_PKG_VERSION"),
author = env ! ("CARGO_PKG_AUTHORS"),
name = "split"
)]
pub struct SplitOpts {
    /// The total amount paid, including everything split amongst the group such as
    /// tax, tip, bag fee, etc.
    #[structopt(name = "TOTAL")]
    pub total: String,

    /// A person and what they ordered, as name,amount[,amount...]
    ///
    /// Names joined by the separator share the amounts evenly, as in Alice_Bob,20.00
    #[structopt(name = "PERSON", conflicts_with = "FILE")]
    pub people: Vec<String>,

    /// Path to a CSV file with one person per line
    #[structopt(name = "FILE", short = "f", long = "file", parse(from_os_str))]
    pub input_file: Option<PathBuf>,

    /// Separator for names sharing a line
    #[structopt(long = "separator", default_value = NAME_SEPARATOR)]
    pub separator: String,

    /// Ignore init file if it exists
    #[structopt(long = "args-only")]
    pub args_only: bool,

    /// Init file
    #[structopt(long = "init-file", parse(from_os_str))]
    pub init_file: Option<PathBuf>,

    #[structopt(long = "force-color")]
    pub force_color: bool,
}

impl SplitOpts {
    /// The input file, with `~` expanded
    pub fn input_file(&self) -> Option<PathBuf> {
        self.input_file.as_ref().map(|path| {
            let path = path.to_string_lossy();
            PathBuf::from(shellexpand::tilde(&path).to_string())
        })
    }
}

const INIT_FILE_FLAG: &str = "--init-file";
const NO_INIT_FILE_FLAG: &str = "--args-only";
const SPLIT_PATHS_UNDER_DIR: &str = "~/.splitrc";
const SPLIT_PATHS: &str = ".splitrc";

fn init_paths(args: &[String]) -> Result<Vec<String>, ConfigError> {
    if args.iter().any(|x| x == NO_INIT_FILE_FLAG) {
        return Ok(vec![]);
    }
    let mut possible_paths: Vec<String> = Vec::new();
    for (i, arg) in args.iter().enumerate() {
        if arg == INIT_FILE_FLAG {
            if let Some(path) = args.get(i + 1) {
                // A file asked for by name has to be there
                if !Path::new(path).exists() {
                    return Err(ConfigError::MissingInitFile(PathBuf::from(path)));
                }
                possible_paths.push(path.clone());
            }
        }
    }

    possible_paths.push(shellexpand::tilde(SPLIT_PATHS_UNDER_DIR).to_string());
    possible_paths.push(SPLIT_PATHS.to_string());
    Ok(possible_paths)
}

/// Add the options from the init file to the argument vector
///
/// Options already in the command line take precedence.
fn add_init_file_options(file: &Path, args: &mut Vec<String>) -> Result<(), ConfigError> {
    let mut aliases = HashMap::new();
    aliases.insert("-f".to_string(), "--file".to_string());
    let contents = read_to_string(file)
        .map_err(|e| ConfigError::CannotReadInitFile(file.to_path_buf(), e.to_string()))?;
    for line in contents.lines() {
        let option = line.trim_start();
        match option.chars().next() {
            Some(c) => match c {
                '-' => {
                    if !option.starts_with("--") {
                        return Err(ConfigError::BadInitFile {
                            file: file.to_path_buf(),
                            line: line.to_string(),
                        });
                    }
                    let mut iter = option.split_whitespace();
                    let option = match iter.next() {
                        Some(x) => x,
                        None => continue,
                    };
                    if !args.iter().any(|x| {
                        (x == option) | (aliases.get(x).map(|a| a == option).unwrap_or(false))
                    }) {
                        args.push(option.to_string());
                        let rest = iter.collect::<Vec<&str>>().join(" ");
                        if !rest.is_empty() {
                            args.push(rest);
                        }
                    }
                }
                ';' | '#' | '!' | '%' => (), // a comment

                _ => {
                    return Err(ConfigError::BadInitFile {
                        file: file.to_path_buf(),
                        line: line.to_string(),
                    })
                }
            },
            None => (),
        }
    }
    Ok(())
}

/// The usage text, as printed by `--help`
fn usage() -> String {
    let mut help = Vec::new();
    match SplitOpts::clap().write_help(&mut help) {
        Ok(_) => String::from_utf8_lossy(&help).to_string(),
        Err(_) => String::new(),
    }
}

/// Builds the options from the command line and the init file
///
/// Returns `None` when there is nothing else to do, as after printing the help.
fn build_options(mut args: Vec<String>) -> Result<Option<SplitOpts>, Error> {
    // Look for any file with configuration options
    let possible_paths = init_paths(&args)?;
    if let Some(file) = possible_paths
        .iter()
        .map(Path::new)
        .find(|file| file.exists())
    {
        add_init_file_options(file, &mut args)?;
    }

    match SplitOpts::from_iter_safe(args.iter()) {
        Ok(options) => Ok(Some(options)),
        Err(e) => match e.kind {
            ErrorKind::HelpDisplayed | ErrorKind::VersionDisplayed => {
                println!("{}", e.message);
                Ok(None)
            }
            _ => Err(Error::usage(&e.message)),
        },
    }
}

/// Entry point for the command line app
///
/// Load the options from the init file, add them to the supplied command line options
/// and split the bill.
pub fn run_app(args: Vec<String>) -> Result<(), Error> {
    let options = match build_options(args)? {
        Some(options) => options,
        None => return Ok(()),
    };

    if options.force_color {
        colored::control::set_override(true);
    }

    let total = parse_total(&options.total)?;

    if options.input_file.is_none() && options.people.is_empty() {
        return Err(Error::fatal(&format!(
            "one or more people required\n\n{}",
            usage()
        )));
    }

    split::execute(&options, &total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{EXIT_FAILURE, EXIT_USAGE};

    fn args(args: &[&str]) -> Vec<String> {
        let mut function_args = vec!["testing".to_string()];
        function_args.extend(args.iter().map(|x| x.to_string()));
        function_args
    }

    #[test]
    fn ignore_init_files() {
        assert!(init_paths(&args(&["10", "--args-only", "--init-file", "x"]))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn explicit_init_file_comes_first() {
        let paths = init_paths(&args(&[
            "10",
            "--init-file",
            "tests/example_files/example_splitrc",
        ]))
        .unwrap();
        assert_eq!(paths.len(), 3);
        assert_eq!(paths[0], "tests/example_files/example_splitrc");
        assert_eq!(paths[2], SPLIT_PATHS);
    }

    #[test]
    fn missing_init_file() {
        let err = run_app(args(&["10", "Alice,15", "--init-file", "nope_splitrc"])).unwrap_err();
        assert_eq!(err.exit_code(), EXIT_FAILURE);
        assert!(format!("{}", err).contains("nope_splitrc"));
        assert_eq!(
            init_paths(&args(&["10", "--init-file", "nope_splitrc"])),
            Err(ConfigError::MissingInitFile(PathBuf::from("nope_splitrc")))
        );
    }

    #[test]
    fn total_is_checked_before_people() {
        let err = run_app(args(&["lots", "--args-only"])).unwrap_err();
        assert_eq!(err.exit_code(), EXIT_FAILURE);
        assert!(format!("{}", err).contains("Total amount must be a number"));
    }

    #[test]
    fn separator_from_init_file() {
        let options = build_options(args(&[
            "10",
            "Alice+Bob,5",
            "--init-file",
            "tests/example_files/example_splitrc",
        ]))
        .unwrap()
        .unwrap();
        assert_eq!(options.separator, "+");
    }

    #[test]
    fn command_line_beats_init_file() {
        let options = build_options(args(&[
            "10",
            "Alice/Bob,5",
            "--separator",
            "/",
            "--init-file",
            "tests/example_files/example_splitrc",
        ]))
        .unwrap()
        .unwrap();
        assert_eq!(options.separator, "/");
    }

    #[test]
    fn bad_splitrc() {
        let res = run_app(args(&[
            "10",
            "Alice,5",
            "--init-file",
            "tests/example_files/example_bad_splitrc",
        ]));
        let err = res.unwrap_err();
        assert_eq!(err.exit_code(), EXIT_FAILURE);
        assert!(format!("{}", err).contains("This line should be a comment but isn't"));
    }

    #[test]
    fn split_people() {
        let res = run_app(args(&["57.22", "Alice,10.00", "Bob,20.00,5.00", "--args-only"]));
        assert!(res.is_ok());
    }

    #[test]
    fn missing_total() {
        let err = run_app(args(&["--args-only"])).unwrap_err();
        assert_eq!(err.exit_code(), EXIT_USAGE);
    }

    #[test]
    fn missing_people() {
        let err = run_app(args(&["57.22", "--args-only"])).unwrap_err();
        assert_eq!(err.exit_code(), EXIT_FAILURE);
        assert!(format!("{}", err).starts_with("one or more people required"));
    }

    #[test]
    fn people_and_file_conflict() {
        let err = run_app(args(&[
            "57.22",
            "Alice,10",
            "-f",
            "tests/example_files/people.csv",
            "--args-only",
        ]))
        .unwrap_err();
        assert_eq!(err.exit_code(), EXIT_USAGE);
    }

    #[test]
    fn file_does_not_exist() {
        let err = run_app(args(&[
            "10",
            "-f",
            "this_file_does_not_exist.csv",
            "--args-only",
        ]))
        .unwrap_err();
        assert_eq!(err.exit_code(), EXIT_FAILURE);
    }
}
