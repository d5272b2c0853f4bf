//! # Command Line
//!
//! Simple flag parsing, no external deps.
//!
//! ```text
//! face_gallery [--config PATH] [--reference HEX] [--start N] [--count N] [--center X Y]
//! ```
//!
//! `--config` is applied first; the other flags override it.

use face_index_core::{FaceError, FaceResult, GalleryConfig};

/// Usage text.
pub const USAGE: &str = "\
Usage: face_gallery [options]

Options:
  --config <path>       Load gallery settings from a TOML file
  --reference <hex>     24 hex digit starting point reference
  --start <index>       First face index (may be negative)
  --count <n>           Number of faces to walk
  --center <x> <y>      Face center
  --help                Show this message";

/// What the binary should do.
#[derive(Clone, Debug, PartialEq)]
pub enum CliCommand {
    /// Print usage and exit.
    Help,
    /// Walk the configured gallery.
    Walk(GalleryConfig),
}

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> FaceResult<&'a str> {
    args.get(i)
        .map(String::as_str)
        .ok_or_else(|| FaceError::InvalidConfig(format!("{flag} needs a value")))
}

fn number<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> FaceResult<T> {
    let text = value(args, i, flag)?;
    text.parse()
        .map_err(|_| FaceError::InvalidConfig(format!("{flag}: not a number: {text:?}")))
}

/// Parses arguments (without the program name).
///
/// # Errors
///
/// [`FaceError::InvalidConfig`] for unknown flags, missing or malformed
/// values, or an invalid resulting config; reference errors for a
/// malformed `--reference`.
pub fn parse_args(args: &[String]) -> FaceResult<CliCommand> {
    if args.iter().any(|a| a == "--help" || a == "-h") {
        return Ok(CliCommand::Help);
    }

    let mut config = match args.iter().position(|a| a == "--config") {
        Some(i) => GalleryConfig::from_file(value(args, i + 1, "--config")?)?,
        None => GalleryConfig::default(),
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => i += 1,
            "--reference" | "-r" => {
                config.reference = Some(value(args, i + 1, "--reference")?.to_string());
                i += 1;
            }
            "--start" | "-s" => {
                config.start_index = number(args, i + 1, "--start")?;
                i += 1;
            }
            "--count" | "-n" => {
                config.count = number(args, i + 1, "--count")?;
                i += 1;
            }
            "--center" => {
                config.center_x = number(args, i + 1, "--center")?;
                config.center_y = number(args, i + 2, "--center")?;
                i += 2;
            }
            other => {
                return Err(FaceError::InvalidConfig(format!("unknown argument {other:?}")));
            }
        }
        i += 1;
    }

    config.validate()?;
    Ok(CliCommand::Walk(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_no_args_walks_defaults() {
        assert_eq!(
            parse_args(&[]).unwrap(),
            CliCommand::Walk(GalleryConfig::default())
        );
    }

    #[test]
    fn test_help() {
        assert_eq!(parse_args(&args(&["--count", "3", "--help"])).unwrap(), CliCommand::Help);
    }

    #[test]
    fn test_flags_override_defaults() {
        let command = parse_args(&args(&[
            "--reference",
            "00112233445566778899aabb",
            "--start",
            "-40",
            "-n",
            "5",
            "--center",
            "10.5",
            "20",
        ]))
        .unwrap();

        let CliCommand::Walk(config) = command else {
            panic!("expected walk, got {command:?}");
        };
        assert_eq!(config.reference.as_deref(), Some("00112233445566778899aabb"));
        assert_eq!(config.start_index, -40);
        assert_eq!(config.count, 5);
        assert_eq!((config.center_x, config.center_y), (10.5, 20.0));
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(parse_args(&args(&["--count"])).is_err());
        assert!(parse_args(&args(&["--count", "many"])).is_err());
        assert!(parse_args(&args(&["--frobnicate"])).is_err());
        assert!(matches!(
            parse_args(&args(&["--reference", "abc"])),
            Err(FaceError::ReferenceLength { .. })
        ));
    }
}
