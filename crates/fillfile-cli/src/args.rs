//! Command-line argument scanning
//!
//! The option grammar is deliberately old-school and does not fit a derive
//! parser: option values are attached (`-hff,00`), help is spelled `-?` or
//! `-help` with a single dash, repeated data options are last-one-wins, and
//! on Windows `/z`-style switches are accepted too. A small hand-rolled
//! scanner keeps those semantics exact and produces an immutable
//! [`Invocation`] before any I/O happens.

use fillfile_core::{parse_dec_bytes, parse_hex_bytes, parse_size, Error, FillPolicy, Result};
use std::path::PathBuf;

/// Platform-dependent syntax acceptance, injected rather than sniffed from
/// ambient global state.
#[derive(Debug, Clone)]
pub struct ArgSyntax {
    /// Accept `/x`-style switches in addition to `-x`
    pub slash_switches: bool,
}

impl Default for ArgSyntax {
    fn default() -> Self {
        Self {
            slash_switches: cfg!(windows),
        }
    }
}

/// A fully validated request: what to write, how much, and where.
#[derive(Debug, Clone)]
pub struct Invocation {
    /// Data-source policy for the fill engine
    pub policy: FillPolicy,
    /// Exact number of bytes to write
    pub size: u64,
    /// Output file path
    pub path: PathBuf,
}

/// Outcome of argument scanning
#[derive(Debug, Clone)]
pub enum Parsed {
    /// Help was requested; print usage and do nothing else
    Help,
    /// A validated fill request
    Run(Invocation),
}

/// Scan command-line arguments into a [`Parsed`] outcome.
///
/// Options and positionals may interleave; the first non-option token is the
/// size, the second is the output path. Among the mutually exclusive data
/// options the last one wins. Empty arguments are skipped (scripts produce
/// them more often than you might think).
pub fn parse_args<I>(args: I, syntax: &ArgSyntax) -> Result<Parsed>
where
    I: IntoIterator<Item = String>,
{
    let mut policy = FillPolicy::default();
    let mut size: Option<u64> = None;
    let mut path: Option<PathBuf> = None;

    for arg in args {
        // ASCII lowering keeps byte offsets aligned with the original text
        let word = arg.to_ascii_lowercase();

        if word.is_empty() {
            continue;
        }

        if is_help(&word, syntax) {
            return Ok(Parsed::Help);
        }

        let switch = word
            .strip_prefix('-')
            .or_else(|| syntax.slash_switches.then(|| word.strip_prefix('/')).flatten());

        if let Some(rest) = switch {
            policy = scan_option(&arg, &word, rest)?;
        } else if size.is_none() {
            size = Some(parse_size(&arg)?);
        } else if path.is_none() {
            path = Some(PathBuf::from(arg));
        } else {
            return Err(Error::TooManyParameters(arg));
        }
    }

    let size = size.ok_or(Error::MissingParameter("first", "file size in bytes"))?;
    let path = path.ok_or(Error::MissingParameter("second", "output file name"))?;

    Ok(Parsed::Run(Invocation { policy, size, path }))
}

/// Help spellings, checked before the `-h<hex>` prefix match so a bare `-h`
/// means help rather than an empty hex sequence. `?`, `-?`, and `/?` are
/// recognized on every platform; only the letter forms of the slash switch
/// are gated.
fn is_help(word: &str, syntax: &ArgSyntax) -> bool {
    matches!(word, "?" | "-?" | "/?" | "-h" | "-help")
        || (syntax.slash_switches && matches!(word, "/h" | "/help"))
}

/// Decode one option. `word` is the lowercased argument, `rest` is `word`
/// without its switch character, and `arg` is the original text for error
/// messages and for `-p`, which keeps the user's case.
fn scan_option(arg: &str, word: &str, rest: &str) -> Result<FillPolicy> {
    match rest.chars().next() {
        Some('d') => match parse_dec_bytes(&word[2..]) {
            Some(bytes) if !bytes.is_empty() => FillPolicy::pattern(bytes, arg),
            _ => Err(Error::InvalidByteSequence(format!(
                "Decimal byte data must be from 000 to 255: {arg}"
            ))),
        },
        Some('h') => match parse_hex_bytes(&word[2..]) {
            Some(bytes) if !bytes.is_empty() => FillPolicy::pattern(bytes, arg),
            _ => Err(Error::InvalidByteSequence(format!(
                "Hexadecimal byte data must be from 00 to FF: {arg}"
            ))),
        },
        Some('o') if rest == "o" => Ok(FillPolicy::Ones),
        Some('p') => {
            let text = &arg[2..];
            if text.is_empty() {
                return Err(Error::InvalidByteSequence(format!(
                    "Text pattern to repeat must have at least one byte: {arg}"
                )));
            }
            Ok(FillPolicy::Pattern(text.as_bytes().to_vec()))
        }
        Some('r') => match parse_hex_bytes(&word[2..]) {
            Some(bytes) => Ok(FillPolicy::random_from(bytes)),
            None => Err(Error::InvalidByteSequence(format!(
                "Random byte data must be hex from 00 to FF: {arg}"
            ))),
        },
        Some('z') if rest == "z" => Ok(FillPolicy::Zeros),
        _ => Err(Error::UnrecognizedOption(arg.to_string())),
    }
}

/// Usage summary, printed to stderr for help requests and after every fatal
/// validation error.
pub fn usage() -> String {
    "\
fillfile - create a file with a given size, filled with a repeating pattern
or pseudo-random data

Usage: fillfile [options] <size> <file>

The first parameter is the size of the file in bytes, as a decimal number
without digit grouping. Binary suffixes are recognized: b, k/kb/kib, m, g,
t, p, e. The second parameter is the output file name.

Options select which data values to write for the bytes:

  -d#  one or more decimal bytes from 000 to 255
  -h#  one or more hexadecimal bytes from 00 to FF
  -o   write all ones, 0xFF bytes
  -p#  text pattern to repeat
  -r#  write pseudo-random data (default); with two or more hex bytes,
       select each output byte randomly from them
  -z   write all zeros, 0x00 bytes
  -?   show this help
"
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dash_only() -> ArgSyntax {
        ArgSyntax {
            slash_switches: false,
        }
    }

    fn scan(args: &[&str]) -> Result<Parsed> {
        parse_args(args.iter().map(ToString::to_string), &dash_only())
    }

    fn invocation(args: &[&str]) -> Invocation {
        match scan(args).unwrap() {
            Parsed::Run(inv) => inv,
            Parsed::Help => panic!("unexpected help"),
        }
    }

    #[test]
    fn test_minimal_invocation_defaults_to_random() {
        let inv = invocation(&["512", "x.dat"]);
        assert_eq!(inv.policy, FillPolicy::Random);
        assert_eq!(inv.size, 512);
        assert_eq!(inv.path, PathBuf::from("x.dat"));
    }

    #[test]
    fn test_size_suffix_and_options_interleave() {
        let inv = invocation(&["32k", "-z", "x.dat"]);
        assert_eq!(inv.policy, FillPolicy::Zeros);
        assert_eq!(inv.size, 32 * 1024);
    }

    #[test]
    fn test_help_spellings() {
        for arg in ["?", "-?", "/?", "-h", "-help", "-HELP", "-H"] {
            assert!(matches!(scan(&[arg]).unwrap(), Parsed::Help), "{arg}");
        }
    }

    #[test]
    fn test_help_beats_hex_prefix() {
        // "-h" bare is help, "-hff" is a hex byte option
        assert!(matches!(scan(&["-h"]).unwrap(), Parsed::Help));
        let inv = invocation(&["-hff", "4", "x.dat"]);
        assert_eq!(inv.policy, FillPolicy::Pattern(vec![0xFF]));
    }

    #[test]
    fn test_decimal_option() {
        let inv = invocation(&["-d255,0,128", "4", "x.dat"]);
        assert_eq!(inv.policy, FillPolicy::Pattern(vec![255, 0, 128]));
    }

    #[test]
    fn test_decimal_option_rejects_overflow_and_empty() {
        assert!(matches!(
            scan(&["-d256", "4", "x.dat"]),
            Err(Error::InvalidByteSequence(_))
        ));
        assert!(matches!(
            scan(&["-d", "4", "x.dat"]),
            Err(Error::InvalidByteSequence(_))
        ));
    }

    #[test]
    fn test_hex_option_case_insensitive() {
        let inv = invocation(&["-hFF,0A", "4", "x.dat"]);
        assert_eq!(inv.policy, FillPolicy::Pattern(vec![0xFF, 0x0A]));
    }

    #[test]
    fn test_hex_option_rejects_bad_digits() {
        assert!(matches!(
            scan(&["-hzz", "4", "x.dat"]),
            Err(Error::InvalidByteSequence(_))
        ));
    }

    #[test]
    fn test_ones_and_zeros_are_exact_matches() {
        assert_eq!(invocation(&["-o", "4", "x.dat"]).policy, FillPolicy::Ones);
        assert_eq!(invocation(&["-z", "4", "x.dat"]).policy, FillPolicy::Zeros);
        assert!(matches!(
            scan(&["-zx", "4", "x.dat"]),
            Err(Error::UnrecognizedOption(_))
        ));
    }

    #[test]
    fn test_text_pattern_keeps_case() {
        let inv = invocation(&["-pAbC", "9", "x.dat"]);
        assert_eq!(inv.policy, FillPolicy::Pattern(b"AbC".to_vec()));
    }

    #[test]
    fn test_text_pattern_rejects_empty() {
        assert!(matches!(
            scan(&["-p", "4", "x.dat"]),
            Err(Error::InvalidByteSequence(_))
        ));
    }

    #[test]
    fn test_random_option_resolution() {
        assert_eq!(invocation(&["-r", "4", "x.dat"]).policy, FillPolicy::Random);
        assert_eq!(
            invocation(&["-r5a", "4", "x.dat"]).policy,
            FillPolicy::Pattern(vec![0x5A])
        );
        assert_eq!(
            invocation(&["-r41,42", "4", "x.dat"]).policy,
            FillPolicy::RandomFrom(vec![0x41, 0x42])
        );
    }

    #[test]
    fn test_random_option_rejects_bad_hex() {
        assert!(matches!(
            scan(&["-rzz", "4", "x.dat"]),
            Err(Error::InvalidByteSequence(_))
        ));
    }

    #[test]
    fn test_last_option_wins() {
        assert_eq!(
            invocation(&["-z", "-o", "4", "x.dat"]).policy,
            FillPolicy::Ones
        );
        assert_eq!(
            invocation(&["-o", "-z", "4", "x.dat"]).policy,
            FillPolicy::Zeros
        );
        // a later -r resets an earlier explicit pattern to fully random
        assert_eq!(
            invocation(&["-hff", "-r", "4", "x.dat"]).policy,
            FillPolicy::Random
        );
    }

    #[test]
    fn test_empty_arguments_skipped() {
        let inv = invocation(&["", "-z", "", "4", "x.dat", ""]);
        assert_eq!(inv.policy, FillPolicy::Zeros);
    }

    #[test]
    fn test_missing_parameters() {
        assert!(matches!(scan(&[]), Err(Error::MissingParameter("first", _))));
        assert!(matches!(
            scan(&["512"]),
            Err(Error::MissingParameter("second", _))
        ));
    }

    #[test]
    fn test_invalid_size_token() {
        assert!(matches!(
            scan(&["12xyz", "x.dat"]),
            Err(Error::InvalidSize(_))
        ));
    }

    #[test]
    fn test_too_many_parameters() {
        assert!(matches!(
            scan(&["4", "x.dat", "extra"]),
            Err(Error::TooManyParameters(_))
        ));
    }

    #[test]
    fn test_unrecognized_option() {
        assert!(matches!(
            scan(&["-q", "4", "x.dat"]),
            Err(Error::UnrecognizedOption(_))
        ));
    }

    #[test]
    fn test_slash_switches_only_when_enabled() {
        let windows = ArgSyntax {
            slash_switches: true,
        };
        let parsed = parse_args(
            ["/z", "4", "x.dat"].iter().map(ToString::to_string),
            &windows,
        )
        .unwrap();
        match parsed {
            Parsed::Run(inv) => assert_eq!(inv.policy, FillPolicy::Zeros),
            Parsed::Help => panic!("unexpected help"),
        }

        // with slash switches off, "/z" is a path-looking positional (a size
        // candidate here), so it fails size parsing instead
        assert!(matches!(
            scan(&["/z", "4", "x.dat"]),
            Err(Error::InvalidSize(_))
        ));

        assert!(matches!(
            parse_args(["/h"].iter().map(ToString::to_string), &windows).unwrap(),
            Parsed::Help
        ));
        assert!(matches!(
            scan(&["/h", "4", "x.dat"]),
            Err(Error::InvalidSize(_))
        ));
    }

    #[test]
    fn test_question_mark_help_works_on_every_platform() {
        // "/?" is a help spelling regardless of the slash-switch setting
        for syntax in [
            ArgSyntax {
                slash_switches: false,
            },
            ArgSyntax {
                slash_switches: true,
            },
        ] {
            let parsed =
                parse_args(["/?"].iter().map(ToString::to_string), &syntax).unwrap();
            assert!(matches!(parsed, Parsed::Help));
        }
    }
}
