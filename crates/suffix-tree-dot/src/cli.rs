//! Core logic of the `suffix-tree-dot` binary.

use std::io::{self, Read};

use suffix_tree::{BuildError, SuffixTreeBuilder, SuffixTreeOptions};
use thiserror::Error;

use crate::dot::render_dot;
use crate::graph::describe;

pub const USAGE: &str = "usage: suffix-tree-dot [--json] [--terminator C] [TEXT]";

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Build(#[from] BuildError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Dot,
    Json,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliArgs {
    pub format: OutputFormat,
    pub terminator: u8,
    /// Text to index; read from stdin when absent.
    pub text: Option<String>,
}

impl CliArgs {
    /// Parse arguments, excluding the program name.
    pub fn parse<I, A>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = A>,
        A: AsRef<str>,
    {
        let mut parsed = CliArgs {
            format: OutputFormat::Dot,
            terminator: SuffixTreeOptions::<u8>::default().terminator,
            text: None,
        };
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_ref() {
                "--json" => parsed.format = OutputFormat::Json,
                "--terminator" => {
                    let value = args
                        .next()
                        .ok_or_else(|| CliError::Usage("--terminator needs a value".into()))?;
                    parsed.terminator = match value.as_ref().as_bytes() {
                        [byte] => *byte,
                        _ => {
                            return Err(CliError::Usage(format!(
                                "terminator must be a single byte, got {:?}",
                                value.as_ref()
                            )))
                        }
                    };
                }
                flag if flag.starts_with("--") => {
                    return Err(CliError::Usage(format!("unknown option {flag}")));
                }
                text if parsed.text.is_none() => parsed.text = Some(text.to_string()),
                _ => return Err(CliError::Usage("expected a single TEXT argument".into())),
            }
        }
        Ok(parsed)
    }
}

/// Build the tree for the given arguments and render it.
pub fn run<R: Read>(args: &CliArgs, mut stdin: R) -> Result<String, CliError> {
    let text = match &args.text {
        Some(text) => text.clone(),
        None => {
            let mut buf = String::new();
            stdin.read_to_string(&mut buf)?;
            let trimmed = buf.trim_end_matches(['\n', '\r']).len();
            buf.truncate(trimmed);
            buf
        }
    };

    let tree = SuffixTreeBuilder::new(SuffixTreeOptions {
        terminator: args.terminator,
    })
    .build(text.as_bytes())?;
    let desc = describe(&tree);
    match args.format {
        OutputFormat::Dot => Ok(render_dot(&desc)),
        OutputFormat::Json => Ok(crate::to_json(&desc)?),
    }
}
