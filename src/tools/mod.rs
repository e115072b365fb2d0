//! Request-to-command-line translation for the wrapped tools.
//!
//! Each tool module defines a payload type implementing [`ToolRequest`], which turns the payload
//! into an [`ArgumentVector`] without touching HTTP or processes. [`invoke`] then runs the tool's
//! binary through a [`Runner`] and normalizes what it printed into a [`ToolResult`].
//!
//! | Tool | Payload | Binary |
//! |---|---|---|
//! | DNS lookup | [`dig::DigRequest`] | `dig` |
//! | DNS propagation | [`propagation::PropagationRequest`] | `dig` |
//! | Password hash | [`mkpasswd::MkpasswdRequest`] | `mkpasswd` |
//! | Password generator | [`pwgen::PwgenRequest`] | `pwgen` |
//! | UUID generator | [`uuidgen::UuidgenRequest`] | `uuidgen` |

use crate::config::{Config, ToolPaths};
use crate::runner::{Execution, Runner};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

pub mod args;
pub mod dig;
pub mod mkpasswd;
pub mod propagation;
pub mod pwgen;
pub mod uuidgen;

pub use args::ArgumentVector;

/// The wrapped binaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Dig,
    Mkpasswd,
    Pwgen,
    Uuidgen,
}

impl Tool {
    #[must_use]
    pub fn program(self, paths: &ToolPaths) -> &Path {
        match self {
            Tool::Dig => &paths.dig,
            Tool::Mkpasswd => &paths.mkpasswd,
            Tool::Pwgen => &paths.pwgen,
            Tool::Uuidgen => &paths.uuidgen,
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Tool::Dig => "dig",
            Tool::Mkpasswd => "mkpasswd",
            Tool::Pwgen => "pwgen",
            Tool::Uuidgen => "uuidgen",
        })
    }
}

/// A decoded payload that knows which tool it drives and how to build that tool's arguments.
#[allow(clippy::module_name_repetitions)]
pub trait ToolRequest {
    const TOOL: Tool;

    /// Build the argument vector. Must be deterministic for a given payload.
    fn args(&self) -> ArgumentVector;
}

/// The `{success, command, output}` envelope returned by every `/tools` endpoint except
/// propagation.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[allow(clippy::module_name_repetitions)]
pub struct ToolResult {
    pub success: bool,
    pub command: String,
    pub output: String,
}

impl ToolResult {
    #[must_use]
    pub fn new(command: String, execution: Execution) -> Self {
        Self {
            success: execution.success,
            command,
            output: strip_trailing_newline(execution.stdout),
        }
    }
}

/// Remove exactly one trailing `\n`, leaving any other whitespace alone.
fn strip_trailing_newline(mut output: String) -> String {
    if output.ends_with('\n') {
        output.pop();
    }
    output
}

/// Build `request`'s arguments, run its tool and wait for the result.
///
/// A tool still running after [`Config::tool_timeout`] is abandoned (which kills a
/// [`ProcessRunner`][crate::runner::ProcessRunner] child) and reported as a failure.
pub async fn invoke<R: ToolRequest + Sync>(
    runner: &(dyn Runner + Send + Sync),
    config: &Config,
    request: &R,
) -> ToolResult {
    let program = R::TOOL.program(&config.tools);
    let args = request.args();
    let execution =
        match tokio::time::timeout(config.tool_timeout, runner.run(program, args.as_slice())).await
        {
            Ok(execution) => execution,
            Err(_) => {
                tracing::warn!(
                    "{} still running after {}s, giving up",
                    R::TOOL,
                    config.tool_timeout.as_secs()
                );
                Execution::failed()
            }
        };
    tracing::debug!("{} finished, success: {}", R::TOOL, execution.success);
    ToolResult::new(args.command_line(program), execution)
}
