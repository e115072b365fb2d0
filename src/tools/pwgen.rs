use crate::tools::{ArgumentVector, Tool, ToolRequest};
use serde::Deserialize;

/// Options for `pwgen`. Always emits one password per line; `length` is the trailing positional.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case")]
#[allow(clippy::struct_excessive_bools)]
pub struct PwgenRequest {
    pub no_numerals: bool,
    pub no_capitalize: bool,
    pub ambiguous: bool,
    pub capitalize: bool,
    pub num_passwords: u16,
    pub numerals: bool,
    pub remove_chars: String,
    pub secure: bool,
    pub no_vowels: bool,
    pub symbols: bool,
    pub length: u16,
}

impl PwgenRequest {
    fn switches(&self) -> [(bool, &'static str); 8] {
        [
            (self.no_numerals, "--no-numerals"),
            (self.no_capitalize, "--no-capitalize"),
            (self.ambiguous, "--ambiguous"),
            (self.capitalize, "--capitalize"),
            (self.numerals, "--numerals"),
            (self.secure, "--secure"),
            (self.no_vowels, "--no-vowels"),
            (self.symbols, "--symbols"),
        ]
    }
}

impl ToolRequest for PwgenRequest {
    const TOOL: Tool = Tool::Pwgen;

    fn args(&self) -> ArgumentVector {
        let mut args = ArgumentVector::new();
        // The quotes are part of the argument itself; pwgen is never started through a shell.
        let remove_chars = format!("--remove-chars=\"{}\"", self.remove_chars);
        args.push("-1")
            .push(format!("--num-passwords={}", self.num_passwords))
            .extend_enabled([(!self.remove_chars.is_empty(), remove_chars)])
            .extend_enabled(self.switches())
            .push(self.length.to_string());
        args
    }
}
