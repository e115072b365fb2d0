use std::path::Path;

/// An ordered list of command-line arguments for a tool binary.
///
/// Arguments are passed to the process as-is; nothing here is ever interpreted by a shell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[allow(clippy::module_name_repetitions)]
pub struct ArgumentVector(Vec<String>);

impl ArgumentVector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, arg: impl Into<String>) -> &mut Self {
        self.0.push(arg.into());
        self
    }

    /// Append the argument of every `(enabled, argument)` entry whose flag is set, in table
    /// order.
    pub fn extend_enabled<A: Into<String>>(
        &mut self,
        table: impl IntoIterator<Item = (bool, A)>,
    ) -> &mut Self {
        self.extend(
            table
                .into_iter()
                .filter_map(|(enabled, arg)| enabled.then_some(arg)),
        );
        self
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// The program followed by each argument, separated by single spaces.
    #[must_use]
    pub fn command_line(&self, program: &Path) -> String {
        let mut line = program.display().to_string();
        for arg in &self.0 {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

impl<A: Into<String>> Extend<A> for ArgumentVector {
    fn extend<T: IntoIterator<Item = A>>(&mut self, iter: T) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}

impl From<ArgumentVector> for Vec<String> {
    fn from(args: ArgumentVector) -> Self {
        args.0
    }
}
