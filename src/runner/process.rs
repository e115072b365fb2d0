//! A [`tokio::process`] backed implementation of the [`Runner`][super::Runner] trait.
use crate::runner::{Execution, Runner};
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tokio::sync::Semaphore;

/// Runs tool binaries as child processes.
///
/// Standard input is closed and standard error is discarded. Children are killed if the
/// awaiting future is dropped (tool timeout or forced shutdown), so abandoned invocations
/// don't outlive their request.
#[derive(Debug, Default)]
#[allow(clippy::module_name_repetitions)]
pub struct ProcessRunner {
    permits: Option<Semaphore>,
}

impl ProcessRunner {
    /// Create a runner that allows at most `max_concurrent` children at once, or any number
    /// when `None`.
    #[must_use]
    pub fn new(max_concurrent: Option<usize>) -> Self {
        Self {
            permits: max_concurrent.map(Semaphore::new),
        }
    }
}

#[async_trait::async_trait]
impl Runner for ProcessRunner {
    async fn run(&self, program: &Path, args: &[String]) -> Execution {
        let _permit = match &self.permits {
            Some(permits) => match permits.acquire().await {
                Ok(permit) => Some(permit),
                Err(err) => {
                    tracing::error!("process limiter unavailable: {err}");
                    return Execution::failed();
                }
            },
            None => None,
        };

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await;

        match output {
            Ok(output) => {
                if !output.status.success() {
                    tracing::debug!("{} exited with {}", program.display(), output.status);
                }
                Execution {
                    success: output.status.success(),
                    stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                }
            }
            Err(err) => {
                tracing::warn!("failed to run {}: {err}", program.display());
                Execution::failed()
            }
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    #[tokio::test]
    async fn captures_stdout_of_successful_process() {
        let runner = ProcessRunner::new(Some(1));
        let execution = runner
            .run(Path::new("/bin/echo"), &["hello".to_string()])
            .await;
        assert!(execution.success);
        assert_eq!(execution.stdout, "hello\n");
    }

    #[tokio::test]
    async fn discards_stderr() {
        let runner = ProcessRunner::new(None);
        let execution = runner
            .run(
                Path::new("/bin/sh"),
                &["-c".to_string(), "echo out; echo err >&2".to_string()],
            )
            .await;
        assert!(execution.success);
        assert_eq!(execution.stdout, "out\n");
    }

    #[tokio::test]
    async fn nonzero_exit_keeps_partial_output() {
        let runner = ProcessRunner::new(None);
        let execution = runner
            .run(
                Path::new("/bin/sh"),
                &["-c".to_string(), "echo partial; exit 3".to_string()],
            )
            .await;
        assert!(!execution.success);
        assert_eq!(execution.stdout, "partial\n");
    }

    #[tokio::test]
    async fn missing_binary_is_failure() {
        let runner = ProcessRunner::new(None);
        let execution = runner
            .run(Path::new("/nonexistent/toolcrab-test-binary"), &[])
            .await;
        assert_eq!(execution, Execution::failed());
    }

    #[tokio::test]
    async fn arguments_are_not_shell_interpreted() {
        let runner = ProcessRunner::new(None);
        let execution = runner
            .run(Path::new("/bin/echo"), &["$HOME; ls".to_string()])
            .await;
        assert_eq!(execution.stdout, "$HOME; ls\n");
    }

    #[tokio::test]
    async fn limited_runner_serves_concurrent_callers() {
        let runner = Arc::new(ProcessRunner::new(Some(1)));
        let mut handles = Vec::new();
        for i in 0..4 {
            let runner = runner.clone();
            handles.push(tokio::spawn(async move {
                runner.run(Path::new("/bin/echo"), &[i.to_string()]).await
            }));
        }
        for (i, handle) in handles.into_iter().enumerate() {
            let execution = handle.await.unwrap();
            assert!(execution.success);
            assert_eq!(execution.stdout, format!("{i}\n"));
        }
    }

    #[tokio::test]
    async fn limit_holds_back_second_process() {
        let runner = Arc::new(ProcessRunner::new(Some(1)));
        let start = Instant::now();

        let slow = {
            let runner = runner.clone();
            tokio::spawn(async move {
                runner
                    .run(
                        Path::new("/bin/sh"),
                        &["-c".to_string(), "sleep 0.5; echo slow".to_string()],
                    )
                    .await
            })
        };
        while runner.permits.as_ref().unwrap().available_permits() > 0 {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        let fast = runner
            .run(Path::new("/bin/echo"), &["fast".to_string()])
            .await;
        assert_eq!(fast.stdout, "fast\n");
        assert!(start.elapsed() >= Duration::from_millis(400));

        assert_eq!(slow.await.unwrap().stdout, "slow\n");
        assert_eq!(runner.permits.as_ref().unwrap().available_permits(), 1);
    }
}
