use crate::error::Error;
use serde::Deserialize;
use serde_with::{serde_as, DurationSeconds};
use std::fs::File;
use std::io::BufReader;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

pub type SharedConfig = Arc<Config>;

#[serde_as]
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub api_bind_addr: SocketAddr,
    /// Deadline for one tool invocation. A tool still running when it passes is killed and
    /// reported as `success: false`.
    #[serde_as(as = "DurationSeconds<u64>")]
    pub tool_timeout: Duration,
    #[serde_as(as = "DurationSeconds<u64>")]
    pub shutdown_grace: Duration,
    /// Upper bound on concurrently running tool processes. `None` leaves spawning unbounded.
    pub max_concurrent_processes: Option<usize>,
    pub tools: ToolPaths,
}

/// Filesystem locations of the wrapped binaries.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ToolPaths {
    pub dig: PathBuf,
    pub mkpasswd: PathBuf,
    pub pwgen: PathBuf,
    pub uuidgen: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_bind_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, 8084)),
            tool_timeout: Duration::from_secs(300),
            shutdown_grace: Duration::from_secs(15),
            max_concurrent_processes: Some(64),
            tools: ToolPaths::default(),
        }
    }
}

impl Default for ToolPaths {
    fn default() -> Self {
        Self {
            dig: PathBuf::from("/usr/bin/dig"),
            mkpasswd: PathBuf::from("/usr/bin/mkpasswd"),
            pwgen: PathBuf::from("/usr/bin/pwgen"),
            uuidgen: PathBuf::from("/usr/bin/uuidgen"),
        }
    }
}

impl Config {
    pub fn try_from_file(p: impl AsRef<Path>) -> Result<Self, Error> {
        let f = File::open(p)?;
        let reader = BufReader::new(f);
        let conf: Config = serde_json::from_reader(reader)?;
        conf.validate()?;
        Ok(conf)
    }

    fn validate(&self) -> Result<(), Error> {
        if self.tool_timeout.is_zero() {
            return Err(Error::InvalidConfig(
                "tool_timeout must be at least 1 second".to_string(),
            ));
        }
        if self.max_concurrent_processes == Some(0) {
            return Err(Error::InvalidConfig(
                "max_concurrent_processes must be at least 1".to_string(),
            ));
        }
        for (tool, path) in self.tools.iter() {
            if path.as_os_str().is_empty() {
                return Err(Error::InvalidConfig(format!("empty path for {tool}")));
            }
        }
        Ok(())
    }
}

impl ToolPaths {
    fn iter(&self) -> impl Iterator<Item = (&'static str, &Path)> {
        [
            ("dig", self.dig.as_path()),
            ("mkpasswd", self.mkpasswd.as_path()),
            ("pwgen", self.pwgen.as_path()),
            ("uuidgen", self.uuidgen.as_path()),
        ]
        .into_iter()
    }
}
