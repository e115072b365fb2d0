use crate::tools::{ArgumentVector, Tool, ToolRequest};
use serde::Deserialize;
use std::fmt;

/// Hash methods understood by `mkpasswd`.
///
/// Both the current names listed by `mkpasswd -m help` and the older aliases are accepted, and
/// whichever one the client sent is passed through unchanged.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashMethod {
    #[serde(rename = "des")]
    Des,
    #[serde(rename = "md5")]
    Md5,
    #[serde(rename = "nt")]
    Nt,
    #[serde(rename = "sha-256")]
    Sha256,
    #[serde(rename = "sha-512")]
    Sha512,
    #[serde(rename = "bcrypt")]
    Bcrypt,
    #[serde(rename = "bcrypt-a")]
    BcryptA,
    #[serde(rename = "scrypt")]
    Scrypt,
    #[serde(rename = "yescrypt")]
    Yescrypt,
    #[serde(rename = "gost-yescrypt")]
    GostYescrypt,
    #[serde(rename = "sunmd5")]
    SunMd5,
    #[serde(rename = "bsdicrypt")]
    BsdiCrypt,
    #[serde(rename = "descrypt")]
    DesCrypt,
    #[serde(rename = "md5crypt")]
    Md5Crypt,
    #[serde(rename = "sha256crypt")]
    Sha256Crypt,
    #[serde(rename = "sha512crypt")]
    Sha512Crypt,
    /// The strongest method `mkpasswd` supports.
    #[serde(rename = "auto")]
    Auto,
}

impl HashMethod {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            HashMethod::Des => "des",
            HashMethod::Md5 => "md5",
            HashMethod::Nt => "nt",
            HashMethod::Sha256 => "sha-256",
            HashMethod::Sha512 => "sha-512",
            HashMethod::Bcrypt => "bcrypt",
            HashMethod::BcryptA => "bcrypt-a",
            HashMethod::Scrypt => "scrypt",
            HashMethod::Yescrypt => "yescrypt",
            HashMethod::GostYescrypt => "gost-yescrypt",
            HashMethod::SunMd5 => "sunmd5",
            HashMethod::BsdiCrypt => "bsdicrypt",
            HashMethod::DesCrypt => "descrypt",
            HashMethod::Md5Crypt => "md5crypt",
            HashMethod::Sha256Crypt => "sha256crypt",
            HashMethod::Sha512Crypt => "sha512crypt",
            HashMethod::Auto => "auto",
        }
    }
}

impl fmt::Display for HashMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MkpasswdRequest {
    #[serde(default)]
    pub input: String,
    #[serde(default)]
    pub salt: String,
    #[serde(default)]
    pub rounds: u32,
    pub method: HashMethod,
}

impl ToolRequest for MkpasswdRequest {
    const TOOL: Tool = Tool::Mkpasswd;

    fn args(&self) -> ArgumentVector {
        let mut args = ArgumentVector::new();
        args.push(self.input.as_str())
            .push(format!("--method={}", self.method))
            .push(format!("--rounds={}", self.rounds))
            .extend_enabled([(!self.salt.is_empty(), format!("--salt={}", self.salt))]);
        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(json: serde_json::Value) -> Vec<String> {
        serde_json::from_value::<MkpasswdRequest>(json)
            .unwrap()
            .args()
            .into()
    }

    #[test]
    fn without_salt() {
        let args = args(serde_json::json!({
            "input": "secret",
            "method": "sha-512",
            "rounds": 5000,
            "salt": "",
        }));
        assert_eq!(args, vec!["secret", "--method=sha-512", "--rounds=5000"]);
    }

    #[test]
    fn with_salt() {
        let args = args(serde_json::json!({
            "input": "hunter2",
            "method": "sha-256",
            "rounds": 1000,
            "salt": "abcdefgh",
        }));
        assert_eq!(
            args,
            vec!["hunter2", "--method=sha-256", "--rounds=1000", "--salt=abcdefgh"]
        );
    }

    #[test]
    fn values_are_verbatim() {
        let args = args(serde_json::json!({
            "input": "pass word $(id)",
            "method": "md5",
            "rounds": 0,
            "salt": "a b;c",
        }));
        assert_eq!(
            args,
            vec!["pass word $(id)", "--method=md5", "--rounds=0", "--salt=a b;c"]
        );
    }

    #[test]
    fn missing_scalars_default() {
        let args = args(serde_json::json!({ "method": "yescrypt" }));
        assert_eq!(args, vec!["", "--method=yescrypt", "--rounds=0"]);
    }

    #[test]
    fn method_names_round_trip() {
        for name in [
            "des",
            "md5",
            "nt",
            "sha-256",
            "sha-512",
            "bcrypt",
            "bcrypt-a",
            "scrypt",
            "yescrypt",
            "gost-yescrypt",
            "sunmd5",
            "bsdicrypt",
            "descrypt",
            "md5crypt",
            "sha256crypt",
            "sha512crypt",
            "auto",
        ] {
            let method: HashMethod = serde_json::from_value(serde_json::json!(name)).unwrap();
            assert_eq!(method.to_string(), name);
        }
    }

    #[test]
    fn canonical_name_passed_through() {
        let args = args(serde_json::json!({
            "input": "secret",
            "method": "sha512crypt",
            "rounds": 5000,
        }));
        assert_eq!(args, vec!["secret", "--method=sha512crypt", "--rounds=5000"]);
    }

    #[test]
    fn unknown_method_rejected() {
        let res = serde_json::from_value::<MkpasswdRequest>(serde_json::json!({
            "input": "secret",
            "method": "rot13",
            "rounds": 5,
        }));
        assert!(res.is_err());
    }
}
