//! HTTP API translating JSON requests into tool invocations.
//!
//! # API Endpoints
//!
//! ## `/ping` (GET)
//!
//!   Always returns HTTP 502 (Bad Gateway) and the JSON body `{"success":false}`.
//!
//! ## `/tools/dig` (POST)
//!
//!   Expects a JSON request body of the form:
//!
//!   ```json
//!   { "name": "example.com", "nameserver": "cloudflare", "types": { "a": true, "mx": true } }
//!   ```
//!
//!   `nameserver` is one of `cloudflare`, `google`, `quad9`, `opendns` or `comodo`. `types` may
//!   enable any of `a`, `aaaa`, `any`, `caa`, `cname`, `dnskey`, `ds`, `mx`, `ns`, `ptr`, `soa`,
//!   `srv`, `tlsa`, `tsig` and `txt`. See [`crate::tools::dig`].
//!
//! ## `/tools/mkpasswd` (POST)
//!
//!   ```json
//!   { "input": "secret", "method": "sha-512", "rounds": 5000, "salt": "" }
//!   ```
//!
//!   An empty `salt` lets `mkpasswd` pick one.
//!
//! ## `/tools/pwgen` (POST)
//!
//!   ```json
//!   { "num-passwords": 5, "length": 16, "secure": true, "symbols": true, "remove-chars": "lI1O0" }
//!   ```
//!
//!   Switches: `no-numerals`, `no-capitalize`, `ambiguous`, `capitalize`, `numerals`, `secure`,
//!   `no-vowels`, `symbols`.
//!
//! ## `/tools/uuidgen` (POST)
//!
//!   ```json
//!   { "random": true, "time": false }
//!   ```
//!
//!  All of the above return HTTP 200 (OK) and a JSON response body of the form:
//!
//!  ```json
//!  { "success": true, "command": "/usr/bin/uuidgen --random", "output": "..." }
//!  ```
//!
//!  `success` only reflects the tool's exit status. `command` is the exact command line that was
//!  run and `output` is its standard output minus one trailing newline.
//!
//! ## `/tools/propagation` (POST)
//!
//!   Takes the same body as `/tools/dig`, but `nameserver` names one of the providers in
//!   [`crate::tools::propagation::Provider`] and `types` is limited to `a`, `aaaa`, `caa`,
//!   `cname`, `mx`, `ns`, `ptr`, `soa`, `srv` and `txt`. Responds with:
//!
//!  ```json
//!  { "success": true, "provider": "Virgin Media", "output": "..." }
//!  ```
//!
//! # Errors
//!
//!  A body that isn't valid JSON, doesn't fit the endpoint's payload, or names an unknown
//!  nameserver, provider or hash method is rejected with HTTP 400 (Bad Request) before any tool
//!  runs:
//!
//!  ```json
//!  { "success": "false", "error": "..." }
//!  ```
//!
//!  The `Content-Type` header is not checked; any body that parses as JSON is accepted.
//!
//!  A tool still running after the configured `tool_timeout` is killed and reported with HTTP 200
//!  and `"success": false`. A handler that panics yields HTTP 500 with the error body above.

mod api_error;
mod json_body;
mod model;
mod routes;
pub mod server;

pub use server::{new, router};
