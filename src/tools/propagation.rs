//! DNS propagation checks.
//!
//! Runs the same `dig` query as [`super::dig`], but against one of a fixed set of global and UK
//! ISP resolvers, and reports which provider answered rather than the command that was run.
use crate::config::Config;
use crate::runner::Runner;
use crate::tools::dig::query_args;
use crate::tools::{invoke, ArgumentVector, Tool, ToolRequest};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};
use trust_dns_proto::rr::RecordType;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Cloudflare,
    Google,
    OpenDns,
    Bt,
    PlusNet,
    Sky,
    Ee,
    Virgin,
    TalkTalk,
    Vodafone,
    Zen,
    #[serde(rename = "hypernotic", alias = "hyperoptic")]
    Hyperoptic,
    Kcom,
}

impl Provider {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Provider::Cloudflare => "Cloudflare",
            Provider::Google => "Google",
            Provider::OpenDns => "OpenDNS",
            Provider::Bt => "BT",
            Provider::PlusNet => "PlusNet",
            Provider::Sky => "Sky Broadband",
            Provider::Ee => "EE",
            Provider::Virgin => "Virgin Media",
            Provider::TalkTalk => "TalkTalk",
            Provider::Vodafone => "Vodafone",
            Provider::Zen => "Zen Internet",
            Provider::Hyperoptic => "Hyperoptic",
            Provider::Kcom => "KCOM",
        }
    }

    #[must_use]
    pub const fn addr(self) -> IpAddr {
        IpAddr::V4(match self {
            Provider::Cloudflare => Ipv4Addr::new(1, 1, 1, 1),
            Provider::Google => Ipv4Addr::new(8, 8, 8, 8),
            Provider::OpenDns => Ipv4Addr::new(208, 67, 222, 222),
            Provider::Bt => Ipv4Addr::new(62, 6, 40, 178),
            Provider::PlusNet => Ipv4Addr::new(212, 159, 13, 49),
            Provider::Sky => Ipv4Addr::new(90, 207, 238, 97),
            Provider::Ee => Ipv4Addr::new(87, 237, 17, 198),
            Provider::Virgin => Ipv4Addr::new(194, 168, 4, 100),
            Provider::TalkTalk => Ipv4Addr::new(62, 24, 134, 1),
            Provider::Vodafone => Ipv4Addr::new(90, 255, 255, 90),
            Provider::Zen => Ipv4Addr::new(212, 23, 3, 100),
            Provider::Hyperoptic => Ipv4Addr::new(141, 0, 144, 64),
            Provider::Kcom => Ipv4Addr::new(212, 50, 160, 38),
        })
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PropagationRequest {
    #[serde(default)]
    pub name: String,
    pub nameserver: Provider,
    #[serde(default)]
    pub types: PropagationRecordTypes,
}

#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct PropagationRecordTypes {
    pub a: bool,
    pub aaaa: bool,
    pub caa: bool,
    pub cname: bool,
    pub mx: bool,
    pub ns: bool,
    pub ptr: bool,
    pub soa: bool,
    pub srv: bool,
    pub txt: bool,
}

impl PropagationRecordTypes {
    pub fn selected(&self) -> impl Iterator<Item = RecordType> {
        [
            (self.a, RecordType::A),
            (self.aaaa, RecordType::AAAA),
            (self.caa, RecordType::CAA),
            (self.cname, RecordType::CNAME),
            (self.mx, RecordType::MX),
            (self.ns, RecordType::NS),
            (self.ptr, RecordType::PTR),
            (self.soa, RecordType::SOA),
            (self.srv, RecordType::SRV),
            (self.txt, RecordType::TXT),
        ]
        .into_iter()
        .filter_map(|(enabled, record_type)| enabled.then_some(record_type))
    }
}

impl ToolRequest for PropagationRequest {
    const TOOL: Tool = Tool::Dig;

    fn args(&self) -> ArgumentVector {
        query_args(self.nameserver.addr(), &self.name, self.types.selected())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[allow(clippy::module_name_repetitions)]
pub struct PropagationResult {
    pub success: bool,
    pub provider: String,
    pub output: String,
}

/// Query `request`'s provider and report the answer under the provider's display name.
pub async fn lookup(
    runner: &(dyn Runner + Send + Sync),
    config: &Config,
    request: &PropagationRequest,
) -> PropagationResult {
    let result = invoke(runner, config, request).await;
    PropagationResult {
        success: result.success,
        provider: request.nameserver.name().to_string(),
        output: result.output,
    }
}
