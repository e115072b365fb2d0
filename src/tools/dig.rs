//! DNS lookups through `dig`.
//!
//! Queries always use the same fixed options (UDP, recursion desired, YAML output including the
//! query, 5s timeout, 3 tries, 2 retries) against one public resolver, followed by one
//! `<TYPE> <name>` pair per requested record type:
//!
//! ```text
//! dig +yaml +notcp +recurse +qr +time=5 +tries=3 +retry=2 @1.1.1.1 A example.com MX example.com
//! ```
use crate::tools::{ArgumentVector, Tool, ToolRequest};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};
use trust_dns_proto::rr::RecordType;

const QUERY_OPTIONS: [&str; 7] = [
    "+yaml", "+notcp", "+recurse", "+qr", "+time=5", "+tries=3", "+retry=2",
];

/// Public resolvers available to `/tools/dig`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Nameserver {
    Cloudflare,
    Google,
    Quad9,
    OpenDns,
    Comodo,
}

impl Nameserver {
    #[must_use]
    pub const fn addr(self) -> IpAddr {
        IpAddr::V4(match self {
            Nameserver::Cloudflare => Ipv4Addr::new(1, 1, 1, 1),
            Nameserver::Google => Ipv4Addr::new(8, 8, 8, 8),
            Nameserver::Quad9 => Ipv4Addr::new(9, 9, 9, 9),
            Nameserver::OpenDns => Ipv4Addr::new(208, 67, 222, 222),
            Nameserver::Comodo => Ipv4Addr::new(8, 26, 56, 26),
        })
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DigRequest {
    #[serde(default)]
    pub name: String,
    pub nameserver: Nameserver,
    #[serde(default)]
    pub types: DigRecordTypes,
}

/// Record types to query; every `true` field adds one query.
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct DigRecordTypes {
    pub a: bool,
    pub aaaa: bool,
    pub any: bool,
    pub caa: bool,
    pub cname: bool,
    pub dnskey: bool,
    pub ds: bool,
    pub mx: bool,
    pub ns: bool,
    pub ptr: bool,
    pub soa: bool,
    pub srv: bool,
    pub tlsa: bool,
    pub tsig: bool,
    pub txt: bool,
}

impl DigRecordTypes {
    /// The selected record types, in query order.
    pub fn selected(&self) -> impl Iterator<Item = RecordType> {
        [
            (self.a, RecordType::A),
            (self.aaaa, RecordType::AAAA),
            (self.any, RecordType::ANY),
            (self.caa, RecordType::CAA),
            (self.cname, RecordType::CNAME),
            (self.dnskey, RecordType::DNSKEY),
            (self.ds, RecordType::DS),
            (self.mx, RecordType::MX),
            (self.ns, RecordType::NS),
            (self.ptr, RecordType::PTR),
            (self.soa, RecordType::SOA),
            (self.srv, RecordType::SRV),
            (self.tlsa, RecordType::TLSA),
            (self.tsig, RecordType::TSIG),
            (self.txt, RecordType::TXT),
        ]
        .into_iter()
        .filter_map(|(enabled, record_type)| enabled.then_some(record_type))
    }
}

impl ToolRequest for DigRequest {
    const TOOL: Tool = Tool::Dig;

    fn args(&self) -> ArgumentVector {
        query_args(self.nameserver.addr(), &self.name, self.types.selected())
    }
}

/// Build a `dig` query against `resolver`, one `<TYPE> <name>` pair per record type.
pub(crate) fn query_args(
    resolver: IpAddr,
    name: &str,
    record_types: impl IntoIterator<Item = RecordType>,
) -> ArgumentVector {
    let mut args = ArgumentVector::new();
    args.extend(QUERY_OPTIONS);
    args.push(format!("@{resolver}"));
    for record_type in record_types {
        args.push(record_type.to_string()).push(name);
    }
    args
}
