use std::fmt;
use std::str::FromStr;

/// DNS record types accepted by the query log's type filter
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionType {
    A,
    AAAA,
    AFSDB,
    APL,
    CAA,
    CDNSKEY,
    CDS,
    CERT,
    CNAME,
    CSYNC,
    DHCID,
    DLV,
    DNAME,
    DNSKEY,
    DS,
    HIP,
    IPSECKEY,
    KEY,
    KX,
    LOC,
    MX,
    NAPTR,
    NS,
    NSEC,
    NSEC3,
    NSEC3PARAM,
    OPENPGPKEY,
    PTR,
    RRSIG,
    RP,
    SIG,
    SMIMEA,
    SOA,
    SRV,
    SSHFP,
    TA,
    TKEY,
    TLSA,
    TSIG,
    TXT,
    URI,
}

impl QuestionType {
    pub const ALL: [QuestionType; 41] = [
        QuestionType::A,
        QuestionType::AAAA,
        QuestionType::AFSDB,
        QuestionType::APL,
        QuestionType::CAA,
        QuestionType::CDNSKEY,
        QuestionType::CDS,
        QuestionType::CERT,
        QuestionType::CNAME,
        QuestionType::CSYNC,
        QuestionType::DHCID,
        QuestionType::DLV,
        QuestionType::DNAME,
        QuestionType::DNSKEY,
        QuestionType::DS,
        QuestionType::HIP,
        QuestionType::IPSECKEY,
        QuestionType::KEY,
        QuestionType::KX,
        QuestionType::LOC,
        QuestionType::MX,
        QuestionType::NAPTR,
        QuestionType::NS,
        QuestionType::NSEC,
        QuestionType::NSEC3,
        QuestionType::NSEC3PARAM,
        QuestionType::OPENPGPKEY,
        QuestionType::PTR,
        QuestionType::RRSIG,
        QuestionType::RP,
        QuestionType::SIG,
        QuestionType::SMIMEA,
        QuestionType::SOA,
        QuestionType::SRV,
        QuestionType::SSHFP,
        QuestionType::TA,
        QuestionType::TKEY,
        QuestionType::TLSA,
        QuestionType::TSIG,
        QuestionType::TXT,
        QuestionType::URI,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::A => "A",
            QuestionType::AAAA => "AAAA",
            QuestionType::AFSDB => "AFSDB",
            QuestionType::APL => "APL",
            QuestionType::CAA => "CAA",
            QuestionType::CDNSKEY => "CDNSKEY",
            QuestionType::CDS => "CDS",
            QuestionType::CERT => "CERT",
            QuestionType::CNAME => "CNAME",
            QuestionType::CSYNC => "CSYNC",
            QuestionType::DHCID => "DHCID",
            QuestionType::DLV => "DLV",
            QuestionType::DNAME => "DNAME",
            QuestionType::DNSKEY => "DNSKEY",
            QuestionType::DS => "DS",
            QuestionType::HIP => "HIP",
            QuestionType::IPSECKEY => "IPSECKEY",
            QuestionType::KEY => "KEY",
            QuestionType::KX => "KX",
            QuestionType::LOC => "LOC",
            QuestionType::MX => "MX",
            QuestionType::NAPTR => "NAPTR",
            QuestionType::NS => "NS",
            QuestionType::NSEC => "NSEC",
            QuestionType::NSEC3 => "NSEC3",
            QuestionType::NSEC3PARAM => "NSEC3PARAM",
            QuestionType::OPENPGPKEY => "OPENPGPKEY",
            QuestionType::PTR => "PTR",
            QuestionType::RRSIG => "RRSIG",
            QuestionType::RP => "RP",
            QuestionType::SIG => "SIG",
            QuestionType::SMIMEA => "SMIMEA",
            QuestionType::SOA => "SOA",
            QuestionType::SRV => "SRV",
            QuestionType::SSHFP => "SSHFP",
            QuestionType::TA => "TA",
            QuestionType::TKEY => "TKEY",
            QuestionType::TLSA => "TLSA",
            QuestionType::TSIG => "TSIG",
            QuestionType::TXT => "TXT",
            QuestionType::URI => "URI",
        }
    }
}

impl FromStr for QuestionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        QuestionType::ALL
            .into_iter()
            .find(|t| t.as_str() == upper)
            .ok_or_else(|| format!("Unknown question type: {}", s))
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
