//! Quick-start topologies for the manual builder

use crate::connection::{Connection, ConnectionDirection, ConnectionList};
use crate::error::{BuilderError, Result};

type TemplateRow = (&'static str, &'static str, &'static str);

/// (name, [(device1, protocol, device2)]); every template link points left to right
const TEMPLATES: &[(&str, &[TemplateRow])] = &[
    (
        "DMZ Architecture",
        &[
            ("Firewall", "HTTPS", "DMZ Switch"),
            ("DMZ Switch", "HTTP", "Web Server"),
            ("Web Server", "SQL", "Database Server"),
        ],
    ),
    (
        "Three-Tier Architecture",
        &[
            ("Load Balancer", "HTTPS", "Web Server"),
            ("Web Server", "HTTP", "Application Server"),
            ("Application Server", "SQL", "Database Server"),
        ],
    ),
    (
        "Zero Trust Network",
        &[
            ("Workstation", "HTTPS", "Proxy Server"),
            ("Proxy Server", "HTTPS", "WAF"),
            ("WAF", "HTTP", "Application Server"),
        ],
    ),
    (
        "Cloud Hybrid",
        &[
            ("Router", "VPN", "Cloud Gateway"),
            ("Cloud Gateway", "HTTPS", "AWS EC2"),
            ("AWS EC2", "SQL", "AWS RDS"),
        ],
    ),
    (
        "Basic Office Network",
        &[
            ("Router", "TCP", "Switch"),
            ("Switch", "TCP", "Workstation"),
            ("Switch", "HTTP", "File Server"),
        ],
    ),
];

/// Template names in display order
pub fn template_names() -> Vec<&'static str> {
    TEMPLATES.iter().map(|(name, _)| *name).collect()
}

/// Fresh connection list for a template, matched case-insensitively
pub fn template(name: &str) -> Option<ConnectionList> {
    TEMPLATES
        .iter()
        .find(|(template_name, _)| template_name.eq_ignore_ascii_case(name.trim()))
        .and_then(|(_, rows)| {
            let connections = rows
                .iter()
                .map(|(device1, protocol, device2)| {
                    Connection::new(*device1, *protocol, ConnectionDirection::LeftRight, *device2)
                })
                .collect();
            ConnectionList::from_connections(connections).ok()
        })
}

/// Like [`template`], but an unknown name is an error
pub fn require_template(name: &str) -> Result<ConnectionList> {
    template(name).ok_or_else(|| BuilderError::UnknownTemplate(name.to_string()))
}
