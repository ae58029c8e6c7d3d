// Device and protocol catalog offered to the manual builder

/// Devices grouped by category, in display order
pub const DEVICE_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Security",
        &[
            "Firewall",
            "IDS/IPS",
            "WAF",
            "VPN Concentrator",
            "SIEM",
            "DLP",
            "Proxy Server",
            "HSM",
        ],
    ),
    (
        "Network",
        &[
            "Router",
            "Switch",
            "Load Balancer",
            "Wireless Controller",
            "Access Point",
            "Bridge",
            "Hub",
            "Gateway",
        ],
    ),
    (
        "Servers",
        &[
            "Web Server",
            "Database Server",
            "Domain Controller",
            "Mail Server",
            "File Server",
            "DNS Server",
            "DHCP Server",
            "Application Server",
        ],
    ),
    (
        "Cloud",
        &[
            "AWS EC2",
            "AWS RDS",
            "AWS ALB",
            "Azure VM",
            "Azure SQL",
            "GCP Compute",
            "Cloud Gateway",
            "CDN",
        ],
    ),
    (
        "Endpoints",
        &[
            "Workstation",
            "Mobile Device",
            "IoT Device",
            "Printer",
            "IP Phone",
            "Laptop",
            "Tablet",
            "Smart TV",
        ],
    ),
];

/// Protocols a connection can be labeled with
pub const PROTOCOLS: &[&str] = &[
    "HTTP", "HTTPS", "SSH", "FTP", "SFTP", "Telnet", "SMTP", "POP3", "IMAP", "DNS", "DHCP", "SNMP",
    "LDAP", "LDAPS", "RDP", "VNC", "SQL", "NFS", "SMB/CIFS", "ICMP", "TCP", "UDP", "TLS", "IPSec",
    "VPN", "API",
];

/// Every catalog device, sorted alphabetically
pub fn all_devices() -> Vec<&'static str> {
    let mut devices: Vec<&'static str> = DEVICE_CATEGORIES
        .iter()
        .flat_map(|(_, devices)| devices.iter().copied())
        .collect();
    devices.sort_unstable();
    devices
}

/// Case-insensitive substring search over the catalog.
/// An empty query returns every device.
pub fn filter_devices(query: &str) -> Vec<&'static str> {
    let query = query.trim().to_lowercase();
    all_devices()
        .into_iter()
        .filter(|device| query.is_empty() || device.to_lowercase().contains(&query))
        .collect()
}

/// Category a catalog device belongs to
pub fn category_of(device: &str) -> Option<&'static str> {
    DEVICE_CATEGORIES
        .iter()
        .find(|(_, devices)| devices.iter().any(|d| *d == device))
        .map(|(category, _)| *category)
}
