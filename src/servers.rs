//! The server fleet table and its status report.
//!
//! The fleet is a compiled-in constant: six locations, fixed order, fixed
//! ids. Until a live health-check feed exists, `online` and `ping` are
//! constants too, and the two fields carry no enforced correlation.

use serde::Serialize;

/// Status of a single VPN server.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct ServerStatus {
    pub id: u32,
    pub name: &'static str,
    /// ISO 3166-1 alpha-2 country code.
    pub country: &'static str,
    pub online: bool,
    /// Round-trip latency estimate, milliseconds.
    pub ping: u32,
}

static FLEET: [ServerStatus; 6] = [
    ServerStatus { id: 1, name: "Москва",    country: "RU", online: true, ping: 12 },
    ServerStatus { id: 2, name: "Амстердам", country: "NL", online: true, ping: 45 },
    ServerStatus { id: 3, name: "Нью-Йорк",  country: "US", online: true, ping: 120 },
    ServerStatus { id: 4, name: "Токио",     country: "JP", online: true, ping: 180 },
    ServerStatus { id: 5, name: "Сингапур",  country: "SG", online: true, ping: 140 },
    ServerStatus { id: 6, name: "Лондон",    country: "GB", online: true, ping: 55 },
];

/// The full fleet, in publication order.
pub fn fleet() -> &'static [ServerStatus] {
    &FLEET
}

/// The `GET` response body: the fleet plus derived counts.
///
/// `total` and `online` are always computed from the list, never stored, so
/// they cannot drift from it.
#[derive(Debug, Serialize)]
pub struct StatusReport {
    servers: &'static [ServerStatus],
    total: usize,
    online: usize,
}

impl StatusReport {
    pub fn current() -> Self {
        let servers = fleet();
        Self {
            servers,
            total: servers.len(),
            online: servers.iter().filter(|s| s.online).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fleet_has_six_entries_with_sequential_ids() {
        let servers = fleet();
        assert_eq!(servers.len(), 6);
        for (i, server) in servers.iter().enumerate() {
            assert_eq!(server.id as usize, i + 1);
        }
    }

    #[test]
    fn fleet_ids_are_unique() {
        let mut ids: Vec<u32> = fleet().iter().map(|s| s.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), fleet().len());
    }

    #[test]
    fn first_entry_is_moscow() {
        let first = &fleet()[0];
        assert_eq!(first.name, "Москва");
        assert_eq!(first.country, "RU");
        assert!(first.online);
        assert_eq!(first.ping, 12);
    }

    #[test]
    fn report_counts_match_the_list() {
        let report = StatusReport::current();
        assert_eq!(report.total, report.servers.len());
        assert_eq!(report.online, report.servers.iter().filter(|s| s.online).count());
    }

    #[test]
    fn report_serializes_names_unescaped() {
        let json = serde_json::to_string(&StatusReport::current()).unwrap();
        assert!(json.contains(r#""name":"Москва""#));
        assert!(json.contains(r#""country":"RU""#));
    }
}
