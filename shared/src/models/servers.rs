use serde::{Deserialize, Serialize};

use super::{ServerId, Tags};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Server {
    pub id: ServerId,
    pub name: String,
    pub ip: String,
    pub banner_url: String,
    pub description: String,
    pub version: String,
    pub online_players: u32,
    pub max_players: u32,
    pub rank: u32,
    pub tags: Tags,
}

impl Server {
    /// Share of slots in use, in percent. Not clamped, so an overfull server
    /// reports more than 100. `None` when the server advertises no slots.
    pub fn occupancy_percent(&self) -> Option<f64> {
        if self.max_players == 0 {
            return None;
        }
        Some(self.online_players as f64 / self.max_players as f64 * 100.0)
    }

    /// Width of the occupancy bar in percent, always within `0..=100`.
    pub fn occupancy_bar_width(&self) -> f64 {
        self.occupancy_percent().map_or(0.0, |p| p.clamp(0.0, 100.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server(online_players: u32, max_players: u32) -> Server {
        Server {
            online_players,
            max_players,
            ..Default::default()
        }
    }

    #[test]
    fn occupancy_is_exact() {
        assert_eq!(server(50, 100).occupancy_percent(), Some(50.0));
        assert_eq!(server(0, 100).occupancy_percent(), Some(0.0));
        assert_eq!(server(100, 100).occupancy_percent(), Some(100.0));
    }

    #[test]
    fn zero_capacity_has_no_occupancy() {
        assert_eq!(server(3, 0).occupancy_percent(), None);
        assert_eq!(server(3, 0).occupancy_bar_width(), 0.0);
    }

    #[test]
    fn bar_width_is_clamped() {
        assert_eq!(server(150, 100).occupancy_percent(), Some(150.0));
        assert_eq!(server(150, 100).occupancy_bar_width(), 100.0);
    }

    #[test]
    fn decodes_camel_case_payload_with_string_tags() {
        let server: Server = serde_json::from_str(
            r#"{
                "id": "3",
                "name": "Skyblock Heaven",
                "ip": "play.example.net",
                "bannerUrl": "https://cdn.example.net/b.png",
                "onlinePlayers": 12,
                "maxPlayers": 40,
                "rank": 1,
                "tags": "Skyblock, Economy"
            }"#,
        )
        .unwrap();
        assert_eq!(server.id, ServerId(3));
        assert_eq!(server.tags.as_slice(), ["Skyblock", "Economy"]);
        assert_eq!(server.version, "");
    }
}
