use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Active,
    Closed,
    Paused,
}

impl Status {
    /// Label shown to sellers in the listing table.
    pub fn label(&self) -> &'static str {
        match self {
            Status::Active => "Ativo",
            Status::Closed => "Inativo",
            Status::Paused => "Pausado",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Marketplace account that owns a listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Account {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// A marketplace listing as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Announcement {
    pub id: String,
    pub title: String,
    pub quantity: u32,
    #[serde(default)]
    pub status: Status,
    pub price: f64,
    pub picture: String,
    pub sku: String,
    pub link: String,
    #[serde(default)]
    pub account: Account,
}

/// Body of `POST /announcement`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloneRequest {
    pub root_id: String,
    pub titles: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_announcement_from_api_json() {
        let json = serde_json::json!({
            "id": "MLB123",
            "title": "Camiseta Azul",
            "quantity": 7,
            "status": "paused",
            "price": 59.9,
            "picture": "https://img.example.com/1.jpg",
            "sku": "CAM-AZ",
            "link": "https://produto.example.com/MLB123",
            "account": {"id": "acc-1", "name": "Loja Centro"}
        });

        let ann: Announcement = serde_json::from_value(json).unwrap();
        assert_eq!(ann.status, Status::Paused);
        assert_eq!(ann.status.label(), "Pausado");
        assert_eq!(ann.account.name, "Loja Centro");
    }

    #[test]
    fn test_announcement_without_status_or_account() {
        let json = serde_json::json!({
            "id": "MLB9",
            "title": "Caneca",
            "quantity": 1,
            "price": 20,
            "picture": "",
            "sku": "CAN",
            "link": ""
        });

        let ann: Announcement = serde_json::from_value(json).unwrap();
        assert_eq!(ann.status, Status::Active);
        assert_eq!(ann.account, Account::default());
    }

    #[test]
    fn test_clone_request_wire_shape() {
        let req = CloneRequest {
            root_id: "MLB1".to_string(),
            titles: vec!["A".to_string(), "B".to_string()],
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({"root_id": "MLB1", "titles": ["A", "B"]})
        );
    }
}
