use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: String,
}

impl Address {
    pub fn single_line(&self) -> String {
        let mut line = format!("{}, {}", self.street, self.city);
        if let Some(state) = &self.state {
            line.push_str(&format!(", {}", state));
        }
        if let Some(postal) = &self.postal_code {
            line.push_str(&format!(" {}", postal));
        }
        line.push_str(&format!(", {}", self.country));
        line
    }
}

/// Datos de la empresa emisora que encabezan todos los documentos.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInfo {
    pub name: String,
    pub address: Option<Address>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
}

impl CompanyInfo {
    pub fn new(name: String) -> Self {
        CompanyInfo {
            name,
            address: None,
            phone: None,
            email: None,
            website: None,
        }
    }

    /// Teléfono, correo y web separados por " | ", omitiendo los vacíos.
    pub fn contact_line(&self) -> String {
        [&self.phone, &self.email, &self.website]
            .iter()
            .filter_map(|field| field.as_deref())
            .filter(|value| !value.trim().is_empty())
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agency {
    pub id: String,
    pub name: String,
    pub contact_person: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: String,
    pub name: String,
    pub destination_id: Option<String>,
    pub stars: Option<u8>,
    pub address: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub id: String,
    pub name: String,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    pub id: String,
    pub name: String,
}

/// Entidades de referencia de solo lectura, resueltas por id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReferenceData {
    pub agencies: Vec<Agency>,
    pub users: Vec<User>,
    pub hotels: Vec<Hotel>,
    pub destinations: Vec<Destination>,
    pub sources: Vec<Source>,
}

impl ReferenceData {
    pub fn agency(&self, id: &str) -> Option<&Agency> {
        self.agencies.iter().find(|a| a.id == id)
    }

    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn hotel(&self, id: &str) -> Option<&Hotel> {
        self.hotels.iter().find(|h| h.id == id)
    }

    pub fn destination(&self, id: &str) -> Option<&Destination> {
        self.destinations.iter().find(|d| d.id == id)
    }

    pub fn source(&self, id: &str) -> Option<&Source> {
        self.sources.iter().find(|s| s.id == id)
    }

    /// Destino de un hotel: el del propio servicio o, si falta, el del hotel.
    pub fn hotel_destination(&self, hotel_id: &str, destination_id: Option<&str>) -> Option<&Destination> {
        destination_id
            .and_then(|id| self.destination(id))
            .or_else(|| {
                self.hotel(hotel_id)
                    .and_then(|h| h.destination_id.as_deref())
                    .and_then(|id| self.destination(id))
            })
    }
}
