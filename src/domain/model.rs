use crate::utils::error::{CatalogError, Result};
use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

const SERVICES_KEY: &str = "services";

/// One sellable item inside a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub pregunta: String,
    pub precio: String,
    /// `null` in records stored before stock input was validated.
    pub stock: Option<u32>,
    #[serde(default)]
    pub descripcion: String,
    /// Fields this crate does not interpret, kept in file order.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Service {
    pub fn new(
        id: impl Into<String>,
        pregunta: impl Into<String>,
        precio: impl Into<String>,
        stock: u32,
        descripcion: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            pregunta: pregunta.into(),
            precio: precio.into(),
            stock: Some(stock),
            descripcion: descripcion.into(),
            extra: Map::new(),
        }
    }
}

/// The persisted catalog file.
///
/// Only `services` is interpreted; every other top-level field of the bot
/// configuration is carried through `extra`. Categories, fields and the
/// position of `services` among the top-level keys keep their file order, so
/// a rewrite only differs where the catalog changed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct CatalogDocument {
    pub services: IndexMap<String, Vec<Service>>,
    pub extra: Map<String, Value>,
    services_index: usize,
}

impl TryFrom<Map<String, Value>> for CatalogDocument {
    type Error = serde_json::Error;

    fn try_from(root: Map<String, Value>) -> std::result::Result<Self, Self::Error> {
        let mut services = None;
        let mut services_index = 0;
        let mut extra = Map::new();

        for (key, value) in root {
            if key == SERVICES_KEY {
                services_index = extra.len();
                services = Some(serde_json::from_value(value)?);
            } else {
                extra.insert(key, value);
            }
        }

        let services = services
            .ok_or_else(|| <serde_json::Error as serde::de::Error>::missing_field(SERVICES_KEY))?;
        Ok(Self {
            services,
            extra,
            services_index,
        })
    }
}

impl Serialize for CatalogDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let at = self.services_index.min(self.extra.len());
        let mut map = serializer.serialize_map(Some(self.extra.len() + 1))?;

        for (i, (key, value)) in self.extra.iter().enumerate() {
            if i == at {
                map.serialize_entry(SERVICES_KEY, &self.services)?;
            }
            map.serialize_entry(key, value)?;
        }
        if at == self.extra.len() {
            map.serialize_entry(SERVICES_KEY, &self.services)?;
        }

        map.end()
    }
}

impl CatalogDocument {
    pub fn category(&self, name: &str) -> Option<&[Service]> {
        self.services.get(name).map(Vec::as_slice)
    }

    pub fn find_service(&self, category: &str, id: &str) -> Option<&Service> {
        self.category(category)?.iter().find(|s| s.id == id)
    }

    /// Appends `service` to `category`, creating the category when missing.
    ///
    /// Returns whether the category was created. A duplicate id leaves the
    /// document untouched.
    pub fn add_service(&mut self, category: &str, service: Service) -> Result<bool> {
        if let Some(existing) = self.services.get_mut(category) {
            if existing.iter().any(|s| s.id == service.id) {
                return Err(CatalogError::DuplicateIdError {
                    category: category.to_string(),
                    id: service.id,
                });
            }
            existing.push(service);
            return Ok(false);
        }

        self.services.insert(category.to_string(), vec![service]);
        Ok(true)
    }

    /// Removes the service `id` from `category`.
    ///
    /// Returns whether the category was dropped because it became empty.
    pub fn remove_service(&mut self, category: &str, id: &str) -> Result<bool> {
        let entries = self
            .services
            .get_mut(category)
            .ok_or_else(|| CatalogError::CategoryNotFound {
                category: category.to_string(),
            })?;

        let before = entries.len();
        entries.retain(|s| s.id != id);
        if entries.len() == before {
            return Err(CatalogError::ServiceNotFound {
                category: category.to_string(),
                id: id.to_string(),
            });
        }

        if entries.is_empty() {
            self.services.shift_remove(category);
            return Ok(true);
        }
        Ok(false)
    }
}
