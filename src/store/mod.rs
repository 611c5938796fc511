pub mod directory;
pub mod json;
pub mod memory;
pub mod password;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{Address, Customer, CustomerId, NewCustomer, Region, Website};

pub use directory::RegionDirectory;
pub use json::JsonStore;
pub use memory::MemoryStore;
pub use password::{verify_password, PasswordHashing};

/// Transactional customer persistence.
///
/// Creating a customer is a two-step protocol: `create_customer` stores the
/// record with a pending confirmation token and returns its id, then
/// `clear_confirmation` marks it confirmed.
pub trait CustomerStore {
    fn begin(&mut self) -> Result<()>;
    fn commit(&mut self) -> Result<()>;
    /// Discard everything written since the last `begin`.
    fn rollback(&mut self) -> Result<()>;

    fn find_customer(&self, website_id: u32, email: &str) -> Result<Option<Customer>>;
    fn create_customer(&mut self, customer: NewCustomer) -> Result<CustomerId>;
    fn clear_confirmation(&mut self, id: CustomerId) -> Result<()>;
    fn save_address(&mut self, address: Address) -> Result<u64>;
}

/// Country -> region reference data.
pub trait RegionCatalog {
    /// Regions of a recognized country, `None` when the country is unknown
    /// to the installation. An empty slice is treated like `None`.
    fn regions(&self, country_id: &str) -> Option<&[Region]>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredAddress {
    pub id: u64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(flatten)]
    pub address: Address,
}

/// Everything an installation persists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Installation {
    pub websites: Vec<Website>,
    pub directory: RegionDirectory,
    #[serde(default)]
    pub customers: Vec<Customer>,
    #[serde(default)]
    pub addresses: Vec<StoredAddress>,
    #[serde(default = "first_id")]
    pub next_customer_id: u64,
    #[serde(default = "first_id")]
    pub next_address_id: u64,
}

fn first_id() -> u64 {
    1
}

impl Default for Installation {
    fn default() -> Self {
        Self {
            websites: vec![Website {
                id: 1,
                code: "base".to_string(),
                name: "Main Website".to_string(),
            }],
            directory: RegionDirectory::with_defaults(),
            customers: Vec::new(),
            addresses: Vec::new(),
            next_customer_id: 1,
            next_address_id: 1,
        }
    }
}
