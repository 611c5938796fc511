use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::Result;
use crate::store::{CustomerStore, Installation, MemoryStore, PasswordHashing, RegionDirectory};
use crate::types::{Address, Customer, CustomerId, NewCustomer, Website};

/// Installation persisted as a single JSON document.
///
/// Writes go to memory and reach the file only on `commit`, which replaces
/// the file through a temporary sibling and a rename. Work left uncommitted
/// when the store is dropped is lost.
#[derive(Debug)]
pub struct JsonStore {
    path: PathBuf,
    inner: MemoryStore,
}

impl JsonStore {
    /// Open the document at `path`, starting from a default installation when
    /// the file does not exist yet.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let data = if path.exists() {
            let reader = BufReader::new(fs::File::open(&path)?);
            let data: Installation = serde_json::from_reader(reader)?;
            debug!(
                path = %path.display(),
                customers = data.customers.len(),
                "loaded installation"
            );
            data
        } else {
            info!(path = %path.display(), "data file not found, starting a new installation");
            Installation::default()
        };
        Ok(Self {
            path,
            inner: MemoryStore::from_installation(data),
        })
    }

    pub fn with_hashing(mut self, hashing: PasswordHashing) -> Self {
        self.inner = self.inner.with_hashing(hashing);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn websites(&self) -> &[Website] {
        self.inner.websites()
    }

    pub fn directory(&self) -> &RegionDirectory {
        self.inner.directory()
    }

    pub fn installation(&self) -> &Installation {
        self.inner.installation()
    }

    fn persist(&self) -> Result<()> {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        {
            let mut writer = BufWriter::new(fs::File::create(&tmp)?);
            serde_json::to_writer_pretty(&mut writer, self.inner.installation())?;
            writer.flush()?;
        }
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl CustomerStore for JsonStore {
    fn begin(&mut self) -> Result<()> {
        self.inner.begin()
    }

    fn commit(&mut self) -> Result<()> {
        self.inner.commit()?;
        self.persist()?;
        debug!(path = %self.path.display(), "installation written");
        Ok(())
    }

    fn rollback(&mut self) -> Result<()> {
        self.inner.rollback()
    }

    fn find_customer(&self, website_id: u32, email: &str) -> Result<Option<Customer>> {
        self.inner.find_customer(website_id, email)
    }

    fn create_customer(&mut self, customer: NewCustomer) -> Result<CustomerId> {
        self.inner.create_customer(customer)
    }

    fn clear_confirmation(&mut self, id: CustomerId) -> Result<()> {
        self.inner.clear_confirmation(id)
    }

    fn save_address(&mut self, address: Address) -> Result<u64> {
        self.inner.save_address(address)
    }
}
