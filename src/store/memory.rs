use ahash::AHashMap;
use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::error::{DummyError, Result};
use crate::store::{CustomerStore, Installation, PasswordHashing, RegionDirectory, StoredAddress};
use crate::types::{Address, Customer, CustomerId, NewCustomer, Website};

/// State needed to undo an open transaction.
#[derive(Debug)]
struct Journal {
    customers_len: usize,
    addresses_len: usize,
    next_customer_id: u64,
    next_address_id: u64,
    /// customer index -> confirmation before the transaction touched it
    confirmations: Vec<(usize, Option<String>)>,
}

/// In-memory installation with journaled transactions.
#[derive(Debug)]
pub struct MemoryStore {
    data: Installation,
    email_index: AHashMap<(u32, String), usize>,
    journal: Option<Journal>,
    hashing: PasswordHashing,
    commits: usize,
    customer_saves: usize,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::from_installation(Installation::default())
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_installation(data: Installation) -> Self {
        let email_index = data
            .customers
            .iter()
            .enumerate()
            .map(|(idx, c)| ((c.website_id, c.email.clone()), idx))
            .collect();
        Self {
            data,
            email_index,
            journal: None,
            hashing: PasswordHashing::default(),
            commits: 0,
            customer_saves: 0,
        }
    }

    pub fn with_directory(mut self, directory: RegionDirectory) -> Self {
        self.data.directory = directory;
        self
    }

    pub fn with_websites(mut self, websites: Vec<Website>) -> Self {
        self.data.websites = websites;
        self
    }

    pub fn with_hashing(mut self, hashing: PasswordHashing) -> Self {
        self.hashing = hashing;
        self
    }

    pub fn installation(&self) -> &Installation {
        &self.data
    }

    pub fn websites(&self) -> &[Website] {
        &self.data.websites
    }

    pub fn directory(&self) -> &RegionDirectory {
        &self.data.directory
    }

    pub fn customers(&self) -> &[Customer] {
        &self.data.customers
    }

    pub fn addresses(&self) -> &[StoredAddress] {
        &self.data.addresses
    }

    pub fn in_transaction(&self) -> bool {
        self.journal.is_some()
    }

    /// Number of successful commits since construction.
    pub fn commit_count(&self) -> usize {
        self.commits
    }

    /// Number of customer record writes (creates and confirmation updates).
    pub fn customer_saves(&self) -> usize {
        self.customer_saves
    }

    fn journal_mut(&mut self) -> Result<&mut Journal> {
        self.journal.as_mut().ok_or(DummyError::NoTransaction)
    }

    fn customer_index(&self, id: CustomerId) -> Option<usize> {
        // Ids are assigned in insertion order, so a binary search suffices.
        self.data
            .customers
            .binary_search_by_key(&id, |c| c.id)
            .ok()
    }
}

impl CustomerStore for MemoryStore {
    fn begin(&mut self) -> Result<()> {
        if self.journal.is_some() {
            return Err(DummyError::TransactionOpen);
        }
        self.journal = Some(Journal {
            customers_len: self.data.customers.len(),
            addresses_len: self.data.addresses.len(),
            next_customer_id: self.data.next_customer_id,
            next_address_id: self.data.next_address_id,
            confirmations: Vec::new(),
        });
        Ok(())
    }

    fn commit(&mut self) -> Result<()> {
        self.journal.take().ok_or(DummyError::NoTransaction)?;
        self.commits += 1;
        Ok(())
    }

    fn rollback(&mut self) -> Result<()> {
        let journal = self.journal.take().ok_or(DummyError::NoTransaction)?;
        for (idx, previous) in journal.confirmations.into_iter().rev() {
            if let Some(customer) = self.data.customers.get_mut(idx) {
                customer.confirmation = previous;
            }
        }
        for customer in self.data.customers.drain(journal.customers_len..) {
            self.email_index.remove(&(customer.website_id, customer.email));
        }
        self.data.addresses.truncate(journal.addresses_len);
        self.data.next_customer_id = journal.next_customer_id;
        self.data.next_address_id = journal.next_address_id;
        debug!("rolled back open transaction");
        Ok(())
    }

    fn find_customer(&self, website_id: u32, email: &str) -> Result<Option<Customer>> {
        Ok(self
            .email_index
            .get(&(website_id, email.to_string()))
            .and_then(|&idx| self.data.customers.get(idx))
            .cloned())
    }

    fn create_customer(&mut self, customer: NewCustomer) -> Result<CustomerId> {
        self.journal_mut()?;
        let key = (customer.website_id, customer.email.clone());
        if self.email_index.contains_key(&key) {
            return Err(DummyError::DuplicateCustomer(customer.email, customer.website_id));
        }

        let password_hash = self.hashing.hash(&customer.password)?;
        let id = CustomerId(self.data.next_customer_id);
        self.data.next_customer_id += 1;
        self.data.customers.push(Customer {
            id,
            website_id: customer.website_id,
            email: customer.email,
            first_name: customer.first_name,
            last_name: customer.last_name,
            password_hash,
            confirmation: Some(Uuid::new_v4().simple().to_string()),
            created_at: Utc::now(),
        });
        self.email_index.insert(key, self.data.customers.len() - 1);
        self.customer_saves += 1;
        Ok(id)
    }

    fn clear_confirmation(&mut self, id: CustomerId) -> Result<()> {
        self.journal_mut()?;
        let idx = self
            .customer_index(id)
            .ok_or(DummyError::CustomerNotFound(id.0))?;
        let previous = self.data.customers[idx].confirmation.take();
        self.journal_mut()?.confirmations.push((idx, previous));
        self.customer_saves += 1;
        Ok(())
    }

    fn save_address(&mut self, address: Address) -> Result<u64> {
        self.journal_mut()?;
        if self.customer_index(address.customer_id).is_none() {
            return Err(DummyError::CustomerNotFound(address.customer_id.0));
        }
        let id = self.data.next_address_id;
        self.data.next_address_id += 1;
        self.data.addresses.push(StoredAddress {
            id,
            created_at: Utc::now(),
            address,
        });
        Ok(id)
    }
}
