use std::io::Write;

use rand::Rng;
use tracing::{debug, info, warn};

use crate::address::{compose_address, RegionPolicy};
use crate::config::{DEFAULT_BATCH_SIZE, DEFAULT_PASSWORD_LENGTH};
use crate::error::{DummyError, Result};
use crate::faker::IdentityGenerator;
use crate::format::OutputFormat;
use crate::store::{CustomerStore, RegionCatalog};
use crate::types::{NewCustomer, Website};

pub const TABLE_HEADERS: [&str; 4] = ["email", "password", "firstname", "lastname"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    pub count: u64,
    pub generate_address: bool,
    /// Shared password for every customer; generated per customer when `None`.
    pub password: Option<String>,
    /// `None` streams one line per customer; `Some` collects rows and renders
    /// them once the run is complete.
    pub format: Option<OutputFormat>,
    pub batch_size: u64,
    pub password_length: usize,
}

impl GenerateOptions {
    pub fn new(count: u64) -> Self {
        Self {
            count,
            generate_address: false,
            password: None,
            format: None,
            batch_size: DEFAULT_BATCH_SIZE,
            password_length: DEFAULT_PASSWORD_LENGTH,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub created: u64,
    pub skipped: u64,
    pub addresses: u64,
    /// Commits issued, including the final one.
    pub commits: u64,
    /// `[email, password, firstname, lastname]` per created customer, only
    /// filled in when a format was requested.
    pub rows: Vec<Vec<String>>,
}

/// Creates `count` dummy customers in one website.
///
/// Every iteration draws an identity and skips it if the email is already
/// registered in the website. The open transaction is committed whenever the
/// iteration index is a multiple of the batch size, and once more at the end.
pub struct DummyCustomerGenerator<'a, S: CustomerStore + ?Sized, R: Rng> {
    store: &'a mut S,
    catalog: &'a dyn RegionCatalog,
    policy: RegionPolicy,
    identities: IdentityGenerator<R>,
    options: GenerateOptions,
}

impl<'a, S: CustomerStore + ?Sized, R: Rng> DummyCustomerGenerator<'a, S, R> {
    pub fn new(
        store: &'a mut S,
        catalog: &'a dyn RegionCatalog,
        identities: IdentityGenerator<R>,
        options: GenerateOptions,
    ) -> Self {
        Self {
            store,
            catalog,
            policy: RegionPolicy::default(),
            identities,
            options,
        }
    }

    pub fn with_policy(mut self, policy: RegionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Run the whole batch, writing status lines or the rendered table to `out`.
    ///
    /// A failing store call aborts the run; whatever was written since the
    /// last commit is rolled back.
    pub fn run<W: Write>(&mut self, website: &Website, mut out: W) -> Result<GenerationReport> {
        if self.options.batch_size == 0 {
            return Err(DummyError::InvalidParameter(
                "batch size must be at least 1".to_string(),
            ));
        }

        info!(
            count = self.options.count,
            locale = %self.identities.locale(),
            website = %website.code,
            "generating dummy customers"
        );

        self.store.begin()?;
        let report = match self.generate(website, &mut out) {
            Ok(report) => report,
            Err(e) => {
                if let Err(rollback_err) = self.store.rollback() {
                    warn!(error = %rollback_err, "rollback after failed run did not succeed");
                }
                return Err(e);
            }
        };

        if let Some(format) = self.options.format {
            format.render(&TABLE_HEADERS, &report.rows, &mut out)?;
        }
        out.flush()?;

        info!(
            created = report.created,
            skipped = report.skipped,
            addresses = report.addresses,
            commits = report.commits,
            "done"
        );
        Ok(report)
    }

    fn generate<W: Write>(&mut self, website: &Website, out: &mut W) -> Result<GenerationReport> {
        let plain = self.options.format.is_none();
        let locale = self.identities.locale();
        let mut report = GenerationReport::default();

        for i in 0..self.options.count {
            let identity = self.identities.next_identity();
            let email = identity.email.clone();

            if self.store.find_customer(website.id, &email)?.is_some() {
                debug!(%email, "customer already exists");
                report.skipped += 1;
                if plain {
                    writeln!(out, "Customer {} already exists", email)?;
                }
            } else {
                let password = match &self.options.password {
                    Some(password) => password.clone(),
                    None => self.identities.password(self.options.password_length),
                };

                let id = self.store.create_customer(NewCustomer {
                    website_id: website.id,
                    email: email.clone(),
                    first_name: identity.first_name.clone(),
                    last_name: identity.last_name.clone(),
                    password: password.clone(),
                })?;
                self.store.clear_confirmation(id)?;
                debug!(%email, customer_id = %id, "customer created");

                if self.options.generate_address {
                    let customer = self
                        .store
                        .find_customer(website.id, &email)?
                        .ok_or(DummyError::CustomerNotFound(id.0))?;
                    let address = compose_address(
                        &customer,
                        &identity,
                        locale,
                        self.catalog,
                        &self.policy,
                        self.identities.rng_mut(),
                    );
                    let address_id = self.store.save_address(address)?;
                    debug!(customer_id = %id, address_id, "address created");
                    report.addresses += 1;
                }

                report.created += 1;
                if plain {
                    writeln!(
                        out,
                        "Customer {} with password {} successfully created",
                        email, password
                    )?;
                } else {
                    report.rows.push(vec![
                        email,
                        password,
                        identity.first_name,
                        identity.last_name,
                    ]);
                }
            }

            if i % self.options.batch_size == 0 {
                self.store.commit()?;
                self.store.begin()?;
                report.commits += 1;
                info!(iteration = i, created = report.created, "batch committed");
            }
        }

        self.store.commit()?;
        report.commits += 1;
        Ok(report)
    }
}
