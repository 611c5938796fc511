use std::io::Cursor;

use rand::rngs::StdRng;
use rand::SeedableRng;

use dummy_customers::address::{compose_address, RegionFallback, RegionPolicy};
use dummy_customers::config::Config;
use dummy_customers::error::{DummyError, Result};
use dummy_customers::faker::locale::{en, fr};
use dummy_customers::faker::IdentityGenerator;
use dummy_customers::format::OutputFormat;
use dummy_customers::generator::{DummyCustomerGenerator, GenerateOptions, GenerationReport};
use dummy_customers::store::{
    verify_password, CustomerStore, JsonStore, MemoryStore, PasswordHashing, RegionCatalog,
    RegionDirectory,
};
use dummy_customers::types::{
    country_code, Address, Customer, CustomerId, Locale, NewCustomer, Region, Website,
};
use dummy_customers::website::WebsiteResolver;

/// Minimum Argon2id cost so large runs stay fast.
fn light_hashing() -> PasswordHashing {
    PasswordHashing::new(8, 1).unwrap()
}

fn make_store() -> MemoryStore {
    MemoryStore::new().with_hashing(light_hashing())
}

fn make_website() -> Website {
    Website {
        id: 1,
        code: "base".to_string(),
        name: "Main Website".to_string(),
    }
}

fn run_generator<S: CustomerStore>(
    store: &mut S,
    directory: &RegionDirectory,
    locale: Locale,
    options: GenerateOptions,
    seed: u64,
) -> (GenerationReport, String) {
    let identities = IdentityGenerator::new(locale, StdRng::seed_from_u64(seed));
    let mut output = Vec::new();
    let report = DummyCustomerGenerator::new(store, directory, identities, options)
        .run(&make_website(), &mut output)
        .unwrap();
    (report, String::from_utf8(output).unwrap())
}

fn fixed_password_options(count: u64) -> GenerateOptions {
    let mut options = GenerateOptions::new(count);
    options.password = Some("fixed123".to_string());
    options
}

fn address_options(count: u64) -> GenerateOptions {
    let mut options = GenerateOptions::new(count);
    options.generate_address = true;
    options
}

// --- locale handling ---

#[test]
fn test_country_code_is_last_segment() {
    assert_eq!(country_code("en_US"), "US");
    assert_eq!(country_code("sr_Cyrl_RS"), "RS");
    assert_eq!(country_code("de_AT"), "AT");
    assert_eq!(Locale::SrLatnRs.country_code(), "RS");
    assert_eq!(Locale::CsCz.country_code(), "CZ");
}

#[test]
fn test_locale_parse_supported() {
    for locale in Locale::ALL {
        assert_eq!(locale.tag().parse::<Locale>().unwrap(), locale);
    }
}

#[test]
fn test_locale_parse_unsupported() {
    assert!(matches!(
        "nl_NL".parse::<Locale>(),
        Err(DummyError::UnsupportedLocale(tag)) if tag == "nl_NL"
    ));
}

#[test]
fn test_locale_parse_malformed() {
    assert!(matches!("english".parse::<Locale>(), Err(DummyError::InvalidLocale(_))));
    assert!(matches!("en-US".parse::<Locale>(), Err(DummyError::InvalidLocale(_))));
}

#[test]
fn test_every_locale_produces_an_identity() {
    for locale in Locale::ALL {
        let mut gen = IdentityGenerator::new(locale, StdRng::seed_from_u64(1));
        let identity = gen.next_identity();
        assert!(identity.email.contains('@'), "{}: {}", locale, identity.email);
        assert!(identity.email.is_ascii(), "{}: {}", locale, identity.email);
        assert!(!identity.first_name.is_empty());
        assert!(!identity.last_name.is_empty());
        assert!(!identity.city.is_empty());
        assert!(!identity.phone.is_empty());
        let caps = gen.capabilities();
        assert_eq!(identity.street_address.is_some(), caps.street_address);
        assert_eq!(identity.state.is_some(), caps.state);
    }
}

#[test]
fn test_capabilities_reflect_locale_tables() {
    let gen = IdentityGenerator::new(Locale::SrCyrlRs, StdRng::seed_from_u64(1));
    let caps = gen.capabilities();
    assert!(!caps.street_address);
    assert!(!caps.state);

    let gen = IdentityGenerator::new(Locale::EnUs, StdRng::seed_from_u64(1));
    let caps = gen.capabilities();
    assert!(caps.street_address);
    assert!(caps.state);
}

#[test]
fn test_generated_password_is_alphanumeric() {
    let mut gen = IdentityGenerator::new(Locale::EnUs, StdRng::seed_from_u64(3));
    let password = gen.password(8);
    assert_eq!(password.len(), 8);
    assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));
}

// --- generation runs ---

#[test]
fn test_fixed_password_without_address() {
    let mut store = make_store();
    let directory = store.directory().clone();
    let (report, output) =
        run_generator(&mut store, &directory, Locale::EnUs, fixed_password_options(3), 11);

    assert_eq!(report.created, 3);
    assert_eq!(report.addresses, 0);
    assert_eq!(store.customers().len(), 3);
    assert!(store.addresses().is_empty());
    for customer in store.customers() {
        assert!(customer.password_hash.starts_with("$argon2id$"));
        assert!(verify_password(&customer.password_hash, "fixed123"));
        assert!(!verify_password(&customer.password_hash, "other"));
    }
    assert_eq!(output.lines().count(), 3);
    for line in output.lines() {
        assert!(line.starts_with("Customer "));
        assert!(line.ends_with(" with password fixed123 successfully created"));
    }
}

#[test]
fn test_two_step_create_clears_confirmation() {
    let mut store = make_store();
    let directory = store.directory().clone();
    let (report, _) = run_generator(&mut store, &directory, Locale::DeDe, GenerateOptions::new(5), 4);

    assert_eq!(store.customer_saves() as u64, report.created * 2);
    for customer in store.customers() {
        assert!(customer.confirmation.is_none());
        assert_eq!(customer.website_id, 1);
    }
}

#[test]
fn test_generated_passwords_are_reported() {
    let mut store = make_store();
    let directory = store.directory().clone();
    let (_, output) = run_generator(&mut store, &directory, Locale::EnGb, GenerateOptions::new(4), 9);

    let customers = store.customers();
    for (line, customer) in output.lines().zip(customers) {
        let password = line
            .split(" with password ")
            .nth(1)
            .and_then(|rest| rest.strip_suffix(" successfully created"))
            .unwrap();
        assert_eq!(password.len(), 8);
        assert!(verify_password(&customer.password_hash, password));
    }
}

#[test]
fn test_zero_count_commits_once() {
    let mut store = make_store();
    let directory = store.directory().clone();
    let (report, output) = run_generator(&mut store, &directory, Locale::EnUs, GenerateOptions::new(0), 1);

    assert_eq!(report.created, 0);
    assert_eq!(report.commits, 1);
    assert_eq!(store.commit_count(), 1);
    assert!(output.is_empty());
    assert!(!store.in_transaction());
}

#[test]
fn test_batch_commit_boundaries() {
    let mut store = make_store();
    let directory = store.directory().clone();
    let (report, _) =
        run_generator(&mut store, &directory, Locale::EnUs, fixed_password_options(2500), 5);

    // iterations 0, 1000 and 2000, then the final commit
    assert_eq!(report.commits, 4);
    assert_eq!(store.commit_count(), 4);
    assert!(report.created <= 2500);
    assert_eq!(report.created + report.skipped, 2500);
    assert_eq!(store.customers().len() as u64, report.created);
}

#[test]
fn test_custom_batch_size() {
    let mut store = make_store();
    let directory = store.directory().clone();
    let mut options = fixed_password_options(10);
    options.batch_size = 4;
    let (report, _) = run_generator(&mut store, &directory, Locale::EnUs, options, 5);

    // iterations 0, 4 and 8, then the final commit
    assert_eq!(report.commits, 4);
}

#[test]
fn test_rerun_with_same_seed_creates_nothing() {
    let mut store = make_store();
    let directory = store.directory().clone();
    let (first, _) = run_generator(&mut store, &directory, Locale::EnUs, fixed_password_options(50), 42);
    let customers_after_first = store.customers().len();
    assert_eq!(customers_after_first as u64, first.created);

    let (second, output) =
        run_generator(&mut store, &directory, Locale::EnUs, fixed_password_options(50), 42);
    assert_eq!(second.created, 0);
    assert_eq!(second.skipped, 50);
    assert_eq!(store.customers().len(), customers_after_first);
    assert_eq!(output.lines().count(), 50);
    assert!(output.lines().all(|l| l.ends_with(" already exists")));
}

#[test]
fn test_structured_output_omits_duplicates() {
    let mut store = make_store();
    let directory = store.directory().clone();
    run_generator(&mut store, &directory, Locale::EnUs, fixed_password_options(5), 77);

    let mut options = fixed_password_options(5);
    options.format = Some(OutputFormat::Json);
    let (report, output) = run_generator(&mut store, &directory, Locale::EnUs, options, 77);

    assert_eq!(report.created, 0);
    assert_eq!(report.skipped, 5);
    assert!(report.rows.is_empty());
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed, serde_json::json!([]));
}

#[test]
fn test_structured_output_collects_rows() {
    let mut store = make_store();
    let directory = store.directory().clone();
    let mut options = fixed_password_options(3);
    options.format = Some(OutputFormat::Csv);
    let (report, output) = run_generator(&mut store, &directory, Locale::ItIt, options, 8);

    assert_eq!(report.rows.len() as u64, report.created);
    let mut lines = output.lines();
    assert_eq!(lines.next(), Some("email,password,firstname,lastname"));
    for (row, customer) in report.rows.iter().zip(store.customers()) {
        assert_eq!(row[0], customer.email);
        assert_eq!(row[1], "fixed123");
        assert_eq!(row[2], customer.first_name);
        assert_eq!(row[3], customer.last_name);
    }
    assert_eq!(lines.count() as u64, report.created);
}

// --- addresses ---

#[test]
fn test_unrecognized_suppressed_country_has_no_region() {
    let mut store = make_store();
    let directory = store.directory().clone();
    assert!(directory.regions("CZ").is_none());

    let (report, _) = run_generator(&mut store, &directory, Locale::CsCz, address_options(1), 21);

    assert_eq!(report.created, 1);
    assert_eq!(store.customers().len(), 1);
    assert_eq!(store.addresses().len(), 1);
    let address = &store.addresses()[0].address;
    assert_eq!(address.country_id, "CZ");
    assert_eq!(address.region, None);
    assert_eq!(address.region_id, None);
    assert!(address.default_billing);
    assert!(address.default_shipping);
    assert_eq!(address.customer_id, store.customers()[0].id);
}

#[test]
fn test_bg_and_pl_regions_suppressed() {
    for locale in [Locale::BgBg, Locale::PlPl] {
        let mut store = make_store();
        let directory = store.directory().clone();
        run_generator(&mut store, &directory, locale, address_options(10), 2);
        assert!(!store.addresses().is_empty());
        for stored in store.addresses() {
            assert_eq!(stored.address.region, None, "{}", locale);
            assert_eq!(stored.address.region_id, None, "{}", locale);
        }
    }
}

#[test]
fn test_recognized_country_uses_catalog_region() {
    let mut store = make_store();
    let directory = store.directory().clone();
    let us_regions = directory.regions("US").unwrap().to_vec();

    run_generator(&mut store, &directory, Locale::EnUs, address_options(25), 13);

    assert!(!store.addresses().is_empty());
    for stored in store.addresses() {
        let address = &stored.address;
        assert_eq!(address.country_id, "US");
        let region_id = address.region_id.unwrap();
        let region = us_regions.iter().find(|r| r.id == region_id).unwrap();
        assert_eq!(address.region.as_deref(), Some(region.name.as_str()));
    }
}

#[test]
fn test_catalog_overrides_suppression_list() {
    let mut directory = RegionDirectory::new();
    directory.insert(
        "CZ",
        vec![Region {
            id: 900,
            code: "PHA".to_string(),
            name: "Praha".to_string(),
        }],
    );
    let mut store = make_store().with_directory(directory.clone());

    run_generator(&mut store, &directory, Locale::CsCz, address_options(3), 6);

    for stored in store.addresses() {
        assert_eq!(stored.address.region_id, Some(900));
        assert_eq!(stored.address.region.as_deref(), Some("Praha"));
    }
}

#[test]
fn test_unrecognized_country_uses_raw_state() {
    let mut store = make_store();
    let directory = store.directory().clone();
    assert!(directory.regions("FR").is_none());

    run_generator(&mut store, &directory, Locale::FrFr, address_options(5), 31);

    for stored in store.addresses() {
        let region = stored.address.region.as_deref().unwrap();
        assert!(fr::REGIONS.contains(&region));
        assert_eq!(stored.address.region_id, None);
    }
}

#[test]
fn test_locale_without_states_leaves_region_empty() {
    let mut store = make_store();
    let directory = store.directory().clone();
    run_generator(&mut store, &directory, Locale::SrLatnRs, address_options(3), 12);

    for stored in store.addresses() {
        assert_eq!(stored.address.country_id, "RS");
        assert_eq!(stored.address.region, None);
    }
}

fn sample_customer() -> Customer {
    Customer {
        id: CustomerId(7),
        website_id: 1,
        email: "jane.doe@example.com".to_string(),
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        password_hash: String::new(),
        confirmation: None,
        created_at: chrono::Utc::now(),
    }
}

#[test]
fn test_street_falls_back_to_number_and_name() {
    let mut gen = IdentityGenerator::new(Locale::BgBg, StdRng::seed_from_u64(10));
    let identity = gen.next_identity();
    assert!(identity.street_address.is_none());

    let mut rng = StdRng::seed_from_u64(10);
    let address = compose_address(
        &sample_customer(),
        &identity,
        Locale::BgBg,
        &RegionDirectory::new(),
        &RegionPolicy::default(),
        &mut rng,
    );
    assert_eq!(
        address.street,
        format!("{} {}", identity.building_number, identity.street_name)
    );
    assert_eq!(address.telephone, identity.phone);
    assert_eq!(address.email, "jane.doe@example.com");
    assert_eq!(address.first_name, "Jane");
}

#[test]
fn test_policy_override_restores_raw_state() {
    let mut gen = IdentityGenerator::new(Locale::PlPl, StdRng::seed_from_u64(10));
    let identity = gen.next_identity();
    let raw_state = identity.state.clone().unwrap();
    assert!(en::STATES.contains(&raw_state.as_str()));

    let policy = RegionPolicy::default().with_overrides([("PL", RegionFallback::UseRaw)]);
    let mut rng = StdRng::seed_from_u64(10);
    let address = compose_address(
        &sample_customer(),
        &identity,
        Locale::PlPl,
        &RegionDirectory::new(),
        &policy,
        &mut rng,
    );
    assert_eq!(address.region, Some(raw_state));
}

// --- failure handling ---

/// Claims to know every country but lists no regions.
struct EmptyCatalog;

impl RegionCatalog for EmptyCatalog {
    fn regions(&self, _country_id: &str) -> Option<&[Region]> {
        Some(&[])
    }
}

#[test]
fn test_empty_region_list_does_not_panic() {
    let mut store = make_store();
    let identities = IdentityGenerator::new(Locale::EnUs, StdRng::seed_from_u64(23));
    let mut out = Vec::new();
    let report = DummyCustomerGenerator::new(&mut store, &EmptyCatalog, identities, address_options(5))
        .run(&make_website(), &mut out)
        .unwrap();

    assert_eq!(report.addresses, 5);
    for stored in store.addresses() {
        assert_eq!(stored.address.region_id, None);
        assert!(stored.address.region.is_some());
    }
}

/// Delegates to a `MemoryStore` but refuses the address save after `fail_after` successes.
struct FailingStore {
    inner: MemoryStore,
    fail_after: usize,
    saved: usize,
}

impl CustomerStore for FailingStore {
    fn begin(&mut self) -> Result<()> {
        self.inner.begin()
    }

    fn commit(&mut self) -> Result<()> {
        self.inner.commit()
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
        if self.saved >= self.fail_after {
            return Err(DummyError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "connection lost",
            )));
        }
        self.saved += 1;
        self.inner.save_address(address)
    }
}

#[test]
fn test_store_failure_aborts_and_drops_uncommitted_tail() {
    let mut store = FailingStore {
        inner: make_store(),
        fail_after: 3,
        saved: 0,
    };
    let directory = store.inner.directory().clone();
    let identities = IdentityGenerator::new(Locale::EnUs, StdRng::seed_from_u64(99));
    let mut output = Vec::new();
    let result = DummyCustomerGenerator::new(&mut store, &directory, identities, address_options(10))
        .run(&make_website(), &mut output);

    assert!(matches!(result, Err(DummyError::Io(_))));
    // Iteration 0 was committed; everything after it was rolled back.
    assert_eq!(store.inner.customers().len(), 1);
    assert_eq!(store.inner.addresses().len(), 1);
    assert!(!store.inner.in_transaction());
}

#[test]
fn test_zero_batch_size_rejected() {
    let mut store = make_store();
    let directory = store.directory().clone();
    let mut options = GenerateOptions::new(3);
    options.batch_size = 0;
    let identities = IdentityGenerator::new(Locale::EnUs, StdRng::seed_from_u64(1));
    let result = DummyCustomerGenerator::new(&mut store, &directory, identities, options)
        .run(&make_website(), Vec::new());
    assert!(matches!(result, Err(DummyError::InvalidParameter(_))));
    assert_eq!(store.commit_count(), 0);
}

// --- stores ---

#[test]
fn test_memory_store_rejects_writes_outside_transaction() {
    let mut store = make_store();
    let result = store.create_customer(NewCustomer {
        website_id: 1,
        email: "a@example.com".to_string(),
        first_name: "A".to_string(),
        last_name: "B".to_string(),
        password: "pw".to_string(),
    });
    assert!(matches!(result, Err(DummyError::NoTransaction)));
    assert!(matches!(store.commit(), Err(DummyError::NoTransaction)));
}

#[test]
fn test_memory_store_rollback_restores_state() {
    let mut store = make_store();
    store.begin().unwrap();
    let id = store
        .create_customer(NewCustomer {
            website_id: 1,
            email: "keep@example.com".to_string(),
            first_name: "Keep".to_string(),
            last_name: "Me".to_string(),
            password: "pw".to_string(),
        })
        .unwrap();
    store.commit().unwrap();

    store.begin().unwrap();
    store.clear_confirmation(id).unwrap();
    store
        .create_customer(NewCustomer {
            website_id: 1,
            email: "drop@example.com".to_string(),
            first_name: "Drop".to_string(),
            last_name: "Me".to_string(),
            password: "pw".to_string(),
        })
        .unwrap();
    store.rollback().unwrap();

    assert_eq!(store.customers().len(), 1);
    assert!(store.customers()[0].confirmation.is_some());
    assert!(store.find_customer(1, "drop@example.com").unwrap().is_none());
    assert!(store.find_customer(1, "keep@example.com").unwrap().is_some());
    // same email in another website is a different customer
    assert!(store.find_customer(2, "keep@example.com").unwrap().is_none());
}

#[test]
fn test_memory_store_refuses_duplicate_email() {
    let mut store = make_store();
    store.begin().unwrap();
    let new = NewCustomer {
        website_id: 1,
        email: "dup@example.com".to_string(),
        first_name: "D".to_string(),
        last_name: "U".to_string(),
        password: "pw".to_string(),
    };
    store.create_customer(new.clone()).unwrap();
    assert!(matches!(
        store.create_customer(new),
        Err(DummyError::DuplicateCustomer(_, 1))
    ));
}

#[test]
fn test_json_store_persists_only_commits() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("customers.json");

    {
        let mut store = JsonStore::open(&path).unwrap().with_hashing(light_hashing());
        assert!(!path.exists());
        let directory = store.directory().clone();
        let (report, _) =
            run_generator(&mut store, &directory, Locale::EnUs, address_options(4), 3);
        assert_eq!(report.created, 4);
        assert!(path.exists());

        // left open and dropped: never reaches the file
        store.begin().unwrap();
        store
            .create_customer(NewCustomer {
                website_id: 1,
                email: "lost@example.com".to_string(),
                first_name: "Lost".to_string(),
                last_name: "Write".to_string(),
                password: "pw".to_string(),
            })
            .unwrap();
    }

    let store = JsonStore::open(&path).unwrap().with_hashing(light_hashing());
    let data = store.installation();
    assert_eq!(data.customers.len(), 4);
    assert_eq!(data.addresses.len(), 4);
    assert_eq!(data.next_customer_id, 5);
    assert!(store.find_customer(1, "lost@example.com").unwrap().is_none());
    assert_eq!(store.websites()[0].code, "base");
}

#[test]
fn test_json_store_rerun_skips_existing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("customers.json");

    let first = {
        let mut store = JsonStore::open(&path).unwrap().with_hashing(light_hashing());
        let directory = store.directory().clone();
        run_generator(&mut store, &directory, Locale::DeAt, fixed_password_options(6), 17).0
    };

    let mut store = JsonStore::open(&path).unwrap().with_hashing(light_hashing());
    let directory = store.directory().clone();
    let (second, _) =
        run_generator(&mut store, &directory, Locale::DeAt, fixed_password_options(6), 17);
    assert_eq!(second.created, 0);
    assert_eq!(second.skipped, 6);
    assert_eq!(store.installation().customers.len() as u64, first.created);
}

// --- website resolution ---

fn make_websites() -> Vec<Website> {
    vec![
        make_website(),
        Website {
            id: 2,
            code: "wholesale".to_string(),
            name: "Wholesale".to_string(),
        },
    ]
}

#[test]
fn test_website_resolved_by_code_or_id() {
    let websites = make_websites();
    let resolver = WebsiteResolver::new(&websites);
    let mut prompt = Vec::new();
    let by_code = resolver
        .resolve(Some("wholesale"), Cursor::new(""), &mut prompt)
        .unwrap();
    assert_eq!(by_code.id, 2);
    let by_id = resolver.resolve(Some("1"), Cursor::new(""), &mut prompt).unwrap();
    assert_eq!(by_id.code, "base");
    assert!(prompt.is_empty());
}

#[test]
fn test_unknown_website_rejected() {
    let websites = make_websites();
    let resolver = WebsiteResolver::new(&websites);
    let result = resolver.resolve(Some("retail"), Cursor::new(""), Vec::new());
    assert!(matches!(result, Err(DummyError::UnknownWebsite(code)) if code == "retail"));
}

#[test]
fn test_single_website_needs_no_prompt() {
    let websites = vec![make_website()];
    let mut prompt = Vec::new();
    let website = WebsiteResolver::new(&websites)
        .resolve(None, Cursor::new(""), &mut prompt)
        .unwrap();
    assert_eq!(website.id, 1);
    assert!(prompt.is_empty());
}

#[test]
fn test_website_prompt_accepts_number_or_code() {
    let websites = make_websites();
    let resolver = WebsiteResolver::new(&websites);

    let mut prompt = Vec::new();
    let website = resolver.resolve(None, Cursor::new("2\n"), &mut prompt).unwrap();
    assert_eq!(website.code, "wholesale");
    let text = String::from_utf8(prompt).unwrap();
    assert!(text.contains("[1] base - Main Website"));
    assert!(text.contains("[2] wholesale - Wholesale"));

    let website = resolver.resolve(None, Cursor::new("base\n"), Vec::new()).unwrap();
    assert_eq!(website.id, 1);

    let result = resolver.resolve(None, Cursor::new("7\n"), Vec::new());
    assert!(matches!(result, Err(DummyError::InvalidWebsiteChoice(_))));
}

#[test]
fn test_no_websites() {
    let result = WebsiteResolver::new(&[]).resolve(None, Cursor::new(""), Vec::new());
    assert!(matches!(result, Err(DummyError::NoWebsites)));
}

// --- renderers ---

fn sample_rows() -> Vec<Vec<String>> {
    vec![
        vec![
            "anna.novak@example.com".to_string(),
            "fixed123".to_string(),
            "Anna".to_string(),
            "Novák".to_string(),
        ],
        vec![
            "jan@example.org".to_string(),
            "x".to_string(),
            "Jan".to_string(),
            "Dvořák".to_string(),
        ],
    ]
}

const HEADERS: [&str; 4] = ["email", "password", "firstname", "lastname"];

#[test]
fn test_format_names_and_parse() {
    assert_eq!(OutputFormat::names(), "text,csv,json,yaml");
    assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    assert_eq!("yml".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
    let err = "xml".parse::<OutputFormat>().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unknown output format 'xml'. One of [text,csv,json,yaml]"
    );
}

#[test]
fn test_text_table_alignment() {
    let mut output = Vec::new();
    OutputFormat::Text
        .render(&HEADERS, &sample_rows(), &mut output)
        .unwrap();
    let text = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], lines[2]);
    assert_eq!(lines[0], lines[5]);
    assert!(lines[1].starts_with("| email "));
    assert!(lines[3].contains("| Novák    |"));
    let width = lines[0].chars().count();
    assert!(lines.iter().all(|l| l.chars().count() == width));
}

#[test]
fn test_json_rendering() {
    let mut output = Vec::new();
    OutputFormat::Json
        .render(&HEADERS, &sample_rows(), &mut output)
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(parsed[0]["email"], "anna.novak@example.com");
    assert_eq!(parsed[1]["lastname"], "Dvořák");
    assert_eq!(parsed.as_array().unwrap().len(), 2);
}

#[test]
fn test_yaml_rendering() {
    let mut output = Vec::new();
    OutputFormat::Yaml
        .render(&HEADERS, &sample_rows(), &mut output)
        .unwrap();
    let parsed: Vec<std::collections::BTreeMap<String, String>> =
        serde_yaml::from_slice(&output).unwrap();
    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed[0]["password"], "fixed123");
    assert_eq!(parsed[1]["firstname"], "Jan");
}

#[test]
fn test_csv_rendering() {
    let mut output = Vec::new();
    OutputFormat::Csv
        .render(&HEADERS, &sample_rows(), &mut output)
        .unwrap();
    let text = String::from_utf8(output).unwrap();
    assert_eq!(
        text,
        "email,password,firstname,lastname\n\
         anna.novak@example.com,fixed123,Anna,Novák\n\
         jan@example.org,x,Jan,Dvořák\n"
    );
}

// --- configuration ---

#[test]
fn test_config_defaults() {
    let config = Config::load(None).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.batch_size, 1000);
    assert_eq!(config.password_length, 8);
    assert_eq!(config.region_policy().fallback_for("CZ"), RegionFallback::Suppress);
    assert_eq!(config.password_hashing().unwrap(), PasswordHashing::default());
}

#[test]
fn test_config_password_hashing_cost() {
    let config = Config::from_toml("hash_memory_kib = 64\nhash_iterations = 1\n").unwrap();
    let hashing = config.password_hashing().unwrap();
    assert_eq!(hashing.memory_kib(), 64);
    assert_eq!(hashing.iterations(), 1);

    assert!(matches!(
        Config::from_toml("hash_memory_kib = 1"),
        Err(DummyError::InvalidParameter(_))
    ));
    assert!(matches!(
        Config::from_toml("hash_iterations = 0"),
        Err(DummyError::InvalidParameter(_))
    ));
}

#[test]
fn test_config_from_toml() {
    let config = Config::from_toml(
        r#"
data_file = "var/customers.json"
batch_size = 250

[region_policy]
SK = "suppress"
PL = "use_raw"
"#,
    )
    .unwrap();
    assert_eq!(config.data_file, std::path::PathBuf::from("var/customers.json"));
    assert_eq!(config.batch_size, 250);
    assert_eq!(config.password_length, 8);
    let policy = config.region_policy();
    assert_eq!(policy.fallback_for("SK"), RegionFallback::Suppress);
    assert_eq!(policy.fallback_for("PL"), RegionFallback::UseRaw);
    assert_eq!(policy.fallback_for("BG"), RegionFallback::Suppress);
}

#[test]
fn test_config_rejects_bad_values() {
    assert!(matches!(
        Config::from_toml("batch_size = 0"),
        Err(DummyError::InvalidParameter(_))
    ));
    assert!(matches!(
        Config::from_toml("colour = \"blue\""),
        Err(DummyError::Config(_))
    ));
    assert!(matches!(
        Config::from_toml("[region_policy]\nCZ = \"maybe\""),
        Err(DummyError::Config(_))
    ));
}

#[test]
fn test_config_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "password_length = 12\n").unwrap();
    let config = Config::load(Some(&path)).unwrap();
    assert_eq!(config.password_length, 12);

    let missing = dir.path().join("missing.toml");
    assert!(matches!(Config::load(Some(&missing)), Err(DummyError::Io(_))));
}
