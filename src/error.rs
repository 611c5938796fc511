use thiserror::Error;

#[derive(Error, Debug)]
pub enum DummyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Invalid locale tag: {0}")]
    InvalidLocale(String),

    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),

    #[error("Unknown output format '{0}'. One of [{1}]")]
    UnknownFormat(String, String),

    #[error("Unknown website: {0}")]
    UnknownWebsite(String),

    #[error("Invalid website choice: {0}")]
    InvalidWebsiteChoice(String),

    #[error("No websites configured")]
    NoWebsites,

    #[error("No open transaction")]
    NoTransaction,

    #[error("A transaction is already open")]
    TransactionOpen,

    #[error("Customer {0} not found")]
    CustomerNotFound(u64),

    #[error("Customer {0} already exists in website {1}")]
    DuplicateCustomer(String, u32),

    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, DummyError>;
