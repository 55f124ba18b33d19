use thiserror::Error;

#[derive(Error, Debug)]
pub enum HumanizeError {
    #[error("Not a valid date string: {input:?}")]
    InvalidInput { input: String },

    #[error("Max number of units should be between 1 and 6, got {value}")]
    InvalidArgument { value: usize },

    #[error("Unsupported locale {locale:?}, supported locales are ({supported})")]
    UnsupportedLocale { locale: String, supported: String },

    #[error("Locale table error: {message}")]
    Table { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, HumanizeError>;
