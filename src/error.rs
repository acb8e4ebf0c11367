use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// No monitor could be found to cover
    #[error("Unable to get main screen")]
    NoPrimaryDisplay,

    /// Monitor enumeration or a monitor property query failed
    #[error("Display query failed: {0}")]
    Display(#[from] xcap::XCapError),

    /// The window or event loop could not be created
    #[error("Window error: {0}")]
    Window(#[from] druid::PlatformError),

    /// A `Selection:` line could not be read back
    #[error("Malformed selection: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, Error>;
