// Errors only come from the shell around the canvas: the window and the
// command line. Drawing itself never fails.

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Creating the window failed
    #[error("window init error: {0}")]
    WindowInit(String),
    /// Updating the window buffer failed
    #[error("window update error: {0}")]
    WindowUpdate(String),
    /// A command-line value was unusable
    #[error("invalid configuration: {0}")]
    Config(String),
}
