// Every variant states *where* things went wrong.
// Input dispatch and rendering are total, so only the window can fail.

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("window init error: {0}")]
    WindowInit(String), // Creating the window failed
    #[error("window update error: {0}")]
    WindowUpdate(String), // Updating the window buffer failed
}
