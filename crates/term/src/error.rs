use thiserror::Error;

/// Fatal problems with the host terminal, reported once at startup.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("stdout is not a terminal")]
    NotATerminal,
    #[error("failed to query terminal size: {0}")]
    Size(#[source] std::io::Error),
    #[error("terminal too small: {width}x{height} cells (need at least {min_width}x{min_height})")]
    TooSmall {
        width: u16,
        height: u16,
        min_width: u16,
        min_height: u16,
    },
}
