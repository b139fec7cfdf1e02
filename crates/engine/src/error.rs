//! Errors surfaced by the driver.

/// Why a player could not produce a direction
#[derive(Debug, derive_more::Display)]
pub enum PlayError {
    /// The player will never produce another move; the game must end
    #[display("no more possible moves")]
    NoMove,

    /// The input device failed
    #[display("player input failed: {_0}")]
    Input(anyhow::Error),
}

impl std::error::Error for PlayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlayError::NoMove => None,
            PlayError::Input(e) => Some(e.as_ref()),
        }
    }
}
