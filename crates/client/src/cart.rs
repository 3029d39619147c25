//! File-backed cart persistence.
//!
//! The cart itself is a pure state container in `recircuit-core`; this
//! module is the persistence edge. Loads never fail: a missing file is a
//! fresh cart, and a corrupt payload is logged and discarded.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use recircuit_core::Cart;

/// Persists the cart as JSON at a fixed path.
pub struct CartStore {
    path: PathBuf,
}

impl CartStore {
    /// A store reading and writing `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the saved cart.
    ///
    /// Returns an empty cart when the file is missing or unreadable, and
    /// when the payload does not parse as a cart.
    #[must_use]
    pub fn load(&self) -> Cart {
        let payload = match fs::read_to_string(&self.path) {
            Ok(payload) => payload,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Cart::new(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to read cart");
                return Cart::new();
            }
        };

        match serde_json::from_str(&payload) {
            Ok(cart) => cart,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Discarding corrupt cart");
                Cart::new()
            }
        }
    }

    /// Save the cart, replacing any previous payload.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the write fails.
    pub fn save(&self, cart: &Cart) -> io::Result<()> {
        let payload = serde_json::to_string(cart)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(&self.path, payload)
    }
}
