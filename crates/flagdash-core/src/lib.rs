pub mod catalog;
pub mod clock;
pub mod config;
pub mod session;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use crate::catalog::{FlagCatalog, FlagImage};
    use crate::session::Session;

    /// A tiny solid-white flag image for tests.
    pub fn solid_flag(width: u32, height: u32) -> FlagImage {
        FlagImage {
            width,
            height,
            rgba: vec![0xff; (width * height * 4) as usize],
        }
    }

    /// Catalog where every listed country resolves to a tiny test image.
    pub fn make_catalog(names: &[&str]) -> FlagCatalog {
        FlagCatalog::new(
            names
                .iter()
                .map(|name| (name.to_string(), Some(solid_flag(2, 1)))),
        )
    }

    /// Session over the given countries with a fixed RNG seed.
    pub fn make_session(names: &[&str], seed: u64) -> Session {
        Session::new(names.iter().map(|name| name.to_string()), seed)
    }
}
