//! Platform-appropriate [`store::Preferences`].
//!
//! - **Web** (WASM + `web` feature): `window.localStorage`
//! - **Native**: process memory, so the theme resets on restart

pub fn make_preferences() -> impl store::Preferences {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStoragePreferences::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        store::MemoryPreferences::new()
    }
}
