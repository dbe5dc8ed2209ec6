use sleeper_core::session::Navigator;

/// Where logging out leaves you. There's no page to load in a terminal, so we
/// just say where you've ended up.
#[derive(Debug, Default, Clone, Copy)]
pub struct Landing;

impl Navigator for Landing {
    fn navigate(&self, location: &str) {
        tracing::info!(location, "landed");
        eprintln!("Logged out. Back to {location}.");
    }
}
