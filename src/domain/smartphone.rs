use tracing::debug;

use super::console::{Console, ConsoleError};
use super::operating_system::OperatingSystem;

/// The abstraction side of the bridge.
///
/// A phone is bound to one operating system at construction and never rebound.
/// Only `show_details` belongs to the phone itself, everything else is
/// forwarded to the bound system.
pub trait Smartphone {
    fn model(&self) -> &str;

    fn operating_system(&self) -> &dyn OperatingSystem;

    fn show_details(&self, console: &dyn Console) -> Result<(), ConsoleError> {
        console.print_line(self.model())
    }

    fn start_phone(&self, console: &dyn Console) -> Result<(), ConsoleError> {
        debug!(
            "starting {} on {}",
            self.model(),
            self.operating_system().name()
        );
        self.operating_system().boot(console)
    }

    fn download_app(&self, app_name: &str, console: &dyn Console) -> Result<(), ConsoleError> {
        self.operating_system().install_app(app_name, console)
    }
}
