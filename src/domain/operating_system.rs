use tracing::debug;

use super::console::{Console, ConsoleError};

/// The implementation side of a phone: knows how to boot and where apps come from.
///
/// Variants only supply their display texts, the emitted line shapes are shared.
pub trait OperatingSystem: Send + Sync {
    fn name(&self) -> &str;

    fn app_store(&self) -> &str;

    fn boot(&self, console: &dyn Console) -> Result<(), ConsoleError> {
        debug!("booting {}", self.name());
        console.print_line(&format!("Booting {}...", self.name()))
    }

    /// The app name is printed as given, empty names included.
    fn install_app(&self, app_name: &str, console: &dyn Console) -> Result<(), ConsoleError> {
        debug!("installing {app_name:?} on {}", self.name());
        console.print_line(&format!("Installing {app_name} from {}.", self.app_store()))
    }
}
