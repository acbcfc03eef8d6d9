mod android_os;
mod apple;
mod console;
mod ios;
mod operating_system;
mod samsung;
mod smartphone;

pub use android_os::AndroidOs;
pub use apple::Apple;
pub use console::{Console, ConsoleError};
pub use ios::Ios;
pub use operating_system::OperatingSystem;
pub use samsung::Samsung;
pub use smartphone::Smartphone;
