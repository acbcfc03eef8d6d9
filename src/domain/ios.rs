use super::operating_system::OperatingSystem;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Ios;

impl OperatingSystem for Ios {
    fn name(&self) -> &str {
        "iOS"
    }

    fn app_store(&self) -> &str {
        "the App Store"
    }
}
