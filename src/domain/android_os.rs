use super::operating_system::OperatingSystem;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AndroidOs;

impl OperatingSystem for AndroidOs {
    fn name(&self) -> &str {
        "Android OS"
    }

    fn app_store(&self) -> &str {
        "Google Play Store"
    }
}
