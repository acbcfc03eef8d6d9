use std::sync::Arc;

use super::operating_system::OperatingSystem;
use super::smartphone::Smartphone;

pub struct Apple {
    operating_system: Arc<dyn OperatingSystem>,
}

impl Apple {
    pub fn new(operating_system: Arc<dyn OperatingSystem>) -> Self {
        Self { operating_system }
    }
}

impl Smartphone for Apple {
    fn model(&self) -> &str {
        "Apple iPhone"
    }

    fn operating_system(&self) -> &dyn OperatingSystem {
        self.operating_system.as_ref()
    }
}
