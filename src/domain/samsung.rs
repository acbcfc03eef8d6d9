use std::sync::Arc;

use super::operating_system::OperatingSystem;
use super::smartphone::Smartphone;

pub struct Samsung {
    operating_system: Arc<dyn OperatingSystem>,
}

impl Samsung {
    pub fn new(operating_system: Arc<dyn OperatingSystem>) -> Self {
        Self { operating_system }
    }
}

impl Smartphone for Samsung {
    fn model(&self) -> &str {
        "Samsung Galaxy Smartphone"
    }

    fn operating_system(&self) -> &dyn OperatingSystem {
        self.operating_system.as_ref()
    }
}
