use std::fmt::{Display, Formatter};
use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::domain::{AndroidOs, Apple, Ios, OperatingSystem, Samsung, Smartphone};

#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum Brand {
    Samsung,
    Apple,
}

impl Display for Brand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Brand::Samsung => "Samsung",
                Brand::Apple => "Apple",
            }
        )
    }
}

#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum Platform {
    Android,
    Ios,
}

impl Platform {
    pub fn operating_system(self) -> Arc<dyn OperatingSystem> {
        match self {
            Platform::Android => Arc::new(AndroidOs),
            Platform::Ios => Arc::new(Ios),
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PhoneFactoryError {
    #[error("no operating system was provided for the {0} smartphone")]
    OperatingSystemNotProvided(Brand),
}

/// Binds a single operating system into phones of any brand.
///
/// A factory without an operating system refuses to build, so a phone can never
/// exist without one.
#[derive(Clone)]
pub struct PhoneFactory {
    operating_system: Option<Arc<dyn OperatingSystem>>,
}

impl PhoneFactory {
    pub fn uninit() -> Self {
        Self {
            operating_system: None,
        }
    }

    pub fn for_platform(platform: Platform) -> Self {
        Self::uninit().with_operating_system(platform.operating_system())
    }

    pub fn with_operating_system(mut self, operating_system: Arc<dyn OperatingSystem>) -> Self {
        self.operating_system.replace(operating_system);
        self
    }

    pub fn is_initialized(&self) -> bool {
        self.operating_system.is_some()
    }

    pub fn build(&self, brand: Brand) -> Result<Box<dyn Smartphone>, PhoneFactoryError> {
        let Some(operating_system) = self.operating_system.clone() else {
            return Err(PhoneFactoryError::OperatingSystemNotProvided(brand));
        };

        debug!("binding the {brand} phone to {}", operating_system.name());

        Ok(match brand {
            Brand::Samsung => Box::new(Samsung::new(operating_system)),
            Brand::Apple => Box::new(Apple::new(operating_system)),
        })
    }
}
