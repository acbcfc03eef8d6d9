mod phone_factory;
mod showcase;

pub use phone_factory::{Brand, PhoneFactory, PhoneFactoryError, Platform};
pub use showcase::{Showcase, ShowcaseSection};
