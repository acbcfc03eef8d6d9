use tracing::info;

use super::phone_factory::{Brand, PhoneFactory, PhoneFactoryError, Platform};
use crate::domain::{Console, ConsoleError, Smartphone};

pub struct ShowcaseSection {
    header: String,
    phone: Box<dyn Smartphone>,
    app_name: String,
}

impl ShowcaseSection {
    pub fn new(
        header: impl Into<String>,
        phone: Box<dyn Smartphone>,
        app_name: impl Into<String>,
    ) -> Self {
        Self {
            header: header.into(),
            phone,
            app_name: app_name.into(),
        }
    }

    fn present(&self, console: &dyn Console) -> Result<(), ConsoleError> {
        info!("presenting {}", self.phone.model());
        console.print_line(&self.header)?;
        self.phone.show_details(console)?;
        self.phone.start_phone(console)?;
        self.phone.download_app(&self.app_name, console)
    }
}

/// Walks every section in order, separating consecutive sections with a blank line.
pub struct Showcase {
    sections: Vec<ShowcaseSection>,
}

impl Showcase {
    pub fn new(sections: Vec<ShowcaseSection>) -> Self {
        Self { sections }
    }

    /// Samsung on Android installing YouTube, then an iPhone on iOS installing Instagram.
    pub fn standard() -> Result<Self, PhoneFactoryError> {
        let android = PhoneFactory::for_platform(Platform::Android);
        let ios = PhoneFactory::for_platform(Platform::Ios);

        Ok(Self::new(vec![
            ShowcaseSection::new(
                "=== Samsung Phone ===",
                android.build(Brand::Samsung)?,
                "YouTube",
            ),
            ShowcaseSection::new("=== iPhone ===", ios.build(Brand::Apple)?, "Instagram"),
        ]))
    }

    pub fn run(&self, console: &dyn Console) -> Result<(), ConsoleError> {
        for (index, section) in self.sections.iter().enumerate() {
            if index > 0 {
                console.print_line("")?;
            }
            section.present(console)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::io::ErrorKind;
    use std::sync::Arc;

    use tracing_test::traced_test;

    use super::{Showcase, ShowcaseSection};
    use crate::domain::{Console, ConsoleError, Ios, Samsung};
    use crate::infra::InMemoryConsole;

    /// Accepts writes until the `fail_on`-th one, which hits a broken pipe.
    struct BrokenPipeConsole {
        fail_on: usize,
        attempts: Cell<usize>,
        lines: RefCell<Vec<String>>,
    }

    impl BrokenPipeConsole {
        fn failing_on(fail_on: usize) -> Self {
            Self {
                fail_on,
                attempts: Cell::new(0),
                lines: RefCell::default(),
            }
        }
    }

    impl Console for BrokenPipeConsole {
        fn print_line(&self, line: &str) -> Result<(), ConsoleError> {
            self.attempts.set(self.attempts.get() + 1);
            if self.attempts.get() >= self.fail_on {
                return Err(std::io::Error::from(ErrorKind::BrokenPipe).into());
            }
            self.lines.borrow_mut().push(line.to_owned());
            Ok(())
        }
    }

    #[test]
    fn the_standard_lineup_prints_both_phones() {
        let console = InMemoryConsole::default();

        Showcase::standard().unwrap().run(&console).unwrap();

        assert_eq!(
            console.output(),
            "=== Samsung Phone ===\n\
             Samsung Galaxy Smartphone\n\
             Booting Android OS...\n\
             Installing YouTube from Google Play Store.\n\
             \n\
             === iPhone ===\n\
             Apple iPhone\n\
             Booting iOS...\n\
             Installing Instagram from the App Store.\n"
        );
    }

    #[test]
    fn a_single_section_has_no_leading_blank_line() {
        let console = InMemoryConsole::default();
        let showcase = Showcase::new(vec![ShowcaseSection::new(
            "=== Odd Pairing ===",
            Box::new(Samsung::new(Arc::new(Ios))),
            "Notes",
        )]);

        showcase.run(&console).unwrap();

        assert_eq!(
            console.lines(),
            vec![
                "=== Odd Pairing ===",
                "Samsung Galaxy Smartphone",
                "Booting iOS...",
                "Installing Notes from the App Store.",
            ]
        );
    }

    #[test]
    fn an_empty_showcase_prints_nothing() {
        let console = InMemoryConsole::default();

        Showcase::new(vec![]).run(&console).unwrap();

        assert!(console.lines().is_empty());
    }

    #[test]
    fn running_twice_prints_the_same_output() {
        let console = InMemoryConsole::default();
        let showcase = Showcase::standard().unwrap();

        showcase.run(&console).unwrap();
        let first = console.output();
        console.clear();
        showcase.run(&console).unwrap();

        assert_eq!(console.output(), first);
    }

    #[test]
    #[traced_test]
    fn it_logs_each_section() {
        let console = InMemoryConsole::default();

        Showcase::standard().unwrap().run(&console).unwrap();

        assert!(logs_contain("presenting Samsung Galaxy Smartphone"));
        assert!(logs_contain("presenting Apple iPhone"));
    }

    #[test]
    fn it_stops_at_the_first_failed_write() {
        let console = BrokenPipeConsole::failing_on(3);

        let result = Showcase::standard().unwrap().run(&console);

        assert!(matches!(result, Err(ConsoleError::Write(e)) if e.kind() == ErrorKind::BrokenPipe));
        assert_eq!(console.attempts.get(), 3);
        assert_eq!(
            *console.lines.borrow(),
            vec!["=== Samsung Phone ===", "Samsung Galaxy Smartphone"]
        );
    }

    #[test]
    fn a_failed_separator_ends_the_run() {
        let console = BrokenPipeConsole::failing_on(5);

        let result = Showcase::standard().unwrap().run(&console);

        assert!(result.is_err());
        assert_eq!(console.attempts.get(), 5);
        assert_eq!(console.lines.borrow().len(), 4);
    }
}
