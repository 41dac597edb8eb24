use std::time::Duration;

use crate::contact::SubmitMode;
use crate::content::PROFILE;
use crate::nav::HEADER_HEIGHT;

const FORM_ENDPOINT_BASE: &str = "https://formsubmit.co";

/// Site behaviour knobs, provided as context from the application root.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub header_height: f64,
    pub contact_mode: SubmitMode,
    pub loading_screen: bool,
    /// Delay before the page container fades in after mount.
    pub entrance_delay: Duration,
    /// Gap between consecutive sections in the entrance stagger.
    pub section_stagger: Duration,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            header_height: HEADER_HEIGHT,
            contact_mode: SubmitMode::default(),
            loading_screen: true,
            entrance_delay: Duration::from_millis(100),
            section_stagger: Duration::from_millis(200),
        }
    }
}

impl SiteConfig {
    /// Defaults, with the contact mode picked by `PORTFOLIO_CONTACT_MODE` at
    /// compile time so server and client agree.
    pub fn from_build_env() -> Self {
        Self::default().with_contact_setting(option_env!("PORTFOLIO_CONTACT_MODE"))
    }

    /// Unset or `simulated` keeps the simulated form, `remote` posts to the
    /// hosted form service, and an `https://` URL posts there instead.
    pub fn with_contact_setting(mut self, setting: Option<&str>) -> Self {
        match setting.map(str::trim) {
            Some(s) if s.eq_ignore_ascii_case("remote") => self.with_remote_contact(),
            Some(s) if s.starts_with("https://") => {
                self.contact_mode = SubmitMode::Remote {
                    endpoint: s.to_string(),
                    subject: remote_subject(),
                };
                self
            }
            _ => self,
        }
    }

    /// Posts the contact form to the hosted form service instead of simulating it.
    pub fn with_remote_contact(mut self) -> Self {
        self.contact_mode = SubmitMode::Remote {
            endpoint: format!("{FORM_ENDPOINT_BASE}/{}", PROFILE.email),
            subject: remote_subject(),
        };
        self
    }

    /// Transition delay for the `index`-th section of the page.
    pub fn section_delay_ms(&self, index: usize) -> u128 {
        self.section_stagger.as_millis() * (index as u128 + 1)
    }
}

fn remote_subject() -> String {
    format!("New message from {} portfolio", PROFILE.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_contact_targets_profile_email() {
        let config = SiteConfig::default().with_remote_contact();
        match config.contact_mode {
            SubmitMode::Remote { endpoint, subject } => {
                assert_eq!(endpoint, format!("https://formsubmit.co/{}", PROFILE.email));
                assert!(subject.contains(PROFILE.name));
            }
            other => panic!("expected remote mode, got {other:?}"),
        }
    }

    #[test]
    fn test_contact_setting_selects_mode() {
        assert_eq!(
            SiteConfig::default().with_contact_setting(None),
            SiteConfig::default()
        );
        assert_eq!(
            SiteConfig::default().with_contact_setting(Some("simulated")),
            SiteConfig::default()
        );
        assert_eq!(
            SiteConfig::default().with_contact_setting(Some(" Remote ")),
            SiteConfig::default().with_remote_contact()
        );

        let custom = SiteConfig::default().with_contact_setting(Some("https://forms.example.com/inbox"));
        match custom.contact_mode {
            SubmitMode::Remote { endpoint, subject } => {
                assert_eq!(endpoint, "https://forms.example.com/inbox");
                assert!(subject.contains(PROFILE.name));
            }
            other => panic!("expected remote mode, got {other:?}"),
        }
    }

    #[test]
    fn test_section_stagger() {
        let config = SiteConfig::default();
        assert_eq!(config.section_delay_ms(0), 200);
        assert_eq!(config.section_delay_ms(2), 600);
    }
}
