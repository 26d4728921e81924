//! Android toolchain validator
//!
//! Inspects the SDK collaborator's state plus the `ANDROID_HOME` environment
//! variable and reports the installation's health to the doctor. Every
//! failure state comes back as data in the result; this module never fails.

use std::env;

use droid_doctor_core::{DoctorValidator, ValidationMessage, ValidationResult, ValidationType};
use tracing::debug;

use crate::sdk::AndroidSdk;
use crate::ANDROID_HOME;

/// License acceptance state reported by the SDK manager.
///
/// Detection is not implemented yet; [`AndroidValidator::licenses_accepted`]
/// always reports `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LicensesAccepted {
    None,
    Some,
    All,
    Unknown,
}

/// Doctor validator for the Android SDK installation
pub struct AndroidValidator<S> {
    title: String,
    sdk: S,
}

impl<S: AndroidSdk> AndroidValidator<S> {
    pub fn new(sdk: S) -> Self {
        Self {
            title: "Android toolchain - develop for Android devices".to_string(),
            sdk,
        }
    }

    /// License acceptance check; detection is unimplemented.
    pub fn licenses_accepted(&self) -> LicensesAccepted {
        LicensesAccepted::Unknown
    }
}

impl<S: AndroidSdk> DoctorValidator for AndroidValidator<S> {
    fn title(&self) -> &str {
        &self.title
    }

    /// One validation pass over the collaborator's state.
    ///
    /// The message list is local to each call; repeated invocations never
    /// accumulate lines from earlier runs.
    fn validate(&self) -> ValidationResult {
        let mut messages = Vec::new();
        let android_home = env::var(ANDROID_HOME).ok();

        let directory = match self.sdk.directory() {
            Some(directory) => directory,
            None => {
                match &android_home {
                    Some(value) => messages.push(ValidationMessage::error(format!(
                        "{} = {}\nbut Android SDK not found at this location.",
                        ANDROID_HOME, value
                    ))),
                    None => messages.push(ValidationMessage::error(format!(
                        "Unable to locate Android SDK.\n\
                         Install Android Studio from: https://developer.android.com/studio\n\
                         On first launch it will assist you in installing the Android SDK \
                         components.\n\
                         If the Android SDK has been installed to a custom location, set {} \
                         to that location.",
                        ANDROID_HOME
                    ))),
                }
                return ValidationResult::new(ValidationType::Missing, messages);
            }
        };

        messages.push(ValidationMessage::info(format!(
            "Android SDK at {}",
            directory.display()
        )));

        let mut status_info = None;
        if let Some(version) = self.sdk.latest_version() {
            status_info = Some(format!("Android SDK {}", version.build_tools_version_name));
            messages.push(ValidationMessage::info(format!(
                "Platform {}, build-tools {}",
                version.platform_name, version.build_tools_version_name
            )));
        }

        if let Some(value) = &android_home {
            messages.push(ValidationMessage::info(format!(
                "{} = {}",
                ANDROID_HOME, value
            )));
        }

        let problems = self.sdk.validate_sdk_well_formed();
        if !problems.is_empty() {
            debug!("SDK well-formedness check found {} problem(s)", problems.len());
            for problem in problems {
                messages.push(ValidationMessage::error(problem));
            }
            messages.push(ValidationMessage::info(
                "Try re-installing or updating your Android SDK,\n\
                 visit https://developer.android.com/studio for detailed instructions.",
            ));
            return ValidationResult::with_status_info(ValidationType::Partial, messages, status_info);
        }

        // JDK and license checks would go here once implemented.
        ValidationResult::with_status_info(ValidationType::Installed, messages, status_info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sdk::SdkVersion;
    use std::path::{Path, PathBuf};
    use std::sync::{Mutex, MutexGuard, OnceLock};

    struct FakeSdk {
        directory: Option<PathBuf>,
        latest_version: Option<SdkVersion>,
        problems: Vec<String>,
    }

    impl FakeSdk {
        fn absent() -> Self {
            Self {
                directory: None,
                latest_version: None,
                problems: Vec::new(),
            }
        }

        fn at(directory: &str) -> Self {
            Self {
                directory: Some(PathBuf::from(directory)),
                latest_version: None,
                problems: Vec::new(),
            }
        }
    }

    impl AndroidSdk for FakeSdk {
        fn directory(&self) -> Option<&Path> {
            self.directory.as_deref()
        }

        fn latest_version(&self) -> Option<&SdkVersion> {
            self.latest_version.as_ref()
        }

        fn validate_sdk_well_formed(&self) -> Vec<String> {
            self.problems.clone()
        }
    }

    // Tests mutate ANDROID_HOME, which is process-global; serialize them.
    fn with_android_home<T>(value: Option<&str>, run: impl FnOnce() -> T) -> T {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        let _guard: MutexGuard<'_, ()> = LOCK
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let previous = env::var(ANDROID_HOME).ok();
        match value {
            Some(v) => env::set_var(ANDROID_HOME, v),
            None => env::remove_var(ANDROID_HOME),
        }
        let result = run();
        match previous {
            Some(v) => env::set_var(ANDROID_HOME, v),
            None => env::remove_var(ANDROID_HOME),
        }
        result
    }

    #[test]
    fn test_missing_sdk_without_android_home() {
        with_android_home(None, || {
            let validator = AndroidValidator::new(FakeSdk::absent());
            let result = validator.validate();

            assert_eq!(result.kind, ValidationType::Missing);
            assert!(result.status_info.is_none());
            assert_eq!(result.messages.len(), 1);
            assert!(result.messages[0].is_error);
            assert!(result.messages[0].text.contains("Unable to locate Android SDK"));
        });
    }

    #[test]
    fn test_missing_sdk_with_android_home_set() {
        with_android_home(Some("/opt/android-sdk"), || {
            let validator = AndroidValidator::new(FakeSdk::absent());
            let result = validator.validate();

            assert_eq!(result.kind, ValidationType::Missing);
            assert!(result.status_info.is_none());
            assert_eq!(result.messages.len(), 1);
            assert!(result.messages[0].is_error);
            assert!(result.messages[0].text.contains("/opt/android-sdk"));
        });
    }

    #[test]
    fn test_well_formed_sdk_is_installed() {
        with_android_home(None, || {
            let sdk = FakeSdk {
                latest_version: Some(SdkVersion {
                    platform_name: "Android 13".into(),
                    build_tools_version_name: "33.0.0".into(),
                }),
                ..FakeSdk::at("/sdk")
            };
            let validator = AndroidValidator::new(sdk);
            let result = validator.validate();

            assert_eq!(result.kind, ValidationType::Installed);
            assert_eq!(result.status_info.as_deref(), Some("Android SDK 33.0.0"));
            assert_eq!(result.messages.len(), 2);
            assert!(result.messages[0].text.contains("Android SDK at /sdk"));
            assert!(result.messages[1]
                .text
                .contains("Platform Android 13, build-tools 33.0.0"));
            assert!(!result.has_errors());
        });
    }

    #[test]
    fn test_broken_sdk_is_partial() {
        with_android_home(None, || {
            let sdk = FakeSdk {
                problems: vec!["missing platform-tools".into()],
                ..FakeSdk::at("/sdk")
            };
            let validator = AndroidValidator::new(sdk);
            let result = validator.validate();

            assert_eq!(result.kind, ValidationType::Partial);
            assert!(result.status_info.is_none());
            // SDK location line, one problem, one remediation line.
            assert_eq!(result.messages.len(), 3);
            assert!(result.messages[1].is_error);
            assert_eq!(result.messages[1].text, "missing platform-tools");
            assert!(result.messages[2].text.contains("re-installing or updating"));
        });
    }

    #[test]
    fn test_one_error_message_per_reported_problem() {
        with_android_home(Some("/sdk"), || {
            let sdk = FakeSdk {
                latest_version: Some(SdkVersion {
                    platform_name: "android-34".into(),
                    build_tools_version_name: "34.0.0".into(),
                }),
                problems: vec!["no adb".into(), "no sdkmanager".into()],
                ..FakeSdk::at("/sdk")
            };
            let validator = AndroidValidator::new(sdk);
            let result = validator.validate();

            assert_eq!(result.kind, ValidationType::Partial);
            assert_eq!(result.status_info.as_deref(), Some("Android SDK 34.0.0"));
            // Location, version, ANDROID_HOME echo, two problems, remediation.
            assert_eq!(result.messages.len(), 6);
            assert_eq!(
                result.messages.iter().filter(|m| m.is_error).count(),
                2
            );
            assert!(result.messages[2].text.contains("ANDROID_HOME = /sdk"));
        });
    }

    #[test]
    fn test_repeated_validation_does_not_accumulate_messages() {
        with_android_home(None, || {
            let validator = AndroidValidator::new(FakeSdk::at("/sdk"));
            let first = validator.validate();
            let second = validator.validate();

            assert_eq!(first.messages.len(), second.messages.len());
        });
    }

    #[test]
    fn test_licenses_accepted_is_unknown() {
        let validator = AndroidValidator::new(FakeSdk::absent());
        assert_eq!(validator.licenses_accepted(), LicensesAccepted::Unknown);
    }
}
