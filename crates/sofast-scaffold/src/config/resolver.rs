//! Configuration resolution: explicit flag values merged with prompt answers

use super::{derive_title, is_valid_package_name, Config, Framework};
use crate::error::ScaffoldError;
use anyhow::Result;

/// Name suggested when the user submits an empty name prompt
pub const DEFAULT_NAME: &str = "sofast-plugin";

/// Raw values supplied up front (CLI flags); `None` means "ask"
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub name: Option<String>,
    pub typescript: Option<bool>,
    pub framework: Option<String>,
    pub title: Option<String>,
    pub tailwind: Option<bool>,
}

/// Interactive provider for configuration fields
///
/// Implementations may suspend awaiting user input. Cancellation surfaces as
/// `ScaffoldError::Cancelled` and aborts resolution, which runs before any
/// filesystem write.
pub trait Answers {
    /// Ask for the package/directory name; empty input means "use the default"
    fn name(&mut self) -> Result<String>;

    fn use_typescript(&mut self) -> Result<bool>;

    fn framework(&mut self) -> Result<Framework>;

    /// Ask for a display title, offering `suggested` as the default
    fn title(&mut self, suggested: &str) -> Result<String>;

    fn use_tailwind(&mut self) -> Result<bool>;
}

/// Merge explicit values and prompt answers into a validated `Config`
///
/// Explicit values are validated before the first prompt, so a malformed flag
/// fails without any interaction. Missing fields are prompted in order: name,
/// TypeScript, framework, title, Tailwind.
pub fn resolve(overrides: &Overrides, answers: &mut dyn Answers) -> Result<Config> {
    if let Some(name) = &overrides.name {
        if !is_valid_package_name(name) {
            return Err(ScaffoldError::InvalidName(name.clone()).into());
        }
    }
    let framework_override = match &overrides.framework {
        Some(token) => Some(Framework::parse(token)?),
        None => None,
    };

    let name = match &overrides.name {
        Some(name) => name.clone(),
        None => {
            let answered = answers.name()?;
            let answered = if answered.is_empty() {
                DEFAULT_NAME.to_string()
            } else {
                answered
            };
            if !is_valid_package_name(&answered) {
                return Err(ScaffoldError::InvalidName(answered).into());
            }
            answered
        }
    };

    let typescript = match overrides.typescript {
        Some(value) => value,
        None => answers.use_typescript()?,
    };

    let framework = match framework_override {
        Some(framework) => framework,
        None => answers.framework()?,
    };

    let derived = derive_title(&name);
    let title = match &overrides.title {
        Some(title) if !title.is_empty() => title.clone(),
        _ => {
            let answered = answers.title(&derived)?;
            if answered.is_empty() {
                derived
            } else {
                answered
            }
        }
    };

    let tailwind = match overrides.tailwind {
        Some(value) => value,
        None => answers.use_tailwind()?,
    };

    Ok(Config {
        name,
        typescript,
        framework,
        title,
        tailwind,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Scripted provider; panics on any field it was not given an answer for
    #[derive(Default)]
    struct Scripted {
        name: Option<String>,
        typescript: Option<bool>,
        framework: Option<Framework>,
        title: Option<String>,
        tailwind: Option<bool>,
        suggested_title: Option<String>,
    }

    impl Answers for Scripted {
        fn name(&mut self) -> Result<String> {
            Ok(self.name.take().expect("unexpected name prompt"))
        }

        fn use_typescript(&mut self) -> Result<bool> {
            Ok(self.typescript.take().expect("unexpected ts prompt"))
        }

        fn framework(&mut self) -> Result<Framework> {
            Ok(self.framework.take().expect("unexpected framework prompt"))
        }

        fn title(&mut self, suggested: &str) -> Result<String> {
            self.suggested_title = Some(suggested.to_string());
            Ok(self.title.take().expect("unexpected title prompt"))
        }

        fn use_tailwind(&mut self) -> Result<bool> {
            Ok(self.tailwind.take().expect("unexpected tailwind prompt"))
        }
    }

    /// Provider that fails the test if any prompt fires
    struct NoPrompts;

    impl Answers for NoPrompts {
        fn name(&mut self) -> Result<String> {
            panic!("prompted for name");
        }

        fn use_typescript(&mut self) -> Result<bool> {
            panic!("prompted for typescript");
        }

        fn framework(&mut self) -> Result<Framework> {
            panic!("prompted for framework");
        }

        fn title(&mut self, _suggested: &str) -> Result<String> {
            panic!("prompted for title");
        }

        fn use_tailwind(&mut self) -> Result<bool> {
            panic!("prompted for tailwind");
        }
    }

    /// Provider that cancels on the first prompt
    struct CancelsImmediately;

    impl Answers for CancelsImmediately {
        fn name(&mut self) -> Result<String> {
            Err(ScaffoldError::Cancelled.into())
        }

        fn use_typescript(&mut self) -> Result<bool> {
            Err(ScaffoldError::Cancelled.into())
        }

        fn framework(&mut self) -> Result<Framework> {
            Err(ScaffoldError::Cancelled.into())
        }

        fn title(&mut self, _suggested: &str) -> Result<String> {
            Err(ScaffoldError::Cancelled.into())
        }

        fn use_tailwind(&mut self) -> Result<bool> {
            Err(ScaffoldError::Cancelled.into())
        }
    }

    fn all_explicit() -> Overrides {
        Overrides {
            name: Some("demo".to_string()),
            typescript: Some(true),
            framework: Some("react".to_string()),
            title: Some("Demo".to_string()),
            tailwind: Some(false),
        }
    }

    #[test]
    fn test_explicit_values_skip_all_prompts() {
        let config = resolve(&all_explicit(), &mut NoPrompts).unwrap();
        assert_eq!(config.name, "demo");
        assert!(config.typescript);
        assert_eq!(config.framework, Framework::React);
        assert_eq!(config.title, "Demo");
        assert!(!config.tailwind);
    }

    #[test]
    fn test_malformed_name_fails_before_any_prompt() {
        let overrides = Overrides {
            name: Some("My Plugin".to_string()),
            ..Overrides::default()
        };
        let err = resolve(&overrides, &mut NoPrompts).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ScaffoldError>(),
            Some(ScaffoldError::InvalidName(_))
        ));
    }

    #[test]
    fn test_unknown_framework_fails_before_any_prompt() {
        let overrides = Overrides {
            framework: Some("svelte".to_string()),
            ..Overrides::default()
        };
        let err = resolve(&overrides, &mut NoPrompts).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ScaffoldError>(),
            Some(ScaffoldError::UnknownFramework(_))
        ));
    }

    #[test]
    fn test_missing_fields_are_prompted() {
        let overrides = Overrides {
            name: Some("my-cool_plugin.thing".to_string()),
            typescript: Some(false),
            ..Overrides::default()
        };
        let mut answers = Scripted {
            framework: Some(Framework::Vue),
            title: Some(String::new()),
            tailwind: Some(true),
            ..Scripted::default()
        };
        let config = resolve(&overrides, &mut answers).unwrap();
        assert_eq!(config.framework, Framework::Vue);
        // Empty title answer falls back to the derived suggestion
        assert_eq!(config.title, "My Cool Plugin Thing");
        assert_eq!(
            answers.suggested_title.as_deref(),
            Some("My Cool Plugin Thing")
        );
        assert!(config.tailwind);
    }

    #[test]
    fn test_empty_name_answer_falls_back_to_default() {
        let overrides = Overrides {
            typescript: Some(true),
            framework: Some("empty".to_string()),
            title: Some("Demo".to_string()),
            tailwind: Some(false),
            ..Overrides::default()
        };
        let mut answers = Scripted {
            name: Some(String::new()),
            ..Scripted::default()
        };
        let config = resolve(&overrides, &mut answers).unwrap();
        assert_eq!(config.name, DEFAULT_NAME);
    }

    #[test]
    fn test_invalid_prompted_name_is_rejected() {
        let overrides = Overrides {
            typescript: Some(true),
            framework: Some("empty".to_string()),
            title: Some("Demo".to_string()),
            tailwind: Some(false),
            ..Overrides::default()
        };
        let mut answers = Scripted {
            name: Some("-leading".to_string()),
            ..Scripted::default()
        };
        let err = resolve(&overrides, &mut answers).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ScaffoldError>(),
            Some(ScaffoldError::InvalidName(_))
        ));
    }

    #[test]
    fn test_cancellation_aborts_resolution() {
        let err = resolve(&Overrides::default(), &mut CancelsImmediately).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ScaffoldError>(),
            Some(ScaffoldError::Cancelled)
        ));
    }

    #[test]
    fn test_explicit_empty_title_is_prompted() {
        let overrides = Overrides {
            name: Some("demo".to_string()),
            typescript: Some(true),
            framework: Some("react".to_string()),
            title: Some(String::new()),
            tailwind: Some(false),
        };
        let mut answers = Scripted {
            title: Some("Custom".to_string()),
            ..Scripted::default()
        };
        let config = resolve(&overrides, &mut answers).unwrap();
        assert_eq!(config.title, "Custom");
    }
}
