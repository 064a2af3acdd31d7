use std::env;

#[derive(Debug)]
pub enum EnvError {
    InvalidName(&'static str),
    InvalidValue(&'static str),
}

impl std::fmt::Display for EnvError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnvError::InvalidName(msg) => write!(f, "invalid variable name: {}", msg),
            EnvError::InvalidValue(msg) => write!(f, "invalid variable value: {}", msg),
        }
    }
}

impl std::error::Error for EnvError {}

/// Thin wrapper over the process environment. Variables set here are visible
/// to every later expansion and inherited by spawned children.
#[derive(Clone, Copy, Debug, Default)]
pub struct EnvStore;

impl EnvStore {
    pub fn new() -> Self {
        Self
    }

    pub fn get(&self, name: &str) -> Option<String> {
        env::var(name).ok()
    }

    pub fn set(&self, name: &str, value: &str) -> Result<(), EnvError> {
        Self::check_name(name)?;
        if value.contains('\0') {
            return Err(EnvError::InvalidValue("value contains NUL"));
        }

        env::set_var(name, value);
        Ok(())
    }

    pub fn unset(&self, name: &str) -> Result<(), EnvError> {
        Self::check_name(name)?;
        env::remove_var(name);
        Ok(())
    }

    // set_var panics on these, so they surface as errors instead.
    fn check_name(name: &str) -> Result<(), EnvError> {
        if name.is_empty() {
            return Err(EnvError::InvalidName("empty variable name"));
        }
        if name.contains('=') {
            return Err(EnvError::InvalidName("name contains '='"));
        }
        if name.contains('\0') {
            return Err(EnvError::InvalidName("name contains NUL"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() -> Result<(), EnvError> {
        let store = EnvStore::new();
        store.set("MYSHELL_ENV_TEST", "value")?;
        assert_eq!(store.get("MYSHELL_ENV_TEST").unwrap(), "value");
        Ok(())
    }

    #[test]
    fn test_unset() -> Result<(), EnvError> {
        let store = EnvStore::new();
        store.set("MYSHELL_ENV_UNSET", "value")?;
        store.unset("MYSHELL_ENV_UNSET")?;
        assert!(store.get("MYSHELL_ENV_UNSET").is_none());
        Ok(())
    }

    #[test]
    fn test_get_undefined() {
        let store = EnvStore::new();
        assert!(store.get("MYSHELL_ENV_NEVER_SET").is_none());
    }

    #[test]
    fn test_invalid_names() {
        let store = EnvStore::new();
        assert!(matches!(store.set("", "v"), Err(EnvError::InvalidName(_))));
        assert!(matches!(
            store.set("A=B", "v"),
            Err(EnvError::InvalidName(_))
        ));
        assert!(matches!(store.unset(""), Err(EnvError::InvalidName(_))));
    }

    #[test]
    fn test_invalid_value() {
        let store = EnvStore::new();
        assert!(matches!(
            store.set("MYSHELL_ENV_NUL", "a\0b"),
            Err(EnvError::InvalidValue(_))
        ));
    }
}
