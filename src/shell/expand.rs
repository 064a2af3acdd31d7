use crate::core::env::EnvStore;

/// Rewrites the first `$NAME` occurrence in the line with the variable's
/// value (empty when undefined). The name is the run of alphanumeric or `_`
/// characters after the `$`; anything after the name is discarded, and the
/// scan never resumes the tail of the line. A line without `$` is returned
/// unchanged.
pub(crate) fn expand_first_variable(env: &EnvStore, input: &str) -> String {
    let dollar_pos = match input.find('$') {
        Some(pos) => pos,
        None => return input.to_string(),
    };

    let after = &input[dollar_pos + 1..];
    let name_end = after
        .find(|c: char| !c.is_alphanumeric() && c != '_')
        .unwrap_or(after.len());
    let name = &after[..name_end];

    let mut result = String::with_capacity(input.len());
    result.push_str(&input[..dollar_pos]);
    if let Some(value) = env.get(name) {
        result.push_str(&value);
    }
    result
}

pub(crate) trait VariableExpander {
    fn expand_variable(&self, input: &str) -> String;
}

impl VariableExpander for super::Shell {
    fn expand_variable(&self, input: &str) -> String {
        expand_first_variable(&self.session.env, input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_sigil_is_identity() {
        let env = EnvStore::new();
        assert_eq!(expand_first_variable(&env, "echo hi"), "echo hi");
    }

    #[test]
    fn test_tail_after_variable_is_dropped() {
        let env = EnvStore::new();
        env.set("MYSHELL_EXPAND_HOME", "/x").unwrap();
        assert_eq!(
            expand_first_variable(&env, "echo $MYSHELL_EXPAND_HOME world"),
            "echo /x"
        );
    }

    #[test]
    fn test_defined_variable_substituted() {
        let env = EnvStore::new();
        env.set("MYSHELL_EXPAND_FOO", "bar").unwrap();
        assert_eq!(expand_first_variable(&env, "$MYSHELL_EXPAND_FOO"), "bar");

        env.unset("MYSHELL_EXPAND_FOO").unwrap();
        assert_eq!(expand_first_variable(&env, "$MYSHELL_EXPAND_FOO"), "");
    }

    #[test]
    fn test_undefined_variable_expands_to_empty() {
        let env = EnvStore::new();
        assert_eq!(expand_first_variable(&env, "echo $MYSHELL_EXPAND_NONE"), "echo ");
    }

    #[test]
    fn test_trailing_sigil() {
        let env = EnvStore::new();
        assert_eq!(expand_first_variable(&env, "echo $"), "echo ");
    }

    #[test]
    fn test_only_first_sigil_considered() {
        let env = EnvStore::new();
        env.set("MYSHELL_EXPAND_A", "1").unwrap();
        env.set("MYSHELL_EXPAND_B", "2").unwrap();
        // The second variable is part of the dropped tail.
        assert_eq!(
            expand_first_variable(&env, "$MYSHELL_EXPAND_A $MYSHELL_EXPAND_B"),
            "1"
        );
    }
}
