//! Memory diagnostics wrapper
//!
//! The probed program can be launched indirectly through valgrind in full
//! leak-check mode, with any detected leak translated into a nonzero exit
//! code of the wrapper itself. At the probe layer a leak is then
//! indistinguishable from an ordinary crash.

use std::path::{Path, PathBuf};

pub const VALGRIND_PROGRAM: &str = "valgrind";

/// Diagnostics wrapper invocation prefixed before the probed command.
#[derive(Debug, Clone)]
pub struct DiagnosticsWrapper {
    pub program: String,
    pub args: Vec<String>,
}

impl Default for DiagnosticsWrapper {
    fn default() -> Self {
        Self {
            program: VALGRIND_PROGRAM.to_string(),
            args: vec!["--leak-check=full".to_string(), "--error-exitcode=1".to_string()],
        }
    }
}

impl DiagnosticsWrapper {
    /// Prefix this wrapper in front of `program` and its arguments.
    pub fn wrap(&self, program: &Path, args: &[String]) -> (PathBuf, Vec<String>) {
        let mut wrapped = self.args.clone();
        wrapped.push(program.to_string_lossy().into_owned());
        wrapped.extend_from_slice(args);
        (PathBuf::from(&self.program), wrapped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_wrapper_flags() {
        let wrapper = DiagnosticsWrapper::default();

        assert_eq!(wrapper.program, "valgrind");
        assert_eq!(wrapper.args, vec!["--leak-check=full", "--error-exitcode=1"]);
    }

    #[test]
    fn test_wrap_keeps_argument_order() {
        let wrapper = DiagnosticsWrapper::default();
        let args = vec!["-e".to_string(), "triangle".to_string()];

        let (program, wrapped) = wrapper.wrap(Path::new("/opt/sandbox"), &args);
        assert_eq!(program, PathBuf::from("valgrind"));
        assert_eq!(
            wrapped,
            vec!["--leak-check=full", "--error-exitcode=1", "/opt/sandbox", "-e", "triangle"]
        );
    }
}
