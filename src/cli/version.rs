use std::io::{self, Write};

/// The `version` command.
///
/// Holds the version string it reports, so callers can substitute their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    version: String,
}

impl Version {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Write `Version: <version>` as a single line. Positional arguments are ignored.
    pub fn run<W: Write>(&self, out: &mut W, _args: &[String]) -> io::Result<()> {
        writeln!(out, "Version: {}", self.version)?;
        out.flush()
    }
}

impl Default for Version {
    fn default() -> Self {
        Self::new(crate::version::get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdout closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_writes_single_line() {
        let mut out = Vec::new();
        Version::new("v0.9.2").run(&mut out, &[]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Version: v0.9.2\n");
    }

    #[test]
    fn test_default_uses_build_version() {
        assert_eq!(Version::default().version(), crate::version::get());
    }

    #[test]
    fn test_write_failure_propagates() {
        let err = Version::new("v1").run(&mut BrokenPipe, &[]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
