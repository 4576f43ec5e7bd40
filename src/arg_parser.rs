//! Command-line argument parser
//!
//! The wrapper owns exactly one flag, `-conduit=VALUE`. Everything else is
//! forwarded to the compiler untouched and in its original order.

use std::{
    ffi::{OsStr, OsString},
    fmt,
};

use crate::{
    constants::{CONDUIT_FLAG_PREFIX, KNOWN_CONDUITS},
    error::Error,
};

/// A GASNet conduit name, e.g. `ibv` or `smp`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Conduit(String);

impl Conduit {
    pub fn new<S>(name: S) -> Self
    where
        S: Into<String>,
    {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    /// Name of the GASNet library built for this conduit in PAR mode
    pub fn library_name(&self) -> String {
        format!("gasnet-{}-par", self.0)
    }

    /// Linker flag selecting the conduit library
    pub fn link_flag(&self) -> String {
        format!("-l{}", self.library_name())
    }

    /// Returns `true` if the name is one of the conduits upstream GASNet ships.
    ///
    /// Unknown names are still forwarded; a site may build its own conduit.
    pub fn is_known(&self) -> bool {
        KNOWN_CONDUITS.contains(&self.0.as_str())
    }
}

impl fmt::Display for Conduit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extract the conduit value from a single token, if it is a conduit flag.
///
/// The value is everything after the first `=`, so `-conduit=a=b` yields
/// `a=b` and `-conduit=` yields an empty name. Tokens need not be UTF-8;
/// invalid bytes in the value are replaced with U+FFFD.
pub fn conduit_value(arg: &OsStr) -> Option<String> {
    arg.as_encoded_bytes()
        .strip_prefix(CONDUIT_FLAG_PREFIX.as_bytes())
        .map(|value| String::from_utf8_lossy(value).into_owned())
}

/// Wrapper argument information
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WrapperArgsInfo {
    input_args: Vec<OsString>,
    conduit: Option<Conduit>,
    conduit_index: Option<usize>,
    passthrough_args: Vec<OsString>,
}

impl WrapperArgsInfo {
    /// Scan the arguments once and split off the first conduit flag.
    ///
    /// Only the first `-conduit=` token is consumed. Any later one is
    /// forwarded to the compiler like every other argument.
    pub fn parse_args<S>(&mut self, args: &[S]) -> Result<&'_ mut Self, Error>
    where
        S: AsRef<OsStr>,
    {
        if args.is_empty() {
            return Err(Error::Usage);
        }

        self.input_args = args.iter().map(|x| x.as_ref().to_os_string()).collect();

        let first_match = self
            .input_args
            .iter()
            .enumerate()
            .find_map(|(i, arg)| conduit_value(arg).map(|value| (i, Conduit::new(value))));

        let (conduit_index, conduit) = match first_match {
            Some((i, conduit)) => (Some(i), Some(conduit)),
            None => (None, None),
        };

        self.passthrough_args = self
            .input_args
            .iter()
            .enumerate()
            .filter(|&(i, _)| Some(i) != conduit_index)
            .map(|(_, arg)| arg.clone())
            .collect();
        self.conduit_index = conduit_index;
        self.conduit = conduit;

        Ok(self)
    }

    pub fn input_args(&self) -> &Vec<OsString> {
        &self.input_args
    }

    /// The conduit given on the command line, if any
    pub fn conduit(&self) -> Option<&Conduit> {
        self.conduit.as_ref()
    }

    /// Position of the consumed conduit flag in the original arguments
    pub fn conduit_index(&self) -> Option<usize> {
        self.conduit_index
    }

    /// Arguments forwarded to the compiler, minus the consumed conduit flag
    pub fn passthrough_args(&self) -> &Vec<OsString> {
        &self.passthrough_args
    }

    /// The conduit from the command line, or `default` when none was given
    pub fn resolve_conduit(&self, default: &Conduit) -> Conduit {
        self.conduit.clone().unwrap_or_else(|| default.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> WrapperArgsInfo {
        let mut info = WrapperArgsInfo::default();
        info.parse_args(args).expect("parse failed");
        info
    }

    fn value(arg: &str) -> Option<String> {
        conduit_value(OsStr::new(arg))
    }

    #[test]
    fn test_conduit_value() {
        assert_eq!(value("-conduit=smp").as_deref(), Some("smp"));
        assert_eq!(value("-conduit=a=b").as_deref(), Some("a=b"));
        assert_eq!(value("-conduit=").as_deref(), Some(""));
        assert_eq!(value("-conduit"), None);
        assert_eq!(value("--conduit=smp"), None);
        assert_eq!(value("x-conduit=smp"), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_args_are_kept_verbatim() {
        use std::os::unix::ffi::OsStrExt;

        let source = OsStr::from_bytes(b"caf\xe9.cpp");
        let flag = OsStr::from_bytes(b"-conduit=sm\xffp");
        assert_eq!(conduit_value(source), None);
        assert_eq!(conduit_value(flag).as_deref(), Some("sm\u{fffd}p"));

        let mut info = WrapperArgsInfo::default();
        info.parse_args(&[source, OsStr::new("-O2"), flag]).unwrap();
        assert_eq!(info.conduit_index(), Some(2));
        assert_eq!(info.passthrough_args(), &vec![source.to_os_string(), "-O2".into()]);
    }

    #[test]
    fn test_conduit_library_name() {
        let conduit = Conduit::new("udp");
        assert_eq!(conduit.library_name(), "gasnet-udp-par");
        assert_eq!(conduit.link_flag(), "-lgasnet-udp-par");
        assert!(conduit.is_known());
        assert!(!Conduit::new("carrier-pigeon").is_known());
    }

    #[test]
    fn test_empty_args_is_usage_error() {
        let mut info = WrapperArgsInfo::default();
        let args: [&str; 0] = [];
        assert!(matches!(info.parse_args(&args), Err(Error::Usage)));
    }

    #[test]
    fn test_no_conduit_flag() {
        let info = parse(&["foo.cpp", "-O2"]);
        assert_eq!(info.conduit(), None);
        assert_eq!(info.conduit_index(), None);
        assert_eq!(info.passthrough_args(), &vec!["foo.cpp", "-O2"]);
        assert_eq!(info.resolve_conduit(&Conduit::new("ibv")).name(), "ibv");
    }

    #[test]
    fn test_conduit_flag_removed_in_place() {
        let info = parse(&["a.cpp", "-conduit=mpi", "-O2", "-o", "out"]);
        assert_eq!(info.conduit(), Some(&Conduit::new("mpi")));
        assert_eq!(info.conduit_index(), Some(1));
        assert_eq!(info.passthrough_args(), &vec!["a.cpp", "-O2", "-o", "out"]);
        assert_eq!(info.input_args().len(), 5);
    }

    #[test]
    fn test_conduit_flag_first_position() {
        let info = parse(&["-conduit=smp", "main.cpp"]);
        assert_eq!(info.conduit().map(Conduit::name), Some("smp"));
        assert_eq!(info.passthrough_args(), &vec!["main.cpp"]);
    }

    #[test]
    fn test_only_first_conduit_flag_is_consumed() {
        let info = parse(&["a.cpp", "-conduit=udp", "-g", "-conduit=smp", "-conduit=udp"]);
        assert_eq!(info.conduit().map(Conduit::name), Some("udp"));
        assert_eq!(info.conduit_index(), Some(1));
        assert_eq!(
            info.passthrough_args(),
            &vec!["a.cpp", "-g", "-conduit=smp", "-conduit=udp"]
        );
    }

    #[test]
    fn test_separate_token_form_is_not_recognized() {
        let info = parse(&["a.cpp", "-conduit", "smp"]);
        assert_eq!(info.conduit(), None);
        assert_eq!(info.passthrough_args(), &vec!["a.cpp", "-conduit", "smp"]);
    }

    #[test]
    fn test_only_conduit_flag() {
        let info = parse(&["-conduit=ibv"]);
        assert_eq!(info.conduit().map(Conduit::name), Some("ibv"));
        assert!(info.passthrough_args().is_empty());
    }
}
