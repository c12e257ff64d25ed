//! Named exit codes
//!
//! Two generic codes plus the codes defined in `/usr/include/sysexits.h`
//! on *nix systems.

use serde::Serialize;

/// Successful termination
pub const OK: i32 = 0;

/// Generic failure
pub const ERR: i32 = 1;

/// Help was requested (e.g. `--help`) instead of running the command
pub const HELP: i32 = 2;

/// Command line usage error
pub const USAGE: i32 = 64;

/// Data format error
pub const DATAERR: i32 = 65;

/// Cannot open input
pub const NOINPUT: i32 = 66;

/// Addressee unknown
pub const NOUSER: i32 = 67;

/// Host name unknown
pub const NOHOST: i32 = 68;

/// Service unavailable
pub const UNAVAILABLE: i32 = 69;

/// Internal software error
pub const SOFTWARE: i32 = 70;

/// System error (e.g. can't fork)
pub const OSERR: i32 = 71;

/// Critical OS file missing
pub const OSFILE: i32 = 72;

/// Can't create (user) output file
pub const CANTCREAT: i32 = 73;

/// Input/output error
pub const IOERR: i32 = 74;

/// Temporary failure; user is invited to retry
pub const TEMPFAIL: i32 = 75;

/// Remote error in protocol
pub const PROTOCOL: i32 = 76;

/// Permission denied
pub const NOPERM: i32 = 77;

/// Configuration error
pub const CONFIG: i32 = 78;

/// A named exit code with a short description
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CodeInfo {
    /// Numeric exit status
    pub code: i32,
    /// Upper-case name without the `EX_` prefix, e.g. `"NOINPUT"`
    pub name: &'static str,
    /// One-line meaning, as in `sysexits.h`
    pub description: &'static str,
}

const fn info(code: i32, name: &'static str, description: &'static str) -> CodeInfo {
    CodeInfo {
        code,
        name,
        description,
    }
}

/// Every named exit code, in ascending order
pub const ALL: [CodeInfo; 18] = [
    info(OK, "OK", "successful termination"),
    info(ERR, "ERR", "generic failure"),
    info(HELP, "HELP", "help requested"),
    info(USAGE, "USAGE", "command line usage error"),
    info(DATAERR, "DATAERR", "data format error"),
    info(NOINPUT, "NOINPUT", "cannot open input"),
    info(NOUSER, "NOUSER", "addressee unknown"),
    info(NOHOST, "NOHOST", "host name unknown"),
    info(UNAVAILABLE, "UNAVAILABLE", "service unavailable"),
    info(SOFTWARE, "SOFTWARE", "internal software error"),
    info(OSERR, "OSERR", "system error (e.g., can't fork)"),
    info(OSFILE, "OSFILE", "critical OS file missing"),
    info(CANTCREAT, "CANTCREAT", "can't create (user) output file"),
    info(IOERR, "IOERR", "input/output error"),
    info(TEMPFAIL, "TEMPFAIL", "temp failure; user is invited to retry"),
    info(PROTOCOL, "PROTOCOL", "remote error in protocol"),
    info(NOPERM, "NOPERM", "permission denied"),
    info(CONFIG, "CONFIG", "configuration error"),
];

/// Look up the named entry for `code`
#[must_use]
#[inline]
pub fn lookup(code: i32) -> Option<&'static CodeInfo> {
    ALL.iter().find(|entry| entry.code == code)
}

/// Look up a code by its name, ignoring case and an optional `EX_` prefix
#[must_use]
pub fn by_name(name: &str) -> Option<&'static CodeInfo> {
    let upper = name.trim().to_uppercase();
    let bare = upper.strip_prefix("EX_").unwrap_or(&upper);
    ALL.iter().find(|entry| entry.name == bare)
}
