//! Termination through a substituted process

use exitpolicy::codes;
use exitpolicy::error::{CodedError, HelpRequested, Message};
use exitpolicy::resolver::Resolver;
use exitpolicy::system::MockProcess;
use serial_test::serial;
use std::io;

#[test]
fn test_terminate_cases() {
    let process = MockProcess::new();
    let resolver = Resolver::new();

    resolver.terminate(&process, None);
    resolver.terminate(&process, Some(&io::Error::other("error")));
    resolver.terminate(&process, Some(&CodedError::new(127, io::Error::other("error"))));
    resolver.terminate(
        &process,
        Some(&Message::with_source(
            "wrapped",
            CodedError::new(127, io::Error::other("error")),
        )),
    );
    resolver.terminate(&process, Some(&HelpRequested));

    assert_eq!(process.codes(), vec![0, 1, 127, 127, 2]);
}

#[test]
fn test_terminate_with_handler() {
    let process = MockProcess::new();
    let resolver = Resolver::new().with_handler(|err| err.is::<io::Error>().then_some(codes::IOERR));

    resolver.terminate(&process, Some(&io::Error::other("disk full")));
    resolver.terminate(&process, None);

    assert_eq!(process.codes(), vec![codes::IOERR, codes::OK]);
}

#[test]
#[serial]
fn test_process_wide_terminate() {
    let process = MockProcess::new();

    exitpolicy::terminate(&process, Some(&CodedError::new(codes::NOHOST, io::Error::other("dns"))));
    assert_eq!(process.last_code(), Some(codes::NOHOST));
}
