//! Walking an error's `source()` chain

use core::ptr;
use std::error::Error as StdError;
use std::io;

/// Links visited before a walk gives up
pub const MAX_CHAIN_DEPTH: usize = 256;

/// Iterator over an error and its causes, outermost first
///
/// An `io::Error` wrapping a custom payload is followed into that payload,
/// since `io::Error::source()` skips it.
///
/// Stops early when a link repeats (a cyclic `source()` implementation)
/// or after [`MAX_CHAIN_DEPTH`] links. A link repeats only if both its
/// address and its type match an earlier one; a wrapper and the field it
/// stores at offset zero share an address but not a type.
#[derive(Debug)]
pub struct Chain<'err> {
    next: Option<&'err (dyn StdError + 'static)>,
    seen: Vec<*const (dyn StdError + 'static)>,
}

/// Iterate over `err` and everything reachable through `source()`
#[must_use]
#[inline]
pub fn chain<'err>(err: &'err (dyn StdError + 'static)) -> Chain<'err> {
    Chain {
        next: Some(err),
        seen: Vec::new(),
    }
}

impl<'err> Iterator for Chain<'err> {
    type Item = &'err (dyn StdError + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let link = self.next.take()?;
        let raw = ptr::from_ref(link);

        // Full pointer comparison: data address and vtable
        let repeated = self.seen.iter().any(|seen| ptr::eq(*seen, raw));
        if repeated || self.seen.len() >= MAX_CHAIN_DEPTH {
            return None;
        }

        self.seen.push(raw);
        self.next = cause(link);
        Some(link)
    }
}

fn cause<'err>(link: &'err (dyn StdError + 'static)) -> Option<&'err (dyn StdError + 'static)> {
    match link.downcast_ref::<io::Error>().and_then(io::Error::get_ref) {
        Some(payload) => Some(payload as &(dyn StdError + 'static)),
        None => link.source(),
    }
}
