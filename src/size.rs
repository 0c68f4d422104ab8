//! Byte-Size Capability
//!
//! The cache charges every resident entry `key.byte_size() + value.byte_size()`
//! against its byte budget. Any type that can report its own size implements
//! [`ByteSize`]; there is no common base type.
//!
//! The unit does not have to be bytes. An application may return any cost unit
//! (e.g., pooled buffers, weighted tokens) as long as keys and values agree on it
//! and the configured `max_bytes` is expressed in the same unit.
//!
//! # Examples
//!
//! ```
//! use sized_lru::ByteSize;
//!
//! struct Blob {
//!     data: Vec<u8>,
//! }
//!
//! impl ByteSize for Blob {
//!     fn byte_size(&self) -> usize {
//!         self.data.len()
//!     }
//! }
//!
//! assert_eq!(Blob { data: vec![0; 16] }.byte_size(), 16);
//! assert_eq!("hello".byte_size(), 5);
//! ```

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

/// A value that can report how much of the cache budget it occupies.
///
/// The returned size must stay stable while the value is resident. The cache
/// records the charge at insertion time and releases exactly that amount when
/// the entry leaves, so a value whose size changes through interior mutability
/// is accounted at the size it had when it was inserted.
pub trait ByteSize {
    /// Returns the size of this value in bytes (or an application-defined unit).
    fn byte_size(&self) -> usize;
}

impl ByteSize for str {
    #[inline]
    fn byte_size(&self) -> usize {
        self.len()
    }
}

impl ByteSize for String {
    #[inline]
    fn byte_size(&self) -> usize {
        self.len()
    }
}

impl ByteSize for [u8] {
    #[inline]
    fn byte_size(&self) -> usize {
        self.len()
    }
}

impl ByteSize for Vec<u8> {
    #[inline]
    fn byte_size(&self) -> usize {
        self.len()
    }
}

impl<const N: usize> ByteSize for [u8; N] {
    #[inline]
    fn byte_size(&self) -> usize {
        N
    }
}

impl<T: ByteSize + ?Sized> ByteSize for &T {
    #[inline]
    fn byte_size(&self) -> usize {
        (**self).byte_size()
    }
}

impl<T: ByteSize + ?Sized> ByteSize for Box<T> {
    #[inline]
    fn byte_size(&self) -> usize {
        (**self).byte_size()
    }
}

// Shared handles report the size of the shared payload, not of the pointer.
impl<T: ByteSize + ?Sized> ByteSize for Rc<T> {
    #[inline]
    fn byte_size(&self) -> usize {
        (**self).byte_size()
    }
}

impl<T: ByteSize + ?Sized> ByteSize for Arc<T> {
    #[inline]
    fn byte_size(&self) -> usize {
        (**self).byte_size()
    }
}

#[cfg(feature = "std")]
mod std_impls {
    use super::ByteSize;
    use std::ffi::{OsStr, OsString};
    use std::path::{Path, PathBuf};

    impl ByteSize for OsStr {
        #[inline]
        fn byte_size(&self) -> usize {
            self.len()
        }
    }

    impl ByteSize for OsString {
        #[inline]
        fn byte_size(&self) -> usize {
            self.len()
        }
    }

    impl ByteSize for Path {
        #[inline]
        fn byte_size(&self) -> usize {
            self.as_os_str().len()
        }
    }

    impl ByteSize for PathBuf {
        #[inline]
        fn byte_size(&self) -> usize {
            self.as_os_str().len()
        }
    }
}
