//! Infrastructure layer: file-system storage and OS host-name lookup.
//!
//! **Dependency rule**: this layer may depend on `domain`, but MUST NOT be
//! imported by the domain layer.
//!
//! Exception: the `application` use cases call the storage functions and
//! default to [`host::SystemHostName`] directly.  There is no alternative
//! storage backend, so no storage port is declared; the host-name lookup is
//! the one seam, expressed as `application::HostNameSource` with `_with`
//! variants taking any implementation.

pub mod host;
pub mod storage;
