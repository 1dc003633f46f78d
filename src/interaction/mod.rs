//! Handling of caller interactions.
//!
//! Each submodule handles one kind of request, independent of the transport it arrived on.

pub mod ask;
